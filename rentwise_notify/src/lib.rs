//! Fire-and-forget publish/subscribe for tenant-request lifecycle events.
//!
//! The tenancy service publishes on one topic; the dashboard relay consumes
//! it and re-publishes on a second topic for connected observers. Both
//! topics are [EventBus] instances. Publication is best-effort by contract:
//! a failed publish is logged by the caller and never fails the write that
//! triggered it.

use model_tenancy::TenantRequestEvent;
use tokio::sync::broadcast;

/// Default ring capacity for a topic. Slow observers past this lag are
/// dropped by the channel, not waited on.
pub const DEFAULT_TOPIC_CAPACITY: usize = 256;

/// Outbound side of the notification channel.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait RequestEventPublisher: Send + Sync + 'static {
    fn publish(
        &self,
        event: TenantRequestEvent,
    ) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}

/// An in-process topic over a bounded broadcast channel.
///
/// Each [EventBus::subscribe] hands out an independent receiver; publishing
/// with zero subscribers succeeds and drops the event.
#[derive(Clone, Debug)]
pub struct EventBus {
    sender: broadcast::Sender<TenantRequestEvent>,
    /// Topic name, for logs only.
    topic: &'static str,
}

impl EventBus {
    pub fn new(topic: &'static str, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender, topic }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TenantRequestEvent> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn send(&self, event: TenantRequestEvent) {
        match self.sender.send(event) {
            Ok(delivered) => {
                tracing::trace!(topic = self.topic, delivered, "published event");
            }
            // The only send failure on a broadcast channel is zero active
            // receivers; fire-and-forget treats that as a successful publish.
            Err(_) => {
                tracing::trace!(topic = self.topic, "published event with no subscribers");
            }
        }
    }
}

impl RequestEventPublisher for EventBus {
    async fn publish(&self, event: TenantRequestEvent) -> anyhow::Result<()> {
        self.send(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_tenancy::RequestEventStatus;

    fn event(request_id: i64) -> TenantRequestEvent {
        TenantRequestEvent {
            event_id: uuid::Uuid::now_v7(),
            request_id,
            requested_by_user_id: 7,
            status: RequestEventStatus::Created,
            email: "jane@x.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            timestamp: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn publish_with_no_subscribers_succeeds() {
        let bus = EventBus::new("test", 8);
        bus.publish(event(1)).await.unwrap();
    }

    #[tokio::test]
    async fn every_subscriber_receives_every_event() {
        let bus = EventBus::new("test", 8);
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish(event(1)).await.unwrap();
        bus.publish(event(2)).await.unwrap();

        assert_eq!(first.recv().await.unwrap().request_id, 1);
        assert_eq!(first.recv().await.unwrap().request_id, 2);
        assert_eq!(second.recv().await.unwrap().request_id, 1);
        assert_eq!(second.recv().await.unwrap().request_id, 2);
    }

    #[tokio::test]
    async fn late_subscriber_only_sees_later_events() {
        let bus = EventBus::new("test", 8);
        bus.publish(event(1)).await.unwrap();

        let mut late = bus.subscribe();
        bus.publish(event(2)).await.unwrap();

        assert_eq!(late.recv().await.unwrap().request_id, 2);
    }
}
