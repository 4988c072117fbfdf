//! Relays lifecycle events from the tenant-request topic to the broadcast
//! topic consumed by connected observers. Stateless fan-out: one inbound
//! event becomes exactly one outbound broadcast, unmodified.

use model_tenancy::{RequestEventStatus, TenantRequestEvent};
use rentwise_notify::{EventBus, RequestEventPublisher};
use tokio::sync::broadcast::{Receiver, error::RecvError};

/// Subscribes to the lifecycle topic on construction and forwards every
/// event to the outbound publisher until the inbound topic closes.
pub struct NotificationRelay<N> {
    events: Receiver<TenantRequestEvent>,
    outbound: N,
}

impl<N> NotificationRelay<N>
where
    N: RequestEventPublisher,
{
    pub fn new(inbound: &EventBus, outbound: N) -> Self {
        Self {
            events: inbound.subscribe(),
            outbound,
        }
    }

    /// Consumes the relay, forwarding events until the inbound topic
    /// closes. Intended to run as its own task.
    pub async fn run(mut self) {
        loop {
            match self.events.recv().await {
                Ok(event) => self.relay_event(event).await,
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "relay lagged behind the request topic");
                }
                Err(RecvError::Closed) => {
                    tracing::info!("request topic closed, stopping relay");
                    break;
                }
            }
        }
    }

    /// One inbound event, one outbound broadcast. A failed broadcast is
    /// logged and dropped; the lifecycle write it came from already
    /// committed.
    pub async fn relay_event(&self, event: TenantRequestEvent) {
        match event.status {
            RequestEventStatus::Created => {
                tracing::info!(
                    request_id = event.request_id,
                    requested_by_user_id = event.requested_by_user_id,
                    email = %event.email,
                    "new tenant request submitted"
                );
            }
            RequestEventStatus::Approved => {
                tracing::info!(
                    request_id = event.request_id,
                    requested_by_user_id = event.requested_by_user_id,
                    "tenant request approved"
                );
            }
            RequestEventStatus::Rejected => {
                tracing::info!(
                    request_id = event.request_id,
                    requested_by_user_id = event.requested_by_user_id,
                    "tenant request rejected"
                );
            }
        }

        if let Err(e) = self.outbound.publish(event).await {
            tracing::warn!(error = ?e, "failed to broadcast event to observers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentwise_notify::MockRequestEventPublisher;
    use std::time::Duration;

    fn event(request_id: i64, status: RequestEventStatus) -> TenantRequestEvent {
        TenantRequestEvent {
            event_id: uuid::Uuid::now_v7(),
            request_id,
            requested_by_user_id: 7,
            status,
            email: "jane@x.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            timestamp: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn relays_each_event_unmodified() {
        let inbound = EventBus::new("tenant.request.topic", 16);
        let broadcast = EventBus::new("dashboard.broadcast", 16);
        let mut observer = broadcast.subscribe();

        let relay = NotificationRelay::new(&inbound, broadcast.clone());
        tokio::spawn(relay.run());

        let sent = event(5, RequestEventStatus::Approved);
        inbound.publish(sent.clone()).await.unwrap();

        let received = tokio::time::timeout(Duration::from_secs(1), observer.recv())
            .await
            .expect("relay should forward within the timeout")
            .unwrap();

        assert_eq!(received.event_id, sent.event_id);
        assert_eq!(received.request_id, 5);
        assert_eq!(received.status, RequestEventStatus::Approved);
    }

    #[tokio::test]
    async fn one_inbound_event_means_one_outbound_broadcast() {
        let inbound = EventBus::new("tenant.request.topic", 16);

        let mut outbound = MockRequestEventPublisher::new();
        outbound
            .expect_publish()
            .withf(|e| e.request_id == 9)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let relay = NotificationRelay::new(&inbound, outbound);
        relay.relay_event(event(9, RequestEventStatus::Created)).await;
    }

    #[tokio::test]
    async fn a_failed_broadcast_is_swallowed() {
        let inbound = EventBus::new("tenant.request.topic", 16);

        let mut outbound = MockRequestEventPublisher::new();
        outbound
            .expect_publish()
            .times(1)
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("observer channel gone")) }));

        let relay = NotificationRelay::new(&inbound, outbound);
        // Must not panic or propagate.
        relay.relay_event(event(9, RequestEventStatus::Rejected)).await;
    }
}
