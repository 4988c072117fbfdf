use chrono::Utc;
use cool_asserts::assert_matches;
use model_tenancy::RequestEventStatus;
use rentwise_notify::MockRequestEventPublisher;

use crate::domain::ports::{MockTenantRequestStore, MockTenantStore};

use super::*;

fn new_request(email: &str) -> NewTenantRequest {
    NewTenantRequest {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone: Some("555-0100".to_string()),
        requested_by_user_id: 7,
    }
}

fn stored_request(id: i64, email: &str, status: RequestStatus) -> TenantRequest {
    TenantRequest {
        id,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone: Some("555-0100".to_string()),
        requested_by_user_id: 7,
        status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn stored_tenant(id: i64, email: &str) -> Tenant {
    Tenant {
        id,
        user_id: 7,
        property_id: None,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone: None,
        roommate_of: None,
        property_name: None,
    }
}

fn no_publisher() -> MockRequestEventPublisher {
    let mut publisher = MockRequestEventPublisher::new();
    publisher.expect_publish().times(0);
    publisher
}

#[tokio::test]
async fn create_request_persists_pending_and_publishes_created() {
    let mut tenants = MockTenantStore::new();
    tenants
        .expect_exists_by_email()
        .withf(|email| email == "jane@x.com")
        .times(1)
        .returning(|_| Box::pin(async { Ok(false) }));

    let mut requests = MockTenantRequestStore::new();
    requests
        .expect_list_by_status()
        .withf(|status| *status == RequestStatus::Pending)
        .times(1)
        .returning(|_| Box::pin(async { Ok(vec![]) }));
    requests
        .expect_create()
        .times(1)
        .returning(|_| Box::pin(async { Ok(stored_request(1, "jane@x.com", RequestStatus::Pending)) }));

    let mut publisher = MockRequestEventPublisher::new();
    publisher
        .expect_publish()
        .withf(|event| {
            event.status == RequestEventStatus::Created
                && event.request_id == 1
                && event.email == "jane@x.com"
        })
        .times(1)
        .returning(|_| Box::pin(async { Ok(()) }));

    let service = RequestLifecycleImpl::new(requests, tenants, publisher);
    let saved = service.create_request(new_request("jane@x.com")).await.unwrap();

    assert_eq!(saved.id, 1);
    assert_eq!(saved.status, RequestStatus::Pending);
}

#[tokio::test]
async fn create_request_fails_when_email_is_already_a_tenant() {
    let mut tenants = MockTenantStore::new();
    tenants
        .expect_exists_by_email()
        .times(1)
        .returning(|_| Box::pin(async { Ok(true) }));

    let mut requests = MockTenantRequestStore::new();
    requests.expect_create().times(0);

    let service = RequestLifecycleImpl::new(requests, tenants, no_publisher());
    let err = service
        .create_request(new_request("jane@x.com"))
        .await
        .unwrap_err();

    assert_matches!(err, TenancyError::DuplicateEmail);
}

#[tokio::test]
async fn create_request_fails_when_a_pending_request_exists_for_email() {
    let mut tenants = MockTenantStore::new();
    tenants
        .expect_exists_by_email()
        .times(1)
        .returning(|_| Box::pin(async { Ok(false) }));

    let mut requests = MockTenantRequestStore::new();
    requests.expect_list_by_status().times(1).returning(|_| {
        Box::pin(async { Ok(vec![stored_request(4, "JANE@X.COM", RequestStatus::Pending)]) })
    });
    requests.expect_create().times(0);

    let service = RequestLifecycleImpl::new(requests, tenants, no_publisher());
    let err = service
        .create_request(new_request("jane@x.com"))
        .await
        .unwrap_err();

    // The pending-email check is case-insensitive.
    assert_matches!(err, TenancyError::ConflictingRequest);
}

#[tokio::test]
async fn create_request_rejects_invalid_input_before_touching_stores() {
    let requests = MockTenantRequestStore::new();
    let tenants = MockTenantStore::new();

    let service = RequestLifecycleImpl::new(requests, tenants, no_publisher());
    let err = service
        .create_request(new_request("not-an-email"))
        .await
        .unwrap_err();

    assert_matches!(err, TenancyError::Validation(_));
}

#[tokio::test]
async fn create_request_succeeds_even_when_publish_fails() {
    let mut tenants = MockTenantStore::new();
    tenants
        .expect_exists_by_email()
        .times(1)
        .returning(|_| Box::pin(async { Ok(false) }));

    let mut requests = MockTenantRequestStore::new();
    requests
        .expect_list_by_status()
        .times(1)
        .returning(|_| Box::pin(async { Ok(vec![]) }));
    requests
        .expect_create()
        .times(1)
        .returning(|_| Box::pin(async { Ok(stored_request(1, "jane@x.com", RequestStatus::Pending)) }));

    let mut publisher = MockRequestEventPublisher::new();
    publisher
        .expect_publish()
        .times(1)
        .returning(|_| Box::pin(async { Err(anyhow::anyhow!("broker unreachable")) }));

    let service = RequestLifecycleImpl::new(requests, tenants, publisher);
    let saved = service.create_request(new_request("jane@x.com")).await.unwrap();

    assert_eq!(saved.status, RequestStatus::Pending);
}

#[tokio::test]
async fn approve_creates_tenant_marks_approved_and_publishes_once() {
    let mut requests = MockTenantRequestStore::new();
    requests
        .expect_get()
        .withf(|id| *id == 1)
        .times(1)
        .returning(|_| Box::pin(async { Ok(Some(stored_request(1, "jane@x.com", RequestStatus::Pending))) }));
    requests
        .expect_update_status()
        .withf(|id, status| *id == 1 && *status == RequestStatus::Approved)
        .times(1)
        .returning(|_, _| {
            Box::pin(async { Ok(Some(stored_request(1, "jane@x.com", RequestStatus::Approved))) })
        });

    let mut tenants = MockTenantStore::new();
    tenants
        .expect_exists_by_email()
        .times(1)
        .returning(|_| Box::pin(async { Ok(false) }));
    tenants
        .expect_create()
        .withf(|tenant| {
            tenant.email == "jane@x.com" && tenant.user_id == 7 && tenant.property_id.is_none()
        })
        .times(1)
        .returning(|_| Box::pin(async { Ok(stored_tenant(10, "jane@x.com")) }));

    let mut publisher = MockRequestEventPublisher::new();
    publisher
        .expect_publish()
        .withf(|event| event.status == RequestEventStatus::Approved && event.request_id == 1)
        .times(1)
        .returning(|_| Box::pin(async { Ok(()) }));

    let service = RequestLifecycleImpl::new(requests, tenants, publisher);
    let updated = service.approve_request(1).await.unwrap();

    assert_eq!(updated.status, RequestStatus::Approved);
}

#[tokio::test]
async fn approve_fails_on_missing_request() {
    let mut requests = MockTenantRequestStore::new();
    requests
        .expect_get()
        .times(1)
        .returning(|_| Box::pin(async { Ok(None) }));

    let tenants = MockTenantStore::new();

    let service = RequestLifecycleImpl::new(requests, tenants, no_publisher());
    let err = service.approve_request(42).await.unwrap_err();

    assert_matches!(err, TenancyError::NotFound(msg) => {
        assert!(msg.contains("42"));
    });
}

#[tokio::test]
async fn approve_fails_on_terminal_request_without_creating_a_second_tenant() {
    let mut requests = MockTenantRequestStore::new();
    requests
        .expect_get()
        .times(1)
        .returning(|_| Box::pin(async { Ok(Some(stored_request(1, "jane@x.com", RequestStatus::Approved))) }));
    requests.expect_update_status().times(0);

    let mut tenants = MockTenantStore::new();
    tenants.expect_create().times(0);

    let service = RequestLifecycleImpl::new(requests, tenants, no_publisher());
    let err = service.approve_request(1).await.unwrap_err();

    assert_matches!(err, TenancyError::InvalidTransition { action: "approved" });
}

#[tokio::test]
async fn reject_fails_on_already_rejected_request() {
    let mut requests = MockTenantRequestStore::new();
    requests
        .expect_get()
        .times(1)
        .returning(|_| Box::pin(async { Ok(Some(stored_request(1, "jane@x.com", RequestStatus::Rejected))) }));
    requests.expect_update_status().times(0);

    let service =
        RequestLifecycleImpl::new(requests, MockTenantStore::new(), no_publisher());
    let err = service.reject_request(1).await.unwrap_err();

    assert_matches!(err, TenancyError::InvalidTransition { action: "rejected" });
}

#[tokio::test]
async fn approve_recheck_catches_tenant_created_after_submission() {
    let mut requests = MockTenantRequestStore::new();
    requests
        .expect_get()
        .times(1)
        .returning(|_| Box::pin(async { Ok(Some(stored_request(1, "jane@x.com", RequestStatus::Pending))) }));
    // The request must stay pending: no status write happens.
    requests.expect_update_status().times(0);

    let mut tenants = MockTenantStore::new();
    tenants
        .expect_exists_by_email()
        .times(1)
        .returning(|_| Box::pin(async { Ok(true) }));
    tenants.expect_create().times(0);

    let service = RequestLifecycleImpl::new(requests, tenants, no_publisher());
    let err = service.approve_request(1).await.unwrap_err();

    assert_matches!(err, TenancyError::DuplicateEmail);
}

#[tokio::test]
async fn reject_marks_rejected_and_publishes() {
    let mut requests = MockTenantRequestStore::new();
    requests
        .expect_get()
        .times(1)
        .returning(|_| Box::pin(async { Ok(Some(stored_request(1, "jane@x.com", RequestStatus::Pending))) }));
    requests
        .expect_update_status()
        .withf(|id, status| *id == 1 && *status == RequestStatus::Rejected)
        .times(1)
        .returning(|_, _| {
            Box::pin(async { Ok(Some(stored_request(1, "jane@x.com", RequestStatus::Rejected))) })
        });

    let mut publisher = MockRequestEventPublisher::new();
    publisher
        .expect_publish()
        .withf(|event| event.status == RequestEventStatus::Rejected)
        .times(1)
        .returning(|_| Box::pin(async { Ok(()) }));

    let service = RequestLifecycleImpl::new(requests, MockTenantStore::new(), publisher);
    let updated = service.reject_request(1).await.unwrap();

    assert_eq!(updated.status, RequestStatus::Rejected);
}

#[tokio::test]
async fn assign_property_fails_when_tenant_is_missing() {
    let mut tenants = MockTenantStore::new();
    tenants
        .expect_set_property()
        .withf(|tenant_id, property_id| *tenant_id == 9 && *property_id == 42)
        .times(1)
        .returning(|_, _| Box::pin(async { Ok(None) }));

    let service =
        RequestLifecycleImpl::new(MockTenantRequestStore::new(), tenants, no_publisher());
    let err = service.assign_property(9, 42).await.unwrap_err();

    assert_matches!(err, TenancyError::NotFound(_));
}

#[tokio::test]
async fn assign_property_does_not_validate_the_property_id() {
    let mut tenants = MockTenantStore::new();
    tenants.expect_set_property().times(1).returning(|tenant_id, property_id| {
        Box::pin(async move {
            let mut tenant = stored_tenant(tenant_id, "jane@x.com");
            tenant.property_id = Some(property_id);
            Ok(Some(tenant))
        })
    });

    let service =
        RequestLifecycleImpl::new(MockTenantRequestStore::new(), tenants, no_publisher());
    // 404042 exists in no property list anywhere; assignment still sticks.
    let updated = service.assign_property(9, 404042).await.unwrap();

    assert_eq!(updated.property_id, Some(404042));
}

#[tokio::test]
async fn create_tenant_rejects_duplicate_email() {
    let mut tenants = MockTenantStore::new();
    tenants
        .expect_exists_by_email()
        .times(1)
        .returning(|_| Box::pin(async { Ok(true) }));
    tenants.expect_create().times(0);

    let service =
        RequestLifecycleImpl::new(MockTenantRequestStore::new(), tenants, no_publisher());
    let err = service
        .create_tenant(NewTenant {
            user_id: 7,
            property_id: None,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
        })
        .await
        .unwrap_err();

    assert_matches!(err, TenancyError::DuplicateEmail);
}
