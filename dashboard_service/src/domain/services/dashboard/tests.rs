use cool_asserts::assert_matches;
use model_tenancy::{User, UserRole};

use crate::domain::error::{DashboardError, RejectionKind, UpstreamError};
use crate::domain::ports::{
    MockPropertyDirectory, MockRequestDirectory, MockTenantDirectory, MockUserDirectory,
};

use super::*;

fn admin() -> Caller {
    Caller {
        user_id: 1,
        role: UserRole::Admin,
    }
}

fn member(user_id: i64) -> Caller {
    Caller {
        user_id,
        role: UserRole::Standard,
    }
}

fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        role: UserRole::Standard,
    }
}

fn property(id: i64, user_id: i64, name: &str) -> Property {
    Property {
        id,
        user_id,
        name: name.to_string(),
        address: None,
        city: None,
        status: Some("AVAILABLE".to_string()),
        monthly_rent: None,
        owner_name: None,
        tenant_count: None,
    }
}

fn tenant(id: i64, user_id: i64, property_id: Option<i64>) -> Tenant {
    Tenant {
        id,
        user_id,
        property_id,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: format!("tenant{id}@x.com"),
        phone: None,
        roommate_of: None,
        property_name: None,
    }
}

fn unavailable(upstream: &'static str) -> UpstreamError {
    UpstreamError::new(upstream, anyhow::anyhow!("connection refused"))
}

fn dashboard(
    users: MockUserDirectory,
    properties: MockPropertyDirectory,
    tenants: MockTenantDirectory,
    requests: MockRequestDirectory,
) -> DashboardImpl<MockUserDirectory, MockPropertyDirectory, MockTenantDirectory, MockRequestDirectory>
{
    DashboardImpl::new(users, properties, tenants, requests)
}

#[tokio::test]
async fn all_properties_enriched_joins_owner_names_and_counts() {
    let mut users = MockUserDirectory::new();
    users
        .expect_list_users()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![user(7, "alice"), user(8, "bob")]) }));

    let mut properties = MockPropertyDirectory::new();
    properties
        .expect_list_properties()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![property(1, 7, "Elm St"), property(2, 99, "Oak Ave")]) }));

    let mut tenants = MockTenantDirectory::new();
    tenants
        .expect_list_tenants_by_property()
        .times(2)
        .returning(|property_id| {
            Box::pin(async move {
                match property_id {
                    1 => Ok(vec![tenant(10, 7, Some(1)), tenant(11, 8, Some(1))]),
                    _ => Ok(vec![]),
                }
            })
        });

    let service = dashboard(users, properties, tenants, MockRequestDirectory::new());
    let result = service.all_properties_enriched(&admin()).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].owner_name.as_deref(), Some("alice"));
    assert_eq!(result[0].tenant_count, Some(2));
    // No user with id 99: the owner name is simply absent, not an error.
    assert_eq!(result[1].owner_name, None);
    assert_eq!(result[1].tenant_count, Some(0));
}

#[tokio::test]
async fn a_failed_count_lookup_degrades_only_that_property() {
    let mut users = MockUserDirectory::new();
    users
        .expect_list_users()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let mut properties = MockPropertyDirectory::new();
    properties.expect_list_properties().times(1).returning(|| {
        Box::pin(async {
            Ok(vec![
                property(1, 7, "Elm St"),
                property(2, 7, "Oak Ave"),
                property(3, 7, "Pine Rd"),
            ])
        })
    });

    let mut tenants = MockTenantDirectory::new();
    tenants
        .expect_list_tenants_by_property()
        .times(3)
        .returning(|property_id| {
            Box::pin(async move {
                match property_id {
                    2 => Err(unavailable("tenant service")),
                    _ => Ok(vec![tenant(10, 7, Some(property_id))]),
                }
            })
        });

    let service = dashboard(users, properties, tenants, MockRequestDirectory::new());
    let result = service.all_properties_enriched(&admin()).await.unwrap();

    assert_eq!(result[0].tenant_count, Some(1));
    assert_eq!(result[1].tenant_count, Some(0));
    assert_eq!(result[2].tenant_count, Some(1));
}

#[tokio::test]
async fn a_failed_user_fetch_leaves_owner_names_unset_but_succeeds() {
    let mut users = MockUserDirectory::new();
    users
        .expect_list_users()
        .times(1)
        .returning(|| Box::pin(async { Err(unavailable("user service")) }));

    let mut properties = MockPropertyDirectory::new();
    properties
        .expect_list_properties()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![property(1, 7, "Elm St")]) }));

    let mut tenants = MockTenantDirectory::new();
    tenants
        .expect_list_tenants_by_property()
        .times(1)
        .returning(|_| Box::pin(async { Ok(vec![]) }));

    let service = dashboard(users, properties, tenants, MockRequestDirectory::new());
    let result = service.all_properties_enriched(&admin()).await.unwrap();

    assert_eq!(result[0].owner_name, None);
    assert_eq!(result[0].tenant_count, Some(0));
}

#[tokio::test]
async fn a_failed_property_fetch_fails_the_whole_operation() {
    let mut users = MockUserDirectory::new();
    users
        .expect_list_users()
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let mut properties = MockPropertyDirectory::new();
    properties
        .expect_list_properties()
        .times(1)
        .returning(|| Box::pin(async { Err(unavailable("property service")) }));

    let service = dashboard(
        users,
        properties,
        MockTenantDirectory::new(),
        MockRequestDirectory::new(),
    );
    let err = service.all_properties_enriched(&admin()).await.unwrap_err();

    assert_matches!(err, DashboardError::Upstream(_));
}

#[tokio::test]
async fn all_tenants_enriched_returns_early_when_empty() {
    let mut tenants = MockTenantDirectory::new();
    tenants
        .expect_list_tenants()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![]) }));

    // Neither the user nor the property source may be touched.
    let mut users = MockUserDirectory::new();
    users.expect_list_users().times(0);
    let mut properties = MockPropertyDirectory::new();
    properties.expect_list_properties().times(0);

    let service = dashboard(users, properties, tenants, MockRequestDirectory::new());
    let result = service.all_tenants_enriched(&admin()).await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn all_tenants_enriched_sets_roommate_and_property_names() {
    let mut tenants = MockTenantDirectory::new();
    tenants
        .expect_list_tenants()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![tenant(10, 7, Some(1)), tenant(11, 99, None)]) }));

    let mut users = MockUserDirectory::new();
    users
        .expect_list_users()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![user(7, "alice")]) }));

    let mut properties = MockPropertyDirectory::new();
    properties
        .expect_list_properties()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![property(1, 7, "Elm St")]) }));

    let service = dashboard(users, properties, tenants, MockRequestDirectory::new());
    let result = service.all_tenants_enriched(&admin()).await.unwrap();

    assert_eq!(result[0].roommate_of.as_deref(), Some("alice"));
    assert_eq!(result[0].property_name.as_deref(), Some("Elm St"));
    assert_eq!(result[1].roommate_of, None);
    assert_eq!(result[1].property_name, None);
}

#[tokio::test]
async fn tenants_for_user_renders_the_dangling_property_fallback() {
    let mut tenants = MockTenantDirectory::new();
    tenants.expect_list_tenants_by_user().times(1).returning(|_| {
        Box::pin(async {
            Ok(vec![
                tenant(10, 7, Some(1)),
                tenant(11, 7, Some(42)),
                tenant(12, 7, None),
            ])
        })
    });

    let mut properties = MockPropertyDirectory::new();
    properties
        .expect_list_properties()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![property(1, 7, "Elm St")]) }));

    let service = dashboard(
        MockUserDirectory::new(),
        properties,
        tenants,
        MockRequestDirectory::new(),
    );
    let result = service
        .tenants_for_user_enriched(&member(7), 7)
        .await
        .unwrap();

    assert_eq!(result[0].property_name.as_deref(), Some("Elm St"));
    // Assigned to a property nobody can resolve: the fallback label, not an
    // error and not a blank.
    assert_eq!(result[1].property_name.as_deref(), Some("Property ID: 42"));
    // Unassigned stays unset.
    assert_eq!(result[2].property_name, None);
}

#[tokio::test]
async fn tenants_for_user_treats_an_empty_property_name_as_unresolved() {
    let mut tenants = MockTenantDirectory::new();
    tenants
        .expect_list_tenants_by_user()
        .times(1)
        .returning(|_| Box::pin(async { Ok(vec![tenant(10, 7, Some(1))]) }));

    let mut properties = MockPropertyDirectory::new();
    properties
        .expect_list_properties()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![property(1, 7, "")]) }));

    let service = dashboard(
        MockUserDirectory::new(),
        properties,
        tenants,
        MockRequestDirectory::new(),
    );
    let result = service
        .tenants_for_user_enriched(&member(7), 7)
        .await
        .unwrap();

    assert_eq!(result[0].property_name.as_deref(), Some("Property ID: 1"));
}

#[tokio::test]
async fn properties_for_user_unions_owned_and_hosting_properties() {
    // User 7 owns property A (id 1) and sponsors a tenant assigned to
    // property B (id 2); the result is exactly {A, B} with counts.
    let mut properties = MockPropertyDirectory::new();
    properties
        .expect_list_properties_by_user()
        .withf(|user_id| *user_id == 7)
        .times(1)
        .returning(|_| Box::pin(async { Ok(vec![property(1, 7, "Property A")]) }));
    properties.expect_list_properties().times(1).returning(|| {
        Box::pin(async {
            Ok(vec![
                property(1, 7, "Property A"),
                property(2, 8, "Property B"),
                property(3, 9, "Property C"),
            ])
        })
    });

    let mut tenants = MockTenantDirectory::new();
    tenants.expect_list_tenants_by_user().times(1).returning(|_| {
        Box::pin(async {
            Ok(vec![
                tenant(10, 7, Some(2)),
                tenant(11, 7, Some(2)),
                tenant(12, 7, Some(1)),
            ])
        })
    });
    tenants
        .expect_list_tenants_by_property()
        .times(2)
        .returning(|property_id| {
            Box::pin(async move {
                match property_id {
                    1 => Ok(vec![tenant(12, 7, Some(1))]),
                    2 => Ok(vec![tenant(10, 7, Some(2)), tenant(11, 7, Some(2))]),
                    _ => Ok(vec![]),
                }
            })
        });

    let service = dashboard(
        MockUserDirectory::new(),
        properties,
        tenants,
        MockRequestDirectory::new(),
    );
    let result = service
        .properties_for_user_enriched(&member(7), 7)
        .await
        .unwrap();

    let mut ids: Vec<i64> = result.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(
        result.iter().find(|p| p.id == 1).unwrap().tenant_count,
        Some(1)
    );
    assert_eq!(
        result.iter().find(|p| p.id == 2).unwrap().tenant_count,
        Some(2)
    );
}

#[tokio::test]
async fn admin_views_reject_standard_callers() {
    let service = dashboard(
        MockUserDirectory::new(),
        MockPropertyDirectory::new(),
        MockTenantDirectory::new(),
        MockRequestDirectory::new(),
    );

    let err = service.all_properties_enriched(&member(7)).await.unwrap_err();
    assert_matches!(err, DashboardError::PermissionDenied(_));

    let err = service.pending_requests(&member(7)).await.unwrap_err();
    assert_matches!(err, DashboardError::PermissionDenied(_));

    let err = service.approve_request(&member(7), 1).await.unwrap_err();
    assert_matches!(err, DashboardError::PermissionDenied(_));
}

#[tokio::test]
async fn member_views_reject_reads_of_other_users() {
    let service = dashboard(
        MockUserDirectory::new(),
        MockPropertyDirectory::new(),
        MockTenantDirectory::new(),
        MockRequestDirectory::new(),
    );

    let err = service
        .tenants_for_user_enriched(&member(7), 8)
        .await
        .unwrap_err();
    assert_matches!(err, DashboardError::PermissionDenied(_));
}

#[tokio::test]
async fn submit_request_forces_the_requester_to_the_caller() {
    let mut requests = MockRequestDirectory::new();
    requests
        .expect_create_request()
        .withf(|request| request.requested_by_user_id == 7)
        .times(1)
        .returning(|request| {
            Box::pin(async move {
                Ok(TenantRequest {
                    id: 1,
                    first_name: request.first_name,
                    last_name: request.last_name,
                    email: request.email,
                    phone: request.phone,
                    requested_by_user_id: request.requested_by_user_id,
                    status: model_tenancy::RequestStatus::Pending,
                    created_at: chrono::Utc::now(),
                    updated_at: chrono::Utc::now(),
                })
            })
        });

    let service = dashboard(
        MockUserDirectory::new(),
        MockPropertyDirectory::new(),
        MockTenantDirectory::new(),
        requests,
    );

    let saved = service
        .submit_request(
            &member(7),
            NewTenantRequest {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@x.com".to_string(),
                phone: None,
                // A forged requester id in the body is overwritten.
                requested_by_user_id: 999,
            },
        )
        .await
        .unwrap();

    assert_eq!(saved.requested_by_user_id, 7);
}

#[tokio::test]
async fn forwarded_rejections_keep_their_kind() {
    let mut requests = MockRequestDirectory::new();
    requests.expect_approve_request().times(1).returning(|_| {
        Box::pin(async {
            Err(crate::domain::error::PassthroughError::Rejected {
                kind: RejectionKind::Conflict,
                message: "email already exists as a tenant".to_string(),
            })
        })
    });

    let service = dashboard(
        MockUserDirectory::new(),
        MockPropertyDirectory::new(),
        MockTenantDirectory::new(),
        requests,
    );
    let err = service.approve_request(&admin(), 1).await.unwrap_err();

    assert_matches!(err, DashboardError::Rejected { kind: RejectionKind::Conflict, .. });
}
