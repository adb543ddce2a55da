//! Integration tests for the generic resource repository against a mocked
//! remote client.

use fieldgate_core::{
    CustomerId, FieldgateError, FieldgateResult, OfficeId, PageRequest, SearchParams, WirePage,
};
use fieldgate_remote::ResourceClient;
use fieldgate_repository::{
    AppointmentCriteria, AppointmentRepository, DocumentRepository, ResourceRepository,
};
use mockall::mock;
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::sync::Arc;

mock! {
    pub Client {}

    #[async_trait::async_trait]
    impl ResourceClient for Client {
        async fn fetch_one(
            &self,
            endpoint: &str,
            office_id: OfficeId,
            id: i64,
        ) -> FieldgateResult<Option<Value>>;

        async fn fetch_page(
            &self,
            endpoint: &str,
            office_id: OfficeId,
            params: &SearchParams,
            page: PageRequest,
        ) -> FieldgateResult<WirePage>;
    }
}

fn appointment_wire(id: i64, customer_id: i64, duration: &str) -> Value {
    json!({
        "appointmentID": id.to_string(),
        "customerID": customer_id.to_string(),
        "date": "2024-03-07",
        "start": "10:00:00",
        "end": "10:20:00",
        "duration": duration,
        "status": "0",
        "employeeID": "42",
        "notes": null
    })
}

/// Slices a fixed dataset into pages the way the remote API would.
fn page_of(dataset: &[Value], page: PageRequest) -> WirePage {
    let start = page.page * page.size;
    let items: Vec<Value> = dataset.iter().skip(start).take(page.size).cloned().collect();
    WirePage::new(items, page.page, page.size, dataset.len() as u64)
}

#[tokio::test]
async fn test_operations_without_tenant_fail_before_any_remote_call() {
    let mut client = MockClient::new();
    client.expect_fetch_one().times(0);
    client.expect_fetch_page().times(0);

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));

    assert!(matches!(
        repo.find(1).await,
        Err(FieldgateError::TenantNotSet)
    ));
    assert!(matches!(
        repo.find_many(&[1, 2]).await,
        Err(FieldgateError::TenantNotSet)
    ));
    assert!(matches!(
        repo.search(Default::default()).await,
        Err(FieldgateError::TenantNotSet)
    ));
}

#[tokio::test]
async fn test_find_maps_wire_record() {
    let mut client = MockClient::new();
    client
        .expect_fetch_one()
        .withf(|endpoint, office, id| {
            endpoint == "appointment" && *office == OfficeId::new(7) && *id == 1001
        })
        .returning(|_, _, _| Ok(Some(appointment_wire(1001, 2561669, "20"))));

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let model = repo
        .with_tenant(OfficeId::new(7))
        .find(1001)
        .await
        .expect("Lookup failed")
        .expect("Expected a model");

    assert_eq!(model.account_number, CustomerId::new(2561669));
    assert_eq!(model.duration, 20);
}

#[tokio::test]
async fn test_find_not_found_is_none_not_an_error() {
    let mut client = MockClient::new();
    client.expect_fetch_one().returning(|_, _, _| Ok(None));

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let result = repo
        .with_tenant(OfficeId::new(7))
        .find(404404)
        .await
        .expect("Lookup-miss must not be an error");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_propagates_remote_failure() {
    let mut client = MockClient::new();
    client
        .expect_fetch_one()
        .returning(|_, _, _| Err(FieldgateError::remote("appointment", "HTTP 500: boom")));

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let err = repo.with_tenant(OfficeId::new(7)).find(1).await.unwrap_err();

    assert!(matches!(err, FieldgateError::RemoteResource { .. }));
}

#[tokio::test]
async fn test_search_on_unsupported_resource_raises() {
    let mut client = MockClient::new();
    client.expect_fetch_page().times(0);

    let repo: DocumentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let err = repo
        .with_tenant(OfficeId::new(7))
        .search(Default::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FieldgateError::UnsupportedOperation {
            resource: "document",
            operation: "search"
        }
    ));
}

#[tokio::test]
async fn test_find_many_on_unsupported_resource_is_an_empty_stub() {
    let mut client = MockClient::new();
    client.expect_fetch_page().times(0);

    let repo: DocumentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let models = repo
        .with_tenant(OfficeId::new(7))
        .find_many(&[1, 2, 3])
        .await
        .expect("find_many must not raise on non-searchable resources");

    assert!(models.is_empty());
}

#[tokio::test]
async fn test_find_many_delegates_to_search_with_id_list() {
    let mut client = MockClient::new();
    client
        .expect_fetch_page()
        .withf(|endpoint, _, params, _| {
            endpoint == "appointment"
                && params
                    .pairs()
                    .contains(&("appointmentIDs".to_string(), "1,2".to_string()))
        })
        .returning(|_, _, _, page| {
            let dataset = vec![
                appointment_wire(1, 10, "20"),
                appointment_wire(2, 11, "30"),
            ];
            Ok(page_of(&dataset, page))
        });

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let models = repo
        .with_tenant(OfficeId::new(7))
        .find_many(&[1, 2])
        .await
        .expect("find_many failed");

    assert_eq!(models.len(), 2);
}

#[tokio::test]
async fn test_find_many_with_no_ids_short_circuits() {
    let mut client = MockClient::new();
    client.expect_fetch_page().times(0);

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let models = repo
        .with_tenant(OfficeId::new(7))
        .find_many(&[])
        .await
        .unwrap();

    assert!(models.is_empty());
}

#[tokio::test]
async fn test_paginated_search_returns_exactly_one_page() {
    let dataset: Vec<Value> = (1..=5).map(|i| appointment_wire(i, 100 + i, "20")).collect();

    let mut client = MockClient::new();
    client
        .expect_fetch_page()
        .times(1)
        .returning(move |_, _, _, page| Ok(page_of(&dataset, page)));

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let models = repo
        .with_tenant(OfficeId::new(7))
        .with_pagination(1, 2)
        .search(Default::default())
        .await
        .expect("Search failed");

    let ids: Vec<i64> = models.iter().map(|m| m.id.into_inner()).collect();
    assert_eq!(ids, vec![3, 4]);
}

#[tokio::test]
async fn test_unpaginated_search_equals_concatenation_of_all_pages() {
    let dataset: Vec<Value> = (1..=5).map(|i| appointment_wire(i, 100 + i, "20")).collect();

    // Exhaustive search without a pagination window.
    let ds = dataset.clone();
    let mut client = MockClient::new();
    client
        .expect_fetch_page()
        .returning(move |_, _, _, page| Ok(page_of(&ds, page)));
    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let scoped = repo.with_tenant(OfficeId::new(7));

    let all: BTreeSet<i64> = scoped
        .search(Default::default())
        .await
        .expect("Search failed")
        .iter()
        .map(|m| m.id.into_inner())
        .collect();
    assert_eq!(all.len(), 5);

    // Manual page walks for sizes 1, 2, and "all".
    for size in [1_usize, 2, 5] {
        let ds = dataset.clone();
        let mut client = MockClient::new();
        client
            .expect_fetch_page()
            .returning(move |_, _, _, page| Ok(page_of(&ds, page)));
        let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
        let scoped = repo.with_tenant(OfficeId::new(7));

        let mut collected = BTreeSet::new();
        let mut page = 0;
        loop {
            let chunk = scoped
                .with_pagination(page, size)
                .search(Default::default())
                .await
                .expect("Paged search failed");
            if chunk.is_empty() {
                break;
            }
            let len = chunk.len();
            collected.extend(chunk.iter().map(|m| m.id.into_inner()));
            if len < size {
                break;
            }
            page += 1;
        }

        assert_eq!(collected, all, "page size {} diverged", size);
    }
}

#[tokio::test]
async fn test_one_malformed_record_aborts_the_whole_search() {
    let mut client = MockClient::new();
    client.expect_fetch_page().returning(|_, _, _, page| {
        let dataset = vec![
            appointment_wire(1, 10, "20"),
            appointment_wire(2, 11, "not-a-number"),
            appointment_wire(3, 12, "40"),
        ];
        Ok(page_of(&dataset, page))
    });

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let err = repo
        .with_tenant(OfficeId::new(7))
        .search(Default::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FieldgateError::Mapping { .. }));
}

#[tokio::test]
async fn test_search_by_account_number_end_to_end() {
    // Remote fixture: 3 appointments for account 2561669, 2 for others. The
    // remote applies the customerIDs filter; the mock reproduces that.
    let matching: Vec<Value> = vec![
        appointment_wire(1, 2561669, "20"),
        appointment_wire(2, 2561669, "20"),
        appointment_wire(3, 2561669, "20"),
    ];

    let mut client = MockClient::new();
    client
        .expect_fetch_page()
        .withf(|_, office, params, _| {
            *office == OfficeId::new(7)
                && params
                    .pairs()
                    .contains(&("customerIDs".to_string(), "2561669".to_string()))
        })
        .returning(move |_, _, _, page| Ok(page_of(&matching, page)));

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let criteria = AppointmentCriteria {
        account_numbers: vec![2561669],
        ..Default::default()
    };

    let models = repo
        .with_tenant(OfficeId::new(7))
        .search(criteria)
        .await
        .expect("Search failed");

    assert_eq!(models.len(), 3);
    for model in &models {
        assert_eq!(model.account_number, CustomerId::new(2561669));
        assert_eq!(model.duration, 20);
    }
}

#[tokio::test]
async fn test_with_tenant_rescopes_without_mutating_the_original() {
    let mut client = MockClient::new();
    client.expect_fetch_one().times(0);
    client.expect_fetch_page().times(0);

    let repo: AppointmentRepository<MockClient> = ResourceRepository::new(Arc::new(client));
    let scoped = repo.with_tenant(OfficeId::new(9));

    assert_eq!(scoped.context().tenant(), Some(OfficeId::new(9)));
    assert_eq!(repo.context().tenant(), None);
    assert!(matches!(
        repo.find(1).await,
        Err(FieldgateError::TenantNotSet)
    ));
}
