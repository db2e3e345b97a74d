// expertise-admin/tests/store.rs
// ResourceStore against the in-memory backend

mod common;

use expertise_admin::store::{LoadState, ResourceStore};
use expertise_client::{ClientError, Statuses};
use pretty_assertions::assert_eq;
use shared::Record;
use shared::models::{BankCreate, BankUpdate};

use common::{backend, bank_store, requests};

#[tokio::test]
async fn test_fetch_list_fills_items_and_pagination() {
    let (http, db) = backend(&[("SGBCI", "Société Générale"), ("BOA", "Bank of Africa")]);
    let store = bank_store(http);
    assert_eq!(store.snapshot().load_state, LoadState::Idle);

    store.fetch_list(None).await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.load_state, LoadState::Loaded);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    let meta = state.pagination.unwrap();
    assert_eq!(meta.total, 2);
    assert_eq!(meta.current_page, 1);
    assert_eq!(requests(&db), vec!["GET /banks?per_page=25".to_string()]);
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_items() {
    let (http, db) = backend(&[("BOA", "Bank of Africa")]);
    let store = bank_store(http);
    store.fetch_list(None).await.unwrap();

    db.lock().unwrap().fail_lists = true;
    let err = store.fetch_list(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));

    let state = store.snapshot();
    assert_eq!(state.load_state, LoadState::Errored);
    assert_eq!(state.error.as_deref(), Some("Erreur serveur"));
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);

    store.clear_error();
    assert_eq!(store.snapshot().error, None);
}

#[tokio::test]
async fn test_mutations_refetch_the_list() {
    let (http, db) = backend(&[("BOA", "Bank of Africa")]);
    let store = bank_store(http);
    store.fetch_list(None).await.unwrap();

    let created = store
        .create(&BankCreate {
            code: "BNP".to_string(),
            name: "BNP Paribas".to_string(),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(created.code, "BNP");
    assert_eq!(store.snapshot().items.len(), 2);

    store
        .update(
            created.id,
            &BankUpdate {
                name: Some("BNP Paribas CI".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let renamed = store.snapshot().items.into_iter().find(|b| b.id == created.id).unwrap();
    assert_eq!(renamed.name, "BNP Paribas CI");

    store.disable(created.id).await.unwrap();
    let disabled = store.snapshot().items.into_iter().find(|b| b.id == created.id).unwrap();
    assert_eq!(disabled.status.unwrap().code, shared::StatusCode::Inactive);

    store.remove(created.id).await.unwrap();
    let deleted = store.snapshot().items.into_iter().find(|b| b.id == created.id).unwrap();
    assert!(deleted.is_deleted());

    let log = requests(&db);
    assert_eq!(log.iter().filter(|r| r.starts_with("GET /banks?")).count(), 5);
    assert_eq!(db.lock().unwrap().count("DELETE /banks/2"), 1);
}

#[tokio::test]
async fn test_failed_mutation_sets_error_without_refetch() {
    let (http, db) = backend(&[("BOA", "Bank of Africa")]);
    let store = bank_store(http);

    let err = store
        .create(&BankCreate {
            code: "BOA".to_string(),
            name: "Doublon".to_string(),
            description: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Ce code existe déjà");
    assert_eq!(store.snapshot().error.as_deref(), Some("Ce code existe déjà"));
    assert!(!store.snapshot().saving);
    assert_eq!(db.lock().unwrap().count("GET"), 0);
}

#[tokio::test]
async fn test_search_resets_to_first_page() {
    let (http, db) = backend(&[("BOA", "Bank of Africa"), ("BNP", "BNP Paribas")]);
    let store = bank_store(http);

    store.go_to_page(3).await.unwrap();
    store.search("  bnp ").await.unwrap();

    assert_eq!(store.snapshot().items.len(), 1);
    assert_eq!(
        requests(&db),
        vec![
            "GET /banks?page=3&per_page=25".to_string(),
            "GET /banks?search=bnp&page=1&per_page=25".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_superseded_response_is_discarded() {
    let (http, _db) = backend(&[("BOA", "Bank of Africa"), ("SLOW", "slow bank")]);
    let store = bank_store(http);

    let slow = store.search("slow");
    let fast = async {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        store.search("boa").await
    };
    let (slow, fast) = tokio::join!(slow, fast);
    slow.unwrap();
    fast.unwrap();

    let state = store.snapshot();
    assert_eq!(state.filters.search.as_deref(), Some("boa"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].code, "BOA");
}

#[tokio::test]
async fn test_item_fetch_does_not_end_list_loading() {
    let (http, _db) = backend(&[("BOA", "Bank of Africa"), ("SLOW", "slow bank")]);
    let store = bank_store(http);

    let list = store.search("slow");
    let item = async {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let bank = store.fetch_one(1).await.unwrap();
        (bank, store.snapshot())
    };
    let (list, (bank, during)) = tokio::join!(list, item);
    list.unwrap();

    assert_eq!(bank.code, "BOA");
    assert!(during.loading);
    assert!(!during.loading_item);
    assert_eq!(during.load_state, LoadState::Loading);

    let after = store.snapshot();
    assert!(!after.loading);
    assert_eq!(after.load_state, LoadState::Loaded);
    assert_eq!(after.selected.map(|b| b.code).as_deref(), Some("BOA"));
}

#[tokio::test]
async fn test_subscribers_observe_changes() {
    let (http, _db) = backend(&[("BOA", "Bank of Africa")]);
    let store = bank_store(http);
    let mut rx = store.subscribe();

    store.fetch_list(None).await.unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().items.len(), 1);
}

#[tokio::test]
async fn test_toggle_unsupported_resource() {
    let (http, db) = backend(&[]);
    let store: ResourceStore<Statuses, _> = ResourceStore::from_http(http);

    let err = store.enable(1).await.unwrap_err();
    assert!(matches!(err, ClientError::NotSupported(_)));
    assert!(store.snapshot().error.is_some());
    assert!(requests(&db).is_empty());
}
