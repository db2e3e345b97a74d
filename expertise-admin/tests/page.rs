// expertise-admin/tests/page.rs
// ResourcePage: mount, render, debounced search, row actions

mod common;

use std::time::Duration;

use expertise_admin::{AdminError, AppConfig, ResourcePage};
use expertise_client::{Banks, OneshotHttpClient};

use common::{backend, bank_store, requests};

type BankPage = ResourcePage<Banks, OneshotHttpClient>;

#[tokio::test]
async fn test_renders_one_row_per_entity() {
    let (http, _db) = backend(&[
        ("SGBCI", "Société Générale"),
        ("BOA", "Bank of Africa"),
        ("NSIA", "NSIA Banque"),
    ]);
    let mut page = BankPage::new(bank_store(http));
    page.mount().await.unwrap();

    let items = page.store().snapshot().items;
    assert_eq!(page.table().rows(&items).len(), 3);

    let out = page.render();
    assert!(out.starts_with("== Banques =="));
    for name in ["Société Générale", "Bank of Africa", "NSIA Banque"] {
        assert!(out.contains(name), "missing {name} in\n{out}");
    }
    assert!(!out.contains("Aucune banque trouvée"));
    assert!(out.contains("Page 1 / 1 (3 éléments)"));
}

#[tokio::test]
async fn test_empty_list_shows_empty_text() {
    let (http, _db) = backend(&[]);
    let mut page = BankPage::new(bank_store(http));
    page.mount().await.unwrap();

    assert!(page.render().contains("Aucune banque trouvée"));
}

#[tokio::test]
async fn test_deleted_row_shows_deleted_badge() {
    let (http, db) = backend(&[("BICICI", "BICICI")]);
    db.lock().unwrap().banks[0]["deleted_at"] = serde_json::json!("2024-06-01T12:00:00Z");

    let mut page = BankPage::new(bank_store(http));
    page.mount().await.unwrap();

    let out = page.render();
    assert!(out.contains("Supprimé"));
    assert!(!out.contains("Active"));
}

#[tokio::test(start_paused = true)]
async fn test_debounced_search_fetches_once_with_final_text() {
    let (http, db) = backend(&[("BNP", "BNP Paribas"), ("BOA", "Bank of Africa")]);
    let mut page = BankPage::new(bank_store(http)).with_search_delay(Duration::from_millis(500));
    page.mount().await.unwrap();

    for text in ["b", "bn", "bnp"] {
        page.on_search_input(text);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(db.lock().unwrap().count("GET /banks?search"), 0);

    tokio::time::sleep(Duration::from_millis(600)).await;

    let searches: Vec<String> = requests(&db)
        .into_iter()
        .filter(|r| r.starts_with("GET /banks?search"))
        .collect();
    assert_eq!(searches, vec!["GET /banks?search=bnp&page=1&per_page=25".to_string()]);
    assert_eq!(page.search_text(), "bnp");
    assert_eq!(page.store().snapshot().items.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_configured_search_delay_is_used() {
    let (http, db) = backend(&[("BNP", "BNP Paribas"), ("BOA", "Bank of Africa")]);
    let config = AppConfig {
        per_page: 10,
        search_debounce_ms: 50,
        ..AppConfig::default()
    };
    let mut page = config.page::<Banks, _>(http);

    page.on_search_input("boa");
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert_eq!(db.lock().unwrap().count("GET /banks"), 0);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(requests(&db), vec!["GET /banks?search=boa&page=1&per_page=10".to_string()]);
}

#[tokio::test]
async fn test_create_bank_scenario() {
    let (http, db) = backend(&[]);
    let mut page = BankPage::new(bank_store(http));
    page.mount().await.unwrap();

    page.open_create();
    page.create_dialog().set_field("code", "BNP").unwrap();
    page.create_dialog().set_field("name", "BNP Paribas").unwrap();
    let created = page.submit_create().await.unwrap();
    assert_eq!(created.name, "BNP Paribas");
    assert!(!page.create_dialog().is_open());

    let log = requests(&db);
    assert_eq!(log.len(), 3);
    assert!(log[1].starts_with("POST /banks"));
    assert!(log[1].contains(r#""code":"BNP""#));
    assert!(log[2].starts_with("GET /banks?"));

    let out = page.render();
    assert!(out.contains("BNP Paribas"));
    assert!(out.contains("Active"));
    assert!(out.contains("02/05/2024"));
    assert!(out.contains("[ok] Banque : création réussie"));

    // toasts are consumed by render
    assert!(page.toasts().is_empty());
}

#[tokio::test]
async fn test_mount_failure_becomes_error_toast() {
    let (http, db) = backend(&[]);
    db.lock().unwrap().fail_lists = true;
    let mut page = BankPage::new(bank_store(http));

    assert!(page.mount().await.is_err());
    assert!(page.render().contains("[erreur] Erreur serveur"));
    assert_eq!(page.store().snapshot().error, None);
}

#[tokio::test]
async fn test_row_actions_require_a_listed_entity() {
    let (http, db) = backend(&[("BOA", "Bank of Africa")]);
    let mut page = BankPage::new(bank_store(http));
    page.mount().await.unwrap();

    assert!(matches!(page.on_view(42), Err(AdminError::NoSelection)));
    assert!(matches!(page.on_disable(42).await, Err(AdminError::NoSelection)));
    assert_eq!(db.lock().unwrap().count("PUT"), 0);

    page.on_view(1).unwrap();
    assert_eq!(page.store().snapshot().selected.map(|b| b.id), Some(1));
    let detail = page.view_dialog().render();
    assert!(detail.contains("Bank of Africa"));
    assert!(detail.contains("Créé par"));
    assert!(detail.contains("Admin"));

    page.on_disable(1).await.unwrap();
    assert_eq!(db.lock().unwrap().count("PUT /banks/1/disable"), 1);
    assert!(page.render().contains("Inactive"));
}

#[tokio::test]
async fn test_page_navigation() {
    let banks: Vec<(String, String)> = (1..=30).map(|i| (format!("B{i:02}"), format!("Banque {i:02}"))).collect();
    let refs: Vec<(&str, &str)> = banks.iter().map(|(c, n)| (c.as_str(), n.as_str())).collect();
    let (http, db) = backend(&refs);
    let mut page = BankPage::new(bank_store(http));
    page.mount().await.unwrap();

    page.next_page().await.unwrap();
    assert_eq!(page.store().snapshot().items.len(), 5);
    page.next_page().await.unwrap();
    page.prev_page().await.unwrap();

    let pages: Vec<String> = requests(&db);
    assert_eq!(
        pages,
        vec![
            "GET /banks?per_page=25".to_string(),
            "GET /banks?page=2&per_page=25".to_string(),
            "GET /banks?page=1&per_page=25".to_string(),
        ]
    );
}
