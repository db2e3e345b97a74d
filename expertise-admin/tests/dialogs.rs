// expertise-admin/tests/dialogs.rs
// Create / edit / delete dialogs through a page

mod common;

use expertise_admin::resources::BankForm;
use expertise_admin::{AdminError, ResourcePage};
use expertise_client::{Banks, OneshotHttpClient};
use pretty_assertions::assert_eq;

use common::{backend, bank_store, requests};

type BankPage = ResourcePage<Banks, OneshotHttpClient>;

#[tokio::test]
async fn test_invalid_bank_is_never_sent() {
    let (http, db) = backend(&[]);
    let mut page = BankPage::new(bank_store(http));

    page.open_create();
    page.create_dialog().set_field("description", "Sans code").unwrap();
    let err = page.submit_create().await.unwrap_err();

    match err {
        AdminError::Validation(errors) => {
            assert!(errors.get("code").is_some());
            assert!(errors.get("name").is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(page.create_dialog().is_open());
    assert_eq!(page.create_dialog().errors().len(), 2);
    assert!(requests(&db).is_empty());
}

#[tokio::test]
async fn test_closed_dialog_rejects_input() {
    let (http, _db) = backend(&[]);
    let mut page = BankPage::new(bank_store(http));

    assert!(matches!(
        page.create_dialog().set_field("code", "BNP"),
        Err(AdminError::DialogClosed(_))
    ));
    assert!(matches!(page.submit_edit().await, Err(AdminError::DialogClosed(_))));
}

#[tokio::test]
async fn test_server_validation_keeps_dialog_open() {
    let (http, db) = backend(&[("BOA", "Bank of Africa")]);
    let mut page = BankPage::new(bank_store(http));

    page.open_create();
    page.create_dialog().set_field("code", "BOA").unwrap();
    page.create_dialog().set_field("name", "Doublon").unwrap();
    assert!(page.submit_create().await.is_err());

    assert!(page.create_dialog().is_open());
    assert_eq!(page.create_dialog().errors().get("code"), Some("Ce code existe déjà"));
    assert_eq!(page.create_dialog().form().name, "Doublon");
    assert!(page.render().contains("[erreur] Ce code existe déjà"));
    assert_eq!(db.lock().unwrap().count("POST"), 1);
}

#[tokio::test]
async fn test_edit_prefills_and_sends_one_diff() {
    let (http, db) = backend(&[("BOA", "Bank of Africa")]);
    let mut page = BankPage::new(bank_store(http));
    page.mount().await.unwrap();

    page.on_edit(1).unwrap();
    assert_eq!(
        page.edit_dialog().form(),
        &BankForm {
            code: "BOA".to_string(),
            name: "Bank of Africa".to_string(),
            description: String::new(),
        }
    );

    page.edit_dialog().set_field("name", "BOA Côte d'Ivoire").unwrap();
    let updated = page.submit_edit().await.unwrap();
    assert_eq!(updated.name, "BOA Côte d'Ivoire");
    assert!(!page.edit_dialog().is_open());

    let puts: Vec<String> = requests(&db).into_iter().filter(|r| r.starts_with("PUT")).collect();
    assert_eq!(puts, vec![r#"PUT /banks/1 {"name":"BOA Côte d'Ivoire"}"#.to_string()]);
}

#[tokio::test]
async fn test_delete_only_on_confirm() {
    let (http, db) = backend(&[("BOA", "Bank of Africa")]);
    let mut page = BankPage::new(bank_store(http));
    page.mount().await.unwrap();

    page.on_delete(1).unwrap();
    assert_eq!(page.delete_dialog().prompt(), "Supprimer « Bank of Africa (BOA) » ?");
    page.delete_dialog().cancel();
    assert_eq!(db.lock().unwrap().count("DELETE"), 0);

    page.on_delete(1).unwrap();
    assert_eq!(db.lock().unwrap().count("DELETE"), 0);
    page.confirm_delete().await.unwrap();
    assert_eq!(db.lock().unwrap().count("DELETE /banks/1"), 1);
    assert!(!page.delete_dialog().is_open());

    let out = page.render();
    assert!(out.contains("Supprimé"));
    assert!(out.contains("[ok] Banque : suppression effectuée"));

    assert!(matches!(page.confirm_delete().await, Err(AdminError::DialogClosed(_))));
    assert_eq!(db.lock().unwrap().count("DELETE"), 1);
}
