// expertise-admin/tests/cli.rs
// Command routing against the in-memory backend

mod common;

use std::io::Cursor;

use expertise_admin::{AppConfig, ResourceKind};
use expertise_admin::cli::{ResourceCommand, dispatch};

use common::{backend, requests};

fn set(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::test]
async fn test_create_command_renders_the_new_bank() {
    let (http, db) = backend(&[]);
    let command = ResourceCommand::Create {
        set: set(&[("code", "BNP"), ("name", "BNP Paribas")]),
    };

    let out = dispatch(ResourceKind::Banks, command, http, &AppConfig::default(), &mut Cursor::new(Vec::new()))
        .await
        .unwrap();

    assert!(out.contains("Banque : BNP Paribas (BNP)"));
    assert!(out.contains("[ok] Banque : création réussie"));
    assert_eq!(db.lock().unwrap().count("POST /banks"), 1);
}

#[tokio::test]
async fn test_invalid_create_is_an_error() {
    let (http, db) = backend(&[]);
    let command = ResourceCommand::Create {
        set: set(&[("name", "Sans code")]),
    };

    let err = dispatch(ResourceKind::Banks, command, http, &AppConfig::default(), &mut Cursor::new(Vec::new()))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("code"));
    assert!(requests(&db).is_empty());
}

#[tokio::test]
async fn test_delete_waits_for_confirmation() {
    let (http, db) = backend(&[("BOA", "Bank of Africa")]);

    let out = dispatch(
        ResourceKind::Banks,
        ResourceCommand::Delete { id: 1, yes: false },
        http.clone(),
        &AppConfig::default(),
        &mut Cursor::new(b"n\n".to_vec()),
    )
    .await
    .unwrap();
    assert_eq!(out, "Suppression annulée");
    assert_eq!(db.lock().unwrap().count("DELETE"), 0);

    let out = dispatch(
        ResourceKind::Banks,
        ResourceCommand::Delete { id: 1, yes: false },
        http,
        &AppConfig::default(),
        &mut Cursor::new(b"o\n".to_vec()),
    )
    .await
    .unwrap();
    assert!(out.contains("[ok] Banque : suppression effectuée"));
    assert_eq!(db.lock().unwrap().count("DELETE /banks/1"), 1);
}

#[tokio::test]
async fn test_list_command_applies_filters() {
    let (http, db) = backend(&[("BOA", "Bank of Africa"), ("BNP", "BNP Paribas")]);
    let command = ResourceCommand::List {
        search: Some("bnp".to_string()),
        page: 1,
        status: Some("active".to_string()),
        relations: Vec::new(),
    };

    let config = AppConfig {
        per_page: 10,
        ..AppConfig::default()
    };
    let out = dispatch(ResourceKind::Banks, command, http, &config, &mut Cursor::new(Vec::new()))
        .await
        .unwrap();

    assert!(out.contains("BNP Paribas"));
    assert!(!out.contains("Bank of Africa"));
    let log = requests(&db);
    assert_eq!(log.len(), 1);
    assert!(log[0].contains("search=bnp"));
    assert!(log[0].contains("status=active"));
    assert!(log[0].contains("per_page=10"));
}

#[tokio::test]
async fn test_unknown_status_is_rejected_before_any_request() {
    let (http, db) = backend(&[]);
    let command = ResourceCommand::List {
        search: None,
        page: 1,
        status: Some("archived".to_string()),
        relations: Vec::new(),
    };

    let err = dispatch(ResourceKind::Banks, command, http, &AppConfig::default(), &mut Cursor::new(Vec::new()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("archived"));
    assert!(requests(&db).is_empty());
}

#[tokio::test]
async fn test_fields_command_marks_required_fields() {
    let (http, db) = backend(&[]);

    let out = dispatch(ResourceKind::Banks, ResourceCommand::Fields, http, &AppConfig::default(), &mut Cursor::new(Vec::new()))
        .await
        .unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Banques");
    assert!(lines[1].starts_with("code") && lines[1].ends_with("Code *"));
    assert!(lines[3].starts_with("description") && lines[3].ends_with("Description"));
    assert!(requests(&db).is_empty());
}
