// expertise-admin/tests/workforce_editor.rs
// Batch editing of workforce rates

mod common;

use expertise_admin::{AdminError, Toasts, WorkforceEditor};

use common::{backend, rate_json, rate_store, requests};

fn seeded() -> (WorkforceEditor<expertise_client::OneshotHttpClient>, common::Shared) {
    let (http, db) = backend(&[]);
    {
        let mut db = db.lock().unwrap();
        db.rates.push(rate_json(101, 1, "Tôlerie", "A", "4500.00"));
        db.rates.push(rate_json(102, 2, "Peinture", "A", "5000.00"));
    }
    (WorkforceEditor::new(rate_store(http)), db)
}

#[tokio::test]
async fn test_save_posts_new_and_puts_modified_rows() {
    let (mut editor, db) = seeded();
    editor.load().await.unwrap();
    assert_eq!(editor.rows().len(), 2);

    let row = editor.add_row();
    editor.set_cell(row, "workforce_type_id", "3").unwrap();
    editor.set_cell(row, "vehicle_category", "B").unwrap();
    editor.set_cell(row, "hourly_rate", "6 000").unwrap();
    editor.set_cell(0, "hourly_rate", "4750").unwrap();
    assert_eq!(editor.pending(), (1, 1));

    let mut toasts = Toasts::new();
    let summary = editor.save(&mut toasts).await.unwrap();
    assert_eq!((summary.created, summary.updated), (1, 1));

    let log = requests(&db);
    assert_eq!(log.iter().filter(|r| r.starts_with("POST /workforce-rates")).count(), 1);
    assert_eq!(
        log.iter().filter(|r| r.starts_with("PUT /workforce-rates/101")).count(),
        1
    );
    assert!(log.iter().any(|r| r.contains(r#""hourly_rate":"6000""#)));
    // one load, one refresh after save
    assert_eq!(log.iter().filter(|r| r.starts_with("GET")).count(), 2);

    assert_eq!(editor.rows().len(), 3);
    assert!(!editor.has_changes());
    assert!(toasts.latest().unwrap().message.contains("1 créé(s), 1 modifié(s)"));
}

#[tokio::test]
async fn test_invalid_rows_block_the_whole_save() {
    let (mut editor, db) = seeded();
    editor.load().await.unwrap();

    let row = editor.add_row();
    editor.set_cell(row, "workforce_type_id", "3").unwrap();
    editor.set_cell(0, "hourly_rate", "4750").unwrap();

    let mut toasts = Toasts::new();
    match editor.save(&mut toasts).await {
        Err(AdminError::Validation(errors)) => {
            assert!(errors.get("ligne 3.hourly_rate").is_some());
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(requests(&db).len(), 1);
    assert!(editor.has_changes());
}

#[tokio::test]
async fn test_cancel_discards_local_edits() {
    let (mut editor, db) = seeded();
    editor.load().await.unwrap();

    editor.add_row();
    editor.set_cell(1, "hourly_rate", "9999").unwrap();
    assert!(editor.has_changes());

    editor.cancel();
    assert_eq!(editor.rows().len(), 2);
    assert!(!editor.has_changes());
    assert_eq!(editor.rows()[1].form().hourly_rate, "5000.00");

    let mut toasts = Toasts::new();
    assert_eq!(editor.save(&mut toasts).await.unwrap().created, 0);
    assert_eq!(requests(&db).len(), 1);
}

#[tokio::test]
async fn test_only_new_rows_can_be_removed() {
    let (mut editor, _db) = seeded();
    editor.load().await.unwrap();

    let row = editor.add_row();
    assert!(!editor.remove_new_row(0));
    assert!(editor.remove_new_row(row));
    assert_eq!(editor.rows().len(), 2);
    assert!(editor.render().contains("Tôlerie"));
}
