// expertise-admin/tests/common/mod.rs
// In-memory backend served through OneshotHttpClient

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use expertise_admin::store::ResourceStore;
use expertise_client::{Banks, OneshotHttpClient, WorkforceRates};
use serde_json::{Map, Value, json};
use shared::ListFilters;

pub const CREATED_AT: &str = "2024-05-02T08:00:00.000000Z";

#[derive(Default)]
pub struct Backend {
    pub banks: Vec<Value>,
    pub rates: Vec<Value>,
    pub requests: Vec<String>,
    pub fail_lists: bool,
    next_id: i64,
}

impl Backend {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Requests starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.requests.iter().filter(|r| r.starts_with(prefix)).count()
    }
}

pub type Shared = Arc<Mutex<Backend>>;

fn active() -> Value {
    json!({"id": 1, "code": "active", "label": "Active"})
}

fn inactive() -> Value {
    json!({"id": 2, "code": "inactive", "label": "Inactive"})
}

pub fn bank_json(id: i64, code: &str, name: &str) -> Value {
    json!({
        "id": id,
        "code": code,
        "name": name,
        "description": null,
        "status": active(),
        "created_by": {"id": 1, "name": "Admin", "email": "admin@expertise.ci"},
        "created_at": CREATED_AT,
        "updated_at": CREATED_AT,
        "deleted_at": null
    })
}

pub fn rate_json(id: i64, type_id: i64, type_label: &str, category: &str, rate: &str) -> Value {
    json!({
        "id": id,
        "workforce_type": {"id": type_id, "label": type_label},
        "vehicle_category": category,
        "hourly_rate": rate,
        "status": active(),
        "created_at": CREATED_AT
    })
}

fn paginate(items: Vec<Value>, params: &HashMap<String, String>) -> Value {
    let per_page: usize = params.get("per_page").and_then(|v| v.parse().ok()).unwrap_or(25);
    let page: usize = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let total = items.len();
    let last_page = total.div_ceil(per_page).max(1);
    let data: Vec<Value> = items.into_iter().skip((page - 1) * per_page).take(per_page).collect();
    let from = if data.is_empty() { Value::Null } else { json!((page - 1) * per_page + 1) };
    let to = if data.is_empty() { Value::Null } else { json!((page - 1) * per_page + data.len()) };
    json!({
        "data": data,
        "links": {"first": null, "last": null, "prev": null, "next": null},
        "meta": {
            "current_page": page,
            "last_page": last_page,
            "per_page": per_page,
            "from": from,
            "to": to,
            "total": total
        }
    })
}

fn merge(target: &mut Value, patch: Value) {
    if let (Some(target), Value::Object(patch)) = (target.as_object_mut(), patch) {
        for (k, v) in patch {
            target.insert(k, v);
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"message": "Not found"}))).into_response()
}

// ============ Banks ============

async fn list_banks(
    State(db): State<Shared>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let search = params.get("search").cloned().unwrap_or_default().to_lowercase();
    if search == "slow" {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    let mut db = db.lock().unwrap();
    db.requests.push(format!("GET /banks?{}", raw.unwrap_or_default()));
    if db.fail_lists {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "Erreur serveur"}))).into_response();
    }

    let items: Vec<Value> = db
        .banks
        .iter()
        .filter(|b| {
            search.is_empty()
                || ["code", "name"].iter().any(|k| {
                    b[*k].as_str().unwrap_or_default().to_lowercase().contains(&search)
                })
        })
        .cloned()
        .collect();
    Json(paginate(items, &params)).into_response()
}

async fn create_bank(State(db): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("POST /banks {}", body));

    let code = body["code"].as_str().unwrap_or_default().to_string();
    if db.banks.iter().any(|b| b["code"] == code.as_str()) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": {"code": ["Ce code existe déjà"]}
            })),
        )
            .into_response();
    }

    let id = db.next_id();
    let mut bank = bank_json(id, &code, body["name"].as_str().unwrap_or_default());
    bank["description"] = body["description"].clone();
    db.banks.push(bank.clone());
    (StatusCode::CREATED, Json(json!({"data": bank}))).into_response()
}

async fn show_bank(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("GET /banks/{}", id));
    match db.banks.iter().find(|b| b["id"] == id) {
        Some(bank) => Json(json!({"data": bank})).into_response(),
        None => not_found(),
    }
}

async fn update_bank(State(db): State<Shared>, Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("PUT /banks/{} {}", id, body));
    match db.banks.iter_mut().find(|b| b["id"] == id) {
        Some(bank) => {
            merge(bank, body);
            Json(bank.clone()).into_response()
        }
        None => not_found(),
    }
}

async fn delete_bank(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("DELETE /banks/{}", id));
    match db.banks.iter_mut().find(|b| b["id"] == id) {
        Some(bank) => {
            bank["deleted_at"] = json!("2024-06-01T12:00:00.000000Z");
            bank["deleted_by"] = json!({"id": 1, "name": "Admin"});
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found(),
    }
}

async fn toggle_bank(State(db): State<Shared>, Path((id, action)): Path<(i64, String)>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("PUT /banks/{}/{}", id, action));
    let status = match action.as_str() {
        "enable" => active(),
        "disable" => inactive(),
        _ => return not_found(),
    };
    match db.banks.iter_mut().find(|b| b["id"] == id) {
        Some(bank) => {
            bank["status"] = status;
            Json(json!({"message": "ok"})).into_response()
        }
        None => not_found(),
    }
}

// ============ Workforce rates ============

async fn list_rates(
    State(db): State<Shared>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("GET /workforce-rates?{}", raw.unwrap_or_default()));
    Json(paginate(db.rates.clone(), &params)).into_response()
}

async fn create_rate(State(db): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("POST /workforce-rates {}", body));
    let id = db.next_id();
    let type_id = body["workforce_type_id"].as_i64().unwrap_or_default();
    let rate = rate_json(
        id,
        type_id,
        &format!("Type {type_id}"),
        body["vehicle_category"].as_str().unwrap_or_default(),
        body["hourly_rate"].as_str().unwrap_or_default(),
    );
    db.rates.push(rate.clone());
    (StatusCode::CREATED, Json(rate)).into_response()
}

async fn update_rate(State(db): State<Shared>, Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("PUT /workforce-rates/{} {}", id, body));
    match db.rates.iter_mut().find(|r| r["id"] == id) {
        Some(rate) => {
            let mut patch = Map::new();
            if let Some(v) = body.get("hourly_rate") {
                patch.insert("hourly_rate".into(), v.clone());
            }
            if let Some(v) = body.get("vehicle_category") {
                patch.insert("vehicle_category".into(), v.clone());
            }
            merge(rate, Value::Object(patch));
            Json(json!({"data": rate.clone()})).into_response()
        }
        None => not_found(),
    }
}

// ============ Vehicle references ============

fn reference_json(id: i64, body: &Value) -> Value {
    json!({
        "id": id,
        "code": body["code"],
        "label": body["label"],
        "description": body["description"],
        "status": active(),
        "created_at": CREATED_AT
    })
}

async fn create_brand(State(db): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("POST /brands {}", body));
    let id = db.next_id();
    (StatusCode::CREATED, Json(json!({"data": reference_json(id, &body)}))).into_response()
}

async fn create_color(State(db): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("POST /colors {}", body));
    if body["code"].as_str().unwrap_or_default().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": {"code": ["Le code est obligatoire"]}
            })),
        )
            .into_response();
    }
    let id = db.next_id();
    (StatusCode::CREATED, Json(reference_json(id, &body))).into_response()
}

async fn create_vehicle_model(State(db): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("POST /vehicle-models {}", body));
    let id = db.next_id();
    let mut model = reference_json(id, &body);
    let brand_id = body["brand_id"].as_i64().unwrap_or_default();
    model["brand"] = json!({"id": brand_id, "label": format!("Marque {brand_id}")});
    (StatusCode::CREATED, Json(json!({"data": model}))).into_response()
}

pub fn router(db: Shared) -> Router {
    Router::new()
        .route("/banks", get(list_banks).post(create_bank))
        .route("/banks/{id}", get(show_bank).put(update_bank).delete(delete_bank))
        .route("/banks/{id}/{action}", put(toggle_bank))
        .route("/workforce-rates", get(list_rates).post(create_rate))
        .route("/workforce-rates/{id}", put(update_rate))
        .route("/brands", post(create_brand))
        .route("/colors", post(create_color))
        .route("/vehicle-models", post(create_vehicle_model))
        .with_state(db)
}

/// Backend seeded with `banks` as `(code, name)` pairs
pub fn backend(banks: &[(&str, &str)]) -> (Arc<OneshotHttpClient>, Shared) {
    let mut db = Backend::default();
    for (code, name) in banks {
        let id = db.next_id();
        db.banks.push(bank_json(id, code, name));
    }
    let db: Shared = Arc::new(Mutex::new(db));
    let http = Arc::new(OneshotHttpClient::new(router(db.clone())));
    (http, db)
}

pub fn bank_store(http: Arc<OneshotHttpClient>) -> Arc<ResourceStore<Banks, OneshotHttpClient>> {
    Arc::new(ResourceStore::from_http(http).with_filters(ListFilters::new().with_per_page(25)))
}

pub fn rate_store(http: Arc<OneshotHttpClient>) -> Arc<ResourceStore<WorkforceRates, OneshotHttpClient>> {
    Arc::new(ResourceStore::from_http(http))
}

pub fn requests(db: &Shared) -> Vec<String> {
    db.lock().unwrap().requests.clone()
}
