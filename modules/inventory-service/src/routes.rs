//! Axum route handlers for the inventory HTTP API.

use crate::date;
use crate::error::InventoryError;
use crate::extract::{ClientOrigin, Params};
use crate::inventory::Inventory;
use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use inventory_types::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

const ADD_FIELDS: &[&str] = &["name", "expired_date"];
const EDIT_FIELDS: &[&str] = &["old_name", "old_expired_date", "new_name", "new_expired_date"];
const DELETE_FIELDS: &[&str] = &["name", "expired_date"];

pub struct AppState {
    pub inventory: Mutex<Inventory>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: Mutex::new(inventory),
            start_time: Instant::now(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/item",
            axum::routing::post(add_item).put(edit_item).delete(delete_item),
        )
        .route("/items", get(list_items))
        .route("/names", get(list_names))
        .route("/expired_items", get(expired_items))
        .route("/status", get(status))
        .with_state(state)
}

/// Logs failures with the caller's address before they become error responses.
fn finish<T: IntoResponse>(
    origin: ClientOrigin,
    route: &str,
    result: Result<T, InventoryError>,
) -> Response {
    match result {
        Ok(body) => body.into_response(),
        Err(e) => {
            let fields = e.fields();
            if fields.is_empty() {
                log::warn!("({}) {}: Error: {}", origin, route, e);
            } else {
                log::warn!("({}) {}: Error: {} [{}]", origin, route, e, fields);
            }
            e.into_response()
        }
    }
}

fn valid_date(field: &'static str, value: String) -> Result<String, InventoryError> {
    if date::is_valid(&value) {
        Ok(value)
    } else {
        Err(InventoryError::InvalidDate { field, value })
    }
}

fn ensure_present(inventory: &Inventory, name: &str, expired_date: &str) -> Result<(), InventoryError> {
    if inventory.store().find_exact(name, expired_date) {
        Ok(())
    } else {
        Err(InventoryError::NotFound {
            name: name.to_string(),
            expired_date: expired_date.to_string(),
        })
    }
}

// POST /item
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    origin: ClientOrigin,
    params: Params,
) -> Response {
    log::info!("({}) POST /item", origin);
    finish(origin, "POST /item", add(&state, &params).await)
}

async fn add(state: &AppState, params: &Params) -> Result<Json<Vec<String>>, InventoryError> {
    params.require(ADD_FIELDS)?;
    let name = params.text("name");
    let count = params.count()?;
    let expired_date = valid_date("expired_date", params.text("expired_date"))?;
    log::debug!("add name={} | expired_date={} | count={}", name, expired_date, count);

    let mut inventory = state.inventory.lock().await;
    inventory.add(&name, &expired_date, count)?;
    Ok(Json(inventory.store().distinct_names()))
}

// GET /items
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    origin: ClientOrigin,
) -> Json<Vec<Item>> {
    log::info!("({}) GET /items", origin);
    let inventory = state.inventory.lock().await;
    Json(inventory.store().list_all().to_vec())
}

// PUT /item
pub async fn edit_item(
    State(state): State<Arc<AppState>>,
    origin: ClientOrigin,
    params: Params,
) -> Response {
    log::info!("({}) PUT /item", origin);
    finish(origin, "PUT /item", edit(&state, &params).await)
}

async fn edit(state: &AppState, params: &Params) -> Result<Json<()>, InventoryError> {
    params.require(EDIT_FIELDS)?;
    let old_name = params.text("old_name");
    let old_expired_date = params.text("old_expired_date");
    let new_name = params.text("new_name");
    let new_expired_date = valid_date("new_expired_date", params.text("new_expired_date"))?;
    log::debug!(
        "edit old_name={} | old_expired_date={} | new_name={} | new_expired_date={}",
        old_name,
        old_expired_date,
        new_name,
        new_expired_date
    );

    let mut inventory = state.inventory.lock().await;
    ensure_present(&inventory, &old_name, &old_expired_date)?;
    inventory.edit(&old_name, &old_expired_date, &new_name, &new_expired_date)?;
    Ok(Json(()))
}

// DELETE /item
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    origin: ClientOrigin,
    params: Params,
) -> Response {
    log::info!("({}) DELETE /item", origin);
    finish(origin, "DELETE /item", delete(&state, &params).await)
}

async fn delete(state: &AppState, params: &Params) -> Result<Json<Vec<Item>>, InventoryError> {
    params.require(DELETE_FIELDS)?;
    let name = params.text("name");
    let expired_date = params.text("expired_date");
    log::debug!("delete name={} | expired_date={}", name, expired_date);

    let mut inventory = state.inventory.lock().await;
    ensure_present(&inventory, &name, &expired_date)?;
    inventory.remove(&name, &expired_date)?;
    Ok(Json(inventory.store().list_all().to_vec()))
}

// GET /names
pub async fn list_names(
    State(state): State<Arc<AppState>>,
    origin: ClientOrigin,
) -> Json<Vec<String>> {
    log::info!("({}) GET /names", origin);
    let inventory = state.inventory.lock().await;
    Json(inventory.store().distinct_names())
}

// GET /expired_items
pub async fn expired_items(
    State(state): State<Arc<AppState>>,
    origin: ClientOrigin,
) -> Json<Vec<Item>> {
    log::info!("({}) GET /expired_items", origin);
    let inventory = state.inventory.lock().await;
    Json(inventory.store().expiring_within(date::now()))
}

// GET /status
pub async fn status(
    State(state): State<Arc<AppState>>,
    origin: ClientOrigin,
) -> Json<ServiceStatus> {
    log::info!("({}) GET /status", origin);
    let inventory = state.inventory.lock().await;
    Json(ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
        total_items: inventory.store().len(),
        distinct_names: inventory.store().distinct_names().len(),
    })
}
