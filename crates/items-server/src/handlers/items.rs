//! Item handlers

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateItemRequest, ItemEnvelope, ItemsEnvelope, FALLBACK_NOTE};
use crate::AppState;

fn fallback_note(state: &AppState) -> Option<&'static str> {
    state.store.is_fallback().then_some(FALLBACK_NOTE)
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<ItemsEnvelope>> {
    let items = state.store.list_items().await?;

    Ok(Json(ItemsEnvelope {
        success: true,
        items,
        note: fallback_note(&state),
    }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ItemEnvelope>> {
    // A non-numeric id cannot match any stored item.
    let id: i64 = id.parse().map_err(|_| ApiError::NotFound)?;

    let item = state.store.get_item(id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(ItemEnvelope {
        success: true,
        item,
        note: fallback_note(&state),
    }))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<ItemEnvelope>)> {
    // Decoded by hand so a malformed body surfaces as the uniform 500
    // envelope rather than an extractor rejection.
    let req: CreateItemRequest = serde_json::from_slice(&body)?;

    let name = match req.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::Validation("Name is required".to_string())),
    };
    // Empty description is stored as null.
    let description = req.description.as_deref().filter(|d| !d.is_empty());

    let item = state.store.create_item(name, description).await?;

    Ok((
        StatusCode::CREATED,
        Json(ItemEnvelope {
            success: true,
            item,
            note: fallback_note(&state),
        }),
    ))
}
