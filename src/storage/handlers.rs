use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    routing::{delete, get, post},
};
use std::sync::Arc;

use super::kv::KvStore;
use super::protocol::{
    ENDPOINT_KV_DELETE, ENDPOINT_KV_GET, ENDPOINT_KV_PUT, ENDPOINT_KV_TAKE, KvAckResponse,
    KvPutRequest, KvValueResponse,
};

/// Routes that expose `store` as a store node for other note nodes.
pub fn store_router(store: Arc<dyn KvStore>) -> Router {
    Router::new()
        .route(&format!("{}/:key", ENDPOINT_KV_GET), get(handle_kv_get))
        .route(ENDPOINT_KV_PUT, post(handle_kv_put))
        .route(&format!("{}/:key", ENDPOINT_KV_DELETE), delete(handle_kv_delete))
        .route(&format!("{}/:key", ENDPOINT_KV_TAKE), post(handle_kv_take))
        .layer(Extension(store))
}

pub async fn handle_kv_get(
    Extension(store): Extension<Arc<dyn KvStore>>,
    Path(key): Path<String>,
) -> (StatusCode, Json<KvValueResponse>) {
    value_response(store.get(&key).await, "get")
}

pub async fn handle_kv_take(
    Extension(store): Extension<Arc<dyn KvStore>>,
    Path(key): Path<String>,
) -> (StatusCode, Json<KvValueResponse>) {
    value_response(store.take(&key).await, "take")
}

pub async fn handle_kv_put(
    Extension(store): Extension<Arc<dyn KvStore>>,
    Json(req): Json<KvPutRequest>,
) -> (StatusCode, Json<KvAckResponse>) {
    match store.put(&req.key, req.value).await {
        Ok(_) => (StatusCode::OK, Json(KvAckResponse { success: true })),
        Err(e) => {
            tracing::error!("Failed to put key: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(KvAckResponse { success: false }),
            )
        }
    }
}

pub async fn handle_kv_delete(
    Extension(store): Extension<Arc<dyn KvStore>>,
    Path(key): Path<String>,
) -> (StatusCode, Json<KvAckResponse>) {
    match store.delete(&key).await {
        Ok(_) => (StatusCode::OK, Json(KvAckResponse { success: true })),
        Err(e) => {
            tracing::error!("Failed to delete key: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(KvAckResponse { success: false }),
            )
        }
    }
}

fn value_response(
    result: Result<Option<String>, super::kv::StoreError>,
    op: &str,
) -> (StatusCode, Json<KvValueResponse>) {
    match result {
        Ok(Some(value)) => (
            StatusCode::OK,
            Json(KvValueResponse { value: Some(value) }),
        ),
        Ok(None) => (StatusCode::NOT_FOUND, Json(KvValueResponse { value: None })),
        Err(e) => {
            tracing::error!("Failed to {} key: {}", op, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(KvValueResponse { value: None }),
            )
        }
    }
}
