use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    routing::get,
};

use crate::app::SharedItemStore;
use crate::app::routes::system::not_found;
use crate::app::dto::{CreateItemRequest, ItemResponse, ItemsResponse, MessageResponse, UpdateItemRequest};
use crate::app::errors::ApiError;

/// Item routes. A known path with an unsupported method is treated like an
/// unknown path (404), not 405.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item).fallback(not_found))
        .route(
            "/:name",
            get(get_item)
                .patch(update_item)
                .delete(delete_item)
                .fallback(not_found),
        )
}

pub async fn list_items(Extension(store): Extension<SharedItemStore>) -> Json<ItemsResponse> {
    Json(ItemsResponse { items: store.list() })
}

pub async fn create_item(
    Extension(store): Extension<SharedItemStore>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Json(body) = body?;
    let item = store.create(body.name, body.price);
    Ok(Json(ItemResponse { item }))
}

pub async fn get_item(
    Extension(store): Extension<SharedItemStore>,
    Path(name): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = store.find(&name)?;
    Ok(Json(ItemResponse { item }))
}

pub async fn update_item(
    Extension(store): Extension<SharedItemStore>,
    Path(name): Path<String>,
    body: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Json(body) = body?;
    let item = store.update(&name, body.into())?;
    Ok(Json(ItemResponse { item }))
}

pub async fn delete_item(
    Extension(store): Extension<SharedItemStore>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    store.remove(&name)?;
    Ok(Json(MessageResponse::deleted()))
}
