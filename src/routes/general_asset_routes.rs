use crate::controllers::general_asset_controller::GeneralAssetController;
use crate::dto::asset_dto::{
    CreateGeneralAssetRequest, GeneralAssetResponse, UpdateGeneralAssetRequest,
};
use crate::dto::common_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_general_asset_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_asset))
        .route("/", get(list_assets))
        .route("/:id", get(get_asset))
        .route("/:id", put(update_asset))
        .route("/:id", delete(delete_asset))
}

async fn create_asset(
    State(state): State<AppState>,
    Json(request): Json<CreateGeneralAssetRequest>,
) -> Result<Json<ApiResponse<GeneralAssetResponse>>, AppError> {
    let controller = GeneralAssetController::new(state.pool.clone());
    let response = controller.create(request).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(response))
}

async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GeneralAssetResponse>, AppError> {
    let controller = GeneralAssetController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<GeneralAssetResponse>>, AppError> {
    let controller = GeneralAssetController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateGeneralAssetRequest>,
) -> Result<Json<ApiResponse<GeneralAssetResponse>>, AppError> {
    let controller = GeneralAssetController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(response))
}

async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = GeneralAssetController::new(state.pool.clone());
    controller.delete(id).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Activo eliminado exitosamente"
    })))
}
