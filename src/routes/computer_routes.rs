use crate::controllers::computer_controller::ComputerController;
use crate::dto::asset_dto::{ComputerResponse, CreateComputerRequest, UpdateComputerRequest};
use crate::dto::common_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_computer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_computer))
        .route("/", get(list_computers))
        .route("/:id", get(get_computer))
        .route("/:id", put(update_computer))
        .route("/:id", delete(delete_computer))
}

async fn create_computer(
    State(state): State<AppState>,
    Json(request): Json<CreateComputerRequest>,
) -> Result<Json<ApiResponse<ComputerResponse>>, AppError> {
    let controller = ComputerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(response))
}

async fn get_computer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ComputerResponse>, AppError> {
    let controller = ComputerController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_computers(
    State(state): State<AppState>,
) -> Result<Json<Vec<ComputerResponse>>, AppError> {
    let controller = ComputerController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_computer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateComputerRequest>,
) -> Result<Json<ApiResponse<ComputerResponse>>, AppError> {
    let controller = ComputerController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(response))
}

async fn delete_computer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ComputerController::new(state.pool.clone());
    controller.delete(id).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "PC eliminado exitosamente"
    })))
}
