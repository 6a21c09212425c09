use crate::controllers::maintenance_controller::MaintenanceController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::dashboard_dto::{CostRangeQuery, CostReportResponse};
use crate::dto::maintenance_dto::{
    CreateMaintenanceRecordRequest, CreateMileageRequest, MaintenanceRecordResponse,
    MileageResponse,
};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/maintenance", get(list_maintenance_records))
        .route("/:id/maintenance", post(create_maintenance_record))
        .route(
            "/:id/maintenance/:record_id",
            delete(delete_maintenance_record),
        )
        .route("/:id/mileage", get(list_mileage))
        .route("/:id/mileage", post(create_mileage))
        .route("/:id/costs", get(get_vehicle_costs))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}

async fn list_maintenance_records(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MaintenanceRecordResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list_records(id).await?;
    Ok(Json(response))
}

async fn create_maintenance_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateMaintenanceRecordRequest>,
) -> Result<Json<ApiResponse<MaintenanceRecordResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.add_record(id, request).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(response))
}

async fn delete_maintenance_record(
    State(state): State<AppState>,
    Path((id, record_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete_record(id, record_id).await?;
    state.invalidate_dashboard_cache().await;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Registro de mantenimiento eliminado exitosamente"
    })))
}

async fn list_mileage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MileageResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list_mileage(id).await?;
    Ok(Json(response))
}

async fn create_mileage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateMileageRequest>,
) -> Result<Json<ApiResponse<MileageResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.add_mileage(id, request).await?;
    Ok(Json(response))
}

async fn get_vehicle_costs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(range): Query<CostRangeQuery>,
) -> Result<Json<CostReportResponse>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.vehicle_costs(id, &range.start, &range.end).await?;
    Ok(Json(response))
}
