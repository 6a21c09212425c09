use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::{
    CategoryCostReportResponse, CostRangeQuery, CostReportResponse, VehicleCostReportResponse,
    WarningFeedQuery, WarningFeedResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/warnings", get(get_warnings))
        .route("/costs", get(get_monthly_costs))
        .route("/costs/vehicles", get(get_vehicle_costs))
        .route("/costs/categories", get(get_category_costs))
}

async fn get_warnings(
    State(state): State<AppState>,
    Query(query): Query<WarningFeedQuery>,
) -> Result<Json<WarningFeedResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone(), state.dashboard_cache());
    let response = controller.warning_feed(query.category).await?;
    Ok(Json(response))
}

async fn get_monthly_costs(
    State(state): State<AppState>,
    Query(range): Query<CostRangeQuery>,
) -> Result<Json<CostReportResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone(), state.dashboard_cache());
    let response = controller.monthly_costs(&range.start, &range.end).await?;
    Ok(Json(response))
}

async fn get_vehicle_costs(
    State(state): State<AppState>,
    Query(range): Query<CostRangeQuery>,
) -> Result<Json<VehicleCostReportResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone(), state.dashboard_cache());
    let response = controller.vehicle_costs(&range.start, &range.end).await?;
    Ok(Json(response))
}

async fn get_category_costs(
    State(state): State<AppState>,
    Query(range): Query<CostRangeQuery>,
) -> Result<Json<CategoryCostReportResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone(), state.dashboard_cache());
    let response = controller.category_costs(&range.start, &range.end).await?;
    Ok(Json(response))
}
