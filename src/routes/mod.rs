pub mod computer_routes;
pub mod dashboard_routes;
pub mod general_asset_routes;
pub mod vehicle_routes;
pub mod vendor_routes;
