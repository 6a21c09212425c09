//! Controllers de la API
//!
//! Orquestan validación, repositorios y motores de cálculo, y mapean
//! modelos a DTOs de respuesta.

pub mod computer_controller;
pub mod dashboard_controller;
pub mod general_asset_controller;
pub mod maintenance_controller;
pub mod vehicle_controller;
pub mod vendor_controller;
