//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula las queries SQL de una entidad y expone
//! operaciones CRUD tipadas sobre el pool de PostgreSQL.

pub mod computer_repository;
pub mod general_asset_repository;
pub mod maintenance_repository;
pub mod vehicle_repository;
pub mod vendor_repository;
