//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: los motores
//! puros de avisos de vencimiento y de agregación de costos. Los motores
//! no hacen I/O ni guardan estado entre llamadas; reciben un snapshot de
//! las colecciones y devuelven view-models listos para renderizar.

pub mod cost_service;
pub mod warning_service;
