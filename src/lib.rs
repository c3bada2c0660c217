//! Automotive Maintenance Tracker
//!
//! API para registrar vehículos y su historial de mantenimiento, y derivar
//! recordatorios de servicio (ok / due_soon / overdue) a partir de reglas
//! de intervalo por distancia y por tiempo.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
