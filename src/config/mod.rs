//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la tabla de reglas
//! de mantenimiento.

pub mod environment;
pub mod maintenance_rules;

pub use environment::*;
