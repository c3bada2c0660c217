//! Services module
//!
//! Este módulo contiene la lógica de negocio pura de la aplicación: el motor
//! de recordatorios y la clasificación de eventos por tipo de servicio.
//! Ningún servicio toca la persistencia.

pub mod reminder_engine;
pub mod service_matcher;

pub use reminder_engine::ReminderEngine;
pub use service_matcher::service_type_matches;
