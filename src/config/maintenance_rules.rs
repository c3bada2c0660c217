//! Tabla de reglas de mantenimiento
//!
//! Tabla fija, no persistida ni editable. El orden de la tabla es el orden
//! en que se emiten los recordatorios dentro de un mismo estado.

use crate::models::ServiceRule;

/// Margen en km para considerar un servicio "due soon"
pub const DUE_SOON_KM: i64 = 1000;

/// Margen en días para considerar un servicio "due soon"
pub const DUE_SOON_DAYS: i64 = 30;

/// Reglas por defecto: (tipo, intervalo km, intervalo días)
const DEFAULT_RULES: [(&str, i64, i64); 5] = [
    ("Oil Change", 5000, 180),
    ("Tire Rotation", 10000, 365),
    ("Brake Inspection", 20000, 365),
    ("Air Filter", 15000, 365),
    ("Battery Check", 30000, 730),
];

pub fn default_rules() -> Vec<ServiceRule> {
    DEFAULT_RULES
        .iter()
        .map(|(service_type, km, days)| ServiceRule::new(service_type, *km, *days))
        .collect()
}
