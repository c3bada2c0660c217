//! Clasificación de eventos por tipo de servicio
//!
//! Los eventos llevan un tipo en texto libre ("Full Oil Change") y las reglas
//! usan nombres canónicos ("Oil Change"). Este módulo decide si un evento
//! cuenta para una regla, aislado del cálculo de recordatorios.

/// Coincidencia por contención bidireccional sin distinguir mayúsculas.
pub fn service_type_matches(rule_type: &str, event_type: &str) -> bool {
    let rule = rule_type.to_lowercase();
    let event = event_type.to_lowercase();
    rule.contains(&event) || event.contains(&rule)
}
