//! Motor de recordatorios de mantenimiento
//!
//! Calcula, por cada regla de la tabla, cuánto margen queda (en km y en días)
//! hasta el próximo servicio y clasifica el resultado. Es una función pura del
//! vehículo, su historial, la tabla de reglas y la fecha "hoy" capturada por
//! el llamador, así que puede invocarse desde varios hilos sin estado compartido.

use chrono::NaiveDate;

use crate::config::maintenance_rules::{default_rules, DUE_SOON_DAYS, DUE_SOON_KM};
use crate::models::{MaintenanceEvent, MaintenanceReminder, ReminderStatus, ServiceRule, Vehicle};
use crate::services::service_matcher::service_type_matches;

/// Motor de recordatorios sobre una tabla de reglas fija
#[derive(Debug, Clone)]
pub struct ReminderEngine {
    rules: Vec<ServiceRule>,
}

impl Default for ReminderEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl ReminderEngine {
    pub fn new(rules: Vec<ServiceRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ServiceRule] {
        &self.rules
    }

    /// Un recordatorio por regla, ordenado por estado (overdue, due_soon, ok).
    /// Dentro del mismo estado se conserva el orden de la tabla.
    pub fn generate(
        &self,
        vehicle: &Vehicle,
        events: &[MaintenanceEvent],
        today: NaiveDate,
    ) -> Vec<MaintenanceReminder> {
        let mut reminders: Vec<MaintenanceReminder> = self
            .rules
            .iter()
            .map(|rule| reminder_for_rule(rule, vehicle, events, today))
            .collect();

        // sort_by_key es estable
        reminders.sort_by_key(|reminder| reminder.status);
        reminders
    }
}

/// Clasificar el margen restante
pub fn classify(due_in_km: i64, due_in_days: i64) -> ReminderStatus {
    if due_in_km <= 0 || due_in_days <= 0 {
        ReminderStatus::Overdue
    } else if due_in_km <= DUE_SOON_KM || due_in_days <= DUE_SOON_DAYS {
        ReminderStatus::DueSoon
    } else {
        ReminderStatus::Ok
    }
}

/// Último servicio que cuenta para la regla.
///
/// Con varias fechas iguales gana el primero en orden del store.
fn last_service<'a>(
    rule: &ServiceRule,
    vehicle: &Vehicle,
    events: &'a [MaintenanceEvent],
) -> Option<&'a MaintenanceEvent> {
    events
        .iter()
        .filter(|event| event.vehicle_id == vehicle.id)
        .filter(|event| service_type_matches(&rule.service_type, &event.service_type))
        .fold(None, |latest: Option<&MaintenanceEvent>, event| match latest {
            Some(current) if current.date >= event.date => Some(current),
            _ => Some(event),
        })
}

fn reminder_for_rule(
    rule: &ServiceRule,
    vehicle: &Vehicle,
    events: &[MaintenanceEvent],
    today: NaiveDate,
) -> MaintenanceReminder {
    let last = last_service(rule, vehicle, events);

    let (due_in_km, due_in_days) = match last {
        Some(event) => {
            let km_since = vehicle.current_mileage - event.mileage;
            let days_since = (today - event.date).num_days();
            (rule.interval_km - km_since, rule.interval_days - days_since)
        }
        None => (rule.interval_km, rule.interval_days),
    };

    MaintenanceReminder {
        service_type: rule.service_type.clone(),
        due_in_km,
        due_in_days,
        last_service_date: last.map(|event| event.date),
        last_service_mileage: last.map(|event| event.mileage),
        status: classify(due_in_km, due_in_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn vehicle(current_mileage: i64) -> Vehicle {
        Vehicle {
            id: 1,
            model: "Honda Civic".to_string(),
            year: 2019,
            current_mileage,
            created_at: Utc::now(),
        }
    }

    fn event(id: i64, service_type: &str, days_ago: i64, mileage: i64) -> MaintenanceEvent {
        MaintenanceEvent {
            id,
            vehicle_id: 1,
            service_type: service_type.to_string(),
            date: today() - Duration::days(days_ago),
            mileage,
            cost: None,
            notes: None,
        }
    }

    fn find<'a>(reminders: &'a [MaintenanceReminder], service_type: &str) -> &'a MaintenanceReminder {
        reminders
            .iter()
            .find(|r| r.service_type == service_type)
            .unwrap()
    }

    #[test]
    fn test_one_reminder_per_rule() {
        let engine = ReminderEngine::default();
        let events = vec![
            event(1, "Oil Change", 10, 14000),
            event(2, "oil change", 100, 9000),
            event(3, "Car wash", 3, 14900),
        ];

        let reminders = engine.generate(&vehicle(15000), &events, today());
        assert_eq!(reminders.len(), engine.rules().len());

        for rule in engine.rules() {
            let count = reminders
                .iter()
                .filter(|r| r.service_type == rule.service_type)
                .count();
            assert_eq!(count, 1, "{}", rule.service_type);
        }
    }

    #[test]
    fn test_no_history_uses_full_interval() {
        let engine = ReminderEngine::default();
        let reminders = engine.generate(&vehicle(15000), &[], today());

        for rule in engine.rules() {
            let reminder = find(&reminders, &rule.service_type);
            assert_eq!(reminder.due_in_km, rule.interval_km);
            assert_eq!(reminder.due_in_days, rule.interval_days);
            assert_eq!(reminder.last_service_date, None);
            assert_eq!(reminder.last_service_mileage, None);
            assert_eq!(reminder.status, ReminderStatus::Ok);
        }

        // Todas "ok": se conserva el orden de la tabla
        let names: Vec<&str> = reminders.iter().map(|r| r.service_type.as_str()).collect();
        let rule_names: Vec<&str> = engine.rules().iter().map(|r| r.service_type.as_str()).collect();
        assert_eq!(names, rule_names);
    }

    #[test]
    fn test_overdue_by_distance_and_time() {
        let engine = ReminderEngine::default();
        let events = vec![event(1, "Oil Change", 200, 14000)];

        let reminders = engine.generate(&vehicle(20000), &events, today());
        let oil = find(&reminders, "Oil Change");

        assert_eq!(oil.due_in_km, -1000);
        assert_eq!(oil.due_in_days, -20);
        assert_eq!(oil.status, ReminderStatus::Overdue);
        assert_eq!(oil.last_service_date, Some(today() - Duration::days(200)));
        assert_eq!(oil.last_service_mileage, Some(14000));

        // El vencido va primero
        assert_eq!(reminders[0].service_type, "Oil Change");
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0, 100), ReminderStatus::Overdue);
        assert_eq!(classify(100, 0), ReminderStatus::Overdue);
        assert_eq!(classify(-5, -5), ReminderStatus::Overdue);

        assert_eq!(classify(1000, 100), ReminderStatus::DueSoon);
        assert_eq!(classify(5000, 30), ReminderStatus::DueSoon);
        assert_eq!(classify(1, 1), ReminderStatus::DueSoon);

        assert_eq!(classify(1001, 31), ReminderStatus::Ok);
        assert_eq!(classify(5000, 180), ReminderStatus::Ok);
    }

    #[test]
    fn test_whichever_dimension_fires_first() {
        let engine = ReminderEngine::default();

        // Pocos km pero mucho tiempo
        let events = vec![event(1, "Oil Change", 170, 14900)];
        let reminders = engine.generate(&vehicle(15000), &events, today());
        let oil = find(&reminders, "Oil Change");
        assert_eq!(oil.due_in_km, 4900);
        assert_eq!(oil.due_in_days, 10);
        assert_eq!(oil.status, ReminderStatus::DueSoon);

        // Poco tiempo pero muchos km
        let events = vec![event(1, "Oil Change", 5, 10000)];
        let reminders = engine.generate(&vehicle(15000), &events, today());
        let oil = find(&reminders, "Oil Change");
        assert_eq!(oil.due_in_km, 0);
        assert_eq!(oil.status, ReminderStatus::Overdue);
    }

    #[test]
    fn test_latest_matching_event_wins() {
        let engine = ReminderEngine::default();
        let events = vec![
            event(1, "Oil Change", 300, 5000),
            event(2, "Full Synthetic Oil Change", 20, 14000),
            event(3, "oil change", 150, 10000),
        ];

        let reminders = engine.generate(&vehicle(15000), &events, today());
        let oil = find(&reminders, "Oil Change");

        assert_eq!(oil.last_service_mileage, Some(14000));
        assert_eq!(oil.due_in_km, 4000);
        assert_eq!(oil.due_in_days, 160);
        assert_eq!(oil.status, ReminderStatus::Ok);
    }

    #[test]
    fn test_same_date_first_in_store_order_wins() {
        let engine = ReminderEngine::default();
        let events = vec![
            event(1, "Tire Rotation", 30, 11000),
            event(2, "tire rotation", 30, 12000),
        ];

        let reminders = engine.generate(&vehicle(15000), &events, today());
        let tires = find(&reminders, "Tire Rotation");
        assert_eq!(tires.last_service_mileage, Some(11000));
    }

    #[test]
    fn test_fuzzy_matching_feeds_rule() {
        let engine = ReminderEngine::default();
        let events = vec![event(1, "full synthetic oil change", 10, 14500)];

        let reminders = engine.generate(&vehicle(15000), &events, today());
        let oil = find(&reminders, "Oil Change");
        assert_eq!(oil.last_service_mileage, Some(14500));

        // El resto de reglas no se ven afectadas
        let tires = find(&reminders, "Tire Rotation");
        assert_eq!(tires.last_service_date, None);
    }

    #[test]
    fn test_events_of_other_vehicles_are_ignored() {
        let engine = ReminderEngine::default();
        let mut foreign = event(1, "Oil Change", 1, 14999);
        foreign.vehicle_id = 2;

        let reminders = engine.generate(&vehicle(15000), &[foreign], today());
        let oil = find(&reminders, "Oil Change");
        assert_eq!(oil.last_service_date, None);
        assert_eq!(oil.due_in_km, 5000);
    }

    #[test]
    fn test_stable_order_within_status() {
        let engine = ReminderEngine::default();
        let events = vec![
            // due_soon
            event(1, "Battery Check", 710, 14000),
            // overdue
            event(2, "Air Filter", 400, 10000),
            // due_soon
            event(3, "Tire Rotation", 10, 5500),
            // overdue
            event(4, "Oil Change", 10, 9000),
        ];

        let reminders = engine.generate(&vehicle(15000), &events, today());
        let order: Vec<(&str, ReminderStatus)> = reminders
            .iter()
            .map(|r| (r.service_type.as_str(), r.status))
            .collect();

        assert_eq!(
            order,
            vec![
                ("Oil Change", ReminderStatus::Overdue),
                ("Air Filter", ReminderStatus::Overdue),
                ("Tire Rotation", ReminderStatus::DueSoon),
                ("Battery Check", ReminderStatus::DueSoon),
                ("Brake Inspection", ReminderStatus::Ok),
            ]
        );
    }

    #[test]
    fn test_future_dated_event_extends_day_budget() {
        let engine = ReminderEngine::default();
        let events = vec![event(1, "Oil Change", -10, 15000)];

        let reminders = engine.generate(&vehicle(15000), &events, today());
        let oil = find(&reminders, "Oil Change");
        assert_eq!(oil.due_in_days, 190);
        assert_eq!(oil.due_in_km, 5000);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let engine = ReminderEngine::default();
        let events = vec![
            event(1, "Oil Change", 200, 14000),
            event(2, "Brake Inspection", 50, 18000),
        ];
        let v = vehicle(20000);

        let first = engine.generate(&v, &events, today());
        let second = engine.generate(&v, &events, today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_rule_table() {
        let engine = ReminderEngine::new(vec![ServiceRule::new("Coolant Flush", 40000, 730)]);
        let reminders = engine.generate(&vehicle(15000), &[], today());

        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].service_type, "Coolant Flush");
        assert_eq!(reminders[0].due_in_km, 40000);
    }
}
