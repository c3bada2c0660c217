//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que se persisten en el
//! documento del store y los modelos derivados (recordatorios).

pub mod maintenance;
pub mod reminder;
pub mod vehicle;

pub use maintenance::{MaintenanceEvent, NewMaintenanceEvent};
pub use reminder::{MaintenanceReminder, ReminderStatus, ServiceRule};
pub use vehicle::Vehicle;
