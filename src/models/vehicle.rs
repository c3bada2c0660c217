//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como se persiste en el
//! documento del store y se devuelve por la API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vehicle principal - mapea exactamente a la entrada `vehicles` del documento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Asignado por el store, nunca reutilizado
    pub id: i64,
    pub model: String,
    pub year: i32,
    /// Kilometraje actual en km
    pub current_mileage: i64,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Subir el kilometraje si la lectura es mayor que la actual
    pub fn record_odometer(&mut self, mileage: i64) {
        if mileage > self.current_mileage {
            self.current_mileage = mileage;
        }
    }
}
