use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_empty;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(range(min = 0))]
    pub current_mileage: i64,
}

// Response de borrado
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
