//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables son opcionales; los valores inválidos se reportan al
//! arrancar.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::Level;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Fichero JSON del store
    pub data_file: PathBuf,
    /// Vacío = cualquier origen
    pub cors_origins: Vec<String>,
    pub log_level: Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            data_file: PathBuf::from("data.json"),
            cors_origins: Vec::new(),
            log_level: Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", value))?,
            Err(_) => defaults.port,
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(value) => Level::from_str(value.trim())
                .with_context(|| format!("LOG_LEVEL must be a tracing level, got '{}'", value))?,
            Err(_) => defaults.log_level,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            data_file: env::var("DATA_FILE").map(PathBuf::from).unwrap_or(defaults.data_file),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|value| parse_origins(&value))
                .unwrap_or(defaults.cors_origins),
            log_level,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Lista separada por comas; "*" equivale a cualquier origen
fn parse_origins(value: &str) -> Vec<String> {
    let origins: Vec<String> = value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}
