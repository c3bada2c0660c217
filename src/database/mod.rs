//! Módulo de base de datos
//!
//! Persistencia del documento de mantenimiento en un fichero JSON.

pub mod document;
pub mod json_store;

pub use document::StoreDocument;
pub use json_store::{JsonFileStore, StoreError};
