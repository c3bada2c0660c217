//! Store en fichero JSON
//!
//! Persiste el `StoreDocument` completo en un único fichero. Cada
//! lectura-modificación-escritura se serializa dentro del proceso con un
//! mutex y se escribe a un fichero temporal que luego se renombra, de modo
//! que nunca se observa un documento a medio escribir. Varios procesos
//! escribiendo el mismo fichero no están soportados.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::document::StoreDocument;

/// Errores del store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid store document: {0}")]
    Document(#[from] serde_json::Error),
}

pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn load(&self) -> Result<StoreDocument, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let document: StoreDocument = serde_json::from_slice(&bytes)?;
                debug!(
                    "📥 Documento cargado: {} vehículos, {} eventos",
                    document.vehicles.len(),
                    document.maintenance_events.len()
                );
                Ok(document)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("📄 {} no existe, usando documento vacío", self.path.display());
                Ok(StoreDocument::default())
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn save(&self, document: &StoreDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_json::to_vec_pretty(document)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, payload).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        debug!("💾 Documento guardado en {}", self.path.display());
        Ok(())
    }

    /// Leer una vista del documento actual
    pub async fn read<T>(&self, f: impl FnOnce(&StoreDocument) -> T) -> Result<T, StoreError> {
        let _guard = self.lock.lock().await;
        let document = self.load().await?;
        Ok(f(&document))
    }

    /// Modificar el documento y persistirlo antes de devolver.
    ///
    /// Si el closure falla no se escribe nada.
    pub async fn update<T, E>(
        &self,
        f: impl FnOnce(&mut StoreDocument) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        let result = f(&mut document)?;
        self.save(&document).await?;
        Ok(result)
    }

    /// Crear el fichero vacío si no existe y comprobar que se puede leer
    pub async fn initialize(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let document = self.load().await?;
        if tokio::fs::try_exists(&self.path).await? {
            info!(
                "📂 Store existente: {} vehículos, {} eventos",
                document.vehicles.len(),
                document.maintenance_events.len()
            );
        } else {
            self.save(&document).await?;
            info!("🆕 Store creado en {}", self.path.display());
        }
        Ok(())
    }
}
