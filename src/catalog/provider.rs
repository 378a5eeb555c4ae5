use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use super::Catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("disease catalog has not been loaded yet")]
    NotLoaded,
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a provider fetches its catalog from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// The data set compiled into the crate.
    Builtin,
    /// A host-supplied JSON asset.
    JsonFile(PathBuf),
}

#[derive(Debug)]
enum LoadState {
    Unloaded,
    Ready(Catalog),
    /// Last attempt failed; the message is kept for observability and the
    /// next `ensure_loaded` retries from scratch.
    Failed(String),
}

/// Explicitly constructed, injected holder of the catalog.
///
/// The load is lazy and memoized: the first successful `ensure_loaded`
/// resolves the source, every later call returns the resident catalog. The
/// engine is single-threaded, so the memo doubles as the single-flight
/// guarantee. Consumers either call `ensure_loaded` for a hard guarantee or
/// `get` for a typed not-ready result.
#[derive(Debug)]
pub struct CatalogProvider {
    source: CatalogSource,
    state: LoadState,
}

impl CatalogProvider {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            state: LoadState::Unloaded,
        }
    }

    /// Provider over the builtin data set, loaded lazily like any other.
    pub fn builtin() -> Self {
        Self::new(CatalogSource::Builtin)
    }

    /// Provider that is ready immediately. Test scenarios use this so no
    /// call site has to thread a load step through.
    pub fn preloaded(catalog: Catalog) -> Self {
        Self {
            source: CatalogSource::Builtin,
            state: LoadState::Ready(catalog),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    /// Message from the most recent failed load, if the provider is in the
    /// failed state.
    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Typed access without triggering a load.
    pub fn get(&self) -> Result<&Catalog, CatalogError> {
        match &self.state {
            LoadState::Ready(catalog) => Ok(catalog),
            _ => Err(CatalogError::NotLoaded),
        }
    }

    /// Load the catalog if it is not already resident.
    ///
    /// A failure clears the memo (recorded as `Failed`), so a later call
    /// retries rather than staying broken forever.
    pub fn ensure_loaded(&mut self) -> Result<&Catalog, CatalogError> {
        if !self.is_ready() {
            match self.load() {
                Ok(catalog) => {
                    debug!(
                        diseases = catalog.diseases.len(),
                        medicines = catalog.medicines.len(),
                        "disease catalog loaded"
                    );
                    self.state = LoadState::Ready(catalog);
                }
                Err(err) => {
                    warn!(error = %err, "disease catalog load failed");
                    self.state = LoadState::Failed(err.to_string());
                    return Err(err);
                }
            }
        }
        self.get()
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        match &self.source {
            CatalogSource::Builtin => Ok(Catalog::builtin()),
            CatalogSource::JsonFile(path) => {
                let json = fs::read_to_string(path)?;
                Ok(Catalog::from_json_str(&json)?)
            }
        }
    }
}
