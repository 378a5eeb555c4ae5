mod builtin;
mod provider;

pub use provider::{CatalogError, CatalogProvider, CatalogSource};

use serde::{Deserialize, Serialize};

use crate::model::{DiseaseDef, Era, ExchangeRestriction, MedicineDef, Prevalence, Region};

/// The immutable disease/medicine data set the engine runs against.
///
/// Treated as read-only configuration: the engine never mutates it, and a
/// host can ship its own by deserializing one from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub diseases: Vec<DiseaseDef>,
    pub prevalence: Vec<Prevalence>,
    pub medicines: Vec<MedicineDef>,
    pub exchange: ExchangeRestriction,
}

impl Catalog {
    /// The data set shipped with the crate.
    pub fn builtin() -> Catalog {
        builtin::catalog()
    }

    pub fn from_json_str(json: &str) -> Result<Catalog, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn disease(&self, id: &str) -> Option<&DiseaseDef> {
        self.diseases.iter().find(|d| d.id == id)
    }

    pub fn medicine(&self, id: &str) -> Option<&MedicineDef> {
        self.medicines.iter().find(|m| m.id == id)
    }

    /// Prevalence record for the exact era/region pair, if any.
    pub fn prevalence_for(&self, disease: &str, era: Era, region: Region) -> Option<&Prevalence> {
        self.prevalence
            .iter()
            .find(|p| p.disease == disease && p.era == era && p.region == region)
    }
}
