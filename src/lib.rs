pub mod catalog;
pub mod engine;
pub mod model;
pub mod scenario;
pub mod testutil;

pub use catalog::{Catalog, CatalogError, CatalogProvider, CatalogSource};
pub use engine::{
    AssignmentReport, ContactKind, ContactReport, DailyReport, EraContext, HealthEngine, Terrain,
    TransmissionOutcome, TreatmentOutcome,
};
pub use model::{
    ActiveDisease, Character, CharacterHealth, CharacterKind, DiseaseCategory, DiseaseDef,
    DiseaseStage, Era, GameEra, HealthStatus, Immunity, MedicineDef, Region, SimDate,
};
