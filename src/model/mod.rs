pub mod character;
pub mod date;
pub mod disease;
pub mod era;
pub mod health;
pub mod medicine;
pub mod stats;

pub use character::{Character, CharacterKind};
pub use date::SimDate;
pub use disease::{
    DiseaseCategory, DiseaseDef, ExchangeRestriction, NarrativeHints, Prevalence,
    ProgressionStage, SeverityTier, TransmissionVector,
};
pub use era::{Era, GameEra, Region};
pub use health::{
    ActiveDisease, CharacterHealth, DiseaseStage, ExposureEvent, HealthStatus, Immunity,
    ProximityClass,
};
pub use medicine::{Effectiveness, MedicineDef};
pub use stats::{StatDeltas, Stats};
