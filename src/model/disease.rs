use serde::{Deserialize, Serialize};

use super::era::{Era, Region};
use super::stats::StatDeltas;

/// Clinical family of a malady; medicines key their effectiveness off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseCategory {
    Respiratory,
    Gastrointestinal,
    VectorBorne,
    Contact,
    Parasitic,
    Zoonotic,
    Traumatic,
    Nutritional,
    Toxic,
}

/// Rough danger classification, used for spawn-time draw preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Minor,
    Moderate,
    Severe,
    Deadly,
}

/// Physical channel a malady spreads by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransmissionVector {
    Airborne,
    Waterborne,
    Insect,
    Contact,
    Zoonotic,
    Nutritional,
    NonContagious,
}

/// An ordered milestone within a disease's course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionStage {
    /// Days after contraction at which this stage fires.
    pub day_offset: u32,
    pub symptom: String,
    /// Severity floor once the stage is reached.
    pub severity: f64,
    #[serde(default, skip_serializing_if = "StatDeltas::is_none")]
    pub effects: StatDeltas,
}

/// Narrative hint text keyed by who is looking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrativeHints {
    /// What a bystander notices about a symptomatic carrier.
    #[serde(default)]
    pub onlooker: String,
    /// What the sufferer feels.
    #[serde(default)]
    pub victim: String,
    /// What a healer can diagnose.
    #[serde(default)]
    pub healer: String,
}

/// Immutable catalog record for one malady.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseDef {
    pub id: String,
    pub name: String,
    pub category: DiseaseCategory,
    pub severity: SeverityTier,
    pub eras: Vec<Era>,
    pub regions: Vec<Region>,
    /// First year the malady exists at all (e.g. syphilis post-contact).
    #[serde(default)]
    pub first_year: Option<i32>,
    /// Last year the malady circulates (e.g. eradication).
    #[serde(default)]
    pub last_year: Option<i32>,
    pub vector: TransmissionVector,
    /// Base per-exposure transmission probability in [0,1].
    pub base_transmission: f64,
    /// Multiplier for ambient proximity exposure.
    pub proximity_factor: f64,
    /// Multiplier reserved for direct-contact exposure.
    pub contact_factor: f64,
    pub symptoms: Vec<String>,
    pub incubation_days: u32,
    pub duration_days: u32,
    /// Reference mortality rate in [0,1]; scaled down heavily per day.
    pub mortality: f64,
    /// Stat deltas applied once at symptom onset, reversed on cure.
    #[serde(default, skip_serializing_if = "StatDeltas::is_none")]
    pub effects: StatDeltas,
    /// Base recovery probability rolled when a course runs out.
    pub recovery: f64,
    pub grants_immunity: bool,
    /// Immunity duration in years; `None` with `grants_immunity` = permanent.
    #[serde(default)]
    pub immunity_years: Option<u32>,
    #[serde(default)]
    pub stages: Vec<ProgressionStage>,
    #[serde(default)]
    pub hints: NarrativeHints,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl DiseaseDef {
    /// Whether this malady can infect animals.
    pub fn afflicts_animals(&self) -> bool {
        self.category == DiseaseCategory::Zoonotic || self.vector == TransmissionVector::Zoonotic
    }

    /// Whether a carrier can pass this malady on at all.
    pub fn is_contagious(&self) -> bool {
        self.vector != TransmissionVector::NonContagious
    }
}

/// Background incidence record for one disease in one era/region pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prevalence {
    pub disease: String,
    pub era: Era,
    pub region: Region,
    /// Years in which incidence is sharply elevated.
    #[serde(default)]
    pub epidemic_years: Vec<i32>,
}

/// The historical rule keeping Old-World and New-World disease pools apart
/// until the contact year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRestriction {
    pub contact_year: i32,
    /// Disease ids absent from the New World before contact.
    pub new_world_absent: Vec<String>,
    /// Disease ids absent from the Old World before contact.
    pub old_world_absent: Vec<String>,
}

impl ExchangeRestriction {
    /// True if `disease` is excluded in `region` during `year`.
    pub fn excludes(&self, disease: &str, region: Region, year: i32) -> bool {
        if year >= self.contact_year {
            return false;
        }
        let absent = if region.is_new_world() {
            &self.new_world_absent
        } else {
            &self.old_world_absent
        };
        absent.iter().any(|id| id == disease)
    }
}
