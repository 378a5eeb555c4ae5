use serde::{Deserialize, Serialize};

use super::date::SimDate;
use super::disease::TransmissionVector;
use super::stats::StatDeltas;

/// Clinical phase of an active infection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseStage {
    Incubating,
    Symptomatic,
    Recovering,
}

/// A live infection on one character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveDisease {
    pub disease: String,
    pub contracted: SimDate,
    pub stage: DiseaseStage,
    pub days_remaining: u32,
    /// Continuous severity in [0,1]; always clamped after mutation.
    pub severity: f64,
    /// Character the infection was caught from, if any.
    #[serde(default)]
    pub source: Option<u64>,
    /// Stat deltas applied so far; reversed exactly on cure.
    #[serde(default, skip_serializing_if = "StatDeltas::is_none")]
    pub applied_effects: StatDeltas,
}

impl ActiveDisease {
    /// Days elapsed since contraction, derived from the course length.
    pub fn days_elapsed(&self, duration_days: u32) -> u32 {
        duration_days.saturating_sub(self.days_remaining)
    }

    /// Clamp severity into [0,1] after any adjustment.
    pub fn set_severity(&mut self, value: f64) {
        self.severity = value.clamp(0.0, 1.0);
    }
}

/// Acquired resistance to one disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Immunity {
    pub disease: String,
    pub acquired: SimDate,
    /// `None` = permanent.
    #[serde(default)]
    pub expires: Option<SimDate>,
}

impl Immunity {
    pub fn is_active(&self, today: SimDate) -> bool {
        match self.expires {
            Some(expiry) => today < expiry,
            None => true,
        }
    }
}

/// How close the carrier was when exposure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityClass {
    Distant,
    Nearby,
    Close,
    Direct,
}

/// Append-only record that a character was exposed, infected or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureEvent {
    pub disease: String,
    pub date: SimDate,
    pub vector: TransmissionVector,
    #[serde(default)]
    pub source: Option<u64>,
    pub strength: f64,
    pub proximity: ProximityClass,
}

/// Derived overall classification of a character's health.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Mild,
    Sick,
    Critical,
}

/// Any single infection at or above this severity makes the character critical.
const CRITICAL_SEVERITY: f64 = 0.8;
/// Summed severity at or above this is "sick".
const SICK_TOTAL: f64 = 1.5;
/// Summed severity at or above this is "mild".
const MILD_TOTAL: f64 = 0.5;

impl HealthStatus {
    /// Pure derivation from the active disease list. The aggregate never
    /// stores anything this function cannot reproduce.
    pub fn from_active(active: &[ActiveDisease]) -> HealthStatus {
        if active.iter().any(|a| a.severity >= CRITICAL_SEVERITY) {
            return HealthStatus::Critical;
        }
        let total: f64 = active.iter().map(|a| a.severity).sum();
        if total >= SICK_TOTAL {
            HealthStatus::Sick
        } else if total >= MILD_TOTAL {
            HealthStatus::Mild
        } else {
            HealthStatus::Healthy
        }
    }
}

/// Per-character mutable health aggregate owned by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterHealth {
    pub active: Vec<ActiveDisease>,
    pub immunities: Vec<Immunity>,
    pub exposures: Vec<ExposureEvent>,
    pub status: HealthStatus,
    #[serde(default)]
    pub last_update: Option<SimDate>,
}

impl CharacterHealth {
    pub fn has_active(&self, disease: &str) -> bool {
        self.active.iter().any(|a| a.disease == disease)
    }

    pub fn active_disease(&self, disease: &str) -> Option<&ActiveDisease> {
        self.active.iter().find(|a| a.disease == disease)
    }

    pub fn active_disease_mut(&mut self, disease: &str) -> Option<&mut ActiveDisease> {
        self.active.iter_mut().find(|a| a.disease == disease)
    }

    /// Non-expired immunity check.
    pub fn is_immune(&self, disease: &str, today: SimDate) -> bool {
        self.immunities
            .iter()
            .any(|i| i.disease == disease && i.is_active(today))
    }

    pub fn recompute_status(&mut self) {
        self.status = HealthStatus::from_active(&self.active);
    }
}
