use serde::{Deserialize, Serialize};

use super::disease::DiseaseCategory;
use super::era::{Era, Region};
use super::stats::StatDeltas;

/// Per-category effectiveness of a medicine, every category explicit.
///
/// Deliberately a struct rather than a map: a missing or misspelled category
/// is a compile error here, not a silent zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Effectiveness {
    #[serde(default)]
    pub respiratory: f64,
    #[serde(default)]
    pub gastrointestinal: f64,
    #[serde(default)]
    pub vector_borne: f64,
    #[serde(default)]
    pub contact: f64,
    #[serde(default)]
    pub parasitic: f64,
    #[serde(default)]
    pub zoonotic: f64,
    #[serde(default)]
    pub traumatic: f64,
    #[serde(default)]
    pub nutritional: f64,
    #[serde(default)]
    pub toxic: f64,
}

impl Effectiveness {
    pub fn for_category(&self, category: DiseaseCategory) -> f64 {
        match category {
            DiseaseCategory::Respiratory => self.respiratory,
            DiseaseCategory::Gastrointestinal => self.gastrointestinal,
            DiseaseCategory::VectorBorne => self.vector_borne,
            DiseaseCategory::Contact => self.contact,
            DiseaseCategory::Parasitic => self.parasitic,
            DiseaseCategory::Zoonotic => self.zoonotic,
            DiseaseCategory::Traumatic => self.traumatic,
            DiseaseCategory::Nutritional => self.nutritional,
            DiseaseCategory::Toxic => self.toxic,
        }
    }
}

/// Immutable catalog record for one remedy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineDef {
    pub id: String,
    pub name: String,
    pub eras: Vec<Era>,
    pub regions: Vec<Region>,
    pub effectiveness: Effectiveness,
    /// Stat deltas the remedy itself inflicts (mercury is not kind).
    #[serde(default, skip_serializing_if = "StatDeltas::is_none")]
    pub side_effects: StatDeltas,
    pub cost: f64,
}

impl MedicineDef {
    /// Whether the remedy can legally be acquired in this context.
    pub fn available_in(&self, era: Era, region: Region) -> bool {
        self.eras.contains(&era) && self.regions.contains(&region)
    }
}
