use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::model::Character;
use crate::model::health::DiseaseStage;

/// Severity never drops below this through treatment alone.
const TREATED_SEVERITY_FLOOR: f64 = 0.1;
/// Fraction of effectiveness converted into severity reduction.
const SEVERITY_REDUCTION_SCALE: f64 = 0.5;
/// Fraction of the full course length shaved off per unit effectiveness.
const DURATION_REDUCTION_SCALE: f64 = 0.3;

/// Result of applying a medicine to one active course.
#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentOutcome {
    pub success: bool,
    pub message: String,
    pub new_severity: Option<f64>,
}

impl TreatmentOutcome {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            new_severity: None,
        }
    }

    pub(super) fn not_ready() -> Self {
        Self::failure("No treatment is possible yet.")
    }
}

/// Apply `medicine_id` against the character's active `disease_id` course.
///
/// Fails softly when the course or medicine is unknown, or when the
/// medicine has zero effectiveness for the disease's category (severity is
/// left untouched). Success reduces severity and remaining days, applies
/// the medicine's side effects, and marks a symptomatic course recovering.
pub fn treat(
    catalog: &Catalog,
    character: &mut Character,
    disease_id: &str,
    medicine_id: &str,
) -> TreatmentOutcome {
    let Some(def) = catalog.disease(disease_id) else {
        warn!(disease = disease_id, "treat: disease missing from catalog");
        return TreatmentOutcome::failure("No treatment available.");
    };
    let Some(medicine) = catalog.medicine(medicine_id) else {
        warn!(medicine = medicine_id, "treat: unknown medicine id");
        return TreatmentOutcome::failure("No such remedy is known.");
    };

    let effectiveness = medicine.effectiveness.for_category(def.category);
    if effectiveness <= 0.0 {
        return TreatmentOutcome::failure(format!(
            "{} has no effect on {}.",
            medicine.name, def.name
        ));
    }

    let name = character.name.clone();
    let Some(course) = character.health.active_disease_mut(disease_id) else {
        return TreatmentOutcome::failure(format!("{name} is not suffering from {}.", def.name));
    };
    let new_severity = {
        course.set_severity(
            (course.severity - effectiveness * SEVERITY_REDUCTION_SCALE)
                .max(TREATED_SEVERITY_FLOOR),
        );
        let reduction =
            (def.duration_days as f64 * effectiveness * DURATION_REDUCTION_SCALE).floor() as u32;
        course.days_remaining = course.days_remaining.saturating_sub(reduction).max(1);
        if course.stage == DiseaseStage::Symptomatic {
            course.stage = DiseaseStage::Recovering;
        }
        course.severity
    };

    character.stats.apply(&medicine.side_effects);
    character.health.recompute_status();
    debug!(
        character = %character.name,
        disease = disease_id,
        medicine = medicine_id,
        new_severity,
        "treatment applied"
    );

    TreatmentOutcome {
        success: true,
        message: format!("{} eases the {}.", medicine.name, def.name),
        new_severity: Some(new_severity),
    }
}
