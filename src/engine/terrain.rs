use rand::Rng;
use tracing::{debug, warn};

use super::{ContactReport, HealthCtx, try_infect};
use crate::model::Character;
use crate::model::health::{ExposureEvent, ProximityClass};

/// Tile classification as far as ambient disease is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Wetland,
    Urban,
    Plains,
    Forest,
    Mountain,
    Desert,
    Coast,
}

/// Daily chance a wetland tile exposes its occupant to marsh fever.
const WETLAND_DAILY_CHANCE: f64 = 0.25;
/// Daily chance a crowded urban tile exposes its occupant.
const URBAN_DAILY_CHANCE: f64 = 0.10;

const WETLAND_DISEASE: &str = "malaria";
const URBAN_DISEASES: [&str; 2] = ["smallpox", "bubonic_plague"];

/// Daily ambient exposure from the tile a character stands on.
///
/// The two risky tiles reference the main catalog rather than carrying
/// their own disease templates, so immunity and the one-course-per-disease
/// rule hold here exactly as they do for character-to-character spread.
pub fn terrain_exposure(
    ctx: &mut HealthCtx,
    character: &mut Character,
    terrain: Terrain,
) -> Option<ContactReport> {
    let (chance, disease_id) = match terrain {
        Terrain::Wetland => (WETLAND_DAILY_CHANCE, WETLAND_DISEASE),
        Terrain::Urban => {
            let pick = URBAN_DISEASES[ctx.rng.random_range(0..URBAN_DISEASES.len())];
            (URBAN_DAILY_CHANCE, pick)
        }
        _ => return None,
    };

    if ctx.rng.random_range(0.0..1.0) >= chance {
        return None;
    }

    let catalog = ctx.catalog;
    let Some(def) = catalog.disease(disease_id) else {
        warn!(disease = disease_id, "terrain_exposure: disease missing from catalog");
        return None;
    };

    character.health.exposures.push(ExposureEvent {
        disease: def.id.clone(),
        date: ctx.today,
        vector: def.vector,
        source: None,
        strength: chance,
        proximity: ProximityClass::Nearby,
    });

    if character.health.is_immune(&def.id, ctx.today) {
        return Some(ContactReport {
            disease: def.id.clone(),
            transmitted: false,
            hint: None,
        });
    }

    let transmitted = try_infect(&mut character.health, def, ctx.today, None);
    if transmitted {
        character.health.recompute_status();
        debug!(character = %character.name, disease = %def.id, ?terrain, "ambient infection");
    }
    Some(ContactReport {
        disease: def.id.clone(),
        transmitted,
        hint: None,
    })
}
