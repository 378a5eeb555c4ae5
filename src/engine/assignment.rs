use rand::Rng;
use tracing::{debug, warn};

use super::{EraContext, HealthCtx, availability, epidemic, grant_immunity, try_infect};
use crate::catalog::Catalog;
use crate::model::{Character, DiseaseDef, Era, SeverityTier, SimDate};

/// Base chance an animal spawns already infected.
const ANIMAL_INFECTION_CHANCE: f64 = 0.5;
/// Base chance a human (player or NPC) spawns already infected.
const HUMAN_INFECTION_CHANCE: f64 = 0.33;
/// Chance an infected animal draws from the zoonotic pool when one exists.
const ANIMAL_POOL_BIAS: f64 = 0.8;
/// Chance an infected human draws the active epidemic disease.
const EPIDEMIC_BIAS: f64 = 0.8;
/// Chance an infected human (no epidemic) draws the common minor affliction.
const COMMON_BIAS: f64 = 0.5;
/// Flat per-disease chance of pre-granted immunity from prior exposure.
const PRIOR_IMMUNITY_CHANCE: f64 = 0.1;

/// What spawn-time assignment did to a character.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentReport {
    /// Disease the character spawned infected with, if any.
    pub contracted: Option<String>,
    /// Diseases the character got prior-exposure immunity to.
    pub immunities: Vec<String>,
}

fn pick_uniform<'a>(ctx: &mut HealthCtx, pool: &[&'a DiseaseDef]) -> Option<&'a DiseaseDef> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[ctx.rng.random_range(0..pool.len())])
}

/// Draw the disease an infected spawn starts with.
///
/// Animals prefer the zoonotic pool; humans prefer the active epidemic,
/// falling back to the common minor affliction, falling back to a uniform
/// draw over everything available.
fn choose_disease<'a>(
    ctx: &mut HealthCtx,
    available: &[&'a DiseaseDef],
    is_animal: bool,
) -> Option<&'a DiseaseDef> {
    if is_animal {
        let zoonotic: Vec<&DiseaseDef> = available
            .iter()
            .copied()
            .filter(|d| d.afflicts_animals())
            .collect();
        if !zoonotic.is_empty() && ctx.rng.random_range(0.0..1.0) < ANIMAL_POOL_BIAS {
            return pick_uniform(ctx, &zoonotic);
        }
        return pick_uniform(ctx, available);
    }

    if let Some(epi) = epidemic::find_epidemic(available, ctx.catalog, ctx.era, ctx.region, ctx.year)
    {
        if ctx.rng.random_range(0.0..1.0) < EPIDEMIC_BIAS {
            return Some(epi);
        }
        return pick_uniform(ctx, available);
    }

    if let Some(common) = available
        .iter()
        .copied()
        .find(|d| d.severity == SeverityTier::Minor)
        && ctx.rng.random_range(0.0..1.0) < COMMON_BIAS
    {
        return Some(common);
    }

    pick_uniform(ctx, available)
}

/// Decide whether a freshly spawned character starts infected and/or
/// immune, biased by species, epidemic status, and the common affliction.
pub fn assign_on_spawn(ctx: &mut HealthCtx, character: &mut Character) -> AssignmentReport {
    let mut report = AssignmentReport::default();
    let available = availability::resolve(ctx.catalog, ctx.era, ctx.region, ctx.year);
    if available.is_empty() {
        character.health.recompute_status();
        character.health.last_update = Some(ctx.today);
        return report;
    }

    let base_chance = if character.is_animal() {
        ANIMAL_INFECTION_CHANCE
    } else {
        HUMAN_INFECTION_CHANCE
    };

    if ctx.rng.random_range(0.0..1.0) < base_chance
        && let Some(def) = choose_disease(ctx, &available, character.is_animal())
        && try_infect(&mut character.health, def, ctx.today, None)
    {
        debug!(character = %character.name, disease = %def.id, "spawned infected");
        report.contracted = Some(def.id.clone());
    }

    // Prior-exposure immunity, rolled independently of infection.
    for def in &available {
        if def.grants_immunity
            && ctx.rng.random_range(0.0..1.0) < PRIOR_IMMUNITY_CHANCE
            && grant_immunity(&mut character.health, def, ctx.today)
        {
            report.immunities.push(def.id.clone());
        }
    }

    character.health.recompute_status();
    character.health.last_update = Some(ctx.today);
    report
}

/// Scripted assignment of a specific disease by id.
///
/// Eligibility is checked and logged but never enforced: quest content may
/// hand a character a malady the era could not produce. Only an unknown id
/// or an already-active course refuses.
pub fn assign_named(
    catalog: &Catalog,
    character: &mut Character,
    at: EraContext,
    disease_id: &str,
) -> bool {
    let Some(def) = catalog.disease(disease_id) else {
        warn!(disease = disease_id, "assign_named: unknown disease id");
        return false;
    };

    let era = Era::from_game(at.era);
    let eligible = availability::resolve(catalog, era, at.region, at.year)
        .iter()
        .any(|d| d.id == disease_id);
    if !eligible {
        warn!(
            disease = disease_id,
            year = at.year,
            "assign_named: disease not normally present here, applying anyway"
        );
    }

    let today = SimDate::from_year(at.year);
    if !try_infect(&mut character.health, def, today, None) {
        return false;
    }
    character.health.recompute_status();
    character.health.last_update = Some(today);
    true
}
