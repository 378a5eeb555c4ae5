use rand::Rng;
use tracing::{debug, warn};

use super::{HealthCtx, try_infect};
use crate::model::health::{DiseaseStage, ExposureEvent, ProximityClass};
use crate::model::{Character, DiseaseDef};

/// Radius of the ambient proximity sweep, in tiles.
const PROXIMITY_RADIUS: f64 = 10.0;
/// Within this distance the exposure is classified as close.
const CLOSE_RANGE: f64 = 2.0;
/// Within this distance the exposure is classified as nearby.
const NEARBY_RANGE: f64 = 5.0;

/// How two characters came into contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Sharing space; transmission is probabilistic.
    Proximity,
    /// A talk/encounter interaction; transmission is guaranteed for a
    /// non-immune target.
    Direct,
}

/// Result of one single-disease transmission attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransmissionOutcome {
    pub transmitted: bool,
    /// The clamped chance that was rolled (1.0 for direct contact).
    pub chance: f64,
    pub blocked_by_immunity: bool,
}

/// One disease checked during a sweep or encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactReport {
    pub disease: String,
    pub transmitted: bool,
    /// Onlooker description of the carrier's visible symptoms.
    pub hint: Option<String>,
}

/// Susceptibility modifier from the target's constitution: above-baseline
/// constitution shrinks the chance, below-baseline grows it.
fn constitution_susceptibility(constitution: f64) -> f64 {
    1.0 - (constitution - 10.0) / 20.0
}

fn classify_distance(distance: f64) -> ProximityClass {
    if distance <= CLOSE_RANGE {
        ProximityClass::Close
    } else if distance <= NEARBY_RANGE {
        ProximityClass::Nearby
    } else {
        ProximityClass::Distant
    }
}

fn log_exposure(
    character: &mut Character,
    def: &DiseaseDef,
    ctx: &HealthCtx,
    source: u64,
    strength: f64,
    proximity: ProximityClass,
) {
    character.health.exposures.push(ExposureEvent {
        disease: def.id.clone(),
        date: ctx.today,
        vector: def.vector,
        source: Some(source),
        strength,
        proximity,
    });
}

/// Try to pass one disease from `source` to `target`.
///
/// The exposure is logged on both parties whatever happens. A live
/// immunity always blocks. Direct contact always succeeds once immunity is
/// ruled out; proximity rolls `base × strength × proximity_factor ×
/// susceptibility`, clamped to [0,1].
pub fn attempt(
    ctx: &mut HealthCtx,
    source: &mut Character,
    target: &mut Character,
    disease_id: &str,
    contact: ContactKind,
    strength: f64,
) -> TransmissionOutcome {
    let catalog = ctx.catalog;
    let Some(def) = catalog.disease(disease_id) else {
        warn!(disease = disease_id, "attempt: unknown disease id");
        return TransmissionOutcome::default();
    };

    let proximity = match contact {
        ContactKind::Direct => ProximityClass::Direct,
        ContactKind::Proximity => ProximityClass::Nearby,
    };
    let source_id = source.id;
    log_exposure(source, def, ctx, source_id, strength, proximity);
    log_exposure(target, def, ctx, source_id, strength, proximity);

    if target.health.is_immune(&def.id, ctx.today) {
        return TransmissionOutcome {
            transmitted: false,
            chance: 0.0,
            blocked_by_immunity: true,
        };
    }

    let (chance, success) = match contact {
        ContactKind::Direct => (1.0, true),
        ContactKind::Proximity => {
            let chance = (def.base_transmission
                * strength
                * def.proximity_factor
                * constitution_susceptibility(target.stats.constitution))
            .clamp(0.0, 1.0);
            (chance, ctx.rng.random_range(0.0..1.0) < chance)
        }
    };

    let transmitted = success && try_infect(&mut target.health, def, ctx.today, Some(source_id));
    if transmitted {
        debug!(
            disease = %def.id,
            from = source.id,
            to = target.id,
            "disease transmitted"
        );
        target.health.recompute_status();
    }

    TransmissionOutcome {
        transmitted,
        chance,
        blocked_by_immunity: false,
    }
}

/// Ids of the source's contagious, visibly symptomatic diseases, the only
/// ones ambient and encounter checks consider.
fn transmissible_ids(source: &Character, ctx: &HealthCtx) -> Vec<String> {
    source
        .health
        .active
        .iter()
        .filter(|a| a.stage == DiseaseStage::Symptomatic)
        .filter(|a| {
            ctx.catalog
                .disease(&a.disease)
                .is_some_and(|d| d.is_contagious())
        })
        .map(|a| a.disease.clone())
        .collect()
}

fn onlooker_hint(def: &DiseaseDef, source: &Character) -> Option<String> {
    if def.hints.onlooker.is_empty() {
        None
    } else {
        Some(format!("{} {}", source.name, def.hints.onlooker))
    }
}

/// Ambient sweep: every symptomatic disease on `source` gets a proximity
/// attempt against `target`, with strength falling off over distance.
/// Out-of-radius pairs produce nothing at all.
pub fn proximity_sweep(
    ctx: &mut HealthCtx,
    source: &mut Character,
    target: &mut Character,
    distance: f64,
) -> Vec<ContactReport> {
    if distance > PROXIMITY_RADIUS {
        return Vec::new();
    }
    let strength = ((PROXIMITY_RADIUS - distance) / PROXIMITY_RADIUS).clamp(0.0, 1.0);
    let proximity = classify_distance(distance);

    let mut reports = Vec::new();
    for disease_id in transmissible_ids(source, ctx) {
        let outcome = attempt(
            ctx,
            source,
            target,
            &disease_id,
            ContactKind::Proximity,
            strength,
        );
        // The sweep knows the true distance band; overwrite the generic one.
        for party in [&mut *source, &mut *target] {
            if let Some(event) = party.health.exposures.last_mut()
                && event.disease == disease_id
            {
                event.proximity = proximity;
            }
        }
        let hint = ctx
            .catalog
            .disease(&disease_id)
            .and_then(|d| onlooker_hint(d, source));
        reports.push(ContactReport {
            disease: disease_id,
            transmitted: outcome.transmitted,
            hint,
        });
    }
    reports
}

/// Direct-interaction check: every symptomatic disease on `source` is
/// offered to `target` with full strength and guaranteed transmission for
/// the non-immune.
pub fn direct_contact(
    ctx: &mut HealthCtx,
    source: &mut Character,
    target: &mut Character,
) -> Vec<ContactReport> {
    let mut reports = Vec::new();
    for disease_id in transmissible_ids(source, ctx) {
        let outcome = attempt(ctx, source, target, &disease_id, ContactKind::Direct, 1.0);
        let hint = ctx
            .catalog
            .disease(&disease_id)
            .and_then(|d| onlooker_hint(d, source));
        reports.push(ContactReport {
            disease: disease_id,
            transmitted: outcome.transmitted,
            hint,
        });
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::engine::EraContext;
    use crate::model::health::Immunity;
    use crate::model::{CharacterKind, GameEra, Region, SimDate};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn at() -> EraContext {
        EraContext::new(GameEra::Medieval, Region::WesternEurope, 1348)
    }

    fn carrier(catalog: &Catalog, disease: &str) -> Character {
        let mut c = Character::new(1, "Carrier", CharacterKind::Npc);
        let def = catalog.disease(disease).unwrap();
        c.health.active.push(crate::model::ActiveDisease {
            disease: def.id.clone(),
            contracted: SimDate::from_year(1348),
            stage: DiseaseStage::Symptomatic,
            days_remaining: def.duration_days,
            severity: 0.6,
            source: None,
            applied_effects: Default::default(),
        });
        c.health.recompute_status();
        c
    }

    #[test]
    fn immunity_blocks_every_contact_kind() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut source = carrier(&catalog, "bubonic_plague");
        let mut target = Character::new(2, "Immune", CharacterKind::Npc);
        target.health.immunities.push(Immunity {
            disease: "bubonic_plague".into(),
            acquired: SimDate::from_year(1340),
            expires: None,
        });

        for contact in [ContactKind::Direct, ContactKind::Proximity] {
            for strength in [0.1, 0.5, 1.0] {
                let mut ctx = HealthCtx::new(&catalog, &mut rng, at());
                let outcome = attempt(
                    &mut ctx,
                    &mut source,
                    &mut target,
                    "bubonic_plague",
                    contact,
                    strength,
                );
                assert!(!outcome.transmitted);
                assert!(outcome.blocked_by_immunity);
            }
        }
        assert!(target.health.active.is_empty());
        // Exposures were still logged for every attempt.
        assert_eq!(target.health.exposures.len(), 6);
    }

    #[test]
    fn expired_immunity_does_not_block() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut source = carrier(&catalog, "bubonic_plague");
        let mut target = Character::new(2, "Lapsed", CharacterKind::Npc);
        target.health.immunities.push(Immunity {
            disease: "bubonic_plague".into(),
            acquired: SimDate::from_year(1330),
            expires: Some(SimDate::from_year(1340)),
        });

        let mut ctx = HealthCtx::new(&catalog, &mut rng, at());
        let outcome = attempt(
            &mut ctx,
            &mut source,
            &mut target,
            "bubonic_plague",
            ContactKind::Direct,
            1.0,
        );
        assert!(outcome.transmitted);
    }

    #[test]
    fn direct_contact_always_transmits_to_the_unprotected() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(4);
        for seed in 0..20 {
            let mut source = carrier(&catalog, "influenza");
            let mut target = Character::new(100 + seed, "Mark", CharacterKind::Npc);
            let mut ctx = HealthCtx::new(&catalog, &mut rng, at());
            let outcome = attempt(
                &mut ctx,
                &mut source,
                &mut target,
                "influenza",
                ContactKind::Direct,
                1.0,
            );
            assert!(outcome.transmitted);
            assert_eq!(outcome.chance, 1.0);
            let active = target.health.active_disease("influenza").unwrap();
            assert_eq!(active.stage, DiseaseStage::Incubating);
            assert_eq!(active.source, Some(source.id));
        }
    }

    #[test]
    fn duplicate_course_is_refused_but_logged() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(4);
        let mut source = carrier(&catalog, "influenza");
        let mut target = carrier(&catalog, "influenza");
        target.id = 9;

        let mut ctx = HealthCtx::new(&catalog, &mut rng, at());
        let outcome = attempt(
            &mut ctx,
            &mut source,
            &mut target,
            "influenza",
            ContactKind::Direct,
            1.0,
        );
        assert!(!outcome.transmitted);
        assert_eq!(target.health.active.len(), 1);
        assert_eq!(target.health.exposures.len(), 1);
    }

    #[test]
    fn constitution_shifts_proximity_odds() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(8);
        let trials = 3000;
        let mut hits = [0u32; 2];
        for (slot, constitution) in [(0usize, 5.0), (1usize, 18.0)] {
            for i in 0..trials {
                let mut source = carrier(&catalog, "influenza");
                let mut target = Character::new(1000 + i, "Subject", CharacterKind::Npc);
                target.stats.constitution = constitution;
                let mut ctx = HealthCtx::new(&catalog, &mut rng, at());
                let outcome = attempt(
                    &mut ctx,
                    &mut source,
                    &mut target,
                    "influenza",
                    ContactKind::Proximity,
                    0.5,
                );
                if outcome.transmitted {
                    hits[slot] += 1;
                }
            }
        }
        assert!(
            hits[0] > hits[1],
            "weak constitution should catch more: {hits:?}"
        );
    }

    #[test]
    fn sweep_skips_incubating_and_noncontagious() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut source = carrier(&catalog, "scurvy");
        // Add an incubating plague next to the symptomatic scurvy.
        let plague = catalog.disease("bubonic_plague").unwrap();
        source.health.active.push(crate::model::ActiveDisease {
            disease: plague.id.clone(),
            contracted: SimDate::from_year(1348),
            stage: DiseaseStage::Incubating,
            days_remaining: plague.duration_days,
            severity: 0.5,
            source: None,
            applied_effects: Default::default(),
        });
        let mut target = Character::new(2, "Bystander", CharacterKind::Npc);
        let mut ctx = HealthCtx::new(&catalog, &mut rng, at());
        let reports = proximity_sweep(&mut ctx, &mut source, &mut target, 1.0);
        assert!(reports.is_empty(), "nothing transmissible: {reports:?}");
    }

    #[test]
    fn sweep_out_of_radius_is_silent() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut source = carrier(&catalog, "influenza");
        let mut target = Character::new(2, "Far Away", CharacterKind::Npc);
        let mut ctx = HealthCtx::new(&catalog, &mut rng, at());
        let reports = proximity_sweep(&mut ctx, &mut source, &mut target, 25.0);
        assert!(reports.is_empty());
        assert!(target.health.exposures.is_empty());
    }

    #[test]
    fn sweep_reports_hints_and_distance_band() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(6);
        let mut source = carrier(&catalog, "bubonic_plague");
        let mut target = Character::new(2, "Bystander", CharacterKind::Npc);
        let mut ctx = HealthCtx::new(&catalog, &mut rng, at());
        let reports = proximity_sweep(&mut ctx, &mut source, &mut target, 1.5);
        assert_eq!(reports.len(), 1);
        let hint = reports[0].hint.as_deref().unwrap();
        assert!(hint.starts_with("Carrier "), "{hint}");
        assert_eq!(
            target.health.exposures.last().unwrap().proximity,
            ProximityClass::Close
        );
    }

    #[test]
    fn direct_contact_wrapper_transmits_all_symptomatic() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(6);
        let mut source = carrier(&catalog, "influenza");
        // Second symptomatic disease.
        let pox = catalog.disease("smallpox").unwrap();
        source.health.active.push(crate::model::ActiveDisease {
            disease: pox.id.clone(),
            contracted: SimDate::from_year(1348),
            stage: DiseaseStage::Symptomatic,
            days_remaining: pox.duration_days,
            severity: 0.6,
            source: None,
            applied_effects: Default::default(),
        });
        let mut target = Character::new(2, "Mark", CharacterKind::Npc);
        let mut ctx = HealthCtx::new(&catalog, &mut rng, at());
        let reports = direct_contact(&mut ctx, &mut source, &mut target);
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.transmitted));
        assert!(target.health.has_active("influenza"));
        assert!(target.health.has_active("smallpox"));
    }
}
