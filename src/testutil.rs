//! Helpers for deterministic engine runs in tests.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::engine::{DailyReport, EraContext, HealthEngine};
use crate::model::{Character, GameEra, Region};

/// Seeded RNG, so the same test always rolls the same dice.
pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

pub fn medieval_europe(year: i32) -> EraContext {
    EraContext::new(GameEra::Medieval, Region::WesternEurope, year)
}

pub fn colonial_mesoamerica(year: i32) -> EraContext {
    EraContext::new(GameEra::AgeOfSail, Region::Mesoamerica, year)
}

/// Advance a character `days` times with one seeded RNG, collecting the
/// daily reports. Stops early if a day kills the character.
pub fn advance_days(
    engine: &HealthEngine,
    character: &mut Character,
    at: EraContext,
    days: u32,
    seed: u64,
) -> Vec<DailyReport> {
    let mut rng = rng(seed);
    let mut reports = Vec::new();
    for _ in 0..days {
        let report = engine.advance_day(character, at, &mut rng);
        let done = report.died;
        reports.push(report);
        if done {
            break;
        }
    }
    reports
}

/// Run `advance_days` until the character either clears every disease or
/// dies, up to `max_days`. Returns (reports, died).
pub fn run_course(
    engine: &HealthEngine,
    character: &mut Character,
    at: EraContext,
    max_days: u32,
    seed: u64,
) -> (Vec<DailyReport>, bool) {
    let mut rng = rng(seed);
    let mut reports = Vec::new();
    let mut died = false;
    for _ in 0..max_days {
        let report = engine.advance_day(character, at, &mut rng);
        died = report.died;
        reports.push(report);
        if died || character.health.active.is_empty() {
            break;
        }
    }
    (reports, died)
}
