mod assignment;
mod availability;
mod epidemic;
mod progression;
mod terrain;
mod transmission;
mod treatment;

pub use assignment::AssignmentReport;
pub use progression::DailyReport;
pub use terrain::Terrain;
pub use transmission::{ContactKind, ContactReport, TransmissionOutcome};
pub use treatment::TreatmentOutcome;

use rand::RngCore;
use tracing::warn;

use crate::catalog::{Catalog, CatalogError, CatalogProvider};
use crate::model::health::{ActiveDisease, DiseaseStage, Immunity};
use crate::model::{Character, CharacterHealth, DiseaseDef, Era, GameEra, Region, SimDate};

/// Severity every fresh infection starts at.
const INITIAL_SEVERITY: f64 = 0.5;

/// The era/region/year the surrounding game is currently simulating.
/// Supplied by the caller on every operation; the engine never keeps its
/// own clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraContext {
    pub era: GameEra,
    pub region: Region,
    pub year: i32,
}

impl EraContext {
    pub fn new(era: GameEra, region: Region, year: i32) -> Self {
        Self { era, region, year }
    }
}

/// Everything one engine operation needs, bundled so the per-operation
/// functions keep a short signature.
pub struct HealthCtx<'a> {
    pub catalog: &'a Catalog,
    pub rng: &'a mut dyn RngCore,
    /// Game era already remapped onto the catalog vocabulary.
    pub era: Era,
    pub region: Region,
    pub year: i32,
    pub today: SimDate,
}

impl<'a> HealthCtx<'a> {
    pub fn new(catalog: &'a Catalog, rng: &'a mut dyn RngCore, at: EraContext) -> Self {
        Self {
            catalog,
            rng,
            era: Era::from_game(at.era),
            region: at.region,
            year: at.year,
            today: SimDate::from_year(at.year),
        }
    }
}

/// Build a fresh infection record: incubating, full course, mid severity.
fn new_infection(def: &DiseaseDef, today: SimDate, source: Option<u64>) -> ActiveDisease {
    ActiveDisease {
        disease: def.id.clone(),
        contracted: today,
        stage: DiseaseStage::Incubating,
        days_remaining: def.duration_days,
        severity: INITIAL_SEVERITY,
        source,
        applied_effects: Default::default(),
    }
}

/// Attach a fresh infection unless the character already carries this
/// disease. One active course per disease id, always.
fn try_infect(
    health: &mut CharacterHealth,
    def: &DiseaseDef,
    today: SimDate,
    source: Option<u64>,
) -> bool {
    if health.has_active(&def.id) {
        return false;
    }
    health.active.push(new_infection(def, today, source));
    true
}

/// Record an immunity for `def`, replacing any expired record for the same
/// disease. No-op if a live immunity already exists.
fn grant_immunity(health: &mut CharacterHealth, def: &DiseaseDef, today: SimDate) -> bool {
    if health.is_immune(&def.id, today) {
        return false;
    }
    health.immunities.retain(|i| i.disease != def.id);
    health.immunities.push(Immunity {
        disease: def.id.clone(),
        acquired: today,
        expires: def.immunity_years.map(|years| today.plus_years(years)),
    });
    true
}

/// The health subsystem's front door.
///
/// Owns the injected catalog provider and the per-character health
/// aggregates it is handed; the host game loop decides when each operation
/// runs. Every read path degrades to an empty result with a warning while
/// the catalog is not resident; callers wanting a guarantee call
/// [`HealthEngine::ensure_ready`] first.
#[derive(Debug)]
pub struct HealthEngine {
    catalog: CatalogProvider,
}

impl HealthEngine {
    pub fn new(catalog: CatalogProvider) -> Self {
        Self { catalog }
    }

    /// Engine over the builtin catalog, still loaded lazily.
    pub fn builtin() -> Self {
        Self::new(CatalogProvider::builtin())
    }

    pub fn catalog(&self) -> &CatalogProvider {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogProvider {
        &mut self.catalog
    }

    /// Load the catalog now; the hard-guarantee entry point.
    pub fn ensure_ready(&mut self) -> Result<(), CatalogError> {
        self.catalog.ensure_loaded().map(|_| ())
    }

    fn resident(&self, operation: &str) -> Option<&Catalog> {
        match self.catalog.get() {
            Ok(catalog) => Some(catalog),
            Err(_) => {
                warn!(operation, "disease catalog not ready, degrading to empty result");
                None
            }
        }
    }

    /// Diseases legally present in this context. Empty (with a warning)
    /// until the catalog is resident.
    pub fn available_diseases(&self, at: EraContext) -> Vec<&DiseaseDef> {
        let Some(catalog) = self.resident("available_diseases") else {
            return Vec::new();
        };
        availability::resolve(catalog, Era::from_game(at.era), at.region, at.year)
    }

    /// The disease with an active epidemic in this context, if any.
    pub fn current_epidemic(&self, at: EraContext) -> Option<&DiseaseDef> {
        let catalog = self.resident("current_epidemic")?;
        let era = Era::from_game(at.era);
        let available = availability::resolve(catalog, era, at.region, at.year);
        epidemic::find_epidemic(&available, catalog, era, at.region, at.year)
    }

    /// Spawn-time infection and prior-exposure immunity rolls.
    pub fn assign_on_spawn(
        &self,
        character: &mut Character,
        at: EraContext,
        rng: &mut dyn RngCore,
    ) -> AssignmentReport {
        let Some(catalog) = self.resident("assign_on_spawn") else {
            return AssignmentReport::default();
        };
        let mut ctx = HealthCtx::new(catalog, rng, at);
        assignment::assign_on_spawn(&mut ctx, character)
    }

    /// Scripted assignment of a specific disease, bypassing the rolls.
    /// Returns false only for an unknown id or an already-active course.
    pub fn assign_named(
        &self,
        character: &mut Character,
        at: EraContext,
        disease_id: &str,
    ) -> bool {
        let Some(catalog) = self.resident("assign_named") else {
            return false;
        };
        assignment::assign_named(catalog, character, at, disease_id)
    }

    /// Ambient spread check between a carrier and a bystander at `distance`.
    pub fn check_proximity(
        &self,
        source: &mut Character,
        target: &mut Character,
        at: EraContext,
        distance: f64,
        rng: &mut dyn RngCore,
    ) -> Vec<ContactReport> {
        let Some(catalog) = self.resident("check_proximity") else {
            return Vec::new();
        };
        let mut ctx = HealthCtx::new(catalog, rng, at);
        transmission::proximity_sweep(&mut ctx, source, target, distance)
    }

    /// Spread check for a direct interaction (talk, trade, fight).
    pub fn check_direct_contact(
        &self,
        source: &mut Character,
        target: &mut Character,
        at: EraContext,
        rng: &mut dyn RngCore,
    ) -> Vec<ContactReport> {
        let Some(catalog) = self.resident("check_direct_contact") else {
            return Vec::new();
        };
        let mut ctx = HealthCtx::new(catalog, rng, at);
        transmission::direct_contact(&mut ctx, source, target)
    }

    /// The low-level single-disease transmission primitive.
    pub fn attempt_transmission(
        &self,
        source: &mut Character,
        target: &mut Character,
        disease_id: &str,
        contact: ContactKind,
        strength: f64,
        at: EraContext,
        rng: &mut dyn RngCore,
    ) -> TransmissionOutcome {
        let Some(catalog) = self.resident("attempt_transmission") else {
            return TransmissionOutcome::default();
        };
        let mut ctx = HealthCtx::new(catalog, rng, at);
        transmission::attempt(&mut ctx, source, target, disease_id, contact, strength)
    }

    /// Advance every active course on the character by one simulated day.
    pub fn advance_day(
        &self,
        character: &mut Character,
        at: EraContext,
        rng: &mut dyn RngCore,
    ) -> DailyReport {
        let Some(catalog) = self.resident("advance_day") else {
            return DailyReport::default();
        };
        let mut ctx = HealthCtx::new(catalog, rng, at);
        progression::advance_one_day(&mut ctx, character)
    }

    /// Apply a medicine to one active course.
    pub fn treat(
        &self,
        character: &mut Character,
        disease_id: &str,
        medicine_id: &str,
    ) -> TreatmentOutcome {
        let Some(catalog) = self.resident("treat") else {
            return TreatmentOutcome::not_ready();
        };
        treatment::treat(catalog, character, disease_id, medicine_id)
    }

    /// Daily ambient exposure from the tile a character stands on.
    pub fn terrain_exposure(
        &self,
        character: &mut Character,
        terrain: Terrain,
        at: EraContext,
        rng: &mut dyn RngCore,
    ) -> Option<ContactReport> {
        let catalog = self.resident("terrain_exposure")?;
        let mut ctx = HealthCtx::new(catalog, rng, at);
        terrain::terrain_exposure(&mut ctx, character, terrain)
    }
}
