use crate::catalog::{Catalog, CatalogProvider};
use crate::engine::{EraContext, HealthEngine};
use crate::model::health::{ActiveDisease, DiseaseStage, Immunity};
use crate::model::{Character, CharacterKind, GameEra, Region, SimDate};

/// Typed reference to a character in a [`Scenario`], enabling chained field
/// mutation. Call [`.id()`](CharacterRef::id) to terminate the chain and
/// extract the character id.
pub struct CharacterRef<'a> {
    scenario: &'a mut Scenario,
    id: u64,
}

impl<'a> CharacterRef<'a> {
    fn data_mut(&mut self) -> &mut Character {
        self.scenario
            .characters
            .iter_mut()
            .find(|c| c.id == self.id)
            .unwrap()
    }

    pub fn constitution(mut self, v: f64) -> Self {
        self.data_mut().stats.constitution = v;
        self
    }

    pub fn strength(mut self, v: f64) -> Self {
        self.data_mut().stats.strength = v;
        self
    }

    /// Give the character a symptomatic course of `disease` at `severity`.
    pub fn infected(mut self, disease: &str, severity: f64) -> Self {
        let today = SimDate::from_year(self.scenario.at.year);
        let def = self
            .scenario
            .catalog
            .disease(disease)
            .unwrap_or_else(|| panic!("scenario: unknown disease {disease}"))
            .clone();
        let c = self.data_mut();
        c.health.active.push(ActiveDisease {
            disease: def.id,
            contracted: today,
            stage: DiseaseStage::Symptomatic,
            days_remaining: def.duration_days,
            severity,
            source: None,
            applied_effects: Default::default(),
        });
        c.health.recompute_status();
        self
    }

    /// Grant permanent immunity to `disease`.
    pub fn immune(mut self, disease: &str) -> Self {
        let today = SimDate::from_year(self.scenario.at.year);
        let c = self.data_mut();
        c.health.immunities.push(Immunity {
            disease: disease.to_string(),
            acquired: today,
            expires: None,
        });
        self
    }

    /// Escape hatch: apply an arbitrary closure to the character.
    pub fn with(mut self, f: impl FnOnce(&mut Character)) -> Self {
        f(self.data_mut());
        self
    }

    /// Terminate the chain and return the character id.
    pub fn id(self) -> u64 {
        self.id
    }
}

/// Fluent builder for deterministic health-engine test setups.
///
/// Owns a ready catalog, an [`EraContext`], and the characters under test,
/// so each test states only what it cares about.
pub struct Scenario {
    catalog: Catalog,
    characters: Vec<Character>,
    next_id: u64,
    at: EraContext,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario {
    /// Plague-era western Europe, off any epidemic year.
    pub fn new() -> Self {
        Self::at(EraContext::new(GameEra::Medieval, Region::WesternEurope, 1300))
    }

    pub fn at(at: EraContext) -> Self {
        Self {
            catalog: Catalog::builtin(),
            characters: Vec::new(),
            next_id: 1,
            at,
        }
    }

    pub fn context(&self) -> EraContext {
        self.at
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// An engine whose provider is already resident, over this scenario's
    /// catalog.
    pub fn engine(&self) -> HealthEngine {
        HealthEngine::new(CatalogProvider::preloaded(self.catalog.clone()))
    }

    fn add(&mut self, name: &str, kind: CharacterKind) -> CharacterRef<'_> {
        let id = self.next_id;
        self.next_id += 1;
        self.characters.push(Character::new(id, name, kind));
        CharacterRef { scenario: self, id }
    }

    pub fn npc(&mut self, name: &str) -> CharacterRef<'_> {
        self.add(name, CharacterKind::Npc)
    }

    pub fn player(&mut self, name: &str) -> CharacterRef<'_> {
        self.add(name, CharacterKind::Player)
    }

    pub fn animal(&mut self, name: &str) -> CharacterRef<'_> {
        self.add(name, CharacterKind::Animal)
    }

    /// Re-enter a character for further chained mutation.
    pub fn character_mut(&mut self, id: u64) -> CharacterRef<'_> {
        assert!(
            self.characters.iter().any(|c| c.id == id),
            "scenario: no character {id}"
        );
        CharacterRef { scenario: self, id }
    }

    pub fn character(&self, id: u64) -> &Character {
        self.characters
            .iter()
            .find(|c| c.id == id)
            .unwrap_or_else(|| panic!("scenario: no character {id}"))
    }

    /// Two distinct characters borrowed mutably at once, for transmission
    /// checks.
    pub fn pair_mut(&mut self, a: u64, b: u64) -> (&mut Character, &mut Character) {
        assert_ne!(a, b, "scenario: pair_mut needs two distinct characters");
        let (ia, ib) = (
            self.characters.iter().position(|c| c.id == a),
            self.characters.iter().position(|c| c.id == b),
        );
        let (ia, ib) = (ia.expect("no such character"), ib.expect("no such character"));
        if ia < ib {
            let (left, right) = self.characters.split_at_mut(ib);
            (&mut left[ia], &mut right[0])
        } else {
            let (left, right) = self.characters.split_at_mut(ia);
            (&mut right[0], &mut left[ib])
        }
    }

    /// Tear down into the character list.
    pub fn into_characters(self) -> Vec<Character> {
        self.characters
    }
}
