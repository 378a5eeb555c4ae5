use serde::{Deserialize, Serialize};

/// Baseline value of every stat; constitution modifiers pivot around it.
pub const STAT_BASELINE: f64 = 10.0;

/// The closed set of character attributes the health engine reads or writes.
///
/// Diseases and medicines mutate these only through [`Stats::apply`] /
/// [`Stats::remove`], so there is no by-name lookup to misspell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: f64,
    pub agility: f64,
    pub constitution: f64,
    pub focus: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: STAT_BASELINE,
            agility: STAT_BASELINE,
            constitution: STAT_BASELINE,
            focus: STAT_BASELINE,
        }
    }
}

impl Stats {
    pub fn apply(&mut self, d: &StatDeltas) {
        self.strength += d.strength;
        self.agility += d.agility;
        self.constitution += d.constitution;
        self.focus += d.focus;
    }

    /// Undo a previously applied delta.
    pub fn remove(&mut self, d: &StatDeltas) {
        self.strength -= d.strength;
        self.agility -= d.agility;
        self.constitution -= d.constitution;
        self.focus -= d.focus;
    }
}

/// A signed adjustment to each stat. Zero fields are the common case, so
/// serialized forms omit them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatDeltas {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub strength: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub agility: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub constitution: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub focus: f64,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl StatDeltas {
    pub const NONE: StatDeltas = StatDeltas {
        strength: 0.0,
        agility: 0.0,
        constitution: 0.0,
        focus: 0.0,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Accumulate another delta into this one.
    pub fn add(&mut self, other: &StatDeltas) {
        self.strength += other.strength;
        self.agility += other.agility;
        self.constitution += other.constitution;
        self.focus += other.focus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_then_remove_restores() {
        let mut stats = Stats::default();
        let delta = StatDeltas {
            strength: -2.0,
            constitution: -1.5,
            ..StatDeltas::NONE
        };
        stats.apply(&delta);
        assert_eq!(stats.strength, 8.0);
        assert_eq!(stats.constitution, 8.5);
        stats.remove(&delta);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn accumulate_deltas() {
        let mut total = StatDeltas::NONE;
        total.add(&StatDeltas {
            strength: -1.0,
            ..StatDeltas::NONE
        });
        total.add(&StatDeltas {
            strength: -0.5,
            agility: -1.0,
            ..StatDeltas::NONE
        });
        assert_eq!(total.strength, -1.5);
        assert_eq!(total.agility, -1.0);
        assert!(!total.is_none());
    }

    #[test]
    fn zero_fields_omitted_from_json() {
        let json = serde_json::to_value(StatDeltas {
            strength: -1.0,
            ..StatDeltas::NONE
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"strength": -1.0}));
    }
}
