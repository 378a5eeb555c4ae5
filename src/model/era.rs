use serde::{Deserialize, Serialize};

/// Era vocabulary of the surrounding game.
///
/// The broader game tracks more periods than the disease catalog
/// distinguishes; [`Era::from_game`] folds them down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEra {
    Prehistoric,
    BronzeAge,
    IronAge,
    Classical,
    Medieval,
    Renaissance,
    AgeOfSail,
    Industrial,
    Modern,
}

/// Era vocabulary of the disease catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Ancient,
    Classical,
    Medieval,
    Renaissance,
    Colonial,
    Industrial,
    Modern,
}

impl Era {
    /// Remap a game era onto the catalog vocabulary.
    ///
    /// Total by construction: every `GameEra` lands on a catalog era, so a
    /// new game period can never silently filter out the whole catalog.
    pub fn from_game(era: GameEra) -> Era {
        match era {
            GameEra::Prehistoric | GameEra::BronzeAge | GameEra::IronAge => Era::Ancient,
            GameEra::Classical => Era::Classical,
            GameEra::Medieval => Era::Medieval,
            GameEra::Renaissance => Era::Renaissance,
            GameEra::AgeOfSail => Era::Colonial,
            GameEra::Industrial => Era::Industrial,
            GameEra::Modern => Era::Modern,
        }
    }
}

/// Cultural region a character or settlement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    WesternEurope,
    EasternEurope,
    Mediterranean,
    MiddleEast,
    NorthAfrica,
    SubSaharanAfrica,
    EastAsia,
    SouthAsia,
    Mesoamerica,
    Andes,
    NorthAmerica,
    Caribbean,
}

impl Region {
    /// Regions on the New World side of the Columbian Exchange.
    pub fn is_new_world(self) -> bool {
        matches!(
            self,
            Region::Mesoamerica | Region::Andes | Region::NorthAmerica | Region::Caribbean
        )
    }
}
