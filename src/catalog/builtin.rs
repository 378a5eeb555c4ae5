//! The data set shipped with the crate: maladies, remedies, prevalence
//! records and the Columbian Exchange pools. Pure data, no logic.

use crate::model::disease::{
    DiseaseCategory, DiseaseDef, ExchangeRestriction, NarrativeHints, Prevalence,
    ProgressionStage, SeverityTier, TransmissionVector,
};
use crate::model::era::{Era, Region};
use crate::model::medicine::{Effectiveness, MedicineDef};
use crate::model::stats::StatDeltas;

use super::Catalog;

const ALL_ERAS: [Era; 7] = [
    Era::Ancient,
    Era::Classical,
    Era::Medieval,
    Era::Renaissance,
    Era::Colonial,
    Era::Industrial,
    Era::Modern,
];

const OLD_WORLD: [Region; 8] = [
    Region::WesternEurope,
    Region::EasternEurope,
    Region::Mediterranean,
    Region::MiddleEast,
    Region::NorthAfrica,
    Region::SubSaharanAfrica,
    Region::EastAsia,
    Region::SouthAsia,
];

const NEW_WORLD: [Region; 4] = [
    Region::Mesoamerica,
    Region::Andes,
    Region::NorthAmerica,
    Region::Caribbean,
];

fn everywhere() -> Vec<Region> {
    OLD_WORLD.iter().chain(NEW_WORLD.iter()).copied().collect()
}

fn syms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn hints(onlooker: &str, victim: &str, healer: &str) -> NarrativeHints {
    NarrativeHints {
        onlooker: onlooker.to_string(),
        victim: victim.to_string(),
        healer: healer.to_string(),
    }
}

fn stage(day_offset: u32, symptom: &str, severity: f64, effects: StatDeltas) -> ProgressionStage {
    ProgressionStage {
        day_offset,
        symptom: symptom.to_string(),
        severity,
        effects,
    }
}

/// Neutral template so each entry only states what differs.
fn disease(
    id: &str,
    name: &str,
    category: DiseaseCategory,
    severity: SeverityTier,
    vector: TransmissionVector,
) -> DiseaseDef {
    DiseaseDef {
        id: id.to_string(),
        name: name.to_string(),
        category,
        severity,
        eras: ALL_ERAS.to_vec(),
        regions: everywhere(),
        first_year: None,
        last_year: None,
        vector,
        base_transmission: 0.0,
        proximity_factor: 0.0,
        contact_factor: 0.0,
        symptoms: Vec::new(),
        incubation_days: 0,
        duration_days: 1,
        mortality: 0.0,
        effects: StatDeltas::NONE,
        recovery: 0.5,
        grants_immunity: false,
        immunity_years: None,
        stages: Vec::new(),
        hints: NarrativeHints::default(),
        icon: String::new(),
        color: String::new(),
    }
}

fn diseases() -> Vec<DiseaseDef> {
    vec![
        DiseaseDef {
            base_transmission: 0.4,
            proximity_factor: 1.0,
            contact_factor: 1.0,
            symptoms: syms(&["sniffles", "cough", "sore throat"]),
            incubation_days: 2,
            duration_days: 7,
            effects: StatDeltas {
                focus: -0.5,
                ..StatDeltas::NONE
            },
            recovery: 0.85,
            hints: hints(
                "keeps sneezing into a kerchief",
                "Your nose will not stop running.",
                "A harmless cold; rest and broth.",
            ),
            icon: "🤧".into(),
            color: "#8fb7d1".into(),
            ..disease(
                "common_cold",
                "Common Cold",
                DiseaseCategory::Respiratory,
                SeverityTier::Minor,
                TransmissionVector::Airborne,
            )
        },
        DiseaseDef {
            base_transmission: 0.55,
            proximity_factor: 0.9,
            contact_factor: 1.0,
            symptoms: syms(&["fever", "aches", "exhaustion"]),
            incubation_days: 2,
            duration_days: 10,
            mortality: 0.05,
            effects: StatDeltas {
                strength: -1.0,
                constitution: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.65,
            grants_immunity: true,
            immunity_years: Some(1),
            hints: hints(
                "is flushed and shivering despite the fire",
                "Every joint aches and the fever will not break.",
                "The grippe. Keep them warm and watered.",
            ),
            icon: "🤒".into(),
            color: "#d9a066".into(),
            ..disease(
                "influenza",
                "Influenza",
                DiseaseCategory::Respiratory,
                SeverityTier::Moderate,
                TransmissionVector::Airborne,
            )
        },
        DiseaseDef {
            eras: vec![Era::Classical, Era::Medieval, Era::Renaissance, Era::Colonial],
            regions: OLD_WORLD.to_vec(),
            base_transmission: 0.35,
            proximity_factor: 0.7,
            contact_factor: 1.0,
            symptoms: syms(&["fever", "chills", "swollen buboes"]),
            incubation_days: 3,
            duration_days: 12,
            mortality: 0.6,
            effects: StatDeltas {
                strength: -3.0,
                agility: -2.0,
                constitution: -2.0,
                ..StatDeltas::NONE
            },
            recovery: 0.3,
            grants_immunity: true,
            immunity_years: Some(10),
            stages: vec![
                stage(3, "a burning fever takes hold", 0.6, StatDeltas::NONE),
                stage(
                    5,
                    "dark buboes swell at the neck and groin",
                    0.85,
                    StatDeltas {
                        strength: -1.0,
                        ..StatDeltas::NONE
                    },
                ),
            ],
            hints: hints(
                "has dark swellings at the throat and walks as if dying",
                "The swellings burn like coals under your skin.",
                "The pestilence. Pray, and burn the bedding.",
            ),
            icon: "🐀".into(),
            color: "#3b2f2f".into(),
            ..disease(
                "bubonic_plague",
                "Bubonic Plague",
                DiseaseCategory::VectorBorne,
                SeverityTier::Deadly,
                TransmissionVector::Insect,
            )
        },
        DiseaseDef {
            last_year: Some(1980),
            base_transmission: 0.5,
            proximity_factor: 0.75,
            contact_factor: 1.0,
            symptoms: syms(&["fever", "rash", "pustules"]),
            incubation_days: 12,
            duration_days: 21,
            mortality: 0.3,
            effects: StatDeltas {
                strength: -1.0,
                constitution: -2.0,
                ..StatDeltas::NONE
            },
            recovery: 0.45,
            grants_immunity: true,
            immunity_years: None,
            stages: vec![
                stage(12, "a red rash spreads across the face", 0.6, StatDeltas::NONE),
                stage(15, "the rash rises into pustules", 0.8, StatDeltas::NONE),
            ],
            hints: hints(
                "is covered in angry pustules",
                "Your skin is aflame with sores.",
                "The speckled monster. Survivors never take it twice.",
            ),
            icon: "😷".into(),
            color: "#a23e48".into(),
            ..disease(
                "smallpox",
                "Smallpox",
                DiseaseCategory::Contact,
                SeverityTier::Deadly,
                TransmissionVector::Airborne,
            )
        },
        DiseaseDef {
            base_transmission: 0.65,
            proximity_factor: 0.9,
            contact_factor: 1.0,
            symptoms: syms(&["fever", "cough", "spotted rash"]),
            incubation_days: 10,
            duration_days: 14,
            mortality: 0.1,
            effects: StatDeltas {
                constitution: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.7,
            grants_immunity: true,
            immunity_years: None,
            hints: hints(
                "has a blotchy rash creeping up the neck",
                "Light stabs at your eyes and your skin prickles.",
                "Measles. Once through it, never again.",
            ),
            icon: "🔴".into(),
            color: "#c75146".into(),
            ..disease(
                "measles",
                "Measles",
                DiseaseCategory::Respiratory,
                SeverityTier::Moderate,
                TransmissionVector::Airborne,
            )
        },
        DiseaseDef {
            eras: vec![Era::Colonial, Era::Industrial, Era::Modern],
            base_transmission: 0.45,
            proximity_factor: 0.5,
            contact_factor: 0.9,
            symptoms: syms(&["violent flux", "cramps", "sunken eyes"]),
            incubation_days: 1,
            duration_days: 8,
            mortality: 0.4,
            effects: StatDeltas {
                constitution: -3.0,
                ..StatDeltas::NONE
            },
            recovery: 0.5,
            grants_immunity: true,
            immunity_years: Some(2),
            hints: hints(
                "is grey-faced and doubled over",
                "Your body is wringing itself dry.",
                "Cholera. Boil every drop they drink.",
            ),
            icon: "💧".into(),
            color: "#4a6d7c".into(),
            ..disease(
                "cholera",
                "Cholera",
                DiseaseCategory::Gastrointestinal,
                SeverityTier::Severe,
                TransmissionVector::Waterborne,
            )
        },
        DiseaseDef {
            base_transmission: 0.4,
            proximity_factor: 0.5,
            contact_factor: 0.8,
            symptoms: syms(&["bloody flux", "fever", "weakness"]),
            incubation_days: 2,
            duration_days: 10,
            mortality: 0.15,
            effects: StatDeltas {
                strength: -1.0,
                constitution: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.6,
            hints: hints(
                "hurries to the privies again and again",
                "Your guts twist without mercy.",
                "The bloody flux; clean water and rest.",
            ),
            icon: "🚽".into(),
            color: "#7a5c3e".into(),
            ..disease(
                "dysentery",
                "Dysentery",
                DiseaseCategory::Gastrointestinal,
                SeverityTier::Moderate,
                TransmissionVector::Waterborne,
            )
        },
        DiseaseDef {
            regions: vec![
                Region::Mediterranean,
                Region::MiddleEast,
                Region::NorthAfrica,
                Region::SubSaharanAfrica,
                Region::SouthAsia,
                Region::EastAsia,
                Region::Mesoamerica,
                Region::Andes,
                Region::Caribbean,
            ],
            base_transmission: 0.3,
            proximity_factor: 0.6,
            contact_factor: 0.3,
            symptoms: syms(&["cyclical fever", "sweats", "shaking chills"]),
            incubation_days: 9,
            duration_days: 20,
            mortality: 0.25,
            effects: StatDeltas {
                strength: -2.0,
                constitution: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.35,
            hints: hints(
                "shakes with chills under the noon sun",
                "The fever comes in waves, like a tide.",
                "Marsh fever. It haunts the wetlands.",
            ),
            icon: "🦟".into(),
            color: "#5b7553".into(),
            ..disease(
                "malaria",
                "Malaria",
                DiseaseCategory::VectorBorne,
                SeverityTier::Severe,
                TransmissionVector::Insect,
            )
        },
        DiseaseDef {
            eras: vec![Era::Medieval, Era::Renaissance, Era::Colonial, Era::Industrial],
            base_transmission: 0.4,
            proximity_factor: 0.65,
            contact_factor: 0.9,
            symptoms: syms(&["fever", "rash", "delirium"]),
            incubation_days: 10,
            duration_days: 14,
            mortality: 0.35,
            effects: StatDeltas {
                focus: -2.0,
                constitution: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.45,
            grants_immunity: true,
            immunity_years: Some(5),
            hints: hints(
                "mutters nonsense, scratching at a dark rash",
                "Your thoughts swim in fever.",
                "Gaol fever; it rides on lice.",
            ),
            icon: "🪳".into(),
            color: "#6e5849".into(),
            ..disease(
                "typhus",
                "Typhus",
                DiseaseCategory::VectorBorne,
                SeverityTier::Severe,
                TransmissionVector::Insect,
            )
        },
        DiseaseDef {
            base_transmission: 0.15,
            proximity_factor: 0.4,
            contact_factor: 0.6,
            symptoms: syms(&["persistent cough", "blood-flecked spittle", "wasting"]),
            incubation_days: 30,
            duration_days: 180,
            mortality: 0.3,
            effects: StatDeltas {
                strength: -2.0,
                constitution: -2.0,
                ..StatDeltas::NONE
            },
            recovery: 0.2,
            hints: hints(
                "coughs into a spotted handkerchief",
                "The cough never leaves, and your strength goes with it.",
                "Consumption. A long, patient enemy.",
            ),
            icon: "🫁".into(),
            color: "#9c8aa5".into(),
            ..disease(
                "consumption",
                "Consumption",
                DiseaseCategory::Respiratory,
                SeverityTier::Severe,
                TransmissionVector::Airborne,
            )
        },
        DiseaseDef {
            eras: vec![Era::Renaissance, Era::Colonial, Era::Industrial, Era::Modern],
            base_transmission: 0.25,
            proximity_factor: 0.05,
            contact_factor: 1.0,
            symptoms: syms(&["chancre", "rash", "fevers"]),
            incubation_days: 21,
            duration_days: 90,
            mortality: 0.1,
            effects: StatDeltas {
                constitution: -1.0,
                focus: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.25,
            stages: vec![
                stage(21, "a painless chancre appears", 0.4, StatDeltas::NONE),
                stage(
                    60,
                    "rash and fevers come and go",
                    0.6,
                    StatDeltas {
                        focus: -0.5,
                        ..StatDeltas::NONE
                    },
                ),
            ],
            hints: hints(
                "hides a rash beneath high collars",
                "The marks fade and return, month after month.",
                "The great pox, come back across the ocean.",
            ),
            icon: "🌹".into(),
            color: "#b0413e".into(),
            ..disease(
                "syphilis",
                "Syphilis",
                DiseaseCategory::Contact,
                SeverityTier::Moderate,
                TransmissionVector::Contact,
            )
        },
        DiseaseDef {
            base_transmission: 0.05,
            proximity_factor: 0.1,
            contact_factor: 0.9,
            symptoms: syms(&["fear of water", "spasms", "fury"]),
            incubation_days: 25,
            duration_days: 32,
            mortality: 0.95,
            effects: StatDeltas {
                focus: -3.0,
                agility: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.02,
            hints: hints(
                "froths and flinches from the water trough",
                "The sight of water closes your throat.",
                "Once the madness shows, little can be done.",
            ),
            icon: "🐺".into(),
            color: "#454545".into(),
            ..disease(
                "rabies",
                "Rabies",
                DiseaseCategory::Zoonotic,
                SeverityTier::Deadly,
                TransmissionVector::Zoonotic,
            )
        },
        DiseaseDef {
            base_transmission: 0.15,
            proximity_factor: 0.3,
            contact_factor: 0.6,
            symptoms: syms(&["black sores", "fever", "labored breath"]),
            incubation_days: 5,
            duration_days: 14,
            mortality: 0.5,
            effects: StatDeltas {
                strength: -2.0,
                constitution: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.3,
            hints: hints(
                "bears coal-black sores on the arms",
                "The sores are strangely painless, and that frightens you.",
                "Wool-sorters' sickness, from hides and herds.",
            ),
            icon: "🐑".into(),
            color: "#2f2f2f".into(),
            ..disease(
                "anthrax",
                "Anthrax",
                DiseaseCategory::Zoonotic,
                SeverityTier::Severe,
                TransmissionVector::Zoonotic,
            )
        },
        DiseaseDef {
            symptoms: syms(&["bleeding gums", "old wounds reopening", "lethargy"]),
            incubation_days: 30,
            duration_days: 60,
            mortality: 0.1,
            effects: StatDeltas {
                strength: -2.0,
                constitution: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.5,
            hints: hints(
                "has bruises that never heal and bleeding gums",
                "Your teeth loosen in their sockets.",
                "Scurvy. Greens and citrus, or the grave.",
            ),
            icon: "🍋".into(),
            color: "#c9b458".into(),
            ..disease(
                "scurvy",
                "Scurvy",
                DiseaseCategory::Nutritional,
                SeverityTier::Moderate,
                TransmissionVector::NonContagious,
            )
        },
        DiseaseDef {
            eras: vec![Era::Medieval, Era::Renaissance],
            regions: vec![
                Region::WesternEurope,
                Region::EasternEurope,
                Region::Mediterranean,
            ],
            base_transmission: 0.1,
            proximity_factor: 0.2,
            contact_factor: 0.2,
            symptoms: syms(&["burning limbs", "convulsions", "visions"]),
            incubation_days: 2,
            duration_days: 14,
            mortality: 0.3,
            effects: StatDeltas {
                focus: -2.0,
                strength: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.55,
            hints: hints(
                "dances and raves of holy fire",
                "Your limbs burn as if thrust in coals.",
                "St. Anthony's fire, from blighted rye.",
            ),
            icon: "🔥".into(),
            color: "#c1440e".into(),
            ..disease(
                "st_anthonys_fire",
                "St. Anthony's Fire",
                DiseaseCategory::Toxic,
                SeverityTier::Severe,
                TransmissionVector::Nutritional,
            )
        },
        DiseaseDef {
            eras: vec![Era::Renaissance],
            regions: vec![Region::WesternEurope],
            first_year: Some(1485),
            last_year: Some(1551),
            base_transmission: 0.45,
            proximity_factor: 0.8,
            contact_factor: 1.0,
            symptoms: syms(&["sudden dread", "drenching sweat", "collapse"]),
            incubation_days: 1,
            duration_days: 3,
            mortality: 0.4,
            effects: StatDeltas {
                constitution: -2.0,
                ..StatDeltas::NONE
            },
            recovery: 0.5,
            grants_immunity: true,
            immunity_years: Some(1),
            hints: hints(
                "is soaked through and trembling",
                "A dread seizes you, then the sweat.",
                "The English sweat. Dead by evening or well by morning.",
            ),
            icon: "💦".into(),
            color: "#7f9aa3".into(),
            ..disease(
                "sweating_sickness",
                "Sweating Sickness",
                DiseaseCategory::Respiratory,
                SeverityTier::Severe,
                TransmissionVector::Airborne,
            )
        },
        DiseaseDef {
            base_transmission: 0.0,
            symptoms: syms(&["lockjaw", "rigid spasms"]),
            incubation_days: 7,
            duration_days: 21,
            mortality: 0.5,
            effects: StatDeltas {
                agility: -3.0,
                ..StatDeltas::NONE
            },
            recovery: 0.3,
            hints: hints(
                "cannot unclench the jaw",
                "Your own muscles betray you, locking tight.",
                "Lockjaw, from a dirtied wound.",
            ),
            icon: "🔒".into(),
            color: "#55453d".into(),
            ..disease(
                "lockjaw",
                "Lockjaw",
                DiseaseCategory::Traumatic,
                SeverityTier::Severe,
                TransmissionVector::NonContagious,
            )
        },
        DiseaseDef {
            base_transmission: 0.2,
            proximity_factor: 0.3,
            contact_factor: 0.5,
            symptoms: syms(&["gnawing hunger", "pallor", "cramps"]),
            incubation_days: 14,
            duration_days: 90,
            mortality: 0.02,
            effects: StatDeltas {
                strength: -1.0,
                ..StatDeltas::NONE
            },
            recovery: 0.4,
            hints: hints(
                "eats twice a portion and thins anyway",
                "No meal ever fills you.",
                "Worms. A bitter tonic will drive them out.",
            ),
            icon: "🪱".into(),
            color: "#8d7b68".into(),
            ..disease(
                "gut_worms",
                "Gut Worms",
                DiseaseCategory::Parasitic,
                SeverityTier::Minor,
                TransmissionVector::Waterborne,
            )
        },
    ]
}

fn prev(disease: &str, era: Era, region: Region, years: &[i32]) -> Prevalence {
    Prevalence {
        disease: disease.to_string(),
        era,
        region,
        epidemic_years: years.to_vec(),
    }
}

fn prevalence() -> Vec<Prevalence> {
    vec![
        prev(
            "bubonic_plague",
            Era::Medieval,
            Region::WesternEurope,
            &[1347, 1348, 1349, 1350, 1351],
        ),
        prev(
            "bubonic_plague",
            Era::Medieval,
            Region::Mediterranean,
            &[1347, 1348],
        ),
        prev(
            "bubonic_plague",
            Era::Classical,
            Region::Mediterranean,
            &[541, 542, 543],
        ),
        prev(
            "smallpox",
            Era::Colonial,
            Region::Mesoamerica,
            &[1520, 1521],
        ),
        prev("smallpox", Era::Colonial, Region::Caribbean, &[1518]),
        prev("smallpox", Era::Colonial, Region::Andes, &[1524, 1525]),
        prev(
            "cholera",
            Era::Industrial,
            Region::WesternEurope,
            &[1832, 1849, 1854],
        ),
        prev(
            "cholera",
            Era::Industrial,
            Region::SouthAsia,
            &[1817, 1818, 1819],
        ),
        prev(
            "sweating_sickness",
            Era::Renaissance,
            Region::WesternEurope,
            &[1485, 1508, 1517, 1528, 1551],
        ),
        prev(
            "typhus",
            Era::Renaissance,
            Region::Mediterranean,
            &[1489, 1490],
        ),
        prev(
            "st_anthonys_fire",
            Era::Medieval,
            Region::WesternEurope,
            &[1374],
        ),
        prev(
            "influenza",
            Era::Industrial,
            Region::WesternEurope,
            &[1889, 1890],
        ),
        prev("measles", Era::Colonial, Region::Caribbean, &[1529]),
    ]
}

/// Neutral template for remedies.
fn medicine(id: &str, name: &str, cost: f64) -> MedicineDef {
    MedicineDef {
        id: id.to_string(),
        name: name.to_string(),
        eras: ALL_ERAS.to_vec(),
        regions: everywhere(),
        effectiveness: Effectiveness::default(),
        side_effects: StatDeltas::NONE,
        cost,
    }
}

fn medicines() -> Vec<MedicineDef> {
    vec![
        MedicineDef {
            effectiveness: Effectiveness {
                respiratory: 0.3,
                gastrointestinal: 0.1,
                vector_borne: 0.15,
                ..Effectiveness::default()
            },
            ..medicine("willow_bark", "Willow Bark", 5.0)
        },
        MedicineDef {
            eras: vec![Era::Classical, Era::Medieval, Era::Renaissance],
            regions: OLD_WORLD.to_vec(),
            effectiveness: Effectiveness {
                toxic: 0.3,
                zoonotic: 0.15,
                respiratory: 0.1,
                ..Effectiveness::default()
            },
            side_effects: StatDeltas {
                focus: -0.5,
                ..StatDeltas::NONE
            },
            ..medicine("theriac", "Theriac", 40.0)
        },
        MedicineDef {
            eras: vec![Era::Colonial, Era::Industrial, Era::Modern],
            regions: vec![
                Region::Andes,
                Region::Mesoamerica,
                Region::Caribbean,
                Region::WesternEurope,
                Region::Mediterranean,
            ],
            effectiveness: Effectiveness {
                vector_borne: 0.7,
                ..Effectiveness::default()
            },
            ..medicine("cinchona_bark", "Cinchona Bark", 30.0)
        },
        MedicineDef {
            eras: vec![Era::Renaissance, Era::Colonial, Era::Industrial],
            effectiveness: Effectiveness {
                contact: 0.5,
                parasitic: 0.2,
                ..Effectiveness::default()
            },
            side_effects: StatDeltas {
                constitution: -1.0,
                focus: -1.0,
                ..StatDeltas::NONE
            },
            ..medicine("mercury_salve", "Mercury Salve", 20.0)
        },
        MedicineDef {
            effectiveness: Effectiveness {
                nutritional: 0.9,
                ..Effectiveness::default()
            },
            ..medicine("fresh_citrus", "Fresh Citrus", 3.0)
        },
        MedicineDef {
            effectiveness: Effectiveness {
                toxic: 0.6,
                gastrointestinal: 0.3,
                ..Effectiveness::default()
            },
            ..medicine("charcoal_draught", "Charcoal Draught", 8.0)
        },
        MedicineDef {
            effectiveness: Effectiveness {
                contact: 0.25,
                traumatic: 0.35,
                zoonotic: 0.1,
                ..Effectiveness::default()
            },
            ..medicine("herbal_poultice", "Herbal Poultice", 4.0)
        },
        MedicineDef {
            eras: vec![Era::Colonial, Era::Industrial],
            effectiveness: Effectiveness {
                traumatic: 0.4,
                gastrointestinal: 0.25,
                respiratory: 0.2,
                ..Effectiveness::default()
            },
            side_effects: StatDeltas {
                focus: -2.0,
                ..StatDeltas::NONE
            },
            ..medicine("laudanum", "Laudanum", 15.0)
        },
        MedicineDef {
            effectiveness: Effectiveness {
                parasitic: 0.55,
                gastrointestinal: 0.2,
                ..Effectiveness::default()
            },
            ..medicine("wormwood_tonic", "Wormwood Tonic", 10.0)
        },
    ]
}

fn exchange() -> ExchangeRestriction {
    ExchangeRestriction {
        contact_year: 1492,
        new_world_absent: vec![
            "smallpox".to_string(),
            "measles".to_string(),
            "influenza".to_string(),
            "common_cold".to_string(),
            "bubonic_plague".to_string(),
            "malaria".to_string(),
            "typhus".to_string(),
            "cholera".to_string(),
        ],
        old_world_absent: vec!["syphilis".to_string()],
    }
}

pub fn catalog() -> Catalog {
    Catalog {
        diseases: diseases(),
        prevalence: prevalence(),
        medicines: medicines(),
        exchange: exchange(),
    }
}
