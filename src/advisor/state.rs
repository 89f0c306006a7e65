//! Advisor data model: value types produced and consumed within one tick.
use serde::{Deserialize, Serialize};

/// Kinds of purchase the store offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateKind {
    Building,
    Upgrade,
}

/// A purchase option with an externally supplied payback score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub kind: CandidateKind,
    /// Payback-period-like metric. Lower is better.
    pub score: f64,
    pub price: f64,
    pub affordable: bool,
}

impl Candidate {
    pub fn building(name: &str, score: f64, price: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: CandidateKind::Building,
            score,
            price,
            affordable: false,
        }
    }

    pub fn upgrade(name: &str, score: f64, price: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: CandidateKind::Upgrade,
            score,
            price,
            affordable: false,
        }
    }
}

/// A request handed to the game client to buy something.
/// `kind` is optional because the caller may not know what it is looking at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub name: String,
    pub kind: Option<CandidateKind>,
}

impl From<&Candidate> for PurchaseRequest {
    fn from(c: &Candidate) -> Self {
        Self {
            name: c.name.clone(),
            kind: Some(c.kind),
        }
    }
}

/// Discrete game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseName {
    Early,
    Mid,
    Late,
    Endgame,
}

impl PhaseName {
    pub fn name(&self) -> &'static str {
        match self {
            PhaseName::Early => "Early",
            PhaseName::Mid => "Mid",
            PhaseName::Late => "Late",
            PhaseName::Endgame => "Endgame",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseInfo {
    /// Normalized progress in [0, 1].
    pub progress: f64,
    pub name: PhaseName,
}

/// Reserve ("bank") that purchases must not dip below.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LuckyBankInfo {
    pub threshold: f64,
    pub basis: f64,
    pub progress: f64,
    pub phase_name: PhaseName,
}

/// An item sitting in the store, as seen by the golden-upgrade scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreItem {
    pub name: String,
    pub price: f64,
}

impl StoreItem {
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoldenUpgradeCandidate {
    pub name: String,
    pub price: f64,
    /// Plain `cookies >= price`; the session re-checks against the bank.
    pub affordable: bool,
    pub prioritized: bool,
    pub defer_reason: String,
    /// `None` when there is no production to save with.
    pub hours_to_afford: Option<f64>,
}

/// Outcome of [`super::golden::evaluate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoldenEvaluation {
    pub should_prioritize: bool,
    pub reason: String,
    /// `None` when there is no production to save with.
    pub hours_to_afford: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopDecision {
    pub should_pop: bool,
    pub reason: String,
}

// ── Wrinklers ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrinklerPhase {
    Empty,
    Spawning,
    Attached,
}

impl WrinklerPhase {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => WrinklerPhase::Spawning,
            2 => WrinklerPhase::Attached,
            _ => WrinklerPhase::Empty,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrinklerKind {
    Normal,
    Shiny,
}

impl WrinklerKind {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => WrinklerKind::Shiny,
            _ => WrinklerKind::Normal,
        }
    }
}

/// A harvestable entity slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wrinkler {
    pub phase: WrinklerPhase,
    pub kind: WrinklerKind,
    /// Cookies sucked so far.
    pub sucked: f64,
}

impl Wrinkler {
    pub fn attached(sucked: f64) -> Self {
        Self {
            phase: WrinklerPhase::Attached,
            kind: WrinklerKind::Normal,
            sucked,
        }
    }

    pub fn from_raw(phase: u8, kind: u8, sucked: f64) -> Self {
        Self {
            phase: WrinklerPhase::from_raw(phase),
            kind: WrinklerKind::from_raw(kind),
            sucked,
        }
    }

    /// Active and not rare: the ones worth popping.
    pub fn is_poppable(&self) -> bool {
        self.phase == WrinklerPhase::Attached && self.kind != WrinklerKind::Shiny
    }
}

// ── Dragon auras ────────────────────────────────────────────────

/// The 22 named dragon auras, in game index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragonAura {
    NoAura,
    BreathOfMilk,
    DragonCursor,
    ElderBattalion,
    ReaperOfFields,
    EarthShatterer,
    MasterOfTheArmory,
    FierceHoarder,
    DragonGod,
    ArcaneAura,
    Dragonflight,
    AncestralMetamorphosis,
    UnholyDominion,
    EpochManipulator,
    MindOverMatter,
    RadiantAppetite,
    DragonsFortune,
    DragonsCurve,
    RealityBending,
    DragonOrbs,
    SupremeIntellect,
    DragonGuts,
}

impl DragonAura {
    /// All auras in index order.
    pub fn all() -> &'static [DragonAura] {
        &[
            DragonAura::NoAura,
            DragonAura::BreathOfMilk,
            DragonAura::DragonCursor,
            DragonAura::ElderBattalion,
            DragonAura::ReaperOfFields,
            DragonAura::EarthShatterer,
            DragonAura::MasterOfTheArmory,
            DragonAura::FierceHoarder,
            DragonAura::DragonGod,
            DragonAura::ArcaneAura,
            DragonAura::Dragonflight,
            DragonAura::AncestralMetamorphosis,
            DragonAura::UnholyDominion,
            DragonAura::EpochManipulator,
            DragonAura::MindOverMatter,
            DragonAura::RadiantAppetite,
            DragonAura::DragonsFortune,
            DragonAura::DragonsCurve,
            DragonAura::RealityBending,
            DragonAura::DragonOrbs,
            DragonAura::SupremeIntellect,
            DragonAura::DragonGuts,
        ]
    }

    /// In-game display name.
    pub fn name(&self) -> &'static str {
        match self {
            DragonAura::NoAura => "No aura",
            DragonAura::BreathOfMilk => "Breath of Milk",
            DragonAura::DragonCursor => "Dragon Cursor",
            DragonAura::ElderBattalion => "Elder Battalion",
            DragonAura::ReaperOfFields => "Reaper of Fields",
            DragonAura::EarthShatterer => "Earth Shatterer",
            DragonAura::MasterOfTheArmory => "Master of the Armory",
            DragonAura::FierceHoarder => "Fierce Hoarder",
            DragonAura::DragonGod => "Dragon God",
            DragonAura::ArcaneAura => "Arcane Aura",
            DragonAura::Dragonflight => "Dragonflight",
            DragonAura::AncestralMetamorphosis => "Ancestral Metamorphosis",
            DragonAura::UnholyDominion => "Unholy Dominion",
            DragonAura::EpochManipulator => "Epoch Manipulator",
            DragonAura::MindOverMatter => "Mind Over Matter",
            DragonAura::RadiantAppetite => "Radiant Appetite",
            DragonAura::DragonsFortune => "Dragon's Fortune",
            DragonAura::DragonsCurve => "Dragon's Curve",
            DragonAura::RealityBending => "Reality Bending",
            DragonAura::DragonOrbs => "Dragon Orbs",
            DragonAura::SupremeIntellect => "Supreme Intellect",
            DragonAura::DragonGuts => "Dragon Guts",
        }
    }

    /// Game slot index (0 = no aura).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Unknown indices fall back to `NoAura`.
    pub fn from_index(index: u8) -> Self {
        Self::all()
            .get(index as usize)
            .copied()
            .unwrap_or(DragonAura::NoAura)
    }

    /// Unknown names fall back to `NoAura`.
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|a| a.name() == name)
            .unwrap_or(DragonAura::NoAura)
    }
}

/// Two aura slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragonConfig {
    pub primary: DragonAura,
    pub secondary: DragonAura,
}

impl DragonConfig {
    pub const fn new(primary: DragonAura, secondary: DragonAura) -> Self {
        Self { primary, secondary }
    }
}

/// Inputs for [`super::dragon::recommend`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragonContext {
    pub progress: f64,
    /// Owned kitten upgrades (the milk-scaling family).
    pub secondary_resource_count: u32,
    pub total_buildings: u32,
    pub has_active_burst: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchDecision {
    pub should_switch: bool,
    pub reason: String,
}

// ── Per-tick snapshot ───────────────────────────────────────────

/// Everything the game exposes to one evaluation pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSnapshot {
    pub cookies: f64,
    /// Current production rate, including temporary buffs.
    pub cps: f64,
    /// Production rate with short-lived multipliers removed.
    pub unbuffed_cps: f64,
    pub candidates: Vec<Candidate>,
    pub store: Vec<StoreItem>,
    pub wrinklers: Vec<Wrinkler>,
    pub has_wrinkler_upgrade_a: bool,
    pub has_wrinkler_upgrade_b: bool,
    pub auras: Option<DragonConfig>,
    pub total_buildings: u32,
    /// Owned count of the highest-tier building (aura switches sacrifice one).
    pub top_building_count: u32,
    pub kitten_upgrades: u32,
    pub has_active_burst: bool,
}
