//! Static classification tables for store items.
//!
//! Membership is by exact in-game name. The tables are fixed; nothing
//! mutates them at runtime.

use super::state::{Candidate, CandidateKind};

// ── Probabilistic-benefit upgrades (golden cookie family) ───────
pub const GOLDEN_UPGRADES: &[&str] = &[
    "Lucky day",
    "Serendipity",
    "Get lucky",
    "Golden goose egg",
    "Heavenly luck",
    "Lasting fortune",
    "Decisive fate",
    "Lucky digit",
    "Lucky number",
    "Lucky payout",
    "Green yeast digestives",
    "Dragon fang",
    "Distilled essence of redoubled luck",
];

// ── Switch-like upgrades: buying one flips a mode, never auto-buy ──
pub const TOGGLE_UPGRADES: &[&str] = &[
    "Golden switch [off]",
    "Golden switch [on]",
    "Shimmering veil [off]",
    "Shimmering veil [on]",
    "Elder Pledge",
    "Elder Covenant",
    "Revoke Elder Covenant",
    "Milk selector",
    "Background selector",
    "Golden cookie sound selector",
    "Season switcher",
    "Festive biscuit",
    "Ghostly biscuit",
    "Lovesick biscuit",
    "Fool's biscuit",
    "Bunny biscuit",
    "Sugar frenzy",
    "Chocolate egg",
];

// ── Research that starts the grandmapocalypse chain ─────────────
pub const RESEARCH_EXCLUDED: &[&str] = &["One mind", "Communal brainsweep", "Elder Pact"];

pub fn is_golden_upgrade(name: &str) -> bool {
    GOLDEN_UPGRADES.contains(&name)
}

pub fn is_toggle_upgrade(name: &str) -> bool {
    TOGGLE_UPGRADES.contains(&name)
}

pub fn is_research_excluded(name: &str) -> bool {
    RESEARCH_EXCLUDED.contains(&name)
}

/// Upgrades the advisor must never buy on its own.
pub fn is_blocked(candidate: &Candidate) -> bool {
    candidate.kind == CandidateKind::Upgrade
        && (is_toggle_upgrade(&candidate.name) || is_research_excluded(&candidate.name))
}
