//! Dragon aura advisor: which two auras to run, and when to switch.
//!
//! Switching auras costs one of the highest-tier buildings, so switches are
//! rate limited by a cooldown. The cooldown timestamp is owned by the
//! caller; this module only reads it.

use serde::{Deserialize, Serialize};

use super::state::{DragonAura, DragonConfig, DragonContext, SwitchDecision};

/// Minimum time between non-burst switches.
pub const SWITCH_COOLDOWN_MS: f64 = 60_000.0;
/// Building total at which the endgame pair takes over.
pub const ENDGAME_BUILDINGS: u32 = 15_000;
/// Progress and kitten count required for the late-game pair.
pub const LATE_PROGRESS: f64 = 0.66;
pub const LATE_MIN_KITTENS: u32 = 10;
/// Below this many top-tier buildings a switch is never worth it.
pub const MIN_TOP_BUILDINGS: u32 = 2;

/// The four recommended aura pairs, one per rule of the decision table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuraTable {
    pub burst: DragonConfig,
    pub endgame: DragonConfig,
    pub late: DragonConfig,
    pub default: DragonConfig,
}

impl Default for AuraTable {
    fn default() -> Self {
        Self {
            burst: DragonConfig::new(DragonAura::Dragonflight, DragonAura::RadiantAppetite),
            endgame: DragonConfig::new(DragonAura::RadiantAppetite, DragonAura::DragonsFortune),
            late: DragonConfig::new(DragonAura::BreathOfMilk, DragonAura::RadiantAppetite),
            default: DragonConfig::new(DragonAura::RadiantAppetite, DragonAura::ElderBattalion),
        }
    }
}

impl AuraTable {
    pub fn pairs(&self) -> [(&'static str, DragonConfig); 4] {
        [
            ("burst", self.burst),
            ("endgame", self.endgame),
            ("late", self.late),
            ("default", self.default),
        ]
    }
}

/// Recommend with the built-in table.
pub fn recommend(ctx: &DragonContext) -> DragonConfig {
    recommend_with(ctx, &AuraTable::default())
}

/// Decision table, first match wins:
/// burst active → burst pair; huge building count → endgame pair;
/// late progress with enough kittens → late pair; otherwise default.
pub fn recommend_with(ctx: &DragonContext, table: &AuraTable) -> DragonConfig {
    if ctx.has_active_burst {
        table.burst
    } else if ctx.total_buildings >= ENDGAME_BUILDINGS {
        table.endgame
    } else if ctx.progress >= LATE_PROGRESS && ctx.secondary_resource_count >= LATE_MIN_KITTENS {
        table.late
    } else {
        table.default
    }
}

pub fn should_switch(
    current: &DragonConfig,
    recommended: &DragonConfig,
    last_switch_ms: Option<f64>,
    now_ms: f64,
    has_active_burst: bool,
    top_building_count: u32,
) -> SwitchDecision {
    if current == recommended {
        return SwitchDecision {
            should_switch: false,
            reason: "Already optimal".to_string(),
        };
    }
    if top_building_count < MIN_TOP_BUILDINGS {
        return SwitchDecision {
            should_switch: false,
            reason: format!("Only {} top buildings to sacrifice", top_building_count),
        };
    }
    if has_active_burst {
        return SwitchDecision {
            should_switch: true,
            reason: "Frenzy active".to_string(),
        };
    }

    let elapsed = match last_switch_ms {
        Some(last) => now_ms - last,
        None => f64::INFINITY,
    };
    if elapsed >= SWITCH_COOLDOWN_MS {
        SwitchDecision {
            should_switch: true,
            reason: "Phase transition".to_string(),
        }
    } else {
        let remaining = ((SWITCH_COOLDOWN_MS - elapsed) / 1000.0).ceil();
        SwitchDecision {
            should_switch: false,
            reason: format!("Cooldown: {}s remaining", remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(progress: f64, kittens: u32, buildings: u32, burst: bool) -> DragonContext {
        DragonContext {
            progress,
            secondary_resource_count: kittens,
            total_buildings: buildings,
            has_active_burst: burst,
        }
    }

    #[test]
    fn burst_wins_over_everything() {
        let t = AuraTable::default();
        assert_eq!(recommend(&ctx(0.95, 15, 16_000, true)), t.burst);
        assert_eq!(recommend(&ctx(0.0, 0, 0, true)), t.burst);
    }

    #[test]
    fn building_count_beats_late_rule() {
        let t = AuraTable::default();
        assert_eq!(recommend(&ctx(0.95, 15, 16_000, false)), t.endgame);
        assert_eq!(recommend(&ctx(0.1, 0, 15_000, false)), t.endgame);
    }

    #[test]
    fn late_needs_progress_and_kittens() {
        let t = AuraTable::default();
        assert_eq!(recommend(&ctx(0.66, 10, 500, false)), t.late);
        assert_eq!(recommend(&ctx(0.65, 10, 500, false)), t.default);
        assert_eq!(recommend(&ctx(0.9, 9, 500, false)), t.default);
    }

    #[test]
    fn default_pair() {
        assert_eq!(recommend(&ctx(0.2, 0, 100, false)), AuraTable::default().default);
    }

    #[test]
    fn custom_table_is_used() {
        let mut t = AuraTable::default();
        t.default = DragonConfig::new(DragonAura::DragonCursor, DragonAura::NoAura);
        assert_eq!(recommend_with(&ctx(0.2, 0, 100, false), &t), t.default);
    }

    #[test]
    fn default_pairs_are_distinct() {
        let t = AuraTable::default();
        let pairs = t.pairs();
        for (i, (_, a)) in pairs.iter().enumerate() {
            for (_, b) in pairs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
            assert_ne!(a.primary, a.secondary);
        }
    }

    const A: DragonConfig = DragonConfig::new(DragonAura::NoAura, DragonAura::NoAura);
    const B: DragonConfig = DragonConfig::new(DragonAura::RadiantAppetite, DragonAura::DragonsFortune);

    #[test]
    fn already_optimal() {
        let d = should_switch(&B, &B, None, 0.0, true, 100);
        assert!(!d.should_switch);
        assert_eq!(d.reason, "Already optimal");
    }

    #[test]
    fn too_few_top_buildings() {
        let d = should_switch(&A, &B, None, 1e9, true, 1);
        assert!(!d.should_switch);
        assert!(d.reason.contains("1 top buildings"));
    }

    #[test]
    fn burst_bypasses_cooldown() {
        let d = should_switch(&A, &B, Some(5_000.0), 5_000.0, true, 2);
        assert!(d.should_switch);
        assert_eq!(d.reason, "Frenzy active");
    }

    #[test]
    fn cooldown_blocks_non_burst() {
        let d = should_switch(&A, &B, Some(10_000.0), 40_000.0, false, 50);
        assert!(!d.should_switch);
        assert!(d.reason.starts_with("Cooldown"));
        assert!(d.reason.contains("30s"), "reason: {}", d.reason);
    }

    #[test]
    fn cooldown_remaining_rounds_up() {
        let d = should_switch(&A, &B, Some(0.0), 59_500.0, false, 50);
        assert!(!d.should_switch);
        assert!(d.reason.contains(" 1s"), "reason: {}", d.reason);
    }

    #[test]
    fn switch_after_cooldown() {
        let d = should_switch(&A, &B, Some(0.0), 60_000.0, false, 50);
        assert!(d.should_switch);
        assert_eq!(d.reason, "Phase transition");
    }

    #[test]
    fn first_switch_has_no_cooldown() {
        let d = should_switch(&A, &B, None, 0.0, false, 50);
        assert!(d.should_switch);
    }
}
