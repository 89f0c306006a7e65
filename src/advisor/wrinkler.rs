//! Wrinkler economics: is popping now worth the respawn delay?

use super::state::{PopDecision, Wrinkler};

/// Base reward multiplier for a popped wrinkler.
pub const BASE_MULTIPLIER: f64 = 1.1;
/// Each of the two wrinkler upgrades adds 5%.
pub const UPGRADE_FACTOR: f64 = 1.05;
/// Average respawn time per popped wrinkler, in seconds.
pub const RESPAWN_SECONDS: f64 = 110.0;

pub fn multiplier(has_upgrade_a: bool, has_upgrade_b: bool) -> f64 {
    let mut m = BASE_MULTIPLIER;
    if has_upgrade_a {
        m *= UPGRADE_FACTOR;
    }
    if has_upgrade_b {
        m *= UPGRADE_FACTOR;
    }
    m
}

/// Total payout from popping every active, non-shiny wrinkler.
pub fn reward(entries: &[Wrinkler], multiplier: f64) -> f64 {
    let sucked: f64 = entries
        .iter()
        .filter(|w| w.is_poppable())
        .map(|w| w.sucked)
        .sum();
    multiplier * sucked
}

pub fn poppable_count(entries: &[Wrinkler]) -> u32 {
    entries.iter().filter(|w| w.is_poppable()).count() as u32
}

pub fn should_pop(reward: f64, price: f64, cookies: f64, rate: f64, count: u32) -> PopDecision {
    if cookies >= price {
        return PopDecision {
            should_pop: false,
            reason: "Already affordable".to_string(),
        };
    }
    if !(cookies + reward >= price) {
        return PopDecision {
            should_pop: false,
            reason: "Pop reward insufficient".to_string(),
        };
    }
    if !(rate > 0.0) {
        return PopDecision {
            should_pop: true,
            reason: "No CpS; pop is the only way to afford".to_string(),
        };
    }

    let time_without_pop = (price - cookies) / rate;
    let respawn_cost = RESPAWN_SECONDS * count as f64;
    if time_without_pop > respawn_cost {
        PopDecision {
            should_pop: true,
            reason: format!("Saves {}s", (time_without_pop - respawn_cost).floor()),
        }
    } else {
        PopDecision {
            should_pop: false,
            reason: "Respawn cost too high".to_string(),
        }
    }
}
