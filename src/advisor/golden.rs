//! Golden-upgrade prioritization.
//!
//! Probabilistic-benefit upgrades don't show up well in a payback ranking,
//! so they get their own rule: wait for one if it can be afforded within a
//! phase-dependent patience budget.

use super::catalog;
use super::phase::phase_name;
use super::state::{GoldenEvaluation, GoldenUpgradeCandidate, PhaseName, StoreItem};

const EARLY_HOURS: f64 = 0.5;
const MID_END_HOURS: f64 = 4.0;
const LATE_END_HOURS: f64 = 12.0;

/// How many hours of saving a golden upgrade is worth at this progress.
pub fn max_patience_hours(progress: f64) -> f64 {
    if progress < 0.33 {
        EARLY_HOURS
    } else if progress < 0.66 {
        let t = (progress - 0.33) / 0.33;
        EARLY_HOURS + (MID_END_HOURS - EARLY_HOURS) * t
    } else {
        let t = ((progress - 0.66) / 0.34).min(1.0);
        MID_END_HOURS + (LATE_END_HOURS - MID_END_HOURS) * t
    }
}

/// Whether saving for a golden upgrade at `price` fits the patience budget.
pub fn evaluate(progress: f64, price: f64, rate: f64) -> GoldenEvaluation {
    if !(rate > 0.0) {
        return GoldenEvaluation {
            should_prioritize: false,
            reason: "No CpS".to_string(),
            hours_to_afford: None,
        };
    }
    let hours = price / (rate * 3600.0);
    let limit = max_patience_hours(progress);
    if hours <= limit {
        GoldenEvaluation {
            should_prioritize: true,
            reason: format!("Affordable in {:.1}h", hours),
            hours_to_afford: Some(hours),
        }
    } else {
        GoldenEvaluation {
            should_prioritize: false,
            reason: format!(
                "{:.1}h to afford exceeds {:.1}h limit ({} phase)",
                hours,
                limit,
                phase_label(progress)
            ),
            hours_to_afford: hours.is_finite().then_some(hours),
        }
    }
}

fn phase_label(progress: f64) -> &'static str {
    match phase_name(progress) {
        PhaseName::Early => "early",
        PhaseName::Mid => "mid",
        PhaseName::Late | PhaseName::Endgame => "late",
    }
}

/// Scan the store for golden upgrades; prioritized first, then cheapest.
pub fn find_in_store(
    items: &[StoreItem],
    cookies: f64,
    rate: f64,
    progress: f64,
) -> Vec<GoldenUpgradeCandidate> {
    let mut found: Vec<GoldenUpgradeCandidate> = items
        .iter()
        .filter(|item| catalog::is_golden_upgrade(&item.name))
        .map(|item| {
            let eval = evaluate(progress, item.price, rate);
            GoldenUpgradeCandidate {
                name: item.name.clone(),
                price: item.price,
                affordable: cookies >= item.price,
                prioritized: eval.should_prioritize,
                defer_reason: eval.reason,
                hours_to_afford: eval.hours_to_afford,
            }
        })
        .collect();
    found.sort_by(|a, b| {
        b.prioritized
            .cmp(&a.prioritized)
            .then(a.price.total_cmp(&b.price))
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patience_early_is_flat() {
        assert_eq!(max_patience_hours(0.0), 0.5);
        assert_eq!(max_patience_hours(0.32), 0.5);
    }

    #[test]
    fn patience_mid_ramps() {
        assert!((max_patience_hours(0.33) - 0.5).abs() < 1e-9);
        assert!((max_patience_hours(0.495) - 2.25).abs() < 1e-9);
        assert!(max_patience_hours(0.659) < 4.0);
    }

    #[test]
    fn patience_late_ramps_and_caps() {
        assert!((max_patience_hours(0.66) - 4.0).abs() < 1e-9);
        assert!((max_patience_hours(0.83) - 8.0).abs() < 1e-9);
        assert!((max_patience_hours(1.0) - 12.0).abs() < 1e-9);
        assert!((max_patience_hours(1.5) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn no_cps_is_not_prioritized() {
        let e = evaluate(0.5, 1000.0, 0.0);
        assert!(!e.should_prioritize);
        assert_eq!(e.reason, "No CpS");
        assert_eq!(e.hours_to_afford, None);

        let e = evaluate(0.5, 1000.0, -1.0);
        assert!(!e.should_prioritize);
    }

    #[test]
    fn overflowing_hours_are_reported_as_none() {
        let e = evaluate(0.5, 1e300, 1e-300);
        assert!(!e.should_prioritize);
        assert_eq!(e.hours_to_afford, None);
    }

    #[test]
    fn lucky_day_early_is_deferred() {
        let e = evaluate(0.2, 777_777_777.0, 1000.0);
        assert!((e.hours_to_afford.unwrap() - 216.05).abs() < 0.01);
        assert!(!e.should_prioritize);
        assert!(e.reason.contains("216.0h"), "reason: {}", e.reason);
        assert!(e.reason.contains("0.5h"), "reason: {}", e.reason);
    }

    #[test]
    fn cheap_upgrade_is_prioritized() {
        // 0.25h at 1000 cps
        let e = evaluate(0.1, 900_000.0, 1000.0);
        assert!(e.should_prioritize);
        assert!(e.reason.contains("0.2h") || e.reason.contains("0.3h"), "reason: {}", e.reason);
        assert!(!e.reason.contains("limit"));
    }

    #[test]
    fn exactly_at_limit_is_prioritized() {
        // 0.5h at 1 cps = 1800 cookies
        let e = evaluate(0.0, 1800.0, 1.0);
        assert!(e.should_prioritize);
    }

    #[test]
    fn find_in_store_ignores_unrecognized_items() {
        let items = vec![StoreItem::new("Cursor", 15.0), StoreItem::new("Plain cookies", 1e6)];
        assert!(find_in_store(&items, 1e9, 1e3, 0.5).is_empty());
    }

    #[test]
    fn find_in_store_orders_prioritized_then_price() {
        let items = vec![
            StoreItem::new("Get lucky", 1e12),    // deferred, expensive
            StoreItem::new("Serendipity", 1e9),   // deferred at 1e3 cps
            StoreItem::new("Lucky day", 2e6),     // prioritized
            StoreItem::new("Lucky digit", 1e6),   // prioritized, cheaper
        ];
        let found = find_in_store(&items, 1.5e6, 1e3, 0.5);
        let names: Vec<&str> = found.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Lucky digit", "Lucky day", "Serendipity", "Get lucky"]);
        assert!(found[0].prioritized && found[1].prioritized);
        assert!(!found[2].prioritized && !found[3].prioritized);
        assert!(found[0].affordable);
        assert!(!found[1].affordable);
    }
}
