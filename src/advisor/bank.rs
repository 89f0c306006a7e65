//! Lucky bank: the reserve purchases must not dip below.
//!
//! A golden "Lucky" payout is capped by the bank and by a multiple of
//! production, so keeping a reserve only pays off once production is high
//! enough. Early on the reserve is zero and spending is unrestricted.

use super::phase;
use super::state::LuckyBankInfo;

/// Reserve basis as a multiple of the top candidate's price.
pub const PRICE_MULTIPLIER: f64 = 3.0;
/// Never reserve more than this many seconds of production.
pub const CPS_CAP_SECONDS: f64 = 6000.0;
/// Activation window over phase progress.
pub const ACTIVATION_START: f64 = 0.25;
pub const ACTIVATION_END: f64 = 0.75;

/// `min(price * 3, rate * 6000)`, never negative.
pub fn basis(price: f64, rate: f64) -> f64 {
    let by_price = if price.is_finite() { price * PRICE_MULTIPLIER } else { 0.0 };
    let by_rate = if rate.is_finite() { rate * CPS_CAP_SECONDS } else { 0.0 };
    by_price.min(by_rate).max(0.0)
}

/// Compute the reserve for the top-ranked candidate's price.
pub fn lucky_bank(price: f64, rate: f64) -> LuckyBankInfo {
    let info = phase::detect(rate);
    let basis = basis(price, rate);
    let activation = phase::smoothstep(info.progress, ACTIVATION_START, ACTIVATION_END);
    LuckyBankInfo {
        threshold: (basis * activation).floor(),
        basis,
        progress: info.progress,
        phase_name: info.name,
    }
}

/// Whether buying at `price` leaves at least `threshold` in the bank.
pub fn can_afford(cookies: f64, price: f64, threshold: f64) -> bool {
    cookies - price >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::state::PhaseName;

    #[test]
    fn inactive_early() {
        // 1e3 cps → progress 0.165, below the window
        let info = lucky_bank(1e6, 1e3);
        assert_eq!(info.threshold, 0.0);
        assert!(info.basis > 0.0);
        assert_eq!(info.phase_name, PhaseName::Early);
    }

    #[test]
    fn fully_active_late() {
        // 1e9 cps → progress 1.0
        let info = lucky_bank(1e10, 1e9);
        assert_eq!(info.basis, 3e10);
        assert_eq!(info.threshold, 3e10);
    }

    #[test]
    fn capped_by_rate() {
        let info = lucky_bank(1e15, 1e9);
        assert_eq!(info.basis, 6e12);
        assert_eq!(info.threshold, 6e12);
    }

    #[test]
    fn partial_activation_is_floored() {
        // 1e7 cps → progress 0.495, smoothstep ≈ 0.47
        let info = lucky_bank(1_000_001.0, 1e7);
        assert!(info.threshold > 0.0);
        assert!(info.threshold < info.basis);
        assert_eq!(info.threshold, info.threshold.floor());
    }

    #[test]
    fn zero_rate_reserves_nothing() {
        let info = lucky_bank(500.0, 0.0);
        assert_eq!(info.basis, 0.0);
        assert_eq!(info.threshold, 0.0);
        assert_eq!(info.progress, 0.0);
    }

    #[test]
    fn non_finite_price_reserves_nothing() {
        assert_eq!(basis(f64::NAN, 1e9), 0.0);
        assert_eq!(basis(f64::INFINITY, 1e9), 0.0);
        assert_eq!(basis(-10.0, 1e9), 0.0);
    }

    #[test]
    fn can_afford_boundary() {
        assert!(can_afford(1000.0, 400.0, 600.0));
        assert!(!can_afford(1000.0, 400.1, 600.0));
        assert!(can_afford(100.0, 100.0, 0.0));
        assert!(!can_afford(99.0, 100.0, 0.0));
    }
}
