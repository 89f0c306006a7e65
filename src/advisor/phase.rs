//! Phase detection: production rate → normalized progress and a phase name.

use super::state::{PhaseInfo, PhaseName};

/// End of the early segment (cookies per second).
pub const T1: f64 = 1e6;
/// End of the mid segment.
pub const T2: f64 = 1e8;
/// Progress saturates here.
pub const T3: f64 = 1e9;

const MID_START: f64 = 0.33;
const LATE_START: f64 = 0.66;
const ENDGAME_START: f64 = 0.9;

/// Map a production rate to progress in [0, 1].
///
/// Three log10-linear segments, each spanning a third of the range:
/// `[0, T1] → [0, 0.33]`, `(T1, T2] → (0.33, 0.66]`, `(T2, T3] → (0.66, 1.0]`.
pub fn progress(rate: f64) -> f64 {
    if !(rate > 0.0) {
        return 0.0;
    }
    if rate >= T3 {
        return 1.0;
    }
    let l = rate.log10();
    let p = if rate <= T1 {
        MID_START * l / T1.log10()
    } else if rate <= T2 {
        MID_START + (LATE_START - MID_START) * (l - T1.log10()) / (T2.log10() - T1.log10())
    } else {
        LATE_START + (1.0 - LATE_START) * (l - T2.log10()) / (T3.log10() - T2.log10())
    };
    p.clamp(0.0, 1.0)
}

/// Bucket progress into a phase name; Endgame starts at 0.9.
pub fn phase_name(progress: f64) -> PhaseName {
    if progress < MID_START {
        PhaseName::Early
    } else if progress < LATE_START {
        PhaseName::Mid
    } else if progress < ENDGAME_START {
        PhaseName::Late
    } else {
        PhaseName::Endgame
    }
}

/// Progress and phase name for a production rate.
pub fn detect(rate: f64) -> PhaseInfo {
    let progress = progress(rate);
    PhaseInfo {
        progress,
        name: phase_name(progress),
    }
}

/// Clamped cubic Hermite ramp from 0 at `edge0` to 1 at `edge1`.
pub fn smoothstep(x: f64, edge0: f64, edge1: f64) -> f64 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
