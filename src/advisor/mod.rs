//! Per-tick advisor session over the pure components.

pub mod bank;
pub mod candidates;
pub mod catalog;
pub mod dragon;
pub mod golden;
pub mod phase;
pub mod state;
mod simulator;
pub mod wrinkler;

use serde::{Deserialize, Serialize};

use crate::client::{self, GameClient};
use crate::config::{AdvisorConfig, Toggles};
use crate::error::AdvisorResult;

use state::{
    DragonConfig, DragonContext, GameSnapshot, GoldenUpgradeCandidate, LuckyBankInfo, PhaseInfo,
    PopDecision, PurchaseRequest, SwitchDecision,
};

/// What the session did with the game this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AdvisorAction {
    Idle,
    Bought { name: String },
    BoughtGolden { name: String },
    /// Holding cookies for a prioritized golden upgrade.
    WaitingForGolden { name: String },
    /// Top candidate not affordable yet (bank-aware).
    Saving { name: String },
    PoppedWrinklers,
    /// The client refused an action.
    Rejected { name: String },
}

/// Everything decided in one tick, for the panel and for logs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub phase: Option<PhaseInfo>,
    pub bank: Option<LuckyBankInfo>,
    pub top_candidate: Option<String>,
    pub golden: Vec<GoldenUpgradeCandidate>,
    pub pop: Option<PopDecision>,
    pub recommended_auras: Option<DragonConfig>,
    pub aura_switch: Option<SwitchDecision>,
    pub action: AdvisorAction,
}

impl TickReport {
    pub fn idle() -> Self {
        Self {
            phase: None,
            bank: None,
            top_candidate: None,
            golden: Vec::new(),
            pop: None,
            recommended_auras: None,
            aura_switch: None,
            action: AdvisorAction::Idle,
        }
    }

    pub fn to_json(&self) -> AdvisorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Toggle and cooldown state that survives between ticks.
///
/// The only thing written across ticks is `last_aura_switch_ms`, and only
/// after the client has accepted a switch.
pub struct AdvisorSession {
    pub config: AdvisorConfig,
    pub toggles: Toggles,
    pub running: bool,
    pub last_aura_switch_ms: Option<f64>,
}

impl AdvisorSession {
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            toggles: config.toggles,
            config,
            running: true,
            last_aura_switch_ms: None,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Run one evaluation pass against `snapshot` and act through `client`.
    pub fn tick<C: GameClient + ?Sized>(
        &mut self,
        snapshot: &GameSnapshot,
        client: &mut C,
        now_ms: f64,
    ) -> TickReport {
        if !self.running {
            return TickReport::idle();
        }
        let mut report = TickReport::idle();

        // Bursts inflate cps for a few seconds; every rate-based rule below
        // uses the unbuffed rate so decisions don't flap.
        let phase = phase::detect(snapshot.unbuffed_cps);
        report.phase = Some(phase);

        let ranked = candidates::rank(&snapshot.candidates);
        let top = ranked.first();
        report.top_candidate = top.map(|c| c.name.clone());
        let bank = bank::lucky_bank(top.map_or(0.0, |c| c.price), snapshot.unbuffed_cps);
        report.bank = Some(bank);
        log::debug!(
            "advisor: phase={} progress={:.3} bank={} top={:?}",
            phase.name.name(),
            phase.progress,
            bank.threshold,
            report.top_candidate
        );

        let mut holding = false;
        if self.toggles.auto_golden {
            report.golden = golden::find_in_store(
                &snapshot.store,
                snapshot.cookies,
                snapshot.unbuffed_cps,
                phase.progress,
            );
            if let Some(g) = report.golden.iter().find(|g| g.prioritized) {
                let request = PurchaseRequest {
                    name: g.name.clone(),
                    kind: Some(state::CandidateKind::Upgrade),
                };
                if bank::can_afford(snapshot.cookies, g.price, bank.threshold) {
                    report.action = if client::execute(client, &request) {
                        log::info!("advisor: bought golden upgrade {}", g.name);
                        AdvisorAction::BoughtGolden { name: g.name.clone() }
                    } else {
                        log::warn!("advisor: client rejected golden upgrade {}", g.name);
                        AdvisorAction::Rejected { name: g.name.clone() }
                    };
                } else {
                    log::debug!("advisor: waiting for {} ({})", g.name, g.defer_reason);
                    report.action = AdvisorAction::WaitingForGolden { name: g.name.clone() };
                }
                holding = true;
            }
        }

        if self.toggles.auto_buy && !holding {
            if let Some(top) = top {
                report.action = self.buy_or_harvest(snapshot, client, top, &bank, &mut report.pop);
            }
        }

        if self.toggles.auto_dragon {
            if let Some(current) = snapshot.auras {
                let recommended = dragon::recommend_with(
                    &DragonContext {
                        progress: phase.progress,
                        secondary_resource_count: snapshot.kitten_upgrades,
                        total_buildings: snapshot.total_buildings,
                        has_active_burst: snapshot.has_active_burst,
                    },
                    &self.config.auras,
                );
                let decision = dragon::should_switch(
                    &current,
                    &recommended,
                    self.last_aura_switch_ms,
                    now_ms,
                    snapshot.has_active_burst,
                    snapshot.top_building_count,
                );
                if decision.should_switch {
                    if client.set_auras(&recommended) {
                        log::info!(
                            "advisor: auras {} + {} ({})",
                            recommended.primary.name(),
                            recommended.secondary.name(),
                            decision.reason
                        );
                        self.last_aura_switch_ms = Some(now_ms);
                    } else {
                        log::warn!("advisor: client rejected aura switch");
                    }
                }
                report.recommended_auras = Some(recommended);
                report.aura_switch = Some(decision);
            }
        }

        report
    }

    fn buy_or_harvest<C: GameClient + ?Sized>(
        &self,
        snapshot: &GameSnapshot,
        client: &mut C,
        top: &state::Candidate,
        bank: &LuckyBankInfo,
        pop: &mut Option<PopDecision>,
    ) -> AdvisorAction {
        if bank::can_afford(snapshot.cookies, top.price, bank.threshold) {
            return if client::execute(client, &PurchaseRequest::from(top)) {
                log::info!("advisor: bought {} for {}", top.name, top.price);
                AdvisorAction::Bought { name: top.name.clone() }
            } else {
                log::warn!("advisor: client rejected {}", top.name);
                AdvisorAction::Rejected { name: top.name.clone() }
            };
        }

        if self.toggles.auto_wrinklers && !snapshot.wrinklers.is_empty() {
            let multiplier = wrinkler::multiplier(
                snapshot.has_wrinkler_upgrade_a,
                snapshot.has_wrinkler_upgrade_b,
            );
            let reward = wrinkler::reward(&snapshot.wrinklers, multiplier);
            let decision = wrinkler::should_pop(
                reward,
                top.price,
                snapshot.cookies,
                snapshot.unbuffed_cps,
                wrinkler::poppable_count(&snapshot.wrinklers),
            );
            let popped = decision.should_pop && client.pop_wrinklers();
            if decision.should_pop && !popped {
                log::warn!("advisor: client rejected wrinkler pop");
            }
            *pop = Some(decision);
            if popped {
                log::info!("advisor: popped wrinklers for {}", top.name);
                return AdvisorAction::PoppedWrinklers;
            }
        }

        AdvisorAction::Saving { name: top.name.clone() }
    }
}
