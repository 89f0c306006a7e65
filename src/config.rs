//! Session configuration, loadable from JSON.
//!
//! Missing fields fall back to defaults, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::advisor::dragon::AuraTable;
use crate::advisor::state::DragonAura;
use crate::error::{AdvisorError, AdvisorResult};

/// Which automations run on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggles {
    pub auto_buy: bool,
    pub auto_golden: bool,
    pub auto_wrinklers: bool,
    pub auto_dragon: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            auto_buy: true,
            auto_golden: true,
            auto_wrinklers: true,
            auto_dragon: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub toggles: Toggles,
    pub tick_interval_ms: u64,
    pub refresh_interval_ms: u64,
    pub max_catch_up_ms: u64,
    pub auras: AuraTable,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            toggles: Toggles::default(),
            tick_interval_ms: 200,
            refresh_interval_ms: 2000,
            max_catch_up_ms: 1000,
            auras: AuraTable::default(),
        }
    }
}

impl AdvisorConfig {
    pub fn from_json(json: &str) -> AdvisorResult<Self> {
        let config: AdvisorConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!(
            "config loaded: tick={}ms refresh={}ms",
            config.tick_interval_ms,
            config.refresh_interval_ms
        );
        Ok(config)
    }

    pub fn to_json(&self) -> AdvisorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> AdvisorResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "must be greater than 0"));
        }
        if self.refresh_interval_ms < self.tick_interval_ms {
            return Err(invalid(
                "refresh_interval_ms",
                &format!("must be at least tick_interval_ms ({})", self.tick_interval_ms),
            ));
        }
        if self.max_catch_up_ms < self.tick_interval_ms {
            return Err(invalid(
                "max_catch_up_ms",
                &format!("must be at least tick_interval_ms ({})", self.tick_interval_ms),
            ));
        }
        for (name, pair) in self.auras.pairs() {
            if pair.primary == pair.secondary && pair.primary != DragonAura::NoAura {
                return Err(invalid(
                    &format!("auras.{name}"),
                    &format!("both slots are {}", pair.primary.name()),
                ));
            }
        }
        Ok(())
    }
}

pub(crate) fn invalid(field: &str, reason: &str) -> AdvisorError {
    AdvisorError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
