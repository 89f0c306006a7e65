//! Cookie autopilot: a decision engine for an idle cookie game.
//!
//! Given the player's balance, production rate and externally scored
//! purchase options, the advisor recommends the next purchase and layers
//! phase-aware heuristics on top: a Lucky bank reserve, golden-upgrade
//! priority, wrinkler pop timing, and dragon aura selection.
//!
//! The components under [`advisor`] are pure functions. [`AdvisorSession`]
//! owns the toggle and cooldown state and runs one evaluation pass per
//! call; the host drives it from a [`time::Scheduler`] and acts through a
//! [`GameClient`].

pub mod advisor;
pub mod client;
pub mod config;
pub mod error;
pub mod time;

pub use advisor::{AdvisorAction, AdvisorSession, TickReport};
pub use client::GameClient;
pub use config::AdvisorConfig;
pub use error::{AdvisorError, AdvisorResult};
