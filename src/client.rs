//! The game-side collaborator the advisor acts through.
//!
//! Implementations wrap whatever hosts the game (a page script bridge, a
//! test double). Every action returns `true` only if the game accepted it.

use crate::advisor::state::{CandidateKind, DragonConfig, PurchaseRequest};

pub trait GameClient {
    /// Buy one unit of the named building.
    fn buy_building(&mut self, name: &str) -> bool;

    /// Buy the named upgrade.
    fn buy_upgrade(&mut self, name: &str) -> bool;

    /// Pop every active, non-shiny wrinkler.
    fn pop_wrinklers(&mut self) -> bool;

    /// Set both aura slots.
    fn set_auras(&mut self, config: &DragonConfig) -> bool;
}

/// Dispatch a purchase request. A request without a kind fails without
/// touching the client.
pub fn execute<C: GameClient + ?Sized>(client: &mut C, request: &PurchaseRequest) -> bool {
    match request.kind {
        Some(CandidateKind::Building) => client.buy_building(&request.name),
        Some(CandidateKind::Upgrade) => client.buy_upgrade(&request.name),
        None => false,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingClient;
    use super::*;

    #[test]
    fn execute_building() {
        let mut client = RecordingClient::accepting();
        let req = PurchaseRequest {
            name: "Farm".into(),
            kind: Some(CandidateKind::Building),
        };
        assert!(execute(&mut client, &req));
        assert_eq!(client.buildings, vec!["Farm"]);
    }

    #[test]
    fn execute_upgrade() {
        let mut client = RecordingClient::accepting();
        let req = PurchaseRequest {
            name: "Lucky day".into(),
            kind: Some(CandidateKind::Upgrade),
        };
        assert!(execute(&mut client, &req));
        assert_eq!(client.upgrades, vec!["Lucky day"]);
    }

    #[test]
    fn execute_without_kind_fails() {
        let mut client = RecordingClient::accepting();
        let req = PurchaseRequest {
            name: "Mystery".into(),
            kind: None,
        };
        assert!(!execute(&mut client, &req));
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn execute_reports_rejection() {
        let mut client = RecordingClient::default();
        let req = PurchaseRequest {
            name: "Farm".into(),
            kind: Some(CandidateKind::Building),
        };
        assert!(!execute(&mut client, &req));
        assert_eq!(client.buildings.len(), 1);
    }
}
