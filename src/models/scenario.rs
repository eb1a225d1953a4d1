//! Scenario catalogue
//!
//! Every end-to-end check the harness knows about, in run order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Role;

/// All scenarios exercised against the marketplace API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    ServerHealth,

    // Authentication (2-4)
    AdminAuthentication,
    ClientAuthentication,
    TransporterAuthentication,

    // Marketplace operations (5-9)
    LoadOperations,
    BidOperations,
    AdminOperations,
    DocumentOperations,
    MessageOperations,
}

impl Scenario {
    /// Get scenario number (1-9)
    pub fn number(&self) -> u8 {
        match self {
            Scenario::ServerHealth => 1,
            Scenario::AdminAuthentication => 2,
            Scenario::ClientAuthentication => 3,
            Scenario::TransporterAuthentication => 4,
            Scenario::LoadOperations => 5,
            Scenario::BidOperations => 6,
            Scenario::AdminOperations => 7,
            Scenario::DocumentOperations => 8,
            Scenario::MessageOperations => 9,
        }
    }

    /// Name used as the outcome key in reports
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::ServerHealth => "Server Health",
            Scenario::AdminAuthentication => "Admin Authentication",
            Scenario::ClientAuthentication => "Client Authentication",
            Scenario::TransporterAuthentication => "Transporter Authentication",
            Scenario::LoadOperations => "Load Operations",
            Scenario::BidOperations => "Bid Operations",
            Scenario::AdminOperations => "Admin Operations",
            Scenario::DocumentOperations => "Document Operations",
            Scenario::MessageOperations => "Message Operations",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Scenario::ServerHealth => "Health",
            Scenario::AdminAuthentication
            | Scenario::ClientAuthentication
            | Scenario::TransporterAuthentication => "Authentication",
            _ => "Operations",
        }
    }

    /// Role whose credentials the scenario logs in with, if any
    pub fn role(&self) -> Option<Role> {
        match self {
            Scenario::ServerHealth => None,
            Scenario::AdminAuthentication | Scenario::AdminOperations => Some(Role::Admin),
            Scenario::ClientAuthentication
            | Scenario::LoadOperations
            | Scenario::MessageOperations => Some(Role::Client),
            Scenario::TransporterAuthentication
            | Scenario::BidOperations
            | Scenario::DocumentOperations => Some(Role::Transporter),
        }
    }

    /// All scenarios in run order
    pub fn all() -> Vec<Scenario> {
        vec![
            Scenario::ServerHealth,
            Scenario::AdminAuthentication,
            Scenario::ClientAuthentication,
            Scenario::TransporterAuthentication,
            Scenario::LoadOperations,
            Scenario::BidOperations,
            Scenario::AdminOperations,
            Scenario::DocumentOperations,
            Scenario::MessageOperations,
        ]
    }

    /// Parse from scenario number
    pub fn from_number(n: u8) -> Option<Scenario> {
        Scenario::all().into_iter().find(|s| s.number() == n)
    }

    /// Scenarios left after applying a single pick and a skip list.
    ///
    /// Returns `None` if `only` is not a known scenario number. Unknown
    /// numbers in `skip` are ignored.
    pub fn select(only: Option<u8>, skip: &[u8]) -> Option<Vec<Scenario>> {
        let candidates = match only {
            Some(n) => vec![Scenario::from_number(n)?],
            None => Scenario::all(),
        };
        Some(
            candidates
                .into_iter()
                .filter(|s| !skip.contains(&s.number()))
                .collect(),
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scenario {}: {}", self.number(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_numbers() {
        assert_eq!(Scenario::ServerHealth.number(), 1);
        assert_eq!(Scenario::MessageOperations.number(), 9);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Scenario::from_number(6), Some(Scenario::BidOperations));
        assert_eq!(Scenario::from_number(0), None);
        assert_eq!(Scenario::from_number(10), None);
    }

    #[test]
    fn test_all_in_number_order() {
        let numbers: Vec<u8> = Scenario::all().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_select() {
        assert_eq!(Scenario::select(None, &[]), Some(Scenario::all()));

        let picked = Scenario::select(None, &[5, 6, 42]).unwrap();
        assert_eq!(picked.len(), 7);
        assert!(!picked.contains(&Scenario::LoadOperations));
        assert!(!picked.contains(&Scenario::BidOperations));

        assert_eq!(
            Scenario::select(Some(8), &[]),
            Some(vec![Scenario::DocumentOperations])
        );
        assert_eq!(Scenario::select(Some(8), &[8]), Some(vec![]));
        assert_eq!(Scenario::select(Some(12), &[]), None);
    }

    #[test]
    fn test_roles() {
        assert_eq!(Scenario::ServerHealth.role(), None);
        assert_eq!(Scenario::LoadOperations.role(), Some(Role::Client));
        assert_eq!(Scenario::BidOperations.role(), Some(Role::Transporter));
        assert_eq!(Scenario::AdminOperations.role(), Some(Role::Admin));
    }
}
