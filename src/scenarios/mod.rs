//! Marketplace API scenarios
//!
//! Each scenario performs a short fixed chain of HTTP calls and returns
//! either a success message or the `StepError` that stopped it.
//!
//! ## Scenarios
//!
//! ### Health (1)
//! - Server Health
//!
//! ### Authentication (2-4)
//! - Admin, Client and Transporter login + profile
//!
//! ### Operations (5-9)
//! - Load Operations
//! - Bid Operations
//! - Admin Operations
//! - Document Operations
//! - Message Operations

mod admin;
mod auth;
mod bids;
pub(crate) mod context;
mod error;
mod health;
mod listing;
mod loads;
pub mod shape;

pub use admin::AdminOperationsScenario;
pub use auth::RoleAuthScenario;
pub use bids::BidOperationsScenario;
pub use context::ScenarioContext;
pub use error::StepError;
pub use health::ServerHealthScenario;
pub use listing::ListingScenario;
pub use loads::LoadOperationsScenario;

use crate::models::{Role, Scenario};

/// Run a single scenario
pub async fn run_scenario(scenario: Scenario, ctx: &ScenarioContext) -> Result<String, StepError> {
    match scenario {
        Scenario::ServerHealth => ServerHealthScenario.run(ctx).await,
        Scenario::AdminAuthentication => RoleAuthScenario::new(Role::Admin).run(ctx).await,
        Scenario::ClientAuthentication => RoleAuthScenario::new(Role::Client).run(ctx).await,
        Scenario::TransporterAuthentication => {
            RoleAuthScenario::new(Role::Transporter).run(ctx).await
        }
        Scenario::LoadOperations => LoadOperationsScenario::default().run(ctx).await,
        Scenario::BidOperations => BidOperationsScenario::default().run(ctx).await,
        Scenario::AdminOperations => AdminOperationsScenario::default().run(ctx).await,
        Scenario::DocumentOperations => ListingScenario::documents().run(ctx).await,
        Scenario::MessageOperations => ListingScenario::messages().run(ctx).await,
    }
}
