//! Scenario 6: Bid Operations
//!
//! A transporter lists loads, bids on the first one, then lists bids.

use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::{shape, ScenarioContext, StepError};
use crate::http::HttpRequest;
use crate::models::Role;

/// Bid payload targeting `load_id`
pub fn bid_fixture(load_id: &Value) -> Value {
    let now = Utc::now();
    json!({
        "loadId": load_id,
        "amount": 6500.0,
        "pickupDate": (now + Duration::days(7)).to_rfc3339(),
        "deliveryDate": (now + Duration::days(10)).to_rfc3339(),
        "comments": "Professional transport service with insurance",
    })
}

#[derive(Clone, Debug)]
pub struct BidOperationsScenario {
    pub role: Role,
}

impl Default for BidOperationsScenario {
    fn default() -> Self {
        Self {
            role: Role::Transporter,
        }
    }
}

impl BidOperationsScenario {
    pub async fn run(&self, ctx: &ScenarioContext) -> Result<String, StepError> {
        info!("Running Bid Operations scenario");
        let token = ctx.login(self.role).await?;

        let listing = ctx
            .expect_json(
                HttpRequest::get(ctx.api("/loads")).bearer(&token),
                200,
                "Failed to retrieve loads",
            )
            .await?;
        let first_load = shape::list(&listing, "loads", "load list")?
            .first()
            .ok_or(StepError::NoLoadsAvailable)?;
        let load_id = shape::field(first_load, "id", "load list")?;
        debug!("Bidding on load {}", load_id);

        let created = ctx
            .expect_json(
                HttpRequest::post(ctx.api("/bids"))
                    .bearer(&token)
                    .json(&bid_fixture(load_id)),
                201,
                "Failed to create bid",
            )
            .await?;
        let bid_id = shape::id(&created, "bid.id", "bid creation")?;

        let bids = ctx
            .expect_json(
                HttpRequest::get(ctx.api("/bids")).bearer(&token),
                200,
                "Failed to retrieve bids",
            )
            .await?;
        let count = shape::list(&bids, "bids", "bid list")?.len();

        Ok(format!("Created bid {bid_id}, Retrieved {count} bids"))
    }
}
