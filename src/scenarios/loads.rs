//! Scenario 5: Load Operations
//!
//! A client posts a load, then lists loads.

use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::{shape, ScenarioContext, StepError};
use crate::http::HttpRequest;
use crate::models::Role;

/// Load posting used as the create payload
pub fn load_fixture() -> Value {
    let now = Utc::now();
    json!({
        "title": "Test Load - Electronics",
        "description": "Transport electronics from Johannesburg to Cape Town",
        "cargoType": "Electronics",
        "weight": 500.0,
        "pickupLocation": "Johannesburg, South Africa",
        "deliveryLocation": "Cape Town, South Africa",
        "pickupDate": (now + Duration::days(7)).to_rfc3339(),
        "deliveryDate": (now + Duration::days(10)).to_rfc3339(),
        "budgetMin": 5000.0,
        "budgetMax": 8000.0,
    })
}

#[derive(Clone, Debug)]
pub struct LoadOperationsScenario {
    pub role: Role,
}

impl Default for LoadOperationsScenario {
    fn default() -> Self {
        Self { role: Role::Client }
    }
}

impl LoadOperationsScenario {
    pub async fn run(&self, ctx: &ScenarioContext) -> Result<String, StepError> {
        info!("Running Load Operations scenario");
        let token = ctx.login(self.role).await?;

        let created = ctx
            .expect_json(
                HttpRequest::post(ctx.api("/loads"))
                    .bearer(&token)
                    .json(&load_fixture()),
                201,
                "Failed to create load",
            )
            .await?;
        let load_id = shape::id(&created, "load.id", "load creation")?;
        debug!("Created load {}", load_id);

        let listing = ctx
            .expect_json(
                HttpRequest::get(ctx.api("/loads")).bearer(&token),
                200,
                "Failed to retrieve loads",
            )
            .await?;
        let count = shape::list(&listing, "loads", "load list")?.len();

        Ok(format!("Created load {load_id}, Retrieved {count} loads"))
    }
}
