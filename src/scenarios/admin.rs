//! Scenario 7: Admin Operations
//!
//! An admin lists users and re-activates the first one. Only the listing
//! decides the outcome; a rejected status update is reported but still
//! passes.

use serde_json::json;
use tracing::{info, warn};

use super::{shape, ScenarioContext, StepError};
use crate::http::HttpRequest;
use crate::models::Role;

#[derive(Clone, Debug)]
pub struct AdminOperationsScenario {
    pub role: Role,
    /// Status written back to the first user
    pub status: String,
}

impl Default for AdminOperationsScenario {
    fn default() -> Self {
        Self {
            role: Role::Admin,
            status: "ACTIVE".to_string(),
        }
    }
}

impl AdminOperationsScenario {
    pub async fn run(&self, ctx: &ScenarioContext) -> Result<String, StepError> {
        info!("Running Admin Operations scenario");
        let token = ctx.login(self.role).await?;

        let listing = ctx
            .expect_json(
                HttpRequest::get(ctx.api("/users")).bearer(&token),
                200,
                "Failed to retrieve users",
            )
            .await?;
        let users = shape::list(&listing, "users", "user list")?;

        let Some(first_user) = users.first() else {
            return Ok("Retrieved 0 users".to_string());
        };
        let user_id = shape::id(first_user, "id", "user list")?;

        let update = ctx
            .client
            .send(
                HttpRequest::put(ctx.api(&format!("/users/{user_id}/status")))
                    .bearer(&token)
                    .json(&json!({"status": self.status})),
            )
            .await?;

        if update.status_code == 200 {
            Ok(format!("Retrieved {} users, Updated user status", users.len()))
        } else {
            warn!(
                "Status update for user {} returned {}",
                user_id, update.status_code
            );
            Ok(format!(
                "Retrieved {} users, Status update failed: {}",
                users.len(),
                update.status_code
            ))
        }
    }
}
