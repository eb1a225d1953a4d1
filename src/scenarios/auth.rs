//! Scenarios 2-4: per-role authentication
//!
//! One template covers all three roles: log in, then read the profile with
//! the returned token.

use tracing::{info, warn};

use super::{shape, ScenarioContext, StepError};
use crate::http::HttpRequest;
use crate::models::Role;

#[derive(Clone, Debug)]
pub struct RoleAuthScenario {
    pub role: Role,
}

impl RoleAuthScenario {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub async fn run(&self, ctx: &ScenarioContext) -> Result<String, StepError> {
        info!("Running {} Authentication scenario", self.role);

        let token = ctx
            .auth
            .token(self.role)
            .await
            .ok_or(StepError::LoginFailed)?;

        let profile = ctx
            .expect_json(
                HttpRequest::get(ctx.api("/auth/profile")).bearer(&token),
                200,
                "Profile access failed",
            )
            .await?;

        let email = shape::text(shape::field(&profile, "user.email", "profile")?);
        let user_type = shape::text(shape::field(&profile, "user.userType", "profile")?);

        if user_type != self.role.user_type() {
            warn!(
                "{} login reported userType {}, expected {}",
                self.role,
                user_type,
                self.role.user_type()
            );
        }

        Ok(format!("User: {email}, Type: {user_type}"))
    }
}
