//! User roles and their login profiles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace user role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
    Transporter,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Client => "Client",
            Role::Transporter => "Transporter",
        }
    }

    /// Value of `userType` the backend reports for this role
    pub fn user_type(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Client => "CLIENT",
            Role::Transporter => "TRANSPORTER",
        }
    }

    #[cfg(test)]
    pub fn all() -> Vec<Role> {
        vec![Role::Admin, Role::Client, Role::Transporter]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Login credentials for one role
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub email: String,
    pub password: String,
}

impl RoleProfile {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Static credential table, one profile per role
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfiles {
    pub admin: RoleProfile,
    pub client: RoleProfile,
    pub transporter: RoleProfile,
}

impl RoleProfiles {
    pub fn get(&self, role: Role) -> &RoleProfile {
        match role {
            Role::Admin => &self.admin,
            Role::Client => &self.client,
            Role::Transporter => &self.transporter,
        }
    }
}

impl Default for RoleProfiles {
    fn default() -> Self {
        Self {
            admin: RoleProfile::new("mrtiger@fleetxchange.africa", "FleetX2025!"),
            client: RoleProfile::new("client1@example.com", "Client123!"),
            transporter: RoleProfile::new("transporter1@example.com", "Transport123!"),
        }
    }
}
