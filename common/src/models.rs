use serde::{Deserialize, Serialize};

/// Where the dashboard lives unless the server says otherwise.

pub const DEFAULT_DASHBOARD_PATH: &str = "/vendor/dashboard";

/// Public settings the frontend needs to talk to the auth provider. Served by
/// the backend at `/api/config`.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PublicConfig {
    pub auth_url: String,
    pub anon_key: String,
    pub dashboard_path: String,
}

/// An authenticated (or newly registered) account as reported by the provider.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct AuthUser {
    pub id: String,
    pub email: String,

    /// The role recorded in the account metadata at sign up, if any.
    #[serde(default)]
    pub role: Option<String>,

    /// Session token, present after a password sign in.
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
}

/// A row of the profiles table.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
}

/// Account metadata attached to a vendor sign up.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SignUpMetadata {
    pub name: String,
    pub role: String,
    pub business_name: String,
    pub category: String,
    pub phone: String,
    pub location: String,
}
