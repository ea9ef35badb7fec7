use common::models::{PublicConfig, DEFAULT_DASHBOARD_PATH};
use dotenvy::dotenv;
use std::env;

/// Read the auth provider settings from the environment (and `.env`, if there
/// is one). Returns `None` when the provider url or key is missing.

pub fn load_public_config() -> Option<PublicConfig> {
    dotenv().ok();
    public_config_from(|key| env::var(key).ok())
}

pub fn public_config_from(lookup: impl Fn(&str) -> Option<String>) -> Option<PublicConfig> {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let auth_url = non_empty("SUPABASE_URL")?;
    let anon_key = non_empty("SUPABASE_ANON_KEY")?;
    let dashboard_path = non_empty("DASHBOARD_PATH").unwrap_or_else(|| DEFAULT_DASHBOARD_PATH.to_owned());

    Some(PublicConfig {
        auth_url: auth_url.trim().trim_end_matches('/').to_owned(),
        anon_key: anon_key.trim().to_owned(),
        dashboard_path,
    })
}
