use crate::util::{read_json, send_json};
use common::auth::{AuthProvider, ProviderError};
use common::models::{AuthUser, Profile, PublicConfig, SignUpMetadata};
use gloo_net::http::{Request, RequestBuilder, Response};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

/// Role given to profiles created for accounts that signed up without one.

const DEFAULT_ROLE: &str = "couple";

/// The hosted auth service, spoken to over its REST api.

pub struct SupabaseClient {
    url: String,
    anon_key: String,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a SignUpMetadata,
}

#[derive(Deserialize, Default)]
struct UserMetadata {
    #[serde(default)]
    role: Option<String>,
}

#[derive(Deserialize)]
struct UserBody {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Deserialize)]
struct SessionBody {
    access_token: String,
    user: UserBody,
}

/// Sign up answers with a session when email confirmation is off, and with
/// the bare user when it is on.

#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    Session(SessionBody),
    User(UserBody),
}

#[derive(Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        [self.error_description, self.msg, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

#[derive(Serialize)]
struct NewProfile<'a> {
    id: &'a str,
    email: &'a str,
    role: &'a str,
}

fn to_user(body: UserBody, access_token: Option<String>) -> AuthUser {
    AuthUser {
        id: body.id,
        email: body.email.unwrap_or_default(),
        role: body.user_metadata.role,
        access_token,
    }
}

fn unexpected(err: anyhow::Error) -> ProviderError {
    error!("auth provider request failed: {:#}", err);
    ProviderError::Unexpected(Some(err.to_string()))
}

/// Turn a non-2xx response into the provider's own explanation, if it gave one.

async fn rejection(resp: Response) -> ProviderError {
    let status = resp.status();
    let message = match read_json::<ErrorBody>(resp).await {
        Ok(body) => body.into_message(),
        Err(_) => None,
    };
    match message {
        Some(message) => ProviderError::Rejected(message),
        None => {
            warn!("auth provider returned {} without a message", status);
            ProviderError::Unexpected(None)
        }
    }
}

impl SupabaseClient {
    pub fn new(config: &PublicConfig) -> Self {
        SupabaseClient {
            url: config.auth_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn authorized(&self, builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        let bearer = format!("Bearer {}", token.unwrap_or(&self.anon_key));
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &bearer)
    }

    fn profiles_uri(&self) -> String {
        format!("{}/rest/v1/profiles", self.url)
    }

    async fn fetch_profile(&self, user: &AuthUser) -> Result<Option<Profile>, ProviderError> {
        let uri = format!("{}?id=eq.{}&select=*", self.profiles_uri(), user.id);
        let req = self.authorized(Request::get(&uri), user.access_token.as_deref());
        let resp = req.send().await.map_err(|err| unexpected(err.into()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let rows: Vec<Profile> = read_json(resp).await.map_err(unexpected)?;
        Ok(rows.into_iter().next())
    }

    async fn create_profile(&self, user: &AuthUser) -> Result<Option<Profile>, ProviderError> {
        let body = NewProfile {
            id: &user.id,
            email: &user.email,
            role: user.role.as_deref().unwrap_or(DEFAULT_ROLE),
        };
        let builder = self
            .authorized(Request::post(&self.profiles_uri()), user.access_token.as_deref())
            .header("Prefer", "return=representation");
        let resp = send_json(builder, &body).await.map_err(unexpected)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let rows: Vec<Profile> = read_json(resp).await.map_err(unexpected)?;
        Ok(rows.into_iter().next())
    }
}

impl AuthProvider for SupabaseClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser, ProviderError> {
        let uri = format!("{}/auth/v1/token?grant_type=password", self.url);
        let builder = Request::post(&uri).header("apikey", &self.anon_key);
        let resp = send_json(builder, &Credentials { email, password })
            .await
            .map_err(unexpected)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let session: SessionBody = read_json(resp).await.map_err(unexpected)?;
        Ok(to_user(session.user, Some(session.access_token)))
    }

    async fn sign_up(&self, email: &str, password: &str, metadata: &SignUpMetadata) -> Result<AuthUser, ProviderError> {
        let uri = format!("{}/auth/v1/signup", self.url);
        let builder = Request::post(&uri).header("apikey", &self.anon_key);
        let resp = send_json(builder, &SignUpRequest { email, password, data: metadata })
            .await
            .map_err(unexpected)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let user = match read_json::<SignUpBody>(resp).await.map_err(unexpected)? {
            SignUpBody::Session(session) => to_user(session.user, Some(session.access_token)),
            SignUpBody::User(user) => to_user(user, None),
        };
        info!("registered {} as {}", user.id, metadata.role);
        Ok(user)
    }

    async fn ensure_user_profile(&self, user: &AuthUser) -> Result<Option<Profile>, ProviderError> {
        if let Some(profile) = self.fetch_profile(user).await? {
            return Ok(Some(profile));
        }
        info!("no profile for {}, creating one", user.id);
        match self.create_profile(user).await {
            Ok(profile) => Ok(profile),

            // someone else created it between our fetch and insert
            Err(ProviderError::Rejected(message)) => {
                warn!("profile insert for {} refused: {}", user.id, message);
                self.fetch_profile(user).await
            }
            Err(err) => Err(err),
        }
    }
}
