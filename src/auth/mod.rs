//! Pluggable authentication strategies.
//!
//! Every strategy implements [`AuthProvider`]: a request decorator that may
//! mutate headers, query parameters, or cookies, and may perform network I/O
//! of its own (OAuth2 token refresh). Providers are registered on the client
//! under a logical scheme name (e.g. `"api_key"`) and looked up by the
//! generated endpoint methods.
//!
//! Credential fields use interior mutability so a shared provider can have
//! its secret replaced via [`AuthProvider::set_value`] — the mechanism OAuth2
//! uses to hand a freshly fetched access token to its inner request mutator.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use serde_json::Value;
use strum::{Display, EnumString};
use tokio::sync::Mutex;

use crate::error::AuthError;
use crate::params::form_urlencoded_body;

/// A request decorator that attaches credentials to outgoing requests.
#[async_trait]
pub trait AuthProvider: Send + Sync + fmt::Debug {
    /// Decorates the request with this provider's credentials.
    ///
    /// May perform network I/O (OAuth2 refreshes its token here).
    ///
    /// ## Errors
    ///
    /// Any token-refresh failure; simple header/query/cookie strategies do
    /// not fail.
    async fn apply(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError>;

    /// Replaces the provider's credential material.
    ///
    /// `None` leaves the current credential in place.
    ///
    /// ## Errors
    ///
    /// [`AuthError::InvalidMutator`] when called on an [`OAuth2`] provider,
    /// which is a credential source rather than a credential target.
    fn set_value(&self, value: Option<&str>) -> Result<(), AuthError>;
}

/// HTTP basic authentication.
#[derive(Debug)]
pub struct AuthBasic {
    username: RwLock<String>,
    password: String,
}

impl AuthBasic {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: RwLock::new(username.into()),
            password: password.into(),
        }
    }
}

#[async_trait]
impl AuthProvider for AuthBasic {
    async fn apply(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let username = self
            .username
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Ok(request.basic_auth(username, Some(&self.password)))
    }

    fn set_value(&self, value: Option<&str>) -> Result<(), AuthError> {
        if let Some(value) = value {
            *self.username.write().unwrap_or_else(PoisonError::into_inner) = value.to_string();
        }
        Ok(())
    }
}

/// Bearer-token authentication (`Authorization: Bearer <token>`).
#[derive(Debug)]
pub struct AuthBearer {
    token: RwLock<String>,
}

impl AuthBearer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(token.into()),
        }
    }
}

#[async_trait]
impl AuthProvider for AuthBearer {
    async fn apply(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let token = self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Ok(request.bearer_auth(token))
    }

    fn set_value(&self, value: Option<&str>) -> Result<(), AuthError> {
        if let Some(value) = value {
            *self.token.write().unwrap_or_else(PoisonError::into_inner) = value.to_string();
        }
        Ok(())
    }
}

/// Where an [`AuthKey`] credential is placed on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum KeyLocation {
    Header,
    Query,
    Cookie,
}

/// A named API key placed in a header, query parameter, or cookie.
#[derive(Debug)]
pub struct AuthKey {
    location: Option<KeyLocation>,
    name: String,
    value: RwLock<String>,
}

impl AuthKey {
    /// An API key sent as a request header.
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_parsed_location(Some(KeyLocation::Header), name, value)
    }

    /// An API key appended to the query string.
    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_parsed_location(Some(KeyLocation::Query), name, value)
    }

    /// An API key sent as a cookie.
    pub fn cookie(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_parsed_location(Some(KeyLocation::Cookie), name, value)
    }

    /// Builds a key from a location name as found in an OpenAPI document.
    ///
    /// An unrecognized location is a non-fatal misconfiguration: the provider
    /// is still constructed, but applying it logs a diagnostic and attaches
    /// no auth (the scheme may well be optional).
    pub fn with_location(
        location: &str,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::with_parsed_location(location.parse().ok(), name, value)
    }

    fn with_parsed_location(
        location: Option<KeyLocation>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            name: name.into(),
            value: RwLock::new(value.into()),
        }
    }
}

#[async_trait]
impl AuthProvider for AuthKey {
    async fn apply(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let value = self
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match self.location {
            Some(KeyLocation::Header) => Ok(request.header(&self.name, value)),
            Some(KeyLocation::Query) => Ok(request.query(&[(self.name.as_str(), value.as_str())])),
            Some(KeyLocation::Cookie) => {
                Ok(request.header(COOKIE, format!("{}={}", self.name, value)))
            }
            None => {
                tracing::warn!(
                    key = %self.name,
                    "auth key has an unrecognized location, no auth applied"
                );
                Ok(request)
            }
        }
    }

    fn set_value(&self, value: Option<&str>) -> Result<(), AuthError> {
        if let Some(value) = value {
            *self.value.write().unwrap_or_else(PoisonError::into_inner) = value.to_string();
        }
        Ok(())
    }
}

/// Where OAuth2 client credentials are placed on the token request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CredentialsLocation {
    /// `client_id` / `client_secret` travel in the token-request body.
    RequestBody,
    /// `client_id` / `client_secret` travel as HTTP basic auth.
    BasicAuthorizationHeader,
}

/// How the token-request body is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenBodyContent {
    /// `application/x-www-form-urlencoded` grant fields.
    Form,
    /// `application/json` grant fields.
    Json,
}

/// Provider-level OAuth2 configuration, shared by both grant types.
#[derive(Debug, Clone)]
pub struct OAuth2Config {
    /// Transport used for token-refresh calls. Pass the same client the SDK
    /// uses for API calls; there is no implicit global transport.
    pub http: reqwest::Client,
    /// Base URL a relative token URL is resolved against.
    pub base_url: String,
    /// Token endpoint, absolute or `/`-relative to `base_url`.
    pub token_url: String,
    /// JSON pointer to the access token in the refresh response.
    pub access_token_pointer: String,
    /// JSON pointer to the expiry duration (seconds) in the refresh response.
    pub expires_in_pointer: String,
    pub credentials_location: CredentialsLocation,
    pub body_content: TokenBodyContent,
    /// The provider that receives the fetched token, typically [`AuthBearer`].
    pub request_mutator: Arc<dyn AuthProvider>,
}

/// Caller-supplied fields for the `password` grant.
#[derive(Debug, Clone, Default)]
pub struct OAuth2PasswordForm {
    pub username: String,
    pub password: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Overrides the default `"password"` grant type.
    pub grant_type: Option<String>,
    pub scope: Option<Vec<String>>,
    /// Overrides the token URL from [`OAuth2Config`].
    pub token_url: Option<String>,
}

/// Caller-supplied fields for the `client_credentials` grant.
#[derive(Debug, Clone, Default)]
pub struct OAuth2ClientCredentialsForm {
    pub client_id: String,
    pub client_secret: String,
    /// Overrides the default `"client_credentials"` grant type.
    pub grant_type: Option<String>,
    pub scope: Option<Vec<String>>,
    /// Overrides the token URL from [`OAuth2Config`].
    pub token_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct TokenCache {
    access_token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

/// OAuth2 provider with lazy token refresh.
///
/// Not a request mutator itself: it fetches and caches an access token, then
/// delegates the actual header mutation to the inner provider configured in
/// [`OAuth2Config::request_mutator`].
#[derive(Debug)]
pub struct OAuth2 {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
    access_token_pointer: String,
    expires_in_pointer: String,
    credentials_location: CredentialsLocation,
    body_content: TokenBodyContent,
    request_mutator: Arc<dyn AuthProvider>,

    username: Option<String>,
    password: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    grant_type: String,
    scope: Option<Vec<String>>,

    token: Mutex<TokenCache>,
}

impl OAuth2 {
    /// Builds a provider for the resource-owner `password` grant.
    pub fn password(config: OAuth2Config, form: OAuth2PasswordForm) -> Self {
        Self {
            token_url: form.token_url.unwrap_or_else(|| config.token_url.clone()),
            username: Some(form.username),
            password: Some(form.password),
            client_id: form.client_id,
            client_secret: form.client_secret,
            grant_type: form.grant_type.unwrap_or_else(|| "password".to_string()),
            scope: form.scope,
            http: config.http,
            base_url: config.base_url,
            access_token_pointer: config.access_token_pointer,
            expires_in_pointer: config.expires_in_pointer,
            credentials_location: config.credentials_location,
            body_content: config.body_content,
            request_mutator: config.request_mutator,
            token: Mutex::new(TokenCache::default()),
        }
    }

    /// Builds a provider for the `client_credentials` grant.
    pub fn client_credentials(config: OAuth2Config, form: OAuth2ClientCredentialsForm) -> Self {
        Self {
            token_url: form.token_url.unwrap_or_else(|| config.token_url.clone()),
            username: None,
            password: None,
            client_id: Some(form.client_id),
            client_secret: Some(form.client_secret),
            grant_type: form
                .grant_type
                .unwrap_or_else(|| "client_credentials".to_string()),
            scope: form.scope,
            http: config.http,
            base_url: config.base_url,
            access_token_pointer: config.access_token_pointer,
            expires_in_pointer: config.expires_in_pointer,
            credentials_location: config.credentials_location,
            body_content: config.body_content,
            request_mutator: config.request_mutator,
            token: Mutex::new(TokenCache::default()),
        }
    }

    fn resolve_token_url(&self) -> String {
        if self.token_url.starts_with('/') {
            let base = self.base_url.trim_end_matches('/');
            let path = self.token_url.trim_start_matches('/');
            format!("{base}/{path}")
                .trim_end_matches('/')
                .to_string()
        } else {
            self.token_url.clone()
        }
    }

    fn grant_fields(&self) -> BTreeMap<&'static str, String> {
        let mut data = BTreeMap::new();
        data.insert("grant_type", self.grant_type.clone());
        if self.credentials_location == CredentialsLocation::RequestBody {
            if let Some(client_id) = &self.client_id {
                data.insert("client_id", client_id.clone());
            }
            if let Some(client_secret) = &self.client_secret {
                data.insert("client_secret", client_secret.clone());
            }
        }
        if let Some(username) = &self.username {
            data.insert("username", username.clone());
        }
        if let Some(password) = &self.password {
            data.insert("password", password.clone());
        }
        if let Some(scope) = &self.scope {
            data.insert("scope", scope.join(" "));
        }
        data
    }

    /// Fetches a fresh access token from the token endpoint.
    async fn refresh(&self) -> Result<TokenCache, AuthError> {
        let url = self.resolve_token_url();
        let data = self.grant_fields();

        let request = match self.body_content {
            TokenBodyContent::Json => self.http.post(&url).json(&data),
            TokenBodyContent::Form => {
                let body = form_urlencoded_body(&data, &[], &[])?;
                self.http
                    .post(&url)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(body)
            }
        };

        let request = if self.credentials_location == CredentialsLocation::BasicAuthorizationHeader
            && (self.client_id.is_some() || self.client_secret.is_some())
        {
            request.basic_auth(
                self.client_id.clone().unwrap_or_default(),
                Some(self.client_secret.clone().unwrap_or_default()),
            )
        } else {
            request
        };

        let response = request.send().await.map_err(AuthError::RefreshRequest)?;
        let status = response.status().as_u16();
        if status >= 300 {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::RefreshStatus { status, body });
        }

        let body: Value = response.json().await.map_err(AuthError::RefreshRequest)?;
        let access_token = body
            .pointer(&self.access_token_pointer)
            .and_then(Value::as_str)
            .ok_or_else(|| AuthError::TokenPointer(self.access_token_pointer.clone()))?
            .to_string();
        let expires_in = body
            .pointer(&self.expires_in_pointer)
            .and_then(Value::as_f64)
            .ok_or_else(|| AuthError::ExpiresPointer(self.expires_in_pointer.clone()))?;
        let expires_at = Utc::now() + Duration::milliseconds((expires_in * 1000.0) as i64);

        Ok(TokenCache {
            access_token: Some(access_token),
            expires_at: Some(expires_at),
        })
    }
}

#[async_trait]
impl AuthProvider for OAuth2 {
    async fn apply(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        // the lock is held across the whole check-refresh-store sequence so
        // concurrent callers cannot trigger redundant token fetches
        let mut cache = self.token.lock().await;
        let expired = cache.expires_at.is_some_and(|at| at <= Utc::now());
        if cache.access_token.is_none() || expired {
            *cache = self.refresh().await?;
        }
        let token = cache.access_token.clone();
        drop(cache);

        self.request_mutator.set_value(token.as_deref())?;
        self.request_mutator.apply(request).await
    }

    fn set_value(&self, _value: Option<&str>) -> Result<(), AuthError> {
        Err(AuthError::InvalidMutator)
    }
}
