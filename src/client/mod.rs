//! Request assembly and execution with tracing instrumentation.
//!
//! [`CoreClient`] is the transport glue every generated resource client sits
//! on: it joins base URLs and paths, stamps the client-identification header,
//! applies registered auth providers and request modifiers, dispatches over
//! an explicitly constructed `reqwest::Client`, and classifies error
//! responses. [`Client`] with its [`ClientBuilder`] is the caller-facing
//! entry point to the resource surface.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{instrument, Span};
use url::Url;

use crate::auth::{AuthKey, AuthProvider};
use crate::environment::Environment;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::resources::pet::PetClient;
use crate::resources::store::StoreClient;

/// Service name used when the client talks to a single base URL.
pub const DEFAULT_SERVICE: &str = "__default_service__";

/// Header identifying the SDK on every outbound request.
pub const SDK_LANGUAGE_HEADER: &str = "x-sdk-language";

/// A fallible hook that may rewrite an outgoing request.
///
/// Client-level modifiers run on every request, before any per-call
/// modifiers supplied to [`CoreClient::execute`].
pub type RequestModifier =
    Arc<dyn Fn(reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, ApiError> + Send + Sync>;

/// Transport glue shared by all resource clients.
pub struct CoreClient {
    http: reqwest::Client,
    base_urls: HashMap<String, String>,
    auth: HashMap<String, Arc<dyn AuthProvider>>,
    modifiers: Vec<RequestModifier>,
}

impl fmt::Debug for CoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreClient")
            .field("base_urls", &self.base_urls)
            .field("auth", &self.auth)
            .field("modifiers", &self.modifiers.len())
            .finish()
    }
}

impl CoreClient {
    /// Creates a core client for a single base URL with no auth registered.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_urls: HashMap::from([(DEFAULT_SERVICE.to_string(), base_url.into())]),
            auth: HashMap::new(),
            modifiers: Vec::new(),
        }
    }

    /// Returns the shared HTTP transport handle.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Registers an auth provider under a logical scheme name.
    pub fn register_auth(&mut self, name: impl Into<String>, provider: Arc<dyn AuthProvider>) {
        self.auth.insert(name.into(), provider);
    }

    /// Registers a base URL for a named service.
    pub fn register_base_url(&mut self, service: impl Into<String>, base_url: impl Into<String>) {
        self.base_urls.insert(service.into(), base_url.into());
    }

    /// Adds a client-level request modifier.
    pub fn register_modifier(&mut self, modifier: RequestModifier) {
        self.modifiers.push(modifier);
    }

    /// Joins the default service's base URL with `path`.
    ///
    /// ## Errors
    ///
    /// [`ApiError::Url`] if the joined string is not a valid URL,
    /// [`ApiError::Client`] if no base URL is registered.
    pub fn build_url(&self, path: &str) -> Result<Url, ApiError> {
        self.build_url_for(path, DEFAULT_SERVICE)
    }

    /// Joins a named service's base URL with `path`, normalizing slashes.
    pub fn build_url_for(&self, path: &str, service: &str) -> Result<Url, ApiError> {
        let base = self.base_urls.get(service).ok_or_else(|| {
            ApiError::Client(format!("no base URL registered for service '{service}'"))
        })?;
        let joined = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }

    /// Starts a request, stamping the client-identification header.
    pub fn request(&self, method: RestMethod, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method.to_reqwest(), url)
            .header(SDK_LANGUAGE_HEADER, "Rust")
    }

    /// Applies each registered provider named in `auth_names`.
    ///
    /// Names with no registered provider are skipped; optional auth schemes
    /// simply do not decorate the request.
    pub async fn add_auth(
        &self,
        mut request: reqwest::RequestBuilder,
        auth_names: &[&str],
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        for name in auth_names {
            if let Some(provider) = self.auth.get(*name) {
                request = provider.apply(request).await?;
            }
        }
        Ok(request)
    }

    /// Applies client-level modifiers, then the per-call ones.
    pub fn apply_modifiers(
        &self,
        mut request: reqwest::RequestBuilder,
        extra: &[RequestModifier],
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        for modifier in self.modifiers.iter().chain(extra) {
            request = modifier(request)?;
        }
        Ok(request)
    }

    /// Authenticates, modifies, dispatches, and classifies a request.
    ///
    /// ## Errors
    ///
    /// Any auth, modifier, or transport failure; a response with status 300
    /// or above surfaces as [`ApiError::Http`] carrying the status, method,
    /// URL, and raw body. Nothing is retried.
    #[instrument(
        name = "api_request",
        skip(self, request, extra_modifiers),
        fields(
            http.method = %method,
            http.url = %url,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        method: RestMethod,
        url: &Url,
        auth_names: &[&str],
        extra_modifiers: &[RequestModifier],
    ) -> Result<reqwest::Response, ApiError> {
        let request = self.add_auth(request, auth_names).await?;
        let request = self.apply_modifiers(request, extra_modifiers)?;

        let response = request.send().await?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if status.as_u16() >= 300 {
            return Err(ApiError::from_response(method, response).await);
        }

        Ok(response)
    }
}

/// Builder for configuring a [`Client`].
///
/// ## Examples
///
/// ```rust,no_run
/// use petstore::{Client, Environment};
///
/// let client = Client::builder()
///     .with_env(Environment::MockServer)
///     .with_api_key("API_KEY")
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    extra_services: Vec<(String, String)>,
    http: Option<reqwest::Client>,
    auth: Vec<(String, Arc<dyn AuthProvider>)>,
    modifiers: Vec<RequestModifier>,
}

impl ClientBuilder {
    /// Points the client at a pre-defined environment.
    pub fn with_env(mut self, env: Environment) -> Self {
        self.base_url = Some(env.url().to_string());
        self
    }

    /// Provides a non-default base URL for all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Registers a base URL for an additional named service.
    pub fn with_service_base_url(
        mut self,
        service: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        self.extra_services.push((service.into(), base_url.into()));
        self
    }

    /// Provides a pre-configured `reqwest::Client` for all requests.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Registers the Petstore `api_key` header scheme.
    pub fn with_api_key(self, api_key: impl Into<String>) -> Self {
        self.with_auth("api_key", Arc::new(AuthKey::header("api_key", api_key)))
    }

    /// Registers an auth provider under a logical scheme name.
    pub fn with_auth(mut self, name: impl Into<String>, provider: Arc<dyn AuthProvider>) -> Self {
        self.auth.push((name.into(), provider));
        self
    }

    /// Adds a modifier applied to every outgoing request.
    pub fn with_modifier<F>(mut self, modifier: F) -> Self
    where
        F: Fn(reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, ApiError>
            + Send
            + Sync
            + 'static,
    {
        self.modifiers.push(Arc::new(modifier));
        self
    }

    /// Builds the [`Client`].
    ///
    /// ## Errors
    ///
    /// [`ApiError::Client`] if the HTTP transport cannot be constructed.
    pub fn build(self) -> Result<Client, ApiError> {
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .build()
                .map_err(|e| ApiError::Client(format!("failed to build HTTP client: {e}")))?,
        };

        let base_url = self
            .base_url
            .unwrap_or_else(|| Environment::default().url().to_string());

        let mut core = CoreClient::new(http, base_url);
        for (service, url) in self.extra_services {
            core.register_base_url(service, url);
        }
        for (name, provider) in self.auth {
            core.register_auth(name, provider);
        }
        for modifier in self.modifiers {
            core.register_modifier(modifier);
        }

        Ok(Client {
            core: Arc::new(core),
        })
    }
}

/// The Petstore API client.
///
/// Cheap to clone; all clones share the same transport, auth registry, and
/// modifier list.
///
/// ## Examples
///
/// ```rust,no_run
/// # async fn run() -> Result<(), petstore::ApiError> {
/// use petstore::resources::pet::DeleteRequest;
/// use petstore::Client;
///
/// let client = Client::builder().with_api_key("API_KEY").build()?;
/// client.pet().delete(DeleteRequest { pet_id: 123 }).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    core: Arc<CoreClient>,
}

impl Client {
    /// Creates a new builder for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The `/pet` resource surface.
    pub fn pet(&self) -> PetClient {
        PetClient::new(Arc::clone(&self.core))
    }

    /// The `/store` resource surface.
    pub fn store(&self) -> StoreClient {
        StoreClient::new(Arc::clone(&self.core))
    }

    /// The underlying transport glue, for advanced call construction.
    pub fn core(&self) -> &CoreClient {
        &self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_normalizes_slashes() {
        let core = CoreClient::new(reqwest::Client::new(), "https://example.com/api/");
        let url = core.build_url("/pet/123").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/pet/123");
    }

    #[test]
    fn test_build_url_unknown_service() {
        let core = CoreClient::new(reqwest::Client::new(), "https://example.com");
        let err = core.build_url_for("/pet", "billing").unwrap_err();
        assert!(matches!(err, ApiError::Client(_)));
    }

    #[test]
    fn test_request_carries_sdk_language_header() {
        let core = CoreClient::new(reqwest::Client::new(), "https://example.com");
        let url = core.build_url("/pet").unwrap();
        let request = core.request(RestMethod::Get, url).build().unwrap();
        assert_eq!(request.headers()[SDK_LANGUAGE_HEADER], "Rust");
    }

    #[tokio::test]
    async fn test_unregistered_auth_scheme_is_skipped() {
        let core = CoreClient::new(reqwest::Client::new(), "https://example.com");
        let url = core.build_url("/pet").unwrap();
        let request = core.request(RestMethod::Get, url);
        let request = core.add_auth(request, &["api_key"]).await.unwrap();
        let built = request.build().unwrap();
        assert!(built.headers().get("api_key").is_none());
    }

    #[test]
    fn test_modifiers_run_client_level_then_per_call() {
        let mut core = CoreClient::new(reqwest::Client::new(), "https://example.com");
        core.register_modifier(Arc::new(|req| Ok(req.header("x-order", "client"))));
        let per_call: RequestModifier = Arc::new(|req| Ok(req.header("x-order", "call")));

        let url = core.build_url("/pet").unwrap();
        let request = core.request(RestMethod::Get, url);
        let request = core.apply_modifiers(request, &[per_call]).unwrap();
        let built = request.build().unwrap();

        let values: Vec<_> = built.headers().get_all("x-order").iter().collect();
        assert_eq!(values, ["client", "call"]);
    }

    #[test]
    fn test_builder_defaults_to_production() {
        let client = Client::builder().build().unwrap();
        let url = client.core().build_url("/pet").unwrap();
        assert!(url.as_str().starts_with(Environment::Production.url()));
    }
}
