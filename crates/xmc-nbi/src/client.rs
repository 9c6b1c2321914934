// NBI HTTP client
//
// Wraps `reqwest::Client` with XMC URL construction and credential
// application. The GraphQL document travels in the `query` URL parameter of
// a plain GET; the raw response body is handed back undecoded.

use bytes::Bytes;
use secrecy::ExposeSecret;
use tracing::{debug, warn};
use url::Url;

use crate::auth::{AuthStrategy, Credentials};
use crate::error::Error;
use crate::transport::TransportConfig;

/// Path of the GraphQL endpoint below the controller root.
pub const GRAPHQL_PATH: &str = "/nbi/graphql";

/// Where the controller lives. Turned into a base URL once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    /// Prefix in front of `/nbi/graphql`, for controllers behind a reverse proxy.
    pub base_path: String,
    pub use_tls: bool,
}

impl Endpoint {
    pub fn scheme(&self) -> &'static str {
        if self.use_tls { "https" } else { "http" }
    }

    /// `{scheme}://{host}:{port}{base_path}` with the base path normalized
    /// to a leading slash and no trailing slash.
    pub fn base_url(&self) -> Result<Url, Error> {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        let path = self.base_path.trim_matches('/');
        let raw = if path.is_empty() {
            format!("{}://{host}:{}", self.scheme(), self.port)
        } else {
            format!("{}://{host}:{}/{path}", self.scheme(), self.port)
        };
        Ok(Url::parse(&raw)?)
    }
}

/// Raw HTTP client for the XMC northbound interface.
///
/// Holds no per-request state; every call builds a fresh request and
/// applies the credentials once.
#[derive(Debug)]
pub struct NbiClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    transport: TransportConfig,
}

impl NbiClient {
    /// Build a client for `endpoint` with the given credentials.
    ///
    /// Fails if the endpoint does not form a valid URL or the underlying
    /// HTTP client cannot be built. No request is made.
    pub fn new(
        endpoint: &Endpoint,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = endpoint.base_url()?;
        let http = transport.build_client()?;
        debug!(
            base_url = %base_url,
            auth = ?credentials.strategy(),
            "NBI client configured"
        );
        Ok(Self {
            http,
            base_url,
            credentials,
            transport: transport.clone(),
        })
    }

    /// The controller base URL (scheme, host, port and base path).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The effective authentication strategy.
    pub fn auth_strategy(&self) -> AuthStrategy {
        self.credentials.strategy()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn transport(&self) -> &TransportConfig {
        &self.transport
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Append an absolute path to the base URL, keeping the base path.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// `{base}/nbi/graphql`
    pub fn graphql_url(&self) -> Result<Url, Error> {
        self.url(GRAPHQL_PATH)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Run a GraphQL query and return the raw response body.
    ///
    /// Any non-2xx status is an error carrying the status line. The body
    /// is not inspected here.
    pub async fn query(&self, gql: &str) -> Result<Bytes, Error> {
        let url = self.graphql_url()?;
        debug!("GET {url}");

        let builder = self.http.get(url).query(&[("query", gql)]);
        let builder = self.authorize(builder).await?;

        let resp = builder
            .send()
            .await
            .map_err(|e| self.transport.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.to_string(),
                code: status.as_u16(),
            });
        }

        resp.bytes().await.map_err(|e| self.transport.classify(e))
    }

    /// Attach the active credential to a request.
    async fn authorize(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, Error> {
        match (&self.credentials, self.credentials.strategy()) {
            (Credentials::Basic { username, password }, _) => {
                if self.base_url.scheme() == "http" {
                    warn!("sending basic auth credentials over plain HTTP");
                }
                Ok(builder.basic_auth(username, Some(password.expose_secret())))
            }
            (
                Credentials::OAuth {
                    client_id,
                    client_secret,
                },
                AuthStrategy::OAuth,
            ) => {
                let token = self.access_token(client_id, client_secret).await?;
                Ok(builder.bearer_auth(token.expose_secret()))
            }
            (Credentials::OAuth { .. }, _) => {
                debug!("no OAuth client credentials, sending request unauthenticated");
                Ok(builder)
            }
        }
    }
}
