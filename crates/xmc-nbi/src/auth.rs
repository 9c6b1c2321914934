use secrecy::{ExposeSecret, SecretString};

/// Which authentication strategy a request is sent with.
///
/// Marker enum (no data) -- the actual secrets live in [`Credentials`].
/// Useful for logging the auth flow without carrying secret material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStrategy {
    /// OAuth client-credentials grant, sent as a bearer token.
    OAuth,
    /// HTTP Basic authentication.
    Basic,
    /// No `Authorization` header at all (OAuth without a client id/secret).
    Anonymous,
}

/// Credentials for authenticating against the XMC northbound interface.
///
/// Exactly one variant is active per client. The choice is made once by the
/// caller, so there is no "last setter wins" ordering between schemes.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// OAuth 2.0 client credentials. XMC issues these under
    /// Administration > Client API Access.
    OAuth {
        client_id: String,
        client_secret: SecretString,
    },

    /// Plain username/password, sent as `Authorization: Basic`.
    Basic {
        username: String,
        password: SecretString,
    },
}

impl Credentials {
    /// The strategy these credentials resolve to.
    ///
    /// OAuth with an empty client id or secret is inert and resolves to
    /// [`AuthStrategy::Anonymous`].
    pub fn strategy(&self) -> AuthStrategy {
        match self {
            Self::OAuth {
                client_id,
                client_secret,
            } => {
                if client_id.is_empty() || client_secret.expose_secret().is_empty() {
                    AuthStrategy::Anonymous
                } else {
                    AuthStrategy::OAuth
                }
            }
            Self::Basic { .. } => AuthStrategy::Basic,
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::OAuth {
            client_id: String::new(),
            client_secret: SecretString::from(String::new()),
        }
    }
}
