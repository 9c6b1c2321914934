// OAuth client-credentials exchange
//
// XMC issues bearer tokens from `/oauth/token/access-token`. The client id
// and secret are presented as HTTP Basic credentials; the grant type goes
// in the query string. Tokens are fetched per request and never cached.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::client::NbiClient;
use crate::error::Error;

/// Path of the token endpoint below the controller root.
pub const TOKEN_PATH: &str = "/oauth/token/access-token";

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl NbiClient {
    /// Exchange client credentials for a bearer token.
    pub(crate) async fn access_token(
        &self,
        client_id: &str,
        client_secret: &SecretString,
    ) -> Result<SecretString, Error> {
        let url = self.url(TOKEN_PATH)?;
        debug!("POST {url}");

        let resp = self
            .http()
            .post(url)
            .query(&[("grant_type", "client_credentials")])
            .basic_auth(client_id, Some(client_secret.expose_secret()))
            .send()
            .await
            .map_err(|e| self.transport().classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!("token endpoint returned HTTP {status}"),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| self.transport().classify(e))?;

        let token: TokenResponse =
            serde_json::from_slice(&body).map_err(|e| Error::Authentication {
                message: format!("unreadable token response: {e}"),
            })?;

        match token.access_token {
            Some(t) if !t.is_empty() => {
                debug!("obtained OAuth access token");
                Ok(SecretString::from(t))
            }
            _ => Err(Error::Authentication {
                message: "token response carried no access_token".into(),
            }),
        }
    }
}
