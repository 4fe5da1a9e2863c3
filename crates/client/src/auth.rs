//! Basic-auth credentials for the Librato API.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Account email and API token, attached to every request as HTTP basic auth.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    token: SecretString,
}

impl Credentials {
    pub fn new(email: String, token: SecretString) -> Self {
        Self { email, token }
    }

    /// The account email (basic-auth user).
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Attach these credentials to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.email, Some(self.token.expose_secret()))
    }
}
