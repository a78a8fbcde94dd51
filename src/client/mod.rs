//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use serde_json::value::RawValue;
use tracing::debug;

use crate::domain::{ApiKey, ProviderResponse, SendSms, TtsCall, Username, ValidationError};
use crate::transport::TransportError;

pub const DEFAULT_BASE_URL: &str = "https://rest.clicksend.com/v3";

const SMS_SEND_PATH: &str = "/sms/send";
const VOICE_SEND_PATH: &str = "/voice/send";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        body: Box<RawValue>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        body: Box<RawValue>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .basic_auth(auth.username.as_str(), Some(auth.api_key.as_str()))
                .json(&body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// ClickSend account credentials, sent with every request as HTTP Basic auth.
pub struct Auth {
    username: Username,
    api_key: ApiKey,
}

impl Auth {
    /// Create credentials and validate that both parts are non-empty.
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            api_key: ApiKey::new(api_key)?,
        })
    }

    /// The account username.
    pub fn username(&self) -> &Username {
        &self.username
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ClickSendClient`].
///
/// Every variant renders as `ClickSend API Error: <message>`, where the message is
/// ClickSend's own description whenever the response carried one.
pub enum ClickSendError {
    /// No response was received (DNS, TLS, connection reset, etc).
    #[error("ClickSend API Error: {0}")]
    Transport(#[source] BoxError),

    /// ClickSend answered with a non-2xx status.
    #[error("ClickSend API Error: {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<String>,
    },

    /// A 2xx response body was not valid JSON.
    #[error("ClickSend API Error: {0}")]
    Parse(#[source] TransportError),

    /// The request body could not be serialized.
    #[error("ClickSend API Error: failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ClickSendError {
    /// The provider-facing message without the `ClickSend API Error:` prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Transport(err) => err.to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Parse(err) => err.to_string(),
            Self::Encode(err) => format!("failed to encode request: {err}"),
        }
    }

    /// HTTP status when ClickSend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`ClickSendClient`].
///
/// Use this when you need to point at a different base URL or set a user-agent.
pub struct ClickSendClientBuilder {
    auth: Auth,
    base_url: String,
    user_agent: Option<String>,
}

impl ClickSendClientBuilder {
    /// Create a builder with the default base URL and no user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: None,
        }
    }

    /// Override the ClickSend base URL (`https://rest.clicksend.com/v3` by default).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`ClickSendClient`].
    pub fn build(self) -> Result<ClickSendClient, ClickSendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ClickSendError::Transport(Box::new(err)))?;

        Ok(ClickSendClient::from_parts(
            self.auth,
            &self.base_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

#[derive(Clone)]
/// ClickSend REST client for the two operations exposed as tools.
///
/// Requests are sent once; there is no retry and no timeout beyond the HTTP
/// client's defaults. Response bodies are returned verbatim.
pub struct ClickSendClient {
    auth: Auth,
    sms_endpoint: String,
    voice_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ClickSendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickSendClient")
            .field("username", &self.auth.username)
            .field("sms_endpoint", &self.sms_endpoint)
            .field("voice_endpoint", &self.voice_endpoint)
            .finish_non_exhaustive()
    }
}

impl ClickSendClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`ClickSendClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self::from_parts(
            auth,
            DEFAULT_BASE_URL,
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        )
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> ClickSendClientBuilder {
        ClickSendClientBuilder::new(auth)
    }

    pub(crate) fn from_parts(auth: Auth, base_url: &str, http: Arc<dyn HttpTransport>) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            auth,
            sms_endpoint: format!("{base}{SMS_SEND_PATH}"),
            voice_endpoint: format!("{base}{VOICE_SEND_PATH}"),
            http,
        }
    }

    /// Send one SMS through `POST /sms/send`.
    ///
    /// Errors:
    /// - [`ClickSendError::Transport`] when no response arrives,
    /// - [`ClickSendError::Api`] for non-2xx responses,
    /// - [`ClickSendError::Parse`] when a 2xx body is not JSON.
    pub async fn send_sms(&self, request: &SendSms) -> Result<ProviderResponse, ClickSendError> {
        let body = crate::transport::encode_send_sms_body(request);
        self.post(&self.sms_endpoint, &body).await
    }

    /// Place one text-to-speech call through `POST /voice/send`.
    ///
    /// Errors are the same as for [`ClickSendClient::send_sms`].
    pub async fn make_tts_call(
        &self,
        request: &TtsCall,
    ) -> Result<ProviderResponse, ClickSendError> {
        let body = crate::transport::encode_voice_send_body(request);
        self.post(&self.voice_endpoint, &body).await
    }

    async fn post<T: Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<ProviderResponse, ClickSendError> {
        let body = serde_json::value::to_raw_value(body).map_err(ClickSendError::Encode)?;

        debug!(%url, "posting to ClickSend");
        let response = self
            .http
            .post_json(url, &self.auth, body)
            .await
            .map_err(ClickSendError::Transport)?;
        debug!(%url, status = response.status, "ClickSend responded");

        if !(200..=299).contains(&response.status) {
            let message = crate::transport::decode_error_message(&response.body)
                .unwrap_or_else(|| format!("Request failed with status code {}", response.status));
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(ClickSendError::Api {
                status: response.status,
                message,
                body,
            });
        }

        crate::transport::decode_provider_response(&response.body).map_err(ClickSendError::Parse)
    }
}
