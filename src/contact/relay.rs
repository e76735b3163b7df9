use std::future::Future;
use std::sync::Arc;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use super::fields::FormFields;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Acknowledgement from the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Relay request failed: {0}")]
    Network(String),
    #[error("Relay rejected message: {status} - {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("Relay not configured: {0} is missing")]
    NotConfigured(&'static str),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} is empty")]
    Empty(&'static str),
}

impl From<ConfigError> for TransportError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Missing(name) | ConfigError::Empty(name) => Self::NotConfigured(name),
        }
    }
}

/// Outbound side of the contact form. Resolves exactly once; expected
/// failures come back as `Err`, never as a panic.
pub trait EmailRelayClient {
    fn send(&self, fields: &FormFields) -> impl Future<Output = Result<Receipt, TransportError>>;
}

/// EmailJS identifiers. They are public by design and baked in at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            endpoint: EMAILJS_SEND_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let required = |value: Option<&str>, name: &'static str| match value.map(str::trim) {
            None => Err(ConfigError::Missing(name)),
            Some("") => Err(ConfigError::Empty(name)),
            Some(v) => Ok(v.to_string()),
        };
        Ok(Self::new(
            required(service_id, "EMAILJS_SERVICE_ID")?,
            required(template_id, "EMAILJS_TEMPLATE_ID")?,
            required(public_key, "EMAILJS_PUBLIC_KEY")?,
        ))
    }
}

#[derive(Serialize, Debug)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    phone: &'a str,
    message: &'a str,
}

#[derive(Serialize, Debug)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    fn new(config: &'a RelayConfig, fields: &'a FormFields) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                from_name: fields.name.trim(),
                from_email: fields.email.trim(),
                phone: fields.phone.trim(),
                message: fields.message.trim(),
            },
        }
    }
}

/// Relay client for the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    config: Result<Arc<RelayConfig>, ConfigError>,
}

impl EmailJsClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Ok(Arc::new(config)),
        }
    }

    /// Uses the build-time identifiers. A missing one is reported on each
    /// send instead of failing construction, so the page still renders.
    pub fn from_build_env() -> Self {
        let config = RelayConfig::from_build_env().map(Arc::new);
        if let Err(e) = &config {
            log::warn!("contact relay disabled: {e}");
        }
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_ok()
    }
}

impl EmailRelayClient for EmailJsClient {
    async fn send(&self, fields: &FormFields) -> Result<Receipt, TransportError> {
        let config = self.config.as_ref().map_err(|e| TransportError::from(e.clone()))?;
        let request = SendRequest::new(config, fields);

        log::debug!("relaying contact message via {}", config.endpoint);

        let response = self
            .client
            .post(&config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());

        if !status.is_success() {
            return Err(TransportError::Rejected { status, body });
        }
        Ok(Receipt { status, body })
    }
}
