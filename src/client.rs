//! Module containing the main EthioVerifyPay API client.

use crate::{
    apis::{businesses::BusinessesApi, EthioVerifyPayClientInner},
    middlewares::{
        error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
        retry_idempotent::{BoxedRetryPolicy, RetryIdempotentMiddleware},
    },
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use retry_policies::RetryPolicy;
use std::sync::Arc;

static DEFAULT_API_URL: &str = "https://payment-verify-backend.onrender.com";
static DEFAULT_PUBLIC_URL: &str = "https://payment-verify-frontend.vercel.app";

/// Client for the EthioVerifyPay business-record service.
#[derive(Debug, Clone)]
pub struct EthioVerifyPayClient {
    /// Businesses APIs client.
    pub businesses: BusinessesApi,
}

impl EthioVerifyPayClient {
    /// Builds a new [`EthioVerifyPayClient`](crate::client::EthioVerifyPayClient)
    /// with the default configuration.
    pub fn new() -> EthioVerifyPayClient {
        EthioVerifyPayClientBuilder::default().build()
    }

    /// Returns a new builder to configure a new
    /// [`EthioVerifyPayClient`](crate::client::EthioVerifyPayClient).
    pub fn builder() -> EthioVerifyPayClientBuilder {
        EthioVerifyPayClientBuilder::default()
    }
}

impl Default for EthioVerifyPayClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The environment a client connects to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Environment {
    /// The deployed production service.
    Production,
    /// Custom URLs, mainly used for local testing.
    Custom {
        /// Origin of the business-record API.
        api_url: Url,
        /// Base of the public verification pages, used to build share links.
        public_url: Url,
    },
}

impl Environment {
    /// Builds a custom environment where both the API and the public pages
    /// are served from the same origin.
    pub fn from_single_url(url: &Url) -> Self {
        Environment::Custom {
            api_url: url.clone(),
            public_url: url.clone(),
        }
    }

    /// Origin of the business-record API.
    pub fn api_url(&self) -> Url {
        match self {
            Environment::Production => Url::parse(DEFAULT_API_URL).unwrap(),
            Environment::Custom { api_url, .. } => api_url.clone(),
        }
    }

    /// Base URL of the public verification pages.
    pub fn public_url(&self) -> Url {
        match self {
            Environment::Production => Url::parse(DEFAULT_PUBLIC_URL).unwrap(),
            Environment::Custom { public_url, .. } => public_url.clone(),
        }
    }
}

/// Builder for an [`EthioVerifyPayClient`](crate::client::EthioVerifyPayClient).
#[derive(Debug)]
pub struct EthioVerifyPayClientBuilder {
    client: reqwest::Client,
    retry_policy: Option<BoxedRetryPolicy>,
    environment: Environment,
}

impl Default for EthioVerifyPayClientBuilder {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            // Nothing is retried automatically: the service exposes no
            // idempotency mechanism, and resolution is a single fetch per
            // page load. Retries are opt-in via `with_retry_policy`.
            retry_policy: None,
            environment: Environment::Production,
        }
    }
}

impl EthioVerifyPayClientBuilder {
    /// Consumes the builder and builds a new
    /// [`EthioVerifyPayClient`](crate::client::EthioVerifyPayClient).
    pub fn build(self) -> EthioVerifyPayClient {
        let inner = Arc::new(EthioVerifyPayClientInner {
            client: build_client_with_middleware(self.client, self.retry_policy),
            environment: self.environment,
        });

        EthioVerifyPayClient {
            businesses: BusinessesApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets a [`RetryPolicy`](retry_policies::RetryPolicy) to use when retrying
    /// transient failures of idempotent requests.
    ///
    /// Defaults to `None`: no request is retried automatically.
    pub fn with_retry_policy(
        mut self,
        retry_policy: impl Into<Option<Arc<dyn RetryPolicy + Send + Sync + 'static>>>,
    ) -> Self {
        self.retry_policy = retry_policy.into().map(BoxedRetryPolicy);
        self
    }

    /// Sets the environment to connect to.
    ///
    /// Defaults to [`Environment::Production`](crate::client::Environment).
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    retry_policy: Option<BoxedRetryPolicy>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware)
        .with(InjectUserAgentMiddleware::new())
        .with(ErrorHandlingMiddleware);

    if let Some(retry_policy) = retry_policy {
        builder = builder.with(RetryIdempotentMiddleware::new(retry_policy));
    }

    builder.build()
}
