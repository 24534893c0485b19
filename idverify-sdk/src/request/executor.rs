use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use super::{response::Response, Request};
use crate::error::{SdkError, SdkResult};

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Sends signed requests and decodes the responses
#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    /// Sends `request`. With `buffer_response` set, the body comes back as
    /// raw bytes; otherwise a non-empty body is parsed as JSON.
    async fn execute(&self, request: &Request, buffer_response: bool) -> SdkResult<Response>;
}

/// [`Executor`] backed by `reqwest`
pub struct HttpExecutor {
    http_client: ClientWithMiddleware,
}

impl HttpExecutor {
    /// Creates an executor with a pooled client and no timeout
    ///
    /// # Errors
    /// Returns `SdkError::Transport` if the TLS backend cannot be initialised
    pub fn new() -> SdkResult<Self> {
        let reqwest_client = Client::builder()
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .user_agent(format!("idverify-sdk/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(reqwest_client))
    }

    /// Wraps a caller-configured client, e.g. one with a timeout
    #[must_use]
    pub fn with_client(reqwest_client: Client) -> Self {
        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Self { http_client }
    }
}

#[async_trait::async_trait]
impl Executor for HttpExecutor {
    async fn execute(&self, request: &Request, buffer_response: bool) -> SdkResult<Response> {
        let mut builder = self
            .http_client
            .request(request.method().clone(), request.url().clone());

        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.body(body);
        }

        tracing::debug!("{} {}", request.method(), request.url().path());

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Error getting data from Connect API: {e}");
            SdkError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = status
                .canonical_reason()
                .map_or_else(|| status.as_str().to_string(), ToString::to_string);
            tracing::error!("Error getting data from Connect API: {message}");
            return Err(SdkError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Error getting data from Connect API: {e}");
            SdkError::from(e)
        })?;

        Response::from_raw(status.as_u16(), headers, &bytes, buffer_response)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::sync::{Mutex, PoisonError};

    use super::{Executor, Request, Response, SdkError, SdkResult};

    enum Outcome {
        Respond(Response),
        Fail { status: u16, message: String },
    }

    /// Executor answering every request with a canned outcome
    pub struct MockExecutor {
        outcome: Outcome,
        requests: Mutex<Vec<(Request, bool)>>,
    }

    impl MockExecutor {
        /// Answers every request with `response`
        #[must_use]
        pub const fn new(response: Response) -> Self {
            Self {
                outcome: Outcome::Respond(response),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Fails every request with an HTTP error
        #[must_use]
        pub fn failing(status: u16, message: &str) -> Self {
            Self {
                outcome: Outcome::Fail {
                    status,
                    message: message.to_string(),
                },
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Requests seen so far, with the buffer flag they were sent with
        #[must_use]
        pub fn requests(&self) -> Vec<(Request, bool)> {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait::async_trait]
    impl Executor for MockExecutor {
        async fn execute(&self, request: &Request, buffer_response: bool) -> SdkResult<Response> {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((request.clone(), buffer_response));

            match &self.outcome {
                Outcome::Respond(response) => Ok(response.clone()),
                Outcome::Fail { status, message } => Err(SdkError::Http {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }
}
