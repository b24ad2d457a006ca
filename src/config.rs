// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Response, StatusCode, Url};
use reqwest_middleware::Middleware;
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::{
    default_on_request_failure, RetryTransientMiddleware, Retryable, RetryableStrategy,
};
use serde::Serialize;

use crate::client::Client;
use crate::error::{Error, UrlError, UrlErrorKind};

pub static DEFAULT_ENDPOINT: Lazy<Url> = Lazy::new(|| {
    "https://api.github.com"
        .parse()
        .expect("url known to be valid")
});

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configures the required parameters of a [`Client`].
pub struct ClientConfig {
    /// The token to authenticate with, such as a personal access token.
    pub token: String,
}

/// A builder for a [`Client`].
pub struct ClientBuilder {
    endpoint: Url,
    user_agent: String,
    http_client: Option<reqwest::Client>,
    middleware: Vec<Arc<dyn Middleware>>,
    retry_policy: Option<ExponentialBackoff>,
}

impl Default for ClientBuilder {
    fn default() -> ClientBuilder {
        ClientBuilder {
            endpoint: DEFAULT_ENDPOINT.clone(),
            user_agent: DEFAULT_USER_AGENT.into(),
            http_client: None,
            middleware: vec![],
            retry_policy: None,
        }
    }
}

/// Retry requests that were rate limited (429) or failed due to network errors.
struct RetryRateLimited;
impl RetryableStrategy for RetryRateLimited {
    fn handle(&self, res: &Result<Response, reqwest_middleware::Error>) -> Option<Retryable> {
        match res {
            Ok(success) if success.status() == StatusCode::TOO_MANY_REQUESTS => {
                Some(Retryable::Transient)
            }
            // Other statuses are surfaced to the caller as-is.
            Ok(_) => None,
            Err(error) => default_on_request_failure(error),
        }
    }
}

impl ClientBuilder {
    /// Sets a policy for retrying failed API calls.
    ///
    /// By default, every API call results in exactly one HTTP request. With a
    /// retry policy, calls that fail due to network errors or that return a
    /// 429 status code are retried according to the policy.
    pub fn with_retry_policy(mut self, policy: ExponentialBackoff) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Sets the endpoint.
    ///
    /// Defaults to `https://api.github.com`. Set this to the API root of a
    /// GitHub Enterprise Server installation, e.g.
    /// `https://github.example.com/api/v3`.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Sets the `User-Agent` header sent with each request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the HTTP client used to send requests.
    ///
    /// Use this to share a connection pool or to configure proxies, TLS and
    /// timeouts. The `User-Agent` configured on this builder is sent
    /// regardless of the client's defaults.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Adds a middleware layer to the HTTP transport.
    ///
    /// Middleware is applied in the order it is added, before the retry
    /// middleware configured by [`ClientBuilder::with_retry_policy`].
    pub fn with_middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware,
    {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Creates a [`Client`] that incorporates the optional parameters
    /// configured on the builder and the specified required parameters.
    pub fn build(self, config: ClientConfig) -> Result<Client, Error> {
        if self.endpoint.cannot_be_a_base() {
            return Err(Error::InvalidUrl(UrlError {
                input: self.endpoint.into(),
                kind: UrlErrorKind::CannotBeABase,
            }));
        }
        let client = match self.http_client {
            Some(client) => client,
            None => reqwest::ClientBuilder::new()
                .redirect(reqwest::redirect::Policy::none())
                .timeout(Duration::from_secs(60))
                .build()?,
        };
        let mut inner = reqwest_middleware::ClientBuilder::new(client);
        for middleware in self.middleware {
            inner = inner.with_arc(middleware);
        }
        if let Some(policy) = self.retry_policy {
            inner = inner.with(RetryTransientMiddleware::new_with_policy_and_strategy(
                policy,
                RetryRateLimited,
            ));
        }
        Ok(Client {
            inner: inner.build(),
            token: config.token,
            user_agent: self.user_agent,
            endpoint: self.endpoint,
        })
    }
}

/// Parameters for a paginated operation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) per_page: Option<u64>,
}

impl ListParams {
    /// The default list parameters, which leave both the page and the page
    /// size to the server.
    ///
    /// Exposed as a constant for use in constant evaluation contexts.
    pub const DEFAULT: ListParams = ListParams {
        page: None,
        per_page: None,
    };

    /// The maximum page size accepted by the API.
    pub const MAX_PER_PAGE: u64 = 100;

    /// Sets the page to fetch, starting at 1.
    pub const fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size for the list operation.
    ///
    /// The server default is 30. The maximum page size is
    /// [`ListParams::MAX_PER_PAGE`].
    pub const fn per_page(mut self, per_page: u64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.page == Some(0) {
            return Err(Error::InvalidRequest {
                detail: "page numbers start at 1".into(),
            });
        }
        if let Some(per_page) = self.per_page {
            if !(1..=Self::MAX_PER_PAGE).contains(&per_page) {
                return Err(Error::InvalidRequest {
                    detail: format!(
                        "per_page must be between 1 and {}, got {per_page}",
                        Self::MAX_PER_PAGE
                    ),
                });
            }
        }
        Ok(())
    }
}
