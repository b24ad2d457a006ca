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

use async_stream::try_stream;
use futures_core::Stream;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Method, Request, Url};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiErrorDetail, UrlError, UrlErrorKind};
use crate::response::{Response, ResponseMeta};
use crate::util;
use crate::{ClientBuilder, ClientConfig, Error};

pub mod actions;
pub mod advanced_security;
pub mod packages;
pub mod storage;
pub mod usage;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

/// The account that owns a billing resource.
#[derive(Debug, Clone, Copy)]
enum Owner<'a> {
    Org(&'a str),
    User(&'a str),
}

impl<'a> Owner<'a> {
    fn login(&self) -> &'a str {
        match *self {
            Owner::Org(login) | Owner::User(login) => login,
        }
    }

    /// The path root under which the owner's billing settings live.
    ///
    /// The organization usage report lives under `organizations` rather than
    /// `orgs`, unlike every other organization billing resource.
    fn root(&self, resource: &str) -> &'static str {
        match (self, resource) {
            (Owner::Org(_), usage::USAGE) => "organizations",
            (Owner::Org(_), _) => "orgs",
            (Owner::User(_), _) => "users",
        }
    }
}

/// An API client for the GitHub billing API.
///
/// The API client is designed to be wrapped in an [`Arc`] and used from
/// multiple threads simultaneously.
///
/// [`Arc`]: std::sync::Arc
#[derive(Debug)]
pub struct Client {
    pub(crate) inner: ClientWithMiddleware,
    pub(crate) token: String,
    pub(crate) user_agent: String,
    pub(crate) endpoint: Url,
}

impl Client {
    /// Creates a new `Client` from its required configuration parameters.
    pub fn new(config: ClientConfig) -> Result<Client, Error> {
        ClientBuilder::default().build(config)
    }

    /// Creates a builder for a `Client` that allows for customization of
    /// optional parameters.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    fn build_request<P>(&self, method: Method, path: P) -> Result<RequestBuilder, Error>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| UrlError {
                input: self.endpoint.to_string(),
                kind: UrlErrorKind::CannotBeABase,
            })?
            .pop_if_empty()
            .extend(path);
        Ok(self.request_url(method, url))
    }

    fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        self.inner
            .request(method, url)
            .bearer_auth(&self.token)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .header(API_VERSION_HEADER, API_VERSION)
    }

    /// Builds a GET request for `{root}/{login}/settings/billing/{resource}`.
    fn build_billing_request(&self, owner: Owner, resource: &str) -> Result<RequestBuilder, Error> {
        let login = util::path_segment(owner.login())?;
        self.build_request(
            Method::GET,
            [owner.root(resource), &*login, "settings", "billing", resource],
        )
    }

    async fn send_request<T>(&self, req: RequestBuilder) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
    {
        let req = build(req)?;
        self.execute_request(req).await
    }

    async fn execute_request<T>(&self, req: Request) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
    {
        #[derive(Deserialize)]
        struct ErrorResponse {
            message: String,
            #[serde(default)]
            documentation_url: Option<String>,
            #[serde(default)]
            errors: Vec<ApiErrorDetail>,
        }

        debug!(method = %req.method(), url = %req.url(), "sending request");
        let res = self.inner.execute(req).await?;
        let status_code = res.status();
        let headers = res.headers().clone();
        let body = res.bytes().await?;
        debug!(%status_code, len = body.len(), "received response");
        if status_code.is_success() {
            let data = serde_json::from_slice(&body).map_err(|source| Error::Decode {
                status_code,
                source,
            })?;
            Ok(Response {
                data,
                meta: ResponseMeta::new(status_code, headers),
            })
        } else {
            match serde_json::from_slice::<ErrorResponse>(&body) {
                Ok(e) => Err(Error::Api(ApiError {
                    status_code,
                    headers,
                    message: e.message,
                    documentation_url: e.documentation_url,
                    errors: e.errors,
                })),
                Err(e) => {
                    let body = String::from_utf8_lossy(&body);
                    warn!(%status_code, error = %e, %body, "undecodable API error response");
                    Err(Error::Api(ApiError {
                        status_code,
                        headers,
                        message: body.into_owned(),
                        documentation_url: None,
                        errors: vec![],
                    }))
                }
            }
        }
    }

    /// Sends `req` and each page advertised by a `Link: rel="next"` header in
    /// turn, yielding the items that `items` extracts from every page.
    ///
    /// Only links on the configured endpoint's origin are followed, and a
    /// link back to the page just fetched ends the stream.
    fn stream_paginated_request<'a, P, T, F>(
        &'a self,
        req: RequestBuilder,
        items: F,
    ) -> impl Stream<Item = Result<T, Error>> + 'a
    where
        P: DeserializeOwned + 'a,
        T: 'a,
        F: Fn(P) -> Vec<T> + 'a,
    {
        try_stream! {
            let mut next = Some(build(req)?);
            while let Some(req) = next.take() {
                let url = req.url().clone();
                let res: Response<P> = self.execute_request(req).await?;
                match res.meta.pagination.next_url {
                    Some(next_url) if next_url == url => {
                        warn!(url = %next_url, "next page link refers to the current page");
                    }
                    Some(next_url) if next_url.origin() != self.endpoint.origin() => {
                        warn!(url = %next_url, "not following next page link to another origin");
                    }
                    Some(next_url) => {
                        next = Some(build(self.request_url(Method::GET, next_url))?);
                    }
                    None => (),
                }
                for datum in items(res.data) {
                    yield datum;
                }
            }
        }
    }
}

fn build(req: RequestBuilder) -> Result<Request, Error> {
    req.build().map_err(|e| Error::InvalidRequest {
        detail: e.to_string(),
    })
}
