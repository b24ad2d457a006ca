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

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;

/// An error returned by a [`Client`].
///
/// [`Client`]: crate::Client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A URL could not be constructed from the supplied identifier or
    /// endpoint. No request was sent.
    #[error("invalid URL: {0}")]
    InvalidUrl(UrlError),
    /// The request could not be constructed from the supplied parameters.
    /// No request was sent.
    #[error("invalid request: {detail}")]
    InvalidRequest {
        /// A description of the problem.
        detail: String,
    },
    /// An error in the underlying transport.
    #[error("transport error: {0}")]
    Transport(reqwest_middleware::Error),
    /// An error returned by the API.
    #[error("API error: {0}")]
    Api(ApiError),
    /// A successful response whose body did not match the expected shape.
    #[error("unable to decode response with status {status_code}: {source}")]
    Decode {
        /// The HTTP status code of the response.
        status_code: StatusCode,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Reports whether the failed call may succeed if attempted again.
    ///
    /// Transport failures, rate limiting and server errors are retryable.
    /// Invalid input, client errors and decoding failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Api(e) => {
                e.status_code.is_server_error() || e.status_code == StatusCode::TOO_MANY_REQUESTS
            }
            Error::InvalidUrl(_) | Error::InvalidRequest { .. } | Error::Decode { .. } => false,
        }
    }
}

/// The reason a URL could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlError {
    /// The offending input.
    pub input: String,
    /// What was wrong with it.
    pub kind: UrlErrorKind,
}

/// The kind of a [`UrlError`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlErrorKind {
    /// The identifier was empty.
    Empty,
    /// The identifier contained an ASCII control character.
    ControlCharacter,
    /// The identifier contained a `%` that does not begin a valid escape.
    InvalidEscape,
    /// The identifier was `.` or `..`, which cannot name a path segment.
    DotSegment,
    /// The configured endpoint cannot have path segments appended.
    CannotBeABase,
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            UrlErrorKind::Empty => "identifier is empty",
            UrlErrorKind::ControlCharacter => "contains a control character",
            UrlErrorKind::InvalidEscape => "invalid percent escape",
            UrlErrorKind::DotSegment => "identifier is a dot segment",
            UrlErrorKind::CannotBeABase => "cannot be a base URL",
        };
        write!(f, "{:?}: {reason}", self.input)
    }
}

impl std::error::Error for UrlError {}

/// An error returned by the GitHub API.
///
/// For details, see: <https://docs.github.com/en/rest/using-the-rest-api/troubleshooting-the-rest-api>
#[derive(Debug, Clone)]
pub struct ApiError {
    /// The HTTP status code.
    pub status_code: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// A human-readable description of the error.
    pub message: String,
    /// A link to documentation about the failed endpoint.
    pub documentation_url: Option<String>,
    /// Field-level errors, typically from request validation.
    pub errors: Vec<ApiErrorDetail>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status_code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// A single entry of [`ApiError::errors`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ApiErrorDetail {
    /// The resource the error applies to.
    pub resource: Option<String>,
    /// The field the error applies to.
    pub field: Option<String>,
    /// A machine-readable error code, such as `missing_field`.
    pub code: Option<String>,
    /// A human-readable description.
    pub message: Option<String>,
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Transport(reqwest_middleware::Error::Reqwest(e))
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Error {
        Error::Transport(e)
    }
}

impl From<ApiError> for Error {
    fn from(e: ApiError) -> Error {
        Error::Api(e)
    }
}

impl From<UrlError> for Error {
    fn from(e: UrlError) -> Error {
        Error::InvalidUrl(e)
    }
}
