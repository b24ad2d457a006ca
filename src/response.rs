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

use reqwest::header::{HeaderMap, LINK};
use reqwest::{StatusCode, Url};

/// A decoded API response.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response body.
    pub data: T,
    /// Metadata about the HTTP response that carried `data`.
    pub meta: ResponseMeta,
}

impl<T> Response<T> {
    /// Discards the response metadata and returns the decoded body.
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Metadata about an HTTP response.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// The HTTP status code.
    pub status_code: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// Pagination links parsed from the `Link` header.
    pub pagination: Pagination,
}

impl ResponseMeta {
    pub(crate) fn new(status_code: StatusCode, headers: HeaderMap) -> ResponseMeta {
        let pagination = headers
            .get_all(LINK)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .fold(Pagination::default(), |mut pagination, v| {
                pagination.merge_link_header(v);
                pagination
            });
        ResponseMeta {
            status_code,
            headers,
            pagination,
        }
    }
}

/// Pagination links advertised by a response.
///
/// Page numbers come from the `page` query parameter of each link and
/// cursors from the `after` and `before` parameters. Relations that the
/// response did not advertise are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// The page number of the next page.
    pub next_page: Option<u64>,
    /// The page number of the previous page.
    pub prev_page: Option<u64>,
    /// The page number of the first page.
    pub first_page: Option<u64>,
    /// The page number of the last page.
    pub last_page: Option<u64>,
    /// The cursor for the next page, for cursor-paginated endpoints.
    pub next_cursor: Option<String>,
    /// The cursor for the previous page, for cursor-paginated endpoints.
    pub prev_cursor: Option<String>,
    /// The full URL of the next page.
    pub next_url: Option<Url>,
}

impl Pagination {
    fn merge_link_header(&mut self, header: &str) {
        // Link targets may contain commas, so each link is located by its
        // `<...>` target rather than by splitting the header on commas.
        let mut rest = header;
        while let Some(start) = rest.find('<') {
            let Some(end) = rest[start..].find('>').map(|end| start + end) else {
                break;
            };
            let target = &rest[start + 1..end];
            let params = &rest[end + 1..];
            let params_end = params.find('<').unwrap_or(params.len());
            rest = &params[params_end..];
            let Ok(url) = Url::parse(target.trim()) else {
                continue;
            };
            let page = url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .and_then(|(_, v)| v.parse().ok());
            let cursor = |key: &str| {
                url.query_pairs()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.into_owned())
            };
            for param in params[..params_end].split(';') {
                let param = param.trim().trim_end_matches(',').trim_end();
                let Some(rel) = param.strip_prefix("rel=") else {
                    continue;
                };
                for rel in rel.trim_matches('"').split_whitespace() {
                    match rel {
                        "next" => {
                            self.next_page = page;
                            self.next_cursor = cursor("after");
                            self.next_url = Some(url.clone());
                        }
                        "prev" => {
                            self.prev_page = page;
                            self.prev_cursor = cursor("before");
                        }
                        "first" => self.first_page = page,
                        "last" => self.last_page = page,
                        _ => (),
                    }
                }
            }
        }
    }
}
