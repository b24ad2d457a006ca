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

use futures_core::Stream;
use serde::{Deserialize, Serialize};

use crate::client::{Client, Owner};
use crate::config::ListParams;
use crate::error::Error;
use crate::response::Response;

const ADVANCED_SECURITY: &str = "advanced-security";

/// Active committers counted against GitHub Advanced Security licenses.
///
/// The endpoint is paginated over [`ActiveCommitters::repositories`]; the
/// totals describe the whole organization on every page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ActiveCommitters {
    /// The number of unique committers across all repositories.
    #[serde(default)]
    pub total_advanced_security_committers: u64,
    /// The total number of repositories with active committers.
    #[serde(default)]
    pub total_count: u64,
    /// The maximum number of committers seen during the billing cycle.
    #[serde(default)]
    pub maximum_advanced_security_committers: u64,
    /// The number of committer seats purchased.
    #[serde(default)]
    pub purchased_advanced_security_committers: u64,
    /// The repositories on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<RepositoryActiveCommitters>,
}

/// Active committers for one repository.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RepositoryActiveCommitters {
    /// The full name of the repository, e.g. `octo-org/Hello-World`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The number of active committers in the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_security_committers: Option<u64>,
    /// The individual committers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advanced_security_committers_breakdown: Vec<AdvancedSecurityCommittersBreakdown>,
}

/// A single active committer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct AdvancedSecurityCommittersBreakdown {
    /// The committer's login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_login: Option<String>,
    /// The date of the committer's most recent push, as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_pushed_date: Option<String>,
}

impl Client {
    /// Gets one page of GitHub Advanced Security active committers for an
    /// organization.
    pub async fn get_advanced_security_active_committers_org(
        &self,
        org: &str,
        params: &ListParams,
    ) -> Result<Response<ActiveCommitters>, Error> {
        let req = self.build_billing_request(Owner::Org(org), ADVANCED_SECURITY)?;
        params.validate()?;
        let req = req.query(params);
        self.send_request(req).await
    }

    /// Streams the repositories with GitHub Advanced Security active
    /// committers in an organization.
    ///
    /// The underlying API call is paginated. The returned stream starts at
    /// the page selected by `params` and fetches additional pages as it is
    /// consumed.
    pub fn stream_advanced_security_repositories_org<'a>(
        &'a self,
        org: &'a str,
        params: &'a ListParams,
    ) -> impl Stream<Item = Result<RepositoryActiveCommitters, Error>> + 'a {
        async_stream::try_stream! {
            let req = self.build_billing_request(Owner::Org(org), ADVANCED_SECURITY)?;
            params.validate()?;
            let req = req.query(params);
            let pages = self.stream_paginated_request(req, |page: ActiveCommitters| page.repositories);
            for await repository in pages {
                yield repository?;
            }
        }
    }
}
