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

use serde::{Deserialize, Serialize};

use crate::client::{Client, Owner};
use crate::error::Error;
use crate::response::Response;

const PACKAGES: &str = "packages";

/// GitHub Packages bandwidth for the current billing cycle, in gigabytes.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct PackageBilling {
    /// The sum of the free and paid bandwidth used.
    #[serde(default, skip_serializing_if = "crate::serde::is_zero_f64")]
    pub total_gigabytes_bandwidth_used: f64,
    /// The paid bandwidth used.
    #[serde(default, skip_serializing_if = "crate::serde::is_zero_f64")]
    pub total_paid_gigabytes_bandwidth_used: f64,
    /// The bandwidth included in the account's plan.
    #[serde(default, skip_serializing_if = "crate::serde::is_zero_f64")]
    pub included_gigabytes_bandwidth: f64,
}

impl Client {
    /// Gets the GitHub Packages billing for an organization.
    pub async fn get_packages_billing_org(
        &self,
        org: &str,
    ) -> Result<Response<PackageBilling>, Error> {
        let req = self.build_billing_request(Owner::Org(org), PACKAGES)?;
        self.send_request(req).await
    }

    /// Gets the GitHub Packages billing for a user.
    pub async fn get_packages_billing_user(
        &self,
        user: &str,
    ) -> Result<Response<PackageBilling>, Error> {
        let req = self.build_billing_request(Owner::User(user), PACKAGES)?;
        self.send_request(req).await
    }
}
