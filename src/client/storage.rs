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

const SHARED_STORAGE: &str = "shared-storage";

/// Shared storage used by GitHub Actions artifacts and GitHub Packages.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageBilling {
    /// The number of days until the billing cycle resets.
    #[serde(default, skip_serializing_if = "crate::serde::is_zero_u64")]
    pub days_left_in_billing_cycle: u64,
    /// The estimated paid storage for the month, in gigabytes.
    #[serde(default, skip_serializing_if = "crate::serde::is_zero_f64")]
    pub estimated_paid_storage_for_month: f64,
    /// The estimated total storage for the month, in gigabytes.
    #[serde(default, skip_serializing_if = "crate::serde::is_zero_f64")]
    pub estimated_storage_for_month: f64,
}

impl Client {
    /// Gets the shared storage billing for an organization.
    pub async fn get_storage_billing_org(
        &self,
        org: &str,
    ) -> Result<Response<StorageBilling>, Error> {
        let req = self.build_billing_request(Owner::Org(org), SHARED_STORAGE)?;
        self.send_request(req).await
    }

    /// Gets the shared storage billing for a user.
    pub async fn get_storage_billing_user(
        &self,
        user: &str,
    ) -> Result<Response<StorageBilling>, Error> {
        let req = self.build_billing_request(Owner::User(user), SHARED_STORAGE)?;
        self.send_request(req).await
    }
}
