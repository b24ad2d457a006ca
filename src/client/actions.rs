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

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::client::{Client, Owner};
use crate::error::Error;
use crate::response::Response;

const ACTIONS: &str = "actions";

/// Minutes used per runner operating system, keyed by labels such as
/// `UBUNTU`, `MACOS` and `WINDOWS`.
///
/// The set of labels is open-ended.
pub type MinutesUsedBreakdown = BTreeMap<String, u64>;

/// GitHub Actions usage for the current billing cycle.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActionBilling {
    /// The sum of the free and paid minutes used.
    #[serde(default, skip_serializing_if = "crate::serde::is_zero_f64")]
    pub total_minutes_used: f64,
    /// The paid minutes used.
    #[serde(default, skip_serializing_if = "crate::serde::is_zero_f64")]
    pub total_paid_minutes_used: f64,
    /// The minutes included in the account's plan.
    #[serde(default, skip_serializing_if = "crate::serde::is_zero_f64")]
    pub included_minutes: f64,
    /// Minutes used per runner operating system.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub minutes_used_breakdown: MinutesUsedBreakdown,
}

impl Client {
    /// Gets the GitHub Actions billing for an organization.
    pub async fn get_actions_billing_org(&self, org: &str) -> Result<Response<ActionBilling>, Error> {
        let req = self.build_billing_request(Owner::Org(org), ACTIONS)?;
        self.send_request(req).await
    }

    /// Gets the GitHub Actions billing for a user.
    pub async fn get_actions_billing_user(
        &self,
        user: &str,
    ) -> Result<Response<ActionBilling>, Error> {
        let req = self.build_billing_request(Owner::User(user), ACTIONS)?;
        self.send_request(req).await
    }
}
