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

//! An async API client for the [GitHub] billing and usage reporting API.
//!
//! The client covers GitHub Actions minutes, GitHub Packages bandwidth,
//! shared storage, GitHub Advanced Security active committers and the
//! itemized usage report, for organizations and for users.
//!
//! ```no_run
//! # async fn example() -> Result<(), github_billing::Error> {
//! use github_billing::{Client, ClientConfig, UsageReportParams};
//!
//! let client = Client::new(ClientConfig {
//!     token: "ghp_...".into(),
//! })?;
//! let actions = client.get_actions_billing_org("octo-org").await?;
//! println!("{} minutes used", actions.data.total_minutes_used);
//!
//! let params = UsageReportParams::DEFAULT.year(2023).month(8);
//! let report = client.get_usage_report_org("octo-org", &params).await?;
//! for item in report.data.usage_items {
//!     println!("{:?}: {:?}", item.sku, item.net_amount);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Identifiers and parameters are validated before any request is sent; see
//! [`Error`] for how failures are classified.
//!
//! # See also
//!
//! Additional information is available in the [official GitHub billing API
//! documentation][official-api-docs].
//!
//! [GitHub]: https://github.com
//! [official-api-docs]: https://docs.github.com/en/rest/billing

#[warn(missing_debug_implementations, missing_docs)]
mod client;
mod config;
mod error;
mod response;
mod serde;
mod util;

pub use client::actions::{ActionBilling, MinutesUsedBreakdown};
pub use client::advanced_security::{
    ActiveCommitters, AdvancedSecurityCommittersBreakdown, RepositoryActiveCommitters,
};
pub use client::packages::PackageBilling;
pub use client::storage::StorageBilling;
pub use client::usage::{UsageItem, UsageReport, UsageReportParams};
pub use client::Client;
pub use config::{ClientBuilder, ClientConfig, ListParams};
pub use error::{ApiError, ApiErrorDetail, Error, UrlError, UrlErrorKind};
pub use response::{Pagination, Response, ResponseMeta};
