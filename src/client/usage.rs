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
use time::{Date, Month};

use crate::client::{Client, Owner};
use crate::error::Error;
use crate::response::Response;

pub(crate) const USAGE: &str = "usage";

/// An itemized billing usage report.
///
/// Unlike the other billing resources, the usage report uses camelCase
/// field names on the wire.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    /// The line items of the report.
    #[serde(default)]
    pub usage_items: Vec<UsageItem>,
}

/// One line of a [`UsageReport`].
///
/// Every field is optional so that an absent value can be told apart from a
/// reported zero or empty string.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageItem {
    /// The date of the usage, as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// The product, e.g. `Actions`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// The SKU, e.g. `Actions Linux`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// The quantity used, in units of [`UsageItem::unit_type`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// The unit of [`UsageItem::quantity`], e.g. `minutes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    /// The price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    /// The amount before discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<f64>,
    /// The discount applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    /// The amount after discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<f64>,
    /// The organization the usage is attributed to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    /// The repository the usage is attributed to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
}

/// Parameters for a usage report.
///
/// Each field narrows the report independently. Without a year the server
/// reports the current year; fields that are not set are not sent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UsageReportParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    day: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hour: Option<u8>,
}

impl UsageReportParams {
    /// The default usage report parameters, which set no filters.
    ///
    /// Exposed as a constant for use in constant evaluation contexts.
    pub const DEFAULT: UsageReportParams = UsageReportParams {
        year: None,
        month: None,
        day: None,
        hour: None,
    };

    /// Filters the report to a year, e.g. `2023`.
    pub const fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Filters the report to a month, from 1 to 12.
    pub const fn month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    /// Filters the report to a day of the month, from 1 to 31.
    pub const fn day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    /// Filters the report to an hour of the day, from 0 to 23.
    pub const fn hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Filters the report to a single month of a year.
    pub const fn month_of(self, year: i32, month: Month) -> Self {
        self.year(year).month(month as u8)
    }

    /// Filters the report to a single date.
    pub const fn date(self, date: Date) -> Self {
        self.year(date.year())
            .month(date.month() as u8)
            .day(date.day())
    }

    fn validate(&self) -> Result<(), Error> {
        for (name, value, range) in [
            ("month", self.month, 1..=12),
            ("day", self.day, 1..=31),
            ("hour", self.hour, 0..=23),
        ] {
            if let Some(value) = value {
                if !range.contains(&value) {
                    return Err(Error::InvalidRequest {
                        detail: format!(
                            "{name} must be between {} and {}, got {value}",
                            range.start(),
                            range.end()
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Client {
    /// Gets the billing usage report for an organization.
    pub async fn get_usage_report_org(
        &self,
        org: &str,
        params: &UsageReportParams,
    ) -> Result<Response<UsageReport>, Error> {
        self.get_usage_report(Owner::Org(org), params).await
    }

    /// Gets the billing usage report for a user.
    pub async fn get_usage_report_user(
        &self,
        user: &str,
        params: &UsageReportParams,
    ) -> Result<Response<UsageReport>, Error> {
        self.get_usage_report(Owner::User(user), params).await
    }

    async fn get_usage_report(
        &self,
        owner: Owner<'_>,
        params: &UsageReportParams,
    ) -> Result<Response<UsageReport>, Error> {
        let req = self.build_billing_request(owner, USAGE)?;
        params.validate()?;
        let req = req.query(params);
        self.send_request(req).await
    }
}
