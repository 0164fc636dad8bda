use serde::{Deserialize, Serialize};
use std::fmt;

use super::draft::DevicePatch;
use super::status::DeviceStatus;
use crate::statistics::parse_price;

/// How the buyer paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    #[default]
    Cash,
    Card,
    #[serde(rename = "UPI")]
    Upi,
    Due,
}

impl PaymentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Card => "Card",
            PaymentMode::Upi => "UPI",
            PaymentMode::Due => "Due",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the stock-out flow collects at the counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetails {
    /// Asking price, decimal string.
    pub sell_price: String,
    /// Discount off the asking price, decimal string.
    #[serde(default)]
    pub discount: Option<String>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_contact: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub payment_mode: PaymentMode,
}

impl SaleDetails {
    /// `sell_price - discount`; unparseable inputs count as zero.
    pub fn final_price(&self) -> f64 {
        let sell = parse_price(&self.sell_price).unwrap_or(0.0);
        let discount = self
            .discount
            .as_deref()
            .and_then(parse_price)
            .unwrap_or(0.0);
        sell - discount
    }

    /// Builds the device patch that records this sale.
    ///
    /// `sale_date` is an ISO-8601 timestamp supplied by the caller's clock.
    /// Buyer contact and email always replace what registration recorded,
    /// blank when the buyer gave none.
    pub fn into_patch(self, sale_date: String) -> DevicePatch {
        let final_price = self.final_price();
        DevicePatch {
            status: Some(DeviceStatus::StockOut),
            sell_price: Some(final_price.to_string()),
            customer_name: Some(self.customer_name),
            customer_contact: Some(self.customer_contact.unwrap_or_default()),
            customer_email: Some(self.customer_email.unwrap_or_default()),
            sale_date: Some(sale_date),
            payment_mode: Some(self.payment_mode.as_str().to_string()),
            ..Default::default()
        }
    }
}
