use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Churned,
    Prospect,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 3] = [
        CustomerStatus::Active,
        CustomerStatus::Churned,
        CustomerStatus::Prospect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Churned => "churned",
            CustomerStatus::Prospect => "prospect",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CustomerStatus::Active),
            "churned" => Ok(CustomerStatus::Churned),
            "prospect" => Ok(CustomerStatus::Prospect),
            _ => Err(()),
        }
    }
}

/// Garment measurements in centimeters. The only field on an order item that
/// stays editable after the order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomSize {
    pub chest: f64,
    pub waist: f64,
    pub hips: f64,
}

impl CustomSize {
    /// A measurement set is usable only if every field is a finite,
    /// non-negative number.
    pub fn is_valid(&self) -> bool {
        [self.chest, self.waist, self.hips]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_item_id: String,
    pub item_name: String,
    pub category: String,
    pub price: i64,
    pub custom_size: CustomSize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub order_date: DateTime<Utc>,
    // Sum of item prices, fixed when the order is created. Measurement edits
    // never touch it.
    pub total_amount: i64,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: CustomerStatus,
    pub revenue: i64,
    pub order_count: i64,
    pub last_order_date: Option<DateTime<Utc>>,
    pub orders: Vec<Order>,
}

/// Customer view for the dashboard table: aggregates only, never the owned
/// order sequence.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: CustomerStatus,
    pub revenue: i64,
    pub order_count: i64,
    pub last_order_date: Option<DateTime<Utc>>,
}

impl Customer {
    pub fn summary(&self) -> CustomerSummary {
        CustomerSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            status: self.status,
            revenue: self.revenue,
            order_count: self.order_count,
            last_order_date: self.last_order_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_from_str() {
        for status in CustomerStatus::ALL {
            assert_eq!(status.as_str().parse::<CustomerStatus>(), Ok(status));
        }
        assert!("gone".parse::<CustomerStatus>().is_err());
        assert!("Active".parse::<CustomerStatus>().is_err());
    }

    #[test]
    fn custom_size_rejects_negative_and_non_finite() {
        let valid = CustomSize {
            chest: 100.0,
            waist: 84.0,
            hips: 98.0,
        };
        assert!(valid.is_valid());
        assert!(CustomSize { chest: 0.0, ..valid }.is_valid());
        assert!(!CustomSize { waist: -1.0, ..valid }.is_valid());
        assert!(!CustomSize { chest: f64::NAN, ..valid }.is_valid());
        assert!(!CustomSize { hips: f64::INFINITY, ..valid }.is_valid());
    }
}
