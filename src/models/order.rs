//! Order records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Badge classes for the status pill
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "bg-yellow-600",
            OrderStatus::Shipped => "bg-primary-400",
            OrderStatus::Delivered => "bg-green-600",
            OrderStatus::Cancelled => "bg-red-600",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub placed_on: NaiveDate,
    /// Total in cents
    pub total_cents: u64,
    pub status: OrderStatus,
}

impl Order {
    fn new(id: &str, customer: &str, placed_on: (i32, u32, u32), total_cents: u64, status: OrderStatus) -> Self {
        let (y, m, d) = placed_on;
        Self {
            id: id.to_string(),
            customer: customer.to_string(),
            placed_on: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
            total_cents,
            status,
        }
    }

    pub fn total_display(&self) -> String {
        format!("${}.{:02}", self.total_cents / 100, self.total_cents % 100)
    }

    pub fn placed_display(&self) -> String {
        self.placed_on.format("%b %d, %Y").to_string()
    }
}

pub fn demo_orders() -> Vec<Order> {
    vec![
        Order::new("1001", "Acme Corp", (2024, 3, 4), 129_900, OrderStatus::Delivered),
        Order::new("1002", "Globex", (2024, 3, 11), 45_050, OrderStatus::Shipped),
        Order::new("1003", "Initech", (2024, 3, 18), 8_999, OrderStatus::Pending),
        Order::new("1004", "Umbrella", (2024, 3, 20), 310_000, OrderStatus::Cancelled),
    ]
}

/// Look up a demo order by id
pub fn find_order(id: &str) -> Option<Order> {
    demo_orders().into_iter().find(|o| o.id == id)
}
