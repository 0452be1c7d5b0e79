//! Route model - a transporter's published trip with spare baggage capacity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Route lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Open,
    Full,
    Completed,
    Cancelled,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Open => "open",
            RouteStatus::Full => "full",
            RouteStatus::Completed => "completed",
            RouteStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "full" => RouteStatus::Full,
            "completed" => RouteStatus::Completed,
            "cancelled" => RouteStatus::Cancelled,
            _ => RouteStatus::Open,
        }
    }
}

/// Published trip record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub route_id: Uuid,
    pub transporter_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_utc: DateTime<Utc>,
    pub arrival_utc: DateTime<Utc>,
    pub capacity_kg: f64,
    pub price_per_kg: Decimal,
    pub status: RouteStatus,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

impl Route {
    pub fn new(input: CreateRoute) -> Self {
        let now = Utc::now();
        Self {
            route_id: Uuid::new_v4(),
            transporter_id: input.transporter_id,
            origin: input.origin,
            destination: input.destination,
            departure_utc: input.departure_utc,
            arrival_utc: input.arrival_utc,
            capacity_kg: input.capacity_kg,
            price_per_kg: input.price_per_kg,
            status: RouteStatus::Open,
            created_utc: now,
            updated_utc: now,
        }
    }
}

/// Input for creating a route.
#[derive(Debug, Clone)]
pub struct CreateRoute {
    pub transporter_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_utc: DateTime<Utc>,
    pub arrival_utc: DateTime<Utc>,
    pub capacity_kg: f64,
    pub price_per_kg: Decimal,
}

/// Input for updating a route. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoute {
    pub departure_utc: Option<DateTime<Utc>>,
    pub arrival_utc: Option<DateTime<Utc>>,
    pub capacity_kg: Option<f64>,
    pub price_per_kg: Option<Decimal>,
    pub status: Option<RouteStatus>,
}
