//! Package model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tariff::{Dimensions, ServiceLevel};
use uuid::Uuid;

/// Shipment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    Draft,
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl PackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Draft => "draft",
            PackageStatus::Pending => "pending",
            PackageStatus::InTransit => "in_transit",
            PackageStatus::Delivered => "delivered",
            PackageStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "pending" => PackageStatus::Pending,
            "in_transit" => PackageStatus::InTransit,
            "delivered" => PackageStatus::Delivered,
            "cancelled" => PackageStatus::Cancelled,
            _ => PackageStatus::Draft,
        }
    }
}

/// Shipment record filed by a sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub package_id: Uuid,
    pub sender_id: Uuid,
    pub description: String,
    pub weight_kg: f64,
    pub dimensions: Option<Dimensions>,
    pub service_level: ServiceLevel,
    pub origin: String,
    pub destination: String,
    pub declared_value: Decimal,
    pub status: PackageStatus,
    pub tracking_code: String,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

impl Package {
    /// Create a new draft shipment with a fresh tracking code.
    pub fn new(input: CreatePackage) -> Self {
        let now = Utc::now();
        let package_id = Uuid::new_v4();
        Self {
            package_id,
            sender_id: input.sender_id,
            description: input.description,
            weight_kg: input.weight_kg,
            dimensions: input.dimensions,
            service_level: input.service_level,
            origin: input.origin,
            destination: input.destination,
            declared_value: input.declared_value,
            status: PackageStatus::Draft,
            tracking_code: tracking_code_for(package_id),
            created_utc: now,
            updated_utc: now,
        }
    }
}

/// Short human-readable tracking code derived from the package id.
fn tracking_code_for(package_id: Uuid) -> String {
    let simple = package_id.simple().to_string();
    format!("CLS-{}", simple[..8].to_uppercase())
}

/// Input for creating a package.
#[derive(Debug, Clone)]
pub struct CreatePackage {
    pub sender_id: Uuid,
    pub description: String,
    pub weight_kg: f64,
    pub dimensions: Option<Dimensions>,
    pub service_level: ServiceLevel,
    pub origin: String,
    pub destination: String,
    pub declared_value: Decimal,
}

/// Input for updating a package. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePackage {
    pub description: Option<String>,
    pub weight_kg: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub service_level: Option<ServiceLevel>,
    pub destination: Option<String>,
    pub declared_value: Option<Decimal>,
    pub status: Option<PackageStatus>,
}
