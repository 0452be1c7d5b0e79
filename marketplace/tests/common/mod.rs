//! Test helper module for marketplace integration tests.

#![allow(dead_code)]

use access::Role;
use chrono::{Duration, Utc};
use forwarding_core::store::MemoryStore;
use marketplace::models::{CreatePackage, CreateRoute, CreateUser};
use marketplace::Directory;
use rust_decimal::Decimal;
use std::sync::Arc;
use tariff::ServiceLevel;
use uuid::Uuid;

/// Directory backed by a fresh in-memory store.
pub fn new_directory() -> Directory {
    Directory::new(Arc::new(MemoryStore::new()))
}

pub fn sample_user(email: &str, role: Role) -> CreateUser {
    CreateUser {
        full_name: "Awa Ndiaye".to_string(),
        email: email.to_string(),
        phone: Some("+221770000000".to_string()),
        role,
    }
}

pub fn sample_package(sender_id: Uuid) -> CreatePackage {
    CreatePackage {
        sender_id,
        description: "Two boxes of fabric".to_string(),
        weight_kg: 12.0,
        dimensions: None,
        service_level: ServiceLevel::Maritime,
        origin: "paris".to_string(),
        destination: "dakar".to_string(),
        declared_value: Decimal::from(45_000),
    }
}

pub fn sample_route(transporter_id: Uuid) -> CreateRoute {
    let departure = Utc::now() + Duration::days(7);
    CreateRoute {
        transporter_id,
        origin: "paris".to_string(),
        destination: "dakar".to_string(),
        departure_utc: departure,
        arrival_utc: departure + Duration::hours(8),
        capacity_kg: 23.0,
        price_per_kg: Decimal::from(6_000),
    }
}
