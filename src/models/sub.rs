//! Smaller object kinds: rulings, catalogs, bulk data, migrations, errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::object::{ApiObject, Kind};

// ---------------------------------------------------------------------------
// Ruling — kind "ruling"
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruling {
    pub oracle_id: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<String>,
    pub comment: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for Ruling {
    const KIND: Kind = Kind::Ruling;
}

// ---------------------------------------------------------------------------
// Catalog — kind "catalog"
// ---------------------------------------------------------------------------

/// A flat string listing such as `/catalog/card-names`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub uri: Option<String>,
    pub total_values: Option<u64>,
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for Catalog {
    const KIND: Kind = Kind::Catalog;
}

// ---------------------------------------------------------------------------
// BulkData — kind "bulk_data"
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkData {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub bulk_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub updated_at: Option<String>,
    pub uri: Option<String>,
    pub download_uri: Option<String>,
    pub size: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for BulkData {
    const KIND: Kind = Kind::BulkData;
}

// ---------------------------------------------------------------------------
// Migration — kind "migration"
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Migration {
    pub id: Option<String>,
    pub uri: Option<String>,
    pub performed_at: Option<String>,
    pub migration_strategy: Option<String>,
    pub old_scryfall_id: Option<String>,
    pub new_scryfall_id: Option<String>,
    pub note: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for Migration {
    const KIND: Kind = Kind::Migration;
}

// ---------------------------------------------------------------------------
// ApiError — kind "error"
// ---------------------------------------------------------------------------

/// The API's structured error payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: Option<String>,
    pub status: Option<u16>,
    pub details: Option<String>,
    pub warnings: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for ApiError {
    const KIND: Kind = Kind::Error;
}
