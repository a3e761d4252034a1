//! Item record shapes and the schema selector.
//!
//! Two incompatible record shapes exist and exactly one is served per
//! process: [`Item`] (simple) and [`StockItem`] (validated, with an embedded
//! [`Supplier`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Simple schema
// ---------------------------------------------------------------------------

/// A to-do style record. No field constraints beyond types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Item {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub is_done: bool,
}

// ---------------------------------------------------------------------------
// Validated schema
// ---------------------------------------------------------------------------

/// Supplier embedded in a [`StockItem`]. Has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Supplier {
    pub id: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// A priced stock record with an embedded supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StockItem {
    #[serde(default)]
    #[validate(length(max = 50))]
    pub name: Option<String>,
    #[serde(default)]
    pub in_stock: bool,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(nested)]
    pub supplier: Supplier,
}

/// Result of a validated-schema update: the replaced item plus who did it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockUpdate {
    pub item_id: i64,
    pub item: StockItem,
    pub updated_by: i64,
}

// ---------------------------------------------------------------------------
// Schema selector
// ---------------------------------------------------------------------------

const SCHEMA_SIMPLE: &str = "simple";
const SCHEMA_VALIDATED: &str = "validated";

/// Which record shape the process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSchema {
    #[default]
    Simple,
    Validated,
}

impl ItemSchema {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => SCHEMA_SIMPLE,
            Self::Validated => SCHEMA_VALIDATED,
        }
    }
}

impl fmt::Display for ItemSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            SCHEMA_SIMPLE => Ok(Self::Simple),
            SCHEMA_VALIDATED => Ok(Self::Validated),
            other => Err(format!(
                "Unknown item schema '{other}'. Valid schemas: {SCHEMA_SIMPLE}, {SCHEMA_VALIDATED}"
            )),
        }
    }
}
