// crates/geoip-core/src/common.rs
use std::collections::BTreeMap;

use serde::Serialize;

use crate::capability::{CapabilitySet, DatabaseVariant};

/// Summary of an opened database.
///
/// Returned by [`Reader::info`](crate::Reader::info); these values come from
/// the store's metadata and its classification at open time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseInfo {
    pub database_type: String,
    pub variant: DatabaseVariant,
    pub capabilities: CapabilitySet,
    pub node_count: u32,
    pub record_size: u16,
    pub ip_version: u16,
    pub build_epoch: u64,
    pub languages: Vec<String>,
    pub description: BTreeMap<String, String>,
}
