//! Interaction data ingestion

pub mod csv;

use serde::{Deserialize, Serialize};

/// One unordered pair of members with its aggregated interaction count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedPair {
    pub member_a: String,
    pub member_b: String,
    pub count: u32,
}
