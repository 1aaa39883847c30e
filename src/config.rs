//! Configuration for the herd network analyzer

/// Tunable parameters for graph construction.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Edge distance assigned to the most frequently interacting pair
    pub min_length: f64,

    /// Edge distance assigned to a pair observed a single time
    pub max_length: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_length: 0.2,
            max_length: 2.0,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with custom edge-length bounds.
    pub fn new(min_length: f64, max_length: f64) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}
