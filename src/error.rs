//! Typed errors for the analysis engine

use thiserror::Error;

/// Errors raised at the validated entry points of the pipeline.
///
/// Validation happens when data enters the engine (ingestion, graph
/// construction, simulation). Once a graph exists, downstream stages
/// assume a well-formed input and do not re-validate.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No interaction data was supplied.
    #[error("no interaction data supplied")]
    MissingInput,

    /// An input record is missing or malforms a required field.
    #[error("interaction records are missing required field `{field}`")]
    Schema { field: String },

    /// A simulation was requested without a baseline graph.
    #[error("no baseline graph supplied for simulation")]
    MissingBaseline,

    /// The simulation target is not a member of the baseline graph.
    #[error("member `{member_id}` is not present in the graph ({member_count} members total)")]
    MemberNotFound {
        member_id: String,
        member_count: usize,
    },

    /// Aggregation produced no usable pairs, so no graph can be built.
    #[error("aggregated interaction set is empty; cannot build a graph")]
    DegenerateInput,
}
