//! Progress reporting for extractions

pub mod reporter;
