//! Search orchestrator: concurrent fan-out, merge, dedup, ordering, truncation.
//!
//! Queries every provider adapter concurrently, recovers failed providers
//! to empty lists, merges in provider order, drops duplicate URLs, moves
//! the primary provider's results to the front and truncates.

pub mod aggregate;
pub mod dedup;
pub mod ordering;
