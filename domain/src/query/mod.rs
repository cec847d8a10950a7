//! URL query-state handling.

pub mod query_state;

pub use query_state::{
    ASYNC_MARKER_PARAM, ASYNC_MARKER_VALUE, BaseUrl, QueryState, ReconciledUrl,
};
