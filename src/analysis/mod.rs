//! Query classification and canned response selection.
//!
//! Nothing here touches the filesystem: `select_response` returns the
//! artifacts to write and the storage layer persists them.

pub mod classify;
pub mod selector;
pub mod templates;
pub mod types;

pub use classify::classify_query;
pub use selector::{select_response, Chooser, FixedChooser, RandomChooser};
pub use types::{Classification, EndpointHint, FileLinks, QueryComplexity, QueryOutcome};
