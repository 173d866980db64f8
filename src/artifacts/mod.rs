//! Data formats and algorithms
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `index`: Index file format
//! - `log`: Log file format and head state
//! - `objects`: Commit records and ids
//! - `status`: Working directory status reconciliation

pub mod core;
pub mod index;
pub mod log;
pub mod objects;
pub mod status;
