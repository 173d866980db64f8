//! Working directory status
//!
//! This module classifies files by comparing three sets: the staging index,
//! the files of the last commit and the top level of the working directory.
//!
//! ## Components
//!
//! - `file_change`: Categories a listed file can fall into
//! - `status_info`: Reconciliation of the three sets and modification checks

pub mod file_change;
pub mod status_info;
