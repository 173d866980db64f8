//! Core repository components
//!
//! This module contains the building blocks of a repository:
//!
//! - `database`: Per-commit snapshot directories
//! - `index`: Staging area
//! - `log`: Append-only commit history
//! - `repository`: Repository handle tying the areas together
//! - `workspace`: Working directory file system operations

pub(crate) mod database;
pub(crate) mod index;
pub(crate) mod log;
pub mod repository;
pub(crate) mod workspace;
