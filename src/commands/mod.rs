//! Command implementations
//!
//! Commands are grouped the way git groups them. Only user-facing
//! (`porcelain`) commands exist: the snapshot store has no object model to
//! expose through plumbing.

pub mod porcelain;
