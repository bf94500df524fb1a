//! Consolidated test utilities for kicad-lib-git
//!
//! Unified testing utilities for integration tests, focused on real git
//! repository scenarios built with the git CLI.

pub mod assertions;
pub mod fixtures;
pub mod repository;
