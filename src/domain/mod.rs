//! Core domain models for depver
//!
//! This module contains the fundamental types used throughout the application:
//! - Library coordinates in the repository's addressing scheme
//! - Dependency declarations as extracted from the build script
//! - Resolution results and the aggregated report

mod coordinate;
mod declaration;
mod report;

pub use coordinate::Coordinate;
pub use declaration::LibraryDeclaration;
pub use report::{CheckReport, FailureKind, ResolvedVersion, VersionResult, NOT_FOUND};
