//! Error types for world construction

use std::fmt;

use crate::world::MIN_REGIONS;

/// Errors that can occur while building a world
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Fewer regions were requested than a sphere tessellation needs
    InsufficientRegions(usize),
    /// The Voronoi diagram or its relaxation could not be built
    DiagramConstructionFailed(String),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            WorldError::InsufficientRegions(requested) => write!(
                f,
                "insufficient regions for world: {} requested, minimum {} required",
                requested, MIN_REGIONS
            ),
            WorldError::DiagramConstructionFailed(msg) => {
                write!(f, "diagram construction failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for WorldError {}

/// Result type alias for world operations
pub type Result<T> = std::result::Result<T, WorldError>;
