//! Realignment settings
//!
//! The defaults reproduce the standard realignment pass: out-of-bounds
//! neighbors connect, neighbors one level up or down count, and only the top
//! surface of each column is touched.

use serde::{Deserialize, Serialize};

/// How a neighbor position outside the grid footprint is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryHandling {
    /// The path continues past the map edge
    #[default]
    Connected,
    /// The map edge ends the path
    Disconnected,
}

/// Settings for the grid realignment pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealignSettings {
    /// Treatment of neighbors outside the footprint
    pub out_of_bounds: BoundaryHandling,
    /// How many levels above and below a neighbor column are probed
    pub height_tolerance: u32,
    /// Only realign the topmost occupied cell of each column
    pub top_surface_only: bool,
}

impl Default for RealignSettings {
    fn default() -> Self {
        Self {
            out_of_bounds: BoundaryHandling::Connected,
            height_tolerance: 1,
            top_surface_only: true,
        }
    }
}

impl RealignSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set boundary handling
    pub fn with_out_of_bounds(mut self, handling: BoundaryHandling) -> Self {
        self.out_of_bounds = handling;
        self
    }

    /// Set height tolerance
    pub fn with_height_tolerance(mut self, levels: u32) -> Self {
        self.height_tolerance = levels;
        self
    }

    /// Realign every occupied path cell, not just the top surface
    pub fn with_all_layers(mut self) -> Self {
        self.top_surface_only = false;
        self
    }

    pub(crate) fn boundary_connects(&self) -> bool {
        self.out_of_bounds == BoundaryHandling::Connected
    }
}
