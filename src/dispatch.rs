//! Plot Route Dispatch
//!
//! A static routing table that selects a rendering routine from the
//! dimensionality of a problem. The table is keyed on the pair of input
//! dimensionality and whether the output dimensionality resolves to exactly
//! one; every combination without a mapped routine yields [`PlotRoute::NoOp`]
//! rather than an error, and callers treat that as a valid silent no-op.

use serde::{Deserialize, Serialize};

/// Dimensionality descriptor of a problem to be plotted.
///
/// The optional output-dimension selection is an explicit field resolved at
/// construction; when present it overrides `output_dims` for routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDescriptor {
    /// Number of input dimensions
    pub input_dims: usize,
    /// Number of output dimensions
    pub output_dims: usize,
    /// Optional subset of output dimensions selected for rendering
    pub output_select: Option<Vec<usize>>,
}

impl ProblemDescriptor {
    /// Create a descriptor with no output selection.
    pub fn new(input_dims: usize, output_dims: usize) -> Self {
        Self {
            input_dims,
            output_dims,
            output_select: None,
        }
    }

    /// Restrict rendering to a subset of output dimensions.
    pub fn with_output_select(mut self, select: Vec<usize>) -> Self {
        self.output_select = Some(select);
        self
    }

    /// Output dimensionality after applying the optional selection.
    pub fn resolved_output_dims(&self) -> usize {
        match &self.output_select {
            Some(select) => select.len(),
            None => self.output_dims,
        }
    }
}

/// A rendering routine selected by [`route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotRoute {
    /// 1D input, single output: line plot
    Line1d,
    /// 2D input, single output: surface plot
    Surface2d,
    /// 3D input, single output: volume slices
    Volume3d,
    /// 2D input, multiple outputs: per-component surface grid
    Multi2d,
    /// 3D input, multiple outputs: per-component volume slices
    Multi3d,
    /// No routine mapped for this dimensionality; render nothing
    NoOp,
}

impl PlotRoute {
    /// Whether this route renders anything at all.
    pub fn is_noop(&self) -> bool {
        matches!(self, PlotRoute::NoOp)
    }
}

/// Select a rendering routine for the given problem.
///
/// Keyed on `(input_dims, resolved_output_dims == 1)`. Unmapped
/// combinations (input dimensionality above 3, or multi-output 1D
/// problems) return [`PlotRoute::NoOp`].
pub fn route(desc: &ProblemDescriptor) -> PlotRoute {
    if desc.resolved_output_dims() == 1 {
        match desc.input_dims {
            1 => PlotRoute::Line1d,
            2 => PlotRoute::Surface2d,
            3 => PlotRoute::Volume3d,
            _ => PlotRoute::NoOp,
        }
    } else {
        match desc.input_dims {
            2 => PlotRoute::Multi2d,
            3 => PlotRoute::Multi3d,
            _ => PlotRoute::NoOp,
        }
    }
}
