//! Terminal presentation: board rendering for the `broadside` binary.

pub mod render;

pub use render::{describe_shot, fleet_status_lines, legend, side_by_side, Glyphs};
