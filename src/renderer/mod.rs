//! Rendering module
//!
//! Turns a `GameState` into a flat list of draw commands. Actual pixels are
//! the host's job.

pub mod commands;
pub mod frame;
pub mod projection;

pub use commands::{Color, DrawCommand, colors};
pub use frame::{render, render_with_viewport};
pub use projection::{Slice, Viewport, project};
