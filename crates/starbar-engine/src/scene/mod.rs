//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod image_cmd;
mod key;
mod list;
mod z_index;

pub use cmd::DrawCmd;
pub use image_cmd::{ImageCmd, ImageHandle};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
