//! Scene (draw stream) types.
//!
//! Commands are stored and painted in the order they were recorded; the
//! painter emits back-to-front. Shape-specific payloads and push helpers live
//! under `scene::shapes`, one file per shape.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::{FillPathCmd, TextCmd};
