use crate::paint::Color;
use crate::path::Path;
use crate::scene::{DrawCmd, DrawList};

/// Filled polygon payload. The path is already in device space.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: Path,
    pub color: Color,
}

impl DrawList {
    /// Records an anti-aliased, non-zero-winding fill of `path`.
    #[inline]
    pub fn push_fill_path(&mut self, path: Path, color: Color) {
        self.push(DrawCmd::FillPath(FillPathCmd { path, color }));
    }
}
