use std::cell::Cell;
use std::rc::Rc;

/// Shared "please repaint" flag between a widget and its host.
///
/// Widgets raise it from their style setters; the host takes it once per
/// frame. Cloning shares the flag. Not `Send`: all mutation happens on the
/// thread that paints.
#[derive(Debug, Clone, Default)]
pub struct RedrawHandle(Rc<Cell<bool>>);

impl RedrawHandle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_requested(&self) -> bool {
        self.0.get()
    }

    /// Returns whether a redraw was requested and clears the flag.
    #[inline]
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}
