use std::fmt;

/// Errors produced while rasterizing or exporting a frame.
#[derive(Debug)]
pub enum RenderError {
    /// The target surface has no pixels.
    EmptySurface { width: u32, height: u32 },
    /// PNG encoding or writing failed.
    Encode(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptySurface { width, height } => {
                write!(f, "cannot rasterize onto a {width}x{height} surface")
            }
            RenderError::Encode(msg) => write!(f, "png export failed: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
