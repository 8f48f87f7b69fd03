pub(crate) mod path;
pub(crate) mod text;

pub use path::FillPathCmd;
pub use text::TextCmd;
