use std::fmt;

use cornerlabel_markup::ParseError;

use crate::resources::ResourceError;

/// Why a document could not be turned into a badge.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    Parse(ParseError),
    Resource(ResourceError),
    /// The root node names something other than a corner badge.
    UnknownWidget(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Parse(e) => write!(f, "parse error at {e}"),
            BuildError::Resource(e) => write!(f, "resource lookup failed: {e}"),
            BuildError::UnknownWidget(name) => {
                write!(f, "unknown widget {name:?}, expected CornerLabel")
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Parse(e) => Some(e),
            BuildError::Resource(e) => Some(e),
            BuildError::UnknownWidget(_) => None,
        }
    }
}

impl From<ParseError> for BuildError {
    fn from(e: ParseError) -> Self {
        BuildError::Parse(e)
    }
}

impl From<ResourceError> for BuildError {
    fn from(e: ResourceError) -> Self {
        BuildError::Resource(e)
    }
}
