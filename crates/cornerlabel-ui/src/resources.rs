use std::collections::HashMap;
use std::fmt;

use cornerlabel_engine::paint::Color;

/// Integer handle into the host's resource tables.
pub type ResourceId = u32;

/// Kinds of resources a badge consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Color,
    String,
}

impl ResourceKind {
    /// Parses the `kind` part of an `@kind/name` reference.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "color" => Some(ResourceKind::Color),
            "string" => Some(ResourceKind::String),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Color => "color",
            ResourceKind::String => "string",
        })
    }
}

/// Errors from resource resolution. Badges never swallow these.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceError {
    UnknownId { kind: ResourceKind, id: ResourceId },
    UnknownName { kind: String, name: String },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::UnknownId { kind, id } => {
                write!(f, "no {kind} resource with id {id:#x}")
            }
            ResourceError::UnknownName { kind, name } => {
                write!(f, "no resource named @{kind}/{name}")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

/// Host-provided lookup of colors and strings by id or by name.
pub trait ResourceResolver {
    fn color(&self, id: ResourceId) -> Result<Color, ResourceError>;
    fn string(&self, id: ResourceId) -> Result<String, ResourceError>;
    /// Resolves an `@kind/name` reference to an id.
    fn lookup(&self, kind: ResourceKind, name: &str) -> Result<ResourceId, ResourceError>;
}

/// In-memory resource tables.
///
/// # Example
/// ```rust
/// use cornerlabel_ui::resources::{ResourceKind, ResourceResolver, ResourceTable};
/// use cornerlabel_engine::paint::Color;
///
/// let table = ResourceTable::new().with_color("sale", Color::red());
/// let id = table.lookup(ResourceKind::Color, "sale").unwrap();
/// assert_eq!(table.color(id).unwrap(), Color::red());
/// ```
#[derive(Debug, Default)]
pub struct ResourceTable {
    colors: HashMap<ResourceId, Color>,
    strings: HashMap<ResourceId, String>,
    names: HashMap<(ResourceKind, String), ResourceId>,
    next_id: ResourceId,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self { next_id: 0x7f01_0000, ..Self::default() }
    }

    pub fn add_color(&mut self, name: impl Into<String>, color: Color) -> ResourceId {
        let id = self.allocate(ResourceKind::Color, name.into());
        self.colors.insert(id, color);
        id
    }

    pub fn add_string(&mut self, name: impl Into<String>, value: impl Into<String>) -> ResourceId {
        let id = self.allocate(ResourceKind::String, name.into());
        self.strings.insert(id, value.into());
        id
    }

    pub fn with_color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.add_color(name, color);
        self
    }

    pub fn with_string(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_string(name, value);
        self
    }

    /// Re-adding a name replaces the value under the same id.
    fn allocate(&mut self, kind: ResourceKind, name: String) -> ResourceId {
        if let Some(&id) = self.names.get(&(kind, name.clone())) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.names.insert((kind, name), id);
        id
    }
}

impl ResourceResolver for ResourceTable {
    fn color(&self, id: ResourceId) -> Result<Color, ResourceError> {
        self.colors
            .get(&id)
            .copied()
            .ok_or(ResourceError::UnknownId { kind: ResourceKind::Color, id })
    }

    fn string(&self, id: ResourceId) -> Result<String, ResourceError> {
        self.strings
            .get(&id)
            .cloned()
            .ok_or(ResourceError::UnknownId { kind: ResourceKind::String, id })
    }

    fn lookup(&self, kind: ResourceKind, name: &str) -> Result<ResourceId, ResourceError> {
        self.names.get(&(kind, name.to_string())).copied().ok_or_else(|| {
            ResourceError::UnknownName { kind: kind.to_string(), name: name.to_string() }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_per_entry() {
        let mut t = ResourceTable::new();
        let a = t.add_color("a", Color::red());
        let b = t.add_string("a", "label");
        assert_ne!(a, b);
        assert_eq!(t.string(b).unwrap(), "label");
    }

    #[test]
    fn re_adding_a_name_keeps_its_id() {
        let mut t = ResourceTable::new();
        let first = t.add_color("bg", Color::red());
        let second = t.add_color("bg", Color::white());
        assert_eq!(first, second);
        assert_eq!(t.color(first).unwrap(), Color::white());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let t = ResourceTable::new();
        assert_eq!(
            t.color(7),
            Err(ResourceError::UnknownId { kind: ResourceKind::Color, id: 7 })
        );
    }

    #[test]
    fn wrong_kind_lookup_fails() {
        let t = ResourceTable::new().with_string("new_label", "NEW");
        assert!(t.lookup(ResourceKind::Color, "new_label").is_err());
        assert!(t.lookup(ResourceKind::String, "new_label").is_ok());
    }
}
