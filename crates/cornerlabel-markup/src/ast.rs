/// Length unit attached to a dimension literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Unit {
    /// Device pixels.
    Px,
    /// Density-independent pixels, scaled by the display density.
    Dp,
    /// Scale-independent pixels, scaled by the user's font scale.
    Sp,
}

impl Unit {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "px" => Some(Unit::Px),
            "dp" | "dip" => Some(Unit::Dp),
            "sp" => Some(Unit::Sp),
            _ => None,
        }
    }
}

/// A reference into the host's resource tables: `@color/sale_red`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub kind: String,
    pub name: String,
}

/// A property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Ident(String),
    /// Unitless number. Interpreted as pixels where a length is expected.
    Number(f32),
    Dimension(f32, Unit),
    /// Packed `0xAARRGGBB`.
    Color(u32),
    Resource(ResourceRef),
}

impl Value {
    /// Short name of the value kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Ident(_) => "identifier",
            Value::Number(_) => "number",
            Value::Dimension(..) => "dimension",
            Value::Color(_) => "color",
            Value::Resource(_) => "resource reference",
        }
    }
}

/// `key: value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based line of the key.
    pub line: usize,
}

/// `Widget "content" { props }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub widget: String,
    pub content: Option<String>,
    pub props: Vec<Prop>,
}

impl Node {
    /// Looks up a property. When a key repeats, the last occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }
}

/// A parsed attribute document: exactly one widget node.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub node: Node,
}
