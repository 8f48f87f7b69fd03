use cornerlabel_engine::paint::Color;
use cornerlabel_engine::text::FontId;
use cornerlabel_markup::ast::{Document, Node, ResourceRef, Value};
use cornerlabel_markup::{parse_str, ParseError};

use crate::dsl::error::BuildError;
use crate::metrics::DisplayMetrics;
use crate::resources::{ResourceError, ResourceId, ResourceKind, ResourceResolver};
use crate::widgets::corner_badge::{BadgeConfig, CornerBadge, CornerPosition};

const WIDGET_NAMES: [&str; 2] = ["CornerLabel", "CornerBadge"];

const KNOWN_KEYS: [&str; 7] = [
    "position",
    "side_length",
    "text_size",
    "text_color",
    "text",
    "bg_color",
    "margin_lean_side",
];

// ── BuildCtx ──────────────────────────────────────────────────────────────

/// Host services a document is resolved against.
pub struct BuildCtx<'a> {
    pub metrics: DisplayMetrics,
    pub resources: &'a dyn ResourceResolver,
    /// Font the label is drawn with.
    pub font: FontId,
}

impl<'a> BuildCtx<'a> {
    pub fn new(resources: &'a dyn ResourceResolver) -> Self {
        Self { metrics: DisplayMetrics::default(), resources, font: FontId::default() }
    }

    pub fn metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }
}

// ── BadgeLoader ───────────────────────────────────────────────────────────

/// Turns attribute documents into configured [`CornerBadge`]s.
pub struct BadgeLoader;

impl BadgeLoader {
    pub fn parse(src: &str) -> Result<Document, ParseError> {
        parse_str(src)
    }

    /// Parse and build in one step.
    pub fn load(src: &str, ctx: &BuildCtx) -> Result<CornerBadge, BuildError> {
        let doc = parse_str(src)?;
        Self::build(&doc, ctx)
    }

    pub fn build(doc: &Document, ctx: &BuildCtx) -> Result<CornerBadge, BuildError> {
        let node = &doc.node;
        if !WIDGET_NAMES.contains(&node.widget.as_str()) {
            return Err(BuildError::UnknownWidget(node.widget.clone()));
        }

        for prop in node.props.iter().filter(|p| !KNOWN_KEYS.contains(&p.key.as_str())) {
            log::debug!("ignoring unknown attribute {:?} on line {}", prop.key, prop.line);
        }

        let config = BadgeConfig {
            position: position(node),
            side_length: length(node, "side_length", ctx.metrics),
            text_size: length(node, "text_size", ctx.metrics),
            text_color: color(node, "text_color", ctx.resources)?,
            bg_color: color(node, "bg_color", ctx.resources)?,
            margin_lean_side: length(node, "margin_lean_side", ctx.metrics),
            text: text(node, ctx.resources)?,
        };

        let mut badge = CornerBadge::with_metrics(ctx.metrics).font(ctx.font);
        badge.configure(config);
        Ok(badge)
    }
}

// ── attribute readers ─────────────────────────────────────────────────────

fn mismatch(key: &str, expected: &str, found: &Value) {
    log::warn!("attribute {key:?}: expected {expected}, got {}; using default", found.kind_name());
}

fn position(node: &Node) -> CornerPosition {
    match node.prop("position") {
        None => CornerPosition::default(),
        Some(Value::Number(n)) => {
            if n.fract() != 0.0 || !(0.0..=3.0).contains(n) {
                log::warn!("attribute \"position\": {n} is outside 0..=3, wrapping");
            }
            CornerPosition::from_index(*n as i32)
        }
        Some(Value::Ident(name)) => CornerPosition::from_name(name).unwrap_or_else(|| {
            log::warn!("attribute \"position\": unknown corner {name:?}; using top_left");
            CornerPosition::default()
        }),
        Some(other) => {
            mismatch("position", "a corner name or index", other);
            CornerPosition::default()
        }
    }
}

fn length(node: &Node, key: &str, metrics: DisplayMetrics) -> Option<f32> {
    match node.prop(key)? {
        Value::Number(px) => Some(*px),
        Value::Dimension(v, unit) => Some(metrics.resolve(*v, *unit)),
        other => {
            mismatch(key, "a dimension", other);
            None
        }
    }
}

fn color(node: &Node, key: &str, resources: &dyn ResourceResolver) -> Result<Option<Color>, BuildError> {
    match node.prop(key) {
        None => Ok(None),
        Some(Value::Color(argb)) => Ok(Some(Color::from_argb_u32(*argb))),
        Some(Value::Resource(r)) => {
            let id = lookup(r, ResourceKind::Color, resources)?;
            Ok(Some(resources.color(id)?))
        }
        Some(other) => {
            mismatch(key, "a color", other);
            Ok(None)
        }
    }
}

/// The `text` attribute wins over inline content.
fn text(node: &Node, resources: &dyn ResourceResolver) -> Result<Option<String>, BuildError> {
    match node.prop("text") {
        None => Ok(node.content.clone()),
        Some(Value::Str(s)) => Ok(Some(s.clone())),
        Some(Value::Resource(r)) => {
            let id = lookup(r, ResourceKind::String, resources)?;
            Ok(Some(resources.string(id)?))
        }
        Some(other) => {
            mismatch("text", "a string", other);
            Ok(node.content.clone())
        }
    }
}

fn lookup(
    r: &ResourceRef,
    expected: ResourceKind,
    resources: &dyn ResourceResolver,
) -> Result<ResourceId, BuildError> {
    match ResourceKind::from_name(&r.kind) {
        Some(kind) if kind == expected => Ok(resources.lookup(kind, &r.name)?),
        _ => Err(BuildError::Resource(ResourceError::UnknownName {
            kind: r.kind.clone(),
            name: r.name.clone(),
        })),
    }
}
