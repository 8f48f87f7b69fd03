//! Cornerlabel UI: the corner badge widget on top of `cornerlabel-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cornerlabel_ui::prelude::*;
//!
//! let badge = CornerBadge::new()
//!     .position(CornerPosition::TopRight)
//!     .text("NEW")
//!     .font(font_id);
//!
//! let mut scene = UiScene::new(badge);
//! let draw_list = scene.frame(Constraints::tight(Vec2::splat(120.0)), &font_system);
//! // Hand draw_list to a renderer, e.g. cornerlabel_engine::render::Rasterizer.
//! ```
//!
//! Badges can also be described in `.cbml` attribute documents and built with
//! [`dsl::BadgeLoader`].

pub mod constraints;
pub mod dsl;
pub mod invalidate;
pub mod metrics;
pub mod painter;
pub mod resources;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build, host and extend badges.
pub mod prelude {
    pub use crate::constraints::{Constraints, LayoutCtx, MeasureSpec, SpecMode};
    pub use crate::dsl::{BadgeLoader, BuildCtx, BuildError};
    pub use crate::invalidate::RedrawHandle;
    pub use crate::metrics::DisplayMetrics;
    pub use crate::painter::Painter;
    pub use crate::resources::{ResourceError, ResourceId, ResourceKind, ResourceResolver, ResourceTable};
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;
    pub use crate::widgets::corner_badge::{
        BadgeConfig, BadgeGeometry, BadgeStyle, CornerBadge, CornerPosition,
    };

    pub use cornerlabel_engine::coords::{Affine, Rect, Vec2};
    pub use cornerlabel_engine::paint::Color;
    pub use cornerlabel_engine::text::{FontId, FontSystem, TextMeasure, TextMetrics};
}
