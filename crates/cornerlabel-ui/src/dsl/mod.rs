//! Building badges from `.cbml` attribute documents.
//!
//! ```rust,ignore
//! use cornerlabel_ui::dsl::{BadgeLoader, BuildCtx};
//!
//! let resources = ResourceTable::new().with_color("sale", Color::from_argb_u32(0xffe53935));
//! let ctx = BuildCtx::new(&resources).font(font_id).metrics(DisplayMetrics::with_density(2.0));
//! let badge = BadgeLoader::load(include_str!("../badges/sale.cbml"), &ctx)?;
//! ```
//!
//! Attribute handling is permissive: unknown keys and values of the wrong
//! type are logged and skipped, leaving the default. Only malformed documents
//! and failed resource lookups are errors.

pub mod builder;
pub mod error;

pub use builder::{BadgeLoader, BuildCtx};
pub use error::BuildError;
