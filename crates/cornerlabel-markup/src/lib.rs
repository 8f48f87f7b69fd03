//! Lexer, parser, and AST for corner label attribute documents (`.cbml`).
//!
//! An attribute document configures one badge, the way a layout file
//! configures one view:
//!
//! ```rust
//! use cornerlabel_markup::{parse_str, ast::{Unit, Value}};
//!
//! let src = r#"
//!     CornerLabel "NEW" {
//!         position: top_right
//!         side_length: 40dp
//!         bg_color: #ff0000
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.node.widget, "CornerLabel");
//! assert_eq!(doc.node.prop("side_length"), Some(&Value::Dimension(40.0, Unit::Dp)));
//! ```
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Node`, `Prop`, `Value`, `Unit`, `ResourceRef` |
//! | [`color`] | `parse_color` for `#rrggbb` / `#aarrggbb` literals |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |

pub mod ast;
pub mod color;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::Document;
pub use color::parse_color;
pub use error::ParseError;
pub use parser::parse_str;
