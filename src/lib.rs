//! mcptag - directive parsing for schema comments
//!
//! Decides whether the comment attached to a schema element (an RPC method, a
//! message field) carries the `@mcp` marker, and strips directive lines so the
//! rest can be used as generated documentation.
//!
//! ```
//! use mcptag::{clean_comment, has_tag};
//!
//! let comment = "buf:lint:ignore\nCreateItem creates a new item\n@mcp";
//! assert!(has_tag(comment));
//! assert_eq!(clean_comment(comment), "CreateItem creates a new item");
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `directives`: Line classification, tag detection and comment cleaning

pub mod cli;
pub mod config;
pub mod directives;

pub use directives::{DirectiveSet, LineKind, clean_comment, has_tag};
