#![forbid(missing_docs)]
//! # `jltags`
//! The `jltags` crate is a tag scanner for Julia source files, meant to be plugged into a
//! multi-language tag indexer in the style of ctags.
//! It finds the definitions of functions, modules, types, macros and similar entities and
//! reports each of them with its kind, its position and the path of the enclosing named scopes.
//!
//! The scanner does not parse Julia. It reads the input line by line, recognizes definitions only
//! at the start of a line and follows the nesting of blocks with a handful of keywords. This
//! keeps it fast and lets it work on any input: source it does not understand results in fewer or
//! misattributed tags, never in an error.
//!
//! # Example
//! ```rust
//! use jltags::{EntityKind, ScannerBuilder};
//!
//! const INPUT: &str = r#"
//! module Shapes
//!   type Circle
//!     r::Float64
//!   end
//!   function area(c::Circle)
//!     pi * c.r^2
//!   end
//! end
//! "#;
//!
//! let scanner = ScannerBuilder::new().build();
//! let tags = scanner.scan_str(INPUT);
//! let summary: Vec<_> = tags
//!     .iter()
//!     .map(|tag| (tag.kind().letter(), tag.name(), tag.scope_path()))
//!     .collect();
//! assert_eq!(
//!     summary,
//!     vec![
//!         ('m', "Shapes", None),
//!         ('t', "Circle", Some("Shapes")),
//!         ('f', "area", Some("Shapes")),
//!     ]
//! );
//! assert_eq!(tags[2].kind(), EntityKind::Function);
//! assert_eq!(tags[2].line(), 6);
//! ```
//!
//! # Known limitations
//! - Statements spanning several lines are not understood.
//! - A `#` always starts a comment, also inside strings.
//! - String literals have no escapes and end at the line end. The closing quote of a string
//!   opens the next one, so block keywords after a string on the same line, as in
//!   `open("f.txt") do io`, are not seen.
//! - Block keywords are only recognized as leading tokens of a line, so an expression such as
//!   `result = if x` opens no scope while its `end` still closes one.
//!
//! # Crate features
//! - `serde`: enabled by default. Derives `Serialize` and `Deserialize` for the tag types and
//!   allows to read a [`ScannerConfig`] from JSON.

/// Module that provides the entity kinds and the kind table
mod entity_kind;
pub use entity_kind::{EntityKind, KindOption};

/// Module with error definitions
mod errors;
pub use errors::{JlTagsError, JlTagsErrorKind, Result};

/// Module that provides a FindTags type
mod find_tags;
pub use find_tags::FindTags;

/// The module with internal implementation details.
mod internal;

/// Module with the parser registration data
mod parser_definition;
pub use parser_definition::{ParserDefinition, JULIA};

/// Module that provides a position type
mod position;
pub use position::Position;

/// The module with the scanner.
mod scanner;
pub use scanner::Scanner;

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::ScannerBuilder;

/// The module with the scanner configuration.
mod scanner_config;
pub use scanner_config::ScannerConfig;

/// Module that provides the tag record and the tag sink
mod tag;
pub use tag::{sink_fn, FnSink, Tag, TagScope, TagSink, SCOPE_KIND_LABEL};
