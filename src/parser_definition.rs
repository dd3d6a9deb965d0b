//! Module with the registration data a tag indexing host needs to pick this scanner.

use std::path::Path;

use crate::{EntityKind, KindOption, Scanner, ScannerBuilder};

/// The description of a language parser for a tag indexing host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserDefinition {
    /// The name of the language.
    pub name: &'static str,
    /// The file extensions, without the leading dot, of files the parser handles.
    pub extensions: &'static [&'static str],
    /// The kinds of tags the parser creates.
    pub kinds: &'static [KindOption],
}

/// The kind table of the Julia scanner.
static JULIA_KINDS: [KindOption; 9] = [
    KindOption::new(EntityKind::Function),
    KindOption::new(EntityKind::Class),
    KindOption::new(EntityKind::Module),
    KindOption::new(EntityKind::SingletonMethod),
    KindOption::new(EntityKind::Describe),
    KindOption::new(EntityKind::Context),
    KindOption::new(EntityKind::Macro),
    KindOption::new(EntityKind::Type),
    KindOption::new(EntityKind::Immutable),
];

/// The parser definition of the Julia scanner.
pub static JULIA: ParserDefinition = ParserDefinition {
    name: "Julia",
    extensions: &["jl", "julia"],
    kinds: &JULIA_KINDS,
};

impl ParserDefinition {
    /// Whether files with the given extension are handled. The comparison is case-sensitive.
    pub fn handles_extension(&self, extension: &str) -> bool {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        self.extensions.iter().any(|ext| *ext == extension)
    }

    /// Whether the file at the given path is handled, judged by its extension.
    pub fn handles_path(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.handles_extension(ext))
    }

    /// The kind option of the given kind.
    pub fn kind_option(&self, kind: EntityKind) -> Option<&KindOption> {
        self.kinds.iter().find(|option| option.kind == kind)
    }

    /// Creates a scanner that reports the kinds enabled in the kind table.
    pub fn scanner(&self) -> Scanner {
        self.kinds
            .iter()
            .filter(|option| !option.enabled)
            .fold(ScannerBuilder::new(), |builder, option| {
                builder.disable_kind(option.kind)
            })
            .build()
    }
}
