//! The line driven tag scanner.
//!
//! Each line is handled in three steps:
//! 1. A leading control keyword such as `if` or `while` opens an anonymous scope.
//! 2. A leading entity keyword such as `module` or `function` is followed by a name that is
//!    tagged and opens a named scope.
//! 3. The rest of the line is walked token by token to find `begin`, `do` and `end`, skipping
//!    comments and string literals.
//!
//! Keywords are only recognized at the start of a line in steps 1 and 2. This keeps statement
//! modifiers like `return if x` from opening a scope. Code like `result = if x` that spans
//! several lines is not recognized.

use log::{debug, trace};

use crate::{EntityKind, Position, ScannerConfig, Tag, TagScope};

use super::{
    identifier::{read_name, NameRead},
    Cursor, ScopeStack,
};

/// Keywords that open an anonymous scope when they start a line.
const SCOPE_KEYWORDS: &[&str] = &[
    "case", "for", "if", "unless", "quote", "let", "begin", "catch", "while",
];

/// Keywords that introduce a named entity when they start a line.
const ENTITY_KEYWORDS: &[(&str, EntityKind)] = &[
    ("function", EntityKind::Function),
    ("class", EntityKind::Class),
    ("module", EntityKind::Module),
    ("describe", EntityKind::Describe),
    ("context", EntityKind::Context),
    ("macro", EntityKind::Macro),
    ("type", EntityKind::Type),
    ("immutable", EntityKind::Immutable),
];

/// Keywords anywhere in a line that open an anonymous scope.
const BLOCK_KEYWORDS: &[&str] = &["begin", "do"];

const BLOCK_END: &str = "end";
const BLOCK_COMMENT_START: &str = "=begin";
const BLOCK_COMMENT_END: &str = "=end";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Normal,
    InBlockComment,
}

/// The state of one scan over one input.
///
/// A new `LineScanner` is created for every input, so no scope survives the end of the input.
/// Scopes that are still open at that point are dropped silently.
#[derive(Debug, Clone)]
pub(crate) struct LineScanner {
    config: ScannerConfig,
    scopes: ScopeStack,
    mode: ScanMode,
    line_number: usize,
}

impl LineScanner {
    pub(crate) fn new(config: &ScannerConfig) -> Self {
        Self {
            config: config.clone(),
            scopes: ScopeStack::new(),
            mode: ScanMode::Normal,
            line_number: 0,
        }
    }

    /// Scans the next line of the input and returns the tag defined on it, if any.
    ///
    /// At most one entity is recognized per line.
    pub(crate) fn scan_line(&mut self, line: &str) -> Option<Tag> {
        self.line_number += 1;
        let mut cursor = Cursor::new(line);

        if cursor.eat_token(BLOCK_COMMENT_START) {
            trace!("Block comment starts at line {}", self.line_number);
            self.mode = ScanMode::InBlockComment;
            return None;
        }
        if cursor.eat_token(BLOCK_COMMENT_END) {
            trace!("Block comment ends at line {}", self.line_number);
            self.mode = ScanMode::Normal;
            return None;
        }
        if self.mode == ScanMode::InBlockComment {
            return None;
        }

        cursor.skip_whitespace();

        if cursor.eat_any_token(SCOPE_KEYWORDS).is_some() {
            self.scopes.push_anonymous();
        }

        let tag = ENTITY_KEYWORDS
            .iter()
            .find(|(keyword, _)| cursor.eat_token(keyword))
            .and_then(|&(_, kind)| self.read_and_emit(&mut cursor, line, kind));

        self.scan_blocks(&mut cursor);
        tag
    }

    /// Reads the name after an entity keyword and emits a tag for it.
    ///
    /// Nothing is emitted for anonymous classes or if no name follows the keyword.
    fn read_and_emit(
        &mut self,
        cursor: &mut Cursor<'_>,
        line: &str,
        expected: EntityKind,
    ) -> Option<Tag> {
        if !cursor.peek().is_some_and(char::is_whitespace) {
            return None;
        }
        match read_name(cursor, expected) {
            NameRead::Named { kind, name, offset } if !name.is_empty() => {
                self.emit(name, kind, Position::in_line(self.line_number, line, offset))
            }
            _ => {
                trace!(
                    "No {} name found at line {}",
                    expected.name(),
                    self.line_number
                );
                None
            }
        }
    }

    /// Creates a tag in the current scope and opens a named scope for it.
    ///
    /// The scope is opened for disabled kinds too, so that the nesting of the following
    /// definitions is not affected by the configuration.
    fn emit(&mut self, name: String, kind: EntityKind, position: Position) -> Option<Tag> {
        let path = self.scopes.path();
        let scope = (!path.is_empty()).then(|| TagScope::new(path));
        self.scopes.push_named(&name);
        if !self.config.is_enabled(kind) {
            trace!("Skipping disabled {} '{}'", kind, name);
            return None;
        }
        debug!("Tag {} '{}' at {}", kind, name, position);
        Some(Tag::new(name, kind, position, scope))
    }

    /// Walks the rest of the line and tracks the blocks opened and closed on it.
    fn scan_blocks(&mut self, cursor: &mut Cursor<'_>) {
        while let Some(c) = cursor.peek() {
            if c.is_whitespace() {
                cursor.bump();
            } else if c == '#' {
                // A comment, or an interpolation inside a string that we take for one.
                cursor.skip_to_end();
            } else if cursor.eat_any_token(BLOCK_KEYWORDS).is_some() {
                self.scopes.push_anonymous();
            } else if !self.scopes.is_empty() && cursor.eat_token(BLOCK_END) {
                self.scopes.pop();
            } else if c == '"' {
                // No escapes. The cursor stays on the closing quote, which then opens the next
                // string, so nothing after the first string of a line is seen.
                cursor.bump();
                cursor.bump_while(|c| c != '"');
            } else {
                cursor.bump();
                cursor.bump_while(|c| c.is_alphanumeric() || c == '_');
            }
        }
    }

    /// The number of scopes that are currently open.
    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.scopes.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn scanner() -> LineScanner {
        LineScanner::new(&ScannerConfig::default())
    }

    #[test]
    fn test_function_without_scope() {
        init();
        let mut scanner = scanner();
        let tag = scanner.scan_line("function foo(x)").unwrap();
        assert_eq!(tag.name(), "foo");
        assert_eq!(tag.kind(), EntityKind::Function);
        assert_eq!(tag.position(), Position::new(1, 10));
        assert_eq!(tag.scope(), None);
        assert_eq!(scanner.depth(), 1);
    }

    #[test]
    fn test_nested_scopes() {
        init();
        let mut scanner = scanner();
        let outer = scanner.scan_line("module Outer").unwrap();
        let inner = scanner.scan_line("  class Inner").unwrap();
        let go = scanner.scan_line("    function go(x)").unwrap();
        assert_eq!(outer.scope(), None);
        assert_eq!(inner.scope_path(), Some("Outer"));
        assert_eq!(go.scope_path(), Some("Outer.Inner"));
        assert_eq!(go.scope().unwrap().kind_label, "class");
        assert_eq!(go.position(), Position::new(3, 14));
    }

    #[test]
    fn test_control_keyword_opens_anonymous_scope() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line("if x > 0").is_none());
        assert_eq!(scanner.depth(), 1);
        assert!(scanner.scan_line("    y = 1").is_none());
        assert!(scanner.scan_line("end").is_none());
        assert_eq!(scanner.depth(), 0);
    }

    #[test]
    fn test_one_line_block() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line("while true; break; end").is_none());
        assert_eq!(scanner.depth(), 0);
        assert!(scanner.scan_line("map(xs) do x").is_none());
        assert_eq!(scanner.depth(), 1);
    }

    #[test]
    fn test_one_line_function() {
        init();
        let mut scanner = scanner();
        let tag = scanner.scan_line("function id(x) x end").unwrap();
        assert_eq!(tag.name(), "id");
        assert_eq!(scanner.depth(), 0);
    }

    #[test]
    fn test_end_on_empty_stack() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line("end").is_none());
        assert!(scanner.scan_line("end end").is_none());
        assert_eq!(scanner.depth(), 0);
    }

    #[test]
    fn test_keyword_needs_trailing_whitespace() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line("function(x) x + 1 end").is_none());
        assert!(scanner.scan_line("function").is_none());
        assert_eq!(scanner.depth(), 0);
    }

    #[test]
    fn test_keyword_prefix_is_not_a_keyword() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line("classify(x)").is_none());
        assert!(scanner.scan_line("iffy = doit(x) + endpoint").is_none());
        assert!(scanner.scan_line("modules = 3").is_none());
        assert_eq!(scanner.depth(), 0);
    }

    #[test]
    fn test_comment_hides_keywords() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line("x = 1 # do this, then end").is_none());
        assert_eq!(scanner.depth(), 0);
        assert!(scanner.scan_line("# function commented(x)").is_none());
        assert_eq!(scanner.depth(), 0);
    }

    #[test]
    fn test_string_hides_keywords() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line(r#"println("do it begin end")"#).is_none());
        assert_eq!(scanner.depth(), 0);
        assert!(scanner.scan_line(r#"print("unterminated do"#).is_none());
        assert_eq!(scanner.depth(), 0);
        // The closing quote reopens a string, so the `do` is not seen.
        assert!(scanner.scan_line(r#"open("f.txt") do io"#).is_none());
        assert_eq!(scanner.depth(), 0);
        assert!(scanner.scan_line(r#"x = "a" * "b"; while true"#).is_none());
        assert_eq!(scanner.depth(), 0);
        assert!(scanner.scan_line(r#"open(f) do io"#).is_none());
        assert_eq!(scanner.depth(), 1);
    }

    #[test]
    fn test_block_comment() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line("=begin").is_none());
        assert!(scanner.scan_line("module Hidden").is_none());
        assert!(scanner.scan_line("if x do end end end").is_none());
        assert_eq!(scanner.depth(), 0);
        assert!(scanner.scan_line("=end").is_none());
        let tag = scanner.scan_line("module Visible").unwrap();
        assert_eq!(tag.name(), "Visible");
        assert_eq!(tag.line(), 5);
    }

    #[test]
    fn test_anonymous_class_is_not_tagged() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line("class << HTTP").is_none());
        assert_eq!(scanner.depth(), 0);
    }

    #[test]
    fn test_singleton_method() {
        init();
        let mut scanner = scanner();
        scanner.scan_line("module M");
        let tag = scanner.scan_line("function self.create(x)").unwrap();
        assert_eq!(tag.name(), "create");
        assert_eq!(tag.kind(), EntityKind::SingletonMethod);
        assert_eq!(tag.scope_path(), Some("M"));
    }

    #[test]
    fn test_scope_keyword_hides_entity_keyword() {
        init();
        let mut scanner = scanner();
        assert!(scanner.scan_line("begin function f(x)").is_none());
        assert_eq!(scanner.depth(), 1);
    }

    #[test]
    fn test_statement_modifier_does_not_open_scope() {
        init();
        let mut scanner = scanner();
        scanner.scan_line("function f(x)");
        assert!(scanner.scan_line("    return 0 if x").is_none());
        assert!(scanner.scan_line("end").is_none());
        assert_eq!(scanner.depth(), 0);
    }

    #[test]
    fn test_multiline_if_expression_is_missed() {
        init();
        let mut scanner = scanner();
        scanner.scan_line("module M");
        scanner.scan_line("result = if x");
        scanner.scan_line("    1");
        scanner.scan_line("end");
        // The `end` of the `if` closed the module.
        assert_eq!(scanner.depth(), 0);
        let tag = scanner.scan_line("function g()").unwrap();
        assert_eq!(tag.scope(), None);
    }

    #[test]
    fn test_disabled_kind_still_opens_scope() {
        init();
        let config = ScannerConfig {
            disabled_kinds: vec![EntityKind::Module],
        };
        let mut scanner = LineScanner::new(&config);
        assert!(scanner.scan_line("module Hidden").is_none());
        assert_eq!(scanner.depth(), 1);
        let tag = scanner.scan_line("function f(x)").unwrap();
        assert_eq!(tag.scope_path(), Some("Hidden"));
    }
}
