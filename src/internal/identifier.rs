//! Reading the name that follows an entity keyword.

use crate::EntityKind;

use super::Cursor;

/// Operator symbols that can be defined as functions, e.g. `function ==(a, b)`.
///
/// No entry is a prefix of a later entry, so the first match is the longest one.
pub(crate) const OPERATORS: &[&str] = &[
    "[]=", "[]", "**", "+@", "-@", "<=>", "===", "==", "!=", "=~", "!~", ">>", "<<", "<=", ">=",
    "!", "~", "*", "/", "%", "+", "-", "&", "^", "|", "<", ">", "`",
];

/// Characters besides alphanumerics that callable names may contain.
const CALLABLE_EXTRA: &str = "_.?!=";
/// Characters that end a callable name. They belong to the name.
const CALLABLE_TERMINATORS: &str = "?!=";
/// Characters besides alphanumerics that free-text block descriptions may contain.
const DESCRIPTION_EXTRA: &str = " ,\".#_?!='/-";

/// The outcome of reading a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NameRead {
    /// A singleton class such as `class << HTTP`. It is never named.
    AnonymousClass,
    /// A name of the given effective kind, starting at byte `offset` of the line.
    /// The name may be empty if no acceptable character followed the keyword.
    Named {
        kind: EntityKind,
        name: String,
        offset: usize,
    },
}

fn accepts(kind: EntityKind, c: char) -> bool {
    if c.is_alphanumeric() {
        return true;
    }
    match kind {
        EntityKind::Function | EntityKind::SingletonMethod => CALLABLE_EXTRA.contains(c),
        EntityKind::Describe | EntityKind::Context => DESCRIPTION_EXTRA.contains(c),
        _ => c == '_',
    }
}

/// Reads the name of an entity of the requested kind at the cursor.
///
/// A callable name containing a `.` is a method on a receiver. The receiver is dropped and the
/// reading restarts after the dot as a singleton method.
pub(crate) fn read_name(cursor: &mut Cursor<'_>, requested: EntityKind) -> NameRead {
    let mut kind = requested;
    'restart: loop {
        cursor.skip_whitespace();

        if kind == EntityKind::Class && cursor.rest().starts_with("<<") {
            return NameRead::AnonymousClass;
        }

        let offset = cursor.offset();
        if kind.is_callable() {
            if let Some(op) = cursor.eat_any_token(OPERATORS) {
                return NameRead::Named {
                    kind,
                    name: op.to_string(),
                    offset,
                };
            }
        }

        let mut name = String::new();
        while let Some(c) = cursor.peek() {
            if !accepts(kind, c) {
                break;
            }
            cursor.bump();
            if kind.is_callable() {
                if c == '.' {
                    kind = EntityKind::SingletonMethod;
                    continue 'restart;
                }
                name.push(c);
                if CALLABLE_TERMINATORS.contains(c) {
                    break;
                }
            } else {
                name.push(c);
            }
        }
        return NameRead::Named { kind, name, offset };
    }
}
