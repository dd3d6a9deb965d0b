//! Module with the entity kinds a tag can have.
//! Each kind is associated with a single letter and a singular and plural label the host uses
//! for reporting.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a named program entity.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityKind {
    /// A function or method, introduced by `function`.
    Function,
    /// A class, introduced by `class`.
    Class,
    /// A module, introduced by `module`.
    Module,
    /// A method defined on a receiver, e.g. `function Base.show(io, x)`.
    SingletonMethod,
    /// A `describe` block.
    Describe,
    /// A `context` block.
    Context,
    /// A macro, introduced by `macro`.
    Macro,
    /// A type, introduced by `type`.
    Type,
    /// An immutable type, introduced by `immutable`.
    Immutable,
}

/// Letter, singular label and plural label per kind, in declaration order.
const KIND_TABLE: [(char, &str, &str); 9] = [
    ('f', "function", "functions"),
    ('c', "class", "classes"),
    ('m', "module", "modules"),
    ('F', "singleton method", "singleton methods"),
    ('d', "describe", "describes"),
    ('C', "context", "contexts"),
    ('M', "macro", "macros"),
    ('t', "type", "types"),
    ('i', "immutable", "immutables"),
];

impl EntityKind {
    /// All kinds in the order of the kind table.
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Function,
        EntityKind::Class,
        EntityKind::Module,
        EntityKind::SingletonMethod,
        EntityKind::Describe,
        EntityKind::Context,
        EntityKind::Macro,
        EntityKind::Type,
        EntityKind::Immutable,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// The single letter that represents the kind.
    #[inline]
    pub fn letter(self) -> char {
        KIND_TABLE[self.index()].0
    }

    /// The singular label of the kind.
    #[inline]
    pub fn name(self) -> &'static str {
        KIND_TABLE[self.index()].1
    }

    /// The plural label of the kind.
    #[inline]
    pub fn plural(self) -> &'static str {
        KIND_TABLE[self.index()].2
    }

    /// Look up a kind by its letter. Letters are case-sensitive.
    pub fn from_letter(letter: char) -> Option<EntityKind> {
        Self::ALL.into_iter().find(|kind| kind.letter() == letter)
    }

    /// Whether names of this kind are read like callables, i.e. may be operator symbols or
    /// carry a receiver.
    #[inline]
    pub(crate) fn is_callable(self) -> bool {
        matches!(self, EntityKind::Function | EntityKind::SingletonMethod)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the kind table a parser registers with the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KindOption {
    /// Whether the host reports tags of this kind by default.
    pub enabled: bool,
    /// The kind itself.
    pub kind: EntityKind,
    /// The single letter of the kind.
    pub letter: char,
    /// The singular label.
    pub name: &'static str,
    /// The plural label.
    pub plural: &'static str,
}

impl KindOption {
    /// Create an enabled kind option for the given kind.
    pub const fn new(kind: EntityKind) -> Self {
        let (letter, name, plural) = KIND_TABLE[kind as usize];
        Self {
            enabled: true,
            kind,
            letter,
            name,
            plural,
        }
    }
}
