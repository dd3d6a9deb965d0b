#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{EntityKind, Position};

/// The scope label attached to every scoped tag.
///
/// Modules, classes, functions and describe blocks all nest under the same label. Hosts that
/// report scopes generically expect a single label here.
pub const SCOPE_KIND_LABEL: &str = "class";

/// The scope annotation of a tag.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagScope {
    /// The label of the enclosing scope kind. Always [`SCOPE_KIND_LABEL`].
    pub kind_label: String,
    /// The dot-joined names of the enclosing named scopes, outermost first.
    pub path: String,
}

impl TagScope {
    /// Create a scope annotation for the given dotted path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            kind_label: SCOPE_KIND_LABEL.to_string(),
            path: path.into(),
        }
    }
}

/// A tag for a named program entity.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag {
    /// The name of the entity.
    name: String,
    /// The kind of the entity.
    kind: EntityKind,
    /// Where the name starts in the input.
    position: Position,
    /// The enclosing scope, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    scope: Option<TagScope>,
}

impl Tag {
    /// Create a new tag.
    pub fn new(
        name: impl Into<String>,
        kind: EntityKind,
        position: Position,
        scope: Option<TagScope>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            scope,
        }
    }

    /// Get the name of the tag.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the kind of the tag.
    #[inline]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Get the position of the tag's name.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the line number of the tag.
    #[inline]
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Get the scope annotation of the tag.
    #[inline]
    pub fn scope(&self) -> Option<&TagScope> {
        self.scope.as_ref()
    }

    /// Get the dotted scope path of the tag, if any.
    #[inline]
    pub fn scope_path(&self) -> Option<&str> {
        self.scope.as_ref().map(|s| s.path.as_str())
    }
}

/// The receiver of emitted tags.
///
/// A scan hands every tag to the sink as soon as it is recognized. Ownership of the tag passes to
/// the sink.
pub trait TagSink {
    /// Receives one tag.
    fn tag(&mut self, tag: Tag);
}

impl TagSink for Vec<Tag> {
    fn tag(&mut self, tag: Tag) {
        self.push(tag);
    }
}

impl<S: TagSink + ?Sized> TagSink for &mut S {
    fn tag(&mut self, tag: Tag) {
        (**self).tag(tag);
    }
}

/// A [`TagSink`] that forwards each tag to a closure.
/// Use [`sink_fn`] to create one.
#[derive(Debug)]
pub struct FnSink<F> {
    f: F,
}

impl<F: FnMut(Tag)> TagSink for FnSink<F> {
    fn tag(&mut self, tag: Tag) {
        (self.f)(tag);
    }
}

/// Create a [`TagSink`] from a closure.
pub fn sink_fn<F: FnMut(Tag)>(f: F) -> FnSink<F> {
    FnSink { f }
}
