use crate::{internal::LineScanner, Tag};

/// An iterator over the tags of one input.
///
/// The iterator pulls lines from the underlying line iterator until a line yields a tag or the
/// lines are exhausted. The end of the line iterator is the end of the input; scopes still open
/// at that point are discarded.
///
/// This iterator can be created with the [`crate::Scanner::find_tags`] and
/// [`crate::Scanner::find_tags_in_lines`] methods.
#[derive(Debug)]
pub struct FindTags<I> {
    scanner: LineScanner,
    lines: I,
}

impl<I> FindTags<I> {
    pub(crate) fn new(scanner: LineScanner, lines: I) -> Self {
        Self { scanner, lines }
    }
}

impl<I, S> Iterator for FindTags<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Tag;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if let Some(tag) = self.scanner.scan_line(line.as_ref()) {
                return Some(tag);
            }
        }
        None
    }
}
