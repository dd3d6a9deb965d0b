use std::io::BufRead;

use log::debug;

use crate::{internal::LineScanner, FindTags, Result, ScannerConfig, Tag, TagSink};

/// A tag scanner for Julia source files.
///
/// The scanner works line by line. It recognizes definitions only at the start of a line and
/// tracks the nesting of blocks with a few keywords, without parsing the language. Input it does
/// not understand results in fewer tags, never in an error.
///
/// A scanner is immutable and can be used for any number of inputs. Every scan starts with an
/// empty scope stack, so scans do not influence each other.
///
/// To create a scanner with a specific configuration, use the [`crate::ScannerBuilder`].
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScannerConfig,
}

impl Scanner {
    pub(crate) fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of the scanner.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Returns an iterator over the tags found in the input.
    pub fn find_tags<'h>(&self, input: &'h str) -> FindTags<std::str::Lines<'h>> {
        self.find_tags_in_lines(input.lines())
    }

    /// Returns an iterator over the tags found in a sequence of lines.
    /// Lines are pulled from the sequence on demand.
    pub fn find_tags_in_lines<I, S>(&self, lines: I) -> FindTags<I::IntoIter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FindTags::new(LineScanner::new(&self.config), lines.into_iter())
    }

    /// Scans a sequence of lines and hands every tag to the sink.
    pub fn scan_lines<I, S, K>(&self, lines: I, sink: &mut K)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        K: TagSink + ?Sized,
    {
        for tag in self.find_tags_in_lines(lines) {
            sink.tag(tag);
        }
    }

    /// Scans the lines of a reader and hands every tag to the sink.
    ///
    /// Invalid UTF-8 is replaced, so only I/O errors of the reader end the scan early. Tags found
    /// up to that point have already been handed to the sink.
    pub fn scan_reader<R, K>(&self, mut reader: R, sink: &mut K) -> Result<()>
    where
        R: BufRead,
        K: TagSink + ?Sized,
    {
        let mut line_scanner = LineScanner::new(&self.config);
        let mut buf = Vec::new();
        let mut lines = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lines += 1;
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(tag) = line_scanner.scan_line(line) {
                sink.tag(tag);
            }
        }
        debug!("Scanned {} lines", lines);
        Ok(())
    }

    /// Scans the input and collects all tags.
    pub fn scan_str(&self, input: &str) -> Vec<Tag> {
        self.find_tags(input).collect()
    }
}
