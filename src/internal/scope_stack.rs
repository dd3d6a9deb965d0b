use log::trace;

/// The stack of currently open scopes.
///
/// A named scope is opened by a tagged definition, e.g. a module or a function. An anonymous
/// scope is opened by a control structure such as `if`, `while` or `do` and is stored as an empty
/// entry.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScopeStack {
    entries: Vec<String>,
}

impl ScopeStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Opens a named scope.
    pub(crate) fn push_named(&mut self, name: &str) {
        trace!("Enter scope '{}' at depth {}", name, self.entries.len());
        self.entries.push(name.to_string());
    }

    /// Opens an anonymous scope.
    pub(crate) fn push_anonymous(&mut self) {
        trace!("Enter anonymous scope at depth {}", self.entries.len());
        self.entries.push(String::new());
    }

    /// Closes the innermost scope. Does nothing if no scope is open.
    pub(crate) fn pop(&mut self) {
        if let Some(name) = self.entries.pop() {
            trace!("Leave scope '{}' at depth {}", name, self.entries.len());
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.entries.len()
    }

    /// The dot-joined names of all named scopes, outermost first.
    pub(crate) fn path(&self) -> String {
        let mut path = String::new();
        for name in self.entries.iter().filter(|name| !name.is_empty()) {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(name);
        }
        path
    }
}
