/// Module that provides the line cursor and the token-boundary aware keyword matching.
mod cursor;
pub(crate) use cursor::Cursor;

/// Module that provides reading of entity names and operator names.
pub(crate) mod identifier;

/// Module that provides the line driven scanner state machine.
mod line_scanner;
pub(crate) use line_scanner::LineScanner;

/// Module that provides the stack of open scopes.
mod scope_stack;
pub(crate) use scope_stack::ScopeStack;
