//! Variable registry port.

/// Port for variable membership checks.
///
/// Variables are tool-provided context values referenced in messages as
/// `#name`. The parser only needs membership; resolving a variable into
/// content happens downstream, after parsing.
pub trait VariableRegistry: Send + Sync {
    /// Returns `true` when `name` is a registered variable.
    ///
    /// Lookup is case-insensitive.
    fn has_variable(&self, name: &str) -> bool;
}
