//! Table source trait definition.

use crate::error::Result;
use crate::model::BirthTable;

/// Trait for sources that can load the birth statistics table.
///
/// Implementations read a fixed location once; callers cache the result for
/// the process lifetime.
pub trait TableSource: Send + Sync {
    /// Source name for diagnostics.
    fn name(&self) -> &str;

    /// Load the full table.
    fn load(&self) -> Result<BirthTable>;
}
