//! Running totals derived from the entries table.

use serde::{Deserialize, Serialize};

/// Income, expense and net deposit across a set of entries.
///
/// Classification follows the sign of `amount`: non-negative amounts count
/// toward `income`, negative amounts toward `expense` (reported as a
/// positive magnitude). `deposit` is `income - expense` and may be negative.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    /// Sum of non-negative amounts
    pub income: f64,

    /// Magnitude of the sum of negative amounts
    pub expense: f64,

    /// Net deposit: income minus expense
    pub deposit: f64,
}
