//! Error type surfaced by the pairing driver.

use thiserror::Error;

/// Failure modes of the `map` entry point and the point/field
/// constructors feeding it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// A `G1` or `G2` point argument does not satisfy its curve
    /// equation.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// A `G1` or `G2` point argument is not in the prime-order
    /// subgroup (fails the `[r]P = O` check).
    #[error("point is not in the prime-order subgroup")]
    PointNotInSubgroup,
}
