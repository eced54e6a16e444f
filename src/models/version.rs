//! Scalar form of a version string produced by the reducer
use std::fmt;

/// The flat sum a version string reduces to. This is a lossy score, not a
/// positional ordering: "1.2" and "2.1" both reduce to 3. Comparisons
/// between sums are only as precise as that reduction allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionSum(pub u64);

impl fmt::Display for VersionSum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
