//! The Engine evaluates one comparison: both version strings are reduced to
//! their scalar sums and the comparison selected by the operator flags is
//! applied to the pair.

use anyhow::Result;
use tracing::{event, instrument, Level};

use crate::models::{Comparator, OperatorFlags};
use crate::parser::parse_version_sum;

pub struct Opts {
    pub flags: OperatorFlags,
    pub lhs: String,
    pub rhs: String,
}

pub struct Engine {
    opts: Opts,
}

impl Engine {
    pub fn new(opts: Opts) -> Engine {
        Engine { opts }
    }

    /// Runs the comparison. Reduction failures propagate as errors; a flag
    /// set that decodes to no comparison evaluates to false rather than
    /// failing, so the caller still gets a printable verdict.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<bool> {
        let lhs = parse_version_sum(&self.opts.lhs)?;
        let rhs = parse_version_sum(&self.opts.rhs)?;

        let verdict = match Comparator::from_flags(self.opts.flags) {
            Some(comparator) => {
                event!(Level::DEBUG, "Evaluating {} {} {}", lhs, comparator, rhs);
                comparator.holds(lhs, rhs)
            }
            None => {
                event!(Level::DEBUG, "No comparison for flags {:?}", self.opts.flags);
                false
            }
        };

        Ok(verdict)
    }
}
