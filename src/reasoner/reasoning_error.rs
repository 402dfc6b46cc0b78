use crate::{arguments::ArgumentSet, kb::Literal};
use std::fmt::Display;
use thiserror::Error;

/// A resource limit that may be exceeded while building arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceLimit {
    /// The maximal number of arguments.
    Arguments(usize),
    /// The maximal depth of an argument.
    Depth(usize),
}

impl Display for ResourceLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceLimit::Arguments(n) => write!(f, "more than {} argument(s)", n),
            ResourceLimit::Depth(n) => write!(f, "an argument deeper than {}", n),
        }
    }
}

/// The errors that may be raised by a reasoning process on a valid rule base.
#[derive(Debug, Error)]
pub enum ReasoningError {
    /// Some rules that had to be compared belong to a preference cycle.
    ///
    /// The rules of the cycle are given in order: each one is strictly less preferred than the next one,
    /// and the last one is strictly less preferred than the first one.
    #[error("the preference relation has a cycle involving compared rules: {}", .rules.join(" < "))]
    PreferenceCycle {
        /// the labels of the rules in the cycle
        rules: Vec<String>,
    },
    /// A resource limit was exceeded while building the arguments.
    ///
    /// The arguments built before the limit was reached are kept.
    #[error("the knowledge base produces {limit} ({} argument(s) were built)", .partial.len())]
    ResourceExhausted {
        /// the limit that was exceeded
        limit: ResourceLimit,
        /// the arguments built so far
        partial: Box<ArgumentSet>,
    },
    /// Strict arguments conclude complementary literals.
    #[error("strict arguments conclude both {literal} and its complement")]
    InconsistentStrictArguments {
        /// the positive literal of the conflict
        literal: Literal,
    },
}
