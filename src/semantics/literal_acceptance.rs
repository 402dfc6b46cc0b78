use super::{GroundedLabelling, Label};
use crate::{
    arguments::ArgumentSet,
    kb::{Literal, RuleBase},
};
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, Display, EnumString};

/// The acceptance status of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AcceptanceStatus {
    /// Some argument concluding the literal is in the grounded extension.
    Justified,
    /// All the arguments concluding the literal are defeated by the grounded extension.
    ///
    /// This is in particular the case of literals no argument concludes.
    Rejected,
    /// The other cases.
    Undecided,
}

/// The acceptance status of each literal of a rule base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralAcceptance {
    statuses: BTreeMap<Literal, AcceptanceStatus>,
}

impl LiteralAcceptance {
    /// Computes the status of the literals given the arguments and their labelling.
    pub fn compute(
        rule_base: &RuleBase,
        arguments: &ArgumentSet,
        labelling: &GroundedLabelling,
    ) -> Self {
        let statuses = rule_base
            .literals()
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let labels = arguments
                    .arguments_concluding(i)
                    .iter()
                    .map(|a| labelling.label(*a))
                    .collect::<Vec<Label>>();
                let status = if labels.contains(&Label::In) {
                    AcceptanceStatus::Justified
                } else if labels.iter().all(|l| *l == Label::Out) {
                    AcceptanceStatus::Rejected
                } else {
                    AcceptanceStatus::Undecided
                };
                (l.clone(), status)
            })
            .collect();
        LiteralAcceptance { statuses }
    }

    /// Returns the status of a literal, or `None` if the literal does not appear in the rule base.
    pub fn status(&self, literal: &Literal) -> Option<AcceptanceStatus> {
        self.statuses.get(literal).copied()
    }

    /// Iterates over the literals and their statuses, in increasing literal order.
    pub fn iter(&self) -> impl Iterator<Item = (&Literal, AcceptanceStatus)> + '_ {
        self.statuses.iter().map(|(l, s)| (l, *s))
    }

    /// Returns the justified literals, in increasing order.
    pub fn justified_literals(&self) -> Vec<&Literal> {
        self.iter()
            .filter_map(|(l, s)| {
                if s == AcceptanceStatus::Justified {
                    Some(l)
                } else {
                    None
                }
            })
            .collect()
    }
}
