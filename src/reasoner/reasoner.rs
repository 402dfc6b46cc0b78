use super::{ReasonerConfig, ReasoningError};
use crate::{
    arguments::{ArgumentConstructor, ArgumentSet},
    framework::{AttackComputer, AttackSet, DefeatGraph, DefeatResolver},
    kb::{Literal, RuleBase},
    semantics::{AcceptanceStatus, GroundedLabelling, LiteralAcceptance},
};
use log::{info, warn};

/// The reasoning pipeline: builds the arguments of a rule base, computes their attacks and defeats,
/// and evaluates them under the grounded semantics.
///
/// # Example
///
/// ```
/// # use scarab::kb::{Literal, Preference, Rule, RuleBase};
/// # use scarab::reasoner::{Reasoner, ReasonerConfig};
/// # use scarab::semantics::AcceptanceStatus;
/// let lit = |s: &str| s.parse::<Literal>().unwrap();
/// let rule_base = RuleBase::build(
///     vec![
///         Rule::strict(vec![], lit("bird")),
///         Rule::defeasible(vec![lit("bird")], lit("flies")).with_name("R1"),
///         Rule::strict(vec![], lit("penguin")),
///         Rule::defeasible(vec![lit("penguin")], lit("-flies")).with_name("R2"),
///     ],
///     vec![Preference::new("R1", "R2")],
/// )
/// .unwrap();
/// let reasoning = Reasoner::new(ReasonerConfig::default()).reason(&rule_base).unwrap();
/// assert_eq!(Some(AcceptanceStatus::Justified), reasoning.status(&lit("-flies")));
/// assert_eq!(Some(AcceptanceStatus::Rejected), reasoning.status(&lit("flies")));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reasoner {
    config: ReasonerConfig,
}

impl Reasoner {
    /// Builds a new reasoner.
    pub fn new(config: ReasonerConfig) -> Self {
        Reasoner { config }
    }

    /// Returns the configuration of this reasoner.
    pub fn config(&self) -> &ReasonerConfig {
        &self.config
    }

    /// Runs the whole pipeline on a rule base.
    pub fn reason<'a>(&self, rule_base: &'a RuleBase) -> Result<Reasoning<'a>, ReasoningError> {
        let arguments = ArgumentConstructor::new_with_config(rule_base, &self.config).construct()?;
        if let Some(literal) = find_strict_conflict(rule_base, &arguments) {
            if self.config.check_strict_consistency() {
                return Err(ReasoningError::InconsistentStrictArguments { literal });
            }
            warn!(
                "strict arguments conclude both {} and its complement",
                literal
            );
        }
        let attacks = AttackComputer::new(rule_base, &arguments).compute();
        let defeats = DefeatResolver::new(rule_base, &arguments).resolve(&attacks)?;
        let labelling = GroundedLabelling::compute(&defeats);
        info!(
            "the grounded extension has {} argument(s) out of {}",
            labelling.extension().len(),
            arguments.len()
        );
        let acceptance = LiteralAcceptance::compute(rule_base, &arguments, &labelling);
        Ok(Reasoning {
            rule_base,
            arguments,
            attacks,
            defeats,
            labelling,
            acceptance,
        })
    }
}

fn find_strict_conflict(rule_base: &RuleBase, arguments: &ArgumentSet) -> Option<Literal> {
    let has_strict = |l: usize| {
        arguments
            .arguments_concluding(l)
            .iter()
            .any(|a| arguments.get_argument(*a).is_strict())
    };
    (0..rule_base.literals().len())
        .filter(|l| !rule_base.literal(*l).is_negated())
        .find(|l| {
            rule_base
                .complement_id(*l)
                .map(|c| has_strict(*l) && has_strict(c))
                .unwrap_or(false)
        })
        .map(|l| rule_base.literal(l).clone())
}

/// The result of a reasoning process.
///
/// It gives access to each intermediate artifact of the pipeline.
pub struct Reasoning<'a> {
    rule_base: &'a RuleBase,
    arguments: ArgumentSet,
    attacks: AttackSet,
    defeats: DefeatGraph,
    labelling: GroundedLabelling,
    acceptance: LiteralAcceptance,
}

impl Reasoning<'_> {
    /// Returns the rule base.
    pub fn rule_base(&self) -> &RuleBase {
        self.rule_base
    }

    /// Returns the arguments.
    pub fn arguments(&self) -> &ArgumentSet {
        &self.arguments
    }

    /// Returns the attacks.
    pub fn attacks(&self) -> &AttackSet {
        &self.attacks
    }

    /// Returns the defeats.
    pub fn defeats(&self) -> &DefeatGraph {
        &self.defeats
    }

    /// Returns the grounded labelling of the arguments.
    pub fn labelling(&self) -> &GroundedLabelling {
        &self.labelling
    }

    /// Returns the acceptance status of the literals.
    pub fn acceptance(&self) -> &LiteralAcceptance {
        &self.acceptance
    }

    /// Returns the acceptance status of a literal, or `None` if it does not appear in the rule base.
    pub fn status(&self, literal: &Literal) -> Option<AcceptanceStatus> {
        self.acceptance.status(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::Rule;

    fn lit(s: &str) -> Literal {
        s.parse().unwrap()
    }

    fn inconsistent_rule_base() -> RuleBase {
        RuleBase::build(
            vec![
                Rule::strict(vec![], lit("a")),
                Rule::strict(vec![lit("a")], lit("-b")),
                Rule::strict(vec![], lit("b")),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_strict_conflict_warning() {
        let rb = inconsistent_rule_base();
        let reasoning = Reasoner::default().reason(&rb).unwrap();
        assert_eq!(Some(AcceptanceStatus::Justified), reasoning.status(&lit("b")));
        assert_eq!(Some(AcceptanceStatus::Justified), reasoning.status(&lit("-b")));
    }

    #[test]
    fn test_strict_conflict_error() {
        let rb = inconsistent_rule_base();
        let reasoner = Reasoner::new(ReasonerConfig::default().with_strict_consistency_check(true));
        match reasoner.reason(&rb) {
            Err(ReasoningError::InconsistentStrictArguments { literal }) => {
                assert_eq!(lit("b"), literal)
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_artifacts() {
        let rb = RuleBase::build(
            vec![
                Rule::strict(vec![], lit("a")),
                Rule::defeasible(vec![lit("a")], lit("b")),
                Rule::defeasible(vec![lit("a")], lit("-b")),
            ],
            vec![],
        )
        .unwrap();
        let reasoning = Reasoner::default().reason(&rb).unwrap();
        assert_eq!(3, reasoning.arguments().len());
        assert_eq!(2, reasoning.attacks().len());
        assert_eq!(2, reasoning.defeats().n_defeats());
        assert_eq!(1, reasoning.labelling().extension().len());
        assert_eq!(3, reasoning.acceptance().iter().count());
        assert_eq!(3, reasoning.rule_base().n_rules());
    }
}
