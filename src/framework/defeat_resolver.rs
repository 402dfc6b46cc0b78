use super::{Attack, AttackKind, AttackSet, DefeatGraph};
use crate::{arguments::ArgumentSet, kb::RuleBase, reasoner::ReasoningError};
use log::{debug, info};
use std::collections::BTreeSet;

/// Turns attacks into defeats using the preference relation of a rule base.
///
/// Undercuts always succeed.
/// A rebuttal succeeds unless the attacker is strictly weaker than the attacked sub-argument,
/// where strength follows the weakest link principle: an argument `A` is strictly weaker than `B'` iff
/// `A` uses a defeasible rule that is strictly less preferred than all the defeasible rules used by `B'`.
/// An attacker using only strict rules is never weaker, and incomparable arguments defeat each other.
///
/// The preference relation is the transitive closure of the preference statements.
/// Before comparing arguments, the resolver checks that none of the rules it has to compare belongs to a preference cycle.
pub struct DefeatResolver<'a> {
    rule_base: &'a RuleBase,
    arguments: &'a ArgumentSet,
}

impl<'a> DefeatResolver<'a> {
    /// Builds a new resolver.
    pub fn new(rule_base: &'a RuleBase, arguments: &'a ArgumentSet) -> Self {
        DefeatResolver {
            rule_base,
            arguments,
        }
    }

    /// Computes the defeats.
    ///
    /// An error is returned if a rule involved in a comparison belongs to a preference cycle.
    pub fn resolve(&self, attacks: &AttackSet) -> Result<DefeatGraph, ReasoningError> {
        self.check_compared_rules(attacks)?;
        let mut closures: Vec<Option<Vec<usize>>> = vec![None; self.rule_base.n_rules()];
        let mut defeating_attacks = Vec::with_capacity(attacks.len());
        let mut n_blocked = 0;
        for attack in attacks.iter() {
            if self.is_defeat(attack, &mut closures) {
                defeating_attacks.push(*attack);
            } else {
                n_blocked += 1;
            }
        }
        let graph = DefeatGraph::new(self.arguments.len(), defeating_attacks);
        info!(
            "{} attack(s) were blocked by preferences; {} defeat(s) remain between {} argument(s)",
            n_blocked,
            graph.n_defeats(),
            graph.n_arguments()
        );
        Ok(graph)
    }

    fn is_defeat(&self, attack: &Attack, closures: &mut [Option<Vec<usize>>]) -> bool {
        if attack.kind() == AttackKind::Undercut {
            return true;
        }
        let attacker_rules = self
            .arguments
            .get_argument(attack.attacker())
            .defeasible_rules();
        let target_rules = self
            .arguments
            .get_argument(attack.sub_argument())
            .defeasible_rules();
        let graph = self.rule_base.preference_graph();
        let weaker = attacker_rules.iter().any(|x| {
            let stronger_than_x =
                closures[*x].get_or_insert_with(|| graph.stronger_closure(*x));
            target_rules
                .iter()
                .all(|y| stronger_than_x.binary_search(y).is_ok())
        });
        if weaker {
            debug!(
                "A{} does not defeat A{} since it is weaker than A{}",
                attack.attacker(),
                attack.target(),
                attack.sub_argument()
            );
        }
        !weaker
    }

    fn check_compared_rules(&self, attacks: &AttackSet) -> Result<(), ReasoningError> {
        let compared = attacks
            .iter()
            .filter(|att| att.kind() == AttackKind::Rebut)
            .filter(|att| !self.arguments.get_argument(att.attacker()).is_strict())
            .flat_map(|att| {
                self.arguments
                    .get_argument(att.attacker())
                    .defeasible_rules()
                    .iter()
                    .chain(
                        self.arguments
                            .get_argument(att.sub_argument())
                            .defeasible_rules()
                            .iter(),
                    )
                    .copied()
            })
            .collect::<BTreeSet<usize>>();
        let graph = self.rule_base.preference_graph();
        for rule in compared {
            if let Some(cycle) = graph.find_cycle_through(rule) {
                return Err(ReasoningError::PreferenceCycle {
                    rules: cycle
                        .iter()
                        .map(|r| self.rule_base.rule_label(*r))
                        .collect(),
                });
            }
        }
        Ok(())
    }
}
