use super::ArgumentSet;
use crate::{
    kb::RuleBase,
    reasoner::{ReasonerConfig, ReasoningError, ResourceLimit},
};
use log::{debug, info};
use permutator::CartesianProduct;

/// An object used to build all the arguments of a rule base.
///
/// Arguments are built in rounds.
/// The first round applies the facts.
/// Each of the next rounds applies the other rules to the arguments built before it, considering only the combinations that involve at least one argument built during the previous round.
/// The process stops when a round produces no new argument.
///
/// An argument whose conclusion is already concluded by one of its sub-arguments is never built:
/// a literal cannot be used to derive itself.
/// This keeps the set of arguments finite, even if the rules have cyclic dependencies.
///
/// # Example
///
/// ```
/// # use scarab::arguments::ArgumentConstructor;
/// # use scarab::kb::{Literal, Rule, RuleBase};
/// let lit = |s: &str| s.parse::<Literal>().unwrap();
/// let rule_base = RuleBase::build(
///     vec![
///         Rule::strict(vec![], lit("a")),
///         Rule::defeasible(vec![lit("a")], lit("b")),
///         Rule::defeasible(vec![lit("b")], lit("a")),
///     ],
///     vec![],
/// )
/// .unwrap();
/// let arguments = ArgumentConstructor::new(&rule_base).construct().unwrap();
/// assert_eq!(2, arguments.len());
/// ```
pub struct ArgumentConstructor<'a> {
    rule_base: &'a RuleBase,
    max_arguments: usize,
    max_depth: usize,
}

impl<'a> ArgumentConstructor<'a> {
    /// Builds a new constructor for the given rule base, with the default resource limits.
    pub fn new(rule_base: &'a RuleBase) -> Self {
        Self::new_with_config(rule_base, &ReasonerConfig::default())
    }

    /// Builds a new constructor for the given rule base, with the resource limits of the given configuration.
    pub fn new_with_config(rule_base: &'a RuleBase, config: &ReasonerConfig) -> Self {
        ArgumentConstructor {
            rule_base,
            max_arguments: config.max_arguments(),
            max_depth: config.max_depth(),
        }
    }

    /// Builds the arguments.
    ///
    /// If a resource limit is exceeded, the construction stops and an error containing the arguments built so far is returned.
    pub fn construct(&self) -> Result<ArgumentSet, ReasoningError> {
        let rb = self.rule_base;
        let mut set = ArgumentSet::new(rb.literals().len());
        for rule in (0..rb.n_rules()).filter(|r| rb.rule(*r).is_fact()) {
            if let Some(limit) = self.exceeded_limit(&set, 1) {
                return Err(exhausted(limit, set));
            }
            set.new_argument(rb, rule, vec![]);
        }
        debug!("round 0 built {} argument(s) from facts", set.len());
        let mut round = 0;
        let mut round_start = 0;
        let mut round_end = set.len();
        while round_start < round_end {
            round += 1;
            for rule in (0..rb.n_rules()).filter(|r| !rb.rule(*r).is_fact()) {
                let antecedents = rb.antecedent_ids(rule);
                let domains = antecedents
                    .iter()
                    .map(|l| {
                        let concluding = set.arguments_concluding(*l);
                        let available = concluding.partition_point(|a| *a < round_end);
                        concluding[..available].to_vec()
                    })
                    .collect::<Vec<Vec<usize>>>();
                if domains.iter().any(|d| d.is_empty())
                    || domains
                        .iter()
                        .all(|d| d.last().map_or(true, |a| *a < round_start))
                {
                    continue;
                }
                let domain_refs = domains
                    .iter()
                    .map(|v| v.as_slice())
                    .collect::<Vec<&[usize]>>();
                let conclusion = rb.consequent_id(rule);
                for combination in domain_refs.as_slice().cart_prod() {
                    let subs = combination.into_iter().copied().collect::<Vec<usize>>();
                    if subs.iter().all(|s| *s < round_start)
                        || !is_canonical(antecedents, &subs)
                        || subs
                            .iter()
                            .any(|s| set.get_argument(*s).concludes_in_derivation(conclusion))
                        || set.find_argument(rule, &subs).is_some()
                    {
                        continue;
                    }
                    let depth = 1 + subs
                        .iter()
                        .map(|s| set.get_argument(*s).depth())
                        .max()
                        .unwrap_or(0);
                    if let Some(limit) = self.exceeded_limit(&set, depth) {
                        return Err(exhausted(limit, set));
                    }
                    set.new_argument(rb, rule, subs);
                }
            }
            debug!(
                "round {} built {} argument(s)",
                round,
                set.len() - round_end
            );
            round_start = round_end;
            round_end = set.len();
        }
        info!(
            "built {} argument(s) in {} round(s)",
            set.len(),
            round
        );
        Ok(set)
    }

    fn exceeded_limit(&self, set: &ArgumentSet, new_arg_depth: usize) -> Option<ResourceLimit> {
        if set.len() >= self.max_arguments {
            Some(ResourceLimit::Arguments(self.max_arguments))
        } else if new_arg_depth > self.max_depth {
            Some(ResourceLimit::Depth(self.max_depth))
        } else {
            None
        }
    }
}

fn exhausted(limit: ResourceLimit, partial: ArgumentSet) -> ReasoningError {
    ReasoningError::ResourceExhausted {
        limit,
        partial: Box::new(partial),
    }
}

// Repeated antecedents are satisfied by non-decreasing argument ids, so permutations are not built twice.
fn is_canonical(antecedents: &[usize], subs: &[usize]) -> bool {
    (1..antecedents.len()).all(|i| antecedents[i] != antecedents[i - 1] || subs[i - 1] <= subs[i])
}
