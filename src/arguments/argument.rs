use crate::kb::RuleBase;
use std::{collections::HashMap, fmt::Display};

/// A single argument, i.e. a derivation tree built from rule applications.
///
/// Arguments are nodes of an [`ArgumentSet`] arena: they refer to their rules, literals and sub-arguments by identifiers.
/// Rule and literal identifiers are the ones of the [`RuleBase`] the arguments were built from.
///
/// Each argument stores, in addition to its top rule and its direct sub-arguments,
/// some aggregates computed once at construction time: the set of rules it uses,
/// the set of its defeasible rules, the set of its sub-arguments (itself included),
/// the set of literals concluded anywhere in its derivation, and its depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    id: usize,
    top_rule: usize,
    conclusion: usize,
    direct_sub_arguments: Vec<usize>,
    sub_arguments: Vec<usize>,
    rules: Vec<usize>,
    defeasible_rules: Vec<usize>,
    concluded_literals: Vec<usize>,
    depth: usize,
}

impl Argument {
    /// Returns the identifier of the argument, which is its index in its argument set.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the identifier of the last rule applied by this argument.
    pub fn top_rule(&self) -> usize {
        self.top_rule
    }

    /// Returns the identifier of the literal concluded by this argument.
    pub fn conclusion(&self) -> usize {
        self.conclusion
    }

    /// Returns the arguments used to satisfy the antecedents of the top rule.
    ///
    /// They are given in the order of the (sorted) antecedents of the top rule.
    /// The same argument may appear several times if the top rule repeats an antecedent.
    pub fn direct_sub_arguments(&self) -> &[usize] {
        &self.direct_sub_arguments
    }

    /// Returns the sorted identifiers of all the sub-arguments of this argument, including itself.
    pub fn sub_arguments(&self) -> &[usize] {
        &self.sub_arguments
    }

    /// Returns the sorted identifiers of all the rules used in this argument.
    pub fn rules(&self) -> &[usize] {
        &self.rules
    }

    /// Returns the sorted identifiers of the defeasible rules used in this argument.
    pub fn defeasible_rules(&self) -> &[usize] {
        &self.defeasible_rules
    }

    /// Returns `true` iff this argument only uses strict rules.
    ///
    /// Strict arguments cannot be attacked.
    pub fn is_strict(&self) -> bool {
        self.defeasible_rules.is_empty()
    }

    /// Returns `true` iff the given literal is concluded somewhere in this argument (including its conclusion).
    pub fn concludes_in_derivation(&self, literal: usize) -> bool {
        self.concluded_literals.binary_search(&literal).is_ok()
    }

    /// Returns the depth of this argument: one for an argument built on a fact,
    /// and one plus the maximal depth of its direct sub-arguments in the other cases.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A{}", self.id)
    }
}

/// The arena of arguments built from a rule base.
///
/// Arguments are identified by their index in the set.
/// The set also indexes arguments by conclusion, and ensures no two arguments share the same top rule and direct sub-arguments.
#[derive(Clone, Debug, Default)]
pub struct ArgumentSet {
    arguments: Vec<Argument>,
    by_conclusion: Vec<Vec<usize>>,
    structure_to_id: HashMap<(usize, Vec<usize>), usize>,
}

fn sorted_union<'a, F>(sub_arguments: &[&'a Argument], f: F, additional: Option<usize>) -> Vec<usize>
where
    F: Fn(&'a Argument) -> &'a [usize],
{
    let mut result = sub_arguments
        .iter()
        .flat_map(|a| f(*a).iter().copied())
        .chain(additional)
        .collect::<Vec<usize>>();
    result.sort_unstable();
    result.dedup();
    result
}

impl ArgumentSet {
    pub(crate) fn new(n_literals: usize) -> Self {
        ArgumentSet {
            arguments: vec![],
            by_conclusion: vec![vec![]; n_literals],
            structure_to_id: HashMap::new(),
        }
    }

    /// Returns the identifier of the argument with the given top rule and direct sub-arguments, if it exists.
    pub fn find_argument(&self, top_rule: usize, direct_sub_arguments: &[usize]) -> Option<usize> {
        self.structure_to_id
            .get(&(top_rule, direct_sub_arguments.to_vec()))
            .copied()
    }

    pub(crate) fn new_argument(
        &mut self,
        rule_base: &RuleBase,
        top_rule: usize,
        direct_sub_arguments: Vec<usize>,
    ) -> usize {
        if let Some(id) = self.find_argument(top_rule, &direct_sub_arguments) {
            return id;
        }
        let id = self.arguments.len();
        let conclusion = rule_base.consequent_id(top_rule);
        let subs = direct_sub_arguments
            .iter()
            .map(|s| &self.arguments[*s])
            .collect::<Vec<&Argument>>();
        let defeasible_top = if rule_base.rule(top_rule).is_defeasible() {
            Some(top_rule)
        } else {
            None
        };
        let argument = Argument {
            id,
            top_rule,
            conclusion,
            sub_arguments: sorted_union(&subs, |a| a.sub_arguments(), Some(id)),
            rules: sorted_union(&subs, |a| a.rules(), Some(top_rule)),
            defeasible_rules: sorted_union(&subs, |a| a.defeasible_rules(), defeasible_top),
            concluded_literals: sorted_union(&subs, |a| a.concluded_literals.as_slice(), Some(conclusion)),
            depth: 1 + subs.iter().map(|a| a.depth).max().unwrap_or(0),
            direct_sub_arguments,
        };
        self.structure_to_id
            .insert((top_rule, argument.direct_sub_arguments.clone()), id);
        self.by_conclusion[conclusion].push(id);
        self.arguments.push(argument);
        id
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set contains no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the argument with the given identifier.
    ///
    /// # Panics
    ///
    /// Panics if the identifier is out of range.
    pub fn get_argument(&self, id: usize) -> &Argument {
        &self.arguments[id]
    }

    /// Iterates over the arguments, in increasing identifier order.
    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.arguments.iter()
    }

    /// Returns the sorted identifiers of the arguments concluding the given literal.
    pub fn arguments_concluding(&self, literal: usize) -> &[usize] {
        &self.by_conclusion[literal]
    }

    /// Returns a textual description of an argument: its name, the rule it applies to its direct sub-arguments, and its conclusion.
    ///
    /// # Example
    ///
    /// ```text
    /// A3 = R1(A0) : jt
    /// ```
    pub fn describe(&self, rule_base: &RuleBase, id: usize) -> String {
        format!("{} = {}", self.arguments[id], self.derivation(rule_base, id))
    }

    /// Returns the last inference step of an argument: the rule it applies to its direct sub-arguments, and its conclusion.
    pub fn derivation(&self, rule_base: &RuleBase, id: usize) -> String {
        let arg = &self.arguments[id];
        let subs = arg
            .direct_sub_arguments
            .iter()
            .map(|s| format!("A{}", s))
            .collect::<Vec<String>>()
            .join(", ");
        format!(
            "{}({}) : {}",
            rule_base.rule_label(arg.top_rule),
            subs,
            rule_base.literal(arg.conclusion)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::{Literal, Rule};

    fn lit(s: &str) -> Literal {
        s.parse().unwrap()
    }

    fn rule_base() -> RuleBase {
        RuleBase::build(
            vec![
                Rule::strict(vec![], lit("a")),
                Rule::defeasible(vec![lit("a")], lit("b")).with_name("R1"),
                Rule::strict(vec![lit("a"), lit("b")], lit("c")),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_aggregates() {
        let rb = rule_base();
        let fact = (0..rb.n_rules()).find(|r| rb.rule(*r).is_fact()).unwrap();
        let r1 = rb.rule_id("R1").unwrap();
        let r_c = (0..rb.n_rules())
            .find(|r| rb.rule(*r).antecedents().len() == 2)
            .unwrap();
        let mut set = ArgumentSet::new(rb.literals().len());
        let a0 = set.new_argument(&rb, fact, vec![]);
        let a1 = set.new_argument(&rb, r1, vec![a0]);
        let a2 = set.new_argument(&rb, r_c, vec![a0, a1]);
        assert_eq!(3, set.len());
        assert!(set.get_argument(a0).is_strict());
        assert!(!set.get_argument(a1).is_strict());
        let arg = set.get_argument(a2);
        assert!(!arg.is_strict());
        assert_eq!(vec![a0, a1, a2], arg.sub_arguments().to_vec());
        assert_eq!(vec![r1], arg.defeasible_rules().to_vec());
        assert_eq!(3, arg.rules().len());
        assert_eq!(3, arg.depth());
        assert_eq!(1, set.get_argument(a0).depth());
        for l in ["a", "b", "c"] {
            assert!(arg.concludes_in_derivation(rb.literal_id(&lit(l)).unwrap()));
        }
        assert!(!set
            .get_argument(a1)
            .concludes_in_derivation(rb.literal_id(&lit("c")).unwrap()));
        assert_eq!(
            &[a1],
            set.arguments_concluding(rb.literal_id(&lit("b")).unwrap())
        );
    }

    #[test]
    fn test_structural_dedup() {
        let rb = rule_base();
        let fact = (0..rb.n_rules()).find(|r| rb.rule(*r).is_fact()).unwrap();
        let mut set = ArgumentSet::new(rb.literals().len());
        let a0 = set.new_argument(&rb, fact, vec![]);
        assert_eq!(a0, set.new_argument(&rb, fact, vec![]));
        assert_eq!(1, set.len());
        assert_eq!(Some(a0), set.find_argument(fact, &[]));
    }

    #[test]
    fn test_describe() {
        let rb = rule_base();
        let fact = (0..rb.n_rules()).find(|r| rb.rule(*r).is_fact()).unwrap();
        let r1 = rb.rule_id("R1").unwrap();
        let mut set = ArgumentSet::new(rb.literals().len());
        let a0 = set.new_argument(&rb, fact, vec![]);
        let a1 = set.new_argument(&rb, r1, vec![a0]);
        assert_eq!("A0 = [--> a]() : a", set.describe(&rb, a0));
        assert_eq!("A1 = R1(A0) : b", set.describe(&rb, a1));
    }
}
