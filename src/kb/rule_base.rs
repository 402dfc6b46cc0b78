use super::{Literal, Preference, PreferenceGraph, Rule, ValidationError};
use log::debug;
use std::collections::{BTreeSet, HashMap, HashSet};

/// An immutable, validated set of rules together with a preference relation among its defeasible rules.
///
/// Rules are given identifiers equal to their index in the canonical rule order (see [`Rule`]),
/// and literals are given identifiers equal to their index in the literal order (see [`Literal`]).
/// Since both orders do not depend on the order the rules were provided,
/// neither do the identifiers, nor any result computed from the rule base.
///
/// # Example
///
/// ```
/// # use scarab::kb::{Literal, Preference, Rule, RuleBase};
/// let lit = |s: &str| s.parse::<Literal>().unwrap();
/// let rule_base = RuleBase::build(
///     vec![
///         Rule::strict(vec![], lit("a")),
///         Rule::defeasible(vec![lit("a")], lit("b")).with_name("R1"),
///         Rule::defeasible(vec![lit("a")], lit("-b")).with_name("R2"),
///     ],
///     vec![Preference::new("R2", "R1")],
/// )
/// .unwrap();
/// assert_eq!(3, rule_base.n_rules());
/// assert_eq!(3, rule_base.literals().len());
/// ```
#[derive(Clone, Debug)]
pub struct RuleBase {
    rules: Vec<Rule>,
    rule_name_to_id: HashMap<String, usize>,
    literals: Vec<Literal>,
    literal_to_id: HashMap<Literal, usize>,
    complements: Vec<Option<usize>>,
    antecedent_ids: Vec<Vec<usize>>,
    consequent_ids: Vec<usize>,
    undercutting_ids: Vec<Vec<usize>>,
    preferences: Vec<Preference>,
    preference_graph: PreferenceGraph,
}

impl RuleBase {
    /// Builds a rule base given its rules and its preference statements.
    ///
    /// Rules that are exact copies of each other (names included) are merged.
    /// An error is returned if:
    /// * two rules share a name,
    /// * a strict rule declares undercutters,
    /// * neither an undercutter nor its complement is an antecedent or a consequent of a rule,
    /// * a preference statement refers to an unknown rule or to a strict rule,
    /// * a preference statement makes a rule preferred to itself.
    ///
    /// Longer cycles in the preference relation are accepted here;
    /// they are reported when a reasoning process needs to compare the rules involved in them.
    pub fn build(mut rules: Vec<Rule>, preferences: Vec<Preference>) -> Result<Self, ValidationError> {
        let n_input_rules = rules.len();
        rules.sort();
        rules.dedup();
        if rules.len() < n_input_rules {
            debug!(
                "merged {} duplicated rule(s)",
                n_input_rules - rules.len()
            );
        }
        let rule_name_to_id = index_rule_names(&rules)?;
        let literals = collect_literals(&rules)?;
        let literal_to_id = literals
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect::<HashMap<Literal, usize>>();
        let complements = literals
            .iter()
            .map(|l| literal_to_id.get(&l.complement()).copied())
            .collect();
        let to_ids = |v: &[Literal]| v.iter().map(|l| literal_to_id[l]).collect::<Vec<usize>>();
        let antecedent_ids = rules.iter().map(|r| to_ids(r.antecedents())).collect();
        let consequent_ids = rules.iter().map(|r| literal_to_id[r.consequent()]).collect();
        let undercutting_ids = rules
            .iter()
            .map(|r| {
                let mut ids = r
                    .undercutters()
                    .iter()
                    .filter_map(|u| literal_to_id.get(&u.complement()).copied())
                    .collect::<Vec<usize>>();
                ids.sort_unstable();
                ids
            })
            .collect();
        let mut preference_graph = PreferenceGraph::new(rules.len());
        for p in preferences.iter() {
            let weaker = preference_rule_id(&rules, &rule_name_to_id, p.weaker())?;
            let stronger = preference_rule_id(&rules, &rule_name_to_id, p.stronger())?;
            if weaker == stronger {
                return Err(ValidationError::PreferenceSelfLoop(p.weaker().to_string()));
            }
            preference_graph.add_edge(weaker, stronger);
        }
        debug!(
            "built a rule base with {} rule(s), {} literal(s) and {} preference edge(s)",
            rules.len(),
            literals.len(),
            preference_graph.n_edges()
        );
        Ok(RuleBase {
            rules,
            rule_name_to_id,
            literals,
            literal_to_id,
            complements,
            antecedent_ids,
            consequent_ids,
            undercutting_ids,
            preferences,
            preference_graph,
        })
    }

    /// Returns a new rule base closed under contraposition of its strict rules.
    ///
    /// For each strict rule `a1, ..., an --> c` and each antecedent `ai`,
    /// the strict rule `a1, ..., ai-1, ai+1, ..., an, -c --> -ai` is added unless a strict rule with the same antecedents and consequent already exists.
    /// The operation is repeated until no new rule is produced.
    /// Added rules are unnamed; the preference statements are kept.
    pub fn with_contrapositions(&self) -> Result<Self, ValidationError> {
        let mut rules = self.rules.clone();
        let mut known = rules
            .iter()
            .filter(|r| r.is_strict())
            .map(|r| (r.antecedents().to_vec(), r.consequent().clone()))
            .collect::<HashSet<(Vec<Literal>, Literal)>>();
        let mut to_process = 0;
        while to_process < rules.len() {
            let rule = rules[to_process].clone();
            to_process += 1;
            if !rule.is_strict() {
                continue;
            }
            for i in 0..rule.antecedents().len() {
                let mut antecedents = rule.antecedents().to_vec();
                let contraposed = antecedents.remove(i).complement();
                antecedents.push(rule.consequent().complement());
                antecedents.sort_unstable();
                if known.insert((antecedents.clone(), contraposed.clone())) {
                    rules.push(Rule::strict(antecedents, contraposed));
                }
            }
        }
        debug!(
            "contraposition added {} strict rule(s)",
            rules.len() - self.rules.len()
        );
        RuleBase::build(rules, self.preferences.clone())
    }

    /// Returns the rules, in their canonical order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn n_rules(&self) -> usize {
        self.rules.len()
    }

    /// Returns the rule with the given identifier.
    ///
    /// # Panics
    ///
    /// Panics if the identifier is out of range.
    pub fn rule(&self, id: usize) -> &Rule {
        &self.rules[id]
    }

    /// Returns the identifier of the rule with the given name, if any.
    pub fn rule_id(&self, name: &str) -> Option<usize> {
        self.rule_name_to_id.get(name).copied()
    }

    /// Returns a human-readable identification of a rule: its name if it has one, or its textual form.
    pub fn rule_label(&self, id: usize) -> String {
        let rule = &self.rules[id];
        match rule.name() {
            Some(n) => n.to_string(),
            None => format!("[{}]", rule),
        }
    }

    /// Returns the literals appearing in the rules, in increasing order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Returns the literal with the given identifier.
    ///
    /// # Panics
    ///
    /// Panics if the identifier is out of range.
    pub fn literal(&self, id: usize) -> &Literal {
        &self.literals[id]
    }

    /// Returns the identifier of a literal, if it appears in the rule base.
    pub fn literal_id(&self, literal: &Literal) -> Option<usize> {
        self.literal_to_id.get(literal).copied()
    }

    /// Returns the identifier of the complement of a literal, if this complement appears in the rule base.
    pub fn complement_id(&self, literal_id: usize) -> Option<usize> {
        self.complements[literal_id]
    }

    /// Returns the literal identifiers of the (sorted) antecedents of a rule.
    pub fn antecedent_ids(&self, rule_id: usize) -> &[usize] {
        &self.antecedent_ids[rule_id]
    }

    /// Returns the literal identifier of the consequent of a rule.
    pub fn consequent_id(&self, rule_id: usize) -> usize {
        self.consequent_ids[rule_id]
    }

    /// Returns the identifiers of the literals undercutting a rule, in increasing order.
    ///
    /// An undercutter `v` declared by `=(v)=>` names a literal the rule application presumes;
    /// the rule is undercut by any argument concluding the complement `-v`.
    /// Complements that appear in no rule cannot be concluded and are omitted.
    pub fn undercutting_ids(&self, rule_id: usize) -> &[usize] {
        &self.undercutting_ids[rule_id]
    }

    /// Returns the preference statements the rule base was built with.
    pub fn preferences(&self) -> &[Preference] {
        &self.preferences
    }

    /// Returns the preference relation, as a graph over rule identifiers.
    pub fn preference_graph(&self) -> &PreferenceGraph {
        &self.preference_graph
    }
}

fn index_rule_names(rules: &[Rule]) -> Result<HashMap<String, usize>, ValidationError> {
    let mut names = HashMap::new();
    for (i, r) in rules.iter().enumerate() {
        if let Some(n) = r.name() {
            if names.insert(n.to_string(), i).is_some() {
                return Err(ValidationError::DuplicateRuleName(n.to_string()));
            }
        }
    }
    Ok(names)
}

fn collect_literals(rules: &[Rule]) -> Result<Vec<Literal>, ValidationError> {
    let used = rules
        .iter()
        .flat_map(|r| r.antecedents().iter().chain(std::iter::once(r.consequent())))
        .cloned()
        .collect::<BTreeSet<Literal>>();
    for r in rules.iter() {
        if r.is_strict() && !r.undercutters().is_empty() {
            return Err(ValidationError::UndercutterOnStrictRule(r.to_string()));
        }
        if let Some(u) = r
            .undercutters()
            .iter()
            .find(|u| !used.contains(*u) && !used.contains(&u.complement()))
        {
            return Err(ValidationError::UnknownUndercutter {
                rule: r.to_string(),
                literal: u.clone(),
            });
        }
    }
    Ok(used.into_iter().collect())
}

fn preference_rule_id(
    rules: &[Rule],
    rule_name_to_id: &HashMap<String, usize>,
    name: &str,
) -> Result<usize, ValidationError> {
    match rule_name_to_id.get(name) {
        None => Err(ValidationError::UnknownRule(name.to_string())),
        Some(id) if !rules[*id].is_defeasible() => {
            Err(ValidationError::NonDefeasiblePreference(name.to_string()))
        }
        Some(id) => Ok(*id),
    }
}
