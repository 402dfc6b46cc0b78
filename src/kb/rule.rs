use super::Literal;
use std::{cmp::Ordering, fmt::Display};
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumString};

/// The kind of a rule.
///
/// Strict rules are never attacked, while the applications of defeasible rules may be rebutted or undercut.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, StrumDisplay, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum RuleKind {
    /// A strict rule (`-->`).
    Strict,
    /// A defeasible rule (`==>`).
    Defeasible,
}

impl RuleKind {
    /// Returns the arrow used to write rules of this kind without undercutters.
    pub fn arrow(&self) -> &'static str {
        match self {
            RuleKind::Strict => "-->",
            RuleKind::Defeasible => "==>",
        }
    }
}

/// A rule, with an optional name.
///
/// Antecedents are considered as a multiset: they are stored sorted, and repetitions are kept.
/// A rule without antecedents is a fact.
/// Defeasible rules may declare undercutters, which are stored sorted and without repetition.
///
/// Rules are ordered by consequent, antecedents, kind, undercutters and then name.
/// Rule bases store their rules in this order.
///
/// # Example
///
/// ```
/// # use scarab::kb::{Literal, Rule};
/// let rule = Rule::defeasible(
///     vec![Literal::positive("b").unwrap(), Literal::positive("a").unwrap()],
///     Literal::negative("c").unwrap(),
/// )
/// .with_name("R1")
/// .with_undercutters(vec![Literal::positive("u").unwrap()]);
/// assert_eq!("R1: a, b =(u)=> -c", rule.to_string());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    name: Option<String>,
    kind: RuleKind,
    antecedents: Vec<Literal>,
    consequent: Literal,
    undercutters: Vec<Literal>,
}

impl Rule {
    /// Builds a new unnamed rule without undercutters.
    pub fn new(kind: RuleKind, mut antecedents: Vec<Literal>, consequent: Literal) -> Self {
        antecedents.sort_unstable();
        Rule {
            name: None,
            kind,
            antecedents,
            consequent,
            undercutters: vec![],
        }
    }

    /// Builds a new unnamed strict rule.
    pub fn strict(antecedents: Vec<Literal>, consequent: Literal) -> Self {
        Self::new(RuleKind::Strict, antecedents, consequent)
    }

    /// Builds a new unnamed defeasible rule without undercutters.
    pub fn defeasible(antecedents: Vec<Literal>, consequent: Literal) -> Self {
        Self::new(RuleKind::Defeasible, antecedents, consequent)
    }

    /// Sets the name of this rule.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the undercutters of this rule.
    ///
    /// Declaring undercutters on a strict rule is allowed here,
    /// but such a rule is refused when the rule base is built.
    pub fn with_undercutters(mut self, mut undercutters: Vec<Literal>) -> Self {
        undercutters.sort_unstable();
        undercutters.dedup();
        self.undercutters = undercutters;
        self
    }

    /// Returns the name of the rule, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the kind of the rule.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns `true` iff the rule is strict.
    pub fn is_strict(&self) -> bool {
        self.kind == RuleKind::Strict
    }

    /// Returns `true` iff the rule is defeasible.
    pub fn is_defeasible(&self) -> bool {
        self.kind == RuleKind::Defeasible
    }

    /// Returns `true` iff the rule has no antecedent.
    pub fn is_fact(&self) -> bool {
        self.antecedents.is_empty()
    }

    /// Returns the (sorted) antecedents.
    pub fn antecedents(&self) -> &[Literal] {
        &self.antecedents
    }

    /// Returns the consequent.
    pub fn consequent(&self) -> &Literal {
        &self.consequent
    }

    /// Returns the (sorted) undercutters.
    pub fn undercutters(&self) -> &[Literal] {
        &self.undercutters
    }

    /// Returns `true` if both rules have the same kind, antecedents, consequent and undercutters, whatever their names.
    pub fn same_inference_as(&self, other: &Rule) -> bool {
        self.kind == other.kind
            && self.consequent == other.consequent
            && self.antecedents == other.antecedents
            && self.undercutters == other.undercutters
    }
}

impl PartialOrd for Rule {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rule {
    fn cmp(&self, other: &Self) -> Ordering {
        self.consequent
            .cmp(&other.consequent)
            .then_with(|| self.antecedents.cmp(&other.antecedents))
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.undercutters.cmp(&other.undercutters))
            .then_with(|| self.name.cmp(&other.name))
    }
}

fn write_literal_list(f: &mut std::fmt::Formatter<'_>, literals: &[Literal]) -> std::fmt::Result {
    for (i, l) in literals.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", l)?;
    }
    Ok(())
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(n) = &self.name {
            write!(f, "{}: ", n)?;
        }
        write_literal_list(f, &self.antecedents)?;
        if !self.antecedents.is_empty() {
            write!(f, " ")?;
        }
        if self.undercutters.is_empty() {
            write!(f, "{}", self.kind.arrow())?;
        } else {
            write!(f, "=(")?;
            write_literal_list(f, &self.undercutters)?;
            write!(f, ")=>")?;
        }
        write!(f, " {}", self.consequent)
    }
}

/// A preference statement between two named defeasible rules.
///
/// The statement `weaker < stronger` means that the rule named `stronger` is strictly preferred to the one named `weaker`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Preference {
    weaker: String,
    stronger: String,
}

impl Preference {
    /// Builds a preference statement given the names of the weaker and the stronger rules.
    pub fn new(weaker: &str, stronger: &str) -> Self {
        Preference {
            weaker: weaker.to_string(),
            stronger: stronger.to_string(),
        }
    }

    /// Returns the name of the less preferred rule.
    pub fn weaker(&self) -> &str {
        &self.weaker
    }

    /// Returns the name of the strictly preferred rule.
    pub fn stronger(&self) -> &str {
        &self.stronger
    }
}

impl Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} < {}", self.weaker, self.stronger)
    }
}
