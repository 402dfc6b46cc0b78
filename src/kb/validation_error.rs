use super::Literal;
use thiserror::Error;

/// The errors raised while building literals and rule bases.
///
/// A rule base that was built successfully is guaranteed to be free of these problems,
/// so the later reasoning stages never check them again.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A literal was built from an empty atom name.
    #[error("literal atom names must not be empty")]
    EmptyAtom,
    /// A string could not be interpreted as a literal.
    #[error(r#"invalid literal "{0}""#)]
    InvalidLiteral(String),
    /// Two rules share the same name.
    #[error(r#"rule name "{0}" is used more than once"#)]
    DuplicateRuleName(String),
    /// A preference statement refers to a rule name that does not exist.
    #[error(r#"preference statement refers to unknown rule "{0}""#)]
    UnknownRule(String),
    /// A preference statement refers to a strict rule.
    #[error(r#"preference statement refers to rule "{0}", which is not defeasible"#)]
    NonDefeasiblePreference(String),
    /// A preference statement makes a rule strictly preferred to itself.
    #[error(r#"rule "{0}" cannot be strictly preferred to itself"#)]
    PreferenceSelfLoop(String),
    /// A strict rule declares undercutters.
    #[error("strict rule {0} cannot declare undercutters")]
    UndercutterOnStrictRule(String),
    /// Neither an undercutter literal nor its complement appears as an antecedent or a consequent.
    #[error("neither undercutter {literal} of rule {rule} nor its complement appears in a rule")]
    UnknownUndercutter {
        /// the rule declaring the undercutter
        rule: String,
        /// the undercutter
        literal: Literal,
    },
}
