use super::ValidationError;
use std::{fmt::Display, str::FromStr};

/// A ground literal, made of an atom name and a polarity.
///
/// Two literals are complementary iff they share the same atom and have opposite polarities.
/// Literals are totally ordered by atom name first, and then by polarity (positive literals first).
/// This order is used everywhere a deterministic iteration is needed.
///
/// # Example
///
/// ```
/// # use scarab::kb::Literal;
/// let p = Literal::positive("p").unwrap();
/// let not_p: Literal = "-p".parse().unwrap();
/// assert!(p.is_complementary_to(&not_p));
/// assert_eq!(not_p, p.complement());
/// assert!(p < not_p);
/// assert_eq!("-p", not_p.to_string());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    atom: String,
    negated: bool,
}

impl Literal {
    /// Builds a new literal given its atom name and its polarity.
    ///
    /// An error is returned if the atom name is empty.
    pub fn new(atom: &str, negated: bool) -> Result<Self, ValidationError> {
        if atom.is_empty() {
            return Err(ValidationError::EmptyAtom);
        }
        Ok(Literal {
            atom: atom.to_string(),
            negated,
        })
    }

    /// Builds a positive literal.
    pub fn positive(atom: &str) -> Result<Self, ValidationError> {
        Self::new(atom, false)
    }

    /// Builds a negative literal.
    pub fn negative(atom: &str) -> Result<Self, ValidationError> {
        Self::new(atom, true)
    }

    /// Returns the atom name of this literal.
    pub fn atom(&self) -> &str {
        &self.atom
    }

    /// Returns `true` iff this literal is negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Returns the complementary literal.
    pub fn complement(&self) -> Literal {
        Literal {
            atom: self.atom.clone(),
            negated: !self.negated,
        }
    }

    /// Returns `true` iff both literals have the same atom and opposite polarities.
    pub fn is_complementary_to(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.negated != other.negated
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "-{}", self.atom)
        } else {
            write!(f, "{}", self.atom)
        }
    }
}

impl FromStr for Literal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (atom, negated) = match trimmed.strip_prefix('-') {
            Some(a) => (a.trim_start(), true),
            None => (trimmed, false),
        };
        if atom.starts_with('-') || atom.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(ValidationError::InvalidLiteral(s.to_string()));
        }
        Literal::new(atom, negated)
    }
}
