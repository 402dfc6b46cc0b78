use strum_macros::{AsRefStr, Display, EnumString};

/// The kind of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AttackKind {
    /// The attacker concludes the complement of the conclusion of the attacked sub-argument.
    Rebut,
    /// The attacker concludes the complement of an undercutter of the top rule of the attacked sub-argument.
    Undercut,
}

/// An attack from an argument to another, on one of its sub-arguments.
///
/// The attacked sub-argument may be the target itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attack {
    attacker: usize,
    target: usize,
    sub_argument: usize,
    kind: AttackKind,
}

impl Attack {
    pub(crate) fn new(attacker: usize, target: usize, sub_argument: usize, kind: AttackKind) -> Self {
        Attack {
            attacker,
            target,
            sub_argument,
            kind,
        }
    }

    /// Returns the identifier of the attacking argument.
    pub fn attacker(&self) -> usize {
        self.attacker
    }

    /// Returns the identifier of the attacked argument.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the identifier of the sub-argument of the target on which the attack applies.
    pub fn sub_argument(&self) -> usize {
        self.sub_argument
    }

    /// Returns the kind of the attack.
    pub fn kind(&self) -> AttackKind {
        self.kind
    }
}

/// The set of attacks between the arguments of an [`ArgumentSet`](crate::arguments::ArgumentSet).
///
/// Attacks are stored in the order they were added, and indexed by attacker and target.
#[derive(Clone, Debug, Default)]
pub struct AttackSet {
    attacks: Vec<Attack>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
}

impl AttackSet {
    pub(crate) fn new(n_arguments: usize) -> Self {
        AttackSet {
            attacks: vec![],
            attacks_from: vec![vec![]; n_arguments],
            attacks_to: vec![vec![]; n_arguments],
        }
    }

    pub(crate) fn new_attack(&mut self, attack: Attack) {
        self.attacks_from[attack.attacker].push(self.attacks.len());
        self.attacks_to[attack.target].push(self.attacks.len());
        self.attacks.push(attack);
    }

    /// Returns the number of attacks.
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    /// Returns `true` iff there is no attack.
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }

    /// Iterates over the attacks.
    pub fn iter(&self) -> std::slice::Iter<'_, Attack> {
        self.attacks.iter()
    }

    /// Iterates over the attacks made by an argument.
    pub fn iter_attacks_from(&self, argument: usize) -> impl Iterator<Item = &Attack> + '_ {
        self.attacks_from[argument].iter().map(|i| &self.attacks[*i])
    }

    /// Iterates over the attacks targeting an argument.
    pub fn iter_attacks_to(&self, argument: usize) -> impl Iterator<Item = &Attack> + '_ {
        self.attacks_to[argument].iter().map(|i| &self.attacks[*i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes() {
        let mut attacks = AttackSet::new(3);
        attacks.new_attack(Attack::new(0, 1, 1, AttackKind::Rebut));
        attacks.new_attack(Attack::new(0, 2, 1, AttackKind::Undercut));
        attacks.new_attack(Attack::new(2, 1, 1, AttackKind::Rebut));
        assert_eq!(3, attacks.len());
        assert_eq!(2, attacks.iter_attacks_from(0).count());
        assert_eq!(0, attacks.iter_attacks_from(1).count());
        assert_eq!(
            vec![0, 2],
            attacks
                .iter_attacks_to(1)
                .map(|a| a.attacker())
                .collect::<Vec<usize>>()
        );
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!("rebut", AttackKind::Rebut.to_string());
        assert_eq!(AttackKind::Undercut, "undercut".parse().unwrap());
    }
}
