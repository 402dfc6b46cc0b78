use super::Attack;

/// The defeat relation between arguments, i.e. the attacks that survived the preference comparison.
///
/// This is an abstract argumentation framework: an edge links an attacker to a target as soon as at least one of the attacks between them is a defeat.
/// The attacks that became defeats are kept for explanation purposes.
#[derive(Clone, Debug, Default)]
pub struct DefeatGraph {
    defeating_attacks: Vec<Attack>,
    defeats_from: Vec<Vec<usize>>,
    defeats_to: Vec<Vec<usize>>,
    n_defeats: usize,
}

impl DefeatGraph {
    /// Builds a defeat graph given the number of arguments and the attacks that are defeats.
    pub fn new(n_arguments: usize, defeating_attacks: Vec<Attack>) -> Self {
        let mut defeats_from = vec![vec![]; n_arguments];
        let mut defeats_to = vec![vec![]; n_arguments];
        for attack in defeating_attacks.iter() {
            defeats_from[attack.attacker()].push(attack.target());
            defeats_to[attack.target()].push(attack.attacker());
        }
        let normalize = |v: &mut Vec<Vec<usize>>| {
            v.iter_mut().for_each(|l| {
                l.sort_unstable();
                l.dedup();
            })
        };
        normalize(&mut defeats_from);
        normalize(&mut defeats_to);
        let n_defeats = defeats_from.iter().map(|l| l.len()).sum();
        DefeatGraph {
            defeating_attacks,
            defeats_from,
            defeats_to,
            n_defeats,
        }
    }

    /// Returns the number of arguments.
    pub fn n_arguments(&self) -> usize {
        self.defeats_from.len()
    }

    /// Returns the number of (attacker, target) couples linked by a defeat.
    pub fn n_defeats(&self) -> usize {
        self.n_defeats
    }

    /// Returns the attacks that are defeats.
    pub fn defeating_attacks(&self) -> &[Attack] {
        &self.defeating_attacks
    }

    /// Returns the sorted identifiers of the arguments defeated by the given one.
    pub fn defeats_from(&self, argument: usize) -> &[usize] {
        &self.defeats_from[argument]
    }

    /// Returns the sorted identifiers of the arguments defeating the given one.
    pub fn defeats_to(&self, argument: usize) -> &[usize] {
        &self.defeats_to[argument]
    }

    /// Returns `true` iff `attacker` defeats `target`.
    pub fn defeats(&self, attacker: usize, target: usize) -> bool {
        self.defeats_from[attacker].binary_search(&target).is_ok()
    }

    /// Iterates over the defeats, as (attacker, target) couples, in lexicographic order.
    pub fn iter_defeats(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.defeats_from
            .iter()
            .enumerate()
            .flat_map(|(a, v)| v.iter().map(move |t| (a, *t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::AttackKind;

    #[test]
    fn test_duplicate_defeats_are_merged() {
        let graph = DefeatGraph::new(
            3,
            vec![
                Attack::new(0, 1, 1, AttackKind::Rebut),
                Attack::new(0, 1, 2, AttackKind::Rebut),
                Attack::new(0, 1, 1, AttackKind::Undercut),
                Attack::new(2, 0, 0, AttackKind::Rebut),
            ],
        );
        assert_eq!(3, graph.n_arguments());
        assert_eq!(2, graph.n_defeats());
        assert_eq!(4, graph.defeating_attacks().len());
        assert_eq!(&[1], graph.defeats_from(0));
        assert_eq!(&[0], graph.defeats_to(1));
        assert!(graph.defeats(2, 0));
        assert!(!graph.defeats(0, 2));
        assert_eq!(vec![(0, 1), (2, 0)], graph.iter_defeats().collect::<Vec<_>>());
    }
}
