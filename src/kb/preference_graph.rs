use std::collections::VecDeque;

/// The strict preference relation between rules, given as a directed graph.
///
/// Nodes are rule identifiers, and an edge goes from a rule to each rule declared as strictly preferred to it.
/// A rule is strictly preferred to another one iff a (non-empty) path links the latter to the former.
///
/// Cycles are not forbidden at construction time.
/// They are detected on demand by [find_cycle_through](Self::find_cycle_through).
#[derive(Clone, Debug, Default)]
pub struct PreferenceGraph {
    stronger: Vec<Vec<usize>>,
    n_edges: usize,
}

impl PreferenceGraph {
    pub(crate) fn new(n_rules: usize) -> Self {
        PreferenceGraph {
            stronger: vec![vec![]; n_rules],
            n_edges: 0,
        }
    }

    pub(crate) fn add_edge(&mut self, weaker: usize, stronger: usize) {
        let succ = &mut self.stronger[weaker];
        if let Err(pos) = succ.binary_search(&stronger) {
            succ.insert(pos, stronger);
            self.n_edges += 1;
        }
    }

    /// Returns the number of distinct edges.
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    /// Iterates over the edges, as `(weaker, stronger)` couples.
    pub fn iter_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stronger
            .iter()
            .enumerate()
            .flat_map(|(w, v)| v.iter().map(move |s| (w, *s)))
    }

    /// Returns the sorted list of rules that are strictly preferred to the given one (transitive closure).
    pub fn stronger_closure(&self, rule: usize) -> Vec<usize> {
        let mut seen = vec![false; self.stronger.len()];
        let mut stack = self.stronger[rule].clone();
        while let Some(r) = stack.pop() {
            if seen[r] {
                continue;
            }
            seen[r] = true;
            stack.extend(self.stronger[r].iter().filter(|s| !seen[**s]));
        }
        seen.iter()
            .enumerate()
            .filter_map(|(i, b)| if *b { Some(i) } else { None })
            .collect()
    }

    /// Returns `true` iff `stronger` is strictly preferred to `weaker`.
    pub fn is_strictly_preferred(&self, stronger: usize, weaker: usize) -> bool {
        self.stronger_closure(weaker).binary_search(&stronger).is_ok()
    }

    /// Searches for a cycle going through the given rule.
    ///
    /// If such a cycle exists, the shortest one is returned as the list of its rules, beginning with the provided one.
    pub fn find_cycle_through(&self, rule: usize) -> Option<Vec<usize>> {
        let mut parent: Vec<Option<usize>> = vec![None; self.stronger.len()];
        let mut queue = VecDeque::new();
        for s in self.stronger[rule].iter() {
            if parent[*s].is_none() {
                parent[*s] = Some(rule);
                queue.push_back(*s);
            }
        }
        while let Some(r) = queue.pop_front() {
            if r == rule {
                let mut cycle = vec![];
                let mut current = parent[rule];
                while let Some(c) = current {
                    if c == rule {
                        break;
                    }
                    cycle.push(c);
                    current = parent[c];
                }
                cycle.push(rule);
                cycle.reverse();
                return Some(cycle);
            }
            for s in self.stronger[r].iter() {
                if parent[*s].is_none() {
                    parent[*s] = Some(r);
                    queue.push_back(*s);
                }
            }
        }
        None
    }
}
