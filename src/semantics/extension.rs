use crate::framework::DefeatGraph;

/// Returns `true` iff no argument of the set defeats an argument of the set.
pub fn is_conflict_free(graph: &DefeatGraph, arguments: &[usize]) -> bool {
    let mut in_set = vec![false; graph.n_arguments()];
    arguments.iter().for_each(|a| in_set[*a] = true);
    arguments
        .iter()
        .all(|a| graph.defeats_from(*a).iter().all(|t| !in_set[*t]))
}

/// Returns `true` iff the set is conflict-free and defends each of its arguments,
/// i.e. each defeater of an argument of the set is defeated by an argument of the set.
pub fn is_admissible(graph: &DefeatGraph, arguments: &[usize]) -> bool {
    if !is_conflict_free(graph, arguments) {
        return false;
    }
    let mut defeated_by_set = vec![false; graph.n_arguments()];
    arguments
        .iter()
        .flat_map(|a| graph.defeats_from(*a).iter())
        .for_each(|t| defeated_by_set[*t] = true);
    arguments
        .iter()
        .all(|a| graph.defeats_to(*a).iter().all(|d| defeated_by_set[*d]))
}
