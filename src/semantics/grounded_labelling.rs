use crate::framework::DefeatGraph;
use log::debug;
use strum_macros::{AsRefStr, Display, EnumString};

/// The label given to an argument by the grounded labelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Label {
    /// The argument belongs to the grounded extension.
    In,
    /// The argument is defeated by the grounded extension.
    Out,
    /// The argument is neither accepted nor defeated.
    Undec,
}

/// The grounded labelling of a defeat graph.
///
/// The labelling is computed in rounds.
/// In round 0, the undefeated arguments are labelled `IN`.
/// In each round, the arguments defeated by an argument labelled `IN` in this round are labelled `OUT`,
/// and the arguments that are not labelled yet and whose defeaters are all labelled `OUT` are labelled `IN` in the next round.
/// The arguments that are not labelled when no more argument can be labelled get the `UNDEC` label.
///
/// The round in which each argument was labelled is kept.
///
/// # Example
///
/// ```
/// # use scarab::framework::DefeatGraph;
/// # use scarab::semantics::{GroundedLabelling, Label};
/// let graph = DefeatGraph::default();
/// let labelling = GroundedLabelling::compute(&graph);
/// assert!(labelling.extension().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroundedLabelling {
    labels: Vec<Label>,
    rounds: Vec<Option<usize>>,
    n_rounds: usize,
}

impl GroundedLabelling {
    /// Computes the grounded labelling of a defeat graph.
    pub fn compute(graph: &DefeatGraph) -> Self {
        let n = graph.n_arguments();
        let mut labels = vec![Label::Undec; n];
        let mut rounds = vec![None; n];
        let mut n_undefeated_defeaters = (0..n)
            .map(|i| graph.defeats_to(i).len())
            .collect::<Vec<usize>>();
        let mut current = (0..n)
            .filter(|i| n_undefeated_defeaters[*i] == 0)
            .collect::<Vec<usize>>();
        let mut round = 0;
        while !current.is_empty() {
            for arg in current.iter() {
                labels[*arg] = Label::In;
                rounds[*arg] = Some(round);
            }
            let mut next = vec![];
            for arg in current.iter() {
                for defeated in graph.defeats_from(*arg) {
                    if labels[*defeated] != Label::Undec {
                        continue;
                    }
                    labels[*defeated] = Label::Out;
                    rounds[*defeated] = Some(round);
                    for attacked in graph.defeats_from(*defeated) {
                        n_undefeated_defeaters[*attacked] -= 1;
                        if n_undefeated_defeaters[*attacked] == 0
                            && labels[*attacked] == Label::Undec
                        {
                            next.push(*attacked);
                        }
                    }
                }
            }
            debug!(
                "grounded labelling round {}: {} argument(s) labelled IN",
                round,
                current.len()
            );
            next.sort_unstable();
            current = next;
            round += 1;
        }
        GroundedLabelling {
            labels,
            rounds,
            n_rounds: round,
        }
    }

    /// Returns the label of an argument.
    pub fn label(&self, argument: usize) -> Label {
        self.labels[argument]
    }

    /// Returns the round in which an argument was labelled `IN` or `OUT`, or `None` for `UNDEC` arguments.
    pub fn round(&self, argument: usize) -> Option<usize> {
        self.rounds[argument]
    }

    /// Returns the number of rounds that labelled at least one argument `IN`.
    pub fn n_rounds(&self) -> usize {
        self.n_rounds
    }

    /// Returns the labels, indexed by argument identifiers.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the sorted identifiers of the arguments of the grounded extension.
    pub fn extension(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, l)| if *l == Label::In { Some(i) } else { None })
            .collect()
    }
}
