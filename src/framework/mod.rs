//! Attacks between arguments, and their resolution into defeats.

mod attack_computer;
pub use attack_computer::AttackComputer;

mod attack_set;
pub use attack_set::Attack;
pub use attack_set::AttackKind;
pub use attack_set::AttackSet;

mod defeat_graph;
pub use defeat_graph::DefeatGraph;

mod defeat_resolver;
pub use defeat_resolver::DefeatResolver;
