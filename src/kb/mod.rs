//! Literals, rules and rule bases.

mod literal;
pub use literal::Literal;

mod preference_graph;
pub use preference_graph::PreferenceGraph;

mod rule;
pub use rule::Preference;
pub use rule::Rule;
pub use rule::RuleKind;

mod rule_base;
pub use rule_base::RuleBase;

mod validation_error;
pub use validation_error::ValidationError;
