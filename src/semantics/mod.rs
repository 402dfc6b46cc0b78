//! Grounded semantics and literal acceptance.

mod extension;
pub use extension::is_admissible;
pub use extension::is_conflict_free;

mod grounded_labelling;
pub use grounded_labelling::GroundedLabelling;
pub use grounded_labelling::Label;

mod literal_acceptance;
pub use literal_acceptance::AcceptanceStatus;
pub use literal_acceptance::LiteralAcceptance;
