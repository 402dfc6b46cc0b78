//! Arguments and their construction from a rule base.

mod argument;
pub use argument::Argument;
pub use argument::ArgumentSet;

mod argument_constructor;
pub use argument_constructor::ArgumentConstructor;
