use crate::{
    kb::{Preference, Rule, RuleBase},
    reasoner::Reasoning,
};
use anyhow::{Context, Result};
use std::io::{Read, Write};

/// The type of callback functions to call when warnings are raised while reading a knowledge base.
///
/// The arguments are the (1-based) line number and the warning message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read knowledge bases.
pub trait KnowledgeBaseReader {
    /// Reads the rules and the preference statements of a knowledge base, without validating them.
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    fn read_statements(&self, reader: &mut dyn Read) -> Result<(Vec<Rule>, Vec<Preference>)>;

    /// Reads a knowledge base and builds the corresponding [`RuleBase`].
    ///
    /// # Example
    ///
    /// ```
    /// # use scarab::io::{KnowledgeBaseReader, TextKnowledgeBaseReader};
    /// # use scarab::kb::RuleBase;
    /// fn read_kb_from_str(s: &str) -> RuleBase {
    ///     let reader = TextKnowledgeBaseReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid knowledge base")
    /// }
    /// # assert_eq!(2, read_kb_from_str("--> a\nR1: a ==> b").n_rules());
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<RuleBase> {
        let (rules, preferences) = self.read_statements(reader)?;
        RuleBase::build(rules, preferences).context("while building the rule base")
    }

    /// Adds a callback function to call when warnings are raised while reading a knowledge base.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// A trait implemented by objects that write the defeat graph of a reasoning process.
pub trait DefeatGraphWriter {
    /// Writes the arguments and the defeats of a reasoning process.
    fn write_defeat_graph(&self, reasoning: &Reasoning, writer: &mut dyn Write) -> Result<()>;
}
