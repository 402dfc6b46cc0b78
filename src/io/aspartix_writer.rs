use super::DefeatGraphWriter;
use crate::reasoner::Reasoning;
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object writes the defeat graph of a reasoning process as an abstract argumentation framework,
/// using the Aspartix input format as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// Argument `A<i>` is written `a<i>`, and each defeat is written as an attack.
///
/// # Example
///
/// ```
/// # use scarab::io::{AspartixWriter, DefeatGraphWriter, KnowledgeBaseReader, TextKnowledgeBaseReader};
/// # use scarab::reasoner::Reasoner;
/// let rule_base = TextKnowledgeBaseReader::default()
///     .read(&mut "--> a\na ==> b\na ==> -b".as_bytes())
///     .unwrap();
/// let reasoning = Reasoner::default().reason(&rule_base).unwrap();
/// let mut buffer = Vec::new();
/// AspartixWriter::default().write_defeat_graph(&reasoning, &mut buffer).unwrap();
/// assert_eq!(
///     "arg(a0).\narg(a1).\narg(a2).\natt(a1,a2).\natt(a2,a1).\n",
///     String::from_utf8(buffer).unwrap(),
/// );
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

impl DefeatGraphWriter for AspartixWriter {
    fn write_defeat_graph(&self, reasoning: &Reasoning, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing the defeat graph";
        for arg in reasoning.arguments().iter() {
            writeln!(writer, "arg(a{}).", arg.id()).context(context)?;
        }
        for (attacker, target) in reasoning.defeats().iter_defeats() {
            writeln!(writer, "att(a{},a{}).", attacker, target).context(context)?;
        }
        writer.flush().context(context)
    }
}
