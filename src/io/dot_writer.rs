use super::DefeatGraphWriter;
use crate::{reasoner::Reasoning, semantics::Label};
use anyhow::{Context, Result};
use std::io::Write;

fn label_color(label: Label) -> &'static str {
    match label {
        Label::In => "green",
        Label::Out => "red",
        Label::Undec => "black",
    }
}

/// A writer for the Graphviz DOT format.
///
/// The defeat graph is written as a digraph in which each node is labelled by the last derivation step of its argument,
/// and colored according to its grounded label (green for `IN`, red for `OUT`, black for `UNDEC`).
#[derive(Default)]
pub struct DotWriter {}

impl DefeatGraphWriter for DotWriter {
    fn write_defeat_graph(&self, reasoning: &Reasoning, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing the defeat graph";
        let arguments = reasoning.arguments();
        writeln!(writer, "digraph defeats {{").context(context)?;
        for arg in arguments.iter() {
            let derivation = arguments
                .derivation(reasoning.rule_base(), arg.id())
                .replace('"', "\\\"");
            writeln!(
                writer,
                "    a{} [label=\"{}: {}\", color={}];",
                arg.id(),
                arg,
                derivation,
                label_color(reasoning.labelling().label(arg.id()))
            )
            .context(context)?;
        }
        for (attacker, target) in reasoning.defeats().iter_defeats() {
            writeln!(writer, "    a{} -> a{};", attacker, target).context(context)?;
        }
        writeln!(writer, "}}").context(context)?;
        writer.flush().context(context)
    }
}
