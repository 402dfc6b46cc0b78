use crate::{
    kb::Literal,
    reasoner::Reasoning,
    semantics::{AcceptanceStatus, LiteralAcceptance},
};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the results of a reasoning process.
///
/// Statuses are written one per line, like `flies: rejected`.
/// The labelling of the arguments is written one argument per line, like `A1: OUT R1(A0) : flies`.
#[derive(Default)]
pub struct StatusWriter {}

impl StatusWriter {
    /// Writes the status of each literal, in increasing literal order.
    pub fn write_statuses(&self, acceptance: &LiteralAcceptance, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing literal statuses";
        for (literal, status) in acceptance.iter() {
            writeln!(writer, "{}: {}", literal, status).context(context)?;
        }
        writer.flush().context(context)
    }

    /// Writes the status of a single literal.
    pub fn write_status(
        &self,
        literal: &Literal,
        status: AcceptanceStatus,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a literal status";
        writeln!(writer, "{}: {}", literal, status).context(context)?;
        writer.flush().context(context)
    }

    /// Writes the grounded label of each argument, together with its last derivation step.
    pub fn write_labelling(&self, reasoning: &Reasoning, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing the argument labelling";
        let arguments = reasoning.arguments();
        for arg in arguments.iter() {
            writeln!(
                writer,
                "{}: {} {}",
                arg,
                reasoning.labelling().label(arg.id()),
                arguments.derivation(reasoning.rule_base(), arg.id())
            )
            .context(context)?;
        }
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        io::{KnowledgeBaseReader, TextKnowledgeBaseReader},
        kb::RuleBase,
        reasoner::Reasoner,
    };

    fn rule_base() -> RuleBase {
        TextKnowledgeBaseReader::default()
            .read(&mut "--> bird\n--> penguin\nR1: bird ==> flies\nR2: penguin ==> -flies\nR1 < R2\n".as_bytes())
            .unwrap()
    }

    #[test]
    fn test_write_statuses() {
        let rb = rule_base();
        let reasoning = Reasoner::default().reason(&rb).unwrap();
        let mut buffer = Vec::new();
        StatusWriter::default()
            .write_statuses(reasoning.acceptance(), &mut buffer)
            .unwrap();
        assert_eq!(
            "bird: justified\nflies: rejected\n-flies: justified\npenguin: justified\n",
            String::from_utf8(buffer).unwrap()
        );
    }

    #[test]
    fn test_write_status() {
        let mut buffer = Vec::new();
        StatusWriter::default()
            .write_status(
                &"-flies".parse().unwrap(),
                AcceptanceStatus::Undecided,
                &mut buffer,
            )
            .unwrap();
        assert_eq!("-flies: undecided\n", String::from_utf8(buffer).unwrap());
    }

    #[test]
    fn test_write_labelling() {
        let rb = rule_base();
        let reasoning = Reasoner::default().reason(&rb).unwrap();
        let mut buffer = Vec::new();
        StatusWriter::default()
            .write_labelling(&reasoning, &mut buffer)
            .unwrap();
        assert_eq!(
            "A0: IN [--> bird]() : bird\nA1: IN [--> penguin]() : penguin\nA2: OUT R1(A0) : flies\nA3: IN R2(A1) : -flies\n",
            String::from_utf8(buffer).unwrap()
        );
    }
}
