use crate::kb::RuleBase;
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the textual knowledge base format read by [`TextKnowledgeBaseReader`](super::TextKnowledgeBaseReader).
///
/// Rules are written in the rule base order, followed by the preference statements.
/// Reading the output gives back the same rule base.
#[derive(Default)]
pub struct KnowledgeBaseWriter {}

impl KnowledgeBaseWriter {
    /// Writes a rule base to the provided writer.
    pub fn write_rule_base(&self, rule_base: &RuleBase, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing the rule base";
        for rule in rule_base.rules() {
            writeln!(writer, "{}", rule).context(context)?;
        }
        for preference in rule_base.preferences() {
            writeln!(writer, "{}", preference).context(context)?;
        }
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{KnowledgeBaseReader, TextKnowledgeBaseReader};

    fn read(s: &str) -> RuleBase {
        TextKnowledgeBaseReader::default()
            .read(&mut s.as_bytes())
            .unwrap()
    }

    fn write(rb: &RuleBase) -> String {
        let mut buffer = Vec::new();
        KnowledgeBaseWriter::default()
            .write_rule_base(rb, &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_rule_base() {
        let rb = read("R1: [b, a] =(u)=> -c\n--> a\n[]-->u\nR2: a ==> c\nR1 < R2\n");
        assert_eq!(
            "--> a\nR2: a ==> c\nR1: a, b =(u)=> -c\n--> u\nR1 < R2\n",
            write(&rb)
        );
    }

    #[test]
    fn test_round_trip() {
        let rb = read("--> a\nR1: a ==> b\nR2: a =(u)=> -b\nR3: b ==> u\nR1 < R2 < R3\nx, y --> z\n");
        let text = write(&rb);
        let read_back = read(&text);
        assert_eq!(rb.rules(), read_back.rules());
        assert_eq!(rb.preferences(), read_back.preferences());
        assert_eq!(text, write(&read_back));
    }
}
