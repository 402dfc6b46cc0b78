//! Objects used to read knowledge bases and to write them and the results of reasoning processes.

mod aspartix_writer;
pub use aspartix_writer::AspartixWriter;

mod dot_writer;
pub use dot_writer::DotWriter;

mod kb_reader;
pub use kb_reader::TextKnowledgeBaseReader;

mod kb_writer;
pub use kb_writer::KnowledgeBaseWriter;

mod specs;
pub use specs::DefeatGraphWriter;
pub use specs::KnowledgeBaseReader;
pub use specs::WarningHandler;

mod status_writer;
pub use status_writer::StatusWriter;

mod warning_result;
