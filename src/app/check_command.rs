use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use scarab::io::KnowledgeBaseWriter;

const CMD_NAME: &str = "check";

const ARG_PRINT: &str = "PRINT";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks knowledge base files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::contrapositions_arg())
            .arg(
                Arg::with_name(ARG_PRINT)
                    .long("print")
                    .takes_value(false)
                    .help("print the normalized knowledge base"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let rule_base = common::read_rule_base(arg_matches)?;
        if arg_matches.is_present(ARG_PRINT) {
            let mut out = std::io::stdout();
            KnowledgeBaseWriter::default().write_rule_base(&rule_base, &mut out)?;
        }
        Ok(())
    }
}
