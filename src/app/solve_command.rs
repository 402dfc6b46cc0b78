use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use scarab::{io::StatusWriter, kb::Literal, semantics::AcceptanceStatus};

const CMD_NAME: &str = "solve";

const ARG_LITERAL: &str = "LITERAL";
const ARG_ARGUMENTS: &str = "ARGUMENTS";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the status of the literals of a knowledge base under the grounded semantics")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::contrapositions_arg())
            .args(&common::reasoner_args())
            .arg(
                Arg::with_name(ARG_LITERAL)
                    .short("l")
                    .long("literal")
                    .allow_hyphen_values(true)
                    .empty_values(false)
                    .multiple(false)
                    .help("only print the status of this literal")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_ARGUMENTS)
                    .long("arguments")
                    .takes_value(false)
                    .help("print the arguments and their labels before the statuses"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let query = match arg_matches.value_of(ARG_LITERAL) {
            Some(l) => Some(
                l.parse::<Literal>()
                    .with_context(|| format!(r#"while parsing the queried literal "{}""#, l))?,
            ),
            None => None,
        };
        let rule_base = common::read_rule_base(arg_matches)?;
        let reasoner = common::create_reasoner(arg_matches)?;
        let reasoning = common::reason(&reasoner, &rule_base)?;
        let writer = StatusWriter::default();
        let mut out = std::io::stdout();
        if arg_matches.is_present(ARG_ARGUMENTS) {
            writer.write_labelling(&reasoning, &mut out)?;
        }
        match query {
            Some(literal) => {
                let status = reasoning
                    .status(&literal)
                    .ok_or_else(|| anyhow!("literal {} does not appear in the knowledge base", literal))?;
                writer.write_status(&literal, status, &mut out)
            }
            None => {
                log::info!(
                    "{} literal(s) are justified",
                    reasoning
                        .acceptance()
                        .iter()
                        .filter(|(_, s)| *s == AcceptanceStatus::Justified)
                        .count()
                );
                writer.write_statuses(reasoning.acceptance(), &mut out)
            }
        }
    }
}
