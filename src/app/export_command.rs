use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use scarab::io::{AspartixWriter, DefeatGraphWriter, DotWriter};
use std::str::FromStr;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};

const CMD_NAME: &str = "export";

const ARG_FORMAT: &str = "FORMAT";

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, EnumVariantNames)]
#[strum(serialize_all = "snake_case")]
enum ExportFormat {
    Apx,
    Dot,
}

impl ExportFormat {
    fn writer(&self) -> Box<dyn DefeatGraphWriter> {
        match self {
            ExportFormat::Apx => Box::new(AspartixWriter::default()),
            ExportFormat::Dot => Box::new(DotWriter::default()),
        }
    }
}

pub(crate) struct ExportCommand;

impl ExportCommand {
    pub(crate) fn new() -> Self {
        ExportCommand
    }
}

impl<'a> Command<'a> for ExportCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Writes the defeat graph of a knowledge base")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::contrapositions_arg())
            .args(&common::reasoner_args())
            .arg(
                Arg::with_name(ARG_FORMAT)
                    .long("format")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(ExportFormat::VARIANTS)
                    .default_value("apx")
                    .help("the output format")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let format = ExportFormat::from_str(arg_matches.value_of(ARG_FORMAT).unwrap_or("apx"))?;
        let rule_base = common::read_rule_base(arg_matches)?;
        let reasoner = common::create_reasoner(arg_matches)?;
        let reasoning = common::reason(&reasoner, &rule_base)?;
        format
            .writer()
            .write_defeat_graph(&reasoning, &mut std::io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!(&["apx", "dot"], ExportFormat::VARIANTS);
        assert_eq!(ExportFormat::Dot, ExportFormat::from_str("dot").unwrap());
        assert!(ExportFormat::from_str("tgf").is_err());
    }
}
