use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ExportCommand,
    SolveCommand,
};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use scarab::{
    io::{KnowledgeBaseReader, TextKnowledgeBaseReader},
    kb::RuleBase,
    reasoner::{
        Reasoner, ReasonerConfig, Reasoning, ReasoningError, DEFAULT_MAX_ARGUMENTS,
        DEFAULT_MAX_DEPTH,
    },
};
use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Scarab, a structured argumentation reasoner.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ExportCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the knowledge base")
        .required(true)
}

pub(crate) const ARG_CONTRAPOSITIONS: &str = "CONTRAPOSITIONS";

pub(crate) fn contrapositions_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_CONTRAPOSITIONS)
        .long("contrapositions")
        .takes_value(false)
        .help("close the strict rules under contraposition")
}

const ARG_MAX_ARGUMENTS: &str = "MAX_ARGUMENTS";
const ARG_MAX_DEPTH: &str = "MAX_DEPTH";
const ARG_STRICT_CONSISTENCY: &str = "STRICT_CONSISTENCY";

pub(crate) fn reasoner_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_MAX_ARGUMENTS)
            .long("max-arguments")
            .empty_values(false)
            .multiple(false)
            .help("the maximal number of arguments to build")
            .required(false),
        Arg::with_name(ARG_MAX_DEPTH)
            .long("max-depth")
            .empty_values(false)
            .multiple(false)
            .help("the maximal depth of the arguments to build")
            .required(false),
        Arg::with_name(ARG_STRICT_CONSISTENCY)
            .long("strict-consistency")
            .takes_value(false)
            .help("fail if strict arguments conclude complementary literals"),
    ]
}

fn read_limit(arg_matches: &ArgMatches<'_>, arg: &str, default: usize) -> Result<usize> {
    match arg_matches.value_of(arg) {
        Some(v) => v
            .parse::<usize>()
            .with_context(|| format!(r#"invalid limit "{}""#, v)),
        None => Ok(default),
    }
}

pub(crate) fn create_reasoner(arg_matches: &ArgMatches<'_>) -> Result<Reasoner> {
    let config = ReasonerConfig::default()
        .with_max_arguments(read_limit(
            arg_matches,
            ARG_MAX_ARGUMENTS,
            DEFAULT_MAX_ARGUMENTS,
        )?)
        .with_max_depth(read_limit(arg_matches, ARG_MAX_DEPTH, DEFAULT_MAX_DEPTH)?)
        .with_strict_consistency_check(arg_matches.is_present(ARG_STRICT_CONSISTENCY));
    Ok(Reasoner::new(config))
}

/// Runs a reasoner, logging the statistics of the partial result if a resource limit is exceeded.
pub(crate) fn reason<'a>(reasoner: &Reasoner, rule_base: &'a RuleBase) -> Result<Reasoning<'a>> {
    let result = match reasoner.reason(rule_base) {
        Ok(r) => {
            info!(
                "built {} argument(s), {} attack(s) and {} defeat(s)",
                r.arguments().len(),
                r.attacks().len(),
                r.defeats().n_defeats()
            );
            Ok(r)
        }
        Err(ReasoningError::ResourceExhausted { limit, partial }) => {
            warn!(
                "{} argument(s) were built before the limit was reached",
                partial.len()
            );
            Err(anyhow!(ReasoningError::ResourceExhausted { limit, partial }))
        }
        Err(e) => Err(anyhow!(e)),
    };
    result.context("while reasoning on the knowledge base")
}

pub(crate) fn read_rule_base(arg_matches: &ArgMatches<'_>) -> Result<RuleBase> {
    let file = arg_matches
        .value_of(ARG_INPUT)
        .ok_or_else(|| anyhow!("missing input file"))?;
    let mut reader = TextKnowledgeBaseReader::default();
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let rule_base = read_file_path_with(file, &|r| reader.read(r))?;
    let rule_base = if arg_matches.is_present(ARG_CONTRAPOSITIONS) {
        rule_base
            .with_contrapositions()
            .context("while closing the rule base under contraposition")?
    } else {
        rule_base
    };
    info!(
        "the knowledge base has {} rule(s) ({} strict), {} literal(s) and {} preference(s)",
        rule_base.n_rules(),
        rule_base.rules().iter().filter(|r| r.is_strict()).count(),
        rule_base.literals().len(),
        rule_base.preferences().len(),
    );
    Ok(rule_base)
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!("while opening file {:?}", canonicalized))?,
    );
    (reader)(&mut file_reader)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
