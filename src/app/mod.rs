mod app_helper;

mod authors_command;
use authors_command::AuthorsCommand;

mod check_command;
use check_command::CheckCommand;

mod cli_manager;

mod command;

pub(crate) mod common;

mod export_command;
use export_command::ExportCommand;

mod solve_command;
use solve_command::SolveCommand;

mod writable_string;
