// crusti_app_helper
// Copyright (C) 2020  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::{app_helper::init_logger_with_level, command::Command, writable_string::WritableString};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::ffi::OsString;
use sysinfo::System;

pub(crate) const LOGGING_LEVEL_ARG: &str = "LOGGING_LEVEL";

/// Returns the argument shared by all the subcommands that sets the minimal logging level.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        app
    }

    /// Parses the CLI arguments and executes the selected command.
    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = args.into_iter().map(|a| a.into()).collect::<Vec<OsString>>();
        let matches = match self.clap_app().get_matches_from_safe(args.clone()) {
            Ok(m) => m,
            Err(e) if e.kind == clap::ErrorKind::HelpDisplayed => {
                init_logger_with_level(log::LevelFilter::Info);
                let command = args
                    .iter()
                    .skip(1)
                    .filter_map(|a| a.to_str())
                    .find(|a| self.commands.iter().any(|c| c.name() == *a));
                self.help_message(command)?
                    .lines()
                    .for_each(|l| info!("{}", l));
                info!("");
                return Ok(());
            }
            Err(e) => {
                init_logger_with_level(log::LevelFilter::Info);
                info!("{} {}", self.app_name, self.version);
                return Err(anyhow!("{}", e.message));
            }
        };
        let (name, sub_matches) = matches.subcommand();
        let sub_matches = sub_matches.ok_or_else(|| anyhow!("no subcommand provided"))?;
        let command = self
            .commands
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| anyhow!(r#"unknown subcommand "{}""#, name))?;
        let log_level = sub_matches
            .value_of(LOGGING_LEVEL_ARG)
            .unwrap_or("info")
            .parse::<log::LevelFilter>()
            .context("while parsing the logging level")?;
        init_logger_with_level(log_level);
        info!("{} {}", self.app_name, self.version);
        sys_info();
        command.execute(sub_matches)
    }

    fn help_message(&self, command: Option<&str>) -> Result<WritableString> {
        let mut message = WritableString::default();
        let mut app = match command.and_then(|n| self.commands.iter().find(|c| c.name() == n)) {
            Some(c) => c.clap_subcommand(),
            None => self.clap_app(),
        };
        app.write_long_help(&mut message)
            .context("while writing the help message")?;
        Ok(message)
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_kinds: Vec<&str> = sys.cpus().iter().map(|p| p.brand()).collect();
    cpu_kinds.sort_unstable();
    cpu_kinds.dedup();
    info!("{} logical core(s) {:?}", sys.cpus().len(), cpu_kinds);
    info!("total memory: {} KB", sys.total_memory() / 1024);
    info!("----------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{ArgMatches, SubCommand};
    use std::{cell::RefCell, rc::Rc};

    struct LocalCommand {
        executed: Rc<RefCell<bool>>,
        flag_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for LocalCommand {
        fn name(&self) -> &str {
            "local"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("local")
                .about("a local command")
                .arg(Arg::with_name("flag").short("a"))
                .arg(Arg::with_name("fail").long("fail"))
                .arg(logging_level_cli_arg())
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            *self.executed.borrow_mut() = true;
            *self.flag_set.borrow_mut() = arg_matches.is_present("flag");
            if arg_matches.is_present("fail") {
                Err(anyhow!("failure"))
            } else {
                Ok(())
            }
        }
    }

    fn run(args: Vec<&'static str>) -> (Result<()>, bool, bool) {
        let mut manager = CliManager::new("app_name", "app_version", "author", "about");
        let executed = Rc::new(RefCell::new(false));
        let flag_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(LocalCommand {
            executed: Rc::clone(&executed),
            flag_set: Rc::clone(&flag_set),
        }));
        let result = manager.parse_cli(args);
        let executed = *executed.borrow();
        let flag_set = *flag_set.borrow();
        (result, executed, flag_set)
    }

    #[test]
    fn test_command_executed() {
        let (result, executed, flag_set) = run(vec!["app_name", "local", "--logging-level", "off"]);
        assert!(result.is_ok());
        assert!(executed);
        assert!(!flag_set);
    }

    #[test]
    fn test_command_with_flag() {
        let (result, executed, flag_set) = run(vec!["app_name", "local", "-a", "--logging-level", "off"]);
        assert!(result.is_ok());
        assert!(executed);
        assert!(flag_set);
    }

    #[test]
    fn test_command_error() {
        let (result, executed, _) = run(vec!["app_name", "local", "--fail", "--logging-level", "off"]);
        assert!(result.is_err());
        assert!(executed);
    }

    #[test]
    fn test_no_subcommand() {
        let (result, executed, _) = run(vec!["app_name"]);
        assert!(result.is_err());
        assert!(!executed);
    }

    #[test]
    fn test_wrong_subcommand() {
        assert!(run(vec!["app_name", "foo"]).0.is_err());
    }

    #[test]
    fn test_wrong_arg() {
        assert!(run(vec!["app_name", "local", "-b"]).0.is_err());
    }

    #[test]
    fn test_help() {
        let (result, executed, _) = run(vec!["app_name", "-h"]);
        assert!(result.is_ok());
        assert!(!executed);
        assert!(run(vec!["app_name", "help", "local"]).0.is_ok());
    }

    #[test]
    fn test_help_message() {
        let mut manager = CliManager::new("app_name", "app_version", "author", "about");
        manager.add_command(Box::new(LocalCommand {
            executed: Rc::new(RefCell::new(false)),
            flag_set: Rc::new(RefCell::new(false)),
        }));
        assert!(manager
            .help_message(None)
            .unwrap()
            .to_string()
            .contains("local"));
        assert!(manager
            .help_message(Some("local"))
            .unwrap()
            .to_string()
            .contains("--logging-level"));
    }
}
