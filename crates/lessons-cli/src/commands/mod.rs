//! CLI Commands

pub mod config;
pub mod list;
pub mod run;

use clap::{Parser, Subcommand};

/// Clean code, design patterns, OOP and SOLID lessons
#[derive(Parser, Debug)]
#[command(name = "lessons", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available lessons
    List(list::ListArgs),

    /// Run one or more lessons by id
    Run(run::RunArgs),

    /// Run every lesson
    All(run::AllArgs),

    /// Show configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessons_core::Topic;

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["lessons", "list", "--topic", "solid", "--json"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.topic, Some(Topic::Solid));
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from(["lessons", "run", "proxy", "builder"]).unwrap();
        match cli.command {
            Commands::Run(args) => assert_eq!(args.ids, ["proxy", "builder"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_requires_id() {
        assert!(Cli::try_parse_from(["lessons", "run"]).is_err());
    }

    #[test]
    fn test_bad_topic_rejected() {
        assert!(Cli::try_parse_from(["lessons", "all", "--topic", "functional"]).is_err());
    }
}
