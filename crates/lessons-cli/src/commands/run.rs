//! Run commands

use anyhow::Result;
use clap::Args;
use lessons_core::{Catalog, Console, Topic};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Lesson ids, run in the given order
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Debug)]
pub struct AllArgs {
    /// Only lessons of this topic
    #[arg(short, long)]
    pub topic: Option<Topic>,
}

/// Kiểm tra hết ids trước khi chạy lesson nào
pub fn validate_ids(catalog: &Catalog, ids: &[String]) -> lessons_core::Result<()> {
    for id in ids {
        catalog.get(id)?;
    }
    Ok(())
}

pub fn handle(catalog: &Catalog, args: RunArgs) -> Result<()> {
    validate_ids(catalog, &args.ids)?;

    let mut console = Console::stdout();
    for (index, id) in args.ids.iter().enumerate() {
        if index > 0 {
            console.blank();
        }
        catalog.run(id, &mut console)?;
    }

    Ok(())
}

pub fn handle_all(catalog: &Catalog, args: AllArgs) -> Result<()> {
    let mut console = Console::stdout();
    let count = catalog.run_all(args.topic, &mut console)?;
    log::debug!("Ran {} lessons", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use lessons_core::{AppConfig, LessonError};

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_validate_known_ids() {
        let catalog = catalog::build(&AppConfig::quiet());
        assert!(validate_ids(&catalog, &ids(&["builder", "proxy"])).is_ok());
    }

    #[test]
    fn test_unknown_id_rejected_before_running() {
        let catalog = catalog::build(&AppConfig::quiet());

        let err = validate_ids(&catalog, &ids(&["builder", "nope"])).unwrap_err();
        assert!(matches!(err, LessonError::UnknownLesson(ref id) if id == "nope"));
        assert_eq!(err.to_string(), "Unknown lesson: nope");

        let args = RunArgs {
            ids: ids(&["builder", "nope"]),
        };
        assert!(handle(&catalog, args).is_err());
    }
}
