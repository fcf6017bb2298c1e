//! List command

use anyhow::Result;
use clap::Args;
use lessons_core::{Catalog, Topic};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only lessons of this topic (clean-code, creational, structural, behavioral, oop, solid)
    #[arg(short, long)]
    pub topic: Option<Topic>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle(catalog: &Catalog, args: ListArgs) -> Result<()> {
    let lessons = catalog.list(args.topic);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lessons)?);
        return Ok(());
    }

    if lessons.is_empty() {
        println!("📭 No lessons found");
        return Ok(());
    }

    println!("📚 Lessons ({}):", lessons.len());
    for info in lessons {
        println!(
            "  - {:<24} {:<12} {}",
            info.id,
            info.topic.as_str(),
            info.title
        );
    }

    Ok(())
}
