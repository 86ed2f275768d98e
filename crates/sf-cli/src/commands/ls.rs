//! Ls command implementation

use anyhow::Result;
use sf_core::discovery::discover_migrations;
use std::path::Path;

use crate::cli::{GlobalArgs, LsArgs};

pub async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let scripts = discover_migrations(Path::new(&global.migrations_dir))?;

    for script in &scripts {
        if args.long {
            println!("{}\t{} bytes", script.relative_path, script.contents.len());
        } else {
            println!("{}", script.relative_path);
        }
    }
    log::info!("{} migration scripts discovered", scripts.len());
    Ok(())
}
