use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use lantern_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to lantern.toml (defaults to ./lantern.toml)
    #[arg(short, long, default_value = "lantern.toml")]
    pub manifest: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();
        let report = ops::check(&manifest, &self.manifest);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
