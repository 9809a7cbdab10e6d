use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use lantern_codegen::Indent;
use lantern_manifest::{Manifest, parse_indent};

use super::UnwrapOrExit;
use crate::{
    ops::{self, EmitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct EmitCommand {
    /// Path to lantern.toml (defaults to ./lantern.toml)
    #[arg(short, long, default_value = "lantern.toml")]
    pub manifest: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indentation: a number of spaces (2, 3, 4, 8) or "tab"
    #[arg(long, value_parser = parse_indent)]
    pub indent: Option<Indent>,

    /// Leave an existing output file untouched
    #[arg(long, requires = "output")]
    pub keep_existing: bool,

    /// Print the loaded declaration model as JSON instead of Swift
    #[arg(long, conflicts_with_all = ["output", "keep_existing"])]
    pub dump_model: bool,
}

impl EmitCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();

        if self.dump_model {
            let json = serde_json::to_string_pretty(&manifest.extensions)
                .wrap_err("Failed to serialize declaration model")?;
            println!("{}", json);
            return Ok(());
        }

        let report = ops::emit(
            &manifest,
            EmitOptions {
                output: self.output.as_deref(),
                indent: self.indent,
                keep_existing: self.keep_existing,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
