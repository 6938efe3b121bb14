use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use tracing::debug;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// Extension trait for exiting on generator errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for eventdts_typescript::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "eventdts")]
#[command(version)]
#[command(about = "Generate index.d.ts for a directory of event payload declarations")]
pub(crate) struct Cli {
    /// Directory containing the `<event>.d.ts` files
    pub directory: PathBuf,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        debug!(directory = %self.directory.display(), "generating event index");

        let mut out = TerminalOutput::new();

        let (generator, report) = ops::scan(&self.directory).unwrap_or_exit();
        report.render(&mut out);

        ops::write(&generator).unwrap_or_exit().render(&mut out);
        Ok(())
    }
}
