//! Command-line surface for the twinload-build binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Exit status for missing or malformed arguments.
pub const USAGE_EXIT_CODE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "twinload-build")]
#[command(about = "Replay a from,to,type entity table into an AWS IoT TwinMaker workspace")]
pub struct Cli {
    /// CSV file with a `from,to,type` header row.
    pub input: PathBuf,

    /// TwinMaker workspace id.
    pub workspace_id: String,

    /// Anything after the first two positionals is ignored, flags included.
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub extra: Vec<OsString>,

    /// Config file prefix (default: twinload). Must come before the
    /// positionals; anything after them is ignored.
    #[arg(short, long, default_value = "twinload")]
    pub config: String,
}

/// Parse arguments, exiting with [`USAGE_EXIT_CODE`] on a usage error.
///
/// Help and version requests still exit successfully.
pub fn parse_or_exit<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
    }
}
