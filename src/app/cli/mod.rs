//! CLI Adapter.

use clap::Parser;
use std::ffi::OsString;

/// The launcher has no command-line surface: every argument, `--help` and
/// `--version` included, is accepted and dropped so the editor always starts.
#[derive(Parser)]
#[command(name = "wolfedit")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(
    about = "Start the prebuilt WolfEdit editor from ./build next to this launcher",
    long_about = None
)]
struct Cli {
    /// Never forwarded to the editor.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<OsString>,
}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();

    if let Err(e) = crate::launch() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
