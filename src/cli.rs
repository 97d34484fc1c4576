use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lockquiz",
    version,
    about = "Terminal quiz with a rotating passcode gate and lockdown mode"
)]
pub struct Cli {
    /// Quiz .md file, or a directory containing one [default: .]
    #[arg(default_value = ".")]
    pub path: String,

    /// Print the current passcode and exit (proctor side)
    #[arg(long)]
    pub code: bool,

    /// With --code, print a new line every time the passcode rotates
    #[arg(long, requires = "code")]
    pub watch: bool,

    /// Show the quiz summary without entering the TUI
    #[arg(long)]
    pub status: bool,

    /// Config file [default: <config dir>/lockquiz/config.yaml]
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Shared secret, overriding config and LOCKQUIZ_SECRET
    #[arg(long, value_name = "secret")]
    pub secret: Option<String>,

    /// Collector URL, overriding config and LOCKQUIZ_COLLECTOR
    #[arg(long, value_name = "url")]
    pub collector: Option<String>,

    /// Keep questions in file order
    #[arg(long)]
    pub no_shuffle: bool,
}
