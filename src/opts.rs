use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "farmonitor", author, about)]
pub struct Opts {
    /// Show only warnings and errors
    #[structopt(short = "s", long = "silent", conflicts_with = "verbose")]
    pub silent: bool,

    /// Show all log messages
    #[structopt(short = "v", long = "verbose", conflicts_with = "silent")]
    pub verbose: bool,

    /// Suppress timestamps in logs, useful with journald
    #[structopt(long = "suppress-log-timestamps")]
    pub suppress_log_timestamps: bool,

    /// Database path
    #[structopt(long, env = "FARMONITOR_DB", default_value = "farmonitor.sqlite3")]
    pub db: String,

    /// Settings file path
    #[structopt(
        parse(from_os_str),
        env = "FARMONITOR_SETTINGS",
        default_value = "farmonitor.toml"
    )]
    pub settings: PathBuf,
}
