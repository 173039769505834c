use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "deen", version, author, about = "A terminal daily tracker for prayers, Quran reading, study and dhikr")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Track today from stdin, one command per line (try `help`)
    Session {
        /// Only print errors and explicit `status`/`json` output
        #[arg(long, short)]
        quiet: bool,
    },
    /// List the study topics that can be selected
    Topics,
    /// Show the config file location and effective settings
    Config {
        /// Overwrite the config file with defaults
        #[arg(long)]
        reset: bool,
    },
}
