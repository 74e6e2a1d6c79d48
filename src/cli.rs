use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imgseq")]
#[command(author, version, about, long_about = None)]
#[command(about = "Recursively rename image files to <folder>_<number>.<ext>")]
pub struct Args {
    /// Root folder whose subtree will be processed
    #[arg(required_unless_present = "list_languages")]
    pub root_dir: Option<PathBuf>,

    /// Simulate changes without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Language for user-facing output (two-letter code, e.g. "en", "zh")
    #[arg(short = 'L', long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Load language tables from a directory of <code>.json files
    /// instead of the tables bundled with the binary
    #[arg(long, value_name = "DIR")]
    pub locales_dir: Option<PathBuf>,

    /// List supported language codes and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}
