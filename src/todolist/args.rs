use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo", version)]
#[command(about = "A small todo list for the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding todos.json and config.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Never emit colors
    #[arg(long)]
    pub no_color: bool,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
