use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use todolist::config::TodoConfig;
use todolist::coordinator::Coordinator;
use todolist::error::{Result, TodoError};
use todolist::logging;
use todolist::persistence::fs::FileStore;
use todolist::session::Session;
use todolist::store::Store;
use todolist::view::render::{Renderer, TODO_THEME};
use todolist::view::terminal::TerminalView;
use tracing::info;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let config = TodoConfig::load(&data_dir)?;
    info!(data_dir = %data_dir.display(), ?config, "starting");

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let renderer = Renderer::new(TODO_THEME.clone(), use_color, config.line_width)?;
    let view = TerminalView::new(io::stdout(), renderer);

    let backend = FileStore::new(data_dir).with_file_name(&config.data_file);
    let store = Store::load(backend, config.seed_examples);

    let mut session = Session::new(Coordinator::new(store, view));
    session.run(io::stdin().lock())
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "todolist", "todolist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodoError::Config("Could not determine data dir".to_string()))
}
