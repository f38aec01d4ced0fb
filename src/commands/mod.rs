pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod toggle;

use crate::db::blob::FileBlobStore;
use crate::libs::{
    clock::SystemClock,
    config::Config,
    controller::{Controller, Effect},
    messages::Message,
    view::View,
};
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};

/// Controller wired to the on-disk store and the wall clock.
pub type App = Controller<FileBlobStore, SystemClock>;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Show tasks", visible_alias = "ls")]
    List(list::ListArgs),
    #[command(about = "Toggle a task between active and completed", visible_alias = "done")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Edit a task's text and priority")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task", visible_alias = "rm")]
    Delete(delete::DeleteArgs),
    #[command(about = "Remove all completed tasks")]
    Clear,
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear => clear::cmd(),
            Commands::Init(args) => init::cmd(args),
        }
    }
}

/// Loads configuration and the persisted list, reporting recovered corruption.
pub(crate) fn open_app() -> Result<(App, Config)> {
    let config = Config::read()?;
    let (app, warning) = Controller::open(FileBlobStore::in_data_dir(), SystemClock, config.initial_state())?;
    if let Some(warning) = warning {
        msg_warning!(Message::StoredDataRecovered(warning.to_string()));
    }
    Ok((app, config))
}

/// Redraws the list when the effects ask for it.
pub(crate) fn present(app: &App, effects: &[Effect]) {
    if effects.iter().any(|effect| matches!(effect, Effect::Render | Effect::UpdateCounter)) {
        View::render(&app.view());
    }
}
