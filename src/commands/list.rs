use super::open_app;
use crate::libs::{
    controller::Intent,
    task::{FilterMode, SortMode},
    view::View,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// all, active or completed
    #[arg(short, long)]
    filter: Option<FilterMode>,
    /// date-added, alphabetical or priority
    #[arg(short, long)]
    sort: Option<SortMode>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let (mut app, _) = open_app()?;
    if let Some(filter) = args.filter {
        app.handle_intent(Intent::SetFilter(filter))?;
    }
    if let Some(sort) = args.sort {
        app.handle_intent(Intent::SetSort(sort))?;
    }

    View::render(&app.view());
    Ok(())
}
