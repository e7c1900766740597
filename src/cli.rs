//! Command-line shell over the canvas store, for headless inspection.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use std::path::PathBuf;

use canvas::blueprint::{WidgetBlueprint, palette};
use canvas::doc::CanvasModel;
use canvas::engine::Engine;
use canvas::geometry::Point;
use canvas::widget::WidgetKind;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::services::collection;
use crate::services::persistence::{Completion, spawn_persistence_worker};
use crate::services::store::{Store, StoreError};
use crate::state::Session;

#[derive(Parser, Debug)]
#[command(name = "dotd", about = "Inspect and edit dotd canvases")]
pub struct Cli {
    /// Overrides `DOTD_DATA_DIR`.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List canvases, most recently modified first.
    List,
    /// Create an empty canvas.
    New { name: String },
    /// Delete a canvas and its media.
    Delete { name: String },
    /// Print a canvas as JSON.
    Show { name: String },
    /// Place a new widget from the palette on a canvas.
    Add {
        name: String,
        #[arg(value_enum)]
        kind: KindArg,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Text,
    Title,
    Body,
    Image,
}

impl From<KindArg> for WidgetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Text => Self::PlainText,
            KindArg::Title => Self::TitleText,
            KindArg::Body => Self::BodyText,
            KindArg::Image => Self::Image,
        }
    }
}

/// Run one command to completion, writing results to stdout.
pub async fn run(cli: Cli, config: &Config) -> Result<(), StoreError> {
    let store = Store::new(cli.data_dir.unwrap_or_else(|| config.data_dir.clone()));

    match cli.command {
        Command::List => {
            for summary in collection::list(&store).await? {
                println!(
                    "{}\t{} widgets\tmodified {}",
                    summary.name, summary.widget_count, summary.last_modified_at
                );
            }
        }
        Command::New { name } => {
            let model = collection::create(&store, &name).await?;
            println!("created {} at {}", model.name, model.created_at);
        }
        Command::Delete { name } => {
            collection::delete(&store, &name).await?;
            println!("deleted {name}");
        }
        Command::Show { name } => {
            let model = store.load(&name).await?;
            let json = model.to_json().map_err(|source| StoreError::Encode { name, source })?;
            println!("{json}");
        }
        Command::Add { name, kind, x, y } => {
            let model = add_widget(store, config, &name, kind.into(), Point::new(x, y)).await?;
            println!("{} now has {} widgets", model.name, model.widget_count());
        }
    }
    Ok(())
}

/// Load `name` through a session, place a palette widget at `location`,
/// and save it back.
async fn add_widget(
    store: Store,
    config: &Config,
    name: &str,
    kind: WidgetKind,
    location: Point,
) -> Result<CanvasModel, StoreError> {
    let (tx, rx) = spawn_persistence_worker(store, config.persist_queue_capacity);
    let mut session = Session::new(Engine::with_config(config.canvas.clone()), tx, rx);

    if !session.request_load(name) {
        return Err(StoreError::Worker("load could not be queued".into()));
    }
    await_completion(&mut session).await?;

    let blueprint = palette()
        .into_iter()
        .find(|bp| bp.kind() == kind)
        .unwrap_or_else(|| WidgetBlueprint::empty(kind, ""));
    let id = session.engine_mut().receive(&blueprint, location, None);
    session.mark_dirty();
    tracing::info!(canvas = name, widget = %id, ?kind, "widget added");

    if !session.save()? {
        return Err(StoreError::Worker("save could not be queued".into()));
    }
    await_completion(&mut session).await?;
    Ok(session.engine().snapshot())
}

async fn await_completion(session: &mut Session) -> Result<Completion, StoreError> {
    match session.next_completion().await {
        Some(Completion::Failed { op, subject, error }) => Err(StoreError::Worker(format!("{op} {subject}: {error}"))),
        Some(completion) => Ok(completion),
        None => Err(StoreError::Worker("worker stopped".into())),
    }
}
