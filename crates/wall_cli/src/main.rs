//! Media Wall - command-line editor for media wall layouts
//!
//! Loads layouts from the layout library, applies edits through an
//! editing session, and saves the result back in the background saver.

mod commands;
mod state;

use clap::{Parser, Subcommand};
use state::{AppState, LayoutRef};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "media-wall", version, about)]
struct Cli {
    /// Layout library root (overrides the configured one).
    #[arg(long, value_name = "DIR", global = true)]
    library: Option<PathBuf>,

    /// Directory holding settings.json.
    #[arg(long, value_name = "DIR", default_value = ".media-wall", global = true)]
    app_data: PathBuf,

    /// Save an edited layout under this name instead of its own.
    #[arg(long, value_name = "NAME", global = true)]
    save_as: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List folders and layouts in a library folder
    Browse {
        /// Folder path, outermost first
        folders: Vec<String>,
    },
    /// Print the tiles of a layout
    Show {
        /// Layout as folder/name.json
        layout: LayoutRef,

        /// Print the layout file as JSON
        #[arg(long)]
        json: bool,
    },
    /// Append a media file as a new tile
    Import {
        layout: LayoutRef,
        media: String,

        /// Natural width of the media
        #[arg(long, requires = "height")]
        width: Option<f64>,

        /// Natural height of the media
        #[arg(long, requires = "width")]
        height: Option<f64>,
    },
    /// Fit and scale tiles into one row, in the given order
    FitRow {
        layout: LayoutRef,

        /// Tile indices in row order
        #[arg(long, value_delimiter = ',', required = true)]
        select: Vec<usize>,

        #[arg(long)]
        canvas_width: f64,

        /// Give every tile the same width instead of the same scale
        #[arg(long)]
        uniform_width: bool,

        /// Gap between tiles (defaults to the snap spacing)
        #[arg(long)]
        spacing: Option<f64>,
    },
    /// Move tiles up or down
    Move {
        layout: LayoutRef,

        #[arg(long, value_delimiter = ',', required = true)]
        select: Vec<usize>,

        #[arg(long, allow_hyphen_values = true)]
        offset: f64,
    },
    /// Replay a JSON command script against a layout
    Apply {
        layout: LayoutRef,

        #[arg(long, value_name = "FILE")]
        script: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let state = AppState::new(cli.app_data, cli.library);
    let save_as = cli.save_as;

    match cli.command {
        Commands::Browse { folders } => commands::browse(&state, folders)?,
        Commands::Show { layout, json } => commands::show(&state, &layout, json).await?,
        Commands::Import {
            layout,
            media,
            width,
            height,
        } => {
            let size = width.zip(height);
            commands::edit_layout(&state, &layout, save_as, |session| {
                commands::import(session, &media, size)
            })
            .await?;
        }
        Commands::FitRow {
            layout,
            select,
            canvas_width,
            uniform_width,
            spacing,
        } => {
            commands::edit_layout(&state, &layout, save_as, |session| {
                commands::fit_row(session, &select, canvas_width, uniform_width, spacing)
            })
            .await?;
        }
        Commands::Move { layout, select, offset } => {
            commands::edit_layout(&state, &layout, save_as, |session| {
                commands::move_vertically(session, &select, offset)
            })
            .await?;
        }
        Commands::Apply { layout, script } => {
            commands::edit_layout(&state, &layout, save_as, |session| {
                commands::apply_script(session, &script)
            })
            .await?;
        }
    }

    Ok(())
}
