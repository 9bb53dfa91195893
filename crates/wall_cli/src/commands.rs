//! Command implementations

use crate::state::{AppState, LayoutRef};
use anyhow::{bail, Context};
use edit_engine::{EditorSession, WallCommand};
use layout_engine::RowFitMode;
use std::path::{Path, PathBuf};
use store::{check_layout_name, EntryKind, PathStack, SaveRequest};
use wall_model::{MediaSource, Selection, Tile};

/// Print the folders and layouts of a library folder
pub fn browse(state: &AppState, folders: Vec<String>) -> anyhow::Result<()> {
    let path = PathStack::from_segments(folders);
    let entries = state.library().entries(&path)?;
    if entries.is_empty() {
        println!("(empty)");
    }
    for entry in entries {
        match entry.kind {
            EntryKind::Folder => println!("[dir]  {}", entry.name),
            EntryKind::Layout => println!("       {}", entry.name),
        }
    }
    Ok(())
}

/// Print the tiles of a layout, or the raw file with `json`
pub async fn show(state: &AppState, layout: &LayoutRef, json: bool) -> anyhow::Result<()> {
    let file = state
        .library()
        .load_layout(&layout.path, &layout.file_name)
        .await
        .with_context(|| format!("Failed to load layout {layout}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&file)?);
        return Ok(());
    }
    println!("{} ({} tiles)", file.layout_name, file.windows.len());
    for (index, tile) in file.windows.iter().enumerate() {
        print_tile(index, tile);
    }
    Ok(())
}

/// Load a layout into a session, edit it, and save the result.
///
/// With `save_as` the result becomes a new `<save_as>.json` layout.
/// Otherwise it overwrites the file it was loaded from, and the layout
/// name inside the file is kept.
pub async fn edit_layout<F>(
    state: &AppState,
    layout: &LayoutRef,
    save_as: Option<String>,
    edit: F,
) -> anyhow::Result<PathBuf>
where
    F: FnOnce(&mut EditorSession) -> anyhow::Result<()>,
{
    if let Some(name) = &save_as {
        check_layout_name(name)?;
    }
    let file = state
        .library()
        .load_layout(&layout.path, &layout.file_name)
        .await
        .with_context(|| format!("Failed to load layout {layout}"))?;

    let mut session = state.new_session();
    session.load_tiles(file.windows);
    edit(&mut session)?;

    let request = match save_as {
        Some(name) => SaveRequest::new(layout.path.clone(), name, session.snapshot()),
        None => {
            let name = if file.layout_name.is_empty() {
                layout.stem().to_string()
            } else {
                file.layout_name
            };
            SaveRequest::new(layout.path.clone(), name, session.snapshot())
                .with_file_name(layout.file_name.clone())
        }
    };
    let written = state.saver.save(request).await.context("Failed to save layout")?;

    for (index, tile) in session.store().tiles().enumerate() {
        print_tile(index, tile);
    }
    println!("Saved {}", written.display());
    Ok(written)
}

/// Append imported media of a supported type
pub fn import(session: &mut EditorSession, media: &str, size: Option<(f64, f64)>) -> anyhow::Result<()> {
    if !MediaSource::new(media).is_supported() {
        bail!(
            "{media} is not a supported media file (expected one of: {})",
            wall_model::SUPPORTED_EXTENSIONS.join(", ")
        );
    }
    let index = session.import_media(media, size);
    tracing::info!("Imported {} as tile {}", media, index);
    Ok(())
}

/// Select `indices` in order. Repeated indices count once.
pub fn select(session: &mut EditorSession, indices: &[usize]) -> anyhow::Result<()> {
    session.clear_selection();
    for index in Selection::from_indices(indices.iter().copied()).iter() {
        session
            .toggle_selection(index)
            .with_context(|| format!("Cannot select tile {index}"))?;
    }
    Ok(())
}

/// Fit the given tiles into a row
pub fn fit_row(
    session: &mut EditorSession,
    indices: &[usize],
    canvas_width: f64,
    uniform_width: bool,
    spacing: Option<f64>,
) -> anyhow::Result<()> {
    select(session, indices)?;
    if session.store().selection().len() < 2 {
        bail!("Fit & Scale Row needs at least two different tiles");
    }
    if uniform_width {
        session.set_row_fit_mode(RowFitMode::UniformWidth);
    }
    let spacing = spacing.unwrap_or(session.snap_settings().spacing);
    session.fit_selected_row_spaced(canvas_width, spacing)?;
    Ok(())
}

/// Shift the given tiles vertically
pub fn move_vertically(session: &mut EditorSession, indices: &[usize], offset: f64) -> anyhow::Result<()> {
    select(session, indices)?;
    session.move_selected_vertically(offset);
    session.clear_selection();
    Ok(())
}

/// Replay a JSON command script. Rejected commands are reported and skipped.
pub fn apply_script(session: &mut EditorSession, script: &Path) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let commands = WallCommand::list_from_json(&json).context("Invalid command script")?;

    for (step, command) in commands.iter().enumerate() {
        if let Err(e) = command.apply(session) {
            eprintln!("step {}: {} rejected: {}", step + 1, command.display_name(), e);
        }
    }
    Ok(())
}

fn print_tile(index: usize, tile: &Tile) {
    println!(
        "{:>3}  {:<8} x={:<9.2} y={:<9.2} {:.2} x {:.2}  {}",
        index,
        format!("{:?}", tile.media.kind()).to_lowercase(),
        tile.x,
        tile.y,
        tile.width,
        tile.height,
        tile.media.src
    );
}
