use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use wordgrid_solver::config::Config;
use wordgrid_solver::palette::{PaletteRegistry, DEFAULT_PALETTE};
use wordgrid_solver::parser::{parse_grid, parse_word_list};
use wordgrid_solver::report::{build_artifact, renderer_for};
use wordgrid_solver::search::search_words;

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    // Initialize palette registry with the embedded classic palette
    let mut registry = PaletteRegistry::new();
    registry.add_embedded_classic_palette();
    for dir in &config.palette_dirs {
        registry.load_palette_dir(dir);
    }

    // Set active palette from config or default to "classic"
    let active_palette = config
        .get_effective_palette()
        .unwrap_or_else(|| DEFAULT_PALETTE.to_string());
    registry.set_active_palette(&active_palette);
    let palette = match registry.get_active_palette() {
        Some(palette) => palette,
        None => anyhow::bail!(
            "Unknown palette '{}' (available: {})",
            active_palette,
            registry.list_palettes().join(", ")
        ),
    };

    let grid_text = read_grid_input(&config.grid)?;
    let words_text = match &config.words {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read words file: {}", path.display()))?,
        None => config.words_text.clone().unwrap_or_default(),
    };

    let words = parse_word_list(&words_text);
    let renderer = renderer_for(config.format, config.color);

    let rendered = match parse_grid(&grid_text) {
        Ok(grid) => {
            log::debug!(
                "Parsed {}x{} grid, searching for {} words",
                grid.rows(),
                grid.cols(),
                words.len()
            );
            let result = search_words(&grid, &words);
            log::info!(
                "Found {} of {} words",
                result.found_count(),
                result.matches.len()
            );
            renderer.render(&build_artifact(&grid, &result, palette))
        }
        Err(e) => {
            // Still emit an artifact so downstream viewers show the failure
            write_output(config.output.as_deref(), &renderer.render_error(&e.to_string()))?;
            return Err(e).context("Failed to parse grid");
        }
    };

    write_output(config.output.as_deref(), &rendered)
}

/// Read the grid source, treating '-' as stdin
fn read_grid_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read grid from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid file: {}", path.display()))
    }
}

/// Write the rendered artifact to the output file or stdout
fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            log::info!("Wrote output to {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
