//! Command implementations for dojoctl

use crate::logging::{self, LogTarget};
use crate::summary::print_summary;
use anyhow::{Context, Result};
use dojo_common::generator::{ENDLESS_ADD_TERMS, ENDLESS_ADD_WIDTHS, ENDLESS_SUB_WIDTHS};
use dojo_common::{Curriculum, DojoConfig, Mode, ProblemEngine};
use tracing::info;

/// Modes to list: the requested one, or both
pub fn selected_modes(mode: Option<Mode>) -> Vec<Mode> {
    match mode {
        Some(mode) => vec![mode],
        None => vec![Mode::Addition, Mode::Subtraction],
    }
}

fn width_range(widths: &[u32]) -> String {
    format!(
        "{}-{} digits",
        widths.iter().min().copied().unwrap_or(0),
        widths.iter().max().copied().unwrap_or(0)
    )
}

fn endless_description(mode: Mode) -> String {
    match mode {
        Mode::Addition => format!(
            "{}-{} terms of {}",
            ENDLESS_ADD_TERMS.start(),
            ENDLESS_ADD_TERMS.end(),
            width_range(&ENDLESS_ADD_WIDTHS)
        ),
        Mode::Subtraction => format!("2 terms of {}", width_range(&ENDLESS_SUB_WIDTHS)),
    }
}

/// Plain-text curriculum table
pub fn levels_text(curriculum: &Curriculum, modes: &[Mode]) -> String {
    let mut out = String::new();
    for mode in modes {
        out.push_str(&format!("{}\n", mode.label()));
        out.push_str(&format!(
            "  {:<3} {:<22} {:>6}  {:<6} {:>5}\n",
            "#", "LEVEL", "DIGITS", "POOL", "GOAL"
        ));
        for (i, level) in curriculum.levels(*mode).iter().enumerate() {
            out.push_str(&format!(
                "  {:<3} {:<22} {:>6}  {:<6} {:>5}\n",
                i + 1,
                level.label,
                level.digit_count,
                level.pool_display(),
                level.problem_count
            ));
        }
        out.push_str(&format!(
            "  then PHASE 2 | GOD MODE: {}\n\n",
            endless_description(*mode)
        ));
    }
    out
}

/// JSON curriculum, keyed by mode name
pub fn levels_json(curriculum: &Curriculum, modes: &[Mode]) -> Result<String> {
    let mut map = serde_json::Map::new();
    for mode in modes {
        map.insert(
            mode.as_str().to_string(),
            serde_json::to_value(curriculum.levels(*mode))?,
        );
    }
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(map))?)
}

pub fn levels(mode: Option<Mode>, json: bool) -> Result<()> {
    let curriculum = Curriculum::standard();
    let modes = selected_modes(mode);
    if json {
        println!("{}", levels_json(&curriculum, &modes)?);
    } else {
        print!("{}", levels_text(&curriculum, &modes));
    }
    Ok(())
}

pub fn show_config(config: &DojoConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Launch the interactive drill
pub fn play(config: &DojoConfig, seed: Option<u64>, mode: Option<Mode>) -> Result<()> {
    let log_file = logging::init(&config.log, LogTarget::File);

    let engine = match seed.or(config.engine.seed) {
        Some(seed) => {
            info!("Seeded session: {}", seed);
            ProblemEngine::with_seed(seed)
        }
        None => ProblemEngine::new(),
    };
    info!(log_file = ?log_file, "Mental Dojo v{} starting", env!("DOJO_VERSION"));

    let stats = crate::tui::run(engine, config, mode).context("TUI session failed")?;
    print_summary(&stats);
    Ok(())
}
