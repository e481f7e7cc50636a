use std::path::Path;

use exam_schedule::{ConvertOptions, Strategy, convert, load_layout};

use crate::cli::TableStrategy;

/// Table detection flags from the command line.
pub struct Tuning {
    pub strategy: TableStrategy,
    pub snap_tolerance: f64,
    pub join_tolerance: f64,
    pub text_tolerance: f64,
    /// Explicit grid; both empty unless given on the command line.
    pub rows: Vec<f64>,
    pub columns: Vec<f64>,
}

pub fn run(
    input: &Path,
    output: &Path,
    tuning: &Tuning,
    layout: Option<&Path>,
    password: Option<&str>,
) -> Result<(), i32> {
    if !input.exists() {
        eprintln!("Error: file not found: {}", input.display());
        return Err(1);
    }

    let options = build_options(tuning, layout, password)?;

    let summary = convert(input, output, &options).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    println!("Wrote {} entries to {}", summary.entries, summary.output.display());
    Ok(())
}

fn build_options(
    tuning: &Tuning,
    layout: Option<&Path>,
    password: Option<&str>,
) -> Result<ConvertOptions, i32> {
    let strategy = match tuning.strategy {
        TableStrategy::Lattice => Strategy::Lattice,
        TableStrategy::Stream => Strategy::Stream,
    };

    let mut options = ConvertOptions::default()
        .with_strategy(strategy)
        .with_snap_tolerance(tuning.snap_tolerance)
        .with_join_tolerance(tuning.join_tolerance)
        .with_text_tolerance(tuning.text_tolerance);

    if !tuning.rows.is_empty() && !tuning.columns.is_empty() {
        options = options.with_explicit_lines(tuning.rows.clone(), tuning.columns.clone());
    }

    if let Some(path) = layout {
        let template = load_layout(path).map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;
        options = options.with_layout(template);
    }
    if let Some(password) = password {
        options = options.with_password(password);
    }
    Ok(options)
}
