//! Command-line interface for enumerating pentomino tilings

use crate::algorithm::exact_cover::exact_covers;
use crate::io::configuration::{CELL_PIXELS, DEFAULT_COLS, DEFAULT_OUTPUT_DIR, DEFAULT_ROWS};
use crate::io::error::Result;
use crate::io::export::{save_tilings, tilings_path};
use crate::io::image::export_tiling_as_png;
use crate::io::progress::SearchProgress;
use crate::spatial::polyomino::pentominoes;
use crate::spatial::rectangle::RectangleProblem;
use clap::{Args, Parser, Subcommand};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pentacover")]
#[command(
    author,
    version,
    about = "Enumerate exact covers and pentomino rectangle tilings"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Action to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available actions
#[derive(Subcommand)]
pub enum Command {
    /// Enumerate the pentomino tilings of a rectangle
    Tile(TileArgs),
    /// Print every pentomino with all of its orientations
    Shapes,
    /// Solve a small exact cover problem and print every cover
    Demo,
}

/// Options of the `tile` command
#[derive(Args)]
pub struct TileArgs {
    /// Number of board rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of board columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Stop after this many tilings
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Save all tilings as JSON into this directory
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_DIR)]
    pub json: Option<PathBuf>,

    /// Save every tiling as a PNG image into this directory
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_DIR)]
    pub png: Option<PathBuf>,

    /// Wait for Enter after each tiling; `q` stops
    #[arg(short, long)]
    pub step: bool,

    /// Do not print tilings, only count them
    #[arg(long)]
    pub count_only: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Executes the parsed command against the given output and input streams
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// `input` is only read by `tile --step`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board size is invalid, or if writing output,
    /// JSON or images fails
    pub fn run(&self, out: &mut impl Write, input: &mut impl BufRead) -> Result<()> {
        match &self.cli.command {
            Command::Tile(args) => self.tile(args, out, input),
            Command::Shapes => Self::shapes(out),
            Command::Demo => Self::demo(out),
        }
    }

    fn progress(&self, label: &str) -> SearchProgress {
        if self.cli.should_show_progress() {
            SearchProgress::new(label)
        } else {
            SearchProgress::hidden(label)
        }
    }

    fn tile(
        &self,
        args: &TileArgs,
        out: &mut impl Write,
        input: &mut impl BufRead,
    ) -> Result<()> {
        let (rows, cols) = (args.rows, args.cols);
        let problem = RectangleProblem::pentomino(rows, cols)?;
        let progress = self.progress(&format!("{rows}x{cols}"));
        let mut kept = Vec::new();

        for (index, tiling) in problem
            .tilings()
            .take(args.limit.unwrap_or(usize::MAX))
            .enumerate()
        {
            progress.found();

            if !args.count_only {
                progress.suspend(|| writeln!(out, "{}\n", tiling.render(rows, cols)))?;
            }

            if let Some(dir) = &args.png {
                let path = dir.join(format!("tiling-{rows}-{cols}-{index}.png"));
                export_tiling_as_png(&tiling, rows, cols, CELL_PIXELS, &path)?;
            }

            if args.json.is_some() {
                kept.push(tiling);
            }

            if args.step {
                let mut line = String::new();
                let read = progress.suspend(|| input.read_line(&mut line))?;
                if read == 0 || line.trim() == "q" {
                    break;
                }
            }
        }
        progress.finish();

        if let Some(dir) = &args.json {
            let path = tilings_path(dir, rows, cols);
            save_tilings(&path, &kept)?;
            // Allow print for user feedback on saved output
            #[allow(clippy::print_stderr)]
            if self.cli.should_show_progress() {
                eprintln!("Saved {} tilings to {}", kept.len(), path.display());
            }
        }

        writeln!(out, "{} tilings of the {rows}x{cols} board", progress.count())?;
        Ok(())
    }

    fn shapes(out: &mut impl Write) -> Result<()> {
        let mut total = 0;
        for piece in pentominoes() {
            let variations = piece.variations();
            total += variations.len();
            writeln!(
                out,
                "Pentomino {} variations ({}):\n",
                piece.name(),
                variations.len()
            )?;
            for variation in &variations {
                writeln!(out, "{variation}")?;
            }
        }
        writeln!(out, "In total, there are {total} variations")?;
        Ok(())
    }

    fn demo(out: &mut impl Write) -> Result<()> {
        let (universe, family) = demo_problem();
        writeln!(out, "X = {universe:?}")?;
        writeln!(out, "S = {family:?}")?;
        writeln!(out, "Covers:")?;

        let mut count = 0;
        for cover in exact_covers(&universe, &family, true)? {
            count += 1;
            writeln!(out, "{cover:?}")?;
        }
        writeln!(out, "{count} covers")?;
        Ok(())
    }
}

/// Universe {1..7} with ten choices; it has six exact covers
pub fn demo_problem() -> (BTreeSet<u32>, Vec<BTreeSet<u32>>) {
    let universe = (1..=7).collect();
    let family = vec![
        vec![1],
        vec![3],
        vec![7],
        vec![1, 2],
        vec![2, 3],
        vec![1, 3],
        vec![1, 2, 7],
        vec![4, 5, 6],
        vec![1, 2, 3],
        vec![3, 4, 5, 6],
    ]
    .into_iter()
    .map(BTreeSet::from_iter)
    .collect();
    (universe, family)
}
