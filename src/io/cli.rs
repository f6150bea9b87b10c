//! Command-line interface for generating and displaying a tile grid

use crate::algorithm::executor::{
    ContradictionPolicy, Generator, GeneratorConfig, RoundOutcome, Solution,
};
use crate::algorithm::selection::{RandomSelector, SelectionPolicy};
use crate::io::configuration::{
    DEFAULT_PALETTE, DEFAULT_STUCK_BUDGET, DEFAULT_WIDTH, EXPORT_PIXEL_SCALE, GIF_FRAME_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::image::export_solution_as_png;
use crate::io::presets::Preset;
use crate::io::progress::ProgressManager;
use crate::io::render::{render_entropy, render_grid};
use clap::{Parser, ValueEnum};
use rand::Rng;
use std::io::Write;
use std::path::PathBuf;

/// Command-line spelling of [`SelectionPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PolicyArg {
    /// Resolve every cell tied at the minimum candidate count
    #[default]
    AllTied,
    /// Resolve a single cell per round
    Single,
}

impl From<PolicyArg> for SelectionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AllTied => Self::AllTied,
            PolicyArg::Single => Self::SingleCell,
        }
    }
}

#[derive(Parser)]
#[command(name = "tilecollapse")]
#[command(
    author,
    version,
    about = "Generate an edge-matched tile grid by lowest-entropy collapse"
)]
/// Command-line arguments for the grid generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Grid edge length in tiles
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Random seed for reproducible generation (drawn from the OS if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Place the seed tile at this cell instead of a random one
    #[arg(long, num_args = 2, value_names = ["ROW", "COL"])]
    pub seed_at: Option<Vec<usize>>,

    /// Rounds an attempt may take before the grid restarts
    #[arg(short, long, default_value_t = DEFAULT_STUCK_BUDGET)]
    pub budget: usize,

    /// Give up after this many attempts instead of restarting forever
    #[arg(short = 'm', long)]
    pub max_attempts: Option<usize>,

    /// Built-in tileset to draw from
    #[arg(short, long, value_enum, default_value_t = Preset::Paths)]
    pub tileset: Preset,

    /// Which tied cells are resolved each round
    #[arg(short, long, value_enum, default_value_t = PolicyArg::AllTied)]
    pub policy: PolicyArg,

    /// Keep playing rounds when a cell runs out of candidates, until the budget expires
    #[arg(long)]
    pub wait_for_budget: bool,

    /// Print the partial grid after every round
    #[arg(long)]
    pub trace: bool,

    /// Print the candidate count of every cell after every round
    #[arg(short, long)]
    pub entropy: bool,

    /// Write the finished grid as a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Write an animated GIF with one frame per round
    #[arg(short = 'g', long, value_name = "GIF")]
    pub visualize: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator parameters selected on the command line
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            width: self.width,
            stuck_budget: self.budget,
            max_attempts: self.max_attempts,
            selection: self.policy.into(),
            contradiction: if self.wait_for_budget {
                ContradictionPolicy::WaitForBudget
            } else {
                ContradictionPolicy::RestartImmediately
            },
            seed_position: match self.seed_at.as_deref() {
                Some(&[row, col]) => Some([row, col]),
                _ => None,
            },
        }
    }

    /// Random source selected on the command line
    pub fn selector(&self) -> RandomSelector {
        self.seed
            .map_or_else(RandomSelector::from_entropy, RandomSelector::from_seed)
    }
}

/// Runs one generation from parsed arguments and writes the result
pub struct GridRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl GridRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate a grid, print it to `out` and export any requested images
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tileset or generator configuration is invalid
    /// - Every permitted attempt got stuck
    /// - Writing to `out` or exporting images fails
    pub fn process(&mut self, out: &mut impl Write) -> Result<Solution> {
        let tileset = self.cli.tileset.tileset()?;
        let mut generator =
            Generator::new(tileset, self.cli.generator_config(), self.cli.selector())?;

        if self.cli.visualize.is_some() {
            generator.enable_visualization();
        }

        let solution = self.drive(&mut generator, out)?;
        self.progress_manager.finish();

        write!(out, "{}", render_grid(&solution.grid, generator.tileset()))?;
        writeln!(
            out,
            "converged after {} attempt(s), {} round(s)",
            solution.attempts, solution.rounds
        )?;

        if let Some(path) = &self.cli.output {
            export_solution_as_png(
                &solution,
                generator.tileset(),
                &DEFAULT_PALETTE,
                EXPORT_PIXEL_SCALE,
                path,
            )?;
        }

        if let (Some(path), Some(viz)) = (&self.cli.visualize, generator.visualization()) {
            viz.export_gif(path, generator.tileset(), &DEFAULT_PALETTE, GIF_FRAME_DELAY_MS)?;
        }

        Ok(solution)
    }

    fn drive<R: Rng>(
        &mut self,
        generator: &mut Generator<R>,
        out: &mut impl Write,
    ) -> Result<Solution> {
        self.progress_manager
            .initialize(generator.grid().cell_count());

        loop {
            match generator.execute_round()? {
                RoundOutcome::Running => {
                    self.progress_manager.update_round(
                        generator.attempt_number(),
                        generator.round(),
                        generator.grid().resolved_count(),
                    );
                    self.write_round(generator, out)?;
                }
                RoundOutcome::Restarted(reason) => {
                    self.progress_manager.restart(
                        generator.attempt_number(),
                        reason,
                        generator.grid().resolved_count(),
                    );
                }
                RoundOutcome::Converged => {
                    if generator.round() > 0 {
                        self.write_round(generator, out)?;
                    }
                    if let Some(solution) = generator.solution() {
                        return Ok(solution);
                    }
                }
            }
        }
    }

    /// Print the per-round diagnostics that were asked for
    fn write_round<R: Rng>(&self, generator: &Generator<R>, out: &mut impl Write) -> Result<()> {
        if self.cli.entropy {
            if let Some(candidates) = generator.candidates() {
                write!(out, "{}", render_entropy(&candidates.entropy()))?;
                writeln!(out)?;
            }
        }
        if self.cli.trace {
            write!(out, "{}", render_grid(generator.grid(), generator.tileset()))?;
            writeln!(out, "------------------")?;
        }
        Ok(())
    }
}
