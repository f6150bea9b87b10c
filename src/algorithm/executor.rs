use crate::{
    algorithm::candidates::{CandidateMap, compute_candidates},
    algorithm::rules::AdjacencyRules,
    algorithm::selection::{Placement, RandomSelector, SelectionPolicy, collapse_lowest_entropy},
    io::configuration::{DEFAULT_STUCK_BUDGET, DEFAULT_WIDTH, MAX_GRID_DIMENSION},
    io::error::{AlgorithmError, Result, invalid_parameter},
    io::visualization::VisualizationCapture,
    spatial::grid::Grid,
    spatial::tiles::{EdgeMatch, EdgeRule, Tileset},
};
use ndarray::Array2;
use rand::{Rng, rngs::StdRng};
use std::fmt;
use tracing::{debug, info, warn};

/// How an unsatisfiable cell (zero candidates) is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContradictionPolicy {
    /// Ignore it; the stalled attempt is eventually caught by the round budget
    WaitForBudget,
    /// Abandon the attempt as soon as a round finds one
    #[default]
    RestartImmediately,
}

/// Generator parameters controlling grid size and restart behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Grid edge length; the grid is `width`×`width`
    pub width: usize,
    /// Rounds an attempt may run before it is declared stuck
    pub stuck_budget: usize,
    /// Upper bound on attempts; `None` restarts forever
    pub max_attempts: Option<usize>,
    /// Which tied cells are resolved each round
    pub selection: SelectionPolicy,
    /// Reaction to cells with no remaining candidate
    pub contradiction: ContradictionPolicy,
    /// Fixed `[row, col]` of the seed tile; drawn at random when `None`
    pub seed_position: Option<[usize; 2]>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            stuck_budget: DEFAULT_STUCK_BUDGET,
            max_attempts: None,
            selection: SelectionPolicy::default(),
            contradiction: ContradictionPolicy::default(),
            seed_position: None,
        }
    }
}

impl GeneratorConfig {
    /// Check the parameters before any attempt begins
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `width` is zero or exceeds `MAX_GRID_DIMENSION`
    /// - `max_attempts` is `Some(0)`
    /// - `seed_position` lies outside the grid
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &"grid needs at least one cell",
            ));
        }
        if self.width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(invalid_parameter(
                "max_attempts",
                &0,
                &"at least one attempt is required",
            ));
        }
        if let Some([row, col]) = self
            .seed_position
            .filter(|&[row, col]| row >= self.width || col >= self.width)
        {
            return Err(invalid_parameter(
                "seed_position",
                &format!("{row},{col}"),
                &format!("must lie inside the {0}x{0} grid", self.width),
            ));
        }
        Ok(())
    }
}

/// Why an attempt was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StuckReason {
    /// The round counter went past the stuck budget
    RoundBudget,
    /// A cell ran out of candidates
    Contradiction,
}

impl fmt::Display for StuckReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundBudget => f.write_str("round budget exceeded"),
            Self::Contradiction => f.write_str("unsatisfiable cell"),
        }
    }
}

/// State of the current attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// Rounds are still being played
    Running,
    /// Every cell is resolved
    Converged,
    /// Abandoned with no attempts left
    Stuck(StuckReason),
}

/// Result of advancing the generator by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A round was played and cells remain unresolved
    Running,
    /// The grid is fully resolved
    Converged,
    /// The attempt was discarded and a freshly seeded grid took its place
    Restarted(StuckReason),
}

/// What happened in the last played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Attempt the round belongs to, starting at 1
    pub attempt: usize,
    /// Round number within the attempt, starting at 1
    pub round: usize,
    /// Minimum nonzero candidate count, `None` when nothing could be resolved
    pub k_min: Option<usize>,
    /// Cells resolved this round
    pub placements: Vec<Placement>,
    /// Tied cells skipped because a neighbor resolved in the same round
    /// left them without a compatible tile
    pub deferred: usize,
    /// Unresolved cells left with zero candidates
    pub contradictions: usize,
}

/// A fully resolved grid and how long it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The converged grid
    pub grid: Grid,
    /// Attempt that converged, starting at 1
    pub attempts: usize,
    /// Rounds played in the converging attempt
    pub rounds: usize,
    /// Rounds played across all attempts
    pub total_rounds: usize,
}

impl Solution {
    /// Tile index of every cell
    pub fn tiles(&self) -> Array2<usize> {
        self.grid
            .cells()
            .mapv(|cell| cell.tile().unwrap_or_default())
    }

    /// Category values of the composed picture, `width * tile_size` per side
    pub fn pixels(&self, tileset: &Tileset) -> Array2<u8> {
        self.grid.compose(tileset).mapv(Option::unwrap_or_default)
    }
}

/// One seeded grid and its round counter
#[derive(Debug, Clone)]
struct Attempt {
    number: usize,
    grid: Grid,
    round: usize,
    state: AttemptState,
}

impl Attempt {
    fn start<R: Rng>(
        number: usize,
        config: &GeneratorConfig,
        seed_tile: usize,
        selector: &mut RandomSelector<R>,
    ) -> Self {
        let width = config.width;
        let seed_position = config
            .seed_position
            .unwrap_or_else(|| selector.position(width));
        info!(
            attempt = number,
            row = seed_position[0],
            col = seed_position[1],
            "starting attempt"
        );

        Self {
            number,
            grid: Grid::seeded(width, seed_position, seed_tile),
            round: 0,
            state: AttemptState::Running,
        }
    }
}

/// Lowest-entropy collapse driver with full-grid restarts
///
/// Owns the grid of the current attempt exclusively. Each call to
/// [`Generator::execute_round`] recomputes every candidate set, collapses
/// the cells tied at the minimum count and checks for convergence; a stuck
/// attempt is replaced by a freshly seeded grid.
pub struct Generator<R: Rng = StdRng> {
    tileset: Tileset,
    rules: AdjacencyRules,
    config: GeneratorConfig,
    selector: RandomSelector<R>,
    attempt: Attempt,
    total_rounds: usize,
    last_candidates: Option<CandidateMap>,
    last_report: Option<RoundReport>,
    visualization: Option<VisualizationCapture>,
    entropy_trace: Option<Vec<Array2<usize>>>,
}

impl<R: Rng> Generator<R> {
    /// Create a generator using exact edge matching
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(
        tileset: Tileset,
        config: GeneratorConfig,
        selector: RandomSelector<R>,
    ) -> Result<Self> {
        Self::with_rule(tileset, &EdgeMatch, config, selector)
    }

    /// Create a generator with a custom adjacency relation
    ///
    /// The first attempt is seeded immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn with_rule<E: EdgeRule + ?Sized>(
        tileset: Tileset,
        rule: &E,
        config: GeneratorConfig,
        mut selector: RandomSelector<R>,
    ) -> Result<Self> {
        config.validate()?;

        let rules = AdjacencyRules::build(&tileset, rule);
        let attempt = Attempt::start(1, &config, tileset.seed_index(), &mut selector);

        Ok(Self {
            tileset,
            rules,
            config,
            selector,
            attempt,
            total_rounds: 0,
            last_candidates: None,
            last_report: None,
            visualization: None,
            entropy_trace: None,
        })
    }

    /// Tileset the grid is built from
    pub const fn tileset(&self) -> &Tileset {
        &self.tileset
    }

    /// Parameters in effect
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Grid of the current attempt
    pub const fn grid(&self) -> &Grid {
        &self.attempt.grid
    }

    /// Current attempt number, starting at 1
    pub const fn attempt_number(&self) -> usize {
        self.attempt.number
    }

    /// Rounds played in the current attempt
    pub const fn round(&self) -> usize {
        self.attempt.round
    }

    /// Rounds played across all attempts
    pub const fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// State of the current attempt
    pub const fn state(&self) -> AttemptState {
        self.attempt.state
    }

    /// Candidate sets computed in the most recent round
    pub const fn candidates(&self) -> Option<&CandidateMap> {
        self.last_candidates.as_ref()
    }

    /// Summary of the most recent round
    pub const fn last_report(&self) -> Option<&RoundReport> {
        self.last_report.as_ref()
    }

    /// Recorded events, if visualization was enabled
    pub const fn visualization(&self) -> Option<&VisualizationCapture> {
        self.visualization.as_ref()
    }

    /// Entropy map of every round played since tracing was enabled
    pub fn entropy_trace(&self) -> Option<&[Array2<usize>]> {
        self.entropy_trace.as_deref()
    }

    /// Start recording placements for GIF playback
    ///
    /// Cells already resolved in the current attempt are recorded first.
    pub fn enable_visualization(&mut self) {
        let mut capture = VisualizationCapture::new(self.config.width);
        for position in self.attempt.grid.positions() {
            if let Some(tile) = self.attempt.grid.tile_at(position) {
                capture.record_placement(position, tile, self.attempt.round);
            }
        }
        self.visualization = Some(capture);
    }

    /// Start keeping the candidate count map of every round
    pub fn enable_entropy_trace(&mut self) {
        self.entropy_trace = Some(Vec::new());
    }

    /// The converged grid, once every cell is resolved
    pub fn solution(&self) -> Option<Solution> {
        (self.attempt.state == AttemptState::Converged).then(|| Solution {
            grid: self.attempt.grid.clone(),
            attempts: self.attempt.number,
            rounds: self.attempt.round,
            total_rounds: self.total_rounds,
        })
    }

    /// Play rounds until the grid converges
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is set and every attempt got stuck
    pub fn run(&mut self) -> Result<Solution> {
        loop {
            if self.execute_round()? == RoundOutcome::Converged {
                if let Some(solution) = self.solution() {
                    return Ok(solution);
                }
            }
        }
    }

    /// Advance the current attempt by one round
    ///
    /// Checks convergence and the stuck budget first; a stuck attempt is
    /// replaced instead of playing a round. Once converged, further calls
    /// return [`RoundOutcome::Converged`] without touching the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if a restart is needed but `max_attempts` attempts
    /// have already been made
    pub fn execute_round(&mut self) -> Result<RoundOutcome> {
        match self.attempt.state {
            AttemptState::Running => {}
            AttemptState::Converged => return Ok(RoundOutcome::Converged),
            AttemptState::Stuck(_) => return Err(self.exhausted()),
        }

        if self.attempt.grid.is_converged() {
            return Ok(self.converge());
        }

        if self.attempt.round > self.config.stuck_budget {
            return self.restart(StuckReason::RoundBudget);
        }

        // Phase 1: candidate sets against the grid as it stands
        let candidates = compute_candidates(&self.attempt.grid, &self.rules);
        let contradictions = candidates.contradictions().len();

        if contradictions > 0 && self.config.contradiction == ContradictionPolicy::RestartImmediately
        {
            self.last_candidates = Some(candidates);
            return self.restart(StuckReason::Contradiction);
        }

        if let Some(trace) = &mut self.entropy_trace {
            trace.push(candidates.entropy());
        }

        // Phase 2: collapse the lowest-entropy cells
        let collapse = collapse_lowest_entropy(
            &mut self.attempt.grid,
            &candidates,
            &self.rules,
            self.config.selection,
            &mut self.selector,
        );
        self.attempt.round += 1;
        self.total_rounds += 1;

        let (k_min, placements, deferred) = collapse.map_or((None, Vec::new(), 0), |c| {
            (Some(c.k_min), c.placements, c.deferred)
        });

        debug!(
            attempt = self.attempt.number,
            round = self.attempt.round,
            k_min = ?k_min,
            resolved = placements.len(),
            deferred,
            contradictions,
            "round complete"
        );

        if let Some(ref mut viz) = self.visualization {
            for placement in &placements {
                viz.record_placement(placement.position, placement.tile, self.attempt.round);
            }
        }

        self.last_candidates = Some(candidates);
        self.last_report = Some(RoundReport {
            attempt: self.attempt.number,
            round: self.attempt.round,
            k_min,
            placements,
            deferred,
            contradictions,
        });

        // Phase 3: convergence check
        if self.attempt.grid.is_converged() {
            return Ok(self.converge());
        }

        Ok(RoundOutcome::Running)
    }

    fn converge(&mut self) -> RoundOutcome {
        self.attempt.state = AttemptState::Converged;
        info!(
            attempt = self.attempt.number,
            rounds = self.attempt.round,
            total_rounds = self.total_rounds,
            "grid converged"
        );
        RoundOutcome::Converged
    }

    /// Discard the grid and seed a new attempt
    fn restart(&mut self, reason: StuckReason) -> Result<RoundOutcome> {
        warn!(
            attempt = self.attempt.number,
            rounds = self.attempt.round,
            %reason,
            "attempt stuck"
        );

        if self
            .config
            .max_attempts
            .is_some_and(|max| self.attempt.number >= max)
        {
            self.attempt.state = AttemptState::Stuck(reason);
            return Err(self.exhausted());
        }

        let number = self.attempt.number + 1;
        self.attempt = Attempt::start(
            number,
            &self.config,
            self.tileset.seed_index(),
            &mut self.selector,
        );

        if let Some(ref mut viz) = self.visualization {
            viz.record_restart(number);
            for position in self.attempt.grid.positions() {
                if let Some(tile) = self.attempt.grid.tile_at(position) {
                    viz.record_placement(position, tile, 0);
                }
            }
        }

        Ok(RoundOutcome::Restarted(reason))
    }

    const fn exhausted(&self) -> AlgorithmError {
        AlgorithmError::AttemptsExhausted {
            attempts: self.attempt.number,
            stuck_budget: self.config.stuck_budget,
        }
    }
}
