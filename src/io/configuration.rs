//! Generator constants and runtime configuration defaults

/// Edge length of the built-in tiles
pub const TILE_SIZE: usize = 3;

/// Default grid edge length (the grid is square)
pub const DEFAULT_WIDTH: usize = 10;

// A stalled attempt keeps counting rounds, so this also bounds stalls
/// Rounds an attempt may run before it is declared stuck
pub const DEFAULT_STUCK_BUDGET: usize = 100;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Index of the seed ("full", four-way connected) tile in the built-in tilesets
pub const SEED_TILE_INDEX: usize = 1;

// Default values for configurable parameters
/// Fixed seed used by benches and reproducible runs
pub const DEFAULT_SEED: u64 = 42;

/// Console glyph for category value 0
pub const EMPTY_GLYPH: char = ' ';
/// Console glyph for category value 1
pub const PRIMARY_GLYPH: char = '█';
/// Console glyph for any other category value
pub const SECONDARY_GLYPH: char = '.';
/// Console glyph for cells that are not resolved yet
pub const UNRESOLVED_GLYPH: char = '?';

/// RGBA color for each category value (indexed by value)
pub const DEFAULT_PALETTE: [[u8; 4]; 3] = [
    [24, 24, 32, 255],
    [236, 236, 228, 255],
    [222, 142, 52, 255],
];
/// RGBA color for unresolved cells in visualization frames
pub const UNRESOLVED_COLOR: [u8; 4] = [96, 96, 110, 255];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Integer scale factor applied to every exported pixel
pub const EXPORT_PIXEL_SCALE: u32 = 4;
