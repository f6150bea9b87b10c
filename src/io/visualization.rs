//! Round capture and GIF generation for generation playback

use crate::io::configuration::{EXPORT_PIXEL_SCALE, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, encode_failure, invalid_parameter, io_failure};
use crate::io::image::render_image;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::Tileset;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use std::path::Path;

/// Something that happened to the grid during generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureEvent {
    /// A cell was resolved
    Placement {
        /// Grid position `[row, col]`
        position: [usize; 2],
        /// Assigned tileset index
        tile: usize,
        /// Round of the attempt in which it happened (0 for the seed)
        round: usize,
    },
    /// The grid was discarded and a new attempt started
    Restart {
        /// Number of the new attempt
        attempt: usize,
    },
}

/// Captures placements and restarts for visualization
///
/// Records events during generation; frames are only rendered on export,
/// one per round. Only the current attempt is kept: a restart drops
/// everything recorded before it and leaves a single marker.
pub struct VisualizationCapture {
    events: Vec<CaptureEvent>,
    width: usize,
}

impl VisualizationCapture {
    /// Start an empty capture for a `width`×`width` grid
    pub const fn new(width: usize) -> Self {
        Self {
            events: Vec::new(),
            width,
        }
    }

    /// Records a cell resolution
    pub fn record_placement(&mut self, position: [usize; 2], tile: usize, round: usize) {
        self.events.push(CaptureEvent::Placement {
            position,
            tile,
            round,
        });
    }

    /// Records a full-grid restart, discarding the abandoned attempt
    pub fn record_restart(&mut self, attempt: usize) {
        self.events.clear();
        self.events.push(CaptureEvent::Restart { attempt });
    }

    /// Returns all recorded events
    pub fn events(&self) -> &[CaptureEvent] {
        &self.events
    }

    /// Returns the total number of recorded events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Replay the events into one grid snapshot per round
    ///
    /// A snapshot is taken whenever the round changes, plus one for the
    /// final state.
    pub fn snapshots(&self) -> Vec<Grid> {
        let mut grid = Grid::new(self.width);
        let mut snapshots = Vec::new();
        let mut current_round = 0;

        for event in &self.events {
            match *event {
                CaptureEvent::Placement {
                    position,
                    tile,
                    round,
                } => {
                    if round != current_round {
                        snapshots.push(grid.clone());
                        current_round = round;
                    }
                    grid.resolve(position, tile);
                }
                CaptureEvent::Restart { .. } => {
                    grid = Grid::new(self.width);
                    current_round = 0;
                }
            }
        }

        snapshots.push(grid);
        snapshots
    }

    /// Export the captured rounds as an animated GIF
    ///
    /// Delays below what viewers reliably support are raised to that
    /// minimum. The last frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No events were captured
    /// - A category value has no palette entry
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        output_path: &Path,
        tileset: &Tileset,
        palette: &[[u8; 4]],
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.events.is_empty() {
            return Err(invalid_parameter(
                "visualization",
                &"empty",
                &"nothing was captured",
            ));
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let frames = self.generate_frames(tileset, palette, delay_ms)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(io_failure(parent, "create directory"))?;
        }
        let file =
            std::fs::File::create(output_path).map_err(io_failure(output_path, "create file"))?;

        let mut encoder = GifEncoder::new(file);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(encode_failure(output_path))?;
        encoder
            .encode_frames(frames)
            .map_err(encode_failure(output_path))?;

        Ok(())
    }

    fn generate_frames(
        &self,
        tileset: &Tileset,
        palette: &[[u8; 4]],
        delay_ms: u32,
    ) -> Result<Vec<Frame>> {
        let mut frames = Vec::new();
        for snapshot in self.snapshots() {
            let img = render_image(&snapshot.compose(tileset), palette, EXPORT_PIXEL_SCALE)?;
            frames.push(Frame::from_parts(
                img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            ));
        }

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * 25, 1),
            ));
        }

        Ok(frames)
    }
}
