use std::fs::File;
use std::path::Path;
use std::time::Duration;

use gif::Encoder;
use gif::Frame;
use gif::Repeat;
use thiserror::Error;

use crate::cell::Cell;
use crate::grid::Grid;

/// Two-entry global palette: index 0 renders at the dead intensity, index 1
/// at the live intensity.
const PALETTE: [u8; 6] = {
    let off = Cell::Dead.intensity();
    let on = Cell::Alive.intensity();

    [off, off, off, on, on, on]
};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write output file")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode frame")]
    Encode(#[from] gif::EncodingError),

    #[error("Grid of size {0} does not fit in a gif frame")]
    GridTooLarge(usize),
}

/// Records the animation to a gif file, one frame per generation.
pub struct GifRecorder {
    encoder: Encoder<File>,
    size: u16,

    /// Frame delay in hundredths of a second
    delay: u16,
}

impl GifRecorder {
    /// Open `path` for writing and emit the gif header. The frame delay is
    /// derived from the tick interval, so playback runs at roughly the speed
    /// the animation was shown at.
    pub fn create(path: &Path, grid_size: usize, interval: Duration) -> Result<Self, ExportError> {
        let size =
            u16::try_from(grid_size).map_err(|_| ExportError::GridTooLarge(grid_size))?;

        let file = File::create(path)?;
        let mut encoder = Encoder::new(file, size, size, &PALETTE)?;
        encoder.set_repeat(Repeat::Infinite)?;

        // gif stores frame delays in centiseconds
        let delay = u16::try_from(interval.as_millis() / 10)
            .unwrap_or(u16::MAX)
            .max(1);

        Ok(Self {
            encoder,
            size,
            delay,
        })
    }

    /// Append the current generation as a frame.
    pub fn record(&mut self, grid: &Grid) -> Result<(), ExportError> {
        let pixels: Vec<u8> = grid
            .cells()
            .iter()
            .map(|cell| cell.is_alive() as u8)
            .collect();

        let mut frame = Frame::from_indexed_pixels(self.size, self.size, pixels, None);
        frame.delay = self.delay;

        self.encoder.write_frame(&frame)?;

        Ok(())
    }
}
