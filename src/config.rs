use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

/// Runtime configuration, resolved from raw command line values.
///
/// Resolution is permissive: a size or interval that fails to parse, or a
/// size too small to be interesting, is silently replaced by its default so
/// the animation always starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Side length of the square grid
    pub grid_size: usize,

    /// Probability that a cell starts out alive
    pub alive_probability: f64,

    /// Time between generations
    pub interval: Duration,

    /// When set, the animation is also recorded here as a gif
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 100,
            alive_probability: 0.2,
            interval: Duration::from_millis(50),
            output: None,
        }
    }
}

impl Config {
    /// Grids below this size are rejected during resolution and fall back to
    /// the default size.
    pub const MIN_GRID_SIZE: usize = 9;

    /// Resolve a config from raw argument strings.
    pub fn resolve(
        grid_size: Option<&str>,
        interval: Option<&str>,
        output: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::default();

        let grid_size = match grid_size.map(str::parse::<usize>) {
            Some(Ok(n)) if n >= Self::MIN_GRID_SIZE => n,
            Some(_) => {
                debug!("ignoring unusable grid size, using {}", defaults.grid_size);

                defaults.grid_size
            }
            None => defaults.grid_size,
        };

        let interval = match interval.map(str::parse::<u64>) {
            Some(Ok(ms)) => Duration::from_millis(ms),
            Some(Err(_)) => {
                debug!("ignoring unusable interval, using {:?}", defaults.interval);

                defaults.interval
            }
            None => defaults.interval,
        };

        Self {
            grid_size,
            interval,
            output,
            ..defaults
        }
    }
}
