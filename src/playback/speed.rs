// Auto-play speeds

use std::fmt;
use std::time::Duration;

/// Named auto-play rate; each maps to a fixed delay between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Normal, Speed::Fast];

    /// Delay between two auto-advanced steps
    pub fn interval(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(1500),
            Speed::Normal => Duration::from_millis(900),
            Speed::Fast => Duration::from_millis(400),
        }
    }

    /// One notch faster, saturating at [`Speed::Fast`]
    pub fn faster(self) -> Self {
        match self {
            Speed::Slow => Speed::Normal,
            Speed::Normal | Speed::Fast => Speed::Fast,
        }
    }

    /// One notch slower, saturating at [`Speed::Slow`]
    pub fn slower(self) -> Self {
        match self {
            Speed::Fast => Speed::Normal,
            Speed::Normal | Speed::Slow => Speed::Slow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
            Speed::Fast => "fast",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
