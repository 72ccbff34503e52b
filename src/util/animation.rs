//! Frame math for the fade-in and slide-in transitions.
//!
//! The DOM drivers in `dom::animate` sample these per animation frame; keeping
//! the interpolation here lets it be checked without a browser.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::fmt;
use std::str::FromStr;

/// Default transition length in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 300.0;

/// Linear progress in `[0, 1]`. A non-positive duration is already complete.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || elapsed_ms.is_nan() {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// Edge a sliding element enters from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl SlideDirection {
    fn axis(self) -> char {
        match self {
            Self::Left | Self::Right => 'X',
            Self::Up | Self::Down => 'Y',
        }
    }

    fn sign(self) -> &'static str {
        match self {
            Self::Left | Self::Up => "-",
            Self::Right | Self::Down => "",
        }
    }

    /// CSS transform with the element displaced by `offset_percent` of its size.
    pub fn transform_at(self, offset_percent: f64) -> String {
        format!("translate{}({}{offset_percent}%)", self.axis(), self.sign())
    }

    /// Transform applied before the first frame.
    pub fn start_transform(self) -> String {
        self.transform_at(100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown slide direction: {0}")]
pub struct ParseDirectionError(String);

impl FromStr for SlideDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(ParseDirectionError(other.to_owned())),
        }
    }
}

impl fmt::Display for SlideDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        })
    }
}

/// One sampled frame of a fade-in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeFrame {
    pub opacity: f64,
    pub done: bool,
}

impl FadeFrame {
    pub fn at(elapsed_ms: f64, duration_ms: f64) -> Self {
        let p = progress(elapsed_ms, duration_ms);
        Self { opacity: p, done: p >= 1.0 }
    }
}

/// One sampled frame of a slide-in.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideFrame {
    pub transform: String,
    pub opacity: f64,
    pub done: bool,
}

impl SlideFrame {
    pub fn at(direction: SlideDirection, elapsed_ms: f64, duration_ms: f64) -> Self {
        let p = progress(elapsed_ms, duration_ms);
        if p >= 1.0 {
            return Self { transform: "none".to_owned(), opacity: 1.0, done: true };
        }
        let eased = ease_out_cubic(p);
        Self {
            transform: direction.transform_at(100.0 - eased * 100.0),
            opacity: eased,
            done: false,
        }
    }
}
