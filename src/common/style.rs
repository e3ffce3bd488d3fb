//! Marker styles for chart series
//!
//! Series styles are written in the same two-letter shorthand the plotting scripts
//! used, e.g. `r^` (red triangles) or `bs` (blue squares). One color letter and one
//! marker letter are required; their order does not matter.

use plotters::style::RGBColor;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default marker radius in pixels
pub const DEFAULT_MARKER_SIZE: u32 = 4;

/// Errors that can occur while parsing a style string
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StyleError {
    #[error("Unknown style code '{0}'")]
    UnknownCode(char),

    #[error("Style '{0}' does not name a color")]
    MissingColor(String),

    #[error("Style '{0}' does not name a marker")]
    MissingMarker(String),

    #[error("Style '{0}' names more than one color or marker")]
    Duplicate(String),
}

/// Base colors addressable by a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
}

impl SeriesColor {
    fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(Self::Blue),
            'g' => Some(Self::Green),
            'r' => Some(Self::Red),
            'c' => Some(Self::Cyan),
            'm' => Some(Self::Magenta),
            'y' => Some(Self::Yellow),
            'k' => Some(Self::Black),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Red => 'r',
            Self::Cyan => 'c',
            Self::Magenta => 'm',
            Self::Yellow => 'y',
            Self::Black => 'k',
        }
    }

    /// RGB value of the color. Green, cyan, magenta and yellow are the darker
    /// variants so they stay readable on a white background.
    pub fn rgb(self) -> RGBColor {
        match self {
            Self::Blue => RGBColor(0, 0, 255),
            Self::Green => RGBColor(0, 128, 0),
            Self::Red => RGBColor(255, 0, 0),
            Self::Cyan => RGBColor(0, 191, 191),
            Self::Magenta => RGBColor(191, 0, 191),
            Self::Yellow => RGBColor(191, 191, 0),
            Self::Black => RGBColor(0, 0, 0),
        }
    }
}

/// Marker glyph drawn at every data point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    TriangleUp,
    TriangleDown,
    Square,
    Circle,
    Cross,
}

impl Marker {
    fn from_code(code: char) -> Option<Self> {
        match code {
            '^' => Some(Self::TriangleUp),
            'v' => Some(Self::TriangleDown),
            's' => Some(Self::Square),
            'o' => Some(Self::Circle),
            'x' => Some(Self::Cross),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::TriangleUp => '^',
            Self::TriangleDown => 'v',
            Self::Square => 's',
            Self::Circle => 'o',
            Self::Cross => 'x',
        }
    }
}

/// Color, marker glyph and marker size of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeriesStyle {
    pub color: SeriesColor,
    pub marker: Marker,
    /// Marker radius in pixels
    pub size: u32,
}

impl SeriesStyle {
    pub fn new(color: SeriesColor, marker: Marker) -> Self {
        Self {
            color,
            marker,
            size: DEFAULT_MARKER_SIZE,
        }
    }
}

impl FromStr for SeriesStyle {
    type Err = StyleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut color = None;
        let mut marker = None;

        for code in text.trim().chars() {
            // 's' is a marker, never a color, so classify markers first.
            if let Some(found) = Marker::from_code(code) {
                if marker.replace(found).is_some() {
                    return Err(StyleError::Duplicate(text.to_string()));
                }
            } else if let Some(found) = SeriesColor::from_code(code) {
                if color.replace(found).is_some() {
                    return Err(StyleError::Duplicate(text.to_string()));
                }
            } else {
                return Err(StyleError::UnknownCode(code));
            }
        }

        let color = color.ok_or_else(|| StyleError::MissingColor(text.to_string()))?;
        let marker = marker.ok_or_else(|| StyleError::MissingMarker(text.to_string()))?;
        Ok(Self::new(color, marker))
    }
}

impl TryFrom<String> for SeriesStyle {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeriesStyle> for String {
    fn from(style: SeriesStyle) -> Self {
        style.to_string()
    }
}

impl fmt::Display for SeriesStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.marker.code())
    }
}
