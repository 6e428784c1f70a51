// Copyright 2026 Oxide Computer Company

//! Lane colors.

use crate::PaletteError;
use serde::Serialize;
use std::{fmt, sync::Arc};

/// The hues used when no palette is configured.
///
/// Neighbouring entries are far apart on the color wheel, so lanes opened
/// one after another are easy to tell apart.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#15a0bf", "#0669f7", "#8e00c2", "#c517b6", "#d90171", "#cd0101",
    "#f25d2e", "#f2ca33", "#7bd938", "#2ece9d",
];

/// A lane color, as a CSS color string.
///
/// Cloning is cheap: every row a lane touches shares the same allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(Arc<str>);

impl Color {
    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fixed, finite palette that lane colors are drawn from in rotation.
///
/// A palette is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Arc<[Color]>,
}

impl Palette {
    /// Creates a palette from a list of color strings.
    ///
    /// Surrounding whitespace is trimmed. Returns an error if the list is
    /// empty or any entry is blank.
    pub fn new<I, S>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = colors
            .into_iter()
            .enumerate()
            .map(|(index, color)| {
                let color = color.as_ref().trim();
                if color.is_empty() {
                    Err(PaletteError::BlankColor { index })
                } else {
                    Ok(Color(Arc::from(color)))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Palette { colors: colors.into() })
    }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes are never empty. Provided for API
    /// completeness alongside [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color at `index`, wrapping around the end of the
    /// palette.
    pub fn get(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }

    /// Returns an iterator over the palette's colors.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_COLORS
                .iter()
                .map(|color| Color(Arc::from(*color)))
                .collect(),
        }
    }
}

/// Hands out palette colors round-robin, one per newly created lane.
///
/// Colors are keyed to lane creation order, not to commit identity.
#[derive(Clone, Debug)]
pub(crate) struct ColorRotation {
    palette: Palette,
    next: usize,
}

impl ColorRotation {
    pub(crate) fn new(palette: Palette) -> Self {
        ColorRotation { palette, next: 0 }
    }

    pub(crate) fn next_color(&mut self) -> Color {
        let color = self.palette.get(self.next).clone();
        self.next = (self.next + 1) % self.palette.len();
        color
    }

    pub(crate) fn palette(&self) -> &Palette {
        &self.palette
    }
}
