//! Player colors for the cyclic (Ludo) board.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// The four seat colors, in assignment order.
///
/// Players are given colors by their position in the player list:
/// the first player is yellow, the second red, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Red,
    Blue,
    Green,
}

impl Color {
    /// All colors in assignment order.
    pub const ALL: [Color; 4] = [Color::Yellow, Color::Red, Color::Blue, Color::Green];

    /// Color assigned to the seat at `index`, if there is one.
    #[must_use]
    pub fn for_seat(index: usize) -> Option<Color> {
        Self::ALL.get(index).copied()
    }

    const fn slot(self) -> usize {
        match self {
            Color::Yellow => 0,
            Color::Red => 1,
            Color::Blue => 2,
            Color::Green => 3,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
        };
        f.write_str(name)
    }
}

/// One value per color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 4],
}

impl<T> ColorMap<T> {
    /// Build from a factory called once per color, in assignment order.
    pub fn new(mut factory: impl FnMut(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(|color| factory(color)),
        }
    }

    /// Iterate over (Color, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.slot()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.slot()]
    }
}
