//! Building vocabulary shared across the city graph.
//!
//! [`BuildingKind`] is the closed set of values a plot can hold during a
//! survey. The city hall is deliberately not a kind: neighbour lists carry
//! [`Neighbour::Hall`] instead, so the hall can never leak into the
//! enumerated assignment space or into per-kind tallies.

use crate::error::SymbolError;

/// The four kinds a plot can be assigned.
///
/// The digit mapping (0 = Empty, 1 = House, 2 = Entertainment,
/// 3 = Factory) and the symbol mapping are stable; external presentations
/// may rely on both.
///
/// # Examples
/// ```
/// use plotwise_core::BuildingKind;
///
/// assert_eq!(BuildingKind::from_digit(2), Some(BuildingKind::Entertainment));
/// assert_eq!(BuildingKind::Factory.symbol(), 'F');
/// assert_eq!(BuildingKind::from_symbol('_')?, BuildingKind::Empty);
/// # Ok::<(), plotwise_core::SymbolError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum BuildingKind {
    /// No building assigned.
    #[default]
    Empty,
    /// Residential building.
    House,
    /// Entertainment venue.
    Entertainment,
    /// Income-producing factory.
    Factory,
}

impl BuildingKind {
    /// Every assignable kind, in digit order.
    pub const ASSIGNABLE: [Self; 4] = [Self::Empty, Self::House, Self::Entertainment, Self::Factory];

    /// Returns the stable digit used when assignments are decoded from a
    /// base-4 index.
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::House => 1,
            Self::Entertainment => 2,
            Self::Factory => 3,
        }
    }

    /// Looks up a kind by its stable digit.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Empty),
            1 => Some(Self::House),
            2 => Some(Self::Entertainment),
            3 => Some(Self::Factory),
            _ => None,
        }
    }

    /// Returns the one-character symbol used in rendered layouts.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '_',
            Self::House => 'H',
            Self::Entertainment => 'E',
            Self::Factory => 'F',
        }
    }

    /// Parses a rendered symbol back into a kind.
    ///
    /// # Errors
    /// Returns [`SymbolError::UnknownSymbol`] for characters outside the
    /// mapping, including [`HALL_SYMBOL`] (the hall is not assignable).
    pub fn from_symbol(symbol: char) -> Result<Self, SymbolError> {
        match symbol {
            '_' => Ok(Self::Empty),
            'H' => Ok(Self::House),
            'E' => Ok(Self::Entertainment),
            'F' => Ok(Self::Factory),
            other => Err(SymbolError::UnknownSymbol { symbol: other }),
        }
    }
}

/// Symbol rendered for the city hall.
///
/// The hall is never part of an assignment; the constant exists so
/// external renderings of the full graph stay consistent with
/// [`BuildingKind::symbol`].
pub const HALL_SYMBOL: char = 'C';

/// One entry in a plot's neighbour list.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Neighbour {
    /// The city hall. Always present in the city, never empty.
    Hall,
    /// Another plot, by index.
    Plot(usize),
}
