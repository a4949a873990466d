//! Error types for the plotwise core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when wiring or mutating a [`crate::City`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CityError {
    /// An adjacency entry or hall link referenced a plot outside the city.
    #[error("plot index {index} is out of range for a city of {plots} plots")]
    PlotOutOfRange {
        /// The offending plot index.
        index: usize,
        /// Number of plots the city was declared with.
        plots: usize,
    },
    /// A snapshot's length did not match the city's plot count.
    #[error("snapshot has {got} entries but the city has {expected} plots")]
    SnapshotLength {
        /// Length of the snapshot supplied by the caller.
        got: usize,
        /// Plot count the snapshot must match.
        expected: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`CityError`] variants.
    enum CityErrorCode for CityError {
        /// An adjacency entry or hall link referenced a plot outside the city.
        PlotOutOfRange => PlotOutOfRange { .. } => "CITY_PLOT_OUT_OF_RANGE",
        /// A snapshot's length did not match the city's plot count.
        SnapshotLength => SnapshotLength { .. } => "CITY_SNAPSHOT_LENGTH_MISMATCH",
    }
}

/// Error produced while exhaustively surveying a city's assignment space.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SurveyError {
    /// The city has too many plots for exact 64-bit index arithmetic.
    #[error("cannot survey {plots} plots; the exhaustive index space is limited to {limit} plots")]
    SpaceTooLarge {
        /// Plot count of the offending city.
        plots: usize,
        /// Largest surveyable plot count.
        limit: usize,
    },
    /// The caller's [`crate::CancelFlag`] was raised mid-survey.
    #[error("survey was cancelled before the assignment space was exhausted")]
    Cancelled,
}

define_error_codes! {
    /// Stable codes describing [`SurveyError`] variants.
    enum SurveyErrorCode for SurveyError {
        /// The city has too many plots for exact 64-bit index arithmetic.
        SpaceTooLarge => SpaceTooLarge { .. } => "SURVEY_SPACE_TOO_LARGE",
        /// The caller's cancel flag was raised mid-survey.
        Cancelled => Cancelled => "SURVEY_CANCELLED",
    }
}

/// Error produced when parsing a rendered building symbol.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SymbolError {
    /// The character does not name an assignable building kind.
    #[error("`{symbol}` does not name a building kind")]
    UnknownSymbol {
        /// The character that failed to parse.
        symbol: char,
    },
}

define_error_codes! {
    /// Stable codes describing [`SymbolError`] variants.
    enum SymbolErrorCode for SymbolError {
        /// The character does not name an assignable building kind.
        UnknownSymbol => UnknownSymbol { .. } => "SYMBOL_UNKNOWN",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, CityError>;
