//! Plotwise core library.
//!
//! Exhaustive-search engine for small city-building layouts: a graph of
//! plots wired around a city hall, a legality rule over the current
//! assignment, a deterministic happiness/income score, and a survey loop
//! that visits every assignment and retains all maximal-score layouts.
//!
//! The crate owns no presentation and no I/O. Callers construct a
//! [`City`] through [`CityBuilder`], run [`survey`] (or
//! [`survey_with_cancel`] for abortable sweeps), and render the returned
//! [`SurveyReport`] however they like.

mod builder;
mod building;
mod city;
mod counts;
mod error;
mod legality;
mod stats;
mod survey;

pub use crate::{
    builder::CityBuilder,
    building::{BuildingKind, HALL_SYMBOL, Neighbour},
    city::{City, Snapshot},
    counts::BuildingCounts,
    error::{
        CityError, CityErrorCode, Result, SurveyError, SurveyErrorCode, SymbolError,
        SymbolErrorCode,
    },
    stats::CityStats,
    survey::{CancelFlag, Incumbent, MAX_SURVEY_PLOTS, SurveyReport, survey, survey_with_cancel},
};
