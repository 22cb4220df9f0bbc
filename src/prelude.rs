//! Commonly used types and utilities for ease of import.

pub use crate::{check_board, random_board, survey, Fleet, Grid, SurveyReport, Verdict, Violation};

#[cfg(feature = "std")]
pub use crate::init_logging;
