//! Board survey: two-pass ship detection and fleet comparison.
//!
//! The scanner walks each row of the board looking for maximal contiguous
//! runs of occupied cells, then repeats the walk on the transposed board so
//! vertical ships read as horizontal runs. One routine serves both passes.

use core::fmt;

use log::debug;

use crate::common::GridError;
use crate::fleet::{Fleet, SizeHistogram};
use crate::grid::Grid;

/// Why a board failed the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    /// Two distinct ships touch at the given cell.
    Contact { row: usize, col: usize },
    /// A contiguous run ending at the given cell exceeds the longest
    /// allowed ship.
    Oversize {
        row: usize,
        col: usize,
        limit: usize,
    },
    /// The number of discovered ships of `size` differs from the fleet.
    FleetMismatch {
        size: usize,
        required: usize,
        found: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Contact { row, col } => {
                write!(f, "ships touching near row {}, column {}", row, col)
            }
            Violation::Oversize { row, col, limit } => {
                write!(
                    f,
                    "ship longer than {} cells at row {}, column {}",
                    limit, row, col
                )
            }
            Violation::FleetMismatch {
                size,
                required,
                found,
            } => {
                write!(
                    f,
                    "found {} ships of size {}, fleet requires {}",
                    found, size, required
                )
            }
        }
    }
}

/// Outcome of a board survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Valid,
    Invalid(Violation),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Survey result: the verdict plus the size census accumulated while
/// scanning. The census is partial when the scan stopped at a contact or
/// oversize violation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SurveyReport {
    verdict: Verdict,
    census: SizeHistogram,
}

impl SurveyReport {
    /// `true` when the board carries exactly the required fleet with no
    /// contact or oversize violations.
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    /// The survey verdict.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// The accumulated size census.
    pub fn census(&self) -> &SizeHistogram {
        &self.census
    }
}

/// Which orientation of the board a pass is scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Rows,
    Columns,
}

impl Pass {
    /// Map pass-local coordinates back to the board as given.
    fn locate(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Pass::Rows => (row, col),
            Pass::Columns => (col, row),
        }
    }
}

/// Survey a grid against a fleet.
///
/// Runs the row pass on the grid as given, then on its transpose, and
/// finally compares the census against the fleet. Violation coordinates
/// always refer to the board as given.
pub fn survey(grid: &Grid, fleet: &Fleet) -> SurveyReport {
    let mut census = SizeHistogram::new();
    let limit = fleet.max_size();
    if let Err(violation) = scan_pass(grid, Pass::Rows, limit, &mut census) {
        return SurveyReport {
            verdict: Verdict::Invalid(violation),
            census,
        };
    }
    let flipped = grid.transposed();
    if let Err(violation) = scan_pass(&flipped, Pass::Columns, limit, &mut census) {
        return SurveyReport {
            verdict: Verdict::Invalid(violation),
            census,
        };
    }
    SurveyReport {
        verdict: tally(fleet, &census),
        census,
    }
}

/// Parse marker text and survey it against the standard fleet.
pub fn check_board(input: &str) -> Result<SurveyReport, GridError> {
    let grid = Grid::parse(input)?;
    Ok(survey(&grid, &Fleet::standard()))
}

fn tally(fleet: &Fleet, census: &SizeHistogram) -> Verdict {
    for class in fleet.classes() {
        let found = census.count(class.size());
        if found != class.count() {
            return Verdict::Invalid(Violation::FleetMismatch {
                size: class.size(),
                required: class.count(),
                found,
            });
        }
    }
    Verdict::Valid
}

/// Detect every maximal horizontal run of occupied cells in one
/// orientation, rejecting on the first contact or oversize violation.
fn scan_pass(
    grid: &Grid,
    pass: Pass,
    limit: usize,
    census: &mut SizeHistogram,
) -> Result<(), Violation> {
    for row in 0..grid.rows() {
        // length of the contiguous occupied run ending at the current cell
        let mut run = 0usize;
        for col in 0..grid.cols() {
            let occupied = grid.is_occupied(row, col);
            if occupied {
                run += 1;
                if touches_other_ship(grid, row, col) {
                    let (row, col) = pass.locate(row, col);
                    return Err(Violation::Contact { row, col });
                }
                if run > limit {
                    let (row, col) = pass.locate(row, col);
                    return Err(Violation::Oversize { row, col, limit });
                }
                // part of a column-wise ship: the other pass reads it as a
                // horizontal run
                if in_column_run(grid, row, col) {
                    run = 0;
                    continue;
                }
            }
            if (!occupied || col + 1 == grid.cols()) && run > 0 {
                // unit ships were already recorded by the row pass
                if run > 1 || pass == Pass::Rows {
                    debug!("{:?} pass: ship of size {} ending near ({}, {})", pass, run, row, col);
                    census.record(run);
                }
                run = 0;
            }
        }
    }
    Ok(())
}

fn occupied_at(grid: &Grid, row: Option<usize>, col: Option<usize>) -> bool {
    match (row, col) {
        (Some(row), Some(col)) => grid.is_occupied(row, col),
        _ => false,
    }
}

/// Diagonal contact with an occupied cell that necessarily belongs to a
/// different ship. Orthogonal neighbors are part of the same run or are
/// handled by the column-run merge.
fn touches_other_ship(grid: &Grid, row: usize, col: usize) -> bool {
    let above = row.checked_sub(1);
    let left = col.checked_sub(1);
    occupied_at(grid, above, left)
        || occupied_at(grid, above, Some(col + 1))
        || occupied_at(grid, Some(row + 1), left)
        || occupied_at(grid, Some(row + 1), Some(col + 1))
}

/// Occupied neighbor directly above or below in the current orientation.
fn in_column_run(grid: &Grid, row: usize, col: usize) -> bool {
    occupied_at(grid, row.checked_sub(1), Some(col))
        || occupied_at(grid, Some(row + 1), Some(col))
}
