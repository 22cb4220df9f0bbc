//! Random legal fleet placement, for generating boards that satisfy the
//! no-touch rule by construction.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::common::PlaceError;
use crate::fleet::Fleet;
use crate::grid::Grid;

const MAX_ATTEMPTS: usize = 100;

/// Place every ship of `fleet` on an empty `size`×`size` board at random.
///
/// Each placed ship blocks its own cells and their eight neighbors, so no
/// two ships end up adjacent, not even diagonally. Ships are placed in
/// fleet order; placing the largest classes first keeps late placements
/// from running out of room.
pub fn random_board<R: Rng>(rng: &mut R, size: usize, fleet: &Fleet) -> Result<Grid, PlaceError> {
    let need = fleet.max_size();
    if size < need {
        return Err(PlaceError::BoardTooSmall { size, need });
    }
    let mut cells = Vec::new();
    cells.resize(size * size, false);
    let mut blocked = Vec::new();
    blocked.resize(size * size, false);
    for class in fleet.classes() {
        for _ in 0..class.count() {
            place_one(rng, size, class.size(), &mut cells, &mut blocked)
                .ok_or(PlaceError::NoRoom { ship: class.name() })?;
            debug!("placed {} ({} cells)", class.name(), class.size());
        }
    }
    Ok(Grid::from_cells(size, size, cells))
}

/// Try random positions for a single ship of `len` cells until one fits.
fn place_one<R: Rng>(
    rng: &mut R,
    size: usize,
    len: usize,
    cells: &mut [bool],
    blocked: &mut [bool],
) -> Option<()> {
    for _ in 0..MAX_ATTEMPTS {
        let horizontal: bool = rng.random();
        let max_row = if horizontal { size - 1 } else { size - len };
        let max_col = if horizontal { size - len } else { size - 1 };
        let row = rng.random_range(0..=max_row);
        let col = rng.random_range(0..=max_col);
        let spots = (0..len).map(|i| {
            if horizontal {
                (row, col + i)
            } else {
                (row + i, col)
            }
        });
        if spots.clone().any(|(r, c)| blocked[r * size + c]) {
            continue;
        }
        for (r, c) in spots {
            cells[r * size + c] = true;
            // block the cell and its eight neighbors
            for br in r.saturating_sub(1)..=(r + 1).min(size - 1) {
                for bc in c.saturating_sub(1)..=(c + 1).min(size - 1) {
                    blocked[br * size + bc] = true;
                }
            }
        }
        return Some(());
    }
    None
}
