//! Fleet configuration: ship classes, the standard fleet, and the size
//! census accumulated while scanning a board.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A ship class: name, size in cells, and how many of it the fleet requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
    count: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, size: usize, count: usize) -> Self {
        Self { name, size, count }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cells one ship of this class occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships of this class the fleet requires.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Default board edge length.
pub const BOARD_SIZE: usize = 10;
pub const NUM_CLASSES: usize = 4;
pub const CLASSES: [ShipClass; NUM_CLASSES] = [
    ShipClass::new("Battleship", 4, 1),
    ShipClass::new("Cruiser", 3, 2),
    ShipClass::new("Destroyer", 2, 3),
    ShipClass::new("Submarine", 1, 4),
];

/// Total number of cells the standard fleet occupies.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// The set of ship classes a complete board must carry, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    classes: &'static [ShipClass],
}

impl Fleet {
    /// The classic fleet: one battleship, two cruisers, three destroyers,
    /// four submarines.
    pub const fn standard() -> Self {
        Fleet { classes: &CLASSES }
    }

    /// A fleet over a custom class table.
    pub const fn new(classes: &'static [ShipClass]) -> Self {
        Fleet { classes }
    }

    /// The configured classes, in order.
    pub fn classes(&self) -> &[ShipClass] {
        self.classes
    }

    /// Size of the longest ship in the fleet.
    pub fn max_size(&self) -> usize {
        self.classes.iter().map(|class| class.size).max().unwrap_or(0)
    }

    /// Cells a complete fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.classes.iter().map(|class| class.size * class.count).sum()
    }
}

/// Census of discovered ship sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeHistogram {
    counts: Vec<usize>,
}

impl SizeHistogram {
    /// An empty census.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one ship of the given size.
    pub fn record(&mut self, size: usize) {
        if self.counts.len() <= size {
            self.counts.resize(size + 1, 0);
        }
        self.counts[size] += 1;
    }

    /// Ships counted for a size; sizes never recorded read as zero.
    pub fn count(&self, size: usize) -> usize {
        self.counts.get(size).copied().unwrap_or(0)
    }
}
