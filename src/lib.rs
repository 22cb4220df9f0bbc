#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod fleet;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod scan;

pub use common::*;
pub use fleet::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use scan::*;
