// Reusable library API, visible to both CLI and WASM builds
pub mod alphabet;
pub mod direction;
pub mod errors;
pub mod grid;
pub mod log;
pub mod matcher;
pub mod placement;
pub mod selection;
pub mod session;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use direction::{Direction, EnabledDirections, DIRECTIONS};
pub use errors::WordSearchError;
pub use grid::{Cell, Grid};
pub use placement::{generate, generate_with_seed, PlacedWord, Puzzle};
pub use selection::line_cells;
pub use session::Session;
