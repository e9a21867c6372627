pub mod coord;
pub mod error;
pub mod reference;

pub use coord::Coordinate;
pub use error::GridRefError;
pub use reference::format_grid_reference;
