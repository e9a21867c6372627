pub mod grid_square;
pub mod square_set;

pub use grid_square::GridSquare;
pub use square_set::SquareSet;
