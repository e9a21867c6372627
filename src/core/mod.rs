pub mod constants;
pub mod geometry;
pub mod grid;
pub mod letters;

pub use constants::{
    MAJOR_SQUARE_SIZE, MINOR_SQUARE_SIZE, PRECISIONS, REF_DIGITS, precision_for_width,
    width_for_precision,
};
pub use geometry::{square_polygon, square_rect};
pub use grid::{osgb_to_xy, xy_to_osgb};
pub use letters::{LetterTables, major_letter, minor_letter};
