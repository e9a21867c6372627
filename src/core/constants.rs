/// Side length of a major (first-letter) square in meters
pub const MAJOR_SQUARE_SIZE: u32 = 500_000;

/// Side length of a minor (second-letter) square in meters
pub const MINOR_SQUARE_SIZE: u32 = 100_000;

/// Numeric-field width of a full-resolution (1 m) reference
pub const REF_DIGITS: usize = 5;

/// Supported encode precisions in meters, coarsest first
pub const PRECISIONS: [u32; 6] = [100_000, 10_000, 1_000, 100, 10, 1];

/// Digit width of each numeric field for the given precision.
///
/// Returns `None` for anything outside [`PRECISIONS`].
pub const fn width_for_precision(precision: u32) -> Option<usize> {
    match precision {
        100_000 => Some(0),
        10_000 => Some(1),
        1_000 => Some(2),
        100 => Some(3),
        10 => Some(4),
        1 => Some(5),
        _ => None,
    }
}

/// Side length in meters of the square a numeric field of `width` digits denotes.
///
/// Width 0 (letters only) denotes a whole 100 km minor square.
pub const fn precision_for_width(width: usize) -> Option<u32> {
    match width {
        0 => Some(100_000),
        1 => Some(10_000),
        2 => Some(1_000),
        3 => Some(100),
        4 => Some(10),
        5 => Some(1),
        _ => None,
    }
}
