use crate::core::constants::{
    MAJOR_SQUARE_SIZE, MINOR_SQUARE_SIZE, REF_DIGITS, width_for_precision,
};
use crate::core::letters::{LetterTables, major_letter, minor_letter};
use crate::util::error::GridRefError;

/// Parses a normalized, upper-cased grid reference into absolute coordinates.
///
/// Expects exactly three whitespace-separated fields: a two-letter tile and
/// two equal-length digit strings of 1 to 5 digits. Returns the easting and
/// northing, in meters, of the south-west corner of the referenced square.
/// Truncated digits are left-justified into the full 100 km offset, so
/// `"SK 32 32"` resolves to the corner of the whole kilometre square.
///
/// # Example
/// ```
/// use gridref_rs::osgb_to_xy;
///
/// # fn main() -> Result<(), gridref_rs::GridRefError> {
/// assert_eq!(osgb_to_xy("SK 32 32")?, (432_000, 332_000));
/// assert_eq!(osgb_to_xy("SK 32574 32567")?, (432_574, 332_567));
/// # Ok(())
/// # }
/// ```
pub fn osgb_to_xy(reference: &str) -> Result<(u32, u32), GridRefError> {
    let fields: Vec<&str> = reference.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(GridRefError::InvalidGridReference(format!(
            "expected two letters and two numeric fields, got '{}'",
            reference
        )));
    }
    let (tile, ref_x, ref_y) = (fields[0], fields[1], fields[2]);

    let mut tile_chars = tile.chars();
    let (major, minor) = match (tile_chars.next(), tile_chars.next(), tile_chars.next()) {
        (Some(major), Some(minor), None) => (major, minor),
        _ => {
            return Err(GridRefError::InvalidGridReference(format!(
                "tile '{}' is not exactly two letters",
                tile
            )));
        }
    };

    let tables = LetterTables::get();
    let (col_maj, row_maj) = tables.major_cell(major).ok_or_else(|| {
        GridRefError::InvalidGridReference(format!("unknown major letter '{}'", major))
    })?;
    let (col_min, row_min) = tables.minor_cell(minor).ok_or_else(|| {
        GridRefError::InvalidGridReference(format!("unknown minor letter '{}'", minor))
    })?;

    let (width, x_digits) = parse_offset(ref_x)?;
    let (width_y, y_digits) = parse_offset(ref_y)?;
    if width != width_y {
        return Err(GridRefError::InvalidGridReference(format!(
            "numeric fields '{}' and '{}' differ in length",
            ref_x, ref_y
        )));
    }

    let multiplier = 10u32.pow((REF_DIGITS - width) as u32);
    let easting = u32::from(col_maj) * MAJOR_SQUARE_SIZE
        + u32::from(col_min) * MINOR_SQUARE_SIZE
        + x_digits * multiplier;
    let northing = u32::from(row_maj) * MAJOR_SQUARE_SIZE
        + u32::from(row_min) * MINOR_SQUARE_SIZE
        + y_digits * multiplier;

    Ok((easting, northing))
}

/// Renders absolute coordinates as a grid reference at the given precision.
///
/// `precision` is the side length, in meters, of the square to report and
/// must be one of [`crate::PRECISIONS`]. The sub-precision remainder is
/// truncated, not rounded. At precision 100 000 the numeric fields are
/// omitted and the output is the two letters plus a single trailing space.
///
/// # Example
/// ```
/// use gridref_rs::xy_to_osgb;
///
/// # fn main() -> Result<(), gridref_rs::GridRefError> {
/// assert_eq!(xy_to_osgb(432_574, 332_567, 1_000)?, "SK 32 32");
/// assert_eq!(xy_to_osgb(236_336, 682_945, 1)?, "NS 36336 82945");
/// # Ok(())
/// # }
/// ```
pub fn xy_to_osgb(easting: u32, northing: u32, precision: u32) -> Result<String, GridRefError> {
    let width =
        width_for_precision(precision).ok_or(GridRefError::UnsupportedPrecision(precision))?;

    let major = major_letter(easting / MAJOR_SQUARE_SIZE, northing / MAJOR_SQUARE_SIZE)
        .ok_or_else(|| out_of_range(easting, northing))?;

    let easting_in_major = easting % MAJOR_SQUARE_SIZE;
    let northing_in_major = northing % MAJOR_SQUARE_SIZE;
    let minor = minor_letter(
        easting_in_major / MINOR_SQUARE_SIZE,
        northing_in_major / MINOR_SQUARE_SIZE,
    )
    .ok_or_else(|| out_of_range(easting, northing))?;

    if width == 0 {
        return Ok(format!("{}{} ", major, minor));
    }

    let x = (easting_in_major % MINOR_SQUARE_SIZE) / precision;
    let y = (northing_in_major % MINOR_SQUARE_SIZE) / precision;

    Ok(format!(
        "{}{} {:0width$} {:0width$}",
        major,
        minor,
        x,
        y,
        width = width
    ))
}

fn parse_offset(field: &str) -> Result<(usize, u32), GridRefError> {
    if field.is_empty() || field.len() > REF_DIGITS || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GridRefError::InvalidGridReference(format!(
            "numeric field '{}' must be 1 to 5 digits",
            field
        )));
    }
    let value = field.parse::<u32>().map_err(|_| {
        GridRefError::InvalidGridReference(format!("numeric field '{}' is not a number", field))
    })?;
    Ok((field.len(), value))
}

fn out_of_range(easting: u32, northing: u32) -> GridRefError {
    GridRefError::InvalidGridReference(format!(
        "({}, {}) is out of range of the lettered grid",
        easting, northing
    ))
}
