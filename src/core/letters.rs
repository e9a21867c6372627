use crate::util::error::GridRefError;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Major (500 km) squares as (col, row, letter), where col indexes easting
/// west to east and row indexes northing south to north.
///
/// Col 1 has no row-2 entry: the scheme defines no letter there, so encode
/// must fail for coordinates landing in that cell.
pub(crate) const MAJOR_LETTERS: [(u8, u8, char); 5] = [
    (0, 0, 'S'),
    (0, 1, 'N'),
    (0, 2, 'H'),
    (1, 0, 'T'),
    (1, 1, 'O'),
];

/// Minor (100 km) squares as (col, row, letter): the standard OSGB 5x5
/// square, which skips 'I'.
pub(crate) const MINOR_LETTERS: [(u8, u8, char); 25] = [
    (0, 0, 'V'),
    (0, 1, 'Q'),
    (0, 2, 'L'),
    (0, 3, 'F'),
    (0, 4, 'A'),
    (1, 0, 'W'),
    (1, 1, 'R'),
    (1, 2, 'M'),
    (1, 3, 'G'),
    (1, 4, 'B'),
    (2, 0, 'X'),
    (2, 1, 'S'),
    (2, 2, 'N'),
    (2, 3, 'H'),
    (2, 4, 'C'),
    (3, 0, 'Y'),
    (3, 1, 'T'),
    (3, 2, 'O'),
    (3, 3, 'J'),
    (3, 4, 'D'),
    (4, 0, 'Z'),
    (4, 1, 'U'),
    (4, 2, 'P'),
    (4, 3, 'K'),
    (4, 4, 'E'),
];

static TABLES: LazyLock<LetterTables> =
    LazyLock::new(|| LetterTables::build().expect("letter tables must not repeat a letter"));

/// Inverse letter tables, built once and shared read-only across callers.
#[derive(Debug)]
pub struct LetterTables {
    major: HashMap<char, (u8, u8)>,
    minor: HashMap<char, (u8, u8)>,
}

impl LetterTables {
    fn build() -> Result<Self, GridRefError> {
        Ok(Self {
            major: invert(&MAJOR_LETTERS)?,
            minor: invert(&MINOR_LETTERS)?,
        })
    }

    /// Returns the shared tables; the first call builds the inversions.
    pub fn get() -> &'static LetterTables {
        &TABLES
    }

    /// Cell (col, row) of a major letter, if defined.
    pub fn major_cell(&self, letter: char) -> Option<(u8, u8)> {
        self.major.get(&letter).copied()
    }

    /// Cell (col, row) of a minor letter, if defined.
    pub fn minor_cell(&self, letter: char) -> Option<(u8, u8)> {
        self.minor.get(&letter).copied()
    }
}

/// Letter of the major cell at (col, row), if defined.
pub fn major_letter(col: u32, row: u32) -> Option<char> {
    lookup_letter(&MAJOR_LETTERS, col, row)
}

/// Letter of the minor cell at (col, row), if defined.
pub fn minor_letter(col: u32, row: u32) -> Option<char> {
    lookup_letter(&MINOR_LETTERS, col, row)
}

// Indices stay u32 so no narrowing cast can wrap ahead of the range check.
fn lookup_letter(entries: &[(u8, u8, char)], col: u32, row: u32) -> Option<char> {
    entries
        .iter()
        .find(|(c, r, _)| u32::from(*c) == col && u32::from(*r) == row)
        .map(|(_, _, letter)| *letter)
}

/// Builds letter -> (col, row) from a forward table in one pass.
///
/// A letter appearing twice is a construction error, not a silent overwrite.
pub(crate) fn invert(
    entries: &[(u8, u8, char)],
) -> Result<HashMap<char, (u8, u8)>, GridRefError> {
    let mut inverse = HashMap::with_capacity(entries.len());
    for &(col, row, letter) in entries {
        if inverse.insert(letter, (col, row)).is_some() {
            return Err(GridRefError::DuplicateLetter(letter));
        }
    }
    Ok(inverse)
}
