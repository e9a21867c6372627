//! # gridref-rs
//!
//! There are currently three main entry points.
//!
//! ### 1. `osgb_to_xy` / `xy_to_osgb` - Reference Codec
//!
//! ```
//! use gridref_rs::{osgb_to_xy, xy_to_osgb};
//!
//! # fn main() -> Result<(), gridref_rs::GridRefError> {
//! let (easting, northing) = osgb_to_xy("SK 32 32")?;
//! assert_eq!((easting, northing), (432_000, 332_000));
//!
//! let reference = xy_to_osgb(432_574, 332_567, 10)?;
//! assert_eq!(reference, "SK 3257 3256");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GridSquare` - Single Tile Placement
//!
//! ```
//! use gridref_rs::GridSquare;
//!
//! # fn main() -> Result<(), gridref_rs::GridRefError> {
//! let square = GridSquare::from_token("sk3232")?;
//! println!("{}", square.reference);
//! let polygon = square.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `SquareSet` - Batches of Tiles
//!
//! ```
//! use gridref_rs::SquareSet;
//! use geo_types::point;
//!
//! let (set, rejects) = SquareSet::from_tokens_lossy(["sk3232", "hu396753", "readme"]);
//! assert_eq!(rejects.len(), 1);
//!
//! let pt = point! { x: 432_500.0, y: 332_500.0 };
//! if let Some(square) = set.square_at(&pt) {
//!     println!("{}", square.reference);
//! }
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{GridSquare, SquareSet};
pub use core::{
    MAJOR_SQUARE_SIZE, MINOR_SQUARE_SIZE, PRECISIONS, REF_DIGITS, major_letter, minor_letter,
    osgb_to_xy, precision_for_width, square_polygon, square_rect, width_for_precision, xy_to_osgb,
};
pub use util::{Coordinate, GridRefError, format_grid_reference};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GridRefError> {
        // A directory scan yields tile file stems; place one of them
        let square = GridSquare::from_token("SD 262 839")?;

        assert_eq!(square.reference, "SD 262 839");
        assert_eq!(square.sw_corner(), (326_200, 483_900));
        assert_eq!(square.extent, 100);

        let [sw, se, ne, nw] = square.corners();
        assert_eq!(sw, (326_200, 483_900));
        assert_eq!(se, (326_300, 483_900));
        assert_eq!(ne, (326_300, 484_000));
        assert_eq!(nw, (326_200, 484_000));

        let polygon = square.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_codec_round_trip() -> Result<(), GridRefError> {
        let reference = xy_to_osgb(236_336, 682_945, 1)?;
        assert_eq!(reference, "NS 36336 82945");

        let (easting, northing) = osgb_to_xy(&reference)?;
        assert_eq!((easting, northing), (236_336, 682_945));
        Ok(())
    }

    #[test]
    fn test_batch_lossy_workflow() {
        let stems = ["sk3232", "NS 36336 82945", "hu396753", "notes", "zz11"];
        let (set, rejects) = SquareSet::from_tokens_lossy(stems);

        assert_eq!(set.len(), 3);
        assert_eq!(rejects.len(), 2);
        assert_eq!(rejects[0].0, "notes");
        assert_eq!(rejects[1].0, "zz11");
    }

    #[test]
    fn test_using_geo_types_macros() -> Result<(), GridRefError> {
        let set = SquareSet::from_tokens(["sk3232", "sk3332"])?;

        let pt = point! { x: 433_500.0, y: 332_500.0 };
        let square = set.square_at(&pt);
        assert_eq!(square.map(|s| s.reference.as_str()), Some("SK 33 32"));

        let bounds = set.bounds();
        assert!(bounds.is_some());
        if let Some(rect) = bounds {
            assert_eq!(rect.min().x, 432_000.0);
            assert_eq!(rect.max().x, 434_000.0);
        }
        Ok(())
    }

    #[test]
    fn test_normalizer_feeds_codec() -> Result<(), GridRefError> {
        let normalized = format_grid_reference("NS3633682945");
        assert_eq!(normalized.as_deref(), Some("NS 36336 82945"));

        if let Some(reference) = normalized {
            let (easting, northing) = osgb_to_xy(&reference)?;
            assert_eq!((easting, northing), (236_336, 682_945));
        }
        Ok(())
    }
}
