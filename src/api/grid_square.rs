use crate::core::constants::precision_for_width;
use crate::core::geometry::{square_polygon, square_rect};
use crate::core::grid::{osgb_to_xy, xy_to_osgb};
use crate::util::coord::Coordinate;
use crate::util::error::GridRefError;
use crate::util::reference::format_grid_reference;
use geo_types::{Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A single referenced square of the British National Grid.
///
/// Each `GridSquare` pairs a canonical grid-reference text with the square it
/// denotes: the south-west corner in meters and the side length (extent)
/// implied by the reference's numeric width. A raster collaborator anchors
/// the four corners of a scanned map tile on exactly these values.
///
/// # Example
///
/// ```
/// use gridref_rs::GridSquare;
///
/// # fn main() -> Result<(), gridref_rs::GridRefError> {
/// // A map-tile file name stem, as found by a directory scan
/// let square = GridSquare::from_token("sk3232")?;
/// assert_eq!(square.reference, "SK 32 32");
/// assert_eq!(square.sw_corner(), (432_000, 332_000));
/// assert_eq!(square.extent, 1_000);
///
/// // Convert to a polygon for GIS operations
/// let ring = square.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSquare {
    /// Canonical spaced reference text, e.g. "SK 32 32"
    pub reference: String,
    /// Easting of the south-west corner in meters
    pub easting: u32,
    /// Northing of the south-west corner in meters
    pub northing: u32,
    /// Side length of the square in meters
    pub extent: u32,
}

impl GridSquare {
    /// Create a GridSquare from an already spaced, upper-cased reference
    ///
    /// # Example
    /// ```
    /// use gridref_rs::GridSquare;
    ///
    /// # fn main() -> Result<(), gridref_rs::GridRefError> {
    /// let square = GridSquare::decode("NS 36336 82945")?;
    /// assert_eq!(square.sw_corner(), (236_336, 682_945));
    /// assert_eq!(square.extent, 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn decode(reference: &str) -> Result<Self, GridRefError> {
        let (easting, northing) = osgb_to_xy(reference)?;

        // osgb_to_xy guarantees three fields with an all-digit last field
        let fields: Vec<&str> = reference.split_whitespace().collect();
        let width = fields[2].len();
        let extent = precision_for_width(width).ok_or_else(|| {
            GridRefError::InvalidGridReference(format!(
                "numeric field '{}' has no precision",
                fields[2]
            ))
        })?;

        Ok(Self {
            reference: fields.join(" "),
            easting,
            northing,
            extent,
        })
    }

    /// Create a GridSquare from a raw filename-derived token
    ///
    /// The token is normalized (whitespace stripped, fields re-spaced),
    /// upper-cased and decoded, the whole per-file pipeline of a tile scan.
    ///
    /// # Example
    /// ```
    /// use gridref_rs::GridSquare;
    ///
    /// # fn main() -> Result<(), gridref_rs::GridRefError> {
    /// let square = GridSquare::from_token("hu396753")?;
    /// assert_eq!(square.reference, "HU 396 753");
    /// assert_eq!(square.extent, 100);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_token(raw: &str) -> Result<Self, GridRefError> {
        let normalized = format_grid_reference(raw).ok_or_else(|| {
            GridRefError::InvalidGridReference(format!(
                "token '{}' has no valid reference length",
                raw
            ))
        })?;
        Self::decode(&normalized.to_uppercase())
    }

    /// Create a GridSquare from absolute coordinates at the given precision
    ///
    /// The stored corner is truncated to the precision grid, so decoding the
    /// stored reference lands on the same corner. The one exception is
    /// precision 100 000: its letters-only reference carries no numeric
    /// fields and does not itself decode.
    ///
    /// # Example
    /// ```
    /// use gridref_rs::GridSquare;
    ///
    /// # fn main() -> Result<(), gridref_rs::GridRefError> {
    /// let square = GridSquare::from_xy(432_574, 332_567, 1_000)?;
    /// assert_eq!(square.reference, "SK 32 32");
    /// assert_eq!(square.sw_corner(), (432_000, 332_000));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_xy(easting: u32, northing: u32, precision: u32) -> Result<Self, GridRefError> {
        let reference = xy_to_osgb(easting, northing, precision)?;

        Ok(Self {
            reference,
            easting: easting - easting % precision,
            northing: northing - northing % precision,
            extent: precision,
        })
    }

    /// Returns the south-west corner (easting, northing) in meters.
    pub fn sw_corner(&self) -> (u32, u32) {
        (self.easting, self.northing)
    }

    /// Returns the south-east corner (easting, northing) in meters.
    pub fn se_corner(&self) -> (u32, u32) {
        (self.easting + self.extent, self.northing)
    }

    /// Returns the north-east corner (easting, northing) in meters.
    pub fn ne_corner(&self) -> (u32, u32) {
        (self.easting + self.extent, self.northing + self.extent)
    }

    /// Returns the north-west corner (easting, northing) in meters.
    pub fn nw_corner(&self) -> (u32, u32) {
        (self.easting, self.northing + self.extent)
    }

    /// Returns all four corners in SW, SE, NE, NW order.
    pub fn corners(&self) -> [(u32, u32); 4] {
        [
            self.sw_corner(),
            self.se_corner(),
            self.ne_corner(),
            self.nw_corner(),
        ]
    }

    /// Whether the point lies inside this square.
    ///
    /// Half-open on both axes: the south and west edges belong to the square,
    /// the north and east edges to its neighbours, matching how truncation
    /// assigns a coordinate to exactly one square per precision.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let min_x = f64::from(self.easting);
        let min_y = f64::from(self.northing);
        let size = f64::from(self.extent);

        coord.x() >= min_x
            && coord.x() < min_x + size
            && coord.y() >= min_y
            && coord.y() < min_y + size
    }

    /// Converts this square to an axis-aligned rectangle.
    pub fn to_rect(&self) -> Rect<f64> {
        square_rect(self.easting, self.northing, self.extent)
    }

    /// Converts this square to its closed boundary polygon.
    ///
    /// Returns a `geo_types::Polygon` suitable for spatial operations or
    /// hand-off to a raster georeferencer.
    pub fn to_polygon(&self) -> Polygon<f64> {
        square_polygon(self.easting, self.northing, self.extent)
    }
}
