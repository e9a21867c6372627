use geo_types::{Coord, LineString, Polygon, Rect, coord};

/// Builds the closed boundary ring of a grid square from its south-west corner.
///
/// Five coordinates, counter-clockwise, with the first repeated as the last.
pub fn square_polygon(easting: u32, northing: u32, extent: u32) -> Polygon<f64> {
    let x = f64::from(easting);
    let y = f64::from(northing);
    let size = f64::from(extent);

    let coords = vec![
        Coord { x, y },
        Coord { x: x + size, y },
        Coord {
            x: x + size,
            y: y + size,
        },
        Coord { x, y: y + size },
        Coord { x, y },
    ];

    Polygon::new(LineString::from(coords), vec![])
}

/// Axis-aligned rectangle of a grid square from its south-west corner.
pub fn square_rect(easting: u32, northing: u32, extent: u32) -> Rect<f64> {
    let x = f64::from(easting);
    let y = f64::from(northing);
    let size = f64::from(extent);

    Rect::new(coord! { x: x, y: y }, coord! { x: x + size, y: y + size })
}
