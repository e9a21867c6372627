use gridref_rs::{GridRefError, GridSquare};

fn main() -> Result<(), GridRefError> {
    let stem = "sk3232";

    let square = GridSquare::from_token(stem)?;

    println!("Reference: {}", square.reference);
    println!("SW corner: {:?}", square.sw_corner());
    println!("Extent: {} m", square.extent);
    println!("Corners: {:?}", square.corners());

    let polygon = square.to_polygon();
    println!("Polygon: {:?}", polygon);

    Ok(())
}
