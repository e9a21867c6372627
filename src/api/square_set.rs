use crate::api::grid_square::GridSquare;
use crate::util::coord::Coordinate;
use crate::util::error::GridRefError;
use geo_types::{Polygon, Rect, coord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A batch of referenced grid squares, typically one per scanned map tile.
///
/// Construction parses every token in parallel. The strict constructor stops
/// at the first invalid token; the lossy one keeps the good squares and
/// reports the rejects alongside, which suits directory scans where stray
/// files are expected.
///
/// # Example
///
/// ```
/// use gridref_rs::SquareSet;
///
/// # fn main() -> Result<(), gridref_rs::GridRefError> {
/// let set = SquareSet::from_tokens(["sk3232", "ns3633682945", "hu396753"])?;
/// assert_eq!(set.len(), 3);
///
/// let bounds = set.bounds().unwrap();
/// assert_eq!(bounds.min().x, 236_336.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareSet {
    squares: Vec<GridSquare>,
}

impl SquareSet {
    /// Parse a batch of raw tokens, failing on the first invalid one
    ///
    /// # Example
    /// ```
    /// use gridref_rs::SquareSet;
    ///
    /// # fn main() -> Result<(), gridref_rs::GridRefError> {
    /// let set = SquareSet::from_tokens(["sk3232", "sk3233"])?;
    /// assert_eq!(set.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, GridRefError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Sync,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();

        let squares = tokens
            .par_iter()
            .map(|token| GridSquare::from_token(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { squares })
    }

    /// Parse a batch of raw tokens, collecting rejects instead of failing
    ///
    /// Returns the set of valid squares and, for each rejected token, the
    /// token text with the error it raised. Order follows the input.
    ///
    /// # Example
    /// ```
    /// use gridref_rs::SquareSet;
    ///
    /// let (set, rejects) = SquareSet::from_tokens_lossy(["sk3232", "thumbnail"]);
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(rejects.len(), 1);
    /// assert_eq!(rejects[0].0, "thumbnail");
    /// ```
    pub fn from_tokens_lossy<I, S>(tokens: I) -> (Self, Vec<(String, GridRefError)>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Sync,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();

        let parsed: Vec<(String, Result<GridSquare, GridRefError>)> = tokens
            .par_iter()
            .map(|token| {
                let raw = token.as_ref();
                (raw.to_string(), GridSquare::from_token(raw))
            })
            .collect();

        let mut squares = Vec::new();
        let mut rejects = Vec::new();
        for (raw, result) in parsed {
            match result {
                Ok(square) => squares.push(square),
                Err(e) => rejects.push((raw, e)),
            }
        }

        (Self { squares }, rejects)
    }

    /// Wrap an existing collection of squares.
    pub fn from_squares(squares: Vec<GridSquare>) -> Self {
        Self { squares }
    }

    /// Returns the number of squares in the set.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns true if the set holds no squares.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Returns the squares as a slice.
    pub fn squares(&self) -> &[GridSquare] {
        &self.squares
    }

    /// Returns an iterator over the squares.
    pub fn iter(&self) -> std::slice::Iter<'_, GridSquare> {
        self.squares.iter()
    }

    /// Finds the first square containing the point, if any.
    ///
    /// Squares in a set may overlap (mixed precisions), in which case the
    /// earliest match in input order wins.
    pub fn square_at(&self, coord: &impl Coordinate) -> Option<&GridSquare> {
        self.squares.iter().find(|square| square.contains(coord))
    }

    /// Returns a new set holding only the squares matching the predicate
    ///
    /// # Example
    /// ```
    /// use gridref_rs::SquareSet;
    ///
    /// # fn main() -> Result<(), gridref_rs::GridRefError> {
    /// let set = SquareSet::from_tokens(["sk3232", "ns3633682945"])?;
    /// let metre_squares = set.filter(|square| square.extent == 1);
    /// assert_eq!(metre_squares.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&GridSquare) -> bool,
    {
        Self {
            squares: self
                .squares
                .iter()
                .filter(|square| predicate(square))
                .cloned()
                .collect(),
        }
    }

    /// Returns the axis-aligned rectangle enclosing every square, or None
    /// for an empty set.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let mut rects = self.squares.iter().map(GridSquare::to_rect);
        let first = rects.next()?;

        Some(rects.fold(first, |acc, rect| {
            Rect::new(
                coord! {
                    x: acc.min().x.min(rect.min().x),
                    y: acc.min().y.min(rect.min().y),
                },
                coord! {
                    x: acc.max().x.max(rect.max().x),
                    y: acc.max().y.max(rect.max().y),
                },
            )
        }))
    }

    /// Converts every square to its boundary polygon, in parallel.
    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.squares.par_iter().map(GridSquare::to_polygon).collect()
    }
}

impl<'a> IntoIterator for &'a SquareSet {
    type Item = &'a GridSquare;
    type IntoIter = std::slice::Iter<'a, GridSquare>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() -> Result<(), GridRefError> {
        let set = SquareSet::from_tokens(["sk3232", "ns3633682945", "hu396753"])?;

        assert_eq!(set.len(), 3);
        assert_eq!(set.squares()[0].reference, "SK 32 32");
        assert_eq!(set.squares()[1].sw_corner(), (236_336, 682_945));
        assert_eq!(set.squares()[2].extent, 100);
        Ok(())
    }

    #[test]
    fn test_from_tokens_strict_fails_fast() {
        let result = SquareSet::from_tokens(["sk3232", "not-a-ref"]);
        assert!(matches!(
            result,
            Err(GridRefError::InvalidGridReference(_))
        ));
    }

    #[test]
    fn test_from_tokens_lossy_partitions() {
        let (set, rejects) =
            SquareSet::from_tokens_lossy(["sk3232", "thumbnail", "zz3232", "hu396753"]);

        assert_eq!(set.len(), 2);
        assert_eq!(rejects.len(), 2);
        assert_eq!(rejects[0].0, "thumbnail");
        assert_eq!(rejects[1].0, "zz3232");
        assert!(matches!(
            rejects[1].1,
            GridRefError::InvalidGridReference(_)
        ));
    }

    #[test]
    fn test_from_tokens_lossy_keeps_input_order() {
        let (set, _) = SquareSet::from_tokens_lossy(["hu396753", "sk3232"]);
        assert_eq!(set.squares()[0].reference, "HU 396 753");
        assert_eq!(set.squares()[1].reference, "SK 32 32");
    }

    #[test]
    fn test_empty_set() {
        let (set, rejects) = SquareSet::from_tokens_lossy(Vec::<String>::new());

        assert!(set.is_empty());
        assert!(rejects.is_empty());
        assert!(set.bounds().is_none());
        assert!(set.square_at(&(432_500_u32, 332_500_u32)).is_none());
    }

    #[test]
    fn test_square_at() -> Result<(), GridRefError> {
        let set = SquareSet::from_tokens(["sk3232", "sk3233"])?;

        let hit = set.square_at(&(432_500_u32, 333_500_u32));
        assert_eq!(hit.map(|s| s.reference.as_str()), Some("SK 32 33"));

        // On the shared edge the northern neighbour owns the point
        let edge = set.square_at(&(432_500_u32, 333_000_u32));
        assert_eq!(edge.map(|s| s.reference.as_str()), Some("SK 32 33"));

        assert!(set.square_at(&(500_000_u32, 500_000_u32)).is_none());
        Ok(())
    }

    #[test]
    fn test_filter() -> Result<(), GridRefError> {
        let set = SquareSet::from_tokens(["sk3232", "ns3633682945", "hu396753"])?;

        let fine = set.filter(|square| square.extent < 1_000);
        assert_eq!(fine.len(), 2);
        assert!(fine.iter().all(|square| square.extent < 1_000));
        Ok(())
    }

    #[test]
    fn test_bounds_spans_all_squares() -> Result<(), GridRefError> {
        let set = SquareSet::from_tokens(["sk3232", "ns3633682945"])?;

        let bounds = set.bounds().unwrap();
        assert_eq!(bounds.min().x, 236_336.0);
        assert_eq!(bounds.min().y, 332_000.0);
        assert_eq!(bounds.max().x, 433_000.0);
        assert_eq!(bounds.max().y, 682_946.0);
        Ok(())
    }

    #[test]
    fn test_to_polygons() -> Result<(), GridRefError> {
        let set = SquareSet::from_tokens(["sk3232", "hu396753"])?;

        let polygons = set.to_polygons();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_into_iterator() -> Result<(), GridRefError> {
        let set = SquareSet::from_tokens(["sk3232", "sk3233"])?;

        let mut count = 0;
        for square in &set {
            assert!(square.reference.starts_with("SK"));
            count += 1;
        }
        assert_eq!(count, 2);
        Ok(())
    }
}
