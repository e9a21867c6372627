/// Stripped lengths that can be split into a grid reference
const REFERENCE_LENGTHS: [usize; 6] = [2, 4, 6, 8, 10, 12];

/// Normalizes a raw reference token into the spaced "letters numeric numeric" form.
///
/// All embedded whitespace is stripped, then the token is split into two
/// letters plus two equal numeric halves. Returns `None` when the stripped
/// length does not allow that split. Case-preserving: upper-casing is the
/// caller's job.
///
/// # Example
/// ```
/// use gridref_rs::format_grid_reference;
///
/// assert_eq!(format_grid_reference("sk123456").as_deref(), Some("sk 123 456"));
/// assert_eq!(format_grid_reference("SK 123"), None);
/// ```
pub fn format_grid_reference(raw: &str) -> Option<String> {
    let squeezed: Vec<char> = raw.split_whitespace().collect::<String>().chars().collect();
    if !REFERENCE_LENGTHS.contains(&squeezed.len()) {
        return None;
    }

    // Split on char boundaries so a malformed multi-byte token cannot panic
    let letters: String = squeezed[..2].iter().collect();
    let mid = 2 + (squeezed.len() - 2) / 2;
    let first: String = squeezed[2..mid].iter().collect();
    let second: String = squeezed[mid..].iter().collect();

    Some(format!("{} {} {}", letters, first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_contiguous_token() {
        assert_eq!(
            format_grid_reference("sk123456").as_deref(),
            Some("sk 123 456")
        );
        assert_eq!(format_grid_reference("SK3232").as_deref(), Some("SK 32 32"));
        assert_eq!(
            format_grid_reference("NS3633682945").as_deref(),
            Some("NS 36336 82945")
        );
    }

    #[test]
    fn test_strips_embedded_whitespace() {
        assert_eq!(
            format_grid_reference(" SK 32 32 ").as_deref(),
            Some("SK 32 32")
        );
        assert_eq!(
            format_grid_reference("SK\t123\n456").as_deref(),
            Some("SK 123 456")
        );
    }

    #[test]
    fn test_letters_only_token() {
        // Length 2 leaves both numeric halves empty
        assert_eq!(format_grid_reference("SK").as_deref(), Some("SK  "));
    }

    #[test]
    fn test_invalid_lengths_are_none() {
        for token in ["", "S", "SK3", "SK323", "SK32323", "SK323232323", "SK32323232323"] {
            assert_eq!(format_grid_reference(token), None, "token '{}'", token);
        }
    }

    #[test]
    fn test_idempotent_on_canonical_output() {
        for token in ["SK 32 32", "NS 36336 82945", "sk 123 456", "TQ 3 8"] {
            let once = format_grid_reference(token).unwrap();
            let twice = format_grid_reference(&once).unwrap();
            assert_eq!(once, twice);
            assert_eq!(once, token);
        }
    }

    #[test]
    fn test_multi_byte_input_does_not_panic() {
        // Nonsense, but must split on chars rather than bytes
        assert_eq!(format_grid_reference("SKé1é2").as_deref(), Some("SK é1 é2"));
    }
}
