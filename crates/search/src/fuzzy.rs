//! Edit distance between ingredient names.

/// Calculate Levenshtein edit distance between two strings.
///
/// Counts single-character insertions, deletions and substitutions over
/// Unicode scalar values. Comparison is case-sensitive; callers normalize
/// first.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Two rows are enough: row i only reads row i - 1
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("garlic", "garlic"), 0);
    }

    #[test]
    fn test_levenshtein_kitten_sitting() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_insert_delete() {
        assert_eq!(levenshtein_distance("tomto", "tomato"), 1);
        assert_eq!(levenshtein_distance("tomato", "tomto"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein_distance("", "basil"), 5);
        assert_eq!(levenshtein_distance("basil", ""), 5);
        assert_eq!(levenshtein_distance("", ""), 0);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("jalapeño", "jalapeno"), 1);
    }

    #[test]
    fn test_levenshtein_case_sensitive() {
        assert_eq!(levenshtein_distance("Salt", "salt"), 1);
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in "[a-z ]{0,12}", b in "[a-z ]{0,12}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn prop_identity(a in "\\PC{0,16}") {
            prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        }

        #[test]
        fn prop_bounded_by_longer(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            let d = levenshtein_distance(&a, &b);
            let (la, lb) = (a.chars().count(), b.chars().count());
            prop_assert!(d <= la.max(lb));
            prop_assert!(d >= la.abs_diff(lb));
        }

        #[test]
        fn prop_triangle(a in "[a-c]{0,8}", b in "[a-c]{0,8}", c in "[a-c]{0,8}") {
            prop_assert!(
                levenshtein_distance(&a, &c)
                    <= levenshtein_distance(&a, &b) + levenshtein_distance(&b, &c)
            );
        }
    }
}
