//! Levenshtein edit distance.
//!
//! Wagner–Fischer dynamic programming, keeping only two rows of the
//! `(|a|+1) × (|b|+1)` table. The rows run along the shorter input.
//!
//! # Complexity
//! O(|a|·|b|) time, O(min(|a|, |b|)) space
//!
//! # References
//!
//! - Wagner & Fischer (1974), "The String-to-String Correction Problem"

/// Minimum number of single-symbol insertions, deletions and substitutions
/// turning `a` into `b`.
///
/// ```
/// use u_textevo::text::edit_distance;
///
/// assert_eq!(edit_distance("KITTEN".as_bytes(), "SITTING".as_bytes()), 3);
/// ```
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    // prev[j] = d[i-1][j], curr[j] = d[i][j]
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, x) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// [`edit_distance`] over the characters of two strings.
pub fn edit_distance_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(a.as_slice(), b.as_slice())
}
