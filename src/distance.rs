//! Edit distance engine.
//!
//! Restricted Damerau-Levenshtein distance (insert, delete, replace and
//! adjacent transposition, each costing 1) plus reconstruction of one
//! canonical edit script from the finished table.

use std::fmt;

/// A single edit operation in a transform list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    Replace,
    Transpose,
    Insert,
    Delete,
}

impl Transform {
    pub fn tag(self) -> char {
        match self {
            Self::Replace => 'R',
            Self::Transpose => 'T',
            Self::Insert => 'I',
            Self::Delete => 'D',
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Memoization table for `edit_distance(a, b)`.
///
/// Cell `(r, c)` holds the cost of turning the first `r` characters of `a`
/// into the first `c` characters of `b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceTable {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> usize {
        self.cells[r * self.cols + c]
    }

    #[inline]
    fn set(&mut self, r: usize, c: usize, value: usize) {
        self.cells[r * self.cols + c] = value;
    }

    /// Number of rows, `len(a) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(b) + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost of the full problem, the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

#[inline]
fn is_swap(a: &[char], b: &[char], r: usize, c: usize) -> bool {
    r >= 2 && c >= 2 && a[r - 2] == b[c - 1] && a[r - 1] == b[c - 2]
}

fn table_for_chars(a: &[char], b: &[char]) -> DistanceTable {
    let mut table = DistanceTable::zeroed(a.len() + 1, b.len() + 1);

    for r in 0..=a.len() {
        table.set(r, 0, r);
    }
    for c in 0..=b.len() {
        table.set(0, c, c);
    }

    for r in 1..=a.len() {
        for c in 1..=b.len() {
            let cost = if a[r - 1] == b[c - 1] {
                table.get(r - 1, c - 1)
            } else {
                let insert = table.get(r, c - 1) + 1;
                let delete = table.get(r - 1, c) + 1;
                let replace = table.get(r - 1, c - 1) + 1;
                let mut best = insert.min(delete).min(replace);
                if is_swap(a, b, r, c) {
                    best = best.min(table.get(r - 2, c - 2) + 1);
                }
                best
            };
            table.set(r, c, cost);
        }
    }
    table
}

/// Builds the complete distance table for turning `a` into `b`.
pub fn compute_table(a: &str, b: &str) -> DistanceTable {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    table_for_chars(&a, &b)
}

fn transforms_for_chars(a: &[char], b: &[char], table: &DistanceTable) -> Vec<Transform> {
    let mut transforms = Vec::with_capacity(table.distance());
    let (mut r, mut c) = (a.len(), b.len());

    while r > 0 || c > 0 {
        if r > 0 && c > 0 && a[r - 1] == b[c - 1] {
            r -= 1;
            c -= 1;
            continue;
        }
        if c == 0 {
            transforms.push(Transform::Delete);
            r -= 1;
            continue;
        }
        if r == 0 {
            transforms.push(Transform::Insert);
            c -= 1;
            continue;
        }

        // Replace first, then the rest in priority order; a later option only
        // wins when strictly cheaper.
        let mut best = (Transform::Replace, r - 1, c - 1);
        let rest = [
            is_swap(a, b, r, c).then(|| (Transform::Transpose, r - 2, c - 2)),
            Some((Transform::Insert, r, c - 1)),
            Some((Transform::Delete, r - 1, c)),
        ];
        for option in rest.into_iter().flatten() {
            if table.get(option.1, option.2) < table.get(best.1, best.2) {
                best = option;
            }
        }

        transforms.push(best.0);
        r = best.1;
        c = best.2;
    }
    transforms
}

/// Reconstructs one minimal edit script for turning `a` into `b`, ordered
/// from the full strings down to the empty prefixes.
///
/// Ties between equally cheap predecessors are broken
/// Replace > Transpose > Insert > Delete, so the result is canonical and can
/// be compared by plain equality.
///
/// `table` must come from `compute_table(a, b)`.
pub fn reconstruct_transforms(a: &str, b: &str, table: &DistanceTable) -> Vec<Transform> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    debug_assert_eq!(table.rows(), a.len() + 1);
    debug_assert_eq!(table.cols(), b.len() + 1);
    transforms_for_chars(&a, &b, table)
}

pub fn transformation_list(a: &str, b: &str) -> Vec<Transform> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let table = table_for_chars(&a, &b);
    transforms_for_chars(&a, &b, &table)
}

pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    compute_table(a, b).distance()
}

/// Renders a transform list as `[R, T, I]`.
pub fn format_transforms(transforms: &[Transform]) -> String {
    let tags: Vec<String> = transforms.iter().map(ToString::to_string).collect();
    format!("[{}]", tags.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Transform::*;

    const WORDS: [&str; 10] = [
        "", "a", "cat", "act", "dog", "kitten", "sitting", "abcd", "bacd", "ca",
    ];

    #[test]
    fn test_identity() {
        for w in WORDS {
            assert_eq!(edit_distance(w, w), 0);
            assert!(transformation_list(w, w).is_empty());
            assert_eq!(compute_table(w, w).distance(), 0);
        }
    }

    #[test]
    fn test_base_rows_and_columns() {
        let table = compute_table("abc", "de");
        assert_eq!(table.rows(), 4);
        assert_eq!(table.cols(), 3);
        for r in 0..4 {
            assert_eq!(table.get(r, 0), r);
        }
        for c in 0..3 {
            assert_eq!(table.get(0, c), c);
        }
    }

    #[test]
    fn test_pure_insert_and_delete() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(transformation_list("", "abc"), vec![Insert, Insert, Insert]);
        assert_eq!(transformation_list("abc", ""), vec![Delete, Delete, Delete]);
    }

    #[test]
    fn test_single_substitution() {
        assert_eq!(edit_distance("cat", "cot"), 1);
        assert_eq!(transformation_list("cat", "cot"), vec![Replace]);
        assert_eq!(transformation_list("cat", "bat"), vec![Replace]);
        assert_eq!(transformation_list("cat", "car"), vec![Replace]);
    }

    #[test]
    fn test_adjacent_transposition() {
        assert_eq!(edit_distance("ab", "ba"), 1);
        assert_eq!(transformation_list("ab", "ba"), vec![Transpose]);
        assert_eq!(edit_distance("abcd", "bacd"), 1);
        assert_eq!(transformation_list("abcd", "bacd"), vec![Transpose]);
        assert_eq!(transformation_list("act", "cat"), vec![Transpose]);
    }

    #[test]
    fn test_non_adjacent_swap_is_not_a_transposition() {
        // "abc" -> "cba" swaps the outer letters; two replacements.
        assert_eq!(edit_distance("abc", "cba"), 2);
        assert_eq!(transformation_list("abc", "cba"), vec![Replace, Replace]);
    }

    #[test]
    fn test_all_replacements() {
        assert_eq!(edit_distance("dog", "cat"), 3);
        assert_eq!(transformation_list("dog", "cat"), vec![Replace, Replace, Replace]);
    }

    #[test]
    fn test_kitten_sitting() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        let transforms = transformation_list("kitten", "sitting");
        assert_eq!(transforms.len(), 3);
        // Trailing 'g' must be inserted; the rest are replacements.
        assert_eq!(transforms, vec![Insert, Replace, Replace]);
    }

    #[test]
    fn test_boundary_moves() {
        // Matching suffix first, then only the boundary move is left.
        assert_eq!(transformation_list("a", "ba"), vec![Insert]);
        assert_eq!(transformation_list("ba", "a"), vec![Delete]);
    }

    #[test]
    fn test_tie_break_order_on_equal_predecessors() {
        // Replace and Insert both lead to cost 1 at the last cell.
        assert_eq!(transformation_list("a", "bb"), vec![Replace, Insert]);
        // Replace and Delete tie.
        assert_eq!(transformation_list("bb", "a"), vec![Replace, Delete]);
        // Transpose and Insert tie; Replace is dearer.
        assert_eq!(transformation_list("ab", "bba"), vec![Transpose, Insert]);
        // Insert and Delete tie; Replace is dearer.
        assert_eq!(transformation_list("abc", "bcab"), vec![Insert, Insert, Delete]);
    }

    #[test]
    fn test_transform_length_equals_distance() {
        for a in WORDS {
            for b in WORDS {
                let table = compute_table(a, b);
                let transforms = reconstruct_transforms(a, b, &table);
                assert_eq!(transforms.len(), table.distance(), "{a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn test_symmetric_and_bounded() {
        for a in WORDS {
            for b in WORDS {
                let d = edit_distance(a, b);
                assert_eq!(d, edit_distance(b, a), "{a:?} <-> {b:?}");
                let max_len = a.chars().count().max(b.chars().count());
                assert!(d <= max_len, "{a:?} -> {b:?} = {d}");
            }
        }
    }

    #[test]
    fn test_reconstruction_is_deterministic() {
        let table = compute_table("kitten", "sitting");
        let first = reconstruct_transforms("kitten", "sitting", &table);
        let second = reconstruct_transforms("kitten", "sitting", &table);
        assert_eq!(first, second);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(transformation_list("éa", "aé"), vec![Transpose]);
    }

    #[test]
    fn test_format_transforms() {
        assert_eq!(format_transforms(&[]), "[]");
        assert_eq!(format_transforms(&[Replace, Transpose, Insert, Delete]), "[R, T, I, D]");
    }
}
