// Unit-cost Levenshtein distance used for scoring predictions

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// Full table with `|b| + 1` rows and `|a| + 1` columns.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let cols = a.len() + 1;

    let mut m = vec![0usize; (b.len() + 1) * cols];
    for x in 1..=b.len() {
        m[x * cols] = x;
    }
    for y in 1..=a.len() {
        m[y] = y;
    }
    for x in 1..=b.len() {
        for y in 1..=a.len() {
            let diagonal = if a[y - 1] == b[x - 1] { 0 } else { 1 };
            m[x * cols + y] = (m[(x - 1) * cols + y] + 1)
                .min(m[x * cols + y - 1] + 1)
                .min(m[(x - 1) * cols + y - 1] + diagonal);
        }
    }
    m[b.len() * cols + a.len()]
}
