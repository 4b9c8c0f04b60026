//! Typo handling for config keys and `LIVECITY_*` values.

use std::io::Write;
use std::str::FromStr;

/// Closest candidate within two edits of `input`, ignoring exact matches.
pub fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input = input.to_ascii_lowercase();
    candidates
        .iter()
        .map(|candidate| (*candidate, edit_distance(&input, candidate)))
        .filter(|(_, distance)| (1..=2).contains(distance))
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Parse `raw` as one of `valid`. An unparsable value keeps `current` and
/// writes a warning naming `var`.
pub fn parse_choice<T, W>(var: &str, raw: &str, valid: &[&str], current: T, warnings: &mut W) -> T
where
    T: FromStr,
    W: Write,
{
    if let Ok(parsed) = raw.trim().parse() {
        return parsed;
    }

    let hint = closest(raw.trim(), valid)
        .map(|c| format!(". Did you mean '{}'?", c))
        .unwrap_or_default();
    let _ = writeln!(
        warnings,
        "Warning: ignoring {}='{}'{} (expected one of: {})",
        var,
        raw,
        hint,
        valid.join(", ")
    );
    current
}

/// Levenshtein distance over chars, keeping a single row.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
