//! Approximate substring matching
//!
//! A [`Pattern`] is aligned against a field value with a semi-global edit
//! distance: the whole pattern must be consumed, but the alignment may start
//! and end anywhere in the value. Substitutions, insertions, deletions and
//! adjacent transpositions each cost one error.
//!
//! A candidate alignment scores `errors / pattern_len` plus a proximity
//! penalty for starting away from the expected location. Lower is better,
//! zero is an exact match at the expected location. An exact occurrence is
//! always accepted: proximity only ranks it, clamped to the threshold.
//!
//! Queries are truncated to [`MAX_PATTERN_LEN`] characters.

use crate::options::SearchOptions;

/// Longest pattern, in characters, that is aligned against a value.
pub const MAX_PATTERN_LEN: usize = 32;

/// Best alignment of a pattern inside one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMatch {
    pub score: f64,
    pub errors: usize,
    /// Character offset of the first matched character.
    pub start: usize,
    /// Character offset one past the last matched character.
    pub end: usize,
}

impl FieldMatch {
    pub fn is_exact(&self) -> bool {
        self.errors == 0
    }
}

/// A lowercased query ready to be matched against many values.
#[derive(Debug, Clone)]
pub struct Pattern {
    chars: Vec<char>,
    threshold: f64,
    min_match_char_length: usize,
    location: usize,
    distance: usize,
    ignore_location: bool,
}

#[derive(Clone, Copy)]
struct Cell {
    errors: usize,
    start: usize,
}

impl Pattern {
    pub fn new(query: &str, options: &SearchOptions) -> Self {
        Self {
            chars: query.to_lowercase().chars().take(MAX_PATTERN_LEN).collect(),
            threshold: options.threshold,
            min_match_char_length: options.min_match_char_length,
            location: options.location,
            distance: options.distance,
            ignore_location: options.ignore_location,
        }
    }

    /// Pattern length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Match against raw text, lowercasing it first.
    pub fn find(&self, text: &str) -> Option<FieldMatch> {
        let text: Vec<char> = text.to_lowercase().chars().collect();
        self.find_in(&text)
    }

    /// Match against already lowercased characters.
    pub fn find_in(&self, text: &[char]) -> Option<FieldMatch> {
        let m = self.chars.len();
        if m == 0 || m < self.min_match_char_length {
            return None;
        }

        let p = &self.chars;
        let n = text.len();
        let width = n + 1;

        // rows[i * width + j]: best alignment of p[..i] ending at text[..j]
        let mut rows = vec![Cell { errors: 0, start: 0 }; (m + 1) * width];
        for (j, cell) in rows.iter_mut().take(width).enumerate() {
            cell.start = j;
        }
        for i in 1..=m {
            rows[i * width] = Cell { errors: i, start: 0 };
            for j in 1..=n {
                let diag = rows[(i - 1) * width + j - 1];
                let up = rows[(i - 1) * width + j];
                let left = rows[i * width + j - 1];

                let mut best = Cell {
                    errors: diag.errors + usize::from(p[i - 1] != text[j - 1]),
                    start: diag.start,
                };
                for candidate in [up, left] {
                    if candidate.errors + 1 < best.errors {
                        best = Cell {
                            errors: candidate.errors + 1,
                            start: candidate.start,
                        };
                    }
                }
                if i > 1 && j > 1 && p[i - 1] == text[j - 2] && p[i - 2] == text[j - 1] {
                    let swap = rows[(i - 2) * width + j - 2];
                    if swap.errors + 1 < best.errors {
                        best = Cell {
                            errors: swap.errors + 1,
                            start: swap.start,
                        };
                    }
                }
                rows[i * width + j] = best;
            }
        }

        let mut found: Option<FieldMatch> = None;
        for end in 0..=n {
            let cell = rows[m * width + end];
            if end - cell.start < self.min_match_char_length {
                continue;
            }
            let proximity = self.proximity(cell.start);
            let score = if cell.errors == 0 {
                proximity.min(self.threshold)
            } else {
                cell.errors as f64 / m as f64 + proximity
            };
            if score > self.threshold {
                continue;
            }
            if found.is_none_or(|f| score < f.score) {
                found = Some(FieldMatch {
                    score,
                    errors: cell.errors,
                    start: cell.start,
                    end,
                });
            }
        }
        found
    }

    fn proximity(&self, start: usize) -> f64 {
        if self.ignore_location {
            return 0.0;
        }
        let offset = start.abs_diff(self.location);
        if self.distance == 0 {
            return if offset == 0 { 0.0 } else { 1.0 };
        }
        offset as f64 / self.distance as f64
    }
}
