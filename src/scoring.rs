use std::collections::HashMap;

use crate::profile::is_gap;
use crate::{AlignerError, Result};

/// Two-level lookup from a symbol pair to a substitution score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionMatrix {
    rows: HashMap<u8, HashMap<u8, f64>>,
}

impl SubstitutionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(row symbol, [(column symbol, score)])` entries.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = (u8, C)>,
        C: IntoIterator<Item = (u8, f64)>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|(a, row)| (a, row.into_iter().collect()))
                .collect(),
        }
    }

    /// Every pair over `alphabet` scores `match_score` when the symbols are
    /// equal and `mismatch_score` otherwise.
    pub fn identity(match_score: f64, mismatch_score: f64, alphabet: &[u8]) -> Self {
        Self::from_rows(alphabet.iter().map(|&a| {
            let row = alphabet
                .iter()
                .map(move |&b| (b, if a == b { match_score } else { mismatch_score }));
            (a, row)
        }))
    }

    pub fn insert(&mut self, a: u8, b: u8, score: f64) {
        self.rows.entry(a).or_default().insert(b, score);
    }

    #[inline]
    pub fn get(&self, a: u8, b: u8) -> Option<f64> {
        self.rows.get(&a).and_then(|row| row.get(&b)).copied()
    }

    /// Whether `symbol` has a row in the matrix.
    pub fn contains(&self, symbol: u8) -> bool {
        self.rows.contains_key(&symbol)
    }

    /// Row symbols in ascending order.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut symbols: Vec<u8> = self.rows.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    fn lookup(&self, a: u8, b: u8) -> Result<f64> {
        self.get(a, b).ok_or_else(|| {
            let mut offending: Vec<u8> = [a, b]
                .into_iter()
                .filter(|&c| !self.contains(c))
                .collect();
            if offending.is_empty() {
                offending = vec![a, b];
            }
            offending.dedup();
            AlignerError::MissingSubstitution {
                symbols: offending
                    .iter()
                    .map(|&c| (c as char).to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
    }
}

/// Mean substitution score over every pairing of a symbol from `column1` with
/// a symbol from `column2`. Pairs involving a gap score `gap_substitution_score`.
///
/// For two single-symbol columns this is a direct matrix lookup.
pub fn substitution_score(
    column1: &[u8],
    column2: &[u8],
    matrix: &SubstitutionMatrix,
    gap_substitution_score: f64,
) -> Result<f64> {
    let mut total = 0.0;
    for &a in column1 {
        for &b in column2 {
            total += if is_gap(a) || is_gap(b) {
                gap_substitution_score
            } else {
                matrix.lookup(a, b)?
            };
        }
    }
    Ok(total / (column1.len() * column2.len()) as f64)
}
