use std::sync::LazyLock;

use crate::scoring::SubstitutionMatrix;

const BLOSUM50_ALPHABET: &[u8; 24] = b"ARNDCQEGHILKMFPSTWYVBZX*";

#[rustfmt::skip]
const BLOSUM50_SCORES: [[i8; 24]; 24] = [
//     A    R    N    D    C    Q    E    G    H    I    L    K    M    F    P    S    T    W    Y    V    B    Z    X    *
    [  5,  -2,  -1,  -2,  -1,  -1,  -1,   0,  -2,  -1,  -2,  -1,  -1,  -3,  -1,   1,   0,  -3,  -2,   0,  -2,  -1,  -1,  -5], // A
    [ -2,   7,  -1,  -2,  -4,   1,   0,  -3,   0,  -4,  -3,   3,  -2,  -3,  -3,  -1,  -1,  -3,  -1,  -3,  -1,   0,  -1,  -5], // R
    [ -1,  -1,   7,   2,  -2,   0,   0,   0,   1,  -3,  -4,   0,  -2,  -4,  -2,   1,   0,  -4,  -2,  -3,   5,   0,  -1,  -5], // N
    [ -2,  -2,   2,   8,  -4,   0,   2,  -1,  -1,  -4,  -4,  -1,  -4,  -5,  -1,   0,  -1,  -5,  -3,  -4,   6,   1,  -1,  -5], // D
    [ -1,  -4,  -2,  -4,  13,  -3,  -3,  -3,  -3,  -2,  -2,  -3,  -2,  -2,  -4,  -1,  -1,  -5,  -3,  -1,  -3,  -3,  -1,  -5], // C
    [ -1,   1,   0,   0,  -3,   7,   2,  -2,   1,  -3,  -2,   2,   0,  -4,  -1,   0,  -1,  -1,  -1,  -3,   0,   4,  -1,  -5], // Q
    [ -1,   0,   0,   2,  -3,   2,   6,  -3,   0,  -4,  -3,   1,  -2,  -3,  -1,  -1,  -1,  -3,  -2,  -3,   1,   5,  -1,  -5], // E
    [  0,  -3,   0,  -1,  -3,  -2,  -3,   8,  -2,  -4,  -4,  -2,  -3,  -4,  -2,   0,  -2,  -3,  -3,  -4,  -1,  -2,  -1,  -5], // G
    [ -2,   0,   1,  -1,  -3,   1,   0,  -2,  10,  -4,  -3,   0,  -1,  -1,  -2,  -1,  -2,  -3,   2,  -4,   0,   0,  -1,  -5], // H
    [ -1,  -4,  -3,  -4,  -2,  -3,  -4,  -4,  -4,   5,   2,  -3,   2,   0,  -3,  -3,  -1,  -3,  -1,   4,  -4,  -3,  -1,  -5], // I
    [ -2,  -3,  -4,  -4,  -2,  -2,  -3,  -4,  -3,   2,   5,  -3,   3,   1,  -4,  -3,  -1,  -2,  -1,   1,  -4,  -3,  -1,  -5], // L
    [ -1,   3,   0,  -1,  -3,   2,   1,  -2,   0,  -3,  -3,   6,  -2,  -4,  -1,   0,  -1,  -3,  -2,  -3,   0,   1,  -1,  -5], // K
    [ -1,  -2,  -2,  -4,  -2,   0,  -2,  -3,  -1,   2,   3,  -2,   7,   0,  -3,  -2,  -1,  -1,   0,   1,  -3,  -1,  -1,  -5], // M
    [ -3,  -3,  -4,  -5,  -2,  -4,  -3,  -4,  -1,   0,   1,  -4,   0,   8,  -4,  -3,  -2,   1,   4,  -1,  -4,  -4,  -1,  -5], // F
    [ -1,  -3,  -2,  -1,  -4,  -1,  -1,  -2,  -2,  -3,  -4,  -1,  -3,  -4,  10,  -1,  -1,  -4,  -3,  -3,  -2,  -1,  -1,  -5], // P
    [  1,  -1,   1,   0,  -1,   0,  -1,   0,  -1,  -3,  -3,   0,  -2,  -3,  -1,   5,   2,  -4,  -2,  -2,   0,   0,  -1,  -5], // S
    [  0,  -1,   0,  -1,  -1,  -1,  -1,  -2,  -2,  -1,  -1,  -1,  -1,  -2,  -1,   2,   5,  -3,  -2,   0,   0,  -1,  -1,  -5], // T
    [ -3,  -3,  -4,  -5,  -5,  -1,  -3,  -3,  -3,  -3,  -2,  -3,  -1,   1,  -4,  -4,  -3,  15,   2,  -3,  -5,  -2,  -1,  -5], // W
    [ -2,  -1,  -2,  -3,  -3,  -1,  -2,  -3,   2,  -1,  -1,  -2,   0,   4,  -3,  -2,  -2,   2,   8,  -1,  -3,  -2,  -1,  -5], // Y
    [  0,  -3,  -3,  -4,  -1,  -3,  -3,  -4,  -4,   4,   1,  -3,   1,  -1,  -3,  -2,   0,  -3,  -1,   5,  -3,  -3,  -1,  -5], // V
    [ -2,  -1,   5,   6,  -3,   0,   1,  -1,   0,  -4,  -4,   0,  -3,  -4,  -2,   0,   0,  -5,  -3,  -3,   6,   1,  -1,  -5], // B
    [ -1,   0,   0,   1,  -3,   4,   5,  -2,   0,  -3,  -3,   1,  -1,  -4,  -1,   0,  -1,  -2,  -2,  -3,   1,   5,  -1,  -5], // Z
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -5], // X
    [ -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,   1], // *
];

/// BLOSUM50 amino acid substitution matrix (Henikoff & Henikoff, 1992),
/// including the ambiguity codes B, Z, X and the stop symbol.
pub static BLOSUM50: LazyLock<SubstitutionMatrix> = LazyLock::new(|| {
    SubstitutionMatrix::from_rows(BLOSUM50_ALPHABET.iter().zip(BLOSUM50_SCORES.iter()).map(
        |(&a, row)| {
            let row = BLOSUM50_ALPHABET
                .iter()
                .zip(row.iter())
                .map(|(&b, &score)| (b, f64::from(score)));
            (a, row)
        },
    ))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blosum50_spot_values() {
        assert_eq!(BLOSUM50.get(b'W', b'W'), Some(15.0));
        assert_eq!(BLOSUM50.get(b'H', b'H'), Some(10.0));
        assert_eq!(BLOSUM50.get(b'A', b'W'), Some(-3.0));
        assert_eq!(BLOSUM50.get(b'*', b'*'), Some(1.0));
        assert_eq!(BLOSUM50.get(b'X', b'C'), Some(-1.0));
        assert_eq!(BLOSUM50.get(b'J', b'A'), None);
    }

    #[test]
    fn test_blosum50_is_symmetric() {
        for &a in BLOSUM50_ALPHABET {
            for &b in BLOSUM50_ALPHABET {
                assert_eq!(BLOSUM50.get(a, b), BLOSUM50.get(b, a));
            }
        }
    }
}
