use crate::{AlignerError, Result};

/// Symbols treated as gaps in input profiles.
pub const GAP_CHARS: &[u8] = b"-.";

/// Symbol emitted for gaps in aligned output.
pub const GAP_CHAR: u8 = b'-';

#[inline]
pub fn is_gap(symbol: u8) -> bool {
    GAP_CHARS.contains(&symbol)
}

/// Sequence type tag. Carried through to the aligned output but never
/// consulted by the DP engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceKind {
    #[default]
    Generic,
    Nucleotide,
    Protein,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSequence {
    id: Option<String>,
    kind: SequenceKind,
    symbols: Vec<u8>,
}

impl ProfileSequence {
    pub fn new(symbols: &[u8]) -> Self {
        Self {
            id: None,
            kind: SequenceKind::Generic,
            symbols: symbols.to_vec(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_kind(mut self, kind: SequenceKind) -> Self {
        self.kind = kind;
        self
    }

    /// The identifier, if one was supplied and it is not blank.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<&str> for ProfileSequence {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

/// One or more already-aligned sequences of equal length, aligned as a unit.
///
/// A single sequence is a profile of size one; the engine never branches on
/// the difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    sequences: Vec<ProfileSequence>,
    length: usize,
}

impl Profile {
    pub fn new(sequences: Vec<ProfileSequence>) -> Result<Self> {
        let length = sequences.first().ok_or(AlignerError::EmptyProfile)?.len();
        for (i, seq) in sequences.iter().enumerate() {
            if seq.len() != length {
                return Err(AlignerError::RaggedProfile {
                    id: seq.id().map_or_else(|| i.to_string(), str::to_owned),
                    expected: length,
                    found: seq.len(),
                });
            }
        }
        Ok(Self { sequences, length })
    }

    pub fn single(sequence: ProfileSequence) -> Self {
        let length = sequence.len();
        Self {
            sequences: vec![sequence],
            length,
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    pub fn sequences(&self) -> &[ProfileSequence] {
        &self.sequences
    }

    /// Symbols of every member at column `i`, in member order.
    pub fn column(&self, i: usize) -> Vec<u8> {
        self.sequences.iter().map(|s| s.symbols[i]).collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        (0..self.length).map(move |i| self.column(i))
    }
}

impl From<ProfileSequence> for Profile {
    fn from(sequence: ProfileSequence) -> Self {
        Self::single(sequence)
    }
}

impl From<&str> for Profile {
    fn from(s: &str) -> Self {
        Self::single(ProfileSequence::from(s))
    }
}
