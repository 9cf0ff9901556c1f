//! The decode-side view of the code table.
//!
//! A [`DecodeTable`] is the static table re-sorted by ascending code length
//! (ties in symbol order) and split into runs of equal length. Because the
//! code is canonical, codes inside a run ascend with the symbol, so a run is
//! searched by binary search instead of a linear scan. The observable order
//! is unchanged: shorter codes are always tried first.
//!
//! The process-wide table is built on first use and kept for the life of the
//! process behind a [`OnceLock`].

use std::sync::OnceLock;

use crate::bits::BitReader;
use crate::error::HuffmanError;
use crate::table::{CodeEntry, MAX_CODE_LENGTH, MIN_CODE_LENGTH, STATIC_TABLE, TABLE_SIZE};

/// Entries sharing one code length, as a range into `DecodeTable::entries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LengthRun {
    length: u8,
    start: usize,
    end: usize,
}

/// Outcome of matching the table against the input at one bit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// A code matched.
    Symbol(CodeEntry),
    /// Fewer bits remain than the next code length to try.
    Truncated,
    /// Every run was tried without a match.
    NoMatch,
}

/// Code entries ordered for decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeTable {
    entries: Vec<CodeEntry>,
    runs: Vec<LengthRun>,
}

impl DecodeTable {
    /// Build a decode table from `source`, which must hold one entry for each
    /// symbol 0..=256 with lengths in 5..=30 and canonical codes.
    pub fn build(source: &[CodeEntry]) -> Result<Self, HuffmanError> {
        if source.len() != TABLE_SIZE {
            return Err(HuffmanError::InitializationFailed(format!(
                "expected {} entries, got {}",
                TABLE_SIZE,
                source.len()
            )));
        }

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(source.len())
            .map_err(|_| HuffmanError::OutOfMemory)?;
        entries.extend_from_slice(source);
        entries.sort_by_key(|e| (e.length, e.symbol));

        let mut seen = [false; TABLE_SIZE];
        for e in &entries {
            let slot = seen.get_mut(e.symbol as usize).ok_or_else(|| {
                HuffmanError::InitializationFailed(format!("symbol {} out of range", e.symbol))
            })?;
            if *slot {
                return Err(HuffmanError::InitializationFailed(format!(
                    "symbol {} listed twice",
                    e.symbol
                )));
            }
            *slot = true;
            if e.length < MIN_CODE_LENGTH || e.length > MAX_CODE_LENGTH {
                return Err(HuffmanError::InitializationFailed(format!(
                    "symbol {} has code length {}",
                    e.symbol, e.length
                )));
            }
        }

        let mut runs: Vec<LengthRun> = Vec::new();
        for (i, e) in entries.iter().enumerate() {
            if let Some(run) = runs.last_mut().filter(|run| run.length == e.length) {
                if entries[i - 1].code >= e.code {
                    return Err(HuffmanError::InitializationFailed(format!(
                        "codes of length {} are not in canonical order",
                        e.length
                    )));
                }
                run.end = i + 1;
                continue;
            }
            runs.push(LengthRun {
                length: e.length,
                start: i,
                end: i + 1,
            });
        }

        log::debug!(
            "built decode table: {} entries in {} length runs",
            entries.len(),
            runs.len()
        );
        Ok(Self { entries, runs })
    }

    /// The entries in decode order.
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    /// Length of the shortest code.
    pub fn shortest_length(&self) -> u8 {
        self.runs.first().map_or(MIN_CODE_LENGTH, |run| run.length)
    }

    /// Match the code starting `offset` bits into `reader`, shortest codes
    /// first.
    pub(crate) fn lookup(
        &self,
        reader: &BitReader<'_>,
        offset: usize,
    ) -> Result<Lookup, HuffmanError> {
        let remaining = reader.remaining(offset);
        for run in &self.runs {
            if remaining < run.length as usize {
                return Ok(Lookup::Truncated);
            }
            let window = reader.peek(offset, run.length)?;
            let candidates = &self.entries[run.start..run.end];
            if let Ok(i) = candidates.binary_search_by_key(&window, |e| e.code) {
                return Ok(Lookup::Symbol(candidates[i]));
            }
        }
        Ok(Lookup::NoMatch)
    }
}

/// Return the table cached in `cell`, building it from `source` first if the
/// cell is empty. Racing callers may each build a table; exactly one is
/// installed and every caller gets that one.
pub(crate) fn get_or_build<'c>(
    cell: &'c OnceLock<DecodeTable>,
    source: &[CodeEntry],
) -> Result<&'c DecodeTable, HuffmanError> {
    if let Some(table) = cell.get() {
        return Ok(table);
    }
    let table = DecodeTable::build(source)?;
    Ok(cell.get_or_init(|| table))
}

static SHARED: OnceLock<DecodeTable> = OnceLock::new();

/// The process-wide decode table for [`STATIC_TABLE`].
pub fn shared() -> Result<&'static DecodeTable, HuffmanError> {
    get_or_build(&SHARED, &STATIC_TABLE)
}

/// Build the process-wide decode table ahead of the first decode.
pub fn prewarm() -> Result<(), HuffmanError> {
    shared().map(|_| ())
}
