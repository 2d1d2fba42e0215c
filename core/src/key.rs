use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{ParseError, Result};

/// Formats a grid coordinate as the flat `"row,col"` key other components
/// use to index per-cell state maps. Pure formatter, no validation:
/// negative inputs pass straight through.
pub fn encode(row: i32, col: i32) -> String {
    format!("{},{}", row, col)
}

/// Permissive inverse of [`encode`]: splits on every comma and coerces each
/// segment to a number. A segment that does not parse becomes `f64::NAN` in
/// place rather than failing the whole call, so the result always has one
/// element per segment (an empty key yields a single NaN).
///
/// Callers that want malformed keys surfaced instead of coerced parse a
/// [`CellKey`] instead.
pub fn decode(key: &str) -> Vec<f64> {
    key.split(',')
        .map(|segment| {
            segment.parse::<f64>().unwrap_or_else(|_| {
                log::trace!("non-numeric key segment {:?}, coercing to NaN", segment);
                f64::NAN
            })
        })
        .collect()
}

/// Typed form of the `"row,col"` wire key. `Display` emits the exact bytes
/// [`encode`] produces; `FromStr` is the strict decode that rejects wrong
/// arity and non-integer segments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub row: i32,
    pub col: i32,
}

impl CellKey {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<(i32, i32)> for CellKey {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl FromStr for CellKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        let mut segments = s.split(',');
        let (Some(row), Some(col), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Err(ParseError::KeySegmentCount {
                found: s.split(',').count(),
            });
        };

        let row = row.parse().map_err(|_| ParseError::KeyBadSegment {
            segment: row.into(),
        })?;
        let col = col.parse().map_err(|_| ParseError::KeyBadSegment {
            segment: col.into(),
        })?;

        Ok(Self { row, col })
    }
}
