//! Station and route identifiers.
//!
//! A transit graph stores stations and route records in insertion-ordered
//! vectors; an `Id` is the position of its record in that vector. Ids are
//! never reused because nothing is ever removed.

use core::fmt;
use core::num::NonZeroU32;

/// Index of a station or route record, stored off by one.
///
/// The `NonZeroU32` niche keeps `Option<StationId>` at four bytes, which
/// matters for the per-station parent tables the searches allocate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Create an Id for a vector position, or `None` past `u32::MAX - 1`.
    pub fn try_from_index(index: usize) -> Option<Self> {
        let index = u32::try_from(index).ok()?;
        NonZeroU32::new(index.checked_add(1)?).map(Self)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a slot into a `Vec`.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Id {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type StationId = Id;
pub type RouteId = Id;
