use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier used across the graph model.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
///
/// Ids are unique within their owner's namespace (a graph scopes actor and
/// channel ids, an actor scopes port ids) and are assigned by position at
/// creation time. They are never renumbered after a removal, so callers must
/// not assume density.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
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

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type ActorId = Id;
pub type ChannelId = Id;
pub type PortId = Id;

/// Tokens produced/consumed per firing. Always positive on a valid port.
pub type Rate = u32;
