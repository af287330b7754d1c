use std::fmt;

/// Width in bits of a flag word. Bit positions handed to
/// [`FlagSet::toggle`] must lie inside `0..WIDTH`.
pub const WIDTH: u32 = u32::BITS;

/// A fixed-width word of boolean flags.
///
/// Every bit pattern is a valid state. The operations are functional:
/// they take the word by copy and return the next word, so the caller
/// holds the only cell that ever changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlagSet {
    pub bits: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagError {
    OutOfRange { position: i32 },
}

impl FlagSet {
    pub const EMPTY: FlagSet = FlagSet { bits: 0 };

    pub const fn new(bits: u32) -> FlagSet {
        FlagSet { bits }
    }

    /// Whether any bit of `flag` is set in this word.
    ///
    /// An empty `flag` always answers false.
    pub const fn has(self, flag: FlagSet) -> bool {
        self.bits & flag.bits != 0
    }

    /// This word with the bits of `flag` set. Granting an already-set
    /// flag changes nothing.
    #[must_use]
    pub const fn grant(self, flag: FlagSet) -> FlagSet {
        FlagSet { bits: self.bits | flag.bits }
    }

    /// This word with the bits of `flag` cleared. Revoking an
    /// already-clear flag changes nothing.
    #[must_use]
    pub const fn revoke(self, flag: FlagSet) -> FlagSet {
        FlagSet { bits: self.bits & !flag.bits }
    }

    /// This word with the single bit at `position` flipped, every other
    /// bit preserved exactly. Positions are 0-based.
    ///
    /// A position outside `0..WIDTH` is an error for the caller to
    /// handle; a wrapping shift here would silently corrupt unrelated
    /// bits instead.
    pub const fn toggle(self, position: i32) -> Result<FlagSet, FlagError> {
        if position < 0 || position >= WIDTH as i32 {
            return Err(FlagError::OutOfRange { position });
        }

        Ok(FlagSet { bits: self.bits ^ (1u32 << position as u32) })
    }
}

/// True for positive integers with a single set bit. Zero and negative
/// numbers are never powers of two.
pub const fn is_power_of_two(n: i64) -> bool {
    n > 0 && n & (n - 1) == 0
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#b}", self.bits)
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlagError::OutOfRange { position } => write!(
                f,
                "bit position {position} is out of range (valid positions are 0..{WIDTH})"
            ),
        }
    }
}

impl std::error::Error for FlagError {}
