use crate::{FlagSet, WIDTH};
use itertools::Itertools;
use std::fmt;
use tinyvec::TinyVec;
use tracing::trace;

/// A named flag: one bit position of a [`FlagSet`] word.
///
/// Positions are 0-based; "bit 0" is the least significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flag {
    pub name: &'static str,
    pub position: u32,
}

impl Flag {
    /// The single-bit word used to grant, revoke or test this flag.
    pub const fn mask(self) -> FlagSet {
        FlagSet::new(1 << self.position)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// An immutable table of named flags sharing one word.
///
/// Bits without an entry here still exist in the word; named operations
/// simply never touch them.
#[derive(Clone, Copy)]
pub struct FlagTable {
    name: &'static str,
    flags: &'static [Flag],
}

impl FlagTable {
    /// Panics unless every position is unique and inside `0..WIDTH`.
    /// Tables live in statics, so a malformed one fails to compile.
    pub const fn new(name: &'static str, flags: &'static [Flag]) -> FlagTable {
        let mut i = 0;
        while i < flags.len() {
            assert!(flags[i].position < WIDTH, "flag position outside the word");

            let mut j = i + 1;
            while j < flags.len() {
                assert!(
                    flags[i].position != flags[j].position,
                    "flag positions must be pairwise distinct"
                );
                j += 1;
            }

            i += 1;
        }

        FlagTable { name, flags }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn flags(&self) -> &'static [Flag] {
        self.flags
    }

    /// Looks a flag up by name, ignoring ascii case.
    pub fn get(&self, name: &str) -> Option<Flag> {
        let found = self
            .flags
            .iter()
            .copied()
            .find(|flag| flag.name.eq_ignore_ascii_case(name));

        trace!("{name} resolved to {found:?} in table {}", self.name);

        found
    }

    /// The names of every flag of this table that is set in `set`, in
    /// table order.
    pub fn names(&self, set: FlagSet) -> TinyVec<[&'static str; 4]> {
        self.flags
            .iter()
            .filter(|flag| set.has(flag.mask()))
            .map(|flag| flag.name)
            .collect()
    }
}

impl fmt::Display for FlagTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.flags
                .iter()
                .format_with(", ", |flag, f| f(&format_args!("{}={}", flag.name, flag.position)))
        )
    }
}
