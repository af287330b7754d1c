use itertools::Itertools;
use permask_flags::{FlagSet, FlagTable};

/// Renders a flag word the way the console surface shows it: the raw
/// integer, its binary form, then one line per set named flag.
///
/// The flag logic itself never prints; this is the only place a word
/// becomes text.
pub fn describe(table: &FlagTable, set: FlagSet) -> String {
    let names = table.names(set);

    if names.is_empty() {
        format!("bits: {} ({set})\n  (no {} flags set)", set.bits, table.name())
    } else {
        format!(
            "bits: {} ({set})\n{}",
            set.bits,
            names.iter().format_with("\n", |name, f| f(&format_args!("  + {name}")))
        )
    }
}
