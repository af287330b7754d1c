use clap::{Args, Parser, Subcommand, ValueEnum};
use permask_flags::{FlagTable, CAMERA, PERMISSIONS};
use std::fmt;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Bit-flag permission words from the command line",
    long_about = None,
    flatten_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a flag word and the named flags set in it
    Show(ShowFlags),

    /// Set the named flags in a word
    Grant(EditFlags),

    /// Clear the named flags in a word
    Revoke(EditFlags),

    /// Check whether a word holds a named flag
    Check(CheckFlags),

    /// Flip one bit of a word, by name or by 0-based position
    Toggle(ToggleFlags),

    /// Check whether a number is a power of two
    Pow2(Pow2Flags),

    /// Read-eval-print loop over a single flag word
    Shell(ShellFlags),
}

#[derive(Args, Debug)]
pub struct ShowFlags {
    #[command(flatten)]
    pub table: TableFlag,

    /// The flag word, as an integer
    pub bits: u32,
}

#[derive(Args, Debug)]
pub struct EditFlags {
    #[command(flatten)]
    pub table: TableFlag,

    /// The flag word, as an integer
    pub bits: u32,

    /// Name(s) of the flags to edit
    #[arg(required = true)]
    pub flags: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CheckFlags {
    #[command(flatten)]
    pub table: TableFlag,

    /// The flag word, as an integer
    pub bits: u32,

    /// Name of the flag to check
    pub flag: String,
}

#[derive(Args, Debug)]
pub struct ToggleFlags {
    #[command(flatten)]
    pub table: TableFlag,

    /// The flag word, as an integer
    pub bits: u32,

    /// A flag name, or a 0-based bit position
    ///
    /// A leading digit or `-` is read as a position
    pub flag: String,
}

#[derive(Args, Debug)]
pub struct Pow2Flags {
    /// The number to test
    pub number: i64,
}

#[derive(Args, Debug)]
pub struct ShellFlags {
    #[command(flatten)]
    pub table: TableFlag,

    /// Initial flag word
    ///
    /// Defaults to all flags clear
    pub bits: Option<u32>,
}

#[derive(Args, Debug)]
pub struct TableFlag {
    #[arg(long, value_enum, default_value_t = Table::Permissions)]
    /// Which table of flag names to resolve against
    pub table: Table,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Table {
    Permissions,
    Camera,
}

impl Table {
    pub fn resolve(self) -> &'static FlagTable {
        match self {
            Table::Permissions => &PERMISSIONS,
            Table::Camera => &CAMERA,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.resolve().name())
    }
}
