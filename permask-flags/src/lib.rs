mod set;
pub use set::{is_power_of_two, FlagError, FlagSet, WIDTH};

mod table;
pub use table::{Flag, FlagTable};

mod test_logger;
pub use test_logger::test_logger;

/// Declares one mask constant per flag and the validated static table
/// holding them.
#[macro_export]
macro_rules! flag_table {
    ($(#[$attr:meta])* $table:ident . $table_name:literal {
        $($flag:ident . $name:literal = $position:expr),* $(,)?
    }) => {
        $(
            pub const $flag: $crate::Flag =
                $crate::Flag { name: $name, position: $position };
        )*

        $(#[$attr])*
        pub static $table: $crate::FlagTable =
            $crate::FlagTable::new($table_name, &[$($flag),*]);
    };
}

flag_table! {
    /// The permission bits of the authorization word: what a holder of
    /// the word may do.
    PERMISSIONS . "permissions" {
        READ . "read" = 0,
        WRITE . "write" = 1,
        EXECUTE . "execute" = 2,
        DELETE . "delete" = 3
    }
}

flag_table! {
    /// The camera feature switches packed into one settings word.
    CAMERA . "camera" {
        FLASH . "flash" = 0,
        HDR . "hdr" = 1,
        TIMER . "timer" = 2
    }
}

#[cfg(test)]
mod tests;
