//! Scanner configuration constants.

/// Width, in columns, of one indentation level.
///
/// A line's level is `(blank_count + 1) / TAB_SIZE`; tabs and spaces both
/// count as one blank.
pub const TAB_SIZE: usize = 4;
