/// Result rendering helpers.
///
/// Turns evaluated scalars into the fixed-precision text shown to users.
pub mod format;
