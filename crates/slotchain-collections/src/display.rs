//! Arrow-separated rendering shared by the `Display` impls.

use std::fmt;

/// Separator between rendered values.
pub const SEPARATOR: &str = " -> ";

/// Write `values` joined by [`SEPARATOR`]. Nothing is written for an empty
/// sequence.
pub(crate) fn write_chain(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = f64>,
) -> fmt::Result {
    for (i, value) in values.enumerate() {
        if i > 0 {
            f.write_str(SEPARATOR)?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}
