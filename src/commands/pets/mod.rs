//! Pet-log commands: browsing the pet list and keeping a record of obtained pets.

pub mod obtained;
pub mod random;
pub mod record;
pub mod view_all;

use crate::error::CommandError;

/// Parses a comma separated id list such as `"1, 2, 3"`.
///
/// Whitespace is ignored anywhere and empty segments (`"1,,2"`, a trailing comma) are
/// skipped. Any other non-integer segment rejects the whole list.
pub fn parse_pet_ids(raw: &str) -> Result<Vec<i64>, CommandError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<i64>()
                .map_err(|_| CommandError::InvalidInput(format!("`{segment}` is not a pet id")))
        })
        .collect()
}
