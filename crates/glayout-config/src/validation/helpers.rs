//! Range checks shared by the section validators.

use std::fmt::Display;
use std::ops::RangeInclusive;

/// Push an error if `value` is outside `range`. NaN is always out of range.
pub(crate) fn check_range<T>(
    errors: &mut Vec<String>,
    name: &str,
    value: T,
    range: RangeInclusive<T>,
) where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}
