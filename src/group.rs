// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use crate::checker::{check_group_number, check_name};
use crate::error::InvalidArgument;

/// Returns a back reference to a previously defined capturing group by its
/// 1-based ordinal, e.g. `\1`.
///
/// The referenced group must have matched earlier in the pattern; the back
/// reference then requires the same text to occur again.
///
/// e.g. text `1234123456` against `(123).?\1` matches `1234123`.
pub fn back_reference(group_number: usize) -> Result<String, InvalidArgument> {
    check_group_number(group_number)?;
    Ok(format!("\\{}", group_number))
}

/// Wraps a fragment in capturing parentheses.
///
/// A quantifier placed after the parentheses applies to the group as a
/// whole, and the text matched by the group becomes a separate item in the
/// match results.
///
/// e.g. text `Gogogo` against `(go)+` matches `gogo`.
pub fn group(fragment: &str) -> String {
    format!("({})", fragment)
}

/// Wraps a fragment in non-capturing parentheses.
///
/// The parentheses group the fragment for quantifying or alternation, but
/// the matched text is not retained in the match results.
pub fn non_capture_group(fragment: &str) -> String {
    format!("(?:{})", fragment)
}

/// Wraps a fragment in a named capturing group, e.g. `(?<num>Go)`.
///
/// The name must consist of letters, numbers and underscores, and must not
/// start with a number. A named group can be accessed by name rather than
/// by ordinal in the match results.
pub fn name_group(name: &str, fragment: &str) -> Result<String, InvalidArgument> {
    check_name(name)?;
    Ok(format!("(?<{}>{})", name, fragment))
}
