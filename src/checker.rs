// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use crate::error::InvalidArgument;

// a fragment is blank when it is empty or contains only whitespace
pub fn is_blank(fragment: &str) -> bool {
    fragment.chars().all(char::is_whitespace)
}

/// Rejects a blank fragment.
///
/// Quantifying a blank fragment would produce a pattern that is either
/// malformed (`?`, `{2}`) or meaningless (`\u{20}*`), so the quantifier
/// functions refuse it up front.
pub fn check_fragment(fragment: &str) -> Result<(), InvalidArgument> {
    if is_blank(fragment) {
        Err(InvalidArgument::new(format!(
            "Expect a non-blank pattern fragment, received {:?}.",
            fragment
        )))
    } else {
        Ok(())
    }
}

/// Rejects a capturing group ordinal below 1.
///
/// Group numbering starts at 1; group 0 is the whole match and can not be
/// referenced from within the pattern.
pub fn check_group_number(group_number: usize) -> Result<(), InvalidArgument> {
    if group_number < 1 {
        Err(InvalidArgument::new(format!(
            "Expect a group number equal to or greater than 1, received {}.",
            group_number
        )))
    } else {
        Ok(())
    }
}

/// Rejects a repetition range whose minimum exceeds its maximum.
pub fn check_range(min: usize, max: usize) -> Result<(), InvalidArgument> {
    if min > max {
        Err(InvalidArgument::new(format!(
            "Expect min to be less than or equal to max, received min {} and max {}.",
            min, max
        )))
    } else {
        Ok(())
    }
}

/// Rejects a capture group name that is not identifier-like.
///
/// A valid name consists of letters, numbers and underscores, and does not
/// start with a number. The empty name is also rejected since `(?<>...)`
/// is not valid syntax.
pub fn check_name(name: &str) -> Result<(), InvalidArgument> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(InvalidArgument::new(format!(
            "Expect a group name of letters, numbers and underscores not starting with a number, received {:?}.",
            name
        )))
    }
}
