// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use crate::group::{group, non_capture_group};

/// An inclusive character class: `[set]` matches any single character in
/// the set.
///
/// The set is written directly into the brackets, so ranges work as usual,
/// e.g. `chars("a-z0-9")` is `[a-z0-9]`.
pub fn chars(set: &str) -> String {
    format!("[{}]", set)
}

/// A negated character class: `[^set]` matches any single character NOT in
/// the set.
pub fn non_chars(set: &str) -> String {
    format!("[^{}]", set)
}

/// `([set])`
pub fn group_chars(set: &str) -> String {
    group(&chars(set))
}

/// `(?:[set])`
pub fn noncap_group_chars(set: &str) -> String {
    non_capture_group(&chars(set))
}

/// `([^set])`
pub fn group_non_chars(set: &str) -> String {
    group(&non_chars(set))
}

/// `(?:[^set])`
pub fn noncap_group_non_chars(set: &str) -> String {
    non_capture_group(&non_chars(set))
}
