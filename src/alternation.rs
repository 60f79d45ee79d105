// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use crate::checker::check_fragment;
use crate::error::InvalidArgument;
use crate::group::{group, non_capture_group};

/// Joins fragments with `|`, e.g. `Go|go`.
///
/// No group is introduced. Alternation has the lowest precedence of any
/// regex operator, so each alternative extends to whatever boundary the
/// surrounding pattern establishes; wrap the result in a group (or use
/// [`group_either`] / [`noncap_group_either`]) when isolation is required.
///
/// The engine tries alternatives left to right, so at a given position the
/// earliest listed fragment wins.
///
/// e.g. text `GgGoogle` against `Go|go` matches `Go`.
pub fn either(fragments: &[&str]) -> String {
    fragments.join("|")
}

/// The alternation of the fragments wrapped in a capturing group,
/// e.g. `(Go|go)`.
///
/// Every fragment must be non-blank.
pub fn group_either(fragments: &[&str]) -> Result<String, InvalidArgument> {
    for fragment in fragments {
        check_fragment(fragment)?;
    }
    Ok(group(&fragments.join("|")))
}

/// The alternation of the fragments wrapped in a non-capturing group,
/// e.g. `(?:Go|go)`.
///
/// Every fragment must be non-blank.
pub fn noncap_group_either(fragments: &[&str]) -> Result<String, InvalidArgument> {
    for fragment in fragments {
        check_fragment(fragment)?;
    }
    Ok(non_capture_group(&fragments.join("|")))
}
