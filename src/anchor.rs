// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

/// Anchors the fragment to the start of the text: `^fragment`.
pub fn starts_with(fragment: &str) -> String {
    format!("^{}", fragment)
}

/// Anchors the fragment to the end of the text: `fragment$`.
pub fn ends_with(fragment: &str) -> String {
    format!("{}$", fragment)
}

/// Anchors the fragment to both ends of the text: `^fragment$`, so the
/// fragment must match the whole text.
pub fn starts_and_ends_with(fragment: &str) -> String {
    format!("^{}$", fragment)
}
