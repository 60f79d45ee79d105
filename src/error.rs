// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use thiserror::Error;

/// The error returned when a builder function rejects its input.
///
/// Every validation failure belongs to this single category; failures are
/// distinguished only by their message, which names the offending argument
/// and the received value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    pub(crate) fn new(message: String) -> Self {
        InvalidArgument { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
