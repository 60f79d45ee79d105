// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

mod alternation;
mod anchor;
mod charclass;
mod checker;
mod error;
mod group;
mod lookaround;
mod quantifier;

pub use alternation::{either, group_either, noncap_group_either};
pub use anchor::{ends_with, starts_and_ends_with, starts_with};
pub use charclass::{
    chars, group_chars, group_non_chars, non_chars, noncap_group_chars, noncap_group_non_chars,
};
pub use error::InvalidArgument;
pub use group::{back_reference, group, name_group, non_capture_group};
pub use lookaround::{lookahead, lookbehind, negative_lookahead, negative_lookbehind};
pub use quantifier::{
    at_least, between, exactly, group_at_least, group_at_most, group_between, group_exactly,
    noncap_group_at_least, noncap_group_at_most, noncap_group_between, noncap_group_exactly,
    one_or_more, one_or_more_group, one_or_more_lazy, one_or_more_lazy_group,
    one_or_more_lazy_noncap_group, one_or_more_noncap_group, optional, optional_group,
    optional_noncap_group, zero_or_more, zero_or_more_group, zero_or_more_lazy,
    zero_or_more_lazy_group, zero_or_more_lazy_noncap_group, zero_or_more_noncap_group,
};

// alternative names for callers who prefer the explicit forms
pub use group::back_reference as back_ref;
pub use lookaround::lookahead as positive_lookahead;
pub use lookaround::lookbehind as positive_lookbehind;
