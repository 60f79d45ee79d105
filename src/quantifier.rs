// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use crate::checker::{check_fragment, check_range};
use crate::error::InvalidArgument;
use crate::group::{group, non_capture_group};

/// `fragment?`: matches the fragment zero or one time, greedy.
///
/// e.g. text `color colour` against `colou?r` matches both words.
pub fn optional(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}?", fragment))
}

/// `fragment*`: matches the fragment zero or more times, greedy.
pub fn zero_or_more(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}*", fragment))
}

/// `fragment*?`: matches the fragment zero or more times, preferring the
/// shortest match.
pub fn zero_or_more_lazy(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}*?", fragment))
}

/// `fragment+`: matches the fragment one or more times, greedy.
pub fn one_or_more(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}+", fragment))
}

/// `fragment+?`: matches the fragment one or more times, preferring the
/// shortest match.
pub fn one_or_more_lazy(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}+?", fragment))
}

/// `fragment{times}`: matches the fragment exactly `times` times.
///
/// The quantifier binds to the immediately preceding element, so
/// `exactly(2, "go")` is `go{2}`, a `g` followed by two `o`s. Wrap the
/// fragment first (see [`group_exactly`]) to repeat it as a whole.
pub fn exactly(times: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}{{{}}}", fragment, times))
}

/// `fragment{min,max}`: matches the fragment at least `min` and at most
/// `max` times. Fails when `min > max`.
pub fn between(min: usize, max: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    check_range(min, max)?;
    Ok(format!("{}{{{},{}}}", fragment, min, max))
}

/// `fragment{min,}`: matches the fragment `min` or more times.
pub fn at_least(min: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}{{{},}}", fragment, min))
}

// There is no bare `at_most`: the target dialect has no open-lower-bound
// repetition form `{,m}`. Use `between(0, max, ..)`, or `group_at_most` /
// `noncap_group_at_most` which spell the bound as `{0,max}`.

/// `(fragment){times}`: capturing group repeated exactly `times` times.
pub fn group_exactly(times: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}{{{}}}", group(fragment), times))
}

/// `(?:fragment){times}`: non-capturing group repeated exactly `times`
/// times.
pub fn noncap_group_exactly(times: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}{{{}}}", non_capture_group(fragment), times))
}

/// `(fragment){min,max}`: capturing group repeated between `min` and `max`
/// times.
pub fn group_between(min: usize, max: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    check_range(min, max)?;
    Ok(format!("{}{{{},{}}}", group(fragment), min, max))
}

/// `(?:fragment){min,max}`: non-capturing group repeated between `min` and
/// `max` times.
pub fn noncap_group_between(
    min: usize,
    max: usize,
    fragment: &str,
) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    check_range(min, max)?;
    Ok(format!("{}{{{},{}}}", non_capture_group(fragment), min, max))
}

/// `(fragment){min,}`: capturing group repeated `min` or more times.
pub fn group_at_least(min: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}{{{},}}", group(fragment), min))
}

/// `(?:fragment){min,}`: non-capturing group repeated `min` or more times.
pub fn noncap_group_at_least(min: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}{{{},}}", non_capture_group(fragment), min))
}

/// `(fragment){0,max}`: capturing group repeated at most `max` times.
pub fn group_at_most(max: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}{{0,{}}}", group(fragment), max))
}

/// `(?:fragment){0,max}`: non-capturing group repeated at most `max` times.
pub fn noncap_group_at_most(max: usize, fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}{{0,{}}}", non_capture_group(fragment), max))
}

/// `(fragment)*`
pub fn zero_or_more_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}*", group(fragment)))
}

/// `(?:fragment)*`
pub fn zero_or_more_noncap_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}*", non_capture_group(fragment)))
}

/// `(fragment)*?`
pub fn zero_or_more_lazy_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}*?", group(fragment)))
}

/// `(?:fragment)*?`
pub fn zero_or_more_lazy_noncap_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}*?", non_capture_group(fragment)))
}

/// `(fragment)+`
///
/// e.g. text `Gogogo` against `(go)+` matches `gogo`.
pub fn one_or_more_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}+", group(fragment)))
}

/// `(?:fragment)+`
pub fn one_or_more_noncap_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}+", non_capture_group(fragment)))
}

/// `(fragment)+?`
pub fn one_or_more_lazy_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}+?", group(fragment)))
}

/// `(?:fragment)+?`
pub fn one_or_more_lazy_noncap_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}+?", non_capture_group(fragment)))
}

/// `(fragment)?`: capturing group made optional.
pub fn optional_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}?", group(fragment)))
}

/// `(?:fragment)?`: non-capturing group made optional.
pub fn optional_noncap_group(fragment: &str) -> Result<String, InvalidArgument> {
    check_fragment(fragment)?;
    Ok(format!("{}?", non_capture_group(fragment)))
}

#[cfg(test)]
mod tests {
    use super::{
        at_least, between, exactly, group_at_least, group_at_most, group_between, group_exactly,
        noncap_group_at_least, noncap_group_at_most, noncap_group_between, noncap_group_exactly,
        one_or_more, one_or_more_group, one_or_more_lazy, one_or_more_lazy_group,
        one_or_more_lazy_noncap_group, one_or_more_noncap_group, optional, optional_group,
        optional_noncap_group, zero_or_more, zero_or_more_group, zero_or_more_lazy,
        zero_or_more_lazy_group, zero_or_more_lazy_noncap_group, zero_or_more_noncap_group,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_greedy_and_lazy() {
        assert_eq!(optional("go").unwrap(), "go?");
        assert_eq!(zero_or_more("go").unwrap(), "go*");
        assert_eq!(zero_or_more_lazy("go").unwrap(), "go*?");
        assert_eq!(one_or_more("go").unwrap(), "go+");
        assert_eq!(one_or_more_lazy("go").unwrap(), "go+?");
    }

    #[test]
    fn test_counted() {
        assert_eq!(exactly(2, "lo").unwrap(), "lo{2}");
        assert_eq!(between(1, 2, "l").unwrap(), "l{1,2}");
        assert_eq!(between(0, 0, "l").unwrap(), "l{0,0}");
        assert_eq!(at_least(2, "go").unwrap(), "go{2,}");

        // min must not exceed max
        assert!(between(2, 1, "l").is_err());
    }

    #[test]
    fn test_blank_fragment_rejected() {
        assert!(optional("").is_err());
        assert!(zero_or_more("").is_err());
        assert!(one_or_more("").is_err());
        assert!(one_or_more_lazy(" ").is_err());
        assert!(exactly(2, "\t").is_err());
        assert!(between(1, 2, "").is_err());
        assert!(at_least(1, "  ").is_err());
        assert!(group_exactly(2, "").is_err());
        assert!(optional_group(" ").is_err());
    }

    #[test]
    fn test_grouped_counted() {
        assert_eq!(group_exactly(2, "go").unwrap(), "(go){2}");
        assert_eq!(noncap_group_exactly(2, "go").unwrap(), "(?:go){2}");
        assert_eq!(group_between(1, 2, "go").unwrap(), "(go){1,2}");
        assert_eq!(noncap_group_between(1, 2, "go").unwrap(), "(?:go){1,2}");
        assert_eq!(group_at_least(2, "go").unwrap(), "(go){2,}");
        assert_eq!(noncap_group_at_least(2, "go").unwrap(), "(?:go){2,}");
        assert_eq!(group_at_most(3, "go").unwrap(), "(go){0,3}");
        assert_eq!(noncap_group_at_most(3, "go").unwrap(), "(?:go){0,3}");

        assert!(group_between(2, 1, "go").is_err());
        assert!(noncap_group_between(2, 1, "go").is_err());
    }

    #[test]
    fn test_grouped_greedy_and_lazy() {
        assert_eq!(zero_or_more_group("go").unwrap(), "(go)*");
        assert_eq!(zero_or_more_noncap_group("go").unwrap(), "(?:go)*");
        assert_eq!(zero_or_more_lazy_group("go").unwrap(), "(go)*?");
        assert_eq!(zero_or_more_lazy_noncap_group("go").unwrap(), "(?:go)*?");
        assert_eq!(one_or_more_group("go").unwrap(), "(go)+");
        assert_eq!(one_or_more_noncap_group("go").unwrap(), "(?:go)+");
        assert_eq!(one_or_more_lazy_group("go").unwrap(), "(go)+?");
        assert_eq!(one_or_more_lazy_noncap_group("go").unwrap(), "(?:go)+?");
        assert_eq!(optional_group("go").unwrap(), "(go)?");
        assert_eq!(optional_noncap_group("go").unwrap(), "(?:go)?");
    }

    #[test]
    fn test_one_or_more_group_end_to_end() {
        let pattern = one_or_more_group("go").unwrap();
        assert_eq!(pattern, "(go)+");

        let re = fancy_regex::Regex::new(&pattern).unwrap();
        let m = re.find("Gogogo").unwrap().unwrap();
        assert_eq!(m.as_str(), "gogo");
    }

    #[test]
    fn test_lazy_end_to_end() {
        // greedy takes the longest repetition, lazy the shortest
        // non-empty match at the same position
        let greedy = fancy_regex::Regex::new(&one_or_more("o").unwrap()).unwrap();
        assert_eq!(greedy.find("good").unwrap().unwrap().as_str(), "oo");

        let lazy = fancy_regex::Regex::new(&one_or_more_lazy("o").unwrap()).unwrap();
        assert_eq!(lazy.find("good").unwrap().unwrap().as_str(), "o");
    }

    #[test]
    fn test_between_end_to_end() {
        let pattern = between(1, 2, "l").unwrap();

        let re = fancy_regex::Regex::new(&pattern).unwrap();
        assert_eq!(re.find("hello").unwrap().unwrap().as_str(), "ll");
        assert_eq!(re.find("helo").unwrap().unwrap().as_str(), "l");
    }
}
