//! Locale path segments: parsing `/xx/...` and rewriting it for a new locale.
//!
//! A leading segment counts as a locale when it is exactly two lowercase ASCII
//! letters followed by `/`. This is a shape check, not a membership check, so a
//! real route such as `/ab/...` is read as locale `ab`. `parse_known` is the
//! stricter reading that only accepts members of the supported set.

use crate::locale::supported::SupportedLocales;

/// A path split into its optional leading locale segment and the remainder.
///
/// `rest` keeps its leading `/` when there was one, so
/// `"/en/resume"` parses to `{ locale_segment: Some("en"), rest: "/resume" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalePath<'a> {
    pub locale_segment: Option<&'a str>,
    pub rest: &'a str,
}

impl<'a> LocalePath<'a> {
    pub fn parse(path: &'a str) -> Self {
        match split_first_segment(path) {
            Some((segment, rest)) if is_locale_shaped(segment) && rest.starts_with('/') => {
                LocalePath {
                    locale_segment: Some(segment),
                    rest,
                }
            }
            _ => LocalePath::unlocalized(path),
        }
    }

    /// Like `parse`, but the leading segment must be a supported locale. The
    /// segment may also end the path (`/en`).
    pub fn parse_known(path: &'a str, supported: &SupportedLocales) -> Self {
        match split_first_segment(path) {
            Some((segment, rest)) if supported.contains(segment) => LocalePath {
                locale_segment: Some(segment),
                rest,
            },
            _ => LocalePath::unlocalized(path),
        }
    }

    fn unlocalized(path: &'a str) -> Self {
        LocalePath {
            locale_segment: None,
            rest: path,
        }
    }

    /// Rebuilds the path under `locale`.
    pub fn with_locale(&self, locale: &str) -> String {
        if self.rest.starts_with('/') {
            format!("/{locale}{}", self.rest)
        } else {
            format!("/{locale}/{}", self.rest)
        }
    }
}

/// Replaces the locale segment of `current_path` with `new_locale`, or
/// prefixes `new_locale` when there is none.
///
/// `new_locale` is not validated here; the resolver handles that on the next
/// request. Applying the same switch twice yields the same path.
pub fn switched_path(current_path: &str, new_locale: &str) -> String {
    // Already under `new_locale`, whatever its shape ("pt-BR", "zh/").
    if let Some(rest) = current_path
        .strip_prefix('/')
        .and_then(|p| p.strip_prefix(new_locale))
        .filter(|rest| rest.starts_with('/'))
    {
        return format!("/{new_locale}{rest}");
    }

    LocalePath::parse(current_path).with_locale(new_locale)
}

/// `"/en/resume"` -> `("en", "/resume")`, `"/en"` -> `("en", "")`.
fn split_first_segment(path: &str) -> Option<(&str, &str)> {
    let after = path.strip_prefix('/')?;
    let end = after.find('/').unwrap_or(after.len());
    Some(after.split_at(end))
}

fn is_locale_shaped(segment: &str) -> bool {
    segment.len() == 2 && segment.bytes().all(|b| b.is_ascii_lowercase())
}
