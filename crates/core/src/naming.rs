//! Translation of Java-style names into managed identifiers.

use crate::error::{BindscopeError, Result};
use std::fmt::Debug;

pub const INVOKER_SUFFIX: &str = "Invoker";
const FIELD_WORD_SEPARATOR: char = '_';

/// Language-specific rules for turning a native (Java) name into a managed one.
pub trait NameTranslator: Send + Sync + Debug {
    /// Short provider name, used in logs.
    fn name(&self) -> &str;

    /// Whether dotted names keep their dots after translation. When `false`
    /// the translated segments are concatenated into a single identifier.
    fn preserve_dots(&self) -> bool;

    /// Translates a single dot-free segment.
    fn translate_segment(&self, segment: &str) -> Result<String>;

    /// Translates a possibly dotted name.
    fn translate(&self, java_name: &str) -> Result<String> {
        if java_name.is_empty() {
            return Err(BindscopeError::invalid_identifier(
                java_name,
                "name must not be empty",
            ));
        }

        if !java_name.contains('.') {
            let translated = self.translate_segment(java_name)?;
            return ensure_valid_identifier(&translated);
        }

        let mut segments = Vec::new();
        for segment in java_name.split('.') {
            if segment.is_empty() {
                return Err(BindscopeError::invalid_identifier(
                    java_name,
                    "empty segment after splitting on '.'",
                ));
            }
            segments.push(ensure_valid_identifier(&self.translate_segment(segment)?)?);
        }

        let separator = if self.preserve_dots() { "." } else { "" };
        Ok(segments.join(separator))
    }

    /// Translates a field name. Underscores separate words, which are
    /// lower-cased and re-capitalized (`MY_FIELD` -> `MyField`).
    fn translate_field(&self, java_name: &str) -> Result<String> {
        if !java_name.contains(FIELD_WORD_SEPARATOR) {
            return self.translate(java_name);
        }

        let mut managed = String::with_capacity(java_name.len());
        for word in java_name
            .split(FIELD_WORD_SEPARATOR)
            .filter(|w| !w.is_empty())
        {
            managed.push_str(&upper_first(&word.to_lowercase()));
        }
        ensure_valid_identifier(&managed).map_err(|_| {
            BindscopeError::invalid_identifier(java_name, "field name has no usable words")
        })
    }
}

/// Upper-cases the first character of every segment and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct PlainTranslator {
    pub preserve_dots: bool,
}

impl Default for PlainTranslator {
    fn default() -> Self {
        Self {
            preserve_dots: true,
        }
    }
}

impl NameTranslator for PlainTranslator {
    fn name(&self) -> &str {
        "Plain"
    }

    fn preserve_dots(&self) -> bool {
        self.preserve_dots
    }

    fn translate_segment(&self, segment: &str) -> Result<String> {
        if segment.is_empty() {
            return Err(BindscopeError::invalid_identifier(
                segment,
                "segment must not be empty",
            ));
        }
        Ok(upper_first(segment))
    }
}

/// The platform convention: like [`PlainTranslator`], but two-letter
/// segments are upper-cased entirely (`android.os` -> `Android.OS`).
#[derive(Debug, Clone, Copy)]
pub struct XamarinTranslator {
    pub upper_case_two_letter_segments: bool,
    pub preserve_dots: bool,
}

impl Default for XamarinTranslator {
    fn default() -> Self {
        Self {
            upper_case_two_letter_segments: true,
            preserve_dots: true,
        }
    }
}

impl NameTranslator for XamarinTranslator {
    fn name(&self) -> &str {
        "Xamarin.Android"
    }

    fn preserve_dots(&self) -> bool {
        self.preserve_dots
    }

    fn translate_segment(&self, segment: &str) -> Result<String> {
        if segment.is_empty() {
            return Err(BindscopeError::invalid_identifier(
                segment,
                "segment must not be empty",
            ));
        }
        if self.upper_case_two_letter_segments && segment.chars().count() == 2 {
            return Ok(segment.to_uppercase());
        }
        Ok(upper_first(segment))
    }
}

pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Checks every dot-separated segment against the Unicode identifier rules
/// (`_` is accepted as a start character).
pub fn ensure_valid_identifier(identifier: &str) -> Result<String> {
    if identifier.is_empty() {
        return Err(BindscopeError::invalid_identifier(
            identifier,
            "managed identifier must not be empty",
        ));
    }

    for segment in identifier.split('.') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return Err(BindscopeError::invalid_identifier(
                identifier,
                "empty segment",
            ));
        };
        if first != '_' && !unicode_ident::is_xid_start(first) {
            return Err(BindscopeError::invalid_identifier(
                identifier,
                format!("'{}' cannot start an identifier", first),
            ));
        }
        if let Some(bad) = chars.find(|c| !unicode_ident::is_xid_continue(*c)) {
            return Err(BindscopeError::invalid_identifier(
                identifier,
                format!("'{}' is not allowed in an identifier", bad),
            ));
        }
    }

    Ok(identifier.to_string())
}

/// Managed name of an interface: the last segment gains an `I` prefix unless
/// it already reads as `I<Upper>...`.
pub fn interface_name(managed: &str) -> String {
    let (prefix, last) = match managed.rsplit_once('.') {
        Some((p, l)) => (Some(p), l),
        None => (None, managed),
    };

    let mut chars = last.chars();
    let already_prefixed =
        chars.next() == Some('I') && chars.next().is_some_and(|c| c.is_uppercase());
    let last = if already_prefixed || last.is_empty() {
        last.to_string()
    } else {
        format!("I{}", last)
    };

    match prefix {
        Some(p) => format!("{}.{}", p, last),
        None => last,
    }
}

/// Appends [`INVOKER_SUFFIX`] to the last path segment of `name`, unless it
/// is already there.
pub fn invoker_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let (prefix, last) = match name.rsplit_once('.') {
        Some((p, l)) => (Some(p), l),
        None => (None, name),
    };
    if last.ends_with(INVOKER_SUFFIX) {
        return name.to_string();
    }

    match prefix {
        Some(p) => format!("{}.{}{}", p, last, INVOKER_SUFFIX),
        None => format!("{}{}", last, INVOKER_SUFFIX),
    }
}

/// Erases generic arguments and array brackets from a type reference
/// (`java.util.List<T>[]` -> `java.util.List`).
pub fn erase_type_reference(type_name: &str) -> &str {
    let end = type_name
        .find(|c| c == '<' || c == '[')
        .unwrap_or(type_name.len());
    type_name[..end].trim()
}

/// Splits `a.b.C` into `("a.b", "C")`. A name without a dot (or starting
/// with one) has no namespace part.
pub fn split_last_segment(full_name: &str) -> (Option<&str>, &str) {
    match full_name.rfind('.') {
        Some(idx) if idx > 0 => (Some(&full_name[..idx]), &full_name[idx + 1..]),
        _ => (None, full_name),
    }
}
