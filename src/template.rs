//! `%` placeholder substitution shared by the template, search and move commands.
//!
//! A placeholder is `%` followed by a name: `%f`, `%n` and `%x` for the file,
//! `%0`, `%1`, ... and `%name` for regex capture groups. Doubling the percent
//! sign escapes it, so `%%n` renders as the literal text `%n`.

use regex::Regex;

use crate::file::PathEntity;

/// Replaces every unescaped `%name` in `text` with `value`.
///
/// Occurrences are replaced left to right without overlapping. An occurrence
/// preceded by `%` is escaped: the escaping `%` is kept and the token's own
/// `%` is dropped, so `%%name` becomes `%name`.
///
/// # Example
/// ```
/// use rena::template::percent_replace;
///
/// assert_eq!(percent_replace("%n.mp4", "n", "movie"), "movie.mp4");
/// assert_eq!(percent_replace("%%n.mp4", "n", "movie"), "%n.mp4");
/// ```
pub fn percent_replace(text: &str, name: &str, value: &str) -> String {
    let token = format!("%{name}");
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(&token) {
        let (before, after) = rest.split_at(pos);
        result.push_str(before);
        if before.ends_with('%') {
            result.push_str(name);
        } else {
            result.push_str(value);
        }
        rest = &after[token.len()..];
    }
    result.push_str(rest);
    result
}

/// Renders the file placeholders `%f` (full name), `%n` (stem) and `%x`
/// (extension without the dot), in that order.
pub fn expand_file_placeholders(template: &str, file: &PathEntity) -> String {
    let result = percent_replace(template, "f", &file.full_name());
    let result = percent_replace(&result, "n", &file.name);
    percent_replace(&result, "x", file.extension())
}

/// Substitutes the capture groups of the first match of `re` in `haystack`
/// into `template`.
///
/// Positional groups come first, `%0` being the whole match. Groups that did
/// not participate or matched nothing are left alone. Named groups follow and
/// render as empty text when they did not participate. Without a match the
/// template is returned unchanged.
pub fn substitute_captures(template: &str, re: &Regex, haystack: &str) -> String {
    let Some(captures) = re.captures(haystack) else {
        return template.to_string();
    };

    let mut result = template.to_string();
    for (index, group) in captures.iter().enumerate() {
        if let Some(group) = group.filter(|m| !m.is_empty()) {
            result = percent_replace(&result, &index.to_string(), group.as_str());
        }
    }

    for name in re.capture_names().flatten() {
        let value = captures.name(name).map_or("", |m| m.as_str());
        result = percent_replace(&result, name, value);
    }
    result
}
