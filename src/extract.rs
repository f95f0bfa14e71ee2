//! Section extraction.
//!
//! A section is the block of lines under a level-2 heading (`## Title`),
//! ending just before the next level-2 heading or at the end of the body.
//! Deeper headings (`###`) belong to the enclosing section.

/// Parse a line as a level-2 heading and return its trimmed title.
fn heading_title(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("##")?;
    if rest.starts_with('#') {
        return None;
    }
    Some(rest.trim())
}

fn titles_match(heading: &str, wanted: &str) -> bool {
    heading == wanted || heading.to_lowercase() == wanted.to_lowercase()
}

/// Extract the content of the section titled `section_title`.
///
/// The heading match is case-insensitive and ignores surrounding
/// whitespace. The returned content is trimmed. Returns an empty string if
/// no such heading exists. When the heading appears more than once, only
/// the first block is returned.
///
/// # Example
///
/// ```
/// use pr_lint::extract::extract_section;
///
/// let body = "## Summary\nAdds login.\n\n## Testing\n- [x] unit tests\n";
/// assert_eq!(extract_section(body, "summary"), "Adds login.");
/// assert_eq!(extract_section(body, "Testing"), "- [x] unit tests");
/// assert_eq!(extract_section(body, "Risks"), "");
/// ```
pub fn extract_section(body: &str, section_title: &str) -> String {
    let wanted = section_title.trim();
    let mut lines = body.lines();

    if !lines
        .by_ref()
        .any(|line| heading_title(line).is_some_and(|t| titles_match(t, wanted)))
    {
        return String::new();
    }

    let content: Vec<&str> = lines
        .take_while(|line| heading_title(line).is_none())
        .collect();

    content.join("\n").trim().to_string()
}

/// Titles of every level-2 heading in the body, in document order.
///
/// Duplicates are kept so callers can tell when a heading repeats.
pub fn section_headings(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(heading_title)
        .map(str::to_string)
        .collect()
}

/// Number of level-2 headings titled `section_title`, matched the same way
/// [`extract_section`] matches them.
pub fn heading_count(body: &str, section_title: &str) -> usize {
    let wanted = section_title.trim();
    section_headings(body)
        .iter()
        .filter(|heading| titles_match(heading, wanted))
        .count()
}
