//! Splitting long replies to fit the platform message limit

/// Split `text` into parts of at most `limit` characters
///
/// Each cut prefers the last newline inside the window, then the last space,
/// and only then breaks hard at the limit. Continuation parts lose their
/// leading whitespace.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut parts = Vec::new();
    let mut rest = text;

    while rest.chars().count() > limit {
        let hard = rest
            .char_indices()
            .nth(limit)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let window = &rest[..hard];

        let cut = window
            .rfind('\n')
            .or_else(|| window.rfind(' '))
            .filter(|&i| i > 0)
            .unwrap_or(hard);

        parts.push(rest[..cut].to_string());
        rest = rest[cut..].trim_start();
    }

    if !rest.is_empty() {
        parts.push(rest.to_string());
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(split_message("hola", 4096), vec!["hola"]);
        assert!(split_message("", 10).is_empty());
    }

    #[test]
    fn test_prefers_newline() {
        let parts = split_message("first line\nsecond line", 15);
        assert_eq!(parts, vec!["first line", "second line"]);
    }

    #[test]
    fn test_falls_back_to_space() {
        let parts = split_message("aaaa bbbb cccc", 10);
        assert_eq!(parts, vec!["aaaa bbbb", "cccc"]);
    }

    #[test]
    fn test_hard_cut() {
        let parts = split_message("abcdefghij", 4);
        assert_eq!(parts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let text = "ñ".repeat(10);
        let parts = split_message(&text, 3);
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.chars().count() <= 3));
        assert_eq!(parts.concat(), text);
    }

    #[test]
    fn test_every_part_within_limit() {
        let text = "palabra ".repeat(1500) + &"x".repeat(5000);
        let parts = split_message(&text, 4096);
        assert!(parts.len() >= 3);
        assert!(parts.iter().all(|p| p.chars().count() <= 4096));
        assert!(parts.iter().all(|p| !p.is_empty()));
    }
}
