pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::strip_prefix_ci;

    #[test]
    fn strips_regardless_of_case() {
        assert_eq!(strip_prefix_ci("AIR ba", "air "), Some("ba"));
        assert_eq!(strip_prefix_ci("ai", "air "), None);
        assert_eq!(strip_prefix_ci("é", "a"), None);
    }
}
