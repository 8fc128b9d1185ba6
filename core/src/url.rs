//! URL scoring, selection, and escaping.

/// Scores a candidate URL; lower is preferred.
///
/// A URL that points at a whole page scores `0`, one that carries a
/// `#fragment` scores `1`.
///
/// # Examples
///
/// ```
/// use api_index_core::score_url;
///
/// assert_eq!(score_url("objects.htm"), 0);
/// assert_eq!(score_url("objects.htm#simGetObject"), 1);
/// ```
pub fn score_url(url: &str) -> u8 {
    u8::from(url.contains('#'))
}

/// Picks the canonical URL among candidates.
///
/// The lowest [`score_url`] wins; ties go to the lexicographically smallest
/// URL. Returns `None` for an empty candidate set. The result does not depend
/// on iteration order.
///
/// # Examples
///
/// ```
/// use api_index_core::select_canonical_url;
///
/// let picked = select_canonical_url(["a/b.htm#frag", "a/b.htm"]);
/// assert_eq!(picked, Some("a/b.htm"));
///
/// let picked = select_canonical_url(["z.htm#1", "a.htm#1"]);
/// assert_eq!(picked, Some("a.htm#1"));
/// ```
pub fn select_canonical_url<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .min_by(|a, b| score_url(a).cmp(&score_url(b)).then_with(|| a.cmp(b)))
}

/// Doubles every backslash so the URL survives inside a quoted C string.
///
/// # Examples
///
/// ```
/// use api_index_core::escape_backslashes;
///
/// assert_eq!(escape_backslashes(r"a\b.htm"), r"a\\b.htm");
/// ```
pub fn escape_backslashes(url: &str) -> String {
    url.replace('\\', "\\\\")
}

/// Reverses [`escape_backslashes`].
///
/// A lone trailing backslash is kept as-is.
pub fn unescape_backslashes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&'\\') {
            chars.next();
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_beats_fragment_url() {
        assert_eq!(
            select_canonical_url(["a/b.htm", "a/b.htm#frag"]),
            Some("a/b.htm")
        );
        assert_eq!(
            select_canonical_url(["zzz.htm", "aaa.htm#frag"]),
            Some("zzz.htm")
        );
    }

    #[test]
    fn test_fragment_ties_break_lexicographically() {
        assert_eq!(
            select_canonical_url(["z.htm#1", "a.htm#1"]),
            Some("a.htm#1")
        );
        assert_eq!(
            select_canonical_url(["a.htm#b", "a.htm#a", "b.htm#a"]),
            Some("a.htm#a")
        );
    }

    #[test]
    fn test_selection_ignores_input_order() {
        let forward = ["c.htm#x", "b.htm", "a.htm#y", "d.htm"];
        let mut reversed = forward;
        reversed.reverse();
        assert_eq!(select_canonical_url(forward), Some("b.htm"));
        assert_eq!(select_canonical_url(reversed), Some("b.htm"));
    }

    #[test]
    fn test_empty_candidates_select_nothing() {
        assert_eq!(select_canonical_url(std::iter::empty::<&str>()), None);
    }

    #[test]
    fn test_escape_leaves_plain_urls_untouched() {
        assert_eq!(escape_backslashes("en/objects.htm#x"), "en/objects.htm#x");
        assert_eq!(escape_backslashes(r"a\\b"), r"a\\\\b");
    }

    #[test]
    fn test_unescape_reverses_escape() {
        for url in [r"a\b.htm", r"dir\sub\page.htm#frag", "plain.htm", r"\\"] {
            assert_eq!(unescape_backslashes(&escape_backslashes(url)), url);
        }
    }

    #[test]
    fn test_unescape_keeps_lone_backslash() {
        assert_eq!(unescape_backslashes(r"a\"), r"a\");
    }
}
