//! Slug-to-title derivation.

/// Derive a display title from a URL slug.
///
/// Splits on hyphens, uppercases the first character of each word and
/// rejoins with spaces. The remainder of each word is preserved as-is.
/// Pure function: the same slug always yields the same title.
///
/// # Example
///
/// ```
/// use folio_site::title_from_slug;
///
/// assert_eq!(title_from_slug("pamela-chess-engine"), "Pamela Chess Engine");
/// ```
#[must_use]
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_slug() {
        assert_eq!(title_from_slug("pamela-chess-engine"), "Pamela Chess Engine");
    }

    #[test]
    fn test_single_word_slug() {
        assert_eq!(title_from_slug("portfolio"), "Portfolio");
    }

    #[test]
    fn test_word_remainder_preserved() {
        // Only the first character is uppercased; the rest is untouched.
        assert_eq!(title_from_slug("cdl-website"), "Cdl Website");
        assert_eq!(title_from_slug("useR-guide"), "UseR Guide");
    }

    #[test]
    fn test_deterministic() {
        let first = title_from_slug("pamela-chess-engine");
        let second = title_from_slug("pamela-chess-engine");

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_slug() {
        assert_eq!(title_from_slug(""), "");
    }
}
