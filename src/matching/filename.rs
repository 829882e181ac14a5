/// Image filename parsing
///
/// Page images are named `<group>_page_<ordinal><ext>`, where `group` is
/// the global page number and `ordinal` distinguishes multiple crops of
/// the same page. Some extraction tools prefix the group token with
/// "match" (e.g. `match123_page_17.png`); that prefix is accepted and
/// stripped.

/// The key recovered from a well-formed image filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedName {
    /// Global page number shared with catalog rows
    pub group: u32,
    /// Position among candidates for the same page, used only for ordering
    pub ordinal: u32,
}

/// Parse an image filename into its (group, ordinal) key.
///
/// Returns `None` for anything that doesn't fit the expected shape:
/// wrong extension, missing `_page_` separator, or non-decimal tokens.
/// Callers skip such files and keep going.
pub fn parse_image_name(name: &str, ext: &str) -> Option<ParsedName> {
    let stem = name.strip_suffix(ext)?;
    let (prefix, ordinal) = stem.split_once("_page_")?;
    let group = prefix.strip_prefix("match").unwrap_or(prefix);

    Some(ParsedName {
        group: parse_decimal(group)?,
        ordinal: parse_decimal(ordinal)?,
    })
}

/// Strict decimal parse: non-empty, ASCII digits only (no sign, no spaces)
fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_name() {
        let parsed = parse_image_name("5_page_1.png", ".png").unwrap();
        assert_eq!(parsed, ParsedName { group: 5, ordinal: 1 });
    }

    #[test]
    fn test_match_prefix_is_stripped() {
        let parsed = parse_image_name("match123_page_17.png", ".png").unwrap();
        assert_eq!(parsed, ParsedName { group: 123, ordinal: 17 });
    }

    #[test]
    fn test_round_trip_recovers_key() {
        for (group, ordinal) in [(1u32, 1u32), (42, 7), (999, 1000)] {
            let name = format!("{}_page_{}.png", group, ordinal);
            let parsed = parse_image_name(&name, ".png").unwrap();
            assert_eq!(parsed.group, group);
            assert_eq!(parsed.ordinal, ordinal);
        }
    }

    #[test]
    fn test_wrong_extension() {
        assert!(parse_image_name("5_page_1.jpg", ".png").is_none());
    }

    #[test]
    fn test_missing_separator() {
        assert!(parse_image_name("5_1.png", ".png").is_none());
    }

    #[test]
    fn test_non_decimal_tokens() {
        assert!(parse_image_name("cover_page_one.png", ".png").is_none());
        assert!(parse_image_name("5_page_.png", ".png").is_none());
        assert!(parse_image_name("_page_1.png", ".png").is_none());
        assert!(parse_image_name("-5_page_1.png", ".png").is_none());
    }

    #[test]
    fn test_repeated_separator_is_malformed() {
        assert!(parse_image_name("1_page_2_page_3.png", ".png").is_none());
    }
}
