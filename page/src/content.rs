//! Literal content shown on the placeholder page.
//!
//! Everything here is fixed at build time. The link attributes keep the
//! opened page from reaching back into this window (`noopener`) and from
//! learning where the visitor came from (`noreferrer`).

/// Heading text.
pub const HEADING: &str = "Coming Soon";

/// Paragraph lines, rendered in order with a line break between them.
pub const BODY_LINES: [&str; 2] = [
    "We\u{2019}re working hard to bring you something amazing.",
    "Stay tuned!",
];

/// Visible label of the outbound link.
pub const LINK_LABEL: &str = "Learn More";

/// Outbound link target.
pub const LINK_HREF: &str = "https://github.com/pesu-dev/oauth2";

/// Open the link in a new browsing context.
pub const LINK_TARGET: &str = "_blank";

/// No opener handle, no referrer.
pub const LINK_REL: &str = "noopener noreferrer";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_rel_blocks_opener_and_referrer() {
        let tokens: Vec<&str> = LINK_REL.split_whitespace().collect();
        assert_eq!(tokens, vec!["noopener", "noreferrer"]);
    }

    #[test]
    fn link_points_at_https_target() {
        assert!(LINK_HREF.starts_with("https://"));
        assert_eq!(LINK_TARGET, "_blank");
    }
}
