//! Utility classes and CSS for the placeholder page.
//!
//! Each element on the page carries a [`ClassSet`]: an ordered list of
//! utility tokens, each scoped by a [`Variant`] (plain, `sm:` breakpoint,
//! `dark:` theme, `hover:` state). The class attribute is composed from the
//! set, and [`compile_css`] turns the same sets into plain CSS so the
//! rendered document is styled without any external CSS toolchain.
//!
//! # Example
//!
//! ```rust
//! use coming_soon_page::styles::{compile_css, HEADING};
//!
//! assert!(HEADING.class_name().contains("sm:text-5xl"));
//!
//! let css = compile_css(&[HEADING]).unwrap();
//! assert!(css.contains(".sm\\:text-5xl"));
//! ```

use thiserror::Error;

/// Viewport width where the `sm:` variant kicks in.
pub const SMALL_BREAKPOINT: &str = "640px";

/// Scope of a utility token.
///
/// The declaration order is also the order rules are emitted in, so later
/// variants win over earlier ones at equal specificity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// Always applies
    Base,
    /// Pointer hover
    Hover,
    /// Viewports at least [`SMALL_BREAKPOINT`] wide
    Small,
    /// `prefers-color-scheme: dark`
    Dark,
    /// Pointer hover under a dark color scheme
    DarkHover,
}

impl Variant {
    /// Class-name prefix for this variant.
    pub fn prefix(self) -> &'static str {
        match self {
            Variant::Base => "",
            Variant::Hover => "hover:",
            Variant::Small => "sm:",
            Variant::Dark => "dark:",
            Variant::DarkHover => "dark:hover:",
        }
    }

    fn pseudo_class(self) -> &'static str {
        match self {
            Variant::Hover | Variant::DarkHover => ":hover",
            _ => "",
        }
    }
}

/// Ordered utility tokens for one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassSet {
    entries: &'static [(Variant, &'static str)],
}

impl ClassSet {
    /// Build a class set from `(variant, token)` pairs.
    pub const fn new(entries: &'static [(Variant, &'static str)]) -> Self {
        Self { entries }
    }

    /// Iterate the `(variant, token)` pairs in declaration order.
    pub fn tokens(&self) -> impl Iterator<Item = (Variant, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Space-separated value for a `class` attribute.
    pub fn class_name(&self) -> String {
        self.tokens()
            .map(|(variant, token)| format!("{}{}", variant.prefix(), token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

use Variant::{Base, Dark, DarkHover, Hover, Small};

/// Full-height centered container with a themed background.
pub const CONTAINER: ClassSet = ClassSet::new(&[
    (Base, "flex"),
    (Base, "flex-col"),
    (Base, "items-center"),
    (Base, "justify-center"),
    (Base, "min-h-screen"),
    (Base, "bg-white"),
    (Dark, "bg-black"),
    (Base, "px-4"),
]);

/// Page heading.
pub const HEADING: ClassSet = ClassSet::new(&[
    (Base, "text-4xl"),
    (Small, "text-5xl"),
    (Base, "font-bold"),
    (Base, "text-gray-900"),
    (Dark, "text-gray-100"),
    (Base, "mb-4"),
    (Base, "text-center"),
]);

/// Body paragraph.
pub const PARAGRAPH: ClassSet = ClassSet::new(&[
    (Base, "text-lg"),
    (Small, "text-xl"),
    (Base, "text-gray-600"),
    (Dark, "text-gray-300"),
    (Base, "mb-8"),
    (Base, "text-center"),
    (Base, "max-w-xl"),
]);

/// Row holding the outbound link.
pub const ACTIONS: ClassSet = ClassSet::new(&[(Base, "flex"), (Base, "gap-4")]);

/// Pill-shaped outbound link.
pub const LINK: ClassSet = ClassSet::new(&[
    (Base, "rounded-full"),
    (Base, "border"),
    (Base, "border-gray-300"),
    (Dark, "border-gray-700"),
    (Base, "px-6"),
    (Base, "py-2"),
    (Base, "font-medium"),
    (Base, "text-gray-700"),
    (Dark, "text-gray-200"),
    (Hover, "bg-gray-100"),
    (DarkHover, "bg-gray-800"),
    (Base, "transition"),
]);

/// Every class set rendered on the page, outermost first.
pub const PAGE_CLASSES: [ClassSet; 5] = [CONTAINER, HEADING, PARAGRAPH, ACTIONS, LINK];

/// Minimal reset applied before the utilities.
pub const RESET_CSS: &str = r#"*, *::before, *::after {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
    border: 0 solid;
}

html {
    line-height: 1.5;
    -webkit-text-size-adjust: 100%;
    font-family: ui-sans-serif, system-ui, sans-serif, "Apple Color Emoji", "Segoe UI Emoji";
}

a {
    color: inherit;
    text-decoration: inherit;
}
"#;

const TRANSITION: &str = "transition-property: color, background-color, border-color, \
text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter; \
transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1); transition-duration: 150ms;";

/// Known utility tokens and their declarations.
const UTILITIES: &[(&str, &str)] = &[
    // layout
    ("flex", "display: flex;"),
    ("flex-col", "flex-direction: column;"),
    ("items-center", "align-items: center;"),
    ("justify-center", "justify-content: center;"),
    ("min-h-screen", "min-height: 100vh;"),
    ("max-w-xl", "max-width: 36rem;"),
    ("gap-4", "gap: 1rem;"),
    // spacing
    ("px-4", "padding-left: 1rem; padding-right: 1rem;"),
    ("px-6", "padding-left: 1.5rem; padding-right: 1.5rem;"),
    ("py-2", "padding-top: 0.5rem; padding-bottom: 0.5rem;"),
    ("mb-4", "margin-bottom: 1rem;"),
    ("mb-8", "margin-bottom: 2rem;"),
    // typography
    ("text-lg", "font-size: 1.125rem; line-height: 1.75rem;"),
    ("text-xl", "font-size: 1.25rem; line-height: 1.75rem;"),
    ("text-4xl", "font-size: 2.25rem; line-height: 2.5rem;"),
    ("text-5xl", "font-size: 3rem; line-height: 1;"),
    ("font-medium", "font-weight: 500;"),
    ("font-bold", "font-weight: 700;"),
    ("text-center", "text-align: center;"),
    // color
    ("bg-white", "background-color: #ffffff;"),
    ("bg-black", "background-color: #000000;"),
    ("bg-gray-100", "background-color: #f3f4f6;"),
    ("bg-gray-800", "background-color: #1f2937;"),
    ("text-gray-100", "color: #f3f4f6;"),
    ("text-gray-200", "color: #e5e7eb;"),
    ("text-gray-300", "color: #d1d5db;"),
    ("text-gray-600", "color: #4b5563;"),
    ("text-gray-700", "color: #374151;"),
    ("text-gray-900", "color: #111827;"),
    // borders
    ("rounded-full", "border-radius: 9999px;"),
    ("border", "border-width: 1px; border-style: solid;"),
    ("border-gray-300", "border-color: #d1d5db;"),
    ("border-gray-700", "border-color: #374151;"),
    // motion
    ("transition", TRANSITION),
];

/// Errors raised while compiling utility classes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// The token has no CSS definition.
    #[error("unknown utility class `{0}`")]
    UnknownUtility(String),
}

/// CSS declarations for a bare utility token, if it is known.
pub fn declarations(token: &str) -> Option<&'static str> {
    UTILITIES
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, decl)| *decl)
}

fn escape_class(class: &str) -> String {
    class.replace(':', "\\:")
}

fn rule(variant: Variant, token: &str, decl: &str) -> String {
    let class = format!("{}{}", variant.prefix(), token);
    format!(
        ".{}{} {{ {} }}",
        escape_class(&class),
        variant.pseudo_class(),
        decl
    )
}

/// Compile the given class sets into plain CSS.
///
/// Each distinct `(variant, token)` pair yields one rule. Plain and hover
/// rules come first, then the `sm` breakpoint block, then the dark-scheme
/// block. Tokens without a definition are rejected.
pub fn compile_css(sets: &[ClassSet]) -> Result<String, StyleError> {
    let mut seen: Vec<(Variant, &'static str)> = Vec::new();
    for set in sets {
        for entry in set.tokens() {
            if !seen.contains(&entry) {
                seen.push(entry);
            }
        }
    }
    // stable: keeps first-appearance order within a variant
    seen.sort_by_key(|(variant, _)| *variant);

    let mut top = Vec::new();
    let mut small = Vec::new();
    let mut dark = Vec::new();
    for (variant, token) in seen {
        let decl =
            declarations(token).ok_or_else(|| StyleError::UnknownUtility(token.to_string()))?;
        let line = rule(variant, token, decl);
        match variant {
            Base | Hover => top.push(line),
            Small => small.push(line),
            Dark | DarkHover => dark.push(line),
        }
    }

    let mut css = top.join("\n");
    css.push('\n');
    push_media(
        &mut css,
        &format!("(min-width: {})", SMALL_BREAKPOINT),
        &small,
    );
    push_media(&mut css, "(prefers-color-scheme: dark)", &dark);
    Ok(css)
}

fn push_media(css: &mut String, query: &str, rules: &[String]) {
    if rules.is_empty() {
        return;
    }
    css.push_str(&format!("\n@media {} {{\n", query));
    for rule in rules {
        css.push_str("    ");
        css.push_str(rule);
        css.push('\n');
    }
    css.push_str("}\n");
}

/// The reset plus compiled utilities for every class on the page.
///
/// Every token in [`PAGE_CLASSES`] has a definition in the utility table, so
/// compilation cannot fail here. Should a token ever lose its definition the
/// error is emitted as a CSS comment and the markup still renders unstyled.
pub fn page_stylesheet() -> String {
    let utilities = compile_css(&PAGE_CLASSES).unwrap_or_else(|e| format!("/* {} */\n", e));
    format!("{}\n{}", RESET_CSS, utilities)
}

#[cfg(test)]
mod tests {
    use super::Variant::{Base, Dark};
    use super::*;

    #[test]
    fn class_names_match_element_tokens() {
        assert_eq!(
            CONTAINER.class_name(),
            "flex flex-col items-center justify-center min-h-screen bg-white dark:bg-black px-4"
        );
        assert_eq!(
            HEADING.class_name(),
            "text-4xl sm:text-5xl font-bold text-gray-900 dark:text-gray-100 mb-4 text-center"
        );
        assert_eq!(
            PARAGRAPH.class_name(),
            "text-lg sm:text-xl text-gray-600 dark:text-gray-300 mb-8 text-center max-w-xl"
        );
        assert_eq!(ACTIONS.class_name(), "flex gap-4");
        assert_eq!(
            LINK.class_name(),
            "rounded-full border border-gray-300 dark:border-gray-700 px-6 py-2 font-medium \
             text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-800 transition"
        );
    }

    #[test]
    fn every_page_token_has_css() {
        for set in PAGE_CLASSES {
            for (_, token) in set.tokens() {
                assert!(declarations(token).is_some(), "missing utility {token}");
            }
        }
        assert!(compile_css(&PAGE_CLASSES).is_ok());
    }

    #[test]
    fn unknown_token_is_rejected() {
        const BOGUS: ClassSet = ClassSet::new(&[(Base, "flex"), (Dark, "glow-9000")]);
        assert_eq!(
            compile_css(&[BOGUS]),
            Err(StyleError::UnknownUtility("glow-9000".into()))
        );
    }

    #[test]
    fn variants_land_in_their_blocks() {
        let css = compile_css(&PAGE_CLASSES).unwrap();

        let small_at = css.find("@media (min-width: 640px)").unwrap();
        let dark_at = css.find("@media (prefers-color-scheme: dark)").unwrap();
        assert!(small_at < dark_at);

        let sm_rule = css.find(".sm\\:text-5xl {").unwrap();
        assert!(sm_rule > small_at && sm_rule < dark_at);

        let dark_bg = css.find(".dark\\:bg-black {").unwrap();
        assert!(dark_bg > dark_at);

        let hover = css.find(".hover\\:bg-gray-100:hover {").unwrap();
        assert!(hover < small_at);

        let dark_hover = css.find(".dark\\:hover\\:bg-gray-800:hover {").unwrap();
        assert!(dark_hover > dark_bg);
    }

    #[test]
    fn shared_tokens_emit_once() {
        let css = compile_css(&PAGE_CLASSES).unwrap();
        assert_eq!(css.matches(".flex {").count(), 1);
        assert_eq!(css.matches(".text-center {").count(), 1);
    }

    #[test]
    fn no_media_block_without_variants() {
        let css = compile_css(&[ACTIONS]).unwrap();
        assert!(!css.contains("@media"));
        assert!(css.contains(".gap-4 { gap: 1rem; }"));
    }

    #[test]
    fn page_stylesheet_has_no_fallback_comment() {
        let css = page_stylesheet();
        assert!(!css.contains("/*"));
        for set in PAGE_CLASSES {
            for (variant, token) in set.tokens() {
                let selector = format!(".{}", escape_class(&format!("{}{}", variant.prefix(), token)));
                assert!(css.contains(&selector), "missing rule for {selector}");
            }
        }
    }

    #[test]
    fn stylesheet_is_deterministic() {
        let first = page_stylesheet();
        assert!(first.starts_with(RESET_CSS));
        assert!(!first.contains("/* unknown"));
        assert_eq!(first, page_stylesheet());
    }
}
