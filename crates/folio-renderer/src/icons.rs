//! Inline SVG glyphs used by the page fragments.

/// Closed eye, shown next to anonymous supporters.
pub const EYE_CLOSED: &str = concat!(
    r#"<svg class="icon icon-eye-closed" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" "#,
    r#"fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#,
    r#"<path d="m15 18-.722-3.25"/><path d="M2 8a10.645 10.645 0 0 0 20 0"/><path d="m20 15-1.726-2.05"/>"#,
    r#"<path d="m4 15 1.726-2.05"/><path d="m9 18 .722-3.25"/></svg>"#,
);

/// Solana mark, used as the SOL currency symbol.
pub const SOLANA: &str = concat!(
    r#"<svg class="currency-glyph currency-sol" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 398 312" "#,
    r#"fill="currentColor" role="img" aria-label="SOL">"#,
    r#"<path d="M64.6 237.9a14.5 14.5 0 0 1 10.3-4.3h317.4c6.5 0 9.7 7.8 5.1 12.4l-62.7 62.7a14.5 14.5 0 0 1-10.3 4.3H7.1c-6.5 0-9.7-7.8-5.1-12.4z"/>"#,
    r#"<path d="M64.6 3.8A14.9 14.9 0 0 1 74.9-.5h317.4c6.5 0 9.7 7.8 5.1 12.4l-62.7 62.7a14.5 14.5 0 0 1-10.3 4.3H7.1c-6.5 0-9.7-7.8-5.1-12.4z"/>"#,
    r#"<path d="M333.1 120.1a14.5 14.5 0 0 0-10.3-4.3H5.4c-6.5 0-9.7 7.8-5.1 12.4l62.7 62.7a14.5 14.5 0 0 0 10.3 4.3h317.4c6.5 0 9.7-7.8 5.1-12.4z"/>"#,
    r#"</svg>"#,
);
