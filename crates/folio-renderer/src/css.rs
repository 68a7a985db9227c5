use crate::theme::{ColorScheme, Theme};

fn color_variables(colors: &ColorScheme) -> String {
    format!(
        r#"    --color-base: {};
    --color-text: {};
    --color-muted: {};
    --color-surface: {};
    --color-border: {};
    --color-link: {};
    --color-link-hover: {};
    --color-success: {};
"#,
        colors.background,
        colors.foreground,
        colors.muted,
        colors.surface,
        colors.border,
        colors.link,
        colors.link_hover,
        colors.success,
    )
}

pub fn generate_base_css(theme: &Theme) -> String {
    let fonts = &theme.fonts;
    let spacing = &theme.spacing;

    format!(
        r#"/* CSS Reset */
*, *::before, *::after {{
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}}

/* CSS Variables - Light Mode (default) */
:root {{
{}
    --font-body: {};
    --font-heading: {};
    --font-mono: {};

    --spacing-base: {};
    --spacing-line-height: {};
    --content-width: {};
}}

/* CSS Variables - Dark Mode */
@media (prefers-color-scheme: dark) {{
    :root {{
{}    }}
}}

/* Base Styles */
html {{
    font-size: var(--spacing-base);
    line-height: var(--spacing-line-height);
}}

body {{
    font-family: var(--font-body);
    color: var(--color-text);
    background-color: var(--color-base);
}}

main {{
    max-width: var(--content-width);
    margin: 0 auto;
    padding: 1.5rem 1rem;
}}

h1, h2, h3 {{
    font-family: var(--font-heading);
    line-height: 1.2;
}}

h1 {{ font-size: 2.25rem; }}
h3 {{ font-size: 1.25rem; margin-bottom: 1rem; }}

a {{
    color: var(--color-link);
    text-decoration: none;
}}

a:hover {{
    color: var(--color-link-hover);
    text-decoration: underline;
}}

code {{
    font-family: var(--font-mono);
    background: var(--color-surface);
    padding: 0.125rem 0.25rem;
    border-radius: 4px;
}}

/* Author layout */
.page-header {{
    padding: 1.5rem 0 2rem;
    border-bottom: 1px solid var(--color-border);
}}

.author {{
    display: flex;
    flex-wrap: wrap;
    gap: 2rem;
    padding-top: 2rem;
}}

.author-card {{
    display: flex;
    flex-direction: column;
    align-items: center;
    flex: 0 0 14rem;
}}

.author-avatar {{
    width: 12rem;
    height: 12rem;
    border-radius: 50%;
    object-fit: cover;
}}

.author-name {{
    padding-top: 1rem;
    font-size: 1.5rem;
}}

.author-occupation, .author-company {{
    color: var(--color-muted);
}}

.social-links {{
    display: flex;
    gap: 0.75rem;
    padding-top: 1rem;
    list-style: none;
}}

.author-body {{
    flex: 1 1 20rem;
    min-width: 0;
}}

.author-body p {{
    margin-bottom: 1rem;
}}

/* Support */
.support-me {{
    display: flex;
    flex-direction: column;
    gap: 2rem;
    padding-top: 2rem;
}}

.support-channels {{
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 1.5rem;
}}

.support-channel {{
    display: flex;
    flex-direction: column;
    align-items: center;
}}

.support-channel img {{
    width: auto;
}}

.support-channel p {{
    margin-top: 0.5rem;
    font-size: 0.875rem;
    color: var(--color-muted);
}}

.supporters ul {{
    list-style: disc;
    padding-left: 1.25rem;
}}

.supporters li {{
    font-size: 0.875rem;
    margin-bottom: 0.5rem;
}}

.supporters li > span + span {{
    margin-left: 0.5rem;
}}

.supporter-date, .supporter-via {{
    color: var(--color-muted);
}}

.supporter-name, .supporter-amount {{
    font-weight: 500;
}}

.supporter-anonymous {{
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.125rem 0.5rem;
    border-radius: 4px;
    background: var(--color-surface);
    color: var(--color-muted);
    font-size: 0.75rem;
    font-weight: 600;
}}

.supporter-amount {{
    color: var(--color-success);
}}

.supporter-message {{
    font-style: italic;
    color: var(--color-muted);
}}

.currency-glyph {{
    display: inline-block;
    width: 1rem;
    height: 1rem;
    margin-right: 2px;
    margin-top: -2px;
    vertical-align: middle;
}}
"#,
        color_variables(&theme.colors),
        fonts.body,
        fonts.heading,
        fonts.monospace,
        spacing.base_font_size,
        spacing.line_height,
        spacing.content_width,
        indent(&color_variables(&theme.dark_colors)),
    )
}

fn indent(block: &str) -> String {
    block.lines().map(|line| format!("    {line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_uses_theme_colors() {
        let theme = Theme::default();
        let css = generate_base_css(&theme);
        assert!(css.contains(&format!("--color-base: {};", theme.colors.background)));
        assert!(css.contains(&format!("--color-base: {};", theme.dark_colors.background)));
        assert!(css.contains(".supporter-message"));
        assert!(css.contains(".currency-glyph"));
    }

    #[test]
    fn test_custom_accent_color() {
        let mut theme = Theme::default();
        theme.colors.success = "#00ff00".into();
        let css = generate_base_css(&theme);
        assert!(css.contains("--color-success: #00ff00;"));
    }
}
