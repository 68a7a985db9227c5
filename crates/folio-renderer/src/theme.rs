use smol_str::SmolStr;

#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub dark_colors: ColorScheme,
    pub fonts: FontScheme,
    pub spacing: SpacingScheme,
}

#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: SmolStr,
    pub foreground: SmolStr,
    pub muted: SmolStr,
    pub surface: SmolStr,
    pub border: SmolStr,
    pub link: SmolStr,
    pub link_hover: SmolStr,
    /// Monetary amounts in the supporter list.
    pub success: SmolStr,
}

#[derive(Debug, Clone)]
pub struct FontScheme {
    pub body: SmolStr,
    pub heading: SmolStr,
    pub monospace: SmolStr,
}

#[derive(Debug, Clone)]
pub struct SpacingScheme {
    pub base_font_size: SmolStr,
    pub line_height: SmolStr,
    pub content_width: SmolStr,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ColorScheme::default(),
            dark_colors: ColorScheme::dark(),
            fonts: FontScheme::default(),
            spacing: SpacingScheme::default(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: SmolStr::new("#faf4ed"),
            foreground: SmolStr::new("#2b303b"),
            muted: SmolStr::new("#797593"),
            surface: SmolStr::new("#f2e9e1"),
            border: SmolStr::new("#dfdad9"),
            link: SmolStr::new("#286983"),
            link_hover: SmolStr::new("#56949f"),
            success: SmolStr::new("#16a34a"),
        }
    }
}

impl ColorScheme {
    pub fn dark() -> Self {
        Self {
            background: SmolStr::new("#191724"),
            foreground: SmolStr::new("#e0def4"),
            muted: SmolStr::new("#908caa"),
            surface: SmolStr::new("#26233a"),
            border: SmolStr::new("#403d52"),
            link: SmolStr::new("#9ccfd8"),
            link_hover: SmolStr::new("#c4a7e7"),
            success: SmolStr::new("#4ade80"),
        }
    }
}

impl Default for FontScheme {
    fn default() -> Self {
        Self {
            body: SmolStr::new(
                "IBM Plex, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
            heading: SmolStr::new(
                "IBM Plex Sans, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
            monospace: SmolStr::new(
                "'IBM Plex Mono', 'Berkeley Mono', 'Cascadia Code', 'Roboto Mono', Consolas, monospace",
            ),
        }
    }
}

impl Default for SpacingScheme {
    fn default() -> Self {
        Self {
            base_font_size: SmolStr::new("16px"),
            line_height: SmolStr::new("1.6"),
            content_width: SmolStr::new("48rem"),
        }
    }
}
