use ratatui::style::Color;

/// Colors used by the demo widgets
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey1: Color,

    // Semantic colors
    pub region: Color,
    pub busy: Color,
    pub exhausted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            region: Color::Rgb(0x7d, 0xae, 0xa3),
            busy: Color::Rgb(0xd8, 0xa6, 0x57),
            exhausted: Color::Rgb(0xea, 0x69, 0x62),
        }
    }
}
