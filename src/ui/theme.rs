use ratatui::style::Color;

/// Colors for one display mode. The session's dark-mode flag picks the
/// palette per frame; nothing else changes when the mode flips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub title: Color,
    pub accent: Color,
    pub muted: Color,
    pub correct: Color,
    pub incorrect: Color,
    pub info: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::White,
            text: Color::Black,
            title: Color::Blue,
            accent: Color::Blue,
            muted: Color::DarkGray,
            correct: Color::Green,
            incorrect: Color::Red,
            info: Color::Cyan,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            title: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::Gray,
            correct: Color::LightGreen,
            incorrect: Color::LightRed,
            info: Color::LightCyan,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
