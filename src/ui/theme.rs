use ratatui::style::Color;

/// Color palette used by the widget.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),
            banner: ColorSpec::rgb(255, 159, 196),
            text: ColorSpec::rgb(169, 177, 214),
            text_muted: ColorSpec::rgb(117, 121, 148),
            success: ColorSpec::rgb(158, 206, 106),
            warning: ColorSpec::rgb(255, 202, 40),
            error: ColorSpec::rgb(247, 118, 142),
            border_active: ColorSpec::rgb(125, 207, 255),
            border_normal: ColorSpec::rgb(65, 72, 104),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(161, 119, 255),
            banner: ColorSpec::rgb(215, 130, 126),
            text: ColorSpec::rgb(87, 82, 121),
            text_muted: ColorSpec::rgb(152, 147, 165),
            success: ColorSpec::rgb(40, 105, 131),
            warning: ColorSpec::rgb(234, 157, 52),
            error: ColorSpec::rgb(180, 99, 122),
            border_active: ColorSpec::rgb(161, 119, 255),
            border_normal: ColorSpec::rgb(223, 218, 217),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),
            banner: ColorSpec::rgb(255, 121, 198),
            text: ColorSpec::rgb(248, 248, 242),
            text_muted: ColorSpec::rgb(98, 114, 164),
            success: ColorSpec::rgb(80, 250, 123),
            warning: ColorSpec::rgb(241, 250, 140),
            error: ColorSpec::rgb(255, 85, 85),
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(68, 71, 90),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}
