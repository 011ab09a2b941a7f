use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border_focus: Style,

    pub status_ready: Style,
    pub status_info: Style,

    pub header_logo: Style,
    pub header_stats: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub error_text: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[serde(rename = "catppuccin")]
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[PaletteType::CatppuccinMocha, PaletteType::Nord]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border_focus: Style::default().fg(p.blue),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_stats: Style::default().bg(p.surface0).fg(p.subtext1),
            header_item: Style::default().bg(p.surface1).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.subtext0),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            error_text: Style::default().fg(p.red).add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
