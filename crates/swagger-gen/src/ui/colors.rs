use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// One RGB triple per theme.
struct Swatch {
  dark: (u8, u8, u8),
  light: (u8, u8, u8),
}

const TIMESTAMP: Swatch = Swatch {
  dark: (118, 166, 166),
  light: (92, 62, 38),
};
const PRIMARY: Swatch = Swatch {
  dark: (191, 126, 4),
  light: (70, 42, 25),
};
const ACCENT: Swatch = Swatch {
  dark: (166, 84, 55),
  light: (211, 99, 70),
};
const SUCCESS: Swatch = Swatch {
  dark: (118, 166, 166),
  light: (34, 142, 90),
};
const LABEL: Swatch = Swatch {
  dark: (217, 164, 4),
  light: (176, 103, 66),
};
const VALUE: Swatch = Swatch {
  dark: (242, 211, 56),
  light: (199, 146, 76),
};

#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, swatch: &Swatch) -> Color {
    if !self.enabled {
      return Color::Reset;
    }

    let (r, g, b) = match self.theme {
      Theme::Dark => swatch.dark,
      Theme::Light => swatch.light,
    };
    Color::Rgb { r, g, b }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(&TIMESTAMP)
  }

  pub const fn primary(&self) -> Color {
    self.pick(&PRIMARY)
  }

  pub const fn accent(&self) -> Color {
    self.pick(&ACCENT)
  }

  pub const fn success(&self) -> Color {
    self.pick(&SUCCESS)
  }

  pub const fn label(&self) -> Color {
    self.pick(&LABEL)
  }

  pub const fn value(&self) -> Color {
    self.pick(&VALUE)
  }

  /// Table cells take comfy-table's own color type.
  pub const fn cell(color: Color) -> ComfyColor {
    match color {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
      _ => ComfyColor::Reset,
    }
  }

  const fn to_clap(color: Color) -> Option<clap::builder::styling::Color> {
    use clap::builder::styling::{Color as ClapColor, RgbColor};

    match color {
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      _ => None,
    }
  }

  pub const fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{Style, Styles};

    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Self::to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(Self::to_clap(colors.label())))
      .literal(Style::new().fg_color(Self::to_clap(colors.success())))
      .placeholder(Style::new().fg_color(Self::to_clap(colors.timestamp())))
      .error(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
      .valid(Style::new().fg_color(Self::to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

/// `COLORFGBG` ends with the background palette index; 8 and above are light.
fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  Theme::Dark
}
