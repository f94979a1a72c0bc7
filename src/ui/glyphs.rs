//! Named glyph sequences for the progress spinner.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, cyclic sequence of spinner glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    Classic,
    #[default]
    Dots,
    Line,
    Circle,
    Arrow,
    Braille,
    Star,
}

impl GlyphStyle {
    /// All styles, in the order they are listed in `--help`.
    pub const ALL: [Self; 7] = [
        Self::Classic,
        Self::Dots,
        Self::Line,
        Self::Circle,
        Self::Arrow,
        Self::Braille,
        Self::Star,
    ];

    /// The glyphs this style cycles through.
    pub const fn glyphs(self) -> &'static [&'static str] {
        match self {
            Self::Classic => &["-", "/", "|", "\\"],
            Self::Dots => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            Self::Line => &[
                "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂", "▁",
            ],
            Self::Circle => &["◐", "◓", "◑", "◒"],
            Self::Arrow => &["➳", "➲", "➤", "➭", "➯"],
            Self::Braille => &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"],
            Self::Star => &["⭐", "🌟", "✨", "🌠"],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Dots => "dots",
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Arrow => "arrow",
            Self::Braille => "braille",
            Self::Star => "star",
        }
    }
}

impl fmt::Display for GlyphStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
