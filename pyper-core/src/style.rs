//! Indentation and line ending configuration for emitted code.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::Deserialize;

use crate::Error;

/// Indentation style for emitted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Python, PEP 8).
    pub const FOUR_SPACES: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// Tab indentation.
    pub const TAB: Self = Self::Tab;

    /// The string emitted for one indentation level.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(8) => Cow::Borrowed("        "),
            Self::Spaces(n) => Cow::Owned(" ".repeat(usize::from(*n))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(n) => write!(f, "spaces{}", n),
            Self::Tab => f.write_str("tab"),
        }
    }
}

impl FromStr for Indent {
    type Err = Error;

    /// Accepts `tab`, `spacesN` or a bare width such as `4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tab") || s.eq_ignore_ascii_case("tabs") {
            return Ok(Self::Tab);
        }
        let width = s.strip_prefix("spaces").unwrap_or(s);
        match width.parse::<u8>() {
            Ok(n) if n > 0 => Ok(Self::Spaces(n)),
            _ => Err(Error::InvalidIndent(s.to_string())),
        }
    }
}

impl TryFrom<String> for Indent {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Line terminator appended on every line feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// The host platform's convention.
    #[default]
    Native,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Native if cfg!(windows) => "\r\n",
            Self::Native => "\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lf => "lf",
            Self::CrLf => "crlf",
            Self::Native => "native",
        })
    }
}

impl FromStr for LineEnding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::CrLf),
            "native" => Ok(Self::Native),
            _ => Err(Error::InvalidLineEnding(s.to_string())),
        }
    }
}

/// Configuration fixed for the lifetime of a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    pub indent: Indent,
    pub line_ending: LineEnding,
}

impl WriterConfig {
    pub fn new(indent: Indent, line_ending: LineEnding) -> Self {
        Self {
            indent,
            line_ending,
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
