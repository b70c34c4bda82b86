use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command `{0}`")]
pub struct ParseCommandError(pub String);

/// A discrete input event, already decoded from whatever device produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    RealUp,
    RealDown,
    ImagUp,
    ImagDown,
    SelectMandelbrot,
    SelectJulia,
    Exit,
}

impl Command {
    pub const ALL: &'static [Self] = &[
        Self::PanLeft,
        Self::PanRight,
        Self::PanUp,
        Self::PanDown,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::RealUp,
        Self::RealDown,
        Self::ImagUp,
        Self::ImagDown,
        Self::SelectMandelbrot,
        Self::SelectJulia,
        Self::Exit,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PanLeft => "pan-left",
            Self::PanRight => "pan-right",
            Self::PanUp => "pan-up",
            Self::PanDown => "pan-down",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::RealUp => "real-up",
            Self::RealDown => "real-down",
            Self::ImagUp => "imag-up",
            Self::ImagDown => "imag-down",
            Self::SelectMandelbrot => "select-mandelbrot",
            Self::SelectJulia => "select-julia",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|command| command.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseCommandError(name.to_string()))
    }
}
