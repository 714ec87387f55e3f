use std::fmt;
use std::str::FromStr;

/// The closed set of selectable effects.
///
/// Dispatch is an exhaustive match on this enum; the UI/CLI name is
/// parsed once per tick rather than branched on as a string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterKind {
    #[default]
    None,
    Gray,
    Noisy,
    Colorize,
    Cartoon,
    Posterize,
    FaceBlur,
}

impl FilterKind {
    pub const ALL: [FilterKind; 7] = [
        FilterKind::None,
        FilterKind::Gray,
        FilterKind::Noisy,
        FilterKind::Colorize,
        FilterKind::Cartoon,
        FilterKind::Posterize,
        FilterKind::FaceBlur,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::Gray => "gray",
            FilterKind::Noisy => "noisy",
            FilterKind::Colorize => "colorize",
            FilterKind::Cartoon => "cartoon",
            FilterKind::Posterize => "posterize",
            FilterKind::FaceBlur => "faceblur",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "default" => Ok(FilterKind::None),
            "gray" => Ok(FilterKind::Gray),
            "noisy" => Ok(FilterKind::Noisy),
            "colorize" => Ok(FilterKind::Colorize),
            "cartoon" => Ok(FilterKind::Cartoon),
            "posterize" => Ok(FilterKind::Posterize),
            "faceblur" => Ok(FilterKind::FaceBlur),
            other => Err(format!("unknown filter '{other}'")),
        }
    }
}
