use crate::{
    foundation::core::Size,
    foundation::error::{MockupError, MockupResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Logo art hosted on the image CDN, with its natural pixel size.
pub struct LogoAsset {
    pub url: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl LogoAsset {
    pub fn new(url: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }

    /// Natural size, when both sides are positive.
    pub fn natural_size(&self) -> Option<Size> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        (ok(self.width) && ok(self.height)).then(|| Size::new(self.width, self.height))
    }
}

/// Tone of the logo art itself, picked to contrast with the base image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shade {
    Lighter,
    Darker,
}

impl Shade {
    pub fn opposite(self) -> Self {
        match self {
            Self::Lighter => Self::Darker,
            Self::Darker => Self::Lighter,
        }
    }

    /// The shade that reads well on a background of the given tone.
    pub fn contrasting(background_is_dark: bool) -> Self {
        if background_is_dark {
            Self::Lighter
        } else {
            Self::Darker
        }
    }
}

impl std::str::FromStr for Shade {
    type Err = MockupError;

    fn from_str(s: &str) -> MockupResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lighter" => Ok(Self::Lighter),
            "darker" => Ok(Self::Darker),
            other => Err(MockupError::validation(format!(
                "unknown shade '{other}', expected 'lighter' or 'darker'"
            ))),
        }
    }
}

/// Which art a placement shows: the default front logo or the alternate back logo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    pub fn from_use_back(use_back: bool) -> Self {
        if use_back { Self::Back } else { Self::Front }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Up to four logo variants: front/back crossed with darker/lighter.
pub struct LogoSet {
    #[serde(default)]
    pub logo_darker: Option<LogoAsset>,
    #[serde(default)]
    pub logo_lighter: Option<LogoAsset>,
    #[serde(default)]
    pub back_darker: Option<LogoAsset>,
    #[serde(default)]
    pub back_lighter: Option<LogoAsset>,
}

impl LogoSet {
    pub fn from_json_str(json: &str) -> MockupResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, side: Side, shade: Shade) -> Option<&LogoAsset> {
        match (side, shade) {
            (Side::Front, Shade::Darker) => self.logo_darker.as_ref(),
            (Side::Front, Shade::Lighter) => self.logo_lighter.as_ref(),
            (Side::Back, Shade::Darker) => self.back_darker.as_ref(),
            (Side::Back, Shade::Lighter) => self.back_lighter.as_ref(),
        }
    }
}
