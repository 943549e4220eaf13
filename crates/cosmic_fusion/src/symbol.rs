//! Heritage weighting for symbol generation.
//!
//! [`build_symbol_prompt`] appends a weighting directive and background
//! instruction to a fusion prompt. [`SymbolRequest`] is the payload a remote
//! symbol engine receives; it carries the unweighted prompt plus the
//! weighting as `style` and the background as `mode`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which tradition dominates the generated emblem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Influence {
    Western,
    #[default]
    Balanced,
    Eastern,
}

impl Influence {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Western => "western",
            Self::Balanced => "balanced",
            Self::Eastern => "eastern",
        }
    }

    /// The `WEIGHTING:` directive for this influence.
    pub const fn weighting(self) -> &'static str {
        match self {
            Self::Western => {
                "WEIGHTING: Prioritize Western Zodiac geometry and Solar signatures. \
                 Let the Sun sign's elemental nature dominate the visual form."
            }
            Self::Eastern => {
                "WEIGHTING: Prioritize Ba Zi symbols and the Year Animal's essence. \
                 Let the eastern animalistic traits and five-element flow dominate the visual form."
            }
            Self::Balanced => {
                "WEIGHTING: Achieve a perfect 50/50 equilibrium between Western geometric \
                 abstraction and Eastern organic animal symbolism."
            }
        }
    }
}

impl Display for Influence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Influence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "western" => Ok(Self::Western),
            "balanced" => Ok(Self::Balanced),
            "eastern" => Ok(Self::Eastern),
            other => Err(format!("unknown influence: {other} (western, balanced, eastern)")),
        }
    }
}

/// Weighting and background choice for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolConfig {
    pub influence: Influence,
    pub transparent_background: bool,
}

impl SymbolConfig {
    pub fn new(influence: Influence, transparent_background: bool) -> Self {
        Self {
            influence,
            transparent_background,
        }
    }

    pub const fn background(&self) -> &'static str {
        if self.transparent_background {
            "PURE WHITE or TRANSPARENT background. Isolated subject."
        } else {
            "Clean, high-end editorial background."
        }
    }

    pub const fn mode(&self) -> SymbolMode {
        if self.transparent_background {
            SymbolMode::Transparent
        } else {
            SymbolMode::Cinematic
        }
    }
}

/// `base` with the weighting directive appended, or `base` unchanged when
/// there is no config.
pub fn build_symbol_prompt(base: &str, config: Option<&SymbolConfig>) -> String {
    let Some(config) = config else {
        return base.to_string();
    };
    format!(
        "{base}\n\nCORE DIRECTIVE:\n- System Influence: {}\n- Background: {}\n\n\
         The result must be a singular, balanced emblem. Destiny has chosen the specific details, \
         but the user has requested this specific weight of heritage.",
        config.influence.weighting(),
        config.background()
    )
}

/// Rendering mode sent to the remote symbol engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolMode {
    Transparent,
    Cinematic,
}

/// Remote symbol engine request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRequest {
    pub prompt: String,
    pub style: Influence,
    pub mode: SymbolMode,
}

impl SymbolRequest {
    /// Request for `prompt`; without a config the style is balanced and the
    /// mode cinematic.
    pub fn new(prompt: impl Into<String>, config: Option<&SymbolConfig>) -> Self {
        let config = config.copied().unwrap_or_default();
        Self {
            prompt: prompt.into(),
            style: config.influence,
            mode: config.mode(),
        }
    }
}
