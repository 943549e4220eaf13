//! Fusion of a Western profile and a Ba Zi profile into one identity.
//!
//! [`run_fusion_analysis`] turns birth data into a [`FusionResult`]: both
//! profiles, the archetype narrative chosen by the ordered rule table, the
//! element matrix label, and the emblem prompt. Everything is a pure
//! function of the birth instant.

pub mod archetype;
pub mod profile;
pub mod prompt;
pub mod symbol;

use cosmic_time::Instant;
use cosmic_zodiac::{Element, WuXing};
use serde::{Deserialize, Serialize};

pub use archetype::{ARCHETYPE_RULES, Archetype, ArchetypeRule, Narrative, select_archetype};
pub use profile::{BirthData, EasternProfile, WesternProfile, eastern_profile, western_profile};
pub use prompt::{animal_vibe, color_palette, compose_prompt, element_motif};
pub use symbol::{Influence, SymbolConfig, SymbolMode, SymbolRequest, build_symbol_prompt};

/// Output of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionResult {
    pub synthesis_title: String,
    pub synthesis_description: String,
    pub element_matrix: String,
    pub western: WesternProfile,
    pub eastern: EasternProfile,
    pub prompt: String,
}

/// `"{western} (Sun) / {day master} (Day Master)"`.
pub fn element_matrix(western: Element, day_master: WuXing) -> String {
    format!("{western} (Sun) / {day_master} (Day Master)")
}

/// Combine two profiles into a result.
pub fn synthesize(western: WesternProfile, eastern: EasternProfile) -> FusionResult {
    let archetype = select_archetype(western.element, eastern.day_element);
    let narrative = archetype.narrative(western.element);
    let prompt = compose_prompt(&western, &eastern, &narrative);
    FusionResult {
        synthesis_title: narrative.title,
        synthesis_description: narrative.description,
        element_matrix: element_matrix(western.element, eastern.day_element),
        western,
        eastern,
        prompt,
    }
}

/// Full analysis of an instant.
pub fn analyze_instant(instant: &Instant) -> FusionResult {
    synthesize(western_profile(instant), eastern_profile(instant))
}

/// Full analysis of form input; unparseable dates are analysed as now.
pub fn run_fusion_analysis(data: &BirthData) -> FusionResult {
    let instant = data.instant();
    tracing::debug!(%instant, "running fusion analysis");
    analyze_instant(&instant)
}
