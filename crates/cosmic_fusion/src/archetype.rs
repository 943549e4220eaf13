//! Archetype rule table.
//!
//! The rules pair the Western (Sun sign) element with the Ba Zi day master
//! and are evaluated top to bottom; the first match wins. When nothing
//! matches the archetype is [`Archetype::ResonantTraveler`].

use std::fmt::{Display, Formatter};

use cosmic_zodiac::{Element, WuXing};
use serde::{Deserialize, Serialize};

/// Narrative identity chosen for a (western element, day master) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Day master and western element share a name.
    PureSovereign(Element),
    /// Fire sun fed by a Wood day master.
    BurningVisionary,
    /// Water sun generated by a Metal day master.
    FluidAlchemist,
    /// Earth sun created by a Fire day master.
    VolcanicArchitect,
    /// Air sun moving a Water day master.
    MistNavigator,
    /// Earth day master under any other sun element.
    GroundedGuardian,
    ResonantTraveler,
}

/// Title, description and artistic directive of an archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub title: String,
    pub description: String,
    pub directive: &'static str,
}

impl Archetype {
    pub fn title(self) -> String {
        match self {
            Self::PureSovereign(e) => format!("The Pure {e} Sovereign"),
            Self::BurningVisionary => "The Burning Visionary".to_string(),
            Self::FluidAlchemist => "The Fluid Alchemist".to_string(),
            Self::VolcanicArchitect => "The Volcanic Architect".to_string(),
            Self::MistNavigator => "The Mist Navigator".to_string(),
            Self::GroundedGuardian => "The Grounded Guardian".to_string(),
            Self::ResonantTraveler => "The Resonant Traveler".to_string(),
        }
    }

    /// Description; `western` fills in the Grounded Guardian's text.
    pub fn description(self, western: Element) -> String {
        match self {
            Self::PureSovereign(e) => format!(
                "Your core essence ({e}) is perfectly aligned with your astrological temperament. \
                 You possess an undiluted, focused power that resonates through every level of your being."
            ),
            Self::BurningVisionary => "Wood feeds Fire. Your inner nature fuels your outward expression, \
                creating a personality of tireless creativity and magnetic leadership."
                .to_string(),
            Self::FluidAlchemist => "Metal generates Water. Your disciplined mind and structured thoughts \
                give rise to profound intuition and emotional depth."
                .to_string(),
            Self::VolcanicArchitect => "Fire creates Earth. Your inner passion is the foundation upon which \
                you build your reality\u{2014}solid, vibrant, and enduring."
                .to_string(),
            Self::MistNavigator => "Air moves Water. You are adaptable and elusive, finding your way through \
                life's complexities with intellectual grace and emotional wisdom."
                .to_string(),
            Self::GroundedGuardian => format!(
                "Anchored by an Earth Day Master, you remain a stable force. \
                 Your {western} energy provides the drive, but your core remains unshakeable."
            ),
            Self::ResonantTraveler => "Balancing the energies of motion and stillness.".to_string(),
        }
    }

    pub const fn directive(self) -> &'static str {
        match self {
            Self::PureSovereign(_) => {
                "Emphasize perfect symmetry and monochromatic elegance to reflect undiluted purity."
            }
            Self::BurningVisionary => {
                "Incorporate leaf-like organic motifs that transition into stylized, sharp flame geometry."
            }
            Self::FluidAlchemist => {
                "Use sharp, metallic polished edges that contain or give birth to flowing, organic water-like curves."
            }
            Self::VolcanicArchitect => {
                "Dense, heavy geometric bases with radiant, glowing interior lines suggesting subterranean energy."
            }
            Self::MistNavigator => {
                "Whispy, ethereal strokes and concentric circles representing ripples in the sky."
            }
            Self::GroundedGuardian => {
                "Strong verticality and square-based abstractions with subtle elemental highlights."
            }
            Self::ResonantTraveler => "Focus on balanced intersections of curve and line.",
        }
    }

    pub fn narrative(self, western: Element) -> Narrative {
        Narrative {
            title: self.title(),
            description: self.description(western),
            directive: self.directive(),
        }
    }
}

impl Display for Archetype {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title())
    }
}

/// One (predicate, outcome) row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeRule {
    /// Short label for logs and tests.
    pub label: &'static str,
    pub matches: fn(Element, WuXing) -> bool,
    pub archetype: fn(Element, WuXing) -> Archetype,
}

impl ArchetypeRule {
    /// The rule's archetype if it applies to this pair.
    pub fn apply(&self, western: Element, day_master: WuXing) -> Option<Archetype> {
        (self.matches)(western, day_master).then(|| (self.archetype)(western, day_master))
    }
}

/// Rules in priority order.
pub const ARCHETYPE_RULES: [ArchetypeRule; 6] = [
    ArchetypeRule {
        label: "same-element",
        matches: |w, d| d.as_western() == Some(w),
        archetype: |w, _| Archetype::PureSovereign(w),
    },
    ArchetypeRule {
        label: "fire-wood",
        matches: |w, d| w == Element::Fire && d == WuXing::Wood,
        archetype: |_, _| Archetype::BurningVisionary,
    },
    ArchetypeRule {
        label: "water-metal",
        matches: |w, d| w == Element::Water && d == WuXing::Metal,
        archetype: |_, _| Archetype::FluidAlchemist,
    },
    ArchetypeRule {
        label: "earth-fire",
        matches: |w, d| w == Element::Earth && d == WuXing::Fire,
        archetype: |_, _| Archetype::VolcanicArchitect,
    },
    ArchetypeRule {
        label: "air-water",
        matches: |w, d| w == Element::Air && d == WuXing::Water,
        archetype: |_, _| Archetype::MistNavigator,
    },
    ArchetypeRule {
        label: "earth-day-master",
        matches: |_, d| d == WuXing::Earth,
        archetype: |_, _| Archetype::GroundedGuardian,
    },
];

/// First matching rule's archetype, or the Resonant Traveler.
pub fn select_archetype(western: Element, day_master: WuXing) -> Archetype {
    for rule in &ARCHETYPE_RULES {
        if let Some(archetype) = rule.apply(western, day_master) {
            tracing::debug!(rule = rule.label, %western, %day_master, "archetype rule matched");
            return archetype;
        }
    }
    tracing::debug!(%western, %day_master, "no archetype rule matched");
    Archetype::ResonantTraveler
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_zodiac::ALL_ELEMENTS;

    const ALL_PHASES: [WuXing; 5] = [
        WuXing::Wood,
        WuXing::Fire,
        WuXing::Earth,
        WuXing::Metal,
        WuXing::Water,
    ];

    #[test]
    fn same_element_is_pure() {
        assert_eq!(
            select_archetype(Element::Fire, WuXing::Fire),
            Archetype::PureSovereign(Element::Fire)
        );
        assert_eq!(
            select_archetype(Element::Water, WuXing::Water).title(),
            "The Pure Water Sovereign"
        );
    }

    #[test]
    fn pure_outranks_grounded() {
        assert_eq!(
            select_archetype(Element::Earth, WuXing::Earth),
            Archetype::PureSovereign(Element::Earth)
        );
    }

    #[test]
    fn generative_pairs() {
        assert_eq!(select_archetype(Element::Fire, WuXing::Wood), Archetype::BurningVisionary);
        assert_eq!(select_archetype(Element::Water, WuXing::Metal), Archetype::FluidAlchemist);
        assert_eq!(select_archetype(Element::Earth, WuXing::Fire), Archetype::VolcanicArchitect);
        assert_eq!(select_archetype(Element::Air, WuXing::Water), Archetype::MistNavigator);
    }

    #[test]
    fn earth_day_master_is_grounded() {
        for w in [Element::Fire, Element::Air, Element::Water] {
            assert_eq!(select_archetype(w, WuXing::Earth), Archetype::GroundedGuardian);
        }
        let text = Archetype::GroundedGuardian.description(Element::Air);
        assert!(text.contains("Your Air energy provides the drive"));
    }

    #[test]
    fn unmatched_pairs_are_resonant() {
        assert_eq!(select_archetype(Element::Earth, WuXing::Wood), Archetype::ResonantTraveler);
        assert_eq!(select_archetype(Element::Air, WuXing::Metal), Archetype::ResonantTraveler);
        assert_eq!(select_archetype(Element::Fire, WuXing::Water), Archetype::ResonantTraveler);
    }

    #[test]
    fn at_most_first_rule_decides() {
        for w in ALL_ELEMENTS {
            for d in ALL_PHASES {
                let first = ARCHETYPE_RULES.iter().find_map(|r| r.apply(w, d));
                assert_eq!(
                    select_archetype(w, d),
                    first.unwrap_or(Archetype::ResonantTraveler)
                );
            }
        }
    }

    #[test]
    fn narratives_are_complete() {
        for w in ALL_ELEMENTS {
            for d in ALL_PHASES {
                let n = select_archetype(w, d).narrative(w);
                assert!(n.title.starts_with("The "));
                assert!(!n.description.is_empty());
                assert!(n.directive.ends_with('.'));
            }
        }
    }

    #[test]
    fn volcanic_description_text() {
        assert_eq!(
            Archetype::VolcanicArchitect.description(Element::Earth),
            "Fire creates Earth. Your inner passion is the foundation upon which you build your \
             reality\u{2014}solid, vibrant, and enduring."
        );
    }

    #[test]
    fn resonant_defaults() {
        let n = Archetype::ResonantTraveler.narrative(Element::Earth);
        assert_eq!(n.title, "The Resonant Traveler");
        assert_eq!(n.description, "Balancing the energies of motion and stillness.");
        assert_eq!(n.directive, "Focus on balanced intersections of curve and line.");
    }
}
