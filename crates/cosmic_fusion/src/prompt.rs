//! Image-generation prompt text.

use cosmic_zodiac::{EarthlyBranch, Element};

use crate::archetype::Narrative;
use crate::profile::{EasternProfile, WesternProfile};

const DESIGN_LANGUAGE: &str = "Design Language: Fine-line, minimal, elegant, high-end identity mark, \
geometric calm composition, central emblem, ample negative space, precise line weight, vector-like clarity.";

/// Visual motif phrase for a year animal.
pub const fn animal_vibe(branch: EarthlyBranch) -> &'static str {
    match branch {
        EarthlyBranch::Zi => {
            "intricate small-scale detail, clever geometry, hidden nodes of resourcefulness"
        }
        EarthlyBranch::Chou => "heavy steady strokes, mountain-like mass, patient power",
        EarthlyBranch::Yin => {
            "bold stripes, predatory grace, hidden explosive strength in the linework"
        }
        EarthlyBranch::Mao => {
            "soft lunar curves, alert stillness, hidden agility in the negative space"
        }
        EarthlyBranch::Chen => {
            "mythical scales, winding serpent-like power, celestial orbs, and imperial authority"
        }
        EarthlyBranch::Si => "sleek infinity loops, transformative skin patterns, winding wisdom",
        EarthlyBranch::Wu => "galloping motion lines, wind-swept mane geometry, unbridled spirit",
        EarthlyBranch::Wei => {
            "peaceful cloud-like textures, spiral horn geometry, artistic harmony"
        }
        EarthlyBranch::Shen => "dynamic playful shapes, versatile joints, clever intersections",
        EarthlyBranch::You => {
            "radiant crest patterns, morning-sun geometry, precision and punctuality"
        }
        EarthlyBranch::Xu => "protective border structures, loyal center-points, grounded integrity",
        EarthlyBranch::Hai => "plentiful rounded forms, abundance motifs, gentle inclusive circles",
    }
}

/// Composition line for a western element.
pub const fn element_motif(element: Element) -> &'static str {
    match element {
        Element::Fire => "Radiating sparks, sharp upward vertices, glowing embers.",
        Element::Water => "Soft overlapping waves, teardrop geometry, fluid sine-waves.",
        Element::Earth => "Layered strata, crystalline blocks, solid foundations.",
        Element::Air => "Thin sweeping arcs, atmospheric transparency, parallel wind-lines.",
    }
}

pub const fn color_palette(element: Element) -> &'static str {
    match element {
        Element::Fire => "Warm Gold, Ochre, and Charcoal",
        Element::Water => "Deep Indigo, Silver, and Pearl",
        Element::Earth => "Copper, Moss Green, and Sand",
        Element::Air => "Champagne, Slate Blue, and White",
    }
}

/// Full emblem prompt for a profile pair and its narrative.
pub fn compose_prompt(
    western: &WesternProfile,
    eastern: &EasternProfile,
    narrative: &Narrative,
) -> String {
    let animal = eastern.year_animal.animal();
    let element = western.element;
    let title = &narrative.title;

    let lines = [
        DESIGN_LANGUAGE.to_string(),
        String::new(),
        "Astrological Profile:".to_string(),
        format!("- Western Sun: {}", western.sun_sign),
        format!("- Western Ascendant: {}", western.ascendant),
        format!("- Chinese Year: {} {animal}", eastern.year_element),
        format!("- Day Master: {}", eastern.day_element),
        format!("- Interaction Theme: {title}"),
        String::new(),
        format!(
            "Visual Subject: An abstract fusion of a {animal} and the sacred geometry of the {element} element."
        ),
        format!(
            "Artistic Directive: {} Incorporate elements of {}.",
            narrative.directive,
            animal_vibe(eastern.year_animal)
        ),
        String::new(),
        "Composition: A central celestial structure.".to_string(),
        format!("- Element of {element}: {}", element_motif(element)),
        String::new(),
        "Specific Details:".to_string(),
        format!(
            "- Include a specific golden node on an outer orbit representing the {} sun placement.",
            western.sun_sign
        ),
        format!("- The overall mark should reflect the {title} theme."),
        "- Avoid literal or cartoonish depictions; aim for a high-end luxury brand emblem or watch-face detail."
            .to_string(),
        format!("- Color Palette: {}.", color_palette(element)),
        String::new(),
        format!(
            "Vibe: No text. No 3D perspective. Icon-ready. Reflecting the core light of {} and the rising mask of {}.",
            western.sun_sign, western.ascendant
        ),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Archetype;
    use cosmic_zodiac::{ALL_BRANCHES, HeavenlyStem, Polarity, WuXing, ZodiacSign};

    fn profiles() -> (WesternProfile, EasternProfile) {
        (
            WesternProfile {
                sun_sign: ZodiacSign::Leo,
                moon_sign: ZodiacSign::Cancer,
                ascendant: ZodiacSign::Scorpio,
                element: Element::Fire,
            },
            EasternProfile {
                year_animal: EarthlyBranch::Chen,
                year_element: WuXing::Wood,
                month_animal: EarthlyBranch::Wei,
                day_element: WuXing::Wood,
                day_stem: HeavenlyStem::Yi,
                day_polarity: Polarity::Yin,
            },
        )
    }

    #[test]
    fn vibes_are_distinct() {
        let mut seen: Vec<&str> = ALL_BRANCHES.iter().map(|b| animal_vibe(*b)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn prompt_sections() {
        let (w, e) = profiles();
        let narrative = Archetype::BurningVisionary.narrative(w.element);
        let p = compose_prompt(&w, &e, &narrative);
        assert!(p.starts_with("Design Language:"));
        assert!(p.contains("- Western Sun: Leo"));
        assert!(p.contains("- Western Ascendant: Scorpio"));
        assert!(p.contains("- Chinese Year: Wood Dragon"));
        assert!(p.contains("- Day Master: Wood"));
        assert!(p.contains("- Interaction Theme: The Burning Visionary"));
        assert!(p.contains("An abstract fusion of a Dragon and the sacred geometry of the Fire element."));
        assert!(p.contains("flame geometry. Incorporate elements of mythical scales"));
        assert!(p.contains("- Element of Fire: Radiating sparks"));
        assert!(p.contains("representing the Leo sun placement."));
        assert!(p.contains("- Color Palette: Warm Gold, Ochre, and Charcoal."));
        assert!(p.ends_with("the core light of Leo and the rising mask of Scorpio."));
    }

    #[test]
    fn prompt_is_deterministic() {
        let (w, e) = profiles();
        let n = Archetype::BurningVisionary.narrative(w.element);
        assert_eq!(compose_prompt(&w, &e, &n), compose_prompt(&w, &e, &n));
    }
}
