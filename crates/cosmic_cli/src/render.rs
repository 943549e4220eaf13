//! Plain-text rendering for terminal output.

use std::fmt::Write;

use cosmic_rs::{BaZiChart, FusionResult, PlanetPosition, SignPosition, TransitFetch};

pub fn profile(result: &FusionResult) -> String {
    let w = &result.western;
    let e = &result.eastern;
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.synthesis_title);
    let _ = writeln!(out, "{}", result.synthesis_description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Element matrix: {}", result.element_matrix);
    let _ = writeln!(
        out,
        "Western: Sun {} {} | Moon {} | Ascendant {} | {}",
        w.sun_sign,
        w.sun_sign.glyph(),
        w.moon_sign,
        w.ascendant,
        w.element
    );
    let _ = writeln!(
        out,
        "Eastern: {} {} year | {} month | Day Master {} ({} {})",
        e.year_element,
        e.year_animal.animal(),
        e.month_animal.animal(),
        e.day_element,
        e.day_stem,
        e.day_polarity
    );
    out
}

pub fn transits(fetch: &TransitFetch) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Source: {}", fetch.origin);
    for entry in &fetch.snapshot {
        let _ = writeln!(out, "{entry}");
    }
    out
}

pub fn bazi(chart: &BaZiChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Ba Zi year: {}", chart.bazi_year);
    let _ = writeln!(out, "Year:  {}", chart.year);
    let _ = writeln!(
        out,
        "Month: {} ({})",
        chart.month_branch,
        chart.month_branch.animal()
    );
    let _ = writeln!(out, "Day:   {} {}", chart.day, chart.day_polarity());
    let _ = writeln!(out, "Hour:  -");
    out
}

pub fn sign_position(label: &str, pos: &SignPosition) -> String {
    format!("{label}: {pos} ({})", pos.element())
}

pub fn planet(label: &str, pos: &PlanetPosition) -> String {
    let retro = if pos.is_retrograde { " retrograde" } else { "" };
    format!("{}{retro}", sign_position(label, &pos.position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_rs::{BirthData, Instant, Session, pillars};

    #[test]
    fn profile_text() {
        let session = Session::default();
        let result = session.analyze(&BirthData::new("1990-01-15", "12:00", ""));
        let text = profile(&result);
        assert!(text.starts_with("The Resonant Traveler\n"));
        assert!(text.contains("Element matrix: Earth (Sun) / Wood (Day Master)"));
        assert!(text.contains("Eastern: Earth Snake year | Ox month | Day Master Wood (Jia Yang)"));
    }

    #[test]
    fn transit_text_has_ten_rows() {
        let session = Session::default();
        let fetch = session.transits_for(Some(Instant::from_calendar(2024, 6, 1, 0, 0).unwrap()));
        let text = transits(&fetch);
        assert_eq!(text.lines().count(), 11);
        assert!(text.starts_with("Source: local\n"));
    }

    #[test]
    fn bazi_text() {
        let text = bazi(&pillars(Some("2024-02-10")));
        assert!(text.contains("Ba Zi year: 2024"));
        assert!(text.contains("Month: Yin (Tiger)"));
    }
}
