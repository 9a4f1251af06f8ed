//! Terminal report rendering
//!
//! Pure formatting over a computed [`Profile`]: the core never prints, so the
//! whole report builds as a string and tests can assert on it directly. Bold
//! escapes only appear when the caller says the output is a terminal.

use std::fmt::Write;

use crate::identity::display_trait;
use crate::profile::{Profile, RankedTrait};

const RULE: &str = "==================================================";

fn bold(text: &str, color: bool) -> String {
    if color {
        format!("\x1b[1m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn trait_section(out: &mut String, heading: &str, traits: &[RankedTrait], color: bool) {
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, " {}", bold(heading, color));
    let _ = writeln!(out, "{RULE}\n");
    for ranked in traits {
        let _ = writeln!(out, "• {} ({})", display_trait(ranked.name), ranked.confidence);
    }
}

/// Render the full report. `color` enables bold headings.
pub fn render(profile: &Profile, color: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        " NUMEROLOGY REPORT FOR: {}",
        bold(&profile.name.to_uppercase(), color)
    );
    let _ = writeln!(out, "{RULE}\n");

    let _ = writeln!(out, "{}", bold("Pythagorean Numerology Profile", color));
    let _ = writeln!(out, "Life Path:        {}", profile.core.life_path);
    let _ = writeln!(out, "Soul Urge:        {}", profile.core.soul_urge);
    let _ = writeln!(out, "Expression:       {}", profile.core.expression);
    let _ = writeln!(out, "Personality:      {}", profile.core.personality);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", bold("Planes of Expression Profile", color));
    let _ = writeln!(out, "Physical Plane:   {}", profile.planes.physical);
    let _ = writeln!(out, "Mental Plane:     {}", profile.planes.mental);
    let _ = writeln!(out, "Emotional Plane:  {}", profile.planes.emotional);
    let _ = writeln!(out, "Intuitive Plane:  {}", profile.planes.intuitive);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", bold("Creative / Vacillating / Grounded", color));
    let _ = writeln!(out, "Creative:         {}", profile.groups.creative);
    let _ = writeln!(out, "Vacillating:      {}", profile.groups.vacillating);
    let _ = writeln!(out, "Grounded:         {}", profile.groups.grounded);

    trait_section(
        &mut out,
        "POSITIVE TRAITS & STRENGTHS",
        &profile.pythagorean_traits.positive,
        color,
    );
    trait_section(
        &mut out,
        "NEGATIVE TRAITS & WEAKNESSES",
        &profile.pythagorean_traits.negative,
        color,
    );
    trait_section(
        &mut out,
        "PLANE STRENGTHS",
        &profile.plane_traits.positive,
        color,
    );
    trait_section(
        &mut out,
        "PLANE WEAKNESSES",
        &profile.plane_traits.negative,
        color,
    );

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, " IDENTITY PROFILE");
    let _ = writeln!(out, "{RULE}\n");
    let _ = writeln!(out, "Essence:  {}", profile.identity.positive);
    let _ = writeln!(out, "Shadow:   {}", profile.identity.negative);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile::compute("Anna", "07-16-1990").unwrap()
    }

    #[test]
    fn test_plain_render_has_no_escape_codes() {
        let report = render(&sample(), false);
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_colored_render_bolds_headings() {
        let report = render(&sample(), true);
        assert!(report.contains("\x1b[1mPythagorean Numerology Profile\x1b[0m"));
    }

    #[test]
    fn test_report_contains_all_sections() {
        let report = render(&sample(), false);
        for heading in [
            "NUMEROLOGY REPORT FOR: ANNA",
            "Pythagorean Numerology Profile",
            "Planes of Expression Profile",
            "Creative / Vacillating / Grounded",
            "POSITIVE TRAITS & STRENGTHS",
            "NEGATIVE TRAITS & WEAKNESSES",
            "IDENTITY PROFILE",
        ] {
            assert!(report.contains(heading), "missing section: {heading}");
        }
    }

    #[test]
    fn test_report_lists_numbers_and_titles() {
        let report = render(&sample(), false);
        assert!(report.contains("Life Path:        6"));
        assert!(report.contains("Physical Plane:   0"));
        assert!(report.contains("Essence:  Creative Communicator with Nurturing Drive"));
        assert!(report.contains("• Nurturing (High Confidence)"));
    }

    #[test]
    fn test_render_is_pure() {
        let profile = sample();
        assert_eq!(render(&profile, false), render(&profile, false));
    }
}
