use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_accepts_exact_names() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

#[test]
fn parse_rejects_other_values() {
    for raw in ["", "Light", "DARK", " dark", "light ", "auto", "system", "true"] {
        assert_eq!(Theme::parse(raw), None, "{raw:?} should not parse");
    }
}

#[test]
fn from_str_reports_unknown_value() {
    let err = "sepia".parse::<Theme>().unwrap_err();
    assert!(matches!(err, ThemeError::UnknownTheme(ref v) if v == "sepia"));
    assert_eq!(err.to_string(), "unknown theme: sepia");
}

#[test]
fn from_str_matches_parse() {
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
}

// =============================================================
// String forms
// =============================================================

#[test]
fn display_matches_stored_form() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn as_str_parses_back() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let theme: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(theme, Theme::Light);
    assert!(serde_json::from_str::<Theme>("\"Light\"").is_err());
}

// =============================================================
// Toggle / system mapping
// =============================================================

#[test]
fn toggled_flips_and_is_involutive() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn prefers_light_maps_to_light_otherwise_dark() {
    assert_eq!(Theme::from_prefers_light(true), Theme::Light);
    assert_eq!(Theme::from_prefers_light(false), Theme::Dark);
}
