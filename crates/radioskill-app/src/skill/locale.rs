//! Built-in locale resources and dialog rendering
//!
//! Hosts that ship no resource files of their own can fall back on these.

/// Built-in resource `name` for `locale`
pub fn embedded_resource(locale: &str, name: &str) -> Option<&'static str> {
    let text = match (locale, name) {
        ("en-us", "radio.regex") => include_str!("../../locale/en-us/radio.regex"),
        ("en-us", "play.radio.dialog") => include_str!("../../locale/en-us/play.radio.dialog"),
        ("en-us", "could.not.play.dialog") => {
            include_str!("../../locale/en-us/could.not.play.dialog")
        }
        ("en-us", "no.station.dialog") => include_str!("../../locale/en-us/no.station.dialog"),
        ("es-es", "radio.regex") => include_str!("../../locale/es-es/radio.regex"),
        ("es-es", "play.radio.dialog") => include_str!("../../locale/es-es/play.radio.dialog"),
        ("es-es", "could.not.play.dialog") => {
            include_str!("../../locale/es-es/could.not.play.dialog")
        }
        ("es-es", "no.station.dialog") => include_str!("../../locale/es-es/no.station.dialog"),
        _ => return None,
    };
    Some(text)
}

/// Render a `.dialog` template: the first non-blank line, with `{key}`
/// placeholders replaced from `data`
pub fn render_dialog(template: &str, data: &[(&str, &str)]) -> String {
    let line = template
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .unwrap_or_default();
    data.iter().fold(line.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}
