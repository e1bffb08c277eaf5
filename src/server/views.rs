//! Server-rendered HTML views.
//!
//! Deliberately plain: a shared page shell with a nav bar, plus small
//! helpers the route modules compose with `format!`. All user-supplied
//! text goes through `escape` before it lands in markup.

use axum::response::Html;

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/users", "Patients"),
    ("/doctors", "Doctors"),
    ("/specializations", "Specializations"),
    ("/pharmacies", "Pharmacies"),
    ("/appointments", "Appointments"),
    ("/prescriptions", "Prescriptions"),
];

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem; }
nav a { margin-right: 0.75rem; }
table { border-collapse: collapse; margin-top: 1rem; }
th, td { border: 1px solid #999; padding: 0.3rem 0.6rem; text-align: left; }
form.record { margin-top: 1rem; max-width: 24rem; }
form.record label { display: block; margin-top: 0.5rem; }
"#;

/// Wraps a body fragment in the shared page shell.
pub fn page(title: &str, body: &str) -> Html<String> {
    let nav = NAV
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join("\n");

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title} - Carelog</title>
<style>{STYLE}</style>
</head>
<body>
<nav>
{nav}
</nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
    ))
}

/// Minimal HTML entity escaping for text and attribute values.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes an optional value, rendering `None` as empty text.
pub fn opt(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_default()
}

/// `<option>` tags for a reference dropdown, preselecting `selected`.
pub fn select_options(options: &[(i64, String)], selected: Option<i64>) -> String {
    let mut out = String::new();
    out.push_str("<option value=\"\"></option>\n");
    for (id, label) in options {
        let marked = if selected == Some(*id) { " selected" } else { "" };
        out.push_str(&format!(
            "<option value=\"{id}\"{marked}>{}</option>\n",
            escape(label)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b onclick="x('y')">&"#),
            "&lt;b onclick=&quot;x(&#39;y&#39;)&quot;&gt;&amp;"
        );
    }

    #[test]
    fn select_options_marks_the_selected_id() {
        let options = vec![(1, "Cardiology".to_string()), (2, "Dermatology".to_string())];
        let html = select_options(&options, Some(2));
        assert!(html.contains(r#"<option value="2" selected>Dermatology</option>"#));
        assert!(html.contains(r#"<option value="1">Cardiology</option>"#));
    }
}
