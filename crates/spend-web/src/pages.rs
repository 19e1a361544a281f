//! The single HTML page: title, description, the record form, and an
//! optional notice below it.

use std::fmt::Write;

use spend_core::constants::{PAGE_DESCRIPTION, PAGE_TITLE, SUBMIT_LABEL};
use spend_core::record::{FieldKind, FIELDS};
use spend_core::FormFields;

/// Message shown under the form after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Render the page with `values` pre-filled.
///
/// Values missing from `values` render empty; a choice whose value is not
/// an option renders with its first option selected.
pub fn render_page(values: &FormFields, notice: Option<&Notice>) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(PAGE_TITLE));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n<main>\n");
    let _ = writeln!(html, "<h1>💰 {}</h1>", escape(PAGE_TITLE));
    let _ = writeln!(html, "<p>{}</p>", escape(PAGE_DESCRIPTION));

    html.push_str("<form method=\"post\" action=\"/predict\">\n");
    for field in FIELDS.iter() {
        let value = values.get(field.name).unwrap_or("");
        let _ = writeln!(
            html,
            "<label for=\"{name}\">{label}</label>",
            name = field.name,
            label = escape(field.label)
        );
        match field.kind {
            FieldKind::Float { step } => {
                let _ = writeln!(
                    html,
                    "<input type=\"number\" id=\"{name}\" name=\"{name}\" step=\"{step}\" value=\"{value}\" required>",
                    name = field.name,
                    value = escape(value)
                );
            }
            FieldKind::Integer => {
                let _ = writeln!(
                    html,
                    "<input type=\"number\" id=\"{name}\" name=\"{name}\" step=\"1\" value=\"{value}\" required>",
                    name = field.name,
                    value = escape(value)
                );
            }
            FieldKind::Choice { options } => {
                let selected = if options.iter().any(|o| *o == value) { value } else { options[0] };
                let _ = writeln!(html, "<select id=\"{name}\" name=\"{name}\">", name = field.name);
                for option in options {
                    let marker = if *option == selected { " selected" } else { "" };
                    let _ = writeln!(
                        html,
                        "<option value=\"{opt}\"{marker}>{opt}</option>",
                        opt = escape(option)
                    );
                }
                html.push_str("</select>\n");
            }
        }
    }
    let _ = writeln!(html, "<button type=\"submit\">🔮 {}</button>", escape(SUBMIT_LABEL));
    html.push_str("</form>\n");

    match notice {
        Some(Notice::Success(msg)) => {
            let _ = writeln!(html, "<div class=\"notice success\">💸 {}</div>", escape(msg));
        }
        Some(Notice::Error(msg)) => {
            let _ = writeln!(html, "<div class=\"notice error\">{}</div>", escape(msg));
        }
        None => {}
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

const STYLE: &str = "<style>
main { max-width: 42rem; margin: 2rem auto; font-family: sans-serif; }
form { display: grid; grid-template-columns: 1fr; gap: 0.35rem; }
label { font-weight: 600; margin-top: 0.5rem; }
input, select { padding: 0.4rem; }
button { margin-top: 1rem; padding: 0.6rem; }
.notice { margin-top: 1.5rem; padding: 1rem; border-radius: 0.3rem; }
.success { background: #e6f4ea; color: #1e4620; }
.error { background: #fdecea; color: #611a15; }
</style>
";

#[cfg(test)]
mod tests {
    use super::*;
    use spend_core::CustomerRecord;

    #[test]
    fn renders_every_field_once() {
        let html = render_page(&CustomerRecord::default().to_form_fields(), None);
        for field in FIELDS.iter() {
            let needle = format!("name=\"{}\"", field.name);
            assert_eq!(html.matches(&needle).count(), 1, "field {}", field.name);
        }
    }

    #[test]
    fn defaults_are_prefilled_and_selected() {
        let html = render_page(&CustomerRecord::default().to_form_fields(), None);
        assert!(html.contains("name=\"total_spend\" step=\"0.01\" value=\"5200.50\""));
        assert!(html.contains("name=\"tenure_days\" step=\"1\" value=\"730\""));
        assert!(html.contains("<option value=\"Electronics\" selected>"));
        assert!(html.contains("<option value=\"VIP\" selected>"));
        assert!(html.contains("<option value=\"Gold\" selected>"));
        assert!(html.contains("<option value=\"0\" selected>"));
    }

    #[test]
    fn no_notice_without_submission() {
        let html = render_page(&FormFields::new(), None);
        assert!(!html.contains("class=\"notice"));
    }

    #[test]
    fn submitted_values_are_escaped() {
        let form = FormFields::from_pairs([("total_spend", "\"><script>")]);
        let html = render_page(&form, Some(&Notice::Error("<b>bad</b>".into())));
        assert!(!html.contains("<script>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }
}
