//! Server-rendered HTML pages.
//!
//! Every list page has the same shape: a filter form pre-filled from the
//! current query, a create form, and one row per record with an inline edit
//! form and a delete button. Edit inputs live inside the table cells and
//! point at a per-row `<form id="edit-N">` through the `form` attribute.
use std::fmt::Write;

use models::financial_category::CategoryKind;
use rust_decimal::Decimal;
use service::lookups::LookupOption;
use service::resource::{ListView, Resource};

pub mod asset_types;
pub mod assets;
pub mod categories;
pub mod contributions;
pub mod dividends;
pub mod layout;
pub mod movements;

/// A resource that has a list page.
pub trait Page: Resource + Sized {
    const PATH: &'static str;
    const TITLE: &'static str;

    fn render(view: &ListView<Self>) -> String;
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

pub fn money(value: &Decimal) -> String {
    format!("{:.2}", value)
}

/// `<input>` bound to an optional form id.
pub fn input(kind: &str, name: &str, value: &str, form: Option<&str>, extra: &str) -> String {
    let form_attr = form.map(|f| format!(r#" form="{}""#, f)).unwrap_or_default();
    format!(
        r#"<input type="{}" name="{}" value="{}"{} {}>"#,
        kind,
        name,
        escape_html(value),
        form_attr,
        extra
    )
}

/// `<select>` over lookup options. `blank` adds an empty first option.
pub fn lookup_select(
    name: &str,
    options: &[LookupOption],
    selected: Option<i32>,
    form: Option<&str>,
    blank: Option<&str>,
) -> String {
    let form_attr = form.map(|f| format!(r#" form="{}""#, f)).unwrap_or_default();
    let required = if blank.is_none() { " required" } else { "" };
    let mut html = format!(r#"<select name="{}"{}{}>"#, name, form_attr, required);
    if let Some(label) = blank {
        let _ = write!(html, r#"<option value="">{}</option>"#, escape_html(label));
    }
    for opt in options {
        let sel = if Some(opt.id) == selected { " selected" } else { "" };
        let label = match &opt.hint {
            Some(hint) => format!("{} ({})", opt.label, hint),
            None => opt.label.clone(),
        };
        let _ = write!(html, r#"<option value="{}"{}>{}</option>"#, opt.id, sel, escape_html(&label));
    }
    html.push_str("</select>");
    html
}

pub fn kind_select(name: &str, selected: Option<CategoryKind>, form: Option<&str>, blank: Option<&str>) -> String {
    let form_attr = form.map(|f| format!(r#" form="{}""#, f)).unwrap_or_default();
    let mut html = format!(r#"<select name="{}"{}>"#, name, form_attr);
    if let Some(label) = blank {
        let _ = write!(html, r#"<option value="">{}</option>"#, escape_html(label));
    }
    for kind in CategoryKind::ALL {
        let sel = if Some(kind) == selected { " selected" } else { "" };
        let _ = write!(html, r#"<option value="{0}"{1}>{0}</option>"#, kind.as_str(), sel);
    }
    html.push_str("</select>");
    html
}

/// Hidden edit form for row `id`, placed in the first cell.
pub fn edit_form(path: &str, id: i32) -> String {
    format!(
        r#"<form id="edit-{id}" method="post" action="{path}/edit"><input type="hidden" name="id" value="{id}"></form>"#
    )
}

/// Save button for the row's edit form plus a self-contained delete form.
pub fn row_actions(path: &str, id: i32) -> String {
    format!(
        r#"<button type="submit" form="edit-{id}">Save</button>
<form method="post" action="{path}/delete" class="inline" onsubmit="return confirm('Delete this record?')"><input type="hidden" name="id" value="{id}"><button type="submit">Delete</button></form>"#
    )
}

pub fn filter_form(path: &str, fields: &str) -> String {
    format!(
        r#"<form method="get" action="{path}" class="filters">{fields}<button type="submit">Filter</button> <a href="{path}">Clear</a></form>"#
    )
}

pub fn create_form(path: &str, fields: &str) -> String {
    format!(r#"<form method="post" action="{path}" class="create">{fields}<button type="submit">Add</button></form>"#)
}

/// Table with a header row; `rows` is already rendered.
pub fn table(headers: &[&str], rows: &str) -> String {
    let mut html = String::from("<table><thead><tr>");
    for h in headers {
        let _ = write!(html, "<th>{}</th>", h);
    }
    html.push_str("<th></th></tr></thead><tbody>");
    html.push_str(rows);
    html.push_str("</tbody></table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<b>"R&D"</b>"#), "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;");
    }

    #[test]
    fn money_keeps_two_places() {
        assert_eq!(money(&Decimal::new(255, 1)), "25.50");
        assert_eq!(money(&Decimal::new(100, 0)), "100.00");
    }

    #[test]
    fn lookup_select_marks_selection() {
        let options = vec![
            LookupOption { id: 1, label: "Bonds".into(), hint: None },
            LookupOption { id: 2, label: "Stocks".into(), hint: None },
        ];
        let html = lookup_select("tipo_id", &options, Some(2), None, Some("All"));
        assert!(html.contains(r#"<option value="">All</option>"#));
        assert!(html.contains(r#"<option value="2" selected>Stocks</option>"#));
        assert!(!html.contains("required"));
    }
}
