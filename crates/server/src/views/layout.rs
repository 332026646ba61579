use axum::http::StatusCode;

const NAV: [(&str, &str); 6] = [
    ("/tipos", "Asset Types"),
    ("/ativos", "Assets"),
    ("/aportes", "Contributions"),
    ("/dividendos", "Dividends"),
    ("/categorias", "Categories"),
    ("/movimentacoes", "Movements"),
];

pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Ledger</title>
    <style>
        body {{ font-family: system-ui, sans-serif; margin: 0; color: #1f2937; background: #f9fafb; }}
        nav {{ background: #fff; border-bottom: 1px solid #e5e7eb; padding: 0.75rem 1.5rem; }}
        nav a {{ margin-right: 1rem; color: #4b5563; text-decoration: none; }}
        nav a.active {{ color: #4f46e5; font-weight: 600; }}
        main {{ padding: 1.5rem; }}
        form.filters, form.create {{ margin-bottom: 1rem; display: flex; gap: 0.5rem; flex-wrap: wrap; align-items: center; }}
        form.inline {{ display: inline; }}
        table {{ border-collapse: collapse; width: 100%; background: #fff; }}
        th, td {{ border-bottom: 1px solid #e5e7eb; padding: 0.4rem; text-align: left; }}
    </style>
</head>
<body>
    {}
    <main>{}</main>
</body>
</html>"#,
        title,
        nav(Some(title)),
        content
    )
}

/// Top navigation; the link whose label matches `current` is highlighted.
pub fn nav(current: Option<&str>) -> String {
    let mut html = String::from("<nav>");
    for (path, label) in NAV {
        let class = if Some(label) == current { " class=\"active\"" } else { "" };
        html.push_str(&format!(r#"<a href="{}"{}>{}</a>"#, path, class, label));
    }
    html.push_str("</nav>");
    html
}

/// Page body for a list view: heading, then the pre-rendered sections.
pub fn page(title: &str, sections: &[String]) -> String {
    let mut content = format!("<h1>{}</h1>", title);
    for s in sections {
        content.push_str(s);
    }
    base_html(title, &content)
}

pub fn error_page(status: StatusCode, detail: Option<&str>) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let detail = detail.map(|d| format!("<pre>{}</pre>", d)).unwrap_or_default();
    base_html(
        reason,
        &format!(
            r#"<h1>{} {}</h1><p>The request could not be completed.</p>{}<p><a href="/">Back</a></p>"#,
            status.as_u16(),
            reason,
            detail
        ),
    )
}
