use std::fmt::Write;

use service::resource::ListView;
use service::resources::Assets;

use super::{create_form, edit_form, filter_form, input, layout, lookup_select, row_actions, table, Page};

impl Page for Assets {
    const PATH: &'static str = "/ativos";
    const TITLE: &'static str = "Assets";

    fn render(view: &ListView<Self>) -> String {
        let types = &view.lookups.asset_types;
        let f = &view.filter;
        let filter = filter_form(
            Self::PATH,
            &[
                input("text", "ticker", f.ticker.as_deref().unwrap_or(""), None, r#"placeholder="Ticker""#),
                input("text", "nome", f.name.as_deref().unwrap_or(""), None, r#"placeholder="Name""#),
                lookup_select("tipo_id", types, f.type_id, None, Some("All types")),
            ]
            .concat(),
        );
        let create = create_form(
            Self::PATH,
            &[
                input("text", "ticker", "", None, r#"placeholder="Ticker" maxlength="10" required"#),
                input("text", "nome", "", None, r#"placeholder="Name" maxlength="100""#),
                lookup_select("tipo_id", types, None, None, None),
            ]
            .concat(),
        );

        let mut rows = String::new();
        for r in &view.rows {
            let form = format!("edit-{}", r.id);
            let _ = write!(
                rows,
                "<tr><td>{}{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                edit_form(Self::PATH, r.id),
                r.id,
                input("text", "ticker", &r.ticker, Some(&form), r#"maxlength="10" required"#),
                input("text", "nome", r.name.as_deref().unwrap_or(""), Some(&form), r#"maxlength="100""#),
                lookup_select("tipo_id", types, Some(r.type_id), Some(&form), None),
                row_actions(Self::PATH, r.id)
            );
        }

        layout::page(Self::TITLE, &[filter, create, table(&["ID", "Ticker", "Name", "Type"], &rows)])
    }
}
