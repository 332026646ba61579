use std::fmt::Write;

use service::resource::ListView;
use service::resources::Categories;

use super::{create_form, edit_form, filter_form, input, kind_select, layout, row_actions, table, Page};

impl Page for Categories {
    const PATH: &'static str = "/categorias";
    const TITLE: &'static str = "Categories";

    fn render(view: &ListView<Self>) -> String {
        let f = &view.filter;
        let filter = filter_form(
            Self::PATH,
            &[
                input("text", "descricao", f.description.as_deref().unwrap_or(""), None, r#"placeholder="Description""#),
                kind_select("tipo", f.kind, None, Some("All kinds")),
            ]
            .concat(),
        );
        let create = create_form(
            Self::PATH,
            &[
                input("text", "descricao", "", None, r#"placeholder="Description" maxlength="50" required"#),
                kind_select("tipo", None, None, None),
            ]
            .concat(),
        );

        let mut rows = String::new();
        for r in &view.rows {
            let form = format!("edit-{}", r.id);
            let _ = write!(
                rows,
                "<tr><td>{}{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                edit_form(Self::PATH, r.id),
                r.id,
                input("text", "descricao", &r.description, Some(&form), r#"maxlength="50" required"#),
                kind_select("tipo", Some(r.kind), Some(&form), None),
                row_actions(Self::PATH, r.id)
            );
        }

        layout::page(Self::TITLE, &[filter, create, table(&["ID", "Description", "Kind"], &rows)])
    }
}
