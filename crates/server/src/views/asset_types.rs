use std::fmt::Write;

use service::resource::ListView;
use service::resources::AssetTypes;

use super::{create_form, edit_form, filter_form, input, layout, row_actions, table, Page};

impl Page for AssetTypes {
    const PATH: &'static str = "/tipos";
    const TITLE: &'static str = "Asset Types";

    fn render(view: &ListView<Self>) -> String {
        let filter = filter_form(
            Self::PATH,
            &input("text", "description", view.filter.description.as_deref().unwrap_or(""), None, r#"placeholder="Description""#),
        );
        let create = create_form(
            Self::PATH,
            &input("text", "description", "", None, r#"placeholder="Description" maxlength="30" required"#),
        );

        let mut rows = String::new();
        for r in &view.rows {
            let form = format!("edit-{}", r.id);
            let _ = write!(
                rows,
                "<tr><td>{}{}</td><td>{}</td><td>{}</td></tr>",
                edit_form(Self::PATH, r.id),
                r.id,
                input("text", "description", &r.description, Some(&form), r#"maxlength="30" required"#),
                row_actions(Self::PATH, r.id)
            );
        }

        layout::page(Self::TITLE, &[filter, create, table(&["ID", "Description"], &rows)])
    }
}
