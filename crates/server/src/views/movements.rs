use std::fmt::Write;

use service::resource::ListView;
use service::resources::Movements;

use super::{create_form, edit_form, filter_form, input, kind_select, layout, lookup_select, money, row_actions, table, Page};

impl Page for Movements {
    const PATH: &'static str = "/movimentacoes";
    const TITLE: &'static str = "Movements";

    fn render(view: &ListView<Self>) -> String {
        let categories = &view.lookups.categories;
        let f = &view.filter;
        let day = f.movement_date.map(|d| d.to_string()).unwrap_or_default();
        let filter = filter_form(
            Self::PATH,
            &[
                input("date", "data_movimento", &day, None, ""),
                lookup_select("categoria_id", categories, f.category_id, None, Some("All categories")),
                kind_select("tipo", f.kind, None, Some("All kinds")),
                input("text", "descricao", f.description.as_deref().unwrap_or(""), None, r#"placeholder="Description""#),
            ]
            .concat(),
        );
        let create = create_form(
            Self::PATH,
            &[
                input("date", "data_movimento", "", None, "required"),
                lookup_select("categoria_id", categories, None, None, None),
                input("number", "valor", "", None, r#"placeholder="Value" step="0.01" required"#),
                input("text", "descricao", "", None, r#"placeholder="Description" maxlength="200""#),
            ]
            .concat(),
        );

        let mut rows = String::new();
        for r in &view.rows {
            let form = format!("edit-{}", r.id);
            let _ = write!(
                rows,
                "<tr><td>{}{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                edit_form(Self::PATH, r.id),
                r.id,
                input("date", "data_movimento", &r.movement_date.to_string(), Some(&form), "required"),
                lookup_select("categoria_id", categories, Some(r.category_id), Some(&form), None),
                r.category_kind,
                input("number", "valor", &money(&r.value), Some(&form), r#"step="0.01" required"#),
                input("text", "descricao", r.description.as_deref().unwrap_or(""), Some(&form), r#"maxlength="200""#),
                row_actions(Self::PATH, r.id)
            );
        }

        layout::page(
            Self::TITLE,
            &[filter, create, table(&["ID", "Date", "Category", "Kind", "Value", "Description"], &rows)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use models::financial_category::CategoryKind;
    use rust_decimal::Decimal;
    use service::lookups::{LookupOption, Lookups};
    use service::resources::movements::{MovementFilter, MovementRow};

    #[test]
    fn renders_kind_and_selected_category() {
        let view = ListView::<Movements> {
            rows: vec![MovementRow {
                id: 3,
                movement_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                category_id: 2,
                category_description: "Rent".into(),
                category_kind: CategoryKind::Expense,
                value: Decimal::new(150075, 2),
                description: None,
            }],
            lookups: Lookups {
                categories: vec![
                    LookupOption { id: 1, label: "Salary".into(), hint: Some("INCOME".into()) },
                    LookupOption { id: 2, label: "Rent".into(), hint: Some("EXPENSE".into()) },
                ],
                ..Default::default()
            },
            filter: MovementFilter { kind: Some(CategoryKind::Expense), ..Default::default() },
        };
        let html = Movements::render(&view);
        assert!(html.contains(r#"<option value="2" selected>Rent (EXPENSE)</option>"#));
        assert!(html.contains(r#"value="2024-01-10""#));
        assert!(html.contains(r#"value="1500.75""#));
        assert!(html.contains(r#"<option value="EXPENSE" selected>EXPENSE</option>"#));
    }
}
