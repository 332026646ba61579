use std::fmt::Write;

use service::resource::ListView;
use service::resources::Dividends;

use super::{create_form, edit_form, filter_form, input, layout, lookup_select, money, row_actions, table, Page};

impl Page for Dividends {
    const PATH: &'static str = "/dividendos";
    const TITLE: &'static str = "Dividends";

    fn render(view: &ListView<Self>) -> String {
        let assets = &view.lookups.assets;
        let f = &view.filter;
        let day = f.payment_date.map(|d| d.to_string()).unwrap_or_default();
        let filter = filter_form(
            Self::PATH,
            &[
                lookup_select("ativo_id", assets, f.asset_id, None, Some("All assets")),
                input("text", "ticker", f.ticker.as_deref().unwrap_or(""), None, r#"placeholder="Ticker""#),
                input("date", "data_pagamento", &day, None, ""),
            ]
            .concat(),
        );
        let create = create_form(
            Self::PATH,
            &[
                lookup_select("ativo_id", assets, None, None, None),
                input("date", "data_pagamento", "", None, "required"),
                input("number", "valor_recebido", "", None, r#"placeholder="Received value" step="0.01" required"#),
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
                lookup_select("ativo_id", assets, Some(r.asset_id), Some(&form), None),
                input("date", "data_pagamento", &r.payment_date.to_string(), Some(&form), "required"),
                input("number", "valor_recebido", &money(&r.received_value), Some(&form), r#"step="0.01" required"#),
                row_actions(Self::PATH, r.id)
            );
        }

        layout::page(Self::TITLE, &[filter, create, table(&["ID", "Asset", "Payment date", "Received value"], &rows)])
    }
}
