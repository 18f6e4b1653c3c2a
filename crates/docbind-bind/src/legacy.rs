//! Plain-text templates that predate structured layouts.

use docbind_catalog::ArrayTableConfig;

use crate::extract::PLACEHOLDER;

const CELL_SEP: &str = " | ";
const LINE_END: &str = "\r\n";

/// A text table for an array field: a header of column labels followed by
/// one line of `{{array.i.col}}` placeholders per row, up to the config's
/// max rows.
pub fn table_insert_text(config: &ArrayTableConfig) -> String {
    let mut out = config.head().join(CELL_SEP);
    out.push_str(LINE_END);
    for i in 0..config.max_rows_or_default() {
        let cells: Vec<String> = config
            .columns
            .iter()
            .map(|c| format!("{{{{{}.{}.{}}}}}", config.array_key, i, c.key))
            .collect();
        out.push_str(&cells.join(CELL_SEP));
        out.push_str(LINE_END);
    }
    out
}

/// Shows where variables sit by replacing every `{{name}}` with `[name]`.
pub fn preview_legacy(content: &str) -> String {
    PLACEHOLDER
        .replace_all(content, |caps: &regex::Captures<'_>| format!("[{}]", caps[1].trim()))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use docbind_catalog::TableColumn;

    use super::*;

    #[test]
    fn insert_text_lists_placeholders_per_row() {
        let config = ArrayTableConfig {
            array_key: "items".to_string(),
            label: "明细列表".to_string(),
            max_rows: Some(2),
            columns: vec![
                TableColumn::new("material_code", "物料编码"),
                TableColumn::new("qty", "数量"),
            ],
        };
        assert_eq!(
            table_insert_text(&config),
            "物料编码 | 数量\r\n\
             {{items.0.material_code}} | {{items.0.qty}}\r\n\
             {{items.1.material_code}} | {{items.1.qty}}\r\n"
        );
    }

    #[test]
    fn preview_brackets_placeholders() {
        assert_eq!(preview_legacy("单号: {{ code }}, 数量 {{qty}}"), "单号: [code], 数量 [qty]");
        assert_eq!(preview_legacy("no vars"), "no vars");
    }
}
