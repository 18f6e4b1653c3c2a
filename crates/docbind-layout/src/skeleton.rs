use docbind_catalog::{ArrayTableConfig, VariableItem};
use docbind_core::{Position, Region, RegionKind, Symbology, Template};
use serde_json::json;
use tracing::debug;

use crate::config::SkeletonLayout;

/// Builds a first-draft page with the default [`SkeletonLayout`].
pub fn build_skeleton(
    base: &Template,
    items: &[VariableItem],
    tables: &[ArrayTableConfig],
) -> Template {
    SkeletonLayout::default().build(base, items, tables)
}

/// True for `<arrayKey>.<digits>.<rest>` when `arrayKey` is rendered as a
/// table; those rows are covered by the table region.
pub fn is_table_row_key(key: &str, tables: &[ArrayTableConfig]) -> bool {
    let mut parts = key.split('.');
    let (Some(head), Some(index), Some(_)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !index.is_empty()
        && index.bytes().all(|b| b.is_ascii_digit())
        && tables.iter().any(|t| t.array_key == head)
}

/// How a variable key is drawn when it becomes its own region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableShape {
    QrCode,
    Signature,
    Text,
}

impl VariableShape {
    pub fn of(key: &str) -> Self {
        if key.ends_with("_qrcode") {
            Self::QrCode
        } else if key == "signature" {
            Self::Signature
        } else {
            Self::Text
        }
    }
}

impl SkeletonLayout {
    /// One region per variable item top to bottom, then one table region per
    /// array-table config. `base` contributes `basePdf` and any extra
    /// template properties; its pages are replaced.
    pub fn build(
        &self,
        base: &Template,
        items: &[VariableItem],
        tables: &[ArrayTableConfig],
    ) -> Template {
        let mut regions = Vec::with_capacity(items.len() + tables.len());
        let mut y = self.top_margin;

        for item in items {
            if is_table_row_key(&item.key, tables) {
                debug!(key = %item.key, "covered by table, no region");
                continue;
            }
            let at = Position::new(self.origin_x, y);
            let (region, advance) = match VariableShape::of(&item.key) {
                VariableShape::QrCode => (self.qrcode_region(&item.key, at), self.qrcode.advance),
                VariableShape::Signature => {
                    (self.signature_region(&item.key, at), self.signature.advance)
                }
                VariableShape::Text => (self.text_region(&item.key, at), self.text.advance),
            };
            regions.push(region);
            y += advance;
        }

        for config in tables {
            if config.columns.is_empty() {
                debug!(array_key = %config.array_key, "table without columns, skipped");
                continue;
            }
            regions.push(self.table_region(config, Position::new(self.origin_x, y)));
            y += self.table.advance;
        }

        let mut template = base.clone();
        template.schemas = vec![regions];
        template
    }

    fn qrcode_region(&self, key: &str, at: Position) -> Region {
        Region::new(
            key,
            RegionKind::Barcode(Symbology::QrCode),
            at,
            (self.qrcode.width, self.qrcode.height),
        )
        .with_content(self.qrcode_placeholder.as_str())
        .with_prop("backgroundColor", json!("#ffffff"))
        .with_prop("barColor", json!("#000000"))
    }

    fn signature_region(&self, key: &str, at: Position) -> Region {
        Region::new(
            key,
            RegionKind::Signature,
            at,
            (self.signature.width, self.signature.height),
        )
        .with_content("")
        .with_prop("rotate", json!(0))
        .with_prop("opacity", json!(1))
    }

    fn text_region(&self, key: &str, at: Position) -> Region {
        Region::new(key, RegionKind::Text, at, (self.text.width, self.text.height))
            .with_content(format!("{{{key}}}"))
            .with_prop("readOnly", json!(true))
    }

    fn table_region(&self, config: &ArrayTableConfig, at: Position) -> Region {
        let cols = config.columns.len();
        let rows = self
            .sample_rows
            .min(config.max_rows.unwrap_or(self.default_max_rows));
        let sample: Vec<Vec<String>> = (1..=rows)
            .map(|i| (1..=cols).map(|j| format!("示例{i}-{j}")).collect())
            .collect();
        let width_pct = 100.0 / cols as f64;
        let cell_padding = json!({ "top": 5, "right": 5, "bottom": 5, "left": 5 });

        Region::new(
            config.array_key.as_str(),
            RegionKind::Table,
            at,
            (self.table.width, self.table.height),
        )
        .with_content(json!(sample).to_string())
        .with_prop("showHead", json!(true))
        .with_prop("head", json!(config.head()))
        .with_prop("headWidthPercentages", json!(vec![width_pct; cols]))
        .with_prop(
            "tableStyles",
            json!({ "borderWidth": 0.3, "borderColor": "#000000" }),
        )
        .with_prop(
            "headStyles",
            json!({
                "fontSize": 10,
                "alignment": "center",
                "verticalAlignment": "middle",
                "backgroundColor": "#f0f0f0",
                "padding": cell_padding,
            }),
        )
        .with_prop(
            "bodyStyles",
            json!({
                "fontSize": 9,
                "alignment": "left",
                "verticalAlignment": "middle",
                "padding": cell_padding,
            }),
        )
    }
}
