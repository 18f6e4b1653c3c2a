use docbind_catalog::VariableItem;
use docbind_core::{Position, Region, RegionKind, Symbology, Template};
use serde_json::json;
use tracing::debug;

use crate::skeleton::VariableShape;
use crate::LayoutError;

const GRID_COLUMNS: usize = 5;
const GRID_ROWS: usize = 10;

/// Where the `n`th region dropped onto a page lands: a 5x10 grid that
/// wraps back to the top after 50 placements.
pub fn grid_position(n: usize) -> Position {
    Position::new(
        20.0 + (n % GRID_COLUMNS) as f64 * 10.0,
        30.0 + ((n / GRID_COLUMNS) % GRID_ROWS) as f64 * 10.0,
    )
}

/// Appends a region for `item` to page 0, creating the page if needed.
///
/// A variable already present anywhere in the template is not added twice.
pub fn place_variable<'t>(
    template: &'t mut Template,
    item: &VariableItem,
) -> Result<&'t Region, LayoutError> {
    if template.regions().any(|r| r.name == item.key) {
        return Err(LayoutError::DuplicateName {
            name: item.key.clone(),
        });
    }
    if template.schemas.is_empty() {
        template.schemas.push(Vec::new());
    }
    let page = &mut template.schemas[0];
    let at = grid_position(page.len());

    let region = match VariableShape::of(&item.key) {
        VariableShape::QrCode => Region::new(
            item.key.as_str(),
            RegionKind::Barcode(Symbology::QrCode),
            at,
            (30.0, 30.0),
        )
        .with_content("SAMPLE")
        .with_prop("backgroundColor", json!("#ffffff"))
        .with_prop("barColor", json!("#000000")),
        VariableShape::Signature => {
            Region::new(item.key.as_str(), RegionKind::Signature, at, (60.0, 30.0))
        }
        VariableShape::Text => Region::new(item.key.as_str(), RegionKind::Text, at, (80.0, 8.0))
            .with_content(format!("{{{}}}", item.key))
            .with_prop("readOnly", json!(true)),
    };
    debug!(key = %item.key, x = at.x, y = at.y, "placed variable");
    let idx = page.len();
    page.push(region);
    Ok(&page[idx])
}
