//! Repairs templates that were hand-edited or saved by older designers so the
//! renderer can lay them out.

use docbind_core::{BlankPage, Props, Region, RegionKind, Template};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{json, Map, Value as Json};
use tracing::debug;

pub const DEFAULT_FONT: &str = "NotoSansSC";

/// Minimum height of one table row, in mm.
pub const TABLE_ROW_HEIGHT: f64 = 8.0;

const OPERATIONS_HEAD: [&str; 5] = ["序号", "工序编码", "工序名称", "工序状态", "工作中心"];

lazy_static! {
    static ref REMARK_ONLY: Regex = Regex::new(r"^(备注[：:]\s*)+(\{remarks\})$").expect("remark regex");
    static ref REMARK_REPEATED: Regex = Regex::new(r"(备注[：:]\s*){2,}").expect("remark regex");
}

/// Returns a hardened copy of `template`. Regions keep every property they
/// already had; only missing or inconsistent ones are filled in.
pub fn sanitize(template: &Template) -> Template {
    let mut next = template.clone();

    if next.base_pdf.is_null() {
        next.base_pdf = serde_json::to_value(BlankPage::default()).unwrap_or(Json::Null);
    } else if let Some(base) = next.base_pdf.as_object_mut() {
        if base.get("padding").is_some_and(|p| !p.is_array()) {
            base.insert("padding".to_string(), json!([10, 10, 10, 10]));
        }
    }

    for (page_idx, page) in next.schemas.iter_mut().enumerate() {
        for (idx, region) in page.iter_mut().enumerate() {
            // stand-ins for non-object entries are left as loaded
            if *region == Region::placeholder() {
                continue;
            }
            if region.name.is_empty() {
                region.name = format!("schema_{page_idx}_{idx}");
            }
            sanitize_region(region);
        }
    }
    next
}

fn sanitize_region(region: &mut Region) {
    for key in ["padding", "margin"] {
        if let Some(v) = region.props.get(key) {
            let boxed = box_dimensions(Some(v));
            region.props.insert(key.to_string(), boxed);
        }
    }
    let kind = region.kind.clone();
    if is_font_bearing(&kind) {
        set_if_falsy(&mut region.props, "fontName", json!(DEFAULT_FONT));
    }
    match &kind {
        RegionKind::Table => sanitize_table(region),
        RegionKind::Text => sanitize_text(region),
        RegionKind::Other(kind) if kind == "multiVariableText" => {
            if !region.props.get("variables").is_some_and(Json::is_array) {
                region.props.insert("variables".to_string(), json!([]));
            }
            set_if_falsy(&mut region.props, "fontSize", json!(10));
            set_if_falsy(&mut region.props, "alignment", json!("left"));
        }
        _ => {}
    }
}

fn is_font_bearing(kind: &RegionKind) -> bool {
    match kind {
        RegionKind::Text | RegionKind::Table => true,
        RegionKind::Other(k) => matches!(k.as_str(), "multiVariableText" | "date" | "time" | "dateTime"),
        _ => false,
    }
}

fn sanitize_text(region: &mut Region) {
    set_if_falsy(&mut region.props, "alignment", json!("left"));
    set_if_falsy(&mut region.props, "verticalAlignment", json!("top"));
    set_if_falsy(&mut region.props, "lineHeight", json!(1));
    set_if_falsy(&mut region.props, "fontSize", json!(10));
    if let Some(content) = region.content.as_mut() {
        let normalized = collapse_repeated_remarks(content);
        if normalized != *content {
            debug!(name = %region.name, "collapsed repeated remark label");
            *content = normalized;
        }
    }
}

/// `备注: 备注：{remarks}` becomes `备注：{remarks}`.
pub fn collapse_repeated_remarks(content: &str) -> String {
    if let Some(caps) = REMARK_ONLY.captures(content) {
        return format!("备注：{}", &caps[2]);
    }
    REMARK_REPEATED.replace_all(content, "备注：").into_owned()
}

fn sanitize_table(region: &mut Region) {
    let props = &mut region.props;

    if !props.get("columns").and_then(Json::as_array).is_some_and(|c| !c.is_empty()) {
        props.insert("columns".to_string(), json!([{ "key": "dummy", "label": " " }]));
    }
    let show_head = props.get("showHead") != Some(&Json::Bool(false));
    props.insert("showHead".to_string(), json!(show_head));
    let show_foot = props.get("showFoot").is_some_and(truthy);
    props.insert("showFoot".to_string(), json!(show_foot));
    set_if_falsy(
        props,
        "tableStyles",
        json!({ "borderWidth": 0.1, "borderColor": "#b1b1b1" }),
    );

    if !props.get("head").and_then(Json::as_array).is_some_and(|h| !h.is_empty()) {
        let head: Vec<Json> = props
            .get("columns")
            .and_then(Json::as_array)
            .map(|cols| {
                cols.iter()
                    .map(|c| {
                        c.get("label")
                            .filter(|l| !l.is_null())
                            .or_else(|| c.get("key").filter(|k| !k.is_null()))
                            .cloned()
                            .unwrap_or_else(|| json!(""))
                    })
                    .collect()
            })
            .unwrap_or_default();
        props.insert("head".to_string(), Json::Array(head));
    }

    if matches!(region.name.as_str(), "operations" | "工序列表") {
        repair_operations_head(&region.name, props);
    }

    let head_len = props.get("head").and_then(Json::as_array).map_or(0, Vec::len);
    let widths_ok = props
        .get("headWidthPercentages")
        .and_then(Json::as_array)
        .is_some_and(|w| w.len() == head_len);
    if !widths_ok {
        let pct = 100.0 / head_len.max(1) as f64;
        props.insert("headWidthPercentages".to_string(), json!(vec![pct; head_len]));
    }

    let head_styles = cell_styles(props.get("headStyles"), true);
    props.insert("headStyles".to_string(), head_styles);
    let body_styles = cell_styles(props.get("bodyStyles"), false);
    props.insert("bodyStyles".to_string(), body_styles);
    if !props.get("columnStyles").is_some_and(Json::is_object) {
        props.insert("columnStyles".to_string(), json!({}));
    }

    let body_rows = body_row_count(region);
    let min_height = (1 + body_rows.max(1)) as f64 * TABLE_ROW_HEIGHT;
    if !region.height.is_finite() || region.height < min_height {
        region.height = min_height;
    }

    drop_head_echo(region);
}

fn body_row_count(region: &Region) -> usize {
    let content = region.content.as_deref().filter(|c| !c.is_empty()).unwrap_or("[]");
    match serde_json::from_str::<Json>(content) {
        Ok(Json::Array(rows)) => rows.len(),
        Ok(_) => 0,
        // unparseable content counts as one row
        Err(_) => 1,
    }
}

/// A head cell that swallowed its first data cell (`3序号`, `OP03工序编码`)
/// is put back to the plain label.
fn repair_operations_head(name: &str, props: &mut Props) {
    let Some(head) = props.get("head").and_then(Json::as_array) else {
        return;
    };
    if head.len() != OPERATIONS_HEAD.len() {
        return;
    }
    let corrupted = head.iter().zip(OPERATIONS_HEAD).any(|(h, expected)| {
        h.as_str()
            .is_some_and(|h| h != expected && h.contains(expected))
    });
    if corrupted {
        debug!(name, "restored operations table head");
        props.insert("head".to_string(), json!(OPERATIONS_HEAD));
    }
}

fn drop_head_echo(region: &mut Region) {
    let Some(head) = region.table_head() else {
        return;
    };
    if head.is_empty() {
        return;
    }
    let Some(rows) = region.table_rows() else {
        return;
    };
    let Some(first) = rows.first() else {
        return;
    };
    let echoes_head = first.len() == head.len()
        && first.iter().zip(&head).all(|(cell, label)| cell_text(cell) == *label);
    if echoes_head {
        debug!(name = %region.name, "dropped body row repeating the head");
        region.content = Some(Json::from(rows[1..].to_vec()).to_string());
    }
}

fn cell_styles(existing: Option<&Json>, head: bool) -> Json {
    let default_border = json!({ "top": 0.1, "right": 0.1, "bottom": 0.1, "left": 0.1 });
    let mut styles = Map::new();
    styles.insert("fontSize".into(), json!(if head { 9 } else { 8 }));
    styles.insert("alignment".into(), json!(if head { "center" } else { "left" }));
    styles.insert("verticalAlignment".into(), json!("middle"));
    styles.insert("fontName".into(), json!(DEFAULT_FONT));
    if head {
        styles.insert("backgroundColor".into(), json!("#f1f1f1"));
    }
    let existing = existing.and_then(Json::as_object);
    if let Some(existing) = existing {
        for (k, v) in existing {
            styles.insert(k.clone(), v.clone());
        }
    }

    let padding = existing
        .and_then(|e| e.get("padding"))
        .filter(|p| !p.is_null())
        .unwrap_or(&json!(5))
        .clone();
    styles.insert("padding".into(), box_dimensions(Some(&padding)));

    let border = match existing.and_then(|e| e.get("borderWidth")).and_then(Json::as_object) {
        Some(given) => {
            let mut merged = default_border.as_object().cloned().unwrap_or_default();
            for (k, v) in given {
                merged.insert(k.clone(), v.clone());
            }
            Json::Object(merged)
        }
        None => default_border,
    };
    styles.insert("borderWidth".into(), border);

    if !head && existing.and_then(|e| e.get("alternateBackgroundColor")).map_or(true, Json::is_null) {
        styles.insert("alternateBackgroundColor".into(), json!(""));
    }
    Json::Object(styles)
}

/// Normalizes a CSS-like box: a number applies to all four sides, an object
/// is completed with zeros, anything else is all zeros.
fn box_dimensions(v: Option<&Json>) -> Json {
    if let Some(n) = v.and_then(Json::as_f64) {
        return json!({ "top": n, "right": n, "bottom": n, "left": n });
    }
    let mut out = Map::new();
    for side in ["top", "right", "bottom", "left"] {
        out.insert(side.into(), json!(0));
    }
    if let Some(given) = v.and_then(Json::as_object) {
        for (k, val) in given {
            out.insert(k.clone(), val.clone());
        }
    }
    Json::Object(out)
}

fn truthy(v: &Json) -> bool {
    match v {
        Json::Null => false,
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Json::String(s) => !s.is_empty(),
        Json::Array(_) | Json::Object(_) => true,
    }
}

fn set_if_falsy(props: &mut Props, key: &str, default: Json) {
    if !props.get(key).is_some_and(truthy) {
        props.insert(key.to_string(), default);
    }
}

fn cell_text(v: &Json) -> String {
    match v {
        Json::String(s) => s.clone(),
        Json::Null => "null".to_string(),
        other => other.to_string(),
    }
}
