use chrono::NaiveDate;
use docbind_catalog::{CatalogError, Catalogs, FieldKind};
use docbind_core::Value;
use docbind_sample::{Synthesizer, SAMPLE_ROWS};
use maplit::hashset;

fn synth() -> Synthesizer {
    let now = NaiveDate::from_ymd_opt(2024, 2, 18)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap();
    Synthesizer::at(now)
}

#[test]
fn every_builtin_kind_gets_a_full_record() {
    let catalogs = Catalogs::builtin();
    let s = synth();
    for catalog in catalogs.list() {
        let doc = s.synthesize_document(&catalogs, &catalog.kind).unwrap();
        let map = doc.as_map().expect("record is a map");
        for field in catalogs.flatten(&catalog.kind).unwrap() {
            let value = map
                .get(&field.key)
                .unwrap_or_else(|| panic!("{} missing {}", catalog.kind, field.key));
            if let FieldKind::ArrayOf(children) = &field.kind {
                let rows = value.as_seq().expect("array field is a sequence");
                assert_eq!(rows.len(), SAMPLE_ROWS);
                for row in rows {
                    let row = row.as_map().expect("row is a map");
                    let keys: Vec<_> = row.keys().map(String::as_str).collect();
                    let expected: Vec<_> = children.iter().map(|c| c.key.as_str()).collect();
                    assert_eq!(keys, expected);
                }
            } else {
                assert!(!value.is_null());
            }
        }
    }
}

#[test]
fn work_order_sample_values() {
    let catalogs = Catalogs::builtin();
    let doc = synth().synthesize_document(&catalogs, "work_order").unwrap();

    assert_eq!(doc.resolve("work_order_qrcode"), Some(&Value::from("SAMPLE-QR-001")));
    assert_eq!(doc.resolve("code"), Some(&Value::from("SN-20240218-0001")));
    assert_eq!(doc.resolve("planned_start_date"), Some(&Value::from("2024-02-18 14:30")));
    assert_eq!(doc.resolve("status"), Some(&Value::from("进行中")));
    assert_eq!(
        doc.resolve("operations.2.operation_code"),
        Some(&Value::from("SN-20240218-0001"))
    );
    assert_eq!(doc.resolve("operations.0.sequence"), Some(&Value::Number(888.0)));
}

#[test]
fn synthesis_is_deterministic_for_a_fixed_clock() {
    let catalogs = Catalogs::builtin();
    let a = synth().synthesize_document(&catalogs, "quotation").unwrap();
    let b = synth().synthesize_document(&catalogs, "quotation").unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_kind_is_reported() {
    let catalogs = Catalogs::builtin();
    assert!(matches!(
        synth().synthesize_document(&catalogs, "nope"),
        Err(CatalogError::UnknownKind { .. })
    ));
}

#[test]
fn preview_variables_layer_document_over_print_context() {
    let catalogs = Catalogs::builtin();
    let vars = synth().preview_variables(&catalogs, "work_order");
    let map = vars.as_map().unwrap();

    assert_eq!(map.get("dateTime"), Some(&Value::from("2024-02-18 14:30:00")));
    assert_eq!(map.get("date"), Some(&Value::from("2024-02-18")));
    assert_eq!(map.get("document_type_label"), Some(&Value::from("work_order")));
    // document fields win over the ambient context
    assert_eq!(map.get("print_time"), Some(&Value::from("2024-02-18 14:30")));
    assert!(map.contains_key("operations"));
}

#[test]
fn preview_variables_for_unknown_kind_keep_context_only() {
    let catalogs = Catalogs::builtin();
    let vars = synth().preview_variables(&catalogs, "nope");
    let keys: std::collections::HashSet<_> =
        vars.as_map().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        hashset! {"print_user", "print_time", "dateTime", "date", "company_name", "document_type_label"}
    );
    assert_eq!(vars.resolve("print_user"), Some(&Value::from("系统管理员")));
}
