use std::collections::HashSet;

use docbind_catalog::{CatalogError, Catalogs, FieldKind};

#[test]
fn builtin_lists_every_kind_but_common() {
    let catalogs = Catalogs::builtin();
    let kinds: Vec<_> = catalogs.list().map(|c| c.kind.as_str()).collect();
    assert_eq!(kinds.first(), Some(&"work_order"));
    assert!(kinds.contains(&"delivery_notice"));
    assert!(kinds.contains(&"purchase_order"));
    assert!(!kinds.contains(&"common"));
    assert!(matches!(
        catalogs.get("common"),
        Err(CatalogError::UnknownKind { .. })
    ));
}

#[test]
fn field_keys_are_unique_and_arrays_have_columns() {
    let catalogs = Catalogs::builtin();
    for catalog in catalogs.list() {
        let mut seen = HashSet::new();
        for field in &catalog.fields {
            assert!(
                seen.insert(field.key.as_str()),
                "duplicate key {} in {}",
                field.key,
                catalog.kind
            );
            if let FieldKind::ArrayOf(children) = &field.kind {
                assert!(!children.is_empty(), "{}.{} has no columns", catalog.kind, field.key);
                for child in children {
                    assert!(!child.key.contains('.'), "child keys are bare: {}", child.key);
                }
            }
        }
        assert!(catalog.print_code.is_some(), "{} has no print code", catalog.kind);
    }
}

#[test]
fn work_order_variable_items() {
    let catalogs = Catalogs::builtin();
    let items = catalogs.variable_items("work_order").unwrap();
    let keys: Vec<_> = items.iter().map(|i| i.key.as_str()).collect();

    assert_eq!(keys.first(), Some(&"code"));
    assert!(keys.contains(&"operations.0.operation_code"));
    assert!(keys.contains(&"operations.0.work_center_name"));
    assert!(!keys.contains(&"operations"));
    assert_eq!(keys.last(), Some(&"tenant_name"));
}

#[test]
fn flatten_is_kind_then_common() {
    let catalogs = Catalogs::builtin();
    let fields = catalogs.flatten("material").unwrap();
    let keys: Vec<_> = fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "code",
            "name",
            "spec",
            "unit",
            "category",
            "company_name",
            "print_user",
            "print_time",
            "tenant_name"
        ]
    );
}

#[test]
fn kind_without_arrays_has_no_tables() {
    let catalogs = Catalogs::builtin();
    assert!(catalogs.array_tables("material").unwrap().is_empty());
    let wo = catalogs.array_tables("work_order").unwrap();
    assert_eq!(wo.len(), 1);
    assert_eq!(wo[0].max_rows, Some(10));
    assert_eq!(wo[0].head(), vec!["序号", "工序编码", "工序名称", "工序状态", "工作中心"]);
    let quotation = catalogs.array_tables("quotation").unwrap();
    assert_eq!(quotation[0].array_key, "items");
}

#[test]
fn reverse_label_lookup() {
    let catalogs = Catalogs::builtin();
    assert_eq!(catalogs.key_by_label("工单编号").as_deref(), Some("code"));
    assert_eq!(
        catalogs.key_by_label("工序编码（第1项）").as_deref(),
        Some("operations.0.operation_code")
    );
    assert_eq!(catalogs.key_by_label("组织名称").as_deref(), Some("tenant_name"));
    assert_eq!(catalogs.key_by_label("不存在"), None);
}

#[test]
fn print_codes() {
    let catalogs = Catalogs::builtin();
    assert_eq!(catalogs.print_code("work_order"), Some("WORK_ORDER_PRINT"));
    assert_eq!(catalogs.print_code("nope"), None);
}

#[test]
fn catalog_serializes_with_tagged_kind() {
    let catalogs = Catalogs::builtin();
    let json = serde_json::to_value(catalogs.get("work_order").unwrap()).unwrap();
    assert_eq!(json["fields"][0]["kind"], serde_json::json!({ "scalar": "string" }));
    assert!(json["fields"][17]["kind"]["array_of"].is_array());
}
