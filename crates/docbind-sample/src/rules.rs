//! Ordered heuristics that guess a plausible value from a field's key,
//! label and type. The first rule whose predicate holds wins, so the order
//! of [`RULES`] is part of the contract.

use chrono::NaiveDateTime;
use docbind_catalog::ScalarType;
use docbind_core::Value;

pub const SAMPLE_QRCODE: &str = "SAMPLE-QR-001";
pub const SAMPLE_BARCODE: &str = "1234567890";
pub const SAMPLE_IMAGE_URL: &str = "https://placehold.co/400x400/f0f2f5/a8b1bd?text=Image";
pub const SAMPLE_SIGNATURE_URL: &str = "https://placehold.co/200x100/f0f2f5/a8b1bd?text=Signature";
pub const SAMPLE_AMOUNT: &str = "1,280.00";
pub const SAMPLE_SERIAL: &str = "SN-20240218-0001";
pub const SAMPLE_PERSON: &str = "管理员";
pub const SAMPLE_STATUS: &str = "进行中";
pub const SAMPLE_REMARK: &str = "无";
pub const SAMPLE_NUMBER: f64 = 888.0;

/// What a rule gets to look at.
#[derive(Debug, Clone)]
pub struct FieldProbe<'a> {
    pub ty: ScalarType,
    /// Lower-cased field key.
    pub key: String,
    pub label: &'a str,
}

impl<'a> FieldProbe<'a> {
    pub fn new(ty: ScalarType, key: &str, label: &'a str) -> Self {
        Self {
            ty,
            key: key.to_lowercase(),
            label,
        }
    }

    fn label_has(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.label.contains(n))
    }

    fn key_has(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.key.contains(n))
    }

    fn key_segment(&self, segment: &str) -> bool {
        self.key.split(['_', '.']).any(|s| s == segment)
    }
}

pub struct SampleRule {
    pub name: &'static str,
    pub matches: fn(&FieldProbe<'_>) -> bool,
    pub generate: fn(&FieldProbe<'_>, &NaiveDateTime) -> Value,
}

pub const RULES: &[SampleRule] = &[
    SampleRule {
        name: "qrcode",
        matches: |p| p.key.ends_with("_qrcode"),
        generate: |_, _| Value::from(SAMPLE_QRCODE),
    },
    SampleRule {
        name: "barcode",
        matches: |p| p.key.contains("barcode"),
        generate: |_, _| Value::from(SAMPLE_BARCODE),
    },
    SampleRule {
        name: "image",
        matches: |p| p.ty == ScalarType::Image,
        generate: |_, _| Value::from(SAMPLE_IMAGE_URL),
    },
    SampleRule {
        name: "signature",
        matches: |p| p.ty == ScalarType::Signature,
        generate: |_, _| Value::from(SAMPLE_SIGNATURE_URL),
    },
    SampleRule {
        name: "datetime",
        matches: |p| p.label_has(&["日期", "时间"]) || p.key_has(&["date", "time"]),
        generate: |_, now| Value::String(now.format("%Y-%m-%d %H:%M").to_string()),
    },
    SampleRule {
        name: "amount",
        matches: |p| p.label_has(&["数量", "额"]) || p.key_has(&["quantity", "amount", "price"]),
        generate: |_, _| Value::from(SAMPLE_AMOUNT),
    },
    SampleRule {
        name: "serial",
        matches: |p| p.label_has(&["编号", "代码"]) || p.key_has(&["码", "code"]) || p.key_segment("no"),
        generate: |_, _| Value::from(SAMPLE_SERIAL),
    },
    SampleRule {
        name: "name",
        matches: |p| p.label_has(&["名称", "规格"]) || p.key_has(&["name"]),
        generate: |p, _| {
            let label = if p.label.is_empty() { "数据" } else { p.label };
            Value::String(format!("测试{label}"))
        },
    },
    SampleRule {
        name: "person",
        matches: |p| p.label_has(&["人", "员"]) || p.key_has(&["user", "creator"]),
        generate: |_, _| Value::from(SAMPLE_PERSON),
    },
    SampleRule {
        name: "status",
        matches: |p| p.label_has(&["状态"]) || p.key_has(&["status"]),
        generate: |_, _| Value::from(SAMPLE_STATUS),
    },
    SampleRule {
        name: "remark",
        matches: |p| p.label_has(&["备注"]) || p.key_has(&["remark", "note"]),
        generate: |_, _| Value::from(SAMPLE_REMARK),
    },
];

/// Used when no rule matches.
pub fn fallback(probe: &FieldProbe<'_>, key: &str) -> Value {
    match probe.ty {
        ScalarType::Number => Value::Number(SAMPLE_NUMBER),
        ScalarType::Boolean => Value::Bool(true),
        _ => {
            let shown = if probe.label.is_empty() { key } else { probe.label };
            Value::String(format!("{{{shown}}}"))
        }
    }
}

/// The first rule that answers for this field, `None` when [`fallback`] applies.
pub fn matching_rule(probe: &FieldProbe<'_>) -> Option<&'static SampleRule> {
    RULES.iter().find(|rule| (rule.matches)(probe))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_for(ty: ScalarType, key: &str, label: &str) -> Option<&'static str> {
        matching_rule(&FieldProbe::new(ty, key, label)).map(|r| r.name)
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn qrcode_beats_code() {
        assert_eq!(rule_for(ScalarType::String, "work_order_qrcode", "工单二维码"), Some("qrcode"));
    }

    #[test]
    fn qrcode_needs_suffix() {
        assert_eq!(rule_for(ScalarType::String, "qrcode_size", ""), Some("serial"));
    }

    #[test]
    fn date_beats_amount_and_name() {
        assert_eq!(rule_for(ScalarType::Date, "planned_start_date", "计划开始时间"), Some("datetime"));
        assert_eq!(rule_for(ScalarType::String, "update_time_name", ""), Some("datetime"));
    }

    #[test]
    fn amount_beats_serial() {
        assert_eq!(rule_for(ScalarType::Number, "unit_price_code", ""), Some("amount"));
    }

    #[test]
    fn serial_beats_name() {
        assert_eq!(rule_for(ScalarType::String, "product_code", "产品编码"), Some("serial"));
        assert_eq!(rule_for(ScalarType::String, "order_no", "单号"), Some("serial"));
    }

    #[test]
    fn no_segment_does_not_match_notes() {
        assert_eq!(rule_for(ScalarType::String, "notes", "备注"), Some("remark"));
    }

    #[test]
    fn key_is_matched_case_insensitively() {
        assert_eq!(rule_for(ScalarType::String, "Customer_STATUS", ""), Some("status"));
    }

    #[test]
    fn unmatched_falls_back_by_type() {
        let probe = FieldProbe::new(ScalarType::String, "customer_phone", "客户电话");
        assert!(matching_rule(&probe).is_none());
        assert_eq!(fallback(&probe, "customer_phone"), Value::from("{客户电话}"));

        let probe = FieldProbe::new(ScalarType::String, "Phone", "");
        assert_eq!(fallback(&probe, "Phone"), Value::from("{Phone}"));

        let probe = FieldProbe::new(ScalarType::Boolean, "urgent", "加急");
        assert_eq!(fallback(&probe, "urgent"), Value::Bool(true));
    }
}
