//! Plausible stand-in data for previewing a template before real business
//! data exists.

pub mod rules;

use chrono::{Local, NaiveDateTime};
use docbind_catalog::{CatalogError, Catalogs, FieldDescriptor, FieldKind, ScalarType};
use docbind_core::Value;
use indexmap::IndexMap;
use tracing::trace;

use crate::rules::{fallback, matching_rule, FieldProbe};

/// Rows generated for every array field.
pub const SAMPLE_ROWS: usize = 3;

pub const PREVIEW_PRINT_USER: &str = "系统管理员";
pub const PREVIEW_COMPANY_NAME: &str = "智能制造演示环境";

/// Generates sample values against a fixed clock so output is reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer {
    now: NaiveDateTime,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    /// Uses the local wall clock.
    pub fn new() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// A value for a single scalar field. Never fails.
    pub fn synthesize(&self, ty: ScalarType, key: &str, label: &str) -> Value {
        let probe = FieldProbe::new(ty, key, label);
        match matching_rule(&probe) {
            Some(rule) => {
                trace!(key, rule = rule.name, "sample rule matched");
                (rule.generate)(&probe, &self.now)
            }
            None => fallback(&probe, key),
        }
    }

    /// A complete sample record for `kind`, its own fields plus the common
    /// ones. Array fields get [`SAMPLE_ROWS`] rows.
    pub fn synthesize_document(&self, catalogs: &Catalogs, kind: &str) -> Result<Value, CatalogError> {
        let fields = catalogs.flatten(kind)?;
        let mut record = IndexMap::with_capacity(fields.len());
        for field in fields {
            record.insert(field.key.clone(), self.field_value(field));
        }
        Ok(Value::Map(record))
    }

    /// Variables for a designer preview: ambient print context first, then
    /// the synthesized document on top. An unknown kind still yields the
    /// ambient context.
    pub fn preview_variables(&self, catalogs: &Catalogs, kind: &str) -> Value {
        let timestamp = self.now.format("%Y-%m-%d %H:%M:%S").to_string();
        let mut vars = IndexMap::new();
        vars.insert("print_user".to_string(), Value::from(PREVIEW_PRINT_USER));
        vars.insert("print_time".to_string(), Value::String(timestamp.clone()));
        vars.insert("dateTime".to_string(), Value::String(timestamp));
        vars.insert(
            "date".to_string(),
            Value::String(self.now.format("%Y-%m-%d").to_string()),
        );
        vars.insert("company_name".to_string(), Value::from(PREVIEW_COMPANY_NAME));
        vars.insert("document_type_label".to_string(), Value::from(kind));

        match self.synthesize_document(catalogs, kind) {
            Ok(Value::Map(doc)) => vars.extend(doc),
            Ok(_) => {}
            Err(err) => trace!(%err, "preview without document fields"),
        }
        Value::Map(vars)
    }

    fn field_value(&self, field: &FieldDescriptor) -> Value {
        match &field.kind {
            FieldKind::Scalar(ty) => self.synthesize(*ty, &field.key, &field.label),
            FieldKind::ArrayOf(children) => Value::Seq(
                (0..SAMPLE_ROWS)
                    .map(|_| {
                        Value::Map(
                            children
                                .iter()
                                .map(|child| (child.key.clone(), self.field_value(child)))
                                .collect(),
                        )
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn fixed() -> Synthesizer {
        let now = NaiveDate::from_ymd_opt(2024, 2, 18)
            .and_then(|d| d.and_hms_opt(9, 5, 30))
            .unwrap();
        Synthesizer::at(now)
    }

    #[test]
    fn dates_follow_the_clock() {
        let value = fixed().synthesize(ScalarType::Date, "planned_start", "计划开始时间");
        assert_eq!(value, Value::from("2024-02-18 09:05"));
    }

    #[test]
    fn work_order_qrcode_and_signature() {
        let s = fixed();
        assert_eq!(
            s.synthesize(ScalarType::String, "work_order_qrcode", "工单二维码"),
            Value::from(rules::SAMPLE_QRCODE)
        );
        assert_eq!(
            s.synthesize(ScalarType::Signature, "signature", "签名"),
            Value::from(rules::SAMPLE_SIGNATURE_URL)
        );
        assert_eq!(
            s.synthesize(ScalarType::Image, "photo", "照片"),
            Value::from(rules::SAMPLE_IMAGE_URL)
        );
    }

    #[test]
    fn name_uses_label() {
        let s = fixed();
        assert_eq!(s.synthesize(ScalarType::String, "product_name", "产品名称"), Value::from("测试产品名称"));
        assert_eq!(s.synthesize(ScalarType::String, "name", ""), Value::from("测试数据"));
    }

    #[test]
    fn number_fallback() {
        assert_eq!(
            fixed().synthesize(ScalarType::Number, "priority", "优先级"),
            Value::Number(888.0)
        );
    }
}
