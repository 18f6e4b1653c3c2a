use docbind_core::Value;

/// Columns of the work-order operations table, in print order.
pub const OPERATION_COLUMNS: [&str; 5] = [
    "sequence",
    "operation_code",
    "operation_name",
    "status",
    "work_center_name",
];

/// How the elements of an array become table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableProjection {
    /// Fixed [`OPERATION_COLUMNS`], independent of key order in the data.
    Operations,
    /// Values of each element in its own enumeration order.
    Generic,
}

impl TableProjection {
    pub fn for_region(name: &str) -> Self {
        if name == "operations" {
            Self::Operations
        } else {
            Self::Generic
        }
    }

    /// Projects `items` and pads every row to the widest one.
    pub fn rows(self, items: &[Value]) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = items.iter().map(|item| self.row(item)).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        rows
    }

    fn row(self, item: &Value) -> Vec<String> {
        match self {
            Self::Operations => {
                let map = item.as_map();
                OPERATION_COLUMNS
                    .iter()
                    .map(|col| {
                        map.and_then(|m| m.get(*col))
                            .map(Value::to_text)
                            .unwrap_or_default()
                    })
                    .collect()
            }
            Self::Generic => match item {
                Value::Map(m) => m.values().map(Value::to_text).collect(),
                Value::Seq(cells) => cells.iter().map(Value::to_text).collect(),
                scalar => vec![scalar.to_text()],
            },
        }
    }
}
