use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Footprint of one region kind in the skeleton column, in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub width: f64,
    pub height: f64,
    /// Vertical distance to the next region's top edge.
    pub advance: f64,
}

impl Slot {
    pub const fn new(width: f64, height: f64, advance: f64) -> Self {
        Self {
            width,
            height,
            advance,
        }
    }
}

/// Geometry used by [`SkeletonLayout::build`]. Every field has a default, so a
/// layout file only needs the values it changes.
///
/// ```yaml
/// origin_x: 15
/// table:
///   width: 180
///   height: 60
///   advance: 70
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonLayout {
    pub origin_x: f64,
    pub top_margin: f64,
    pub text: Slot,
    pub qrcode: Slot,
    pub signature: Slot,
    pub table: Slot,
    /// Placeholder rows drawn in a skeleton table, capped by the table's own
    /// max rows.
    pub sample_rows: usize,
    /// Max rows assumed for a table config that does not set one.
    pub default_max_rows: usize,
    /// Content shown in a skeleton QR code before real data is bound.
    pub qrcode_placeholder: String,
}

impl Default for SkeletonLayout {
    fn default() -> Self {
        Self {
            origin_x: 10.0,
            top_margin: 10.0,
            text: Slot::new(80.0, 8.0, 12.0),
            qrcode: Slot::new(30.0, 30.0, 36.0),
            signature: Slot::new(80.0, 40.0, 46.0),
            table: Slot::new(170.0, 50.0, 60.0),
            sample_rows: 3,
            default_max_rows: docbind_catalog::DEFAULT_MAX_ROWS,
            qrcode_placeholder: "WO-SAMPLE-001".to_string(),
        }
    }
}

impl SkeletonLayout {
    /// Parses YAML (and therefore JSON) layout overrides.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LayoutError> {
        let layout: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        for (at, v) in [("origin_x", self.origin_x), ("top_margin", self.top_margin)] {
            if !v.is_finite() || v < 0.0 {
                return Err(LayoutError::InvalidDimension { at: at.to_string() });
            }
        }
        for (name, slot) in [
            ("text", &self.text),
            ("qrcode", &self.qrcode),
            ("signature", &self.signature),
            ("table", &self.table),
        ] {
            for (field, v) in [
                ("width", slot.width),
                ("height", slot.height),
                ("advance", slot.advance),
            ] {
                if !v.is_finite() || v <= 0.0 {
                    return Err(LayoutError::InvalidDimension {
                        at: format!("{name}.{field}"),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let layout = SkeletonLayout::from_yaml_str("origin_x: 15\ntable:\n  width: 180\n  height: 60\n  advance: 70\n")
            .unwrap();
        assert_eq!(layout.origin_x, 15.0);
        assert_eq!(layout.table, Slot::new(180.0, 60.0, 70.0));
        assert_eq!(layout.text, SkeletonLayout::default().text);
        assert_eq!(layout.sample_rows, 3);
    }

    #[test]
    fn empty_input_is_default() {
        assert_eq!(SkeletonLayout::from_yaml_str("  \n").unwrap(), SkeletonLayout::default());
    }

    #[test]
    fn json_is_accepted() {
        let layout = SkeletonLayout::from_yaml_str(r#"{"top_margin": 20, "sample_rows": 1}"#).unwrap();
        assert_eq!(layout.top_margin, 20.0);
        assert_eq!(layout.sample_rows, 1);
    }

    #[test]
    fn rejects_non_positive_slot() {
        let err = SkeletonLayout::from_yaml_str("text:\n  width: 0\n  height: 8\n  advance: 12\n").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDimension { ref at } if at == "text.width"));
    }

    #[test]
    fn rejects_unparseable_yaml() {
        assert!(matches!(
            SkeletonLayout::from_yaml_str("origin_x: [1, 2"),
            Err(LayoutError::Config(_))
        ));
    }
}
