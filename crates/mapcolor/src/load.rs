//! YAML layout loader.
//!
//! Format
//! ```yaml
//! layout:
//!   A:
//!     points: ["0,0", "1,0", "1,1", "0,1"]
//!   B:
//!     points: [[2, 0], [3, 0], [3, 1], [2, 1]]
//! ```
//! Points are `"x,y"` strings or two-element integer sequences with each
//! coordinate within `COORD_LIMIT`. Regions are created in document order.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::geom2::{in_coord_range, pt, Point2, Poly2, COORD_LIMIT};
use crate::layout::Layout;

/// Fewest vertices a region may have.
pub const MIN_VERTICES: usize = 3;

#[derive(Debug, Deserialize)]
struct LayoutDoc {
    #[serde(default)]
    layout: Mapping,
}

/// Parse a layout description. A document without a `layout` key is an
/// empty layout.
pub fn from_yaml_str(text: &str) -> Result<Layout> {
    let doc: LayoutDoc = serde_yaml::from_str(text)?;
    let mut layout = Layout::new();
    for (key, entry) in &doc.layout {
        let label = label_of(key)?;
        let poly = parse_region(&label, entry)?;
        layout.add_polygon(label, poly);
    }
    Ok(layout)
}

pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Layout> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let layout = from_yaml_str(&text)?;
    tracing::info!(path = %path.display(), regions = layout.len(), "loaded layout");
    Ok(layout)
}

fn label_of(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::input_shape(
            format!("{other:?}"),
            "polygon names must be scalars",
        )),
    }
}

fn parse_region(label: &str, entry: &Value) -> Result<Poly2> {
    let points = entry
        .get("points")
        .and_then(Value::as_sequence)
        .ok_or_else(|| Error::input_shape(label, "missing `points` list"))?;
    let vertices = points
        .iter()
        .enumerate()
        .map(|(k, v)| parse_point(label, k, v))
        .collect::<Result<Vec<_>>>()?;
    if vertices.len() < MIN_VERTICES {
        return Err(Error::input_shape(
            label,
            format!(
                "needs at least {MIN_VERTICES} vertices, got {}",
                vertices.len()
            ),
        ));
    }
    Ok(Poly2::new(vertices))
}

fn parse_point(label: &str, k: usize, v: &Value) -> Result<Point2> {
    let coords: Vec<Option<i64>> = match v {
        Value::String(s) => s.split(',').map(|c| c.trim().parse().ok()).collect(),
        Value::Sequence(seq) => seq.iter().map(Value::as_i64).collect(),
        other => {
            return Err(Error::input_shape(
                label,
                format!("point {k}: expected \"x,y\" or [x, y], got {other:?}"),
            ))
        }
    };
    match coords.as_slice() {
        [Some(x), Some(y)] if in_coord_range(*x) && in_coord_range(*y) => Ok(pt(*x, *y)),
        [Some(_), Some(_)] => Err(Error::input_shape(
            label,
            format!("point {k}: coordinates must be within ±{COORD_LIMIT}"),
        )),
        [_, _] => Err(Error::input_shape(
            label,
            format!("point {k}: coordinates must be integers"),
        )),
        c => Err(Error::input_shape(
            label,
            format!("point {k}: expected 2 coordinates, got {}", c.len()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
layout:
  A:
    points: ["0,0", "1,0", "1,1", "0,1"]
  B:
    points: [[2, 0], [3, 0], [3, 1], [2, 1]]
  C:
    points: [" 0, 2", "1 ,2", "1,3"]
"#;

    fn shape_reason(err: Error) -> (String, String) {
        match err {
            Error::InputShape { label, reason } => (label, reason),
            other => panic!("expected InputShape, got {other}"),
        }
    }

    #[test]
    fn both_point_syntaxes_in_document_order() {
        let layout = from_yaml_str(SAMPLE).unwrap();
        let labels: Vec<&str> = layout.regions().iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(layout.regions()[0].poly().vertices[2], pt(1, 1));
        assert_eq!(layout.regions()[1].poly().vertices[0], pt(2, 0));
        assert_eq!(layout.regions()[2].poly().vertices[1], pt(1, 2));
        assert!(layout.regions().iter().all(|r| r.color().is_none()));
    }

    #[test]
    fn missing_layout_is_empty() {
        assert!(from_yaml_str("other: 1\n").unwrap().is_empty());
        assert!(from_yaml_str("layout: {}\n").unwrap().is_empty());
    }

    #[test]
    fn numeric_names_become_labels() {
        let layout = from_yaml_str("layout:\n  7:\n    points: ['0,0', '1,0', '0,1']\n").unwrap();
        assert_eq!(layout.regions()[0].label(), "7");
    }

    #[test]
    fn wrong_coordinate_count() {
        let err = from_yaml_str("layout:\n  A:\n    points: ['0,0', '1,0,4', '0,1']\n").unwrap_err();
        let (label, reason) = shape_reason(err);
        assert_eq!(label, "A");
        assert!(reason.contains("point 1"), "{reason}");
        assert!(reason.contains("2 coordinates"), "{reason}");
    }

    #[test]
    fn non_integer_coordinates() {
        for doc in [
            "layout:\n  A:\n    points: ['0,0', '1.5,0', '0,1']\n",
            "layout:\n  A:\n    points: [[0, 0], [x, 0], [0, 1]]\n",
            "layout:\n  A:\n    points: [[0, 0], [0.5, 0], [0, 1]]\n",
        ] {
            let (label, reason) = shape_reason(from_yaml_str(doc).unwrap_err());
            assert_eq!(label, "A");
            assert!(reason.contains("integers"), "{reason}");
        }
    }

    #[test]
    fn coordinates_are_bounded() {
        let at_bound = format!(
            "layout:\n  A:\n    points: [[{m}, 0], [{n}, 0], [0, {m}]]\n",
            m = COORD_LIMIT,
            n = -COORD_LIMIT
        );
        let layout = from_yaml_str(&at_bound).unwrap();
        assert_eq!(layout.regions()[0].poly().vertices[1], pt(-COORD_LIMIT, 0));

        for doc in [
            format!("layout:\n  A:\n    points: ['0,0', '{},0', '0,1']\n", COORD_LIMIT + 1),
            "layout:\n  A:\n    points: ['9223372036854775806,0', '9223372036854775807,0', '9223372036854775807,1']\n".to_string(),
            format!("layout:\n  A:\n    points: [[0, 0], [0, {}], [1, 0]]\n", i64::MIN),
        ] {
            let (label, reason) = shape_reason(from_yaml_str(&doc).unwrap_err());
            assert_eq!(label, "A");
            assert!(reason.contains("within"), "{reason}");
        }
    }

    #[test]
    fn too_few_vertices() {
        let err = from_yaml_str("layout:\n  tiny:\n    points: ['0,0', '1,0']\n").unwrap_err();
        let (label, reason) = shape_reason(err);
        assert_eq!(label, "tiny");
        assert!(reason.contains("at least 3"), "{reason}");
    }

    #[test]
    fn missing_points_list() {
        let err = from_yaml_str("layout:\n  A:\n    corners: []\n").unwrap_err();
        assert_eq!(shape_reason(err).0, "A");
    }

    #[test]
    fn syntax_errors_are_yaml_errors() {
        assert!(matches!(
            from_yaml_str("layout: [unclosed"),
            Err(Error::Yaml(_))
        ));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.yaml");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(from_yaml_file(&path).unwrap().len(), 3);
        assert!(matches!(
            from_yaml_file(dir.path().join("nope.yaml")),
            Err(Error::Io(_))
        ));
    }
}
