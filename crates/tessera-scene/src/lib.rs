//! Boundary validation for **tessera** render requests.
//!
//! Turns an untyped JSON document into typed engine values, or reports the
//! first offending field with its path and the violated constraint. The
//! engine assumes validated input and performs no checks of its own.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `ValidationError`, `ErrorKind`, `SceneError` |
//! | [`request`] | `RenderRequest` |
//! | [`validate`] | `validate` entry point |
//!
//! # Request shape
//!
//! ```json
//! {
//!   "width": 40, "height": 20,
//!   "background": { "ink": {"r":0,"g":0,"b":0}, "paper": {"r":20,"g":20,"b":20}, "pattern": "breton" },
//!   "shapes": [{
//!     "kind": "circle", "size": 3, "position": {"x": 0, "y": 0},
//!     "ink": {"r":255,"g":200,"b":0}, "paper": {"r":255,"g":200,"b":0}, "pattern": "breton",
//!     "strokeColor": {"r":255,"g":255,"b":255}, "strokePosition": "outside", "strokeWidth": 1
//!   }],
//!   "colorDepth": "full"
//! }
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use tessera_scene::parse_str;
//!
//! let req = parse_str(r#"{
//!     "width": 4, "height": 2, "shapes": [],
//!     "background": { "ink": {"r":0,"g":0,"b":0}, "paper": {"r":0,"g":0,"b":0}, "pattern": "breton" }
//! }"#).unwrap();
//! assert_eq!(req.canvas.width, 4);
//! ```

pub mod error;
pub mod request;
pub mod validate;

pub use error::{ErrorKind, SceneError, ValidationError};
pub use request::RenderRequest;
pub use validate::validate;

/// Parses and validates a JSON render request.
pub fn parse_str(src: &str) -> Result<RenderRequest, SceneError> {
    let value: serde_json::Value = serde_json::from_str(src)?;
    Ok(validate(&value)?)
}

#[cfg(test)]
mod validate_tests {
    use serde_json::{Value, json};
    use tessera_engine::RenderConfig;
    use tessera_engine::encode::ColorDepth;
    use tessera_engine::paint::{Color, Pattern};
    use tessera_engine::scene::{ShapeKind, StrokePosition};

    use super::*;

    fn color(r: u8, g: u8, b: u8) -> Value {
        json!({ "r": r, "g": g, "b": b })
    }

    fn shape() -> Value {
        json!({
            "kind": "circle",
            "size": 3,
            "position": { "x": 0, "y": 0 },
            "ink": color(255, 0, 0),
            "paper": color(0, 255, 0),
            "pattern": "striped-vertical",
            "strokeColor": color(255, 255, 255),
            "strokePosition": "outside",
            "strokeWidth": 1.5
        })
    }

    fn request() -> Value {
        json!({
            "width": 40,
            "height": 20,
            "background": {
                "ink": color(255, 165, 0),
                "paper": color(0, 0, 255),
                "pattern": "striped-horizontal"
            },
            "shapes": [shape(), shape()],
            "colorDepth": "quantized256"
        })
    }

    /// Replaces the value at JSON pointer `ptr` and validates.
    fn with(ptr: &str, v: Value) -> Result<RenderRequest, ValidationError> {
        let mut req = request();
        *req.pointer_mut(ptr).unwrap_or_else(|| panic!("no field at {ptr}")) = v;
        validate(&req)
    }

    /// Removes the field at `ptr` (`/parent/name`) and validates.
    fn without(parent: &str, name: &str) -> Result<RenderRequest, ValidationError> {
        let mut req = request();
        let target = if parent.is_empty() { &mut req } else { req.pointer_mut(parent).unwrap() };
        target.as_object_mut().unwrap().remove(name);
        validate(&req)
    }

    fn ok(ptr: &str, v: Value) {
        if let Err(e) = with(ptr, v.clone()) {
            panic!("{ptr} = {v} rejected: {e}");
        }
    }

    fn range(ptr: &str, v: Value, path: &str) {
        let e = with(ptr, v.clone()).unwrap_err();
        assert_eq!(e.path, path, "{ptr} = {v}");
        assert!(matches!(e.kind, ErrorKind::RangeViolation { .. }), "{ptr} = {v}: {e}");
    }

    fn mismatch(ptr: &str, v: Value, path: &str) {
        let e = with(ptr, v.clone()).unwrap_err();
        assert_eq!(e.path, path, "{ptr} = {v}");
        assert!(matches!(e.kind, ErrorKind::TypeMismatch { .. }), "{ptr} = {v}: {e}");
    }

    fn bad_enum(ptr: &str, v: Value, path: &str) {
        let e = with(ptr, v.clone()).unwrap_err();
        assert_eq!(e.path, path, "{ptr} = {v}");
        assert!(matches!(e.kind, ErrorKind::InvalidEnum { .. }), "{ptr} = {v}: {e}");
    }

    // ── accepted ──────────────────────────────────────────────────────────

    #[test]
    fn valid_request_maps_to_engine_types() {
        let req = validate(&request()).unwrap();
        assert_eq!(req.canvas.width, 40);
        assert_eq!(req.canvas.height, 20);
        assert_eq!(req.background.ink, Color::rgb(255, 165, 0));
        assert_eq!(req.background.pattern, Pattern::Breton);
        assert_eq!(req.shapes.len(), 2);
        let s = &req.shapes[0];
        assert_eq!(s.kind, ShapeKind::Circle);
        assert_eq!(s.size, 3.0);
        assert_eq!(s.paper, Color::rgb(0, 255, 0));
        assert_eq!(s.pattern, Pattern::Pinstripe);
        assert_eq!(s.stroke.position, StrokePosition::Outside);
        assert_eq!(s.stroke.width_px, 1.5);
        assert_eq!(req.depth(), ColorDepth::Quantized256);
    }

    #[test]
    fn empty_shapes_are_fine() {
        let req = with("/shapes", json!([])).unwrap();
        assert!(req.shapes.is_empty());
    }

    #[test]
    fn color_depth_is_optional() {
        assert_eq!(without("", "colorDepth").unwrap().color_depth, None);
        assert_eq!(with("/colorDepth", Value::Null).unwrap().depth(), ColorDepth::Full);
    }

    #[test]
    fn integral_floats_count_as_integers() {
        ok("/width", json!(40.0));
        ok("/shapes/0/size", json!(7.0));
    }

    #[test]
    fn pattern_aliases() {
        ok("/background/pattern", json!("breton"));
        ok("/background/pattern", json!("pinstripe"));
    }

    // ── canvas bounds ─────────────────────────────────────────────────────

    #[test]
    fn width_bounds() {
        ok("/width", json!(1));
        range("/width", json!(0), "width");
        ok("/width", json!(120));
        range("/width", json!(121), "width");
    }

    #[test]
    fn height_bounds_and_parity() {
        ok("/height", json!(2));
        range("/height", json!(0), "height");
        range("/height", json!(1), "height");
        ok("/height", json!(64));
        range("/height", json!(65), "height");
        range("/height", json!(66), "height");
        range("/height", json!(21), "height");
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn channel_bounds() {
        for ch in ["r", "g", "b"] {
            ok(&format!("/background/ink/{ch}"), json!(0));
            range(&format!("/background/ink/{ch}"), json!(-1), &format!("background.ink.{ch}"));
            ok(&format!("/background/paper/{ch}"), json!(255));
            let path = format!("background.paper.{ch}");
            range(&format!("/background/paper/{ch}"), json!(256), &path);
        }
        ok("/shapes/0/ink/r", json!(255));
        range("/shapes/0/ink/r", json!(256), "shapes[0].ink.r");
        ok("/shapes/1/strokeColor/b", json!(0));
        range("/shapes/1/strokeColor/b", json!(-1), "shapes[1].strokeColor.b");
        range("/shapes/1/strokeColor/g", json!(300), "shapes[1].strokeColor.g");
        range("/shapes/0/ink/b", json!(-5), "shapes[0].ink.b");
        range("/shapes/0/paper/r", json!(1000), "shapes[0].paper.r");
    }

    // ── shape fields ──────────────────────────────────────────────────────

    #[test]
    fn size_bounds() {
        ok("/shapes/0/size", json!(1));
        range("/shapes/0/size", json!(0), "shapes[0].size");
        ok("/shapes/0/size", json!(100));
        range("/shapes/0/size", json!(101), "shapes[0].size");
    }

    #[test]
    fn position_bounds() {
        for axis in ["x", "y"] {
            let ptr = format!("/shapes/1/position/{axis}");
            let path = format!("shapes[1].position.{axis}");
            ok(&ptr, json!(-1000));
            range(&ptr, json!(-1001), &path);
            ok(&ptr, json!(1000));
            range(&ptr, json!(1001), &path);
        }
    }

    #[test]
    fn stroke_width_bounds() {
        ok("/shapes/0/strokeWidth", json!(0));
        range("/shapes/0/strokeWidth", json!(-0.01), "shapes[0].strokeWidth");
        ok("/shapes/0/strokeWidth", json!(10));
        range("/shapes/0/strokeWidth", json!(10.01), "shapes[0].strokeWidth");
        ok("/shapes/0/strokeWidth", json!(2.25));
    }

    // ── enums ─────────────────────────────────────────────────────────────

    #[test]
    fn enum_values() {
        for kind in ["circle", "square", "triangle"] {
            ok("/shapes/0/kind", json!(kind));
        }
        bad_enum("/shapes/0/kind", json!("hexagon"), "shapes[0].kind");
        bad_enum("/shapes/0/kind", json!("Circle"), "shapes[0].kind");

        for pos in ["inside", "center", "outside"] {
            ok("/shapes/1/strokePosition", json!(pos));
        }
        bad_enum("/shapes/1/strokePosition", json!("middle"), "shapes[1].strokePosition");

        bad_enum("/background/pattern", json!("plaid"), "background.pattern");
        bad_enum("/shapes/0/pattern", json!("checkers"), "shapes[0].pattern");

        for depth in ["full", "quantized256", "monochrome"] {
            ok("/colorDepth", json!(depth));
        }
        bad_enum("/colorDepth", json!("16"), "colorDepth");
        // Command-line aliases are not part of the request format.
        for alias in ["256", "mono", "truecolor", "24bit"] {
            bad_enum("/colorDepth", json!(alias), "colorDepth");
        }
    }

    #[test]
    fn invalid_enum_lists_allowed_values() {
        let e = with("/shapes/0/kind", json!("hexagon")).unwrap_err();
        assert_eq!(
            e.kind,
            ErrorKind::InvalidEnum {
                value: "hexagon".into(),
                allowed: &["circle", "square", "triangle"],
            }
        );
    }

    // ── types ─────────────────────────────────────────────────────────────

    #[test]
    fn type_mismatches() {
        mismatch("/width", json!("40"), "width");
        mismatch("/width", json!(40.5), "width");
        mismatch("/height", json!(true), "height");
        mismatch("/shapes/0/size", json!(2.5), "shapes[0].size");
        mismatch("/shapes/0/strokeWidth", json!("1"), "shapes[0].strokeWidth");
        mismatch("/shapes/0/kind", json!(3), "shapes[0].kind");
        mismatch("/colorDepth", json!(256), "colorDepth");
        mismatch("/shapes", json!({}), "shapes");
        mismatch("/shapes", Value::Null, "shapes");
        mismatch("/background", json!("black"), "background");
        mismatch("/background/ink", json!(7), "background.ink");
    }

    #[test]
    fn missing_fields_are_type_mismatches() {
        let e = without("", "width").unwrap_err();
        assert_eq!(e.path, "width");
        assert_eq!(e.kind, ErrorKind::TypeMismatch { expected: "integer", found: "missing" });

        let e = without("/shapes/1", "strokeWidth").unwrap_err();
        assert_eq!(e.path, "shapes[1].strokeWidth");

        let e = without("/background/paper", "g").unwrap_err();
        assert_eq!(e.path, "background.paper.g");

        let e = without("", "shapes").unwrap_err();
        assert_eq!(e.path, "shapes");
    }

    // ── structure ─────────────────────────────────────────────────────────

    #[test]
    fn null_or_array_records_are_structural() {
        for (ptr, path) in [
            ("/background", "background"),
            ("/background/ink", "background.ink"),
            ("/shapes/0", "shapes[0]"),
            ("/shapes/1/position", "shapes[1].position"),
            ("/shapes/0/strokeColor", "shapes[0].strokeColor"),
        ] {
            for v in [Value::Null, json!([1, 2, 3])] {
                let e = with(ptr, v.clone()).unwrap_err();
                assert_eq!(e.path, path);
                assert!(matches!(e.kind, ErrorKind::StructuralError { .. }), "{ptr} = {v}");
            }
        }
    }

    #[test]
    fn root_must_be_a_record() {
        let e = validate(&json!([1])).unwrap_err();
        assert_eq!(e.path, "$");
        assert_eq!(e.kind, ErrorKind::StructuralError { found: "array" });
        let e = validate(&json!(3)).unwrap_err();
        assert_eq!(e.kind, ErrorKind::TypeMismatch { expected: "object", found: "number" });
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn first_violation_in_traversal_order_wins() {
        let mut req = request();
        req["colorDepth"] = json!("bogus");
        req["shapes"][1]["size"] = json!(0);
        req["shapes"][0]["strokeWidth"] = json!(99);
        req["background"]["pattern"] = json!("plaid");
        assert_eq!(validate(&req).unwrap_err().path, "background.pattern");

        req["background"]["pattern"] = json!("breton");
        assert_eq!(validate(&req).unwrap_err().path, "shapes[0].strokeWidth");

        req["shapes"][0]["strokeWidth"] = json!(1);
        assert_eq!(validate(&req).unwrap_err().path, "shapes[1].size");

        req["shapes"][1]["size"] = json!(1);
        assert_eq!(validate(&req).unwrap_err().path, "colorDepth");

        req["height"] = json!(3);
        req["width"] = json!(0);
        assert_eq!(validate(&req).unwrap_err().path, "width");
    }

    // ── parse_str / render ────────────────────────────────────────────────

    #[test]
    fn parse_str_reports_json_errors() {
        assert!(matches!(parse_str("{ width: 4 "), Err(SceneError::Json(_))));
        assert!(matches!(parse_str("[]"), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn display_names_path_and_reason() {
        let e = with("/shapes/0/size", json!(0)).unwrap_err();
        assert_eq!(
            e.to_string(),
            "invalid render request at shapes[0].size: 0 is outside [1, 100]"
        );
    }

    #[test]
    fn validated_request_renders() {
        let req = validate(&request()).unwrap();
        let out = req.render(&RenderConfig::default());
        assert_eq!(out.split('\n').count(), 10);
        let mono = req.render_at(&RenderConfig::default(), ColorDepth::Monochrome);
        assert!(!mono.contains('\x1b'));
    }
}
