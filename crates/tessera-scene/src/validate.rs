use core::str::FromStr;

use serde_json::{Map, Value};
use tessera_engine::coords::{Canvas, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, Vec2};
use tessera_engine::encode::ColorDepth;
use tessera_engine::paint::{Background, Color, Pattern};
use tessera_engine::scene::{Shape, ShapeKind, Stroke, StrokePosition};

use crate::error::{ErrorKind, ValidationError};
use crate::request::RenderRequest;

type Record = Map<String, Value>;

/// Validates an untyped render request.
///
/// Fields are checked in a fixed order (width, height, background, shapes,
/// colorDepth; record fields in declaration order) and the first violation
/// is returned. Nothing is rendered for an invalid request.
pub fn validate(request: &Value) -> Result<RenderRequest, ValidationError> {
    Validator::new().request(request)
}

// ── Validator ─────────────────────────────────────────────────────────────

/// Walks the request while tracking the path of the field being checked.
struct Validator {
    path: Vec<Segment>,
}

enum Segment {
    Field(&'static str),
    Index(usize),
}

impl Validator {
    fn new() -> Self {
        Self { path: Vec::new() }
    }

    fn path_string(&self) -> String {
        if self.path.is_empty() {
            return "$".to_owned();
        }
        let mut s = String::new();
        for seg in &self.path {
            match seg {
                Segment::Field(name) => {
                    if !s.is_empty() {
                        s.push('.');
                    }
                    s.push_str(name);
                }
                Segment::Index(i) => {
                    s.push('[');
                    s.push_str(&i.to_string());
                    s.push(']');
                }
            }
        }
        s
    }

    fn err(&self, kind: ErrorKind) -> ValidationError {
        ValidationError::new(self.path_string(), kind)
    }

    fn mismatch(&self, expected: &'static str, v: Option<&Value>) -> ValidationError {
        self.err(ErrorKind::TypeMismatch { expected, found: type_name(v) })
    }

    /// Runs `f` with `name` pushed onto the path.
    fn field<T>(
        &mut self,
        name: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        self.path.push(Segment::Field(name));
        let out = f(self)?;
        self.path.pop();
        Ok(out)
    }

    fn index<T>(
        &mut self,
        i: usize,
        f: impl FnOnce(&mut Self) -> Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        self.path.push(Segment::Index(i));
        let out = f(self)?;
        self.path.pop();
        Ok(out)
    }

    // ── primitives ────────────────────────────────────────────────────────

    fn expect_record<'v>(&self, v: Option<&'v Value>) -> Result<&'v Record, ValidationError> {
        match v {
            Some(Value::Object(map)) => Ok(map),
            Some(Value::Null) | Some(Value::Array(_)) => {
                Err(self.err(ErrorKind::StructuralError { found: type_name(v) }))
            }
            _ => Err(self.mismatch("object", v)),
        }
    }

    fn expect_integer(
        &self,
        v: Option<&Value>,
        min: i64,
        max: i64,
    ) -> Result<i64, ValidationError> {
        let Some(Value::Number(n)) = v else {
            return Err(self.mismatch("integer", v));
        };

        let value = if let Some(i) = n.as_i64() {
            i as f64
        } else {
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 => f,
                _ => {
                    return Err(self.err(ErrorKind::TypeMismatch {
                        expected: "integer",
                        found: "fractional number",
                    }));
                }
            }
        };

        if value < min as f64 || value > max as f64 {
            return Err(self.err(ErrorKind::RangeViolation {
                value: n.to_string(),
                constraint: format!("is outside [{min}, {max}]"),
            }));
        }
        Ok(value as i64)
    }

    fn expect_number(&self, v: Option<&Value>, min: f64, max: f64) -> Result<f64, ValidationError> {
        let Some(Value::Number(n)) = v else {
            return Err(self.mismatch("number", v));
        };
        let value = n.as_f64().unwrap_or(f64::NAN);
        if !(min..=max).contains(&value) {
            return Err(self.err(ErrorKind::RangeViolation {
                value: n.to_string(),
                constraint: format!("is outside [{min}, {max}]"),
            }));
        }
        Ok(value)
    }

    fn expect_enum<T: FromStr>(
        &self,
        v: Option<&Value>,
        allowed: &'static [&'static str],
    ) -> Result<T, ValidationError> {
        let Some(Value::String(s)) = v else {
            return Err(self.mismatch("string", v));
        };
        // `allowed` is the wire vocabulary; `FromStr` may accept more aliases.
        let parsed = allowed.contains(&s.as_str()).then(|| s.parse::<T>().ok()).flatten();
        parsed.ok_or_else(|| self.err(ErrorKind::InvalidEnum { value: s.clone(), allowed }))
    }

    // ── records ───────────────────────────────────────────────────────────

    fn request(&mut self, v: &Value) -> Result<RenderRequest, ValidationError> {
        let root = self.expect_record(Some(v))?;

        let width = self.field("width", |s| {
            s.expect_integer(root.get("width"), 1, MAX_WIDTH as i64)
        })?;
        let height = self.field("height", |s| {
            let h = s.expect_integer(root.get("height"), MIN_HEIGHT as i64, MAX_HEIGHT as i64)?;
            if h % 2 != 0 {
                return Err(s.err(ErrorKind::RangeViolation {
                    value: h.to_string(),
                    constraint: "is not even".to_owned(),
                }));
            }
            Ok(h)
        })?;
        let background = self.field("background", |s| s.background(root.get("background")))?;
        let shapes = self.field("shapes", |s| s.shapes(root.get("shapes")))?;
        let color_depth = self.field("colorDepth", |s| match root.get("colorDepth") {
            None | Some(Value::Null) => Ok(None),
            v => s.expect_enum::<ColorDepth>(v, &ColorDepth::NAMES).map(Some),
        })?;

        log::debug!(
            "validated request: {width}x{height}, {} shapes, depth {:?}",
            shapes.len(),
            color_depth
        );

        Ok(RenderRequest {
            canvas: Canvas::new(width as u32, height as u32),
            background,
            shapes,
            color_depth,
        })
    }

    fn color(&mut self, v: Option<&Value>) -> Result<Color, ValidationError> {
        let rec = self.expect_record(v)?;
        let r = self.field("r", |s| s.expect_integer(rec.get("r"), 0, 255))?;
        let g = self.field("g", |s| s.expect_integer(rec.get("g"), 0, 255))?;
        let b = self.field("b", |s| s.expect_integer(rec.get("b"), 0, 255))?;
        Ok(Color::rgb(r as u8, g as u8, b as u8))
    }

    fn pattern(&mut self, v: Option<&Value>) -> Result<Pattern, ValidationError> {
        self.expect_enum(v, &Pattern::NAMES)
    }

    fn background(&mut self, v: Option<&Value>) -> Result<Background, ValidationError> {
        let rec = self.expect_record(v)?;
        let ink = self.field("ink", |s| s.color(rec.get("ink")))?;
        let paper = self.field("paper", |s| s.color(rec.get("paper")))?;
        let pattern = self.field("pattern", |s| s.pattern(rec.get("pattern")))?;
        Ok(Background::new(ink, paper, pattern))
    }

    fn shapes(&mut self, v: Option<&Value>) -> Result<Vec<Shape>, ValidationError> {
        let Some(Value::Array(items)) = v else {
            return Err(self.mismatch("array", v));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.index(i, |s| s.shape(item)))
            .collect()
    }

    fn shape(&mut self, v: &Value) -> Result<Shape, ValidationError> {
        let rec = self.expect_record(Some(v))?;
        let kind = self.field("kind", |s| {
            s.expect_enum::<ShapeKind>(rec.get("kind"), &ShapeKind::NAMES)
        })?;
        let size = self.field("size", |s| {
            s.expect_integer(rec.get("size"), Shape::MIN_SIZE as i64, Shape::MAX_SIZE as i64)
        })?;
        let position = self.field("position", |s| s.position(rec.get("position")))?;
        let ink = self.field("ink", |s| s.color(rec.get("ink")))?;
        let paper = self.field("paper", |s| s.color(rec.get("paper")))?;
        let pattern = self.field("pattern", |s| s.pattern(rec.get("pattern")))?;
        let stroke_color = self.field("strokeColor", |s| s.color(rec.get("strokeColor")))?;
        let stroke_position = self.field("strokePosition", |s| {
            s.expect_enum::<StrokePosition>(rec.get("strokePosition"), &StrokePosition::NAMES)
        })?;
        let stroke_width = self.field("strokeWidth", |s| {
            s.expect_number(rec.get("strokeWidth"), 0.0, Stroke::MAX_WIDTH_PX as f64)
        })?;

        Ok(Shape::new(kind, size as f32, position, ink)
            .with_paper(paper)
            .with_pattern(pattern)
            .with_stroke(Stroke::new(stroke_color, stroke_position, stroke_width as f32)))
    }

    fn position(&mut self, v: Option<&Value>) -> Result<Vec2, ValidationError> {
        let rec = self.expect_record(v)?;
        let max = Shape::MAX_COORD as i64;
        let x = self.field("x", |s| s.expect_integer(rec.get("x"), -max, max))?;
        let y = self.field("y", |s| s.expect_integer(rec.get("y"), -max, max))?;
        Ok(Vec2::new(x as f32, y as f32))
    }
}

fn type_name(v: Option<&Value>) -> &'static str {
    match v {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
