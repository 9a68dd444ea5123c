// Wire types for the solve endpoint and the rendering policy for its replies.
//
// The endpoint accepts `{"query": "..."}` and answers with loosely shaped
// JSON. Nothing about the reply is validated: it is decoded defensively into
// `SolveResponse` and whatever does not fit falls back to a raw dump.

use std::io;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of `POST /api/solve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveRequest<'a> {
    pub query: &'a str,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// A reply from the solve endpoint, classified by its top-level `ok` flag.
///
/// Optional fields are only `Some` when present and truthy, mirroring how
/// the reply has always been read. `raw` keeps the whole value for the
/// fallback dump.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveResponse {
    /// `ok` is truthy.
    Success {
        mode: Option<Value>,
        result: Option<Value>,
        raw: Value,
    },
    /// `ok` is falsy or missing.
    Failure { error: Option<Value>, raw: Value },
    /// The reply is not a JSON object at all.
    Malformed(Value),
}

impl SolveResponse {
    /// Classify a parsed reply. Never fails.
    pub fn decode(raw: Value) -> Self {
        if !raw.is_object() {
            return SolveResponse::Malformed(raw);
        }

        if truthy_field(&raw, "ok").is_some() {
            SolveResponse::Success {
                mode: truthy_field(&raw, "mode").cloned(),
                result: truthy_field(&raw, "result").cloned(),
                raw,
            }
        } else {
            SolveResponse::Failure {
                error: truthy_field(&raw, "error").cloned(),
                raw,
            }
        }
    }

    /// Text for the result panel.
    ///
    /// - success: optional `"Mode: {mode}\n\n"` prefix, then the pretty
    ///   `result`, or the pretty whole reply when there is no result
    /// - failure: the `error` text, or the pretty whole reply
    /// - malformed: the pretty whole reply
    pub fn render(&self) -> String {
        match self {
            SolveResponse::Success { mode, result, raw } => {
                let mut out = String::new();
                if let Some(mode) = mode {
                    out.push_str(&format!("Mode: {}\n\n", display_value(mode)));
                }
                out.push_str(&pretty_json(result.as_ref().unwrap_or(raw)));
                out
            }
            SolveResponse::Failure { error, raw } => match error {
                Some(error) => display_value(error),
                None => pretty_json(raw),
            },
            SolveResponse::Malformed(raw) => pretty_json(raw),
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SolveResponse::Success { .. } => "success",
            SolveResponse::Failure { .. } => "failure",
            SolveResponse::Malformed(_) => "malformed",
        }
    }

    pub fn raw(&self) -> &Value {
        match self {
            SolveResponse::Success { raw, .. }
            | SolveResponse::Failure { raw, .. }
            | SolveResponse::Malformed(raw) => raw,
        }
    }
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

/// JavaScript-style truthiness: `null`, `false`, `0`, `NaN` and `""` are
/// falsy; arrays and objects (even empty ones) are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Pretty-print with two-space indentation, numbers in JavaScript form.
pub fn pretty_json(value: &Value) -> String {
    write_json(value, JsNumbers(PrettyFormatter::with_indent(b"  ")))
}

/// Single-line JSON, numbers in JavaScript form.
pub fn compact_json(value: &Value) -> String {
    write_json(value, JsNumbers(CompactFormatter))
}

fn write_json<F: Formatter>(value: &Value, formatter: F) -> String {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}

/// Wraps a formatter so floats print the way `Number.prototype.toString`
/// does: `2.0` becomes `2`, `1e21` becomes `1e+21`.
struct JsNumbers<F>(F);

impl<F: Formatter> Formatter for JsNumbers<F> {
    fn write_f32<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f32) -> io::Result<()> {
        self.write_f64(writer, f64::from(value))
    }

    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        let mut buffer = ryu_js::Buffer::new();
        writer.write_all(buffer.format(value).as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}

fn truthy_field<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|v| is_truthy(v))
}

/// Strings verbatim, anything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => compact_json(other),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
