//! Inspector-style text rendering for Values.
//!
//! `Display` renders a value on one line (`{ a: 1, b: [ 1, 2 ] }`), which is
//! what visit logs use. [`format_value`] renders the same syntax with one
//! entry per line for larger samples.

use core::fmt::{self, Write};

use crate::value::Value;

/// Formats a double the way a script runtime prints numbers: the shortest
/// round-trip digits, integral values without a fraction, `NaN`, `Infinity`,
/// `-Infinity`.
///
/// Magnitudes from `1e-6` up to (not including) `1e21` print in fixed
/// notation; anything outside that range prints as `1e+21` or `1.5e-7`.
pub(crate) struct Number(pub(crate) f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            f.write_str("NaN")
        } else if n.is_infinite() {
            f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
        } else if n == 0.0 {
            // -0 prints as 0
            f.write_str("0")
        } else if (1e-6..1e21).contains(&n.abs()) {
            write!(f, "{n}")
        } else {
            let exp = format!("{n:e}");
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{mantissa}e+{power}")
                }
                _ => f.write_str(&exp),
            }
        }
    }
}

/// Format a Value across multiple lines, two spaces per nesting level.
pub fn format_value(value: &Value) -> String {
    let mut ctx = FormatContext {
        output: String::new(),
        indent: 0,
        multiline: true,
    };
    format_value_into(&mut ctx, value);
    ctx.output
}

struct FormatContext {
    output: String,
    indent: usize,
    multiline: bool,
}

impl FormatContext {
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
    }

    /// Writes the separator that opens an entry inside `{ }` or `[ ]`.
    fn open_entry(&mut self, first: bool) {
        if !first {
            self.output.push(',');
        }
        if self.multiline {
            self.output.push('\n');
            self.write_indent();
        } else {
            self.output.push(' ');
        }
    }

    fn close(&mut self, close: char) {
        if self.multiline {
            self.output.push('\n');
            self.write_indent();
        } else {
            self.output.push(' ');
        }
        self.output.push(close);
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn format_value_into(ctx: &mut FormatContext, value: &Value) {
    match value {
        Value::String(s) => write_string(&mut ctx.output, s),
        Value::Array(items) => {
            if items.is_empty() {
                ctx.output.push_str("[]");
                return;
            }
            ctx.output.push('[');
            ctx.indent += 1;
            for (i, item) in items.iter().enumerate() {
                ctx.open_entry(i == 0);
                format_value_into(ctx, item);
            }
            ctx.indent -= 1;
            ctx.close(']');
        }
        Value::Object(obj) => {
            if obj.is_empty() {
                ctx.output.push_str("{}");
                return;
            }
            ctx.output.push('{');
            ctx.indent += 1;
            for (i, (key, item)) in obj.iter().enumerate() {
                ctx.open_entry(i == 0);
                if is_identifier(key) {
                    ctx.output.push_str(key);
                } else {
                    write_string(&mut ctx.output, key);
                }
                ctx.output.push_str(": ");
                format_value_into(ctx, item);
            }
            ctx.indent -= 1;
            ctx.close('}');
        }
        // Leaves and opaque built-ins use their Debug rendering.
        other => {
            let _ = write!(ctx.output, "{other:?}");
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ctx = FormatContext {
            output: String::new(),
            indent: 0,
            multiline: false,
        };
        format_value_into(&mut ctx, self);
        f.write_str(&ctx.output)
    }
}
