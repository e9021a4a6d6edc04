use std::collections::BTreeMap;

/// A value bound to a template placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(usize),
    Bool(bool),
    /// Inserted verbatim, e.g. a C++ enumerator.
    Symbol(String),
    /// A sequence of `float`s, joined by the expression's separator.
    Floats(Vec<f32>),
}

impl Value {
    /// Appends this value to `out` the way C++ source expects it.
    ///
    /// # Arguments
    /// * `out` - The text being rendered.
    /// * `separator` - Inserted between the items of a sequence, ignored for scalars.
    pub(crate) fn render_into(&self, out: &mut String, separator: &str) {
        match self {
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Symbol(s) => out.push_str(s),
            Value::Floats(xs) => {
                for (i, &x) in xs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(separator);
                    }
                    out.push_str(&float_literal(x));
                }
            }
        }
    }
}

/// Formats `x` as a C++ `float` literal, using the `<math.h>` macros for non-finite values.
fn float_literal(x: f32) -> String {
    if x.is_nan() {
        "NAN".to_string()
    } else if x == f32::INFINITY {
        "INFINITY".to_string()
    } else if x == f32::NEG_INFINITY {
        "-INFINITY".to_string()
    } else {
        // Debug always keeps a fractional part or an exponent, so the suffix stays valid.
        format!("{x:?}f")
    }
}

/// The values to substitute into a template, keyed by placeholder name.
///
/// Iteration order is the lexicographic order of the names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placeholders {
    values: BTreeMap<String, Value>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` to `name`, replacing any previous binding.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}
