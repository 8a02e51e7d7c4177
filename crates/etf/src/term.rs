//! [`Term`] — the dynamically-typed value tree produced by the decoder.

use serde_json::Value;

/// One decoded term, primitive or composite.
///
/// The wire format distinguishes more kinds than the decoded value does:
/// atoms, char-list strings, and binaries all decode to [`Term::Str`], and
/// tuples of either arity width decode to [`Term::List`] alongside proper
/// lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// One-byte unsigned integer (wire tag 97).
    SmallInt(u8),
    /// 32-bit signed integer (wire tag 98).
    Int(i32),
    /// IEEE-754 double (wire tag 70).
    Float(f64),
    /// Atom, char-list string, or binary (wire tags 100, 107, 109).
    Str(String),
    /// List or tuple (wire tags 108, 104, 105).
    List(Vec<Term>),
    /// Map (wire tag 116); entries keep insertion order.
    Map(Vec<(Term, Term)>),
}

impl From<Term> for Value {
    fn from(term: Term) -> Self {
        match term {
            Term::SmallInt(n) => Value::from(n),
            Term::Int(n) => Value::from(n),
            Term::Float(f) => serde_json::json!(f),
            Term::Str(s) => Value::String(s),
            Term::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Term::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (json_key(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// JSON object keys must be strings; non-string term keys are rendered
/// through their JSON form.
fn json_key(key: Term) -> String {
    match key {
        Term::Str(s) => s,
        Term::SmallInt(n) => n.to_string(),
        Term::Int(n) => n.to_string(),
        other => Value::from(other).to_string(),
    }
}
