use indexmap::IndexMap;

/// Insertion-ordered mapping used for dictionary values. Duplicate keys
/// keep their first position and take the last-written value.
pub type Dict = IndexMap<String, Value>;

/// A parsed property-list value.
///
/// `Skip` marks a value that must be omitted from output entirely; parent
/// containers drop it rather than emitting a placeholder. `Scalar` carries
/// the raw, already-dequoted token text; typing (boolean/integer/float/
/// string) is decided at render time, not at parse time.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Skip,
    Scalar(String),
    Array(Vec<Value>),
    Dict(Dict),
}

impl Value {
    pub const fn is_skip(&self) -> bool {
        matches!(self, Value::Skip)
    }

    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub const fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Dict(entries) => entries.get(key),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Skip => "skip",
            Value::Scalar(_) => "scalar",
            Value::Array(_) => "array",
            Value::Dict(_) => "dict",
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}
