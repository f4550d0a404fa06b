use crate::internal::*;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;

/// Value of a deserialized node attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Attr {
    String(String),
    Int(i64),
    Ints(Vec<i64>),
    Float(f32),
    Bool(bool),
    DatumType(DatumType),
    List(Vec<Attr>),
}

impl Attr {
    pub fn kind(&self) -> &'static str {
        match self {
            Attr::String(_) => "string",
            Attr::Int(_) => "int",
            Attr::Ints(_) => "list of ints",
            Attr::Float(_) => "float",
            Attr::Bool(_) => "bool",
            Attr::DatumType(_) => "datum type",
            Attr::List(_) => "list",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Attr::Ints(_) | Attr::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Attr::String(s) = self { Some(s.as_str()) } else { None }
    }

    pub fn as_datum_type(&self) -> Option<DatumType> {
        if let Attr::DatumType(dt) = self { Some(*dt) } else { None }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Attr::String(s) => write!(f, "{:?}", s),
            Attr::Int(i) => write!(f, "{}", i),
            Attr::Ints(is) => write!(f, "[{}]", is.iter().join(", ")),
            Attr::Float(x) => write!(f, "{}", x),
            Attr::Bool(b) => write!(f, "{}", b),
            Attr::DatumType(dt) => write!(f, "{:?}", dt),
            Attr::List(items) => write!(f, "[{}]", items.iter().join(", ")),
        }
    }
}

impl From<&str> for Attr {
    fn from(s: &str) -> Attr {
        Attr::String(s.to_string())
    }
}

impl From<String> for Attr {
    fn from(s: String) -> Attr {
        Attr::String(s)
    }
}

impl From<i64> for Attr {
    fn from(i: i64) -> Attr {
        Attr::Int(i)
    }
}

impl From<Vec<i64>> for Attr {
    fn from(is: Vec<i64>) -> Attr {
        Attr::Ints(is)
    }
}

impl From<f32> for Attr {
    fn from(x: f32) -> Attr {
        Attr::Float(x)
    }
}

impl From<bool> for Attr {
    fn from(b: bool) -> Attr {
        Attr::Bool(b)
    }
}

impl From<DatumType> for Attr {
    fn from(dt: DatumType) -> Attr {
        Attr::DatumType(dt)
    }
}

/// One operator instance as it comes out of the IR deserializer.
///
/// `version` holds the opset the operator was declared in (`opset3`,
/// `extension`...). Attributes are kept as they were read, until an
/// extender rewrites them.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub op: String,
    pub version: Option<String>,
    pub attrs: BTreeMap<String, Attr>,
}

impl Node {
    pub fn new(name: impl Into<String>, op: impl Into<String>) -> Node {
        Node { name: name.into(), op: op.into(), version: None, attrs: BTreeMap::new() }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Node {
        self.version = Some(version.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Attr>) -> Node {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn get_opset(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn has_valid(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn get_attr_opt(&self, name: &str) -> Option<&Attr> {
        self.attrs.get(name)
    }

    pub fn get_attr(&self, name: &str) -> IrResult<&Attr> {
        self.get_attr_opt(name).ok_or_else(|| format_err!("{} has no attribute {}", self, name))
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Attr>) -> Option<Attr> {
        self.attrs.insert(name.into(), value.into())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Node {:?} ({}", self.name, self.op)?;
        if let Some(version) = &self.version {
            write!(f, ", {}", version)?;
        }
        write!(f, ")")
    }
}
