use indexmap::IndexMap;
use serde_json::Value;

use crate::{Guarded, Instance};

/// The raw representation tree a handler builds.
///
/// A node is either plain JSON (passed through resolution untouched), an
/// ordered container of further nodes, a nested domain instance (expanded
/// through its own registered representation), or a guarded field settled by
/// an access check. Resolution matches exhaustively on this closed set, so
/// there is no duck-typed "looks like a placeholder" dispatch anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Opaque JSON value. May itself be an object or array; its interior is
    /// never walked.
    Value(Value),
    /// Ordered mapping with unique keys. Insertion order is preserved into
    /// the resolved output.
    Map(IndexMap<String, Node>),
    /// Ordered sequence.
    Seq(Vec<Node>),
    /// Nested domain object, expanded recursively during resolution.
    Instance(Instance),
    /// Access-gated field, settled during resolution.
    Guarded(Guarded),
}

impl Node {
    /// JSON null as a node.
    pub fn null() -> Self {
        Node::Value(Value::Null)
    }

    /// Builds an ordered map node from `(key, node)` pairs. A repeated key
    /// keeps only the last entry, as in a JSON object literal.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Builds a sequence node.
    pub fn list<I: IntoIterator<Item = Node>>(items: I) -> Self {
        Node::Seq(items.into_iter().collect())
    }

    /// Wraps a domain instance for recursive expansion.
    pub fn instance(entity_type: impl Into<String>, data: Value) -> Self {
        Node::Instance(Instance::new(entity_type, data))
    }

    /// Returns the plain JSON value if this node is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Value(v) => Some(v),
            _ => None,
        }
    }

    /// True if this node is plain JSON with no embedded instances or guards
    /// at this level.
    pub fn is_value(&self) -> bool {
        matches!(self, Node::Value(_))
    }

    /// True if this node is a guarded field.
    pub fn is_guarded(&self) -> bool {
        matches!(self, Node::Guarded(_))
    }
}

impl From<Value> for Node {
    fn from(v: Value) -> Self {
        Node::Value(v)
    }
}

impl From<Instance> for Node {
    fn from(i: Instance) -> Self {
        Node::Instance(i)
    }
}

impl From<Guarded> for Node {
    fn from(g: Guarded) -> Self {
        Node::Guarded(g)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Value(Value::String(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Value(Value::String(s))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Value(Value::Bool(b))
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::Value(Value::from(n))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Value(Value::from(n))
    }
}

impl From<u32> for Node {
    fn from(n: u32) -> Self {
        Node::Value(Value::from(n))
    }
}

impl From<u64> for Node {
    fn from(n: u64) -> Self {
        Node::Value(Value::from(n))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Value(Value::from(n))
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Seq(items)
    }
}
