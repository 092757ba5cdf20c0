//! Recursive resolution of raw representation trees.

use refract_model::{Instance, Node};
use refract_registry::Registry;
use serde_json::Value;
use tracing::debug;

use crate::error::ResolveError;
use crate::evaluate::{Evaluation, evaluate};

/// Outcome of resolving one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A fully resolved JSON value: no guards, no instances left.
    Value(Value),
    /// The node resolved to nothing; the containing map entry or sequence
    /// element must be dropped. Consumed by the containing walk and never
    /// present in a produced body.
    Removed,
}

/// Depth-first walker turning raw trees into plain JSON.
///
/// One resolver serves one response. It carries the request version used
/// for every representation lookup and the path of instances currently
/// being expanded, which is how cyclic embeddings are caught instead of
/// recursing forever.
pub struct Resolver<'a> {
    registry: &'a Registry,
    version: Option<u32>,
    expanding: Vec<Instance>,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry, version: Option<u32>) -> Self {
        Self {
            registry,
            version,
            expanding: Vec::new(),
        }
    }

    /// Builds and fully resolves the representation of one instance.
    pub fn represent(&mut self, instance: &Instance) -> Result<Resolution, ResolveError> {
        self.expand(instance)
    }

    /// Resolves one node against the instance whose representation
    /// produced it.
    ///
    /// Guards are settled against `owner` (the containing instance, not
    /// the root of the response); nested instances become the owner of
    /// their own subtree. Maps and sequences are rebuilt fresh, dropping
    /// removed entries, so removal never corrupts iteration.
    pub fn resolve(&mut self, node: Node, owner: &Instance) -> Result<Resolution, ResolveError> {
        match node {
            Node::Value(value) => Ok(Resolution::Value(value)),
            Node::Map(entries) => {
                let mut resolved = serde_json::Map::new();
                for (key, child) in entries {
                    match self.resolve(child, owner)? {
                        Resolution::Value(value) => {
                            resolved.insert(key, value);
                        }
                        Resolution::Removed => {}
                    }
                }
                Ok(Resolution::Value(Value::Object(resolved)))
            }
            Node::Seq(items) => {
                let mut resolved = Vec::with_capacity(items.len());
                for item in items {
                    match self.resolve(item, owner)? {
                        Resolution::Value(value) => resolved.push(value),
                        Resolution::Removed => {}
                    }
                }
                Ok(Resolution::Value(Value::Array(resolved)))
            }
            Node::Instance(instance) => self.expand(&instance),
            Node::Guarded(guarded) => match evaluate(self.registry, guarded, owner)? {
                Evaluation::Keep(kept) => self.resolve(kept, owner),
                Evaluation::Remove => Ok(Resolution::Removed),
            },
        }
    }

    fn expand(&mut self, instance: &Instance) -> Result<Resolution, ResolveError> {
        if self.expanding.contains(instance) {
            return Err(ResolveError::CyclicRepresentation {
                entity_type: instance.entity_type.clone(),
            });
        }

        let representation = self
            .registry
            .representation(&instance.entity_type, self.version)?;
        debug!(
            entity_type = %instance.entity_type,
            depth = self.expanding.len(),
            "expanding instance"
        );

        let tree = representation.build(instance);
        self.expanding.push(instance.clone());
        let resolved = self.resolve(tree, instance);
        self.expanding.pop();
        resolved
    }
}
