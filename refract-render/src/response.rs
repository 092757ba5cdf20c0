//! Response assembly: zero or more instances into one JSON body.

use refract_model::Instance;
use refract_registry::Registry;
use serde_json::Value;

use crate::error::ResolveError;
use crate::resolver::{Resolution, Resolver};

/// Mimetype used when neither the caller nor any involved representation
/// handler declares one.
pub const DEFAULT_MIMETYPE: &str = "application/json";

/// Status carried by responses unless the caller overrides it.
pub const STATUS_OK: u16 = 200;

/// A fully resolved response, ready for a transport layer to encode.
///
/// The status is passed through unchanged; interpreting it is the
/// transport's job.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub body: Value,
    pub mimetype: String,
    pub status: u16,
}

/// Chainable assembly of one response over a sealed registry.
///
/// Body shape follows the object count: zero objects give `{}` (or `[]`
/// under [`as_list`](Self::as_list)), one object gives its bare resolved
/// representation unless `as_list` forces a single-element list, and two
/// or more always give a list in input order.
pub struct ResponseBuilder<'a> {
    registry: &'a Registry,
    objects: Vec<Instance>,
    as_list: bool,
    version: Option<u32>,
    mimetype: Option<String>,
    status: u16,
}

impl<'a> ResponseBuilder<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            objects: Vec::new(),
            as_list: false,
            version: None,
            mimetype: None,
            status: STATUS_OK,
        }
    }

    /// Adds one instance to the response.
    #[must_use]
    pub fn object(mut self, instance: Instance) -> Self {
        self.objects.push(instance);
        self
    }

    /// Adds several instances, keeping their order.
    #[must_use]
    pub fn objects(mut self, instances: impl IntoIterator<Item = Instance>) -> Self {
        self.objects.extend(instances);
        self
    }

    /// Forces list output even for zero or one instance.
    #[must_use]
    pub fn as_list(mut self) -> Self {
        self.as_list = true;
        self
    }

    /// Requests a specific representation version for every instance in
    /// the response, root and nested alike.
    #[must_use]
    pub fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Overrides the response mimetype. Beats any handler declaration.
    #[must_use]
    pub fn mimetype(mut self, mimetype: impl Into<String>) -> Self {
        self.mimetype = Some(mimetype.into());
        self
    }

    /// Sets the status code passed through to the transport layer.
    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Resolves every instance and assembles the final response.
    pub fn build(self) -> Result<ApiResponse, ResolveError> {
        let mimetype = self.response_mimetype();
        let mut resolver = Resolver::new(self.registry, self.version);

        let body = if self.objects.len() == 1 && !self.as_list {
            match resolver.represent(&self.objects[0])? {
                Resolution::Value(value) => value,
                Resolution::Removed => Value::Null,
            }
        } else if self.objects.is_empty() && !self.as_list {
            Value::Object(serde_json::Map::new())
        } else {
            let mut items = Vec::with_capacity(self.objects.len());
            for instance in &self.objects {
                match resolver.represent(instance)? {
                    Resolution::Value(value) => items.push(value),
                    Resolution::Removed => {}
                }
            }
            Value::Array(items)
        };

        Ok(ApiResponse {
            body,
            mimetype,
            status: self.status,
        })
    }

    /// First handler-declared mimetype in input order, unless the caller
    /// overrode it. Lookups here are soft: a genuinely missing handler
    /// fails moments later in resolution, with better context.
    fn response_mimetype(&self) -> String {
        if let Some(mimetype) = &self.mimetype {
            return mimetype.clone();
        }
        self.objects
            .iter()
            .find_map(|instance| {
                self.registry
                    .find_representation(&instance.entity_type, self.version)
                    .and_then(|rep| rep.mimetype())
            })
            .unwrap_or(DEFAULT_MIMETYPE)
            .to_string()
    }
}
