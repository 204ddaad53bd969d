//! Controller Registry — Statically Declared Controller Metadata
//!
//! Controllers announce themselves here at wiring time. Each descriptor
//! carries marker tags at controller and action level, so the exclusion
//! scan in [`crate::exclude`] can run over plain, read-only data.

/// How an action is exposed on its controller.
///
/// Most framework versions expose actions as public methods; some older
/// variants expose them as annotated fields. Both forms are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Method,
    Field,
}

/// A single action on a controller, with the marker tags applied to it.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    name: String,
    kind: ActionKind,
    tags: Vec<String>,
}

impl ActionDescriptor {
    pub fn method(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: ActionKind::Method, tags: Vec::new() }
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: ActionKind::Field, tags: Vec::new() }
    }

    /// Apply a marker tag to this action.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// One registered controller: logical name, optional namespace, class-level
/// tags, and its actions in declaration order.
///
/// Descriptors are read-only once handed to the registry; the scan never
/// mutates them.
#[derive(Debug, Clone)]
pub struct ControllerDescriptor {
    name: String,
    namespace: Option<String>,
    tags: Vec<String>,
    actions: Vec<ActionDescriptor>,
}

impl ControllerDescriptor {
    /// Create a descriptor from the controller's logical name
    /// (see [`logical_name`] for the naming convention).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            tags: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Set the controller's namespace. Controllers without one keep `None`,
    /// the equivalent of the namespace field being absent on the class.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Apply a class-level marker tag covering every action.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn action(mut self, action: ActionDescriptor) -> Self {
        self.actions.push(action);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace_ref(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn actions(&self) -> &[ActionDescriptor] {
        &self.actions
    }
}

/// Ordered, append-only collection of controller descriptors.
///
/// The scan reads this in registration order; nothing in this crate ever
/// mutates a registry after it is built.
#[derive(Debug, Default)]
pub struct ControllerRegistry {
    controllers: Vec<ControllerDescriptor>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, controller: ControllerDescriptor) {
        self.controllers.push(controller);
    }

    pub fn controllers(&self) -> &[ControllerDescriptor] {
        &self.controllers
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }
}

/// Derive a controller's logical name from its type name: strip one
/// trailing `Controller` suffix and decapitalize the first character.
///
/// `"ReportsController"` → `"reports"`, `"AdminController"` → `"admin"`.
pub fn logical_name(type_name: &str) -> String {
    let stem = type_name.strip_suffix("Controller").unwrap_or(type_name);
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
