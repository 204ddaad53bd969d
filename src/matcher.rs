//! # Interceptor Matchers — Exclusion-Aware Request Matching
//!
//! An interceptor decides whether to run around a controller/action
//! invocation by consulting its matchers. Each matcher starts out matching
//! everything and narrows itself through `except` rules registered by the
//! exclusion scan or by static configuration.

// ─────────────────────────────────────────────────────────────────────────────
//  Exclusion Rule
// ─────────────────────────────────────────────────────────────────────────────

/// Sentinel action name meaning "every action of the controller".
pub const WILDCARD: &str = "*";

/// A negative match rule: the `{namespace, controller, action}` triple an
/// interceptor must NOT fire for. Built once, handed to a matcher, never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    /// Controller namespace; `None` covers controllers without one.
    pub namespace: Option<String>,
    /// Logical controller name.
    pub controller: String,
    /// Action name, or [`WILDCARD`] for all actions.
    pub action: String,
}

impl ExclusionRule {
    pub fn new(
        namespace: Option<impl Into<String>>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.map(Into::into),
            controller: controller.into(),
            action: action.into(),
        }
    }

    /// Whether this rule covers the given invocation triple.
    ///
    /// Namespace slots are compared strictly: a rule with no namespace only
    /// covers controllers without one.
    fn covers(&self, namespace: Option<&str>, controller: &str, action: &str) -> bool {
        self.namespace.as_deref() == namespace
            && self.controller == controller
            && (self.action == WILDCARD || self.action == action)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Matcher
// ─────────────────────────────────────────────────────────────────────────────

/// A rule object inside an interceptor. Matches every controller/action
/// pair except the ones registered through [`Matcher::except`].
#[derive(Debug, Default, Clone)]
pub struct Matcher {
    excepts: Vec<ExclusionRule>,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a negative match rule. Duplicate registrations are
    /// tolerated; they change nothing observable.
    pub fn except(&mut self, rule: ExclusionRule) {
        self.excepts.push(rule);
    }

    /// `true` unless some except rule covers the triple.
    pub fn matches(&self, namespace: Option<&str>, controller: &str, action: &str) -> bool {
        !self
            .excepts
            .iter()
            .any(|rule| rule.covers(namespace, controller, action))
    }

    /// Registered exclusion rules, in registration order.
    pub fn excepts(&self) -> &[ExclusionRule] {
        &self.excepts
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Interceptor
// ─────────────────────────────────────────────────────────────────────────────

/// A named interceptor owning one or more matchers. The exclusion scan's
/// only side effect is appending except rules to these matchers.
#[derive(Debug, Default)]
pub struct Interceptor {
    name: String,
    matchers: Vec<Matcher>,
}

impl Interceptor {
    /// Create an interceptor with a single match-all matcher, the common
    /// configuration for framework interceptors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matchers: vec![Matcher::new()],
        }
    }

    /// Create an interceptor with no matchers; callers add their own.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matchers: Vec::new(),
        }
    }

    pub fn add_matcher(&mut self, matcher: Matcher) {
        self.matchers.push(matcher);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    pub fn matchers_mut(&mut self) -> &mut [Matcher] {
        &mut self.matchers
    }

    /// `true` when any matcher still matches the triple.
    pub fn should_intercept(
        &self,
        namespace: Option<&str>,
        controller: &str,
        action: &str,
    ) -> bool {
        self.matchers
            .iter()
            .any(|m| m.matches(namespace, controller, action))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Unit Tests
// ─────────────────────────────────────────────────────────────────────────────
