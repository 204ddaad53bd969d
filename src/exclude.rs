//! Tag Scan — Registering Exclusions for Tagged Controllers and Actions
//!
//! The counterpart of scanning controller classes for a marker annotation:
//! walk the registry once, and for every controller or action carrying the
//! requested tag, register an except rule with every matcher of the given
//! interceptor.

use crate::matcher::{ExclusionRule, Interceptor, WILDCARD};
use crate::registry::{ActionKind, ControllerRegistry};

/// Exclude all controllers and/or actions carrying `tag` from triggering
/// `interceptor`.
///
/// A class-level tag produces one wildcard rule covering every action and
/// short-circuits the member scan; otherwise tagged method actions are
/// reported first, then tagged field actions, each under its own name.
/// An empty registry is a no-op.
pub fn exclude_tagged(interceptor: &mut Interceptor, registry: &ControllerRegistry, tag: &str) {
    for controller in registry.controllers() {
        if controller.has_tag(tag) {
            register_exclusion(WILDCARD, controller.namespace_ref(), controller.name(), interceptor);
        } else {
            for action in controller
                .actions()
                .iter()
                .filter(|a| a.kind() == ActionKind::Method && a.has_tag(tag))
            {
                register_exclusion(action.name(), controller.namespace_ref(), controller.name(), interceptor);
            }

            for action in controller
                .actions()
                .iter()
                .filter(|a| a.kind() == ActionKind::Field && a.has_tag(tag))
            {
                register_exclusion(action.name(), controller.namespace_ref(), controller.name(), interceptor);
            }
        }
    }
}

fn register_exclusion(
    action: &str,
    namespace: Option<&str>,
    controller: &str,
    interceptor: &mut Interceptor,
) {
    tracing::debug!(
        namespace = namespace.unwrap_or("<none>"),
        controller,
        action,
        interceptor = interceptor.name(),
        "excluding from interceptor"
    );

    let rule = ExclusionRule::new(namespace, controller, action);
    for matcher in interceptor.matchers_mut() {
        matcher.except(rule.clone());
    }
}
