//! # intercept-exclude
//!
//! Tag-driven interceptor exclusions for controller registries.
//!
//! Controllers and their actions carry marker tags in an explicit
//! [`registry::ControllerRegistry`]. At wiring time, [`exclude::exclude_tagged`]
//! walks the registry once and registers an except rule with every matcher of
//! an interceptor for each tagged controller (all actions) or tagged action
//! (that action only). Exclusions can also come from a TOML file via the
//! [`config`] module.
//!
//! ```
//! use intercept_exclude::{
//!     exclude_tagged, ActionDescriptor, ControllerDescriptor, ControllerRegistry, Interceptor,
//! };
//!
//! let mut registry = ControllerRegistry::new();
//! registry.register(ControllerDescriptor::new("reports").tag("skip-audit"));
//! registry.register(
//!     ControllerDescriptor::new("admin")
//!         .namespace("admin")
//!         .action(ActionDescriptor::method("delete").tag("skip-audit")),
//! );
//!
//! let mut interceptor = Interceptor::new("audit");
//! exclude_tagged(&mut interceptor, &registry, "skip-audit");
//!
//! assert!(!interceptor.should_intercept(None, "reports", "index"));
//! assert!(!interceptor.should_intercept(Some("admin"), "admin", "delete"));
//! assert!(interceptor.should_intercept(None, "books", "index"));
//! ```

pub mod config;
pub mod exclude;
pub mod matcher;
pub mod registry;

pub use config::{apply_exclusions, load_exclusions, ExclusionsConfig, StaticExclusion};
pub use exclude::exclude_tagged;
pub use matcher::{ExclusionRule, Interceptor, Matcher, WILDCARD};
pub use registry::{
    logical_name, ActionDescriptor, ActionKind, ControllerDescriptor, ControllerRegistry,
};
