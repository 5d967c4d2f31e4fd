//! Services the hosting storefront provides to the gallery.
//!
//! Both are passed in explicitly when a [`ProductImages`](crate::gallery::ProductImages)
//! is built. Nothing here is global.

use serde::{Deserialize, Serialize};

/// Maps a logical class handle (`"content"`) to the scoped class name the
/// storefront's stylesheet uses.
pub trait ClassNameResolver {
    fn resolve(&self, handle: &str) -> String;
}

/// `{namespace}-{handle}` class names, the convention for app-scoped CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacedClassNames {
    pub namespace: String,
}

impl NamespacedClassNames {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for NamespacedClassNames {
    fn default() -> Self {
        Self::new("product-images")
    }
}

impl ClassNameResolver for NamespacedClassNames {
    fn resolve(&self, handle: &str) -> String {
        format!("{}-{}", self.namespace, handle)
    }
}

/// Read-only facts about the current storefront session.
pub trait RuntimeContext {
    fn account(&self) -> &str;
    fn currency(&self) -> &str;
    fn is_mobile(&self) -> bool;
}

/// A fixed runtime context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticRuntime {
    pub account: String,
    pub currency: String,
    pub mobile: bool,
}

impl Default for StaticRuntime {
    fn default() -> Self {
        Self {
            account: "account".to_string(),
            currency: "USD".to_string(),
            mobile: false,
        }
    }
}

impl RuntimeContext for StaticRuntime {
    fn account(&self) -> &str {
        &self.account
    }

    fn currency(&self) -> &str {
        &self.currency
    }

    fn is_mobile(&self) -> bool {
        self.mobile
    }
}
