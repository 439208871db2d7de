//! Common types shared across resource models.
//!
//! This module contains the tag and permission structures used by several
//! resource modules. It does NOT contain resource-specific models.

use crate::shape;

shape! {
    /// A key-value pair attached to a resource.
    pub struct Tag {
        /// Tag key.
        key: one String => "Key" [required, len(1, 128)],
        /// Tag value.
        value: one String => "Value" [required, len(1, 256)],
    }
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with_key(key).with_value(value)
    }
}

shape! {
    /// Actions granted to a principal on a resource.
    pub struct ResourcePermission {
        /// ARN of the user, group, or account receiving the grant.
        principal: one String => "Principal" [required, len(1, 256)],
        /// Granted IAM-style actions, e.g. `quicksight:DescribeDashboard`.
        actions: list String => "Actions" [required, len(1, 16)],
    }
}

impl ResourcePermission {
    pub fn new<I>(principal: impl Into<String>, actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::default()
            .with_principal(principal)
            .with_actions(actions)
    }
}
