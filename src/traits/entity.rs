use std::any::TypeId;

use crate::types::PropertyDescriptor;

/// Trait representing a mapped data-model type.
/// Implementations enumerate their properties and markers explicitly.
pub trait Entity: 'static {
    /// Returns the simple type name (no module path, no generic arguments).
    fn type_name() -> &'static str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Returns the property descriptors in declaration order.
    fn properties() -> Vec<PropertyDescriptor>;
}

/// Runtime identity of an entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityType {
    id: TypeId,
    name: &'static str,
}

impl EntityType {
    pub fn of<E: Entity>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: E::type_name(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the simple type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}
