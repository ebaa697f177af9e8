use crate::types::{DatabaseGeneratedOption, Marker, Scalar, ValueKind};

/// Describes one property of an entity type.
/// Built by `Entity::properties` implementations.
///
/// # Example
/// ```
/// use ormschema::types::{DatabaseGeneratedOption, PropertyDescriptor};
///
/// let id = PropertyDescriptor::of::<i32>("OrderId")
///     .key()
///     .database_generated(DatabaseGeneratedOption::Identity);
/// assert_eq!(id.name(), "OrderId");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    name: &'static str,
    kind: ValueKind,
    writable: bool,
    markers: Vec<Marker>,
}

impl PropertyDescriptor {
    pub fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            writable: true,
            markers: Vec::new(),
        }
    }

    /// Creates a descriptor whose kind is taken from a Rust type.
    pub fn of<T: Scalar>(name: &'static str) -> Self {
        Self::new(name, T::KIND)
    }

    /// Marks the property as having no setter.
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn key(self) -> Self {
        self.with_marker(Marker::Key)
    }

    pub fn column(self, name: &'static str) -> Self {
        self.with_marker(Marker::Column(name))
    }

    pub fn not_mapped(self) -> Self {
        self.with_marker(Marker::NotMapped)
    }

    pub fn database_generated(self, option: DatabaseGeneratedOption) -> Self {
        self.with_marker(Marker::DatabaseGenerated(option))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// Immutable per-property record used during one schema build.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    name: &'static str,
    handle: PropertyDescriptor,
    markers: Vec<Marker>,
}

impl PropertyRecord {
    /// Captures the name, handle and declared markers of a property.
    pub fn extract(descriptor: &PropertyDescriptor) -> Self {
        Self {
            name: descriptor.name(),
            handle: descriptor.clone(),
            markers: descriptor.markers().to_vec(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn handle(&self) -> &PropertyDescriptor {
        &self.handle
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn is_writable(&self) -> bool {
        self.handle.is_writable()
    }

    pub fn kind(&self) -> ValueKind {
        self.handle.kind()
    }

    pub fn has_key_marker(&self) -> bool {
        self.markers.iter().any(|m| matches!(m, Marker::Key))
    }

    pub fn is_not_mapped(&self) -> bool {
        self.markers.iter().any(|m| matches!(m, Marker::NotMapped))
    }

    /// Returns the first explicit column name, if any.
    pub fn column_name_marker(&self) -> Option<&'static str> {
        self.markers.iter().find_map(|m| match m {
            Marker::Column(name) => Some(*name),
            _ => None,
        })
    }

    /// Returns the first database generation option, if any.
    pub fn database_generated(&self) -> Option<DatabaseGeneratedOption> {
        self.markers.iter().find_map(|m| match m {
            Marker::DatabaseGenerated(option) => Some(*option),
            _ => None,
        })
    }
}
