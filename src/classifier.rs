use crate::types::{ColumnUsage, DatabaseGeneratedOption, PropertyRecord};

/// Returns true if the property is the primary key of its type.
///
/// When any property on the type carries an explicit key marker, only marked
/// properties are keys. Otherwise a property named `Id` (any case) is the key.
pub fn is_primary_key(explicit_key_on_type: bool, property: &PropertyRecord) -> bool {
    if explicit_key_on_type {
        property.has_key_marker()
    } else {
        property.name().eq_ignore_ascii_case("id")
    }
}

/// Classifies a property into its column usage.
pub fn classify(explicit_key_on_type: bool, property: &PropertyRecord) -> ColumnUsage {
    usage_for(
        is_primary_key(explicit_key_on_type, property),
        property.is_writable(),
        property.database_generated(),
    )
}

/// Decision table over (is key, is writable, generation marker).
pub fn usage_for(
    is_key: bool,
    writable: bool,
    generated: Option<DatabaseGeneratedOption>,
) -> ColumnUsage {
    use DatabaseGeneratedOption as Generated;

    match (is_key, writable, generated) {
        (true, false, _) => ColumnUsage::ComputedPrimaryKey,
        (false, false, _) => ColumnUsage::ComputedColumn,
        (true, true, None | Some(Generated::None)) => ColumnUsage::NotGeneratedPrimaryKey,
        (true, true, Some(Generated::Identity | Generated::Computed)) => {
            ColumnUsage::ComputedPrimaryKey
        }
        (false, true, None | Some(Generated::None)) => ColumnUsage::Column,
        (false, true, Some(Generated::Identity)) => ColumnUsage::GeneratedColumn,
        (false, true, Some(Generated::Computed)) => ColumnUsage::ComputedColumn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DatabaseGeneratedOption::{Computed, Identity};
    use crate::types::PropertyDescriptor;

    fn record(descriptor: PropertyDescriptor) -> PropertyRecord {
        PropertyRecord::extract(&descriptor)
    }

    #[test]
    fn test_unwritable_wins_over_generation_marker() {
        assert_eq!(usage_for(true, false, None), ColumnUsage::ComputedPrimaryKey);
        assert_eq!(
            usage_for(true, false, Some(DatabaseGeneratedOption::None)),
            ColumnUsage::ComputedPrimaryKey
        );
        assert_eq!(usage_for(false, false, None), ColumnUsage::ComputedColumn);
        assert_eq!(
            usage_for(false, false, Some(Identity)),
            ColumnUsage::ComputedColumn
        );
    }

    #[test]
    fn test_writable_key() {
        assert_eq!(usage_for(true, true, None), ColumnUsage::NotGeneratedPrimaryKey);
        assert_eq!(
            usage_for(true, true, Some(DatabaseGeneratedOption::None)),
            ColumnUsage::NotGeneratedPrimaryKey
        );
        assert_eq!(
            usage_for(true, true, Some(Identity)),
            ColumnUsage::ComputedPrimaryKey
        );
        assert_eq!(
            usage_for(true, true, Some(Computed)),
            ColumnUsage::ComputedPrimaryKey
        );
    }

    #[test]
    fn test_writable_non_key() {
        assert_eq!(usage_for(false, true, None), ColumnUsage::Column);
        assert_eq!(
            usage_for(false, true, Some(DatabaseGeneratedOption::None)),
            ColumnUsage::Column
        );
        assert_eq!(
            usage_for(false, true, Some(Identity)),
            ColumnUsage::GeneratedColumn
        );
        assert_eq!(
            usage_for(false, true, Some(Computed)),
            ColumnUsage::ComputedColumn
        );
    }

    #[test]
    fn test_id_convention_is_case_insensitive() {
        assert!(is_primary_key(false, &record(PropertyDescriptor::of::<i32>("Id"))));
        assert!(is_primary_key(false, &record(PropertyDescriptor::of::<i32>("ID"))));
        assert!(is_primary_key(false, &record(PropertyDescriptor::of::<i32>("id"))));
        assert!(!is_primary_key(
            false,
            &record(PropertyDescriptor::of::<i32>("PersonId"))
        ));
    }

    #[test]
    fn test_explicit_key_suppresses_convention() {
        let id = record(PropertyDescriptor::of::<i32>("Id"));
        let code = record(PropertyDescriptor::of::<String>("Code").key());

        assert!(!is_primary_key(true, &id));
        assert!(is_primary_key(true, &code));
        assert_eq!(classify(true, &id), ColumnUsage::Column);
        assert_eq!(classify(true, &code), ColumnUsage::NotGeneratedPrimaryKey);
    }

    #[test]
    fn test_classify_identity_non_key() {
        let seq = record(PropertyDescriptor::of::<i64>("Sequence").database_generated(Identity));
        assert_eq!(classify(false, &seq), ColumnUsage::GeneratedColumn);
    }

    #[test]
    fn test_classify_read_only_id() {
        let id = record(PropertyDescriptor::of::<i32>("Id").read_only());
        assert_eq!(classify(false, &id), ColumnUsage::ComputedPrimaryKey);
    }
}
