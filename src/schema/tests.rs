use super::*;

#[test]
fn test_definitions_follow_declaration_order() {
    let registry = registry();
    assert_eq!(registry.definitions().len(), Field::COUNT);
    for (index, def) in registry.definitions().iter().enumerate() {
        assert_eq!(def.field, Field::ALL[index]);
        assert_eq!(def.field.index(), index);
    }
}

#[test]
fn test_names_and_aliases_are_unique() {
    let registry = registry();
    let mut seen = std::collections::HashSet::new();
    for def in registry.definitions() {
        assert!(seen.insert(def.name), "duplicate name {}", def.name);
        if let Some(alias) = def.alias {
            assert!(seen.insert(alias), "duplicate alias {}", alias);
        }
    }
}

#[test]
fn test_lookup_by_name_and_alias() {
    let registry = registry();
    assert_eq!(
        registry.by_name("Sampling frequency (Hz)"),
        Some(Field::SamplingFrequency)
    );
    assert_eq!(
        registry.by_alias("sampling_frequency"),
        Some(Field::SamplingFrequency)
    );
    assert_eq!(registry.by_alias("pllunlocked_flag"), Some(Field::PllUnlockedFlag));
    assert_eq!(registry.by_name("sampling_frequency"), None);
    assert_eq!(registry.by_alias("Sampling frequency (Hz)"), None);
    assert_eq!(registry.by_name("my_field"), None);
}

#[test]
fn test_readonly_fields_have_fixed_defaults() {
    let readonly: Vec<_> = registry()
        .definitions()
        .iter()
        .filter(|d| d.readonly)
        .collect();
    assert_eq!(readonly.len(), 3);
    for def in readonly {
        assert!(def.required);
        assert!(def.alias.is_none());
        assert!(matches!(def.default, Some(DefaultValue::Str(_))));
    }
    assert_eq!(
        registry().definition(Field::DataSetClass).default,
        Some(DefaultValue::Str("I/Q"))
    );
}

#[test]
fn test_sampling_frequency_has_no_default() {
    let def = registry().definition(Field::SamplingFrequency);
    assert!(def.required);
    assert!(def.default.is_none());
    assert_eq!(def.min, Some(0.0));
    assert_eq!(def.forbidden, &[0.0]);
}

#[test]
fn test_longitude_bounds_kept_as_published() {
    let def = registry().definition(Field::Longitude);
    assert_eq!(def.min, Some(-90.0));
    assert_eq!(def.max, Some(80.0));
}

#[test]
fn test_magnetic_declination_dependency() {
    let def = registry().definition(Field::MagneticDeclination);
    assert_eq!(def.depends_on, Some(Field::OrientationAzimuth));
    assert_eq!(Field::MagneticDeclination.alias(), Some("magnetic_declination"));
}

#[test]
fn test_timestamp_coercions() {
    assert_eq!(
        registry().definition(Field::TimestampCoarse).coercion,
        Some(Coercion::EpochSeconds)
    );
    assert_eq!(
        registry().definition(Field::TimestampFine).field_type,
        FieldType::Float
    );
    assert_eq!(Field::TimestampFine.to_string(), "Timestamp fine (ns)");
}
