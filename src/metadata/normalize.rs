use std::collections::{BTreeMap, HashSet};

use log::{debug, warn};

use crate::schema::{registry, Coercion, DefaultValue, Field, FieldDef, FieldType, USER_PREFIX};

use super::date::{to_epoch_seconds, to_fractional_epoch_seconds};
use super::error::{MetadataError, ValidationErrors, ViolationReason};
use super::map::AttributeMap;
use super::value::AttributeValue;

/// Validate and rewrite a raw attribute map against the schema registry.
///
/// Aliases are rewritten to canonical names (a canonical key wins over its
/// alias), required fields are filled from their defaults, date-like fields
/// are coerced, and keys outside the schema are moved under the `User`
/// prefix. The output lists canonical fields in declaration order followed
/// by extra keys in first-seen order.
///
/// Every offending field is reported in one [`MetadataError::Validation`];
/// nothing is returned on failure. Normalizing an already normalized map
/// yields the same map.
pub fn normalize(raw: &AttributeMap) -> Result<AttributeMap, MetadataError> {
    let (known, extra) = partition(raw);
    let mut errors = ValidationErrors::default();
    let mut output = AttributeMap::new();

    for def in registry().definitions() {
        match known.get(&def.field) {
            Some(supplied) => match check(def, &supplied.value) {
                Ok(value) => {
                    output.insert(def.name, value);
                }
                Err(reason) => errors.push(def.name, reason),
            },
            None if def.required => match def.default {
                Some(default) => {
                    output.insert(def.name, default_value(default));
                }
                None => errors.push(def.name, ViolationReason::Required),
            },
            None => {}
        }
    }

    for def in registry().definitions() {
        if let Some(dependency) = def.depends_on {
            if output.contains_key(def.name) && !output.contains_key(dependency.name()) {
                errors.push(def.name, ViolationReason::MissingDependency(dependency.name()));
            }
        }
    }

    for (key, value) in extra {
        match value {
            AttributeValue::Float(v) if !v.is_finite() => {
                errors.push(key, ViolationReason::NotFinite(v))
            }
            value => {
                output.insert(key, value);
            }
        }
    }

    if !errors.is_empty() {
        debug!("Rejected metadata with {} violation(s)", errors.len());
        return Err(MetadataError::Validation(errors));
    }

    Ok(output)
}

struct Supplied {
    value: AttributeValue,
    canonical: bool,
}

/// Split raw input into known fields and prefixed extra keys.
fn partition(raw: &AttributeMap) -> (BTreeMap<Field, Supplied>, AttributeMap) {
    let registry = registry();
    let mut known: BTreeMap<Field, Supplied> = BTreeMap::new();
    let mut extra = AttributeMap::new();
    let mut explicit: HashSet<String> = HashSet::new();

    for (key, value) in raw.iter() {
        if let Some(field) = registry.by_name(key) {
            known.insert(
                field,
                Supplied {
                    value: value.clone(),
                    canonical: true,
                },
            );
        } else if let Some(field) = registry.by_alias(key) {
            let shadowed = known.get(&field).map_or(false, |s| s.canonical);
            if !shadowed {
                known.insert(
                    field,
                    Supplied {
                        value: value.clone(),
                        canonical: false,
                    },
                );
            }
        } else if key.starts_with(USER_PREFIX) {
            explicit.insert(key.to_string());
            if let Some(replaced) = extra.insert(key, value.clone()) {
                warn!(
                    "Discarding {:?} stored under '{}' in favor of the explicit key",
                    replaced, key
                );
            }
        } else {
            let prefixed = format!("{} {}", USER_PREFIX, key);
            if explicit.contains(&prefixed) {
                warn!("Discarding '{}' = {:?}: '{}' is already supplied", key, value, prefixed);
            } else {
                extra.insert(prefixed, value.clone());
            }
        }
    }

    (known, extra)
}

/// Coerce and validate one supplied value, returning the stored form.
fn check(def: &FieldDef, value: &AttributeValue) -> Result<AttributeValue, ViolationReason> {
    let value = match def.coercion {
        Some(Coercion::EpochSeconds) => to_epoch_seconds(value)?,
        Some(Coercion::FractionalEpochSeconds) => to_fractional_epoch_seconds(value)?,
        None => value.clone(),
    };

    let value = match (def.field_type, value) {
        (FieldType::String, v @ AttributeValue::String(_)) => v,
        (FieldType::Integer, v @ AttributeValue::Integer(_)) => v,
        (FieldType::Float, AttributeValue::Integer(v)) => AttributeValue::Float(v as f64),
        (FieldType::Float, v @ AttributeValue::Float(_)) => v,
        (expected, other) => {
            return Err(ViolationReason::WrongType {
                expected,
                found: other.type_name(),
            })
        }
    };

    if def.readonly {
        if def.default.map(default_value).as_ref() != Some(&value) {
            return Err(ViolationReason::ReadOnly);
        }
        return Ok(value);
    }

    if let Some(number) = value.as_f64() {
        check_bounds(def, number)?;
    }

    if let AttributeValue::String(s) = &value {
        if !def.allowed.is_empty() && !def.allowed.contains(&s.as_str()) {
            return Err(ViolationReason::NotAllowed {
                value: s.clone(),
                allowed: def.allowed,
            });
        }
    }

    Ok(value)
}

fn check_bounds(def: &FieldDef, number: f64) -> Result<(), ViolationReason> {
    if !number.is_finite() {
        return Err(ViolationReason::NotFinite(number));
    }
    if let Some(min) = def.min {
        if number < min {
            return Err(ViolationReason::BelowMinimum { min, value: number });
        }
    }
    if let Some(max) = def.max {
        if number > max {
            return Err(ViolationReason::AboveMaximum { max, value: number });
        }
    }
    if def.forbidden.contains(&number) {
        return Err(ViolationReason::Forbidden(number));
    }
    Ok(())
}

fn default_value(default: DefaultValue) -> AttributeValue {
    match default {
        DefaultValue::Str(s) => AttributeValue::String(s.to_string()),
        DefaultValue::Integer(v) => AttributeValue::Integer(v),
        DefaultValue::Float(v) => AttributeValue::Float(v),
    }
}
