use std::collections::HashMap;
use std::sync::OnceLock;

use super::constants::{DATA_SET_CLASS, MAX_TIMESTAMP_S, RECOMMENDATION, TYPE_INTERPRETATION};
use super::field::{Coercion, DefaultValue, Field, FieldDef, FieldType};

const UNITS: &[&str] = &["", "V", "V/m", "A/m"];
const REFERENCE_POINTS: &[&str] = &["Antenna output port", "Receiver output port"];

/// Read-only table of all field definitions, indexed by name and alias.
#[derive(Debug)]
pub struct SchemaRegistry {
    definitions: Vec<FieldDef>,
    by_name: HashMap<&'static str, Field>,
    by_alias: HashMap<&'static str, Field>,
}

impl SchemaRegistry {
    fn build() -> Self {
        let definitions: Vec<FieldDef> = Field::ALL.iter().map(|&f| definition(f)).collect();
        let by_name = definitions.iter().map(|d| (d.name, d.field)).collect();
        let by_alias = definitions
            .iter()
            .filter_map(|d| d.alias.map(|alias| (alias, d.field)))
            .collect();

        Self {
            definitions,
            by_name,
            by_alias,
        }
    }

    /// All definitions in declaration order
    pub fn definitions(&self) -> &[FieldDef] {
        &self.definitions
    }

    /// Definition of a single field
    pub fn definition(&self, field: Field) -> &FieldDef {
        &self.definitions[field.index()]
    }

    /// Look up a field by its canonical name
    pub fn by_name(&self, name: &str) -> Option<Field> {
        self.by_name.get(name).copied()
    }

    /// Look up a field by its shorthand alias
    pub fn by_alias(&self, alias: &str) -> Option<Field> {
        self.by_alias.get(alias).copied()
    }
}

/// Process-wide schema registry, built on first access.
pub fn registry() -> &'static SchemaRegistry {
    static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SchemaRegistry::build)
}

fn definition(field: Field) -> FieldDef {
    use Field::*;
    use FieldType::{Float, Integer, String};

    match field {
        DataSetClass => FieldDef::new(field, "ITU-R data set class", String)
            .required()
            .readonly(DATA_SET_CLASS),
        Recommendation => FieldDef::new(field, "ITU-R Recommendation", String)
            .required()
            .readonly(RECOMMENDATION),
        CarrierFrequency => FieldDef::new(field, "RF carrier frequency (Hz)", Float)
            .alias("carrier_frequency")
            .required()
            .min(0.0)
            .default_value(DefaultValue::Float(0.0)),
        SamplingFrequency => FieldDef::new(field, "Sampling frequency (Hz)", Float)
            .alias("sampling_frequency")
            .required()
            .min(0.0)
            .forbidden(&[0.0]),
        TypeInterpretation => FieldDef::new(field, "Data set type interpretation", String)
            .required()
            .readonly(TYPE_INTERPRETATION),
        Unit => FieldDef::new(field, "Data set unit", String)
            .alias("unit")
            .required()
            .default_value(DefaultValue::Str(""))
            .allowed(UNITS),
        ScalingFactor => FieldDef::new(field, "Data set scaling factor", Float)
            .alias("scaling")
            .required()
            .default_value(DefaultValue::Float(1.0)),
        Comment => FieldDef::new(field, "Comment", String).alias("comment"),
        Device => FieldDef::new(field, "Device", String).alias("device"),
        FilterBandwidth => FieldDef::new(field, "Filter bandwidth (Hz)", Float).alias("bandwidth"),
        TimestampCoarse => FieldDef::new(field, "Timestamp coarse (s)", Integer)
            .alias("timestamp")
            .coerce(Coercion::EpochSeconds)
            .range(0.0, MAX_TIMESTAMP_S),
        TimestampFine => FieldDef::new(field, "Timestamp fine (ns)", Float)
            .alias("timestamp_fine")
            .coerce(Coercion::FractionalEpochSeconds)
            .range(0.0, MAX_TIMESTAMP_S),
        Latitude => FieldDef::new(field, "Geolocation latitude (degree)", Float)
            .alias("latitude")
            .range(-180.0, 180.0),
        // Bounds as published; narrower than the conventional -180..180.
        Longitude => FieldDef::new(field, "Geolocation longitude (degree)", Float)
            .alias("longitude")
            .range(-90.0, 80.0),
        Altitude => FieldDef::new(field, "Geolocation altitude (m)", Float)
            .alias("altitude")
            .min(-10e3),
        Separation => FieldDef::new(field, "Geolocation separation (m)", Float).alias("separation"),
        Speed => FieldDef::new(field, "Speed over ground magnitude (m/s)", Float)
            .alias("speed")
            .min(0.0),
        SpeedAzimuth => FieldDef::new(field, "Speed over ground azimuth (degree)", Float)
            .alias("speed_azimuth")
            .range(0.0, 360.0),
        OrientationAzimuth => FieldDef::new(field, "Orientation azimuth (degree)", Float)
            .alias("orientation_azimuth")
            .range(0.0, 360.0),
        OrientationElevation => FieldDef::new(field, "Orientation elevation (degree)", Float)
            .alias("orientation_elevation")
            .range(-90.0, 90.0),
        OrientationSkew => FieldDef::new(field, "Orientation skew (degree)", Float)
            .alias("orientation_skew")
            .range(-180.0, 180.0),
        MagneticDeclination => FieldDef::new(field, "Magnetic declination (degree)", Float)
            .alias("magnetic_declination")
            .range(0.0, 360.0)
            .depends_on(OrientationAzimuth),
        UnsyncedFlag => flag(field, "Unsynced timestamp flag", "unsynced_flag"),
        InvalidFlag => flag(field, "Invalid flag", "invalid_flag"),
        PllUnlockedFlag => flag(field, "PLL unlocked", "pllunlocked_flag"),
        AgcFlag => flag(field, "AGC flag", "agc_flag"),
        DetectedFlag => flag(field, "Detected signal flag", "detected_flag"),
        SpectralInversionFlag => flag(field, "Spectral inversion flag", "spectral_inversion_flag"),
        OverrangeFlag => flag(field, "Over range flag", "overrange_flag"),
        LostSampleFlag => flag(field, "Lost sample flag", "lostsample_flag"),
        Attenuator => FieldDef::new(field, "Attenuator (dB)", Float).alias("attenuator"),
        AntennaFactor => {
            FieldDef::new(field, "Antenna factor (1/m)", Float).alias("antenna_factor")
        }
        ReferencePoint => FieldDef::new(field, "Reference point", String)
            .alias("reference")
            .allowed(REFERENCE_POINTS),
        ReceiverImpedance => FieldDef::new(field, "Receiver input impedance (Ohm)", Float)
            .alias("receiver_impedance"),
    }
}

fn flag(field: Field, name: &'static str, alias: &'static str) -> FieldDef {
    FieldDef::new(field, name, FieldType::Integer).alias(alias).min(0.0)
}
