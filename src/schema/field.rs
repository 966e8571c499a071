use std::fmt;

/// Canonical metadata fields of Rec. ITU-R SM.2117-0, in declaration order.
///
/// The declaration order is also the order in which normalized attributes
/// are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// `ITU-R data set class` (read-only)
    DataSetClass,
    /// `ITU-R Recommendation` (read-only)
    Recommendation,
    /// `RF carrier frequency (Hz)`
    CarrierFrequency,
    /// `Sampling frequency (Hz)`
    SamplingFrequency,
    /// `Data set type interpretation` (read-only)
    TypeInterpretation,
    /// `Data set unit`
    Unit,
    /// `Data set scaling factor`
    ScalingFactor,
    /// `Comment`
    Comment,
    /// `Device`
    Device,
    /// `Filter bandwidth (Hz)`
    FilterBandwidth,
    /// `Timestamp coarse (s)`
    TimestampCoarse,
    /// `Timestamp fine (ns)`
    TimestampFine,
    /// `Geolocation latitude (degree)`
    Latitude,
    /// `Geolocation longitude (degree)`
    Longitude,
    /// `Geolocation altitude (m)`
    Altitude,
    /// `Geolocation separation (m)`
    Separation,
    /// `Speed over ground magnitude (m/s)`
    Speed,
    /// `Speed over ground azimuth (degree)`
    SpeedAzimuth,
    /// `Orientation azimuth (degree)`
    OrientationAzimuth,
    /// `Orientation elevation (degree)`
    OrientationElevation,
    /// `Orientation skew (degree)`
    OrientationSkew,
    /// `Magnetic declination (degree)`
    MagneticDeclination,
    /// `Unsynced timestamp flag`
    UnsyncedFlag,
    /// `Invalid flag`
    InvalidFlag,
    /// `PLL unlocked`
    PllUnlockedFlag,
    /// `AGC flag`
    AgcFlag,
    /// `Detected signal flag`
    DetectedFlag,
    /// `Spectral inversion flag`
    SpectralInversionFlag,
    /// `Over range flag`
    OverrangeFlag,
    /// `Lost sample flag`
    LostSampleFlag,
    /// `Attenuator (dB)`
    Attenuator,
    /// `Antenna factor (1/m)`
    AntennaFactor,
    /// `Reference point`
    ReferencePoint,
    /// `Receiver input impedance (Ohm)`
    ReceiverImpedance,
}

impl Field {
    /// Number of canonical fields
    pub const COUNT: usize = 34;

    /// All fields in declaration order
    pub const ALL: [Field; Field::COUNT] = [
        Field::DataSetClass,
        Field::Recommendation,
        Field::CarrierFrequency,
        Field::SamplingFrequency,
        Field::TypeInterpretation,
        Field::Unit,
        Field::ScalingFactor,
        Field::Comment,
        Field::Device,
        Field::FilterBandwidth,
        Field::TimestampCoarse,
        Field::TimestampFine,
        Field::Latitude,
        Field::Longitude,
        Field::Altitude,
        Field::Separation,
        Field::Speed,
        Field::SpeedAzimuth,
        Field::OrientationAzimuth,
        Field::OrientationElevation,
        Field::OrientationSkew,
        Field::MagneticDeclination,
        Field::UnsyncedFlag,
        Field::InvalidFlag,
        Field::PllUnlockedFlag,
        Field::AgcFlag,
        Field::DetectedFlag,
        Field::SpectralInversionFlag,
        Field::OverrangeFlag,
        Field::LostSampleFlag,
        Field::Attenuator,
        Field::AntennaFactor,
        Field::ReferencePoint,
        Field::ReceiverImpedance,
    ];

    /// Position of this field in the declaration order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical attribute name as written in the Recommendation
    pub fn name(self) -> &'static str {
        super::registry().definition(self).name
    }

    /// Shorthand key accepted from callers, if any
    pub fn alias(self) -> Option<&'static str> {
        super::registry().definition(self).alias
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar type a field holds after coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Signed 64-bit integer
    Integer,
    /// 64-bit float (integers are widened)
    Float,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Integer => f.write_str("integer"),
            FieldType::Float => f.write_str("float"),
        }
    }
}

/// Default value filled in for an absent required field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// String default
    Str(&'static str),
    /// Integer default
    Integer(i64),
    /// Float default
    Float(f64),
}

/// Coercion applied to a value before it is type-checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Date-like value to whole seconds since the Unix epoch
    EpochSeconds,
    /// Date-like value to fractional seconds since the Unix epoch
    FractionalEpochSeconds,
}

/// Definition of one canonical metadata field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field identifier
    pub field: Field,
    /// Canonical name
    pub name: &'static str,
    /// Shorthand alias accepted from callers
    pub alias: Option<&'static str>,
    /// Type after coercion
    pub field_type: FieldType,
    /// Must be present after normalization
    pub required: bool,
    /// Value is fixed to `default`
    pub readonly: bool,
    /// Value used when the field is absent
    pub default: Option<DefaultValue>,
    /// Permitted string values (empty = any)
    pub allowed: &'static [&'static str],
    /// Inclusive lower bound
    pub min: Option<f64>,
    /// Inclusive upper bound
    pub max: Option<f64>,
    /// Numeric values rejected even when inside the bounds
    pub forbidden: &'static [f64],
    /// Coercion applied before validation
    pub coercion: Option<Coercion>,
    /// Field that must also be present in the final map
    pub depends_on: Option<Field>,
}

impl FieldDef {
    pub(crate) fn new(field: Field, name: &'static str, field_type: FieldType) -> Self {
        Self {
            field,
            name,
            alias: None,
            field_type,
            required: false,
            readonly: false,
            default: None,
            allowed: &[],
            min: None,
            max: None,
            forbidden: &[],
            coercion: None,
            depends_on: None,
        }
    }

    pub(crate) fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    pub(crate) fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub(crate) fn readonly(mut self, value: &'static str) -> Self {
        self.readonly = true;
        self.default = Some(DefaultValue::Str(value));
        self
    }

    pub(crate) fn default_value(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    pub(crate) fn allowed(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = values;
        self
    }

    pub(crate) fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub(crate) fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub(crate) fn forbidden(mut self, values: &'static [f64]) -> Self {
        self.forbidden = values;
        self
    }

    pub(crate) fn coerce(mut self, coercion: Coercion) -> Self {
        self.coercion = Some(coercion);
        self
    }

    pub(crate) fn depends_on(mut self, field: Field) -> Self {
        self.depends_on = Some(field);
        self
    }
}
