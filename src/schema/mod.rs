//! # Metadata Schema Registry
//!
//! The fixed set of attributes defined by Rec. ITU-R SM.2117-0 for I/Q data
//! sets, together with their shorthand aliases, types and constraints.
//!
//! | Shorthand | Canonical name | Type | Constraints |
//! |-----------|----------------|------|-------------|
//! | (read-only) | ITU-R data set class | string | fixed `I/Q` |
//! | (read-only) | ITU-R Recommendation | string | fixed `Rec. ITU-R SM.2117-0` |
//! | carrier_frequency | RF carrier frequency (Hz) | float | required, >= 0, default 0 |
//! | sampling_frequency | Sampling frequency (Hz) | float | required, >= 0, != 0 |
//! | (read-only) | Data set type interpretation | string | fixed |
//! | unit | Data set unit | string | required, "" / V / V/m / A/m |
//! | scaling | Data set scaling factor | float | required, default 1 |
//! | comment | Comment | string | |
//! | device | Device | string | |
//! | bandwidth | Filter bandwidth (Hz) | float | |
//! | timestamp | Timestamp coarse (s) | integer | epoch seconds |
//! | timestamp_fine | Timestamp fine (ns) | float | fractional epoch seconds |
//! | latitude | Geolocation latitude (degree) | float | -180..180 |
//! | longitude | Geolocation longitude (degree) | float | -90..80 |
//! | altitude | Geolocation altitude (m) | float | >= -10000 |
//! | separation | Geolocation separation (m) | float | |
//! | speed | Speed over ground magnitude (m/s) | float | >= 0 |
//! | speed_azimuth | Speed over ground azimuth (degree) | float | 0..360 |
//! | orientation_azimuth | Orientation azimuth (degree) | float | 0..360 |
//! | orientation_elevation | Orientation elevation (degree) | float | -90..90 |
//! | orientation_skew | Orientation skew (degree) | float | -180..180 |
//! | magnetic_declination | Magnetic declination (degree) | float | 0..360, needs orientation azimuth |
//! | unsynced_flag .. lostsample_flag | eight status flags | integer | >= 0 |
//! | attenuator | Attenuator (dB) | float | |
//! | antenna_factor | Antenna factor (1/m) | float | |
//! | reference | Reference point | string | antenna or receiver output port |
//! | receiver_impedance | Receiver input impedance (Ohm) | float | |
//!
//! Keys outside this table are kept under the [`USER_PREFIX`] namespace.

mod constants;
mod field;
mod registry;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use field::{Coercion, DefaultValue, Field, FieldDef, FieldType};
pub use registry::{registry, SchemaRegistry};
