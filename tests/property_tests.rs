//! Property-based tests for the layout classifier and the metadata normalizer

use ndarray::{ArrayD, IxDyn};
use proptest::prelude::*;
use sm2117::format::{
    channel_count, classify, sample_count, split_channels, FormatError, RecordingFormat, Recordings,
};
use sm2117::metadata::{normalize, AttributeMap, AttributeValue};

fn attribute_value() -> impl Strategy<Value = AttributeValue> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}".prop_map(AttributeValue::String),
        any::<i64>().prop_map(AttributeValue::Integer),
        (-1e9f64..1e9).prop_map(AttributeValue::Float),
        any::<bool>().prop_map(AttributeValue::Boolean),
    ]
}

proptest! {
    /// Every shape of rank 0 to 5 gets exactly one tag, and ranks outside 1..=3 are Invalid
    #[test]
    fn test_classify_is_total(
        shape in prop::collection::vec(0usize..6, 0..6),
        is_complex in any::<bool>(),
    ) {
        let format = classify(&shape, is_complex);
        if shape.is_empty() || shape.len() > 3 {
            prop_assert_eq!(format, RecordingFormat::Invalid);
        } else if format != RecordingFormat::Invalid {
            prop_assert!(format.is_single() ^ format.is_multiple());
            prop_assert!(sample_count(format, &shape).is_some());
            prop_assert!(channel_count(format, &shape).is_some());
        }
    }

    /// Splitting agrees with the classifier's channel and sample counts
    #[test]
    fn test_split_matches_counts(shape in prop::collection::vec(0usize..5, 1..4)) {
        let recordings = Recordings::from(ArrayD::<f64>::zeros(IxDyn(&shape)));
        let format = recordings.format();

        match split_channels(&recordings) {
            Ok((split_format, channels)) => {
                prop_assert_eq!(split_format, format);
                prop_assert_eq!(Some(channels.len()), channel_count(format, &shape));
                for channel in &channels {
                    prop_assert_eq!(Some(channel.len()), sample_count(format, &shape));
                }
            }
            Err(err) => {
                let is_invalid_shape = matches!(err, FormatError::InvalidShape { .. });
                prop_assert!(is_invalid_shape);
                prop_assert!(
                    format == RecordingFormat::Invalid
                        || channel_count(format, &shape) == Some(0)
                );
            }
        }
    }

    /// Normalizing a normalized map changes nothing
    #[test]
    fn test_normalize_is_idempotent(
        sampling_frequency in 1.0f64..1e10,
        carrier in proptest::option::of(0.0f64..6e9),
        extras in prop::collection::vec(("[a-z]{1,10}", attribute_value()), 0..6),
    ) {
        let mut raw = AttributeMap::new();
        raw.insert("sampling_frequency", sampling_frequency);
        if let Some(carrier) = carrier {
            raw.insert("RF carrier frequency (Hz)", carrier);
        }
        raw.extend(extras);

        if let Ok(first) = normalize(&raw) {
            let second = normalize(&first);
            prop_assert!(second.is_ok());
            prop_assert_eq!(second.ok(), Some(first));
        }
    }
}
