use ndarray::{arr1, arr2, arr3, Array, IxDyn};
use num_complex::{Complex32, Complex64};

use super::*;

fn c(re: f32, im: f32) -> Complex32 {
    Complex32::new(re, im)
}

#[test]
fn test_classify_by_rank() {
    use RecordingFormat::*;

    assert_eq!(classify(&[], false), Invalid);
    assert_eq!(classify(&[8], true), SingleComplex);
    assert_eq!(classify(&[8], false), SingleComplex);
    assert_eq!(classify(&[2, 8], false), SingleIqFirst);
    assert_eq!(classify(&[2, 8], true), MultipleComplex);
    assert_eq!(classify(&[8, 2], false), SingleTimeFirst);
    assert_eq!(classify(&[8, 2], true), SingleTimeFirst);
    assert_eq!(classify(&[3, 8], true), MultipleComplex);
    assert_eq!(classify(&[2, 2], false), MultipleComplex);
    assert_eq!(classify(&[4, 2, 8], false), MultipleIqFirst);
    assert_eq!(classify(&[4, 8, 2], false), MultipleTimeFirst);
    assert_eq!(classify(&[4, 2, 2], false), Invalid);
    assert_eq!(classify(&[4, 3, 3], false), Invalid);
    assert_eq!(classify(&[1, 2, 3, 4], false), Invalid);
}

#[test]
fn test_single_and_multiple_partition() {
    for format in RecordingFormat::SINGLE_RECORDING {
        assert!(format.is_single());
        assert!(!format.is_multiple());
    }
    for format in RecordingFormat::MULTIPLE_RECORDING {
        assert!(format.is_multiple());
        assert!(!format.is_single());
    }
    assert!(!RecordingFormat::Invalid.is_single());
    assert!(!RecordingFormat::Invalid.is_multiple());
    assert_eq!(RecordingFormat::Invalid.channel_layout(), None);
}

#[test]
fn test_sample_and_channel_counts() {
    use RecordingFormat::*;

    let cases: &[(RecordingFormat, &[usize], usize, usize)] = &[
        (SingleComplex, &[7], 1, 7),
        (SingleIqFirst, &[2, 7], 1, 7),
        (SingleTimeFirst, &[7, 2], 1, 7),
        (MultipleComplex, &[3, 7], 3, 7),
        (MultipleIqFirst, &[3, 2, 7], 3, 7),
        (MultipleTimeFirst, &[3, 7, 2], 3, 7),
    ];
    for &(format, shape, channels, samples) in cases {
        assert_eq!(classify(shape, format == MultipleComplex), format);
        assert_eq!(channel_count(format, shape), Some(channels), "{}", format);
        assert_eq!(sample_count(format, shape), Some(samples), "{}", format);
    }
    assert_eq!(sample_count(Invalid, &[1, 2, 3, 4]), None);
    assert_eq!(channel_count(Invalid, &[1, 2, 3, 4]), None);
}

#[test]
fn test_encode_complex_vector() {
    let recordings = Recordings::from(vec![
        Complex64::new(1.0, 1.0),
        Complex64::new(2.0, 2.0),
        Complex64::new(3.0, 3.0),
        Complex64::new(4.0, 4.0),
    ]);
    let (format, channels) = split_channels(&recordings).unwrap();
    assert_eq!(format, RecordingFormat::SingleComplex);
    assert_eq!(
        channels,
        vec![vec![c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0), c(4.0, 4.0)]]
    );
}

#[test]
fn test_encode_real_vector_has_zero_imaginary() {
    let recordings = Recordings::from(vec![1i16, -2, 3]);
    let (_, channels) = split_channels(&recordings).unwrap();
    assert_eq!(channels[0], vec![c(1.0, 0.0), c(-2.0, 0.0), c(3.0, 0.0)]);
}

#[test]
fn test_encode_iq_first() {
    let recordings = Recordings::from(arr2(&[[1.0f32, 2.0, 3.0, 4.0], [1.0, 2.0, 3.0, 4.0]]));
    let (format, channels) = split_channels(&recordings).unwrap();
    assert_eq!(format, RecordingFormat::SingleIqFirst);
    assert_eq!(
        channels,
        vec![vec![c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0), c(4.0, 4.0)]]
    );
}

#[test]
fn test_encode_time_first() {
    let recordings = Recordings::from(arr2(&[[1.0, -1.0], [2.0, -2.0], [3.0, -3.0]]));
    let (format, channels) = split_channels(&recordings).unwrap();
    assert_eq!(format, RecordingFormat::SingleTimeFirst);
    assert_eq!(channels, vec![vec![c(1.0, -1.0), c(2.0, -2.0), c(3.0, -3.0)]]);
}

#[test]
fn test_encode_multiple_iq_first_keeps_channel_order() {
    let recordings = Recordings::from(arr3(&[
        [[1u8, 2, 3], [4, 5, 6]],
        [[7, 8, 9], [10, 11, 12]],
    ]));
    let (format, channels) = split_channels(&recordings).unwrap();
    assert_eq!(format, RecordingFormat::MultipleIqFirst);
    assert_eq!(channels[0], vec![c(1.0, 4.0), c(2.0, 5.0), c(3.0, 6.0)]);
    assert_eq!(channels[1], vec![c(7.0, 10.0), c(8.0, 11.0), c(9.0, 12.0)]);
}

#[test]
fn test_encode_multiple_time_first() {
    let recordings = Recordings::from(arr3(&[
        [[1i32, 2], [3, 4], [5, 6]],
        [[7, 8], [9, 10], [11, 12]],
    ]));
    let (format, channels) = split_channels(&recordings).unwrap();
    assert_eq!(format, RecordingFormat::MultipleTimeFirst);
    assert_eq!(channels[1], vec![c(7.0, 8.0), c(9.0, 10.0), c(11.0, 12.0)]);
}

#[test]
fn test_encode_multiple_complex() {
    let recordings = Recordings::from(arr2(&[
        [Complex32::new(1.0, 2.0), Complex32::new(3.0, 4.0)],
        [Complex32::new(5.0, 6.0), Complex32::new(7.0, 8.0)],
    ]));
    let (format, channels) = split_channels(&recordings).unwrap();
    assert_eq!(format, RecordingFormat::MultipleComplex);
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[1], vec![c(5.0, 6.0), c(7.0, 8.0)]);
}

#[test]
fn test_complex_time_first_keeps_real_parts() {
    let recordings = Recordings::from(arr2(&[
        [Complex64::new(1.0, 9.0), Complex64::new(2.0, 9.0)],
        [Complex64::new(3.0, 9.0), Complex64::new(4.0, 9.0)],
        [Complex64::new(5.0, 9.0), Complex64::new(6.0, 9.0)],
    ]));
    let (format, channels) = split_channels(&recordings).unwrap();
    assert_eq!(format, RecordingFormat::SingleTimeFirst);
    assert_eq!(channels[0], vec![c(1.0, 2.0), c(3.0, 4.0), c(5.0, 6.0)]);
}

#[test]
fn test_invalid_shape_is_reported() {
    let recordings = Recordings::from(Array::<f64, _>::zeros(IxDyn(&[2, 2, 2, 2])));
    match split_channels(&recordings) {
        Err(FormatError::InvalidShape { shape }) => assert_eq!(shape, vec![2, 2, 2, 2]),
        other => panic!("expected InvalidShape, got {:?}", other),
    }

    let scalar = Recordings::Real(Array::from_elem(IxDyn(&[]), 1.0));
    assert!(matches!(
        split_channels(&scalar),
        Err(FormatError::InvalidShape { .. })
    ));
}

#[test]
fn test_zero_channels_rejected() {
    let recordings = Recordings::from(Array::<f64, _>::zeros((0, 5, 2)));
    assert!(matches!(
        split_channels(&recordings),
        Err(FormatError::InvalidShape { .. })
    ));
}

#[test]
fn test_encode_channel_rejects_wrong_sub_array() {
    let channel = Recordings::from(arr2(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]));
    assert!(matches!(
        encode_channel(ChannelLayout::IqFirst, &channel),
        Err(FormatError::ShapeMismatch { .. })
    ));
    let flat = Recordings::from(arr1(&[1.0, 2.0]));
    assert!(matches!(
        encode_channel(ChannelLayout::TimeFirst, &flat),
        Err(FormatError::Shape(_))
    ));
}

#[test]
fn test_stack_channels() {
    let stacked = stack_channels(&[
        vec![c(1.0, 0.0), c(2.0, 0.0)],
        vec![c(3.0, 0.0), c(4.0, 0.0)],
    ])
    .unwrap();
    assert_eq!(stacked.shape(), &[2, 2]);
    assert_eq!(stacked[[1, 0]], c(3.0, 0.0));

    let ragged = stack_channels(&[vec![c(1.0, 0.0)], vec![]]);
    assert!(matches!(
        ragged,
        Err(FormatError::RaggedChannels { index: 1, .. })
    ));
}
