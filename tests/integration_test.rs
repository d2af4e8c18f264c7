use hdfs_format::format::{
    RCFILE_INPUT_FORMAT, SEQUENCE_INPUT_FORMAT, TEXT_INPUT_FORMAT, TREVNI_INPUT_FORMAT,
};
use hdfs_format::registry::{classify_to_wire, describe, supported_class_names};
use hdfs_format::{classify, is_supported_class_name, FileFormat, FormatError, WireFormat};
use proptest::prelude::*;
use std::thread;

const TABLE: [(&str, FileFormat, WireFormat); 4] = [
    (RCFILE_INPUT_FORMAT,   FileFormat::RcFile,       WireFormat::RcFile),
    (TEXT_INPUT_FORMAT,     FileFormat::Text,         WireFormat::Text),
    (SEQUENCE_INPUT_FORMAT, FileFormat::SequenceFile, WireFormat::SequenceFile),
    (TREVNI_INPUT_FORMAT,   FileFormat::Trevni,       WireFormat::Trevni),
];

#[test]
fn test_every_supported_class_name() {
    for (name, format, wire) in TABLE {
        assert!(is_supported_class_name(name));
        assert_eq!(classify(Some(name)).unwrap(), format);
        assert_eq!(format.to_wire(), wire);
    }
    assert_eq!(supported_class_names().count(), TABLE.len());
}

#[test]
fn test_rcfile_to_wire() {
    let format = classify(Some("org.apache.hadoop.hive.ql.io.RCFileInputFormat")).unwrap();
    assert_eq!(format, FileFormat::RcFile);
    assert_eq!(format.to_wire(), WireFormat::RcFile);
}

#[test]
fn test_unknown_class_name() {
    match classify(Some("unknown.format.Reader")) {
        Err(FormatError::UnrecognizedFormat(name)) => assert_eq!(name, "unknown.format.Reader"),
        other => panic!("expected UnrecognizedFormat, got {:?}", other),
    }
    assert!(!is_supported_class_name("unknown.format.Reader"));
}

#[test]
fn test_empty_class_name() {
    assert!(!is_supported_class_name(""));
    assert!(matches!(classify(Some("")), Err(FormatError::InvalidArgument)));
    assert!(matches!(classify_to_wire(None), Err(FormatError::InvalidArgument)));
}

#[test]
fn test_unrecognized_error_message_names_the_class() {
    let err = classify(Some("com.example.OrcInputFormat")).unwrap_err();
    assert!(err.to_string().contains("com.example.OrcInputFormat"));
}

#[test]
fn test_trevni_to_wire_is_stable_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                (0..1000)
                    .map(|_| FileFormat::Trevni.to_wire())
                    .all(|w| w == WireFormat::Trevni)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

#[test]
fn test_concurrent_classification() {
    let handles: Vec<_> = TABLE
        .iter()
        .map(|&(name, format, _)| thread::spawn(move || classify(Some(name)).unwrap() == format))
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

#[test]
fn test_wire_values_round_trip_through_i32() {
    let values: Vec<i32> = TABLE.iter().map(|(_, format, _)| format.to_wire().value()).collect();
    assert_eq!(values, vec![0, 1, 2, 3]);
    for (v, (_, format, _)) in values.into_iter().zip(TABLE) {
        assert_eq!(WireFormat::try_from(v).unwrap().to_file_format(), format);
    }
}

#[test]
fn test_describe_matches_table() {
    let rows = describe();
    assert_eq!(rows.len(), TABLE.len());
    for (row, (name, format, wire)) in rows.iter().zip(TABLE) {
        assert_eq!(row.format, format);
        assert_eq!(row.class_name, name);
        assert_eq!(row.wire, wire.value());
    }
}

fn near_miss() -> impl Strategy<Value = String> {
    (0..TABLE.len(), 0..4usize).prop_map(|(i, edit)| {
        let name = TABLE[i].0;
        match edit {
            0 => name.to_lowercase(),
            1 => format!("{name} "),
            2 => name[..name.len() - 1].to_string(),
            _ => name.replace("InputFormat", "OutputFormat"),
        }
    })
}

proptest! {
    #[test]
    fn prop_support_iff_classify_succeeds(name in ".*") {
        prop_assert_eq!(is_supported_class_name(&name), classify(Some(name.as_str())).is_ok());
    }

    #[test]
    fn prop_random_strings_are_unrecognized(name in "[a-zA-Z.]{1,64}") {
        prop_assume!(!TABLE.iter().any(|(n, _, _)| *n == name));
        prop_assert!(!is_supported_class_name(&name));
        let unrecognized = matches!(classify(Some(name.as_str())), Err(FormatError::UnrecognizedFormat(ref n)) if *n == name);
        prop_assert!(unrecognized);
    }

    #[test]
    fn prop_near_misses_are_unrecognized(name in near_miss()) {
        prop_assert!(!is_supported_class_name(&name));
        let unrecognized = matches!(classify(Some(name.as_str())), Err(FormatError::UnrecognizedFormat(_)));
        prop_assert!(unrecognized);
    }

    #[test]
    fn prop_wire_values_outside_range_are_rejected(v in any::<i32>()) {
        prop_assert_eq!(WireFormat::from_value(v).is_ok(), (0..=3).contains(&v));
    }
}
