use super::*;

#[test]
fn unsupported_type_message_matches_form_copy() {
    let err = ValidationError::UnsupportedType { mime: "image/png".to_owned() };
    assert_eq!(err.to_string(), "Only PDF files are allowed.");
}

#[test]
fn too_large_message_matches_form_copy() {
    let max = crate::consts::MAX_UPLOAD_BYTES;
    let err = ValidationError::TooLarge { size: max + 1, max };
    assert_eq!(err.to_string(), "File size must be under 20MB.");
}

#[test]
fn missing_file_is_not_reportable() {
    assert!(!ValidationError::NoFile.is_reportable());
    assert!(ValidationError::TooLarge { size: 2, max: 1 }.is_reportable());
    assert!(ValidationError::UnsupportedType { mime: String::new() }.is_reportable());
}
