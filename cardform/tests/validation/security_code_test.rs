use cardform::scheme::{SchemeTable, detect_scheme};
use cardform::validation::{ValidationError, validate_security_code};

#[test]
fn four_digits_depend_on_detected_scheme() {
    let table = SchemeTable::builtin();

    let amex = detect_scheme("378282246310005");
    assert!(validate_security_code("1234", amex, &table).is_valid());

    let visa = detect_scheme("4111111111111111");
    assert_eq!(
        validate_security_code("1234", visa, &table).reason,
        Some(ValidationError::InvalidSecurityCode)
    );
}

#[test]
fn validators_are_stateless() {
    let table = SchemeTable::builtin();
    let visa = detect_scheme("4111");
    let first = validate_security_code("12", visa, &table);
    let _ = validate_security_code("123", visa, &table);
    let again = validate_security_code("12", visa, &table);
    assert_eq!(first, again);
}
