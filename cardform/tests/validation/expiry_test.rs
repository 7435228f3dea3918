use cardform::types::ExpiryDate;
use cardform::utils::{Clock, SystemClock};
use cardform::validation::{ValidationError, validate_expiry};

#[test]
fn month_thirteen_is_invalid() {
    let today = SystemClock.current_month();
    let out = validate_expiry(&ExpiryDate::new(13, today.year() + 1), today);
    assert_eq!(out.reason, Some(ValidationError::InvalidExpiryMonth));
}

#[test]
fn one_month_before_now_is_expired() {
    let today = SystemClock.current_month();
    let prev = today.previous();
    let out = validate_expiry(&ExpiryDate::new(prev.month(), prev.year()), today);
    assert_eq!(out.reason, Some(ValidationError::ExpiredCard));
}

#[test]
fn current_month_is_valid() {
    let today = SystemClock.current_month();
    let out = validate_expiry(&ExpiryDate::new(today.month(), today.year()), today);
    assert!(out.is_valid());
}

#[test]
fn parsed_text_feeds_the_validator() {
    let today = SystemClock.current_month();
    let next = today.next();
    let text = format!("{:02}/{:02}", next.month(), next.year() % 100);
    let date = ExpiryDate::parse(&text).unwrap();
    assert!(validate_expiry(&date, today).is_valid());
}
