use cardform::test_support::{VISA_NUMBER, fill_valid_card, future_expiry, mock_harness};
use cardform::tokenization::MockTokenizationClient;
use cardform::types::{BillingFieldKind, CardScheme};

use crate::common::fixtures::billing_config;

#[test]
fn request_carries_normalized_form_values() -> anyhow::Result<()> {
    let client = MockTokenizationClient::deferred();
    let mut h = mock_harness(billing_config(), client)?;
    h.vm.update_card_number("4111 1111 1111 1111");
    h.vm.update_expiry_date(Some(future_expiry()));
    h.vm.update_security_code("123");
    h.vm.update_billing_field(BillingFieldKind::CardholderName, "  Ada Lovelace ");
    h.vm.update_billing_field(BillingFieldKind::PostalCode, "94105");
    assert!(h.vm.submit());

    let source = h.client.last_request().expect("request recorded");
    assert_eq!(source.number, VISA_NUMBER);
    assert_eq!(source.expiry, future_expiry());
    assert_eq!(source.security_code, "123");
    assert_eq!(source.scheme, Some(CardScheme::Visa));
    assert_eq!(
        source.billing_value(BillingFieldKind::CardholderName),
        Some("Ada Lovelace")
    );
    assert_eq!(source.billing_value(BillingFieldKind::AddressLine1), None);
    assert_eq!(h.client.pending_count(), 1);
    Ok(())
}

#[test]
fn request_debug_output_hides_card_data() -> anyhow::Result<()> {
    let mut h = mock_harness(billing_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);
    h.vm.update_billing_field(BillingFieldKind::CardholderName, "Ada Lovelace");
    h.vm.submit();

    let source = h.client.last_request().expect("request recorded");
    let debug = format!("{:?}", source);
    assert!(!debug.contains(VISA_NUMBER));
    assert!(!debug.contains("\"123\""));
    assert!(debug.contains("1111"));
    Ok(())
}

#[test]
fn second_submit_while_pending_sends_nothing() -> anyhow::Result<()> {
    let mut h = mock_harness(billing_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);
    h.vm.update_billing_field(BillingFieldKind::CardholderName, "Ada Lovelace");
    assert!(h.vm.submit());
    assert!(!h.vm.submit());
    assert_eq!(h.client.request_count(), 1);
    Ok(())
}
