use cardform::test_support::{
    AMEX_NUMBER, fill_valid_card, future_expiry, mock_harness,
};
use cardform::tokenization::MockTokenizationClient;
use cardform::types::{BillingFieldKind, CardScheme};
use cardform::validation::ValidationError;
use cardform::view_model::PaymentViewModelBuilder;

use crate::common::fixtures::{billing_config, default_config};

#[test]
fn update_all_fires_every_region() -> anyhow::Result<()> {
    let mut h = mock_harness(default_config(), MockTokenizationClient::new())?;
    h.vm.update_all();
    let u = h.updates.borrow();
    assert_eq!(u.headers.len(), 1);
    assert_eq!(u.headers[0].supported_schemes, CardScheme::ALL.to_vec());
    assert_eq!(u.card_numbers.len(), 1);
    assert_eq!(u.expiry_dates.len(), 1);
    assert_eq!(u.security_codes.len(), 1);
    assert_eq!(u.billing_summaries.len(), 1);
    assert_eq!(u.pay_button, vec![false]);
    // Pristine form: nothing shown as an error
    assert_eq!(u.card_numbers[0].error, None);
    Ok(())
}

#[test]
fn only_changed_regions_fire() -> anyhow::Result<()> {
    let mut h = mock_harness(default_config(), MockTokenizationClient::new())?;
    h.vm.update_expiry_date(Some(future_expiry()));
    {
        let u = h.updates.borrow();
        assert_eq!(u.expiry_dates.len(), 1);
        assert!(u.expiry_dates[0].valid);
        assert!(u.card_numbers.is_empty());
        assert!(u.security_codes.is_empty());
    }

    // Same value again: validity unchanged, no callback
    h.vm.update_expiry_date(Some(future_expiry()));
    assert_eq!(h.updates.borrow().region_updates(), 1);
    Ok(())
}

#[test]
fn typing_invalid_digits_shows_error_once() -> anyhow::Result<()> {
    let mut h = mock_harness(default_config(), MockTokenizationClient::new())?;
    h.vm.update_card_number("9");
    h.vm.update_card_number("99");
    let u = h.updates.borrow();
    assert_eq!(u.card_numbers.len(), 1);
    assert_eq!(u.card_numbers[0].error, Some(ValidationError::InvalidCardNumber));
    Ok(())
}

#[test]
fn pay_button_follows_submittable() -> anyhow::Result<()> {
    let mut h = mock_harness(default_config(), MockTokenizationClient::new())?;
    fill_valid_card(&mut h.vm);
    assert_eq!(h.updates.borrow().pay_button, vec![true]);

    h.vm.update_card_number(AMEX_NUMBER);
    assert_eq!(h.updates.borrow().pay_button, vec![true, false]);

    h.vm.update_security_code("1234");
    assert_eq!(h.updates.borrow().pay_button, vec![true, false, true]);
    Ok(())
}

#[test]
fn billing_summary_switches_from_add_prompt() -> anyhow::Result<()> {
    let mut h = mock_harness(billing_config(), MockTokenizationClient::new())?;
    h.vm.update_all();
    assert!(h.updates.borrow().billing_summaries[0].shows_add_prompt());

    h.vm.update_billing_field(BillingFieldKind::CardholderName, "Grace Hopper");
    h.vm.update_billing_field(BillingFieldKind::PostalCode, "20350");
    let u = h.updates.borrow();
    let last = u.billing_summaries.last().unwrap();
    assert!(!last.shows_add_prompt());
    assert_eq!(last.lines, vec!["Grace Hopper".to_string(), "20350".to_string()]);
    assert!(last.errors.is_empty());
    Ok(())
}

#[test]
fn billing_summary_reports_shown_errors() -> anyhow::Result<()> {
    let mut h = mock_harness(billing_config(), MockTokenizationClient::new())?;
    h.vm.update_billing_field(BillingFieldKind::PostalCode, "nope");
    let u = h.updates.borrow();
    let last = u.billing_summaries.last().unwrap();
    // Name is still pristine, so only the postal code error is shown
    assert_eq!(
        last.errors,
        vec![(BillingFieldKind::PostalCode, ValidationError::InvalidFormat)]
    );
    Ok(())
}

#[test]
fn view_model_without_callbacks() -> anyhow::Result<()> {
    let mut vm = PaymentViewModelBuilder::new()
        .client(MockTokenizationClient::new())
        .build()?;
    vm.update_all();
    vm.update_card_number(AMEX_NUMBER);
    assert_eq!(vm.detected_scheme(), Some(CardScheme::Amex));
    Ok(())
}
