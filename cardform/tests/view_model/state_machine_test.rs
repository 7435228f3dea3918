use cardform::test_support::{fill_valid_card, mock_harness, sample_network_error, sample_token};
use cardform::tokenization::MockTokenizationClient;
use cardform::view_model::PaymentState;

use crate::common::fixtures::default_config;
use crate::common::init_logging;

#[test]
fn submit_with_invalid_form_stays_editing() -> anyhow::Result<()> {
    init_logging();
    let mut h = mock_harness(default_config(), MockTokenizationClient::new())?;
    h.vm.update_card_number("4111111111111112");
    assert!(!h.vm.submit());
    assert_eq!(h.vm.state(), PaymentState::Editing);
    assert_eq!(h.client.request_count(), 0);
    Ok(())
}

#[test]
fn success_fires_callback_once_then_edit_returns_to_editing() -> anyhow::Result<()> {
    init_logging();
    let mut h = mock_harness(default_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);

    assert!(h.vm.submit());
    assert_eq!(h.vm.state(), PaymentState::Submitting);

    h.client.complete_next(Ok(sample_token()));
    h.vm.process_completions();
    assert_eq!(h.vm.state(), PaymentState::Completed);
    assert_eq!(h.updates.borrow().tokens.len(), 1);

    h.vm.process_completions();
    assert_eq!(h.updates.borrow().tokens.len(), 1);

    h.vm.update_card_number("4111 1111 1111 1111");
    assert_eq!(h.vm.state(), PaymentState::Editing);
    Ok(())
}

#[test]
fn failure_then_retry() -> anyhow::Result<()> {
    init_logging();
    let mut h = mock_harness(default_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);

    h.vm.submit();
    h.client.complete_next(Err(sample_network_error()));
    h.vm.process_completions();
    assert_eq!(h.vm.state(), PaymentState::Failed);
    assert_eq!(h.updates.borrow().failures.len(), 1);
    assert!(h.vm.pay_button_enabled());

    assert!(h.vm.submit());
    assert_eq!(h.vm.state(), PaymentState::Submitting);
    h.client.complete_next(Ok(sample_token()));
    h.vm.process_completions();
    assert_eq!(h.vm.state(), PaymentState::Completed);
    assert_eq!(h.updates.borrow().failures.len(), 1);
    assert_eq!(h.updates.borrow().tokens.len(), 1);
    Ok(())
}

#[test]
fn edit_after_failure_returns_to_editing() -> anyhow::Result<()> {
    init_logging();
    let mut h = mock_harness(default_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);
    h.vm.submit();
    h.client.complete_next(Err(sample_network_error()));
    h.vm.process_completions();
    assert_eq!(h.vm.state(), PaymentState::Failed);

    h.vm.update_security_code("321");
    assert_eq!(h.vm.state(), PaymentState::Editing);
    assert!(h.vm.pay_button_enabled());
    Ok(())
}

#[test]
fn edits_while_submitting_keep_request_pending() -> anyhow::Result<()> {
    init_logging();
    let mut h = mock_harness(default_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);
    h.vm.submit();

    h.vm.update_security_code("12");
    assert_eq!(h.vm.state(), PaymentState::Submitting);
    assert!(!h.vm.pay_button_enabled());

    h.client.complete_next(Ok(sample_token()));
    h.vm.process_completions();
    assert_eq!(h.vm.state(), PaymentState::Completed);
    // Form is now invalid, so the button stays off
    assert!(!h.vm.pay_button_enabled());
    Ok(())
}

#[test]
fn reset_while_submitting_still_resolves() -> anyhow::Result<()> {
    init_logging();
    let mut h = mock_harness(default_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);
    h.vm.submit();
    h.vm.reset();
    assert_eq!(h.vm.state(), PaymentState::Submitting);

    h.client.complete_next(Err(sample_network_error()));
    h.vm.process_completions();
    assert_eq!(h.vm.state(), PaymentState::Failed);
    Ok(())
}
