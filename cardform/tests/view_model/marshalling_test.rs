use std::thread;
use std::time::Duration;

use cardform::test_support::{fill_valid_card, mock_harness, sample_token};
use cardform::tokenization::MockTokenizationClient;
use cardform::view_model::PaymentState;

use crate::common::fixtures::default_config;
use crate::common::init_logging;

#[test]
fn completion_from_worker_thread_is_applied_by_owner() -> anyhow::Result<()> {
    init_logging();
    let mut h = mock_harness(default_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);
    h.vm.submit();

    let completion = h.client.take_pending().expect("pending completion");
    let worker = thread::spawn(move || completion(Ok(sample_token())));
    worker.join().expect("worker panicked");

    // Nothing happens until the owner drains the queue
    assert_eq!(h.vm.state(), PaymentState::Submitting);
    assert!(h.updates.borrow().tokens.is_empty());

    assert_eq!(h.vm.process_completions(), 1);
    assert_eq!(h.vm.state(), PaymentState::Completed);
    assert_eq!(h.updates.borrow().tokens.len(), 1);
    Ok(())
}

#[test]
fn wait_for_completion_blocks_until_result() -> anyhow::Result<()> {
    init_logging();
    let mut h = mock_harness(default_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);
    h.vm.submit();

    let completion = h.client.take_pending().expect("pending completion");
    let worker = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        completion(Ok(sample_token()));
    });

    assert!(h.vm.wait_for_completion(Duration::from_secs(5)));
    assert_eq!(h.vm.state(), PaymentState::Completed);
    worker.join().expect("worker panicked");
    Ok(())
}

#[test]
fn wait_for_completion_times_out() -> anyhow::Result<()> {
    let mut h = mock_harness(default_config(), MockTokenizationClient::deferred())?;
    fill_valid_card(&mut h.vm);
    h.vm.submit();
    assert!(!h.vm.wait_for_completion(Duration::from_millis(10)));
    assert_eq!(h.vm.state(), PaymentState::Submitting);
    Ok(())
}

#[test]
fn synchronous_client_resolves_inside_submit() -> anyhow::Result<()> {
    let client = MockTokenizationClient::new();
    client.push_result(Ok(sample_token()));
    let mut h = mock_harness(default_config(), client)?;
    fill_valid_card(&mut h.vm);
    assert!(h.vm.submit());
    assert_eq!(h.vm.state(), PaymentState::Completed);
    assert_eq!(h.vm.process_completions(), 0);
    Ok(())
}
