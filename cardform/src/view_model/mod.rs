// cardform-rs/cardform/src/view_model/mod.rs

/// View model construction.
pub mod builder;
/// Per-region view data and host callbacks.
pub mod callbacks;
/// The view model itself.
pub mod handle;

pub use builder::PaymentViewModelBuilder;
pub use callbacks::{
    BillingSummaryView, CardNumberView, ExpiryDateView, HeaderView, SecurityCodeView,
    UpdateCallbacks,
};
pub use handle::{PaymentState, PaymentViewModel};
