// cardform-rs/cardform/src/prelude.rs

pub use crate::config::{FormConfig, FormConfigBuilder};
pub use crate::events::{EventSink, FormEvent, LogEventSink};
pub use crate::form::{Aggregator, Evaluation, FieldId, FieldStatus, FormDiff, FormState};
pub use crate::scheme::{SchemeTable, detect_scheme};
pub use crate::tokenization::{
    MockTokenizationClient, PaymentSource, TokenCompletion, TokenDetails, TokenResult,
    TokenizationClient, TokenizationError,
};
pub use crate::validation::{
    BillingFieldRule, ValidationError, ValidationOutcome, is_luhn_valid, validate_billing_field,
    validate_card_number, validate_expiry, validate_security_code,
};
pub use crate::view_model::{PaymentState, PaymentViewModel, PaymentViewModelBuilder, UpdateCallbacks};
pub use crate::{BillingFieldKind, CardScheme, Error, ExpiryDate, Result, YearMonth};

// Re-export small utilities for convenience
pub use crate::utils::{Clock, FixedClock, SystemClock, mask_pan, strip_non_digits};
