// cardform-rs/cardform/src/form/aggregator.rs

use super::state::{FieldId, FormState};
use crate::config::FormConfig;
use crate::types::{CardScheme, YearMonth};
use crate::validation::{
    ValidationError, ValidationOutcome, validate_billing_field, validate_card_number,
    validate_expiry, validate_security_code,
};

/// Validation result of one field plus the error the form should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStatus {
    /// Raw validator result.
    pub outcome: ValidationOutcome,
    /// `None` while the field is pristine, even when it is invalid.
    pub displayed_error: Option<ValidationError>,
}

impl FieldStatus {
    /// Shorthand for `outcome.valid`.
    pub fn is_valid(&self) -> bool {
        self.outcome.valid
    }
}

/// What changed since the previous evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDiff {
    /// Fields whose validity or displayed error changed.
    pub fields: Vec<FieldId>,
    /// Form-wide submittable flag flipped.
    pub submittable_changed: bool,
    /// Detected scheme changed.
    pub scheme_changed: bool,
}

impl FormDiff {
    /// Nothing changed at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && !self.submittable_changed && !self.scheme_changed
    }

    /// Whether `id` is among the changed fields.
    pub fn contains(&self, id: FieldId) -> bool {
        self.fields.contains(&id)
    }

    /// True when any billing field is in the diff.
    pub fn touches_billing(&self) -> bool {
        self.fields.iter().any(|id| matches!(id, FieldId::Billing(_)))
    }
}

/// Full evaluation of a [`FormState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Status of every field, in display order.
    pub statuses: Vec<(FieldId, FieldStatus)>,
    /// Every field is valid.
    pub submittable: bool,
    /// Scheme detected from the card number.
    pub scheme: Option<CardScheme>,
    /// Changes relative to the previous evaluation.
    pub diff: FormDiff,
}

impl Evaluation {
    /// Status of `id`; `None` if the field is not on the form.
    pub fn status(&self, id: FieldId) -> Option<&FieldStatus> {
        self.statuses.iter().find(|(f, _)| *f == id).map(|(_, s)| s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    statuses: Vec<(FieldId, FieldStatus)>,
    submittable: bool,
    scheme: Option<CardScheme>,
}

/// Runs every validator over the form and diffs the result against the
/// previous run.
///
/// The only state kept is the previous snapshot; the validators themselves
/// are stateless.
#[derive(Debug, Default)]
pub struct Aggregator {
    previous: Option<Snapshot>,
}

impl Aggregator {
    /// Aggregator with no previous snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous snapshot so the next evaluation reports every
    /// field as changed.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Validate every field against `config`, using `today` for the expiry check.
    pub fn evaluate(&mut self, state: &FormState, config: &FormConfig, today: YearMonth) -> Evaluation {
        let table = config.scheme_table();
        let scheme = table.detect(state.card_number());

        let mut statuses = Vec::new();
        for id in state.field_ids() {
            let outcome = match id {
                FieldId::CardNumber => {
                    validate_card_number(state.card_number(), table, config.supported_schemes())
                }
                FieldId::ExpiryDate => match state.expiry_date() {
                    Some(date) => validate_expiry(&date, today),
                    None => ValidationOutcome::invalid(ValidationError::RequiredFieldMissing),
                },
                FieldId::SecurityCode => validate_security_code(state.security_code(), scheme, table),
                FieldId::Billing(kind) => match config.billing_field(kind) {
                    Some(validator) => {
                        validate_billing_field(state.billing_field(kind).unwrap_or(""), validator)
                    }
                    None => ValidationOutcome::valid(),
                },
            };
            let displayed_error = if state.is_pristine(id) {
                None
            } else {
                outcome.reason
            };
            log::trace!("field {:?}: valid={} shown={:?}", id, outcome.valid, displayed_error);
            statuses.push((
                id,
                FieldStatus {
                    outcome,
                    displayed_error,
                },
            ));
        }

        let submittable = statuses.iter().all(|(_, s)| s.is_valid());
        let diff = self.diff(&statuses, submittable, scheme);
        if !diff.is_empty() {
            log::debug!(
                "form changed: fields={:?} submittable={} scheme={:?}",
                diff.fields,
                submittable,
                scheme
            );
        }

        self.previous = Some(Snapshot {
            statuses: statuses.clone(),
            submittable,
            scheme,
        });

        Evaluation {
            statuses,
            submittable,
            scheme,
            diff,
        }
    }

    fn diff(
        &self,
        statuses: &[(FieldId, FieldStatus)],
        submittable: bool,
        scheme: Option<CardScheme>,
    ) -> FormDiff {
        let Some(prev) = &self.previous else {
            return FormDiff {
                fields: statuses.iter().map(|(id, _)| *id).collect(),
                submittable_changed: true,
                scheme_changed: true,
            };
        };

        let fields = statuses
            .iter()
            .filter(|(id, status)| {
                prev.statuses
                    .iter()
                    .find(|(p, _)| p == id)
                    .is_none_or(|(_, old)| old != status)
            })
            .map(|(id, _)| *id)
            .collect();

        FormDiff {
            fields,
            submittable_changed: prev.submittable != submittable,
            scheme_changed: prev.scheme != scheme,
        }
    }
}
