//! One form's submit flow: read, clear old errors, validate, then show
//! field errors or the success banner.

use crate::banner::{HideTicket, SuccessBanner};
use crate::error::UnknownField;
use crate::fields::{FieldId, FormRole, FormValues};
use crate::validation::{self, ValidationReport};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Valid: banner shown, fields reset. Hide the banner later with the ticket.
    Accepted(HideTicket),
    Rejected(ValidationReport),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormController {
    role: FormRole,
    values: FormValues,
    errors: BTreeMap<FieldId, String>,
    banner: SuccessBanner,
}

impl FormController {
    pub fn new(role: FormRole) -> Self {
        Self {
            role,
            values: FormValues::new(role),
            errors: BTreeMap::new(),
            banner: SuccessBanner::default(),
        }
    }

    pub fn role(&self) -> FormRole {
        self.role
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) -> Result<(), UnknownField> {
        self.values.set(field, value)
    }

    pub fn banner(&self) -> &SuccessBanner {
        &self.banner
    }

    pub fn banner_mut(&mut self) -> &mut SuccessBanner {
        &mut self.banner
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Shows `message` under `field`. A field from another form is ignored.
    pub fn show_error(&mut self, field: FieldId, message: impl Into<String>) {
        if field.role() != self.role {
            warn!(field = field.dom_id(), form = self.role.form_id(), "error for foreign field ignored");
            return;
        }
        self.errors.insert(field, message.into());
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Shows the banner and empties the form.
    pub fn show_success_message(&mut self, message: &str) -> HideTicket {
        let ticket = self.banner.show(message);
        self.values.reset();
        ticket
    }

    pub fn hide_banner(&mut self, ticket: HideTicket) -> bool {
        self.banner.hide(ticket)
    }

    pub fn submit(&mut self, today: NaiveDate) -> SubmitOutcome {
        self.clear_errors();
        let report = validation::validate(&self.values, today);

        if report.is_valid() {
            let message = self.role.success_message();
            let ticket = self.show_success_message(message);
            info!(form = self.role.form_id(), "form submitted");
            return SubmitOutcome::Accepted(ticket);
        }

        for failure in report.errors() {
            self.show_error(failure.field, failure.message);
        }
        debug!(
            form = self.role.form_id(),
            failed = report.errors().len(),
            "form rejected"
        );
        SubmitOutcome::Rejected(report)
    }
}
