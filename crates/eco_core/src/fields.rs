//! The three site forms and their typed field handles.

use crate::error::UnknownField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormRole {
    Report,
    Booking,
    Contact,
}

impl FormRole {
    pub const ALL: [FormRole; 3] = [FormRole::Report, FormRole::Booking, FormRole::Contact];

    pub fn form_id(self) -> &'static str {
        match self {
            FormRole::Report => "reportGarbageForm",
            FormRole::Booking => "bookVehicleForm",
            FormRole::Contact => "contactForm",
        }
    }

    /// Id of the section wrapping the form.
    pub fn container_id(self) -> &'static str {
        match self {
            FormRole::Report => "report-form",
            FormRole::Booking => "book-form",
            FormRole::Contact => "contact-form",
        }
    }

    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FormRole::Report => &[FieldId::ReportName, FieldId::ReportLocation, FieldId::GarbageLevel],
            FormRole::Booking => &[
                FieldId::BookName,
                FieldId::BookAddress,
                FieldId::BookDate,
                FieldId::BookTime,
                FieldId::GarbageType,
            ],
            FormRole::Contact => &[FieldId::ContactName, FieldId::ContactEmail, FieldId::ContactMessage],
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormRole::Report => "Garbage report sent successfully to the nearest garbage vehicle",
            FormRole::Booking => "Garbage vehicle booked successfully. Expected arrival in 2-3 hours.",
            FormRole::Contact => "Thank you for contacting us! We will respond shortly.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    ReportName,
    ReportLocation,
    GarbageLevel,
    BookName,
    BookAddress,
    BookDate,
    BookTime,
    GarbageType,
    ContactName,
    ContactEmail,
    ContactMessage,
}

impl FieldId {
    pub const ALL: [FieldId; 11] = [
        FieldId::ReportName,
        FieldId::ReportLocation,
        FieldId::GarbageLevel,
        FieldId::BookName,
        FieldId::BookAddress,
        FieldId::BookDate,
        FieldId::BookTime,
        FieldId::GarbageType,
        FieldId::ContactName,
        FieldId::ContactEmail,
        FieldId::ContactMessage,
    ];

    /// Element id, also used as the field's form name.
    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::ReportName => "reportName",
            FieldId::ReportLocation => "reportLocation",
            FieldId::GarbageLevel => "garbageLevel",
            FieldId::BookName => "bookName",
            FieldId::BookAddress => "bookAddress",
            FieldId::BookDate => "bookDate",
            FieldId::BookTime => "bookTime",
            FieldId::GarbageType => "garbageType",
            FieldId::ContactName => "contactName",
            FieldId::ContactEmail => "contactEmail",
            FieldId::ContactMessage => "contactMessage",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.dom_id() == id)
    }

    pub fn role(self) -> FormRole {
        match self {
            FieldId::ReportName | FieldId::ReportLocation | FieldId::GarbageLevel => FormRole::Report,
            FieldId::BookName
            | FieldId::BookAddress
            | FieldId::BookDate
            | FieldId::BookTime
            | FieldId::GarbageType => FormRole::Booking,
            FieldId::ContactName | FieldId::ContactEmail | FieldId::ContactMessage => FormRole::Contact,
        }
    }

    /// Free-text inputs are trimmed before validation; pickers and selects are read as-is.
    pub fn is_trimmed(self) -> bool {
        !matches!(
            self,
            FieldId::GarbageLevel | FieldId::BookDate | FieldId::BookTime | FieldId::GarbageType
        )
    }
}

/// Raw values of one form's fields, as the user typed them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormValues {
    role: FormRole,
    values: BTreeMap<FieldId, String>,
}

impl FormValues {
    pub fn new(role: FormRole) -> Self {
        Self {
            role,
            values: BTreeMap::new(),
        }
    }

    pub fn role(&self) -> FormRole {
        self.role
    }

    /// Raw value; empty when never set.
    pub fn raw(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Value as the validator sees it: trimmed for free-text fields.
    pub fn read(&self, field: FieldId) -> &str {
        let raw = self.raw(field);
        if field.is_trimmed() {
            raw.trim()
        } else {
            raw
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) -> Result<(), UnknownField> {
        if field.role() != self.role {
            return Err(UnknownField {
                name: field.dom_id().to_string(),
                form: self.role.form_id(),
            });
        }
        self.values.insert(field, value.into());
        Ok(())
    }

    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = FieldId::from_dom_id(name).ok_or_else(|| UnknownField {
            name: name.to_string(),
            form: self.role.form_id(),
        })?;
        self.set(field, value)
    }

    /// Empties every field.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// Field name to raw value, for every field of the form.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.role
            .fields()
            .iter()
            .map(|f| (f.dom_id().to_string(), self.raw(*f).to_string()))
            .collect()
    }
}
