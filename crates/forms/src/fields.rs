use std::collections::BTreeMap;

use serde::Serialize;

/// Form inputs that can carry a validation message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    AverageSalesVolume,
    MarketExperience,
    Message,
    Budget,
}

impl Field {
    /// Input `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::AverageSalesVolume => "averageSalesVolume",
            Field::MarketExperience => "marketExperience",
            Field::Message => "message",
            Field::Budget => "budget",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "fullName" => Field::FullName,
            "email" => Field::Email,
            "phone" => Field::Phone,
            "averageSalesVolume" => Field::AverageSalesVolume,
            "marketExperience" => Field::MarketExperience,
            "message" => Field::Message,
            "budget" => Field::Budget,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Editing a field clears its message. Returns `true` if one was shown.
    pub fn clear(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }

    pub(crate) fn into_result<T>(self, ok: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(ok) } else { Err(self) }
    }
}
