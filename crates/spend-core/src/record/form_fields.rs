use std::collections::BTreeMap;

use super::choices::Choice;
use crate::errors::FieldError;

/// Raw submitted form values keyed by field name.
///
/// Values are kept verbatim so a rejected submission can be re-rendered
/// with exactly what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: BTreeMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later duplicates of a key overwrite earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Self::new();
        for (k, v) in pairs {
            fields.values.insert(k.into(), v.into());
        }
        fields
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn required(&self, field: &'static str) -> Result<&str, FieldError> {
        self.get(field)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(FieldError::Missing { field })
    }

    pub(crate) fn float(&self, field: &'static str) -> Result<f64, FieldError> {
        let raw = self.required(field)?;
        let value: f64 = raw.parse().map_err(|_| FieldError::NotANumber {
            field,
            value: raw.to_string(),
        })?;
        if !value.is_finite() {
            return Err(FieldError::NotFinite {
                field,
                value: raw.to_string(),
            });
        }
        Ok(value)
    }

    pub(crate) fn integer(&self, field: &'static str) -> Result<i64, FieldError> {
        let raw = self.required(field)?;
        raw.parse().map_err(|_| FieldError::NotAnInteger {
            field,
            value: raw.to_string(),
        })
    }

    pub(crate) fn choice<C: Choice>(&self) -> Result<C, FieldError> {
        C::from_label(self.required(C::FIELD)?)
    }
}
