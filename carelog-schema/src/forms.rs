//! Typed form payloads, one per record category.
//!
//! These are the boundary types the HTTP layer deserializes submitted forms
//! into before anything reaches the store. Optional fields use
//! `empty_to_none`: browsers submit unfilled inputs and blank `<select>`
//! options as empty strings, which must become SQL NULL rather than `""`
//! (a `""` email would collide with the next blank one under UNIQUE).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserForm {
    pub name: String,
    #[serde(default, deserialize_with = "empty_to_none")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "empty_to_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecializationForm {
    pub specialization_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorForm {
    pub name: String,
    #[serde(default, deserialize_with = "empty_to_none")]
    pub email: Option<String>,
    /// Blank option in the specialization dropdown submits "".
    #[serde(default, deserialize_with = "empty_to_none")]
    pub specialization_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PharmacyForm {
    pub name: String,
    #[serde(default, deserialize_with = "empty_to_none")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "empty_to_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentForm {
    pub user_id: i64,
    pub doctor_id: i64,
    pub appointment_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionForm {
    pub user_id: i64,
    pub doctor_id: i64,
    pub pharmacy_id: i64,
    pub prescription_date: NaiveDate,
}

/// Treats a missing or empty form field as `None`, otherwise parses the
/// string value into `T`.
fn empty_to_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_fields_become_none() {
        let form: UserForm =
            serde_json::from_str(r#"{"name":"Ali","phone_number":"","email":""}"#).unwrap();
        assert_eq!(form.name, "Ali");
        assert_eq!(form.phone_number, None);
        assert_eq!(form.email, None);
    }

    #[test]
    fn missing_optional_fields_become_none() {
        let form: DoctorForm = serde_json::from_str(r#"{"name":"Dr. Ahsan"}"#).unwrap();
        assert_eq!(form.email, None);
        assert_eq!(form.specialization_id, None);
    }

    #[test]
    fn specialization_id_parses_from_string() {
        let form: DoctorForm =
            serde_json::from_str(r#"{"name":"Dr. Maria","specialization_id":"2"}"#).unwrap();
        assert_eq!(form.specialization_id, Some(2));
    }

    #[test]
    fn specialization_id_rejects_garbage() {
        let result = serde_json::from_str::<DoctorForm>(
            r#"{"name":"Dr. Maria","specialization_id":"two"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn appointment_date_parses_iso_8601() {
        let form: AppointmentForm = serde_json::from_str(
            r#"{"user_id":1,"doctor_id":1,"appointment_date":"2025-04-10"}"#,
        )
        .unwrap();
        assert_eq!(
            form.appointment_date,
            NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
        );
    }
}
