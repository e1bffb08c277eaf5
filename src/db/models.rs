use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbUser {
    pub user_id: i64,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbSpecialization {
    pub specialization_id: i64,
    pub specialization_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbDoctor {
    pub doctor_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub specialization_id: Option<i64>,
}

/// Doctor row joined with its specialization's display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbDoctorDetail {
    pub doctor_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub specialization_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbPharmacy {
    pub pharmacy_id: i64,
    pub name: String,
    pub phone_number: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbAppointment {
    pub appointment_id: i64,
    pub user_id: i64,
    pub doctor_id: i64,
    pub appointment_date: NaiveDate,
}

/// Appointment row joined with patient and doctor display names.
/// The names are `Option` because the joins are LEFT JOINs; in practice the
/// cascade rules remove an appointment with its parents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbAppointmentDetail {
    pub appointment_id: i64,
    pub user_name: Option<String>,
    pub doctor_name: Option<String>,
    pub appointment_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbPrescription {
    pub prescription_id: i64,
    pub user_id: i64,
    pub doctor_id: i64,
    pub pharmacy_id: i64,
    pub prescription_date: NaiveDate,
}

/// Prescription row joined with patient, doctor, and pharmacy display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbPrescriptionDetail {
    pub prescription_id: i64,
    pub user_name: Option<String>,
    pub doctor_name: Option<String>,
    pub pharmacy_name: Option<String>,
    pub prescription_date: NaiveDate,
}
