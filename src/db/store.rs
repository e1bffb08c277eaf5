//! The store: a thin, typed wrapper around the SQLite pool.
//!
//! Every operation is a single parameterized statement. Handlers clone the
//! store (cheap, it is just the pool) and each call checks a connection out
//! of the pool for the duration of that one statement.

use crate::db::models::{
    DbAppointment, DbAppointmentDetail, DbDoctor, DbDoctorDetail, DbPharmacy, DbPrescription,
    DbPrescriptionDetail, DbSpecialization, DbUser,
};
use crate::db::schema::SQLITE_INIT;
use crate::db::seed;
use crate::error::CarelogError;
use carelog_schema::{
    AppointmentForm, DoctorForm, PharmacyForm, PrescriptionForm, SpecializationForm, UserForm,
};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if missing) the database at `database_url`.
    /// Foreign-key enforcement is switched on for every pooled connection;
    /// the cascade and set-null rules in the schema depend on it.
    pub async fn connect(database_url: &str) -> Result<Self, CarelogError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

        info!(database_url, "connected to database");
        Ok(Self { pool })
    }

    /// Applies the DDL statement-by-statement. Each statement is
    /// idempotent, so a partially initialized database heals on the next run.
    pub async fn init_schema(&self) -> Result<(), CarelogError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Inserts the fixed demo/reference rows (insert-if-absent).
    pub async fn seed(&self) -> Result<(), CarelogError> {
        seed::seed(&self.pool).await
    }

    // -- users ---------------------------------------------------------------

    pub async fn list_users(&self) -> Result<Vec<DbUser>, CarelogError> {
        let rows = sqlx::query_as::<_, DbUser>(
            r#"
        SELECT user_id, name, phone_number, email
        FROM users
        ORDER BY user_id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<DbUser>, CarelogError> {
        let row = sqlx::query_as::<_, DbUser>(
            r#"
        SELECT user_id, name, phone_number, email
        FROM users
        WHERE user_id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert_user(&self, form: UserForm) -> Result<i64, CarelogError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO users (name, phone_number, email)
        VALUES (?, ?, ?)
        RETURNING user_id
        "#,
        )
        .bind(form.name)
        .bind(form.phone_number)
        .bind(form.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Full-row replace; returns the number of rows touched (0 when absent).
    pub async fn update_user(&self, id: i64, form: UserForm) -> Result<u64, CarelogError> {
        let result = sqlx::query(
            r#"
        UPDATE users SET name = ?, phone_number = ?, email = ?
        WHERE user_id = ?
        "#,
        )
        .bind(form.name)
        .bind(form.phone_number)
        .bind(form.email)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_user(&self, id: i64) -> Result<u64, CarelogError> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // -- specializations -----------------------------------------------------

    pub async fn list_specializations(&self) -> Result<Vec<DbSpecialization>, CarelogError> {
        let rows = sqlx::query_as::<_, DbSpecialization>(
            r#"
        SELECT specialization_id, specialization_name
        FROM specializations
        ORDER BY specialization_id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn insert_specialization(
        &self,
        form: SpecializationForm,
    ) -> Result<i64, CarelogError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO specializations (specialization_name)
        VALUES (?)
        RETURNING specialization_id
        "#,
        )
        .bind(form.specialization_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Referencing doctors keep their row; their specialization goes NULL.
    pub async fn delete_specialization(&self, id: i64) -> Result<u64, CarelogError> {
        let result = sqlx::query("DELETE FROM specializations WHERE specialization_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // -- doctors -------------------------------------------------------------

    pub async fn list_doctors(&self) -> Result<Vec<DbDoctorDetail>, CarelogError> {
        let rows = sqlx::query_as::<_, DbDoctorDetail>(
            r#"
        SELECT d.doctor_id, d.name, d.email, s.specialization_name
        FROM doctors d
        LEFT JOIN specializations s ON d.specialization_id = s.specialization_id
        ORDER BY d.doctor_id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_doctor(&self, id: i64) -> Result<Option<DbDoctor>, CarelogError> {
        let row = sqlx::query_as::<_, DbDoctor>(
            r#"
        SELECT doctor_id, name, email, specialization_id
        FROM doctors
        WHERE doctor_id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert_doctor(&self, form: DoctorForm) -> Result<i64, CarelogError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO doctors (name, email, specialization_id)
        VALUES (?, ?, ?)
        RETURNING doctor_id
        "#,
        )
        .bind(form.name)
        .bind(form.email)
        .bind(form.specialization_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update_doctor(&self, id: i64, form: DoctorForm) -> Result<u64, CarelogError> {
        let result = sqlx::query(
            r#"
        UPDATE doctors SET name = ?, email = ?, specialization_id = ?
        WHERE doctor_id = ?
        "#,
        )
        .bind(form.name)
        .bind(form.email)
        .bind(form.specialization_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_doctor(&self, id: i64) -> Result<u64, CarelogError> {
        let result = sqlx::query("DELETE FROM doctors WHERE doctor_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // -- pharmacies ----------------------------------------------------------

    pub async fn list_pharmacies(&self) -> Result<Vec<DbPharmacy>, CarelogError> {
        let rows = sqlx::query_as::<_, DbPharmacy>(
            r#"
        SELECT pharmacy_id, name, phone_number, location
        FROM pharmacies
        ORDER BY pharmacy_id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_pharmacy(&self, id: i64) -> Result<Option<DbPharmacy>, CarelogError> {
        let row = sqlx::query_as::<_, DbPharmacy>(
            r#"
        SELECT pharmacy_id, name, phone_number, location
        FROM pharmacies
        WHERE pharmacy_id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert_pharmacy(&self, form: PharmacyForm) -> Result<i64, CarelogError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO pharmacies (name, phone_number, location)
        VALUES (?, ?, ?)
        RETURNING pharmacy_id
        "#,
        )
        .bind(form.name)
        .bind(form.phone_number)
        .bind(form.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update_pharmacy(&self, id: i64, form: PharmacyForm) -> Result<u64, CarelogError> {
        let result = sqlx::query(
            r#"
        UPDATE pharmacies SET name = ?, phone_number = ?, location = ?
        WHERE pharmacy_id = ?
        "#,
        )
        .bind(form.name)
        .bind(form.phone_number)
        .bind(form.location)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_pharmacy(&self, id: i64) -> Result<u64, CarelogError> {
        let result = sqlx::query("DELETE FROM pharmacies WHERE pharmacy_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // -- appointments --------------------------------------------------------

    pub async fn list_appointments(&self) -> Result<Vec<DbAppointmentDetail>, CarelogError> {
        let rows = sqlx::query_as::<_, DbAppointmentDetail>(
            r#"
        SELECT a.appointment_id, u.name AS user_name, d.name AS doctor_name, a.appointment_date
        FROM appointments a
        LEFT JOIN users u ON a.user_id = u.user_id
        LEFT JOIN doctors d ON a.doctor_id = d.doctor_id
        ORDER BY a.appointment_id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_appointment(&self, id: i64) -> Result<Option<DbAppointment>, CarelogError> {
        let row = sqlx::query_as::<_, DbAppointment>(
            r#"
        SELECT appointment_id, user_id, doctor_id, appointment_date
        FROM appointments
        WHERE appointment_id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert_appointment(&self, form: AppointmentForm) -> Result<i64, CarelogError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO appointments (user_id, doctor_id, appointment_date)
        VALUES (?, ?, ?)
        RETURNING appointment_id
        "#,
        )
        .bind(form.user_id)
        .bind(form.doctor_id)
        .bind(form.appointment_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update_appointment(
        &self,
        id: i64,
        form: AppointmentForm,
    ) -> Result<u64, CarelogError> {
        let result = sqlx::query(
            r#"
        UPDATE appointments SET user_id = ?, doctor_id = ?, appointment_date = ?
        WHERE appointment_id = ?
        "#,
        )
        .bind(form.user_id)
        .bind(form.doctor_id)
        .bind(form.appointment_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<u64, CarelogError> {
        let result = sqlx::query("DELETE FROM appointments WHERE appointment_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // -- prescriptions -------------------------------------------------------

    pub async fn list_prescriptions(&self) -> Result<Vec<DbPrescriptionDetail>, CarelogError> {
        let rows = sqlx::query_as::<_, DbPrescriptionDetail>(
            r#"
        SELECT p.prescription_id, u.name AS user_name, d.name AS doctor_name,
               ph.name AS pharmacy_name, p.prescription_date
        FROM prescriptions p
        LEFT JOIN users u ON p.user_id = u.user_id
        LEFT JOIN doctors d ON p.doctor_id = d.doctor_id
        LEFT JOIN pharmacies ph ON p.pharmacy_id = ph.pharmacy_id
        ORDER BY p.prescription_id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_prescription(&self, id: i64) -> Result<Option<DbPrescription>, CarelogError> {
        let row = sqlx::query_as::<_, DbPrescription>(
            r#"
        SELECT prescription_id, user_id, doctor_id, pharmacy_id, prescription_date
        FROM prescriptions
        WHERE prescription_id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert_prescription(&self, form: PrescriptionForm) -> Result<i64, CarelogError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO prescriptions (user_id, doctor_id, pharmacy_id, prescription_date)
        VALUES (?, ?, ?, ?)
        RETURNING prescription_id
        "#,
        )
        .bind(form.user_id)
        .bind(form.doctor_id)
        .bind(form.pharmacy_id)
        .bind(form.prescription_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update_prescription(
        &self,
        id: i64,
        form: PrescriptionForm,
    ) -> Result<u64, CarelogError> {
        let result = sqlx::query(
            r#"
        UPDATE prescriptions SET user_id = ?, doctor_id = ?, pharmacy_id = ?, prescription_date = ?
        WHERE prescription_id = ?
        "#,
        )
        .bind(form.user_id)
        .bind(form.doctor_id)
        .bind(form.pharmacy_id)
        .bind(form.prescription_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_prescription(&self, id: i64) -> Result<u64, CarelogError> {
        let result = sqlx::query("DELETE FROM prescriptions WHERE prescription_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
