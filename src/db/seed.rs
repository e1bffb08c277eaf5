//! Fixed demo/reference rows inserted at startup.
//!
//! Every insert is keyed on natural uniqueness (specialization name,
//! user/doctor email, pharmacy name, the full identity tuple for
//! appointments and prescriptions), so re-running the seed is a no-op.
//! Appointment and prescription rows source their foreign keys from the
//! parent tables; if a seeded parent was deleted by an operator, the child
//! insert matches nothing instead of violating a foreign key.

use crate::error::CarelogError;
use sqlx::SqlitePool;
use tracing::info;

const SPECIALIZATIONS: [&str; 10] = [
    "Cardiology",
    "Dermatology",
    "Neurology",
    "Pediatrics",
    "Orthopedics",
    "Oncology",
    "Psychiatry",
    "Gastroenterology",
    "Endocrinology",
    "Ophthalmology",
];

const USERS: [(&str, &str, &str); 6] = [
    ("Ali", "0300-1234567", "ali786@gmail.com"),
    ("Iqra", "0312-6543210", "iqra2025@gmail.com"),
    ("Sania", "0321-1122334", "sania999@gmail.com"),
    ("Qomal", "0333-9988776", "qomal11@gmail.com"),
    ("Huzaifa", "0345-5566778", "huzaifa456@gmail.com"),
    ("Safiullah", "0301-4455667", "safiullah007@gmail.com"),
];

// (name, email, specialization name)
const DOCTORS: [(&str, &str, &str); 10] = [
    ("Dr. Ahsan", "ahsan.cardiology@example.com", "Cardiology"),
    ("Dr. Maria", "maria.dermatology@example.com", "Dermatology"),
    ("Dr. Shahid", "shahid.neuro@example.com", "Neurology"),
    ("Dr. Sara", "sara.pediatrics@example.com", "Pediatrics"),
    ("Dr. Kamran", "kamran.ortho@example.com", "Orthopedics"),
    ("Dr. Zoya", "zoya.oncology@example.com", "Oncology"),
    ("Dr. Asif", "asif.psychiatry@example.com", "Psychiatry"),
    ("Dr. Rabia", "rabia.gastro@example.com", "Gastroenterology"),
    ("Dr. Bilal", "bilal.endo@example.com", "Endocrinology"),
    ("Dr. Usman", "usman.eye@example.com", "Ophthalmology"),
];

const PHARMACIES: [(&str, &str, &str); 3] = [
    ("United Pharmacy", "042-9876543", "Mansehra"),
    ("MediPlus Pharmacy", "042-8765432", "Islamabad"),
    ("Rehmat Pharmacy", "0992-4455667", "Abbottabad"),
];

// (user_id, doctor_id, date)
const APPOINTMENTS: [(i64, i64, &str); 5] = [
    (1, 1, "2025-04-10"),
    (2, 2, "2025-04-11"),
    (3, 3, "2025-04-12"),
    (4, 4, "2025-04-13"),
    (5, 5, "2025-04-14"),
];

// (user_id, doctor_id, pharmacy_id, date)
const PRESCRIPTIONS: [(i64, i64, i64, &str); 5] = [
    (1, 1, 1, "2025-04-10"),
    (2, 2, 2, "2025-04-11"),
    (3, 3, 3, "2025-04-12"),
    (4, 4, 1, "2025-04-13"),
    (5, 5, 2, "2025-04-14"),
];

pub async fn seed(pool: &SqlitePool) -> Result<(), CarelogError> {
    for name in SPECIALIZATIONS {
        sqlx::query("INSERT OR IGNORE INTO specializations (specialization_name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await?;
    }

    for (name, phone_number, email) in USERS {
        sqlx::query("INSERT OR IGNORE INTO users (name, phone_number, email) VALUES (?, ?, ?)")
            .bind(name)
            .bind(phone_number)
            .bind(email)
            .execute(pool)
            .await?;
    }

    for (name, email, specialization_name) in DOCTORS {
        sqlx::query(
            r#"
        INSERT OR IGNORE INTO doctors (name, email, specialization_id)
        SELECT ?, ?, specialization_id FROM specializations WHERE specialization_name = ?
        "#,
        )
        .bind(name)
        .bind(email)
        .bind(specialization_name)
        .execute(pool)
        .await?;
    }

    for (name, phone_number, location) in PHARMACIES {
        sqlx::query(
            r#"
        INSERT INTO pharmacies (name, phone_number, location)
        SELECT ?, ?, ?
        WHERE NOT EXISTS (SELECT 1 FROM pharmacies WHERE name = ?)
        "#,
        )
        .bind(name)
        .bind(phone_number)
        .bind(location)
        .bind(name)
        .execute(pool)
        .await?;
    }

    for (user_id, doctor_id, date) in APPOINTMENTS {
        sqlx::query(
            r#"
        INSERT INTO appointments (user_id, doctor_id, appointment_date)
        SELECT u.user_id, d.doctor_id, ?
        FROM users u, doctors d
        WHERE u.user_id = ? AND d.doctor_id = ?
          AND NOT EXISTS (
            SELECT 1 FROM appointments
            WHERE user_id = ? AND doctor_id = ? AND appointment_date = ?
          )
        "#,
        )
        .bind(date)
        .bind(user_id)
        .bind(doctor_id)
        .bind(user_id)
        .bind(doctor_id)
        .bind(date)
        .execute(pool)
        .await?;
    }

    for (user_id, doctor_id, pharmacy_id, date) in PRESCRIPTIONS {
        sqlx::query(
            r#"
        INSERT INTO prescriptions (user_id, doctor_id, pharmacy_id, prescription_date)
        SELECT u.user_id, d.doctor_id, p.pharmacy_id, ?
        FROM users u, doctors d, pharmacies p
        WHERE u.user_id = ? AND d.doctor_id = ? AND p.pharmacy_id = ?
          AND NOT EXISTS (
            SELECT 1 FROM prescriptions
            WHERE user_id = ? AND doctor_id = ? AND pharmacy_id = ? AND prescription_date = ?
          )
        "#,
        )
        .bind(date)
        .bind(user_id)
        .bind(doctor_id)
        .bind(pharmacy_id)
        .bind(user_id)
        .bind(doctor_id)
        .bind(pharmacy_id)
        .bind(date)
        .execute(pool)
        .await?;
    }

    info!("seed data applied");
    Ok(())
}
