//! SQL DDL for initializing the database schema.
//! SQLite-first design; every statement is idempotent.

/// SQLite schema:
/// - `users` table (patients, unique email when present)
/// - `specializations` table (reference data for doctors)
/// - `doctors` table (optional specialization, cleared when it goes away)
/// - `pharmacies` table
/// - `appointments` table (user x doctor, removed with either parent)
/// - `prescriptions` table (user x doctor x pharmacy, removed with any parent)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Patients
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    phone_number TEXT,
    email TEXT UNIQUE
);

-- ---------------------------------------------------------------------------
-- Specializations (reference data)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS specializations (
    specialization_id INTEGER PRIMARY KEY AUTOINCREMENT,
    specialization_name TEXT UNIQUE NOT NULL
);

-- ---------------------------------------------------------------------------
-- Doctors
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS doctors (
    doctor_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT UNIQUE,
    specialization_id INTEGER,
    FOREIGN KEY (specialization_id) REFERENCES specializations(specialization_id) ON DELETE SET NULL
);

-- ---------------------------------------------------------------------------
-- Pharmacies
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS pharmacies (
    pharmacy_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    phone_number TEXT,
    location TEXT
);

-- ---------------------------------------------------------------------------
-- Appointments (user x doctor)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS appointments (
    appointment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    doctor_id INTEGER,
    appointment_date DATE,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE,
    FOREIGN KEY (doctor_id) REFERENCES doctors(doctor_id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_appointments_user ON appointments(user_id);

CREATE INDEX IF NOT EXISTS idx_appointments_doctor ON appointments(doctor_id);

-- ---------------------------------------------------------------------------
-- Prescriptions (user x doctor x pharmacy)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS prescriptions (
    prescription_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    doctor_id INTEGER,
    pharmacy_id INTEGER,
    prescription_date DATE,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE,
    FOREIGN KEY (doctor_id) REFERENCES doctors(doctor_id) ON DELETE CASCADE,
    FOREIGN KEY (pharmacy_id) REFERENCES pharmacies(pharmacy_id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_prescriptions_user ON prescriptions(user_id);

CREATE INDEX IF NOT EXISTS idx_prescriptions_doctor ON prescriptions(doctor_id);

CREATE INDEX IF NOT EXISTS idx_prescriptions_pharmacy ON prescriptions(pharmacy_id);
"#;
