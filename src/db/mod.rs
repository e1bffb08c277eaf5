//! Database module: row models, schema DDL, seed data, and the store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows (plus joined list views)
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `seed.rs`: fixed demo/reference rows, insert-if-absent
//! - `store.rs`: the typed CRUD surface over the pool

pub mod models;
pub mod schema;
pub mod seed;
pub mod store;

pub use models::{
    DbAppointment, DbAppointmentDetail, DbDoctor, DbDoctorDetail, DbPharmacy, DbPrescription,
    DbPrescriptionDetail, DbSpecialization, DbUser,
};
pub use schema::SQLITE_INIT;
pub use store::Store;
