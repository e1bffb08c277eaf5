pub mod appointments;
pub mod doctors;
pub mod pharmacies;
pub mod prescriptions;
pub mod specializations;
pub mod users;
