pub mod forms;

pub use forms::{
    AppointmentForm, DoctorForm, PharmacyForm, PrescriptionForm, SpecializationForm, UserForm,
};
