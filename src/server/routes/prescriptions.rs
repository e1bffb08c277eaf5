use crate::db::models::{DbDoctorDetail, DbPharmacy, DbPrescription, DbUser};
use crate::error::CarelogError;
use crate::server::router::CarelogState;
use crate::server::views;
use axum::{
    Router,
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::get,
};
use carelog_schema::PrescriptionForm;

pub fn router() -> Router<CarelogState> {
    Router::new()
        .route("/prescriptions", get(list_prescriptions))
        .route(
            "/add_prescription",
            get(add_prescription_form).post(add_prescription),
        )
        .route(
            "/edit_prescription/{id}",
            get(edit_prescription_form).post(edit_prescription),
        )
        .route("/delete_prescription/{id}", get(delete_prescription))
}

async fn list_prescriptions(
    State(state): State<CarelogState>,
) -> Result<Html<String>, CarelogError> {
    let prescriptions = state.store.list_prescriptions().await?;

    let rows: String = prescriptions
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{id}</td><td>{user}</td><td>{doctor}</td><td>{pharmacy}</td><td>{date}</td>\
                 <td><a href=\"/edit_prescription/{id}\">edit</a> <a href=\"/delete_prescription/{id}\">delete</a></td></tr>\n",
                id = p.prescription_id,
                user = views::opt(p.user_name.as_deref()),
                doctor = views::opt(p.doctor_name.as_deref()),
                pharmacy = views::opt(p.pharmacy_name.as_deref()),
                date = p.prescription_date,
            )
        })
        .collect();

    let body = format!(
        "<p><a href=\"/add_prescription\">Add prescription</a></p>\n\
         <table>\n<tr><th>Id</th><th>Patient</th><th>Doctor</th><th>Pharmacy</th><th>Date</th><th></th></tr>\n{rows}</table>"
    );
    Ok(views::page("Prescriptions", &body))
}

fn prescription_form(
    action: &str,
    prescription: Option<&DbPrescription>,
    users: &[DbUser],
    doctors: &[DbDoctorDetail],
    pharmacies: &[DbPharmacy],
) -> String {
    let user_options: Vec<(i64, String)> =
        users.iter().map(|u| (u.user_id, u.name.clone())).collect();
    let doctor_options: Vec<(i64, String)> = doctors
        .iter()
        .map(|d| (d.doctor_id, d.name.clone()))
        .collect();
    let pharmacy_options: Vec<(i64, String)> = pharmacies
        .iter()
        .map(|p| (p.pharmacy_id, p.name.clone()))
        .collect();

    let user_select = views::select_options(&user_options, prescription.map(|p| p.user_id));
    let doctor_select = views::select_options(&doctor_options, prescription.map(|p| p.doctor_id));
    let pharmacy_select =
        views::select_options(&pharmacy_options, prescription.map(|p| p.pharmacy_id));
    let date = prescription
        .map(|p| p.prescription_date.to_string())
        .unwrap_or_default();

    format!(
        r#"<form class="record" method="post" action="{action}">
<label>Patient <select name="user_id" required>
{user_select}</select></label>
<label>Doctor <select name="doctor_id" required>
{doctor_select}</select></label>
<label>Pharmacy <select name="pharmacy_id" required>
{pharmacy_select}</select></label>
<label>Date <input name="prescription_date" type="date" value="{date}" required></label>
<button type="submit">Save</button>
</form>"#
    )
}

async fn add_prescription_form(
    State(state): State<CarelogState>,
) -> Result<Html<String>, CarelogError> {
    let users = state.store.list_users().await?;
    let doctors = state.store.list_doctors().await?;
    let pharmacies = state.store.list_pharmacies().await?;
    Ok(views::page(
        "Add Prescription",
        &prescription_form("/add_prescription", None, &users, &doctors, &pharmacies),
    ))
}

async fn add_prescription(
    State(state): State<CarelogState>,
    Form(form): Form<PrescriptionForm>,
) -> Result<Redirect, CarelogError> {
    state.store.insert_prescription(form).await?;
    Ok(Redirect::to("/prescriptions"))
}

async fn edit_prescription_form(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, CarelogError> {
    let prescription =
        state
            .store
            .get_prescription(id)
            .await?
            .ok_or(CarelogError::NotFound {
                entity: "prescription",
                id,
            })?;
    let users = state.store.list_users().await?;
    let doctors = state.store.list_doctors().await?;
    let pharmacies = state.store.list_pharmacies().await?;
    Ok(views::page(
        "Edit Prescription",
        &prescription_form(
            &format!("/edit_prescription/{id}"),
            Some(&prescription),
            &users,
            &doctors,
            &pharmacies,
        ),
    ))
}

async fn edit_prescription(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
    Form(form): Form<PrescriptionForm>,
) -> Result<Redirect, CarelogError> {
    if state.store.update_prescription(id, form).await? == 0 {
        return Err(CarelogError::NotFound {
            entity: "prescription",
            id,
        });
    }
    Ok(Redirect::to("/prescriptions"))
}

async fn delete_prescription(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Redirect, CarelogError> {
    state.store.delete_prescription(id).await?;
    Ok(Redirect::to("/prescriptions"))
}
