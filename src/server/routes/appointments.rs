use crate::db::models::{DbAppointment, DbDoctorDetail, DbUser};
use crate::error::CarelogError;
use crate::server::router::CarelogState;
use crate::server::views;
use axum::{
    Router,
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::get,
};
use carelog_schema::AppointmentForm;

pub fn router() -> Router<CarelogState> {
    Router::new()
        .route("/appointments", get(list_appointments))
        .route(
            "/add_appointment",
            get(add_appointment_form).post(add_appointment),
        )
        .route(
            "/edit_appointment/{id}",
            get(edit_appointment_form).post(edit_appointment),
        )
        .route("/delete_appointment/{id}", get(delete_appointment))
}

async fn list_appointments(
    State(state): State<CarelogState>,
) -> Result<Html<String>, CarelogError> {
    let appointments = state.store.list_appointments().await?;

    let rows: String = appointments
        .iter()
        .map(|a| {
            format!(
                "<tr><td>{id}</td><td>{user}</td><td>{doctor}</td><td>{date}</td>\
                 <td><a href=\"/edit_appointment/{id}\">edit</a> <a href=\"/delete_appointment/{id}\">delete</a></td></tr>\n",
                id = a.appointment_id,
                user = views::opt(a.user_name.as_deref()),
                doctor = views::opt(a.doctor_name.as_deref()),
                date = a.appointment_date,
            )
        })
        .collect();

    let body = format!(
        "<p><a href=\"/add_appointment\">Add appointment</a></p>\n\
         <table>\n<tr><th>Id</th><th>Patient</th><th>Doctor</th><th>Date</th><th></th></tr>\n{rows}</table>"
    );
    Ok(views::page("Appointments", &body))
}

fn appointment_form(
    action: &str,
    appointment: Option<&DbAppointment>,
    users: &[DbUser],
    doctors: &[DbDoctorDetail],
) -> String {
    let user_options: Vec<(i64, String)> =
        users.iter().map(|u| (u.user_id, u.name.clone())).collect();
    let doctor_options: Vec<(i64, String)> = doctors
        .iter()
        .map(|d| (d.doctor_id, d.name.clone()))
        .collect();

    let user_select =
        views::select_options(&user_options, appointment.map(|a| a.user_id));
    let doctor_select =
        views::select_options(&doctor_options, appointment.map(|a| a.doctor_id));
    let date = appointment
        .map(|a| a.appointment_date.to_string())
        .unwrap_or_default();

    format!(
        r#"<form class="record" method="post" action="{action}">
<label>Patient <select name="user_id" required>
{user_select}</select></label>
<label>Doctor <select name="doctor_id" required>
{doctor_select}</select></label>
<label>Date <input name="appointment_date" type="date" value="{date}" required></label>
<button type="submit">Save</button>
</form>"#
    )
}

async fn add_appointment_form(
    State(state): State<CarelogState>,
) -> Result<Html<String>, CarelogError> {
    let users = state.store.list_users().await?;
    let doctors = state.store.list_doctors().await?;
    Ok(views::page(
        "Add Appointment",
        &appointment_form("/add_appointment", None, &users, &doctors),
    ))
}

async fn add_appointment(
    State(state): State<CarelogState>,
    Form(form): Form<AppointmentForm>,
) -> Result<Redirect, CarelogError> {
    state.store.insert_appointment(form).await?;
    Ok(Redirect::to("/appointments"))
}

async fn edit_appointment_form(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, CarelogError> {
    let appointment =
        state
            .store
            .get_appointment(id)
            .await?
            .ok_or(CarelogError::NotFound {
                entity: "appointment",
                id,
            })?;
    let users = state.store.list_users().await?;
    let doctors = state.store.list_doctors().await?;
    Ok(views::page(
        "Edit Appointment",
        &appointment_form(
            &format!("/edit_appointment/{id}"),
            Some(&appointment),
            &users,
            &doctors,
        ),
    ))
}

async fn edit_appointment(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
    Form(form): Form<AppointmentForm>,
) -> Result<Redirect, CarelogError> {
    if state.store.update_appointment(id, form).await? == 0 {
        return Err(CarelogError::NotFound {
            entity: "appointment",
            id,
        });
    }
    Ok(Redirect::to("/appointments"))
}

async fn delete_appointment(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Redirect, CarelogError> {
    state.store.delete_appointment(id).await?;
    Ok(Redirect::to("/appointments"))
}
