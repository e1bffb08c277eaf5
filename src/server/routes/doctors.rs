use crate::db::models::{DbDoctor, DbSpecialization};
use crate::error::CarelogError;
use crate::server::router::CarelogState;
use crate::server::views;
use axum::{
    Router,
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::get,
};
use carelog_schema::DoctorForm;

pub fn router() -> Router<CarelogState> {
    Router::new()
        .route("/doctors", get(list_doctors))
        .route("/add_doctor", get(add_doctor_form).post(add_doctor))
        .route("/edit_doctor/{id}", get(edit_doctor_form).post(edit_doctor))
        .route("/delete_doctor/{id}", get(delete_doctor))
}

async fn list_doctors(State(state): State<CarelogState>) -> Result<Html<String>, CarelogError> {
    let doctors = state.store.list_doctors().await?;

    let rows: String = doctors
        .iter()
        .map(|d| {
            format!(
                "<tr><td>{id}</td><td>{name}</td><td>{email}</td><td>{specialization}</td>\
                 <td><a href=\"/edit_doctor/{id}\">edit</a> <a href=\"/delete_doctor/{id}\">delete</a></td></tr>\n",
                id = d.doctor_id,
                name = views::escape(&d.name),
                email = views::opt(d.email.as_deref()),
                specialization = views::opt(d.specialization_name.as_deref()),
            )
        })
        .collect();

    let body = format!(
        "<p><a href=\"/add_doctor\">Add doctor</a></p>\n\
         <table>\n<tr><th>Id</th><th>Name</th><th>Email</th><th>Specialization</th><th></th></tr>\n{rows}</table>"
    );
    Ok(views::page("Doctors", &body))
}

fn doctor_form(
    action: &str,
    doctor: Option<&DbDoctor>,
    specializations: &[DbSpecialization],
) -> String {
    let name = doctor.map(|d| views::escape(&d.name)).unwrap_or_default();
    let email = views::opt(doctor.and_then(|d| d.email.as_deref()));
    let options: Vec<(i64, String)> = specializations
        .iter()
        .map(|s| (s.specialization_id, s.specialization_name.clone()))
        .collect();
    let select = views::select_options(&options, doctor.and_then(|d| d.specialization_id));

    format!(
        r#"<form class="record" method="post" action="{action}">
<label>Name <input name="name" value="{name}" required></label>
<label>Email <input name="email" value="{email}"></label>
<label>Specialization <select name="specialization_id">
{select}</select></label>
<button type="submit">Save</button>
</form>"#
    )
}

async fn add_doctor_form(
    State(state): State<CarelogState>,
) -> Result<Html<String>, CarelogError> {
    let specializations = state.store.list_specializations().await?;
    Ok(views::page(
        "Add Doctor",
        &doctor_form("/add_doctor", None, &specializations),
    ))
}

async fn add_doctor(
    State(state): State<CarelogState>,
    Form(form): Form<DoctorForm>,
) -> Result<Redirect, CarelogError> {
    state.store.insert_doctor(form).await?;
    Ok(Redirect::to("/doctors"))
}

async fn edit_doctor_form(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, CarelogError> {
    let doctor = state
        .store
        .get_doctor(id)
        .await?
        .ok_or(CarelogError::NotFound {
            entity: "doctor",
            id,
        })?;
    let specializations = state.store.list_specializations().await?;
    Ok(views::page(
        "Edit Doctor",
        &doctor_form(&format!("/edit_doctor/{id}"), Some(&doctor), &specializations),
    ))
}

async fn edit_doctor(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
    Form(form): Form<DoctorForm>,
) -> Result<Redirect, CarelogError> {
    if state.store.update_doctor(id, form).await? == 0 {
        return Err(CarelogError::NotFound {
            entity: "doctor",
            id,
        });
    }
    Ok(Redirect::to("/doctors"))
}

async fn delete_doctor(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Redirect, CarelogError> {
    state.store.delete_doctor(id).await?;
    Ok(Redirect::to("/doctors"))
}
