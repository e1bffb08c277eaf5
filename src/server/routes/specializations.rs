//! Minimal admin surface for the specialization reference data: list,
//! add, delete. No edit; the name is the natural key, and doctors keep
//! their row with a cleared reference when a specialization goes away.

use crate::error::CarelogError;
use crate::server::router::CarelogState;
use crate::server::views;
use axum::{
    Router,
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::get,
};
use carelog_schema::SpecializationForm;

pub fn router() -> Router<CarelogState> {
    Router::new()
        .route("/specializations", get(list_specializations))
        .route(
            "/add_specialization",
            get(add_specialization_form).post(add_specialization),
        )
        .route("/delete_specialization/{id}", get(delete_specialization))
}

async fn list_specializations(
    State(state): State<CarelogState>,
) -> Result<Html<String>, CarelogError> {
    let specializations = state.store.list_specializations().await?;

    let rows: String = specializations
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{id}</td><td>{name}</td>\
                 <td><a href=\"/delete_specialization/{id}\">delete</a></td></tr>\n",
                id = s.specialization_id,
                name = views::escape(&s.specialization_name),
            )
        })
        .collect();

    let body = format!(
        "<p><a href=\"/add_specialization\">Add specialization</a></p>\n\
         <table>\n<tr><th>Id</th><th>Name</th><th></th></tr>\n{rows}</table>"
    );
    Ok(views::page("Specializations", &body))
}

async fn add_specialization_form() -> Html<String> {
    let body = r#"<form class="record" method="post" action="/add_specialization">
<label>Name <input name="specialization_name" required></label>
<button type="submit">Save</button>
</form>"#;
    views::page("Add Specialization", body)
}

async fn add_specialization(
    State(state): State<CarelogState>,
    Form(form): Form<SpecializationForm>,
) -> Result<Redirect, CarelogError> {
    state.store.insert_specialization(form).await?;
    Ok(Redirect::to("/specializations"))
}

async fn delete_specialization(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Redirect, CarelogError> {
    state.store.delete_specialization(id).await?;
    Ok(Redirect::to("/specializations"))
}
