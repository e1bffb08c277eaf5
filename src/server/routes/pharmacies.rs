use crate::db::models::DbPharmacy;
use crate::error::CarelogError;
use crate::server::router::CarelogState;
use crate::server::views;
use axum::{
    Router,
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::get,
};
use carelog_schema::PharmacyForm;

pub fn router() -> Router<CarelogState> {
    Router::new()
        .route("/pharmacies", get(list_pharmacies))
        .route("/add_pharmacy", get(add_pharmacy_form).post(add_pharmacy))
        .route(
            "/edit_pharmacy/{id}",
            get(edit_pharmacy_form).post(edit_pharmacy),
        )
        .route("/delete_pharmacy/{id}", get(delete_pharmacy))
}

async fn list_pharmacies(State(state): State<CarelogState>) -> Result<Html<String>, CarelogError> {
    let pharmacies = state.store.list_pharmacies().await?;

    let rows: String = pharmacies
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{id}</td><td>{name}</td><td>{phone}</td><td>{location}</td>\
                 <td><a href=\"/edit_pharmacy/{id}\">edit</a> <a href=\"/delete_pharmacy/{id}\">delete</a></td></tr>\n",
                id = p.pharmacy_id,
                name = views::escape(&p.name),
                phone = views::opt(p.phone_number.as_deref()),
                location = views::opt(p.location.as_deref()),
            )
        })
        .collect();

    let body = format!(
        "<p><a href=\"/add_pharmacy\">Add pharmacy</a></p>\n\
         <table>\n<tr><th>Id</th><th>Name</th><th>Phone</th><th>Location</th><th></th></tr>\n{rows}</table>"
    );
    Ok(views::page("Pharmacies", &body))
}

fn pharmacy_form(action: &str, pharmacy: Option<&DbPharmacy>) -> String {
    let name = pharmacy.map(|p| views::escape(&p.name)).unwrap_or_default();
    let phone = views::opt(pharmacy.and_then(|p| p.phone_number.as_deref()));
    let location = views::opt(pharmacy.and_then(|p| p.location.as_deref()));

    format!(
        r#"<form class="record" method="post" action="{action}">
<label>Name <input name="name" value="{name}" required></label>
<label>Phone <input name="phone_number" value="{phone}"></label>
<label>Location <input name="location" value="{location}"></label>
<button type="submit">Save</button>
</form>"#
    )
}

async fn add_pharmacy_form() -> Html<String> {
    views::page("Add Pharmacy", &pharmacy_form("/add_pharmacy", None))
}

async fn add_pharmacy(
    State(state): State<CarelogState>,
    Form(form): Form<PharmacyForm>,
) -> Result<Redirect, CarelogError> {
    state.store.insert_pharmacy(form).await?;
    Ok(Redirect::to("/pharmacies"))
}

async fn edit_pharmacy_form(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, CarelogError> {
    let pharmacy = state
        .store
        .get_pharmacy(id)
        .await?
        .ok_or(CarelogError::NotFound {
            entity: "pharmacy",
            id,
        })?;
    Ok(views::page(
        "Edit Pharmacy",
        &pharmacy_form(&format!("/edit_pharmacy/{id}"), Some(&pharmacy)),
    ))
}

async fn edit_pharmacy(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
    Form(form): Form<PharmacyForm>,
) -> Result<Redirect, CarelogError> {
    if state.store.update_pharmacy(id, form).await? == 0 {
        return Err(CarelogError::NotFound {
            entity: "pharmacy",
            id,
        });
    }
    Ok(Redirect::to("/pharmacies"))
}

async fn delete_pharmacy(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Redirect, CarelogError> {
    state.store.delete_pharmacy(id).await?;
    Ok(Redirect::to("/pharmacies"))
}
