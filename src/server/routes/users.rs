use crate::db::models::DbUser;
use crate::error::CarelogError;
use crate::server::router::CarelogState;
use crate::server::views;
use axum::{
    Router,
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::get,
};
use carelog_schema::UserForm;

pub fn router() -> Router<CarelogState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/add_user", get(add_user_form).post(add_user))
        .route("/edit_user/{id}", get(edit_user_form).post(edit_user))
        .route("/delete_user/{id}", get(delete_user))
}

async fn list_users(State(state): State<CarelogState>) -> Result<Html<String>, CarelogError> {
    let users = state.store.list_users().await?;

    let rows: String = users
        .iter()
        .map(|u| {
            format!(
                "<tr><td>{id}</td><td>{name}</td><td>{phone}</td><td>{email}</td>\
                 <td><a href=\"/edit_user/{id}\">edit</a> <a href=\"/delete_user/{id}\">delete</a></td></tr>\n",
                id = u.user_id,
                name = views::escape(&u.name),
                phone = views::opt(u.phone_number.as_deref()),
                email = views::opt(u.email.as_deref()),
            )
        })
        .collect();

    let body = format!(
        "<p><a href=\"/add_user\">Add patient</a></p>\n\
         <table>\n<tr><th>Id</th><th>Name</th><th>Phone</th><th>Email</th><th></th></tr>\n{rows}</table>"
    );
    Ok(views::page("Patients", &body))
}

fn user_form(action: &str, user: Option<&DbUser>) -> String {
    let name = user.map(|u| views::escape(&u.name)).unwrap_or_default();
    let phone = views::opt(user.and_then(|u| u.phone_number.as_deref()));
    let email = views::opt(user.and_then(|u| u.email.as_deref()));

    format!(
        r#"<form class="record" method="post" action="{action}">
<label>Name <input name="name" value="{name}" required></label>
<label>Phone <input name="phone_number" value="{phone}"></label>
<label>Email <input name="email" value="{email}"></label>
<button type="submit">Save</button>
</form>"#
    )
}

async fn add_user_form() -> Html<String> {
    views::page("Add Patient", &user_form("/add_user", None))
}

async fn add_user(
    State(state): State<CarelogState>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, CarelogError> {
    state.store.insert_user(form).await?;
    Ok(Redirect::to("/users"))
}

async fn edit_user_form(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, CarelogError> {
    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or(CarelogError::NotFound { entity: "user", id })?;
    Ok(views::page(
        "Edit Patient",
        &user_form(&format!("/edit_user/{id}"), Some(&user)),
    ))
}

async fn edit_user(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, CarelogError> {
    if state.store.update_user(id, form).await? == 0 {
        return Err(CarelogError::NotFound { entity: "user", id });
    }
    Ok(Redirect::to("/users"))
}

async fn delete_user(
    State(state): State<CarelogState>,
    Path(id): Path<i64>,
) -> Result<Redirect, CarelogError> {
    // Absent id deletes nothing; still lands on the list.
    state.store.delete_user(id).await?;
    Ok(Redirect::to("/users"))
}
