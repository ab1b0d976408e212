//! Staff directory page handlers.
//!
//! ```text
//! GET  /                    list
//! GET  /addnew              create form
//! POST /add                 name=Ann&position=Engineer&office=NY
//! GET  /edit/{user_id}      edit form
//! POST /update/{user_id}    name=Ann&position=Engineer&office=SF
//! GET  /delete/{user_id}
//! ```
//!
//! Mutations answer `303 See Other` pointing at `/` so a browser refresh does
//! not resubmit the form.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{Error, UserDetails, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Form body shared by `POST /add` and `POST /update/{user_id}`.
///
/// Every field is required; empty strings are accepted.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub position: String,
    pub office: String,
}

impl From<UserForm> for UserDetails {
    fn from(value: UserForm) -> Self {
        UserDetails::new(value.name, value.position, value.office)
    }
}

/// Form extractor configuration rejecting malformed bodies with a 400 page.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use directory::inbound::http::users::{add_user, form_config};
///
/// let app = App::new().app_data(form_config()).service(add_user);
/// ```
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::invalid_request(format!("invalid form submission: {err}")).into()
    })
}

fn html(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// List every user, newest first.
#[get("/")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.directory.list_users().await?;
    Ok(html(state.views.list(&users)))
}

/// Render the empty create form.
#[get("/addnew")]
pub async fn add_form(state: web::Data<HttpState>) -> HttpResponse {
    html(state.views.create_form())
}

/// Create a user from the submitted form.
#[post("/add")]
pub async fn add_user(
    state: web::Data<HttpState>,
    form: web::Form<UserForm>,
) -> ApiResult<HttpResponse> {
    state.directory.add_user(form.into_inner().into()).await?;
    Ok(redirect_home())
}

/// Render the edit form, or the absent-record notice.
#[get("/edit/{user_id}")]
pub async fn edit_form(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
) -> ApiResult<HttpResponse> {
    let user = state.directory.find_user(path.into_inner()).await?;
    Ok(html(state.views.edit_form(user.as_ref())))
}

/// Overwrite a user's fields. Unknown ids are a no-op.
#[post("/update/{user_id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
    form: web::Form<UserForm>,
) -> ApiResult<HttpResponse> {
    state
        .directory
        .update_user(path.into_inner(), form.into_inner().into())
        .await?;
    Ok(redirect_home())
}

/// Remove a user. Unknown ids are a no-op.
#[get("/delete/{user_id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
) -> ApiResult<HttpResponse> {
    state.directory.delete_user(path.into_inner()).await?;
    Ok(redirect_home())
}

/// Register every directory route on a service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .service(list_users)
        .service(add_form)
        .service(add_user)
        .service(edit_form)
        .service(update_user)
        .service(delete_user);
}
