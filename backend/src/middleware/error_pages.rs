//! Error page rendering with the app's configured views.
//!
//! `ResponseError` has no access to application data, so domain errors first
//! render with default views. This middleware replaces that body using the
//! [`Views`](crate::inbound::http::views::Views) held in [`HttpState`], so
//! error pages share the title and stylesheet of every other page.

use std::task::{Context, Poll};

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, web};
use futures_util::future::{LocalBoxFuture, Ready, ready};

use crate::domain::Error as DomainError;
use crate::inbound::http::error::render_error_page;
use crate::inbound::http::state::HttpState;

/// Middleware factory re-rendering domain error pages.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use directory::middleware::ErrorPages;
///
/// let app = App::new().wrap(ErrorPages);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorPages;

impl<S, B> Transform<S, ServiceRequest> for ErrorPages
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorPagesMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorPagesMiddleware { service }))
    }
}

/// Service wrapper produced by [`ErrorPages`].
pub struct ErrorPagesMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorPagesMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        Box::pin(async move { Ok(rerender(fut.await?)) })
    }
}

fn rerender<B: MessageBody + 'static>(res: ServiceResponse<B>) -> ServiceResponse<BoxBody> {
    let domain_error = res
        .response()
        .error()
        .and_then(|error| error.as_error::<DomainError>());
    let state = res.request().app_data::<web::Data<HttpState>>();
    let page = match (domain_error, state) {
        (Some(error), Some(state)) => Some(render_error_page(&state.views, res.status(), error)),
        _ => None,
    };
    let Some(page) = page else {
        return res.map_into_boxed_body();
    };

    let (req, response) = res.into_parts();
    let response = response.set_body(page).map_into_boxed_body();
    ServiceResponse::new(req, response)
}
