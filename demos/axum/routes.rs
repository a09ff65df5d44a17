use std::sync::Arc;

use axum::{Extension, response::IntoResponse};
use bunner_request_rs::RequestContext;

pub async fn whoami(Extension(ctx): Extension<Arc<RequestContext>>) -> impl IntoResponse {
    let url = ctx.absolute_url().unwrap_or("<unknown>");
    let language = ctx
        .accept_languages()
        .preferred()
        .map(|entry| entry.name())
        .unwrap_or("none");

    format!(
        "method: {}\nurl: {}\nsecure: {}\npreferred language: {}\n",
        ctx.method(),
        url,
        ctx.is_secure_channel(),
        language
    )
}
