// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{AuthenticatedUser, FlashMessage},
    error::ApplicationError,
    forms::{
        FormErrors,
        auth::{LoginForm, RegistrationForm},
    },
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::RequestContext,
    middleware::session::set_session_cookie,
    responses::{LOGIN_PATH, local_next, redirect_with_flash, render},
    state::HttpState,
    views::auth as view,
};
use axum::{
    Extension, Form,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

const LOGIN_DIRECT_PATH: &str = "/auth/login/direct/";
pub const ALREADY_LOGGED_IN: &str = "You should log out first.";
pub const LOGGED_OUT: &str = "Successfully logged out";

#[derive(Debug, Default, Deserialize)]
pub struct NextParams {
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterInput {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

impl From<RegisterInput> for RegistrationForm {
    fn from(input: RegisterInput) -> Self {
        Self {
            username: input.username,
            password1: input.password1,
            password2: input.password2,
        }
    }
}

async fn already_logged_in(state: &HttpState, ctx: &RequestContext) -> HttpResult<Response> {
    redirect_with_flash(state, ctx, FlashMessage::warning(ALREADY_LOGGED_IN), "/").await
}

/// Binds `user` to a rotated session and redirects to `to` with the new cookie.
async fn start_session(
    state: &HttpState,
    ctx: &RequestContext,
    user: &AuthenticatedUser,
    to: &str,
) -> HttpResult<Response> {
    let sessions = &state.services.sessions;
    let rotated = sessions.login(ctx.session_id, user).await.into_http()?;
    sessions
        .flash(
            rotated,
            FlashMessage::success(format!("Welcome, {}!", user.username)),
        )
        .await
        .into_http()?;

    let mut response = Redirect::to(to).into_response();
    set_session_cookie(&mut response, state, rotated);
    Ok(response)
}

pub async fn login_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Query(params): Query<NextParams>,
) -> HttpResult<Response> {
    if ctx.user().is_some() {
        return already_logged_in(&state, &ctx).await;
    }
    let next = local_next(params.next.as_deref());
    let errors = FormErrors::new();
    render(&state, &ctx, |page| {
        view::login(page, LOGIN_PATH, "", next, &errors)
    })
    .await
}

/// `next` comes from the hidden form field, or from the query string when the
/// form was posted without one.
pub async fn login_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Query(params): Query<NextParams>,
    Form(mut input): Form<LoginInput>,
) -> HttpResult<Response> {
    if ctx.user().is_some() {
        return already_logged_in(&state, &ctx).await;
    }
    if input.next.as_deref().is_none_or(str::is_empty) {
        input.next = params.next;
    }

    let command = LoginUserCommand {
        form: LoginForm {
            username: input.username.clone(),
            password: input.password,
        },
    };
    match state.services.user_commands.login(command).await {
        Ok(user) => {
            let to = local_next(input.next.as_deref()).unwrap_or("/");
            start_session(&state, &ctx, &user, to).await
        }
        Err(ApplicationError::Form(errors)) => {
            let next = local_next(input.next.as_deref());
            render(&state, &ctx, |page| {
                view::login(page, LOGIN_PATH, &input.username, next, &errors)
            })
            .await
        }
        Err(err) => Err(err.into()),
    }
}

/// Legacy endpoint: bad credentials are a 401, not a re-rendered form.
pub async fn login_direct(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Form(input): Form<LoginInput>,
) -> HttpResult<Response> {
    if ctx.user().is_some() {
        return already_logged_in(&state, &ctx).await;
    }

    let user = state
        .services
        .user_commands
        .verify_credentials(&input.username, &input.password)
        .await
        .into_http()?;
    start_session(&state, &ctx, &user, "/").await
}

/// The direct login form posts to the legacy endpoint.
pub async fn login_direct_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
) -> HttpResult<Response> {
    if ctx.user().is_some() {
        return already_logged_in(&state, &ctx).await;
    }
    let errors = FormErrors::new();
    render(&state, &ctx, |page| {
        view::login(page, LOGIN_DIRECT_PATH, "", None, &errors)
    })
    .await
}

pub async fn logout_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
) -> HttpResult<Response> {
    if ctx.user().is_none() {
        return Ok(Redirect::to("/").into_response());
    }
    render(&state, &ctx, view::logout_confirm).await
}

pub async fn logout_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
) -> HttpResult<Response> {
    let Some(user) = ctx.user() else {
        return Ok(Redirect::to("/").into_response());
    };

    let flushed = state
        .services
        .sessions
        .logout(ctx.session_id, FlashMessage::error(LOGGED_OUT))
        .await
        .into_http()?;
    tracing::info!(user_id = i64::from(user.id), "user logged out");

    let mut response = Redirect::to(LOGIN_PATH).into_response();
    set_session_cookie(&mut response, &state, flushed);
    Ok(response)
}

pub async fn register_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
) -> HttpResult<Response> {
    if ctx.user().is_some() {
        return already_logged_in(&state, &ctx).await;
    }
    let blank = RegistrationForm::default();
    let errors = FormErrors::new();
    render(&state, &ctx, |page| view::register(page, &blank, &errors)).await
}

pub async fn register_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Form(input): Form<RegisterInput>,
) -> HttpResult<Response> {
    if ctx.user().is_some() {
        return already_logged_in(&state, &ctx).await;
    }

    let form: RegistrationForm = input.into();
    let command = RegisterUserCommand { form: form.clone() };
    match state.services.user_commands.register(command).await {
        Ok(user) => {
            redirect_with_flash(
                &state,
                &ctx,
                FlashMessage::success(format!(
                    "Account {} created. You can log in now.",
                    user.username
                )),
                LOGIN_PATH,
            )
            .await
        }
        Err(ApplicationError::Form(errors)) => {
            render(&state, &ctx, |page| view::register(page, &form, &errors)).await
        }
        Err(err) => Err(err.into()),
    }
}
