// src/presentation/http/controllers/articles.rs
use super::PageParams;
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::FlashMessage,
    error::ApplicationError,
    forms::{FormErrors, article::ArticleForm},
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::RequestContext,
    responses::{login_redirect, redirect_with_flash, render},
    state::HttpState,
    views::articles::{self as view, FormStyle},
};
use axum::{
    Extension, Form,
    extract::{OriginalUri, Path, Query},
    http::Uri,
    response::Response,
};
use serde::Deserialize;

const CREATE_PATH: &str = "/article/create/";
const CREATE_FORM_PATH: &str = "/article/create/form/";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

impl From<ArticleInput> for ArticleForm {
    fn from(input: ArticleInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
            image: input.image,
        }
    }
}

fn detail_path(slug: &str) -> String {
    format!("/index/{slug}")
}

pub async fn list(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Query(params): Query<PageParams>,
) -> HttpResult<Response> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: params.page })
        .await
        .into_http()?;

    render(&state, &ctx, |page| view::list(page, &articles)).await
}

pub async fn detail(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(&slug)
        .await
        .into_http()?;

    render(&state, &ctx, |page| view::detail(page, &article)).await
}

pub async fn create_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    OriginalUri(uri): OriginalUri,
) -> HttpResult<Response> {
    new_article_page(&state, &ctx, &uri, FormStyle::Plain, CREATE_PATH).await
}

pub async fn create_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    OriginalUri(uri): OriginalUri,
    Form(input): Form<ArticleInput>,
) -> HttpResult<Response> {
    submit_new_article(&state, &ctx, &uri, input.into(), FormStyle::Plain, CREATE_PATH).await
}

pub async fn create_form_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    OriginalUri(uri): OriginalUri,
) -> HttpResult<Response> {
    new_article_page(&state, &ctx, &uri, FormStyle::Hinted, CREATE_FORM_PATH).await
}

pub async fn create_form_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    OriginalUri(uri): OriginalUri,
    Form(input): Form<ArticleInput>,
) -> HttpResult<Response> {
    submit_new_article(
        &state,
        &ctx,
        &uri,
        input.into(),
        FormStyle::Hinted,
        CREATE_FORM_PATH,
    )
    .await
}

async fn new_article_page(
    state: &HttpState,
    ctx: &RequestContext,
    uri: &Uri,
    style: FormStyle,
    action: &str,
) -> HttpResult<Response> {
    if ctx.user().is_none() {
        return login_redirect(state, ctx, uri).await;
    }
    let blank = ArticleForm::default();
    let errors = FormErrors::new();
    render(state, ctx, |page| {
        view::form(page, "New article", action, &blank, &errors, style)
    })
    .await
}

async fn submit_new_article(
    state: &HttpState,
    ctx: &RequestContext,
    uri: &Uri,
    form: ArticleForm,
    style: FormStyle,
    action: &str,
) -> HttpResult<Response> {
    let Some(user) = ctx.user() else {
        return login_redirect(state, ctx, uri).await;
    };

    let command = CreateArticleCommand { form: form.clone() };
    match state.services.article_commands.create_article(user, command).await {
        Ok(article) => {
            redirect_with_flash(
                state,
                ctx,
                FlashMessage::success(format!("Article \"{}\" was created.", article.title)),
                &detail_path(&article.slug),
            )
            .await
        }
        Err(ApplicationError::Form(errors)) => {
            render(state, ctx, |page| {
                view::form(page, "New article", action, &form, &errors, style)
            })
            .await
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn change_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    match state
        .services
        .article_queries
        .get_editable_article(ctx.user(), &slug)
        .await
    {
        Ok(article) => {
            let values = ArticleForm {
                title: article.title.clone(),
                content: article.content.clone(),
                image: article.image.clone(),
            };
            let errors = FormErrors::new();
            let action = format!("/article/change/{}", article.slug);
            render(&state, &ctx, |page| {
                view::form(page, "Edit article", &action, &values, &errors, FormStyle::Plain)
            })
            .await
        }
        Err(ApplicationError::Forbidden(message)) => {
            redirect_with_flash(&state, &ctx, FlashMessage::warning(message), &detail_path(&slug))
                .await
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn change_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
    Form(input): Form<ArticleInput>,
) -> HttpResult<Response> {
    let form: ArticleForm = input.into();
    let command = UpdateArticleCommand {
        slug: slug.clone(),
        form: form.clone(),
    };

    match state
        .services
        .article_commands
        .update_article(ctx.user(), command)
        .await
    {
        Ok(article) => {
            redirect_with_flash(
                &state,
                &ctx,
                FlashMessage::success("Article updated."),
                &detail_path(&article.slug),
            )
            .await
        }
        Err(ApplicationError::Forbidden(message)) => {
            redirect_with_flash(&state, &ctx, FlashMessage::warning(message), &detail_path(&slug))
                .await
        }
        Err(ApplicationError::Form(errors)) => {
            let action = format!("/article/change/{slug}");
            render(&state, &ctx, |page| {
                view::form(page, "Edit article", &action, &form, &errors, FormStyle::Plain)
            })
            .await
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(&slug)
        .await
        .into_http()?;

    render(&state, &ctx, |page| view::delete_confirm(page, &article)).await
}

pub async fn delete_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let command = DeleteArticleCommand { slug: slug.clone() };
    match state
        .services
        .article_commands
        .delete_article(ctx.user(), command)
        .await
    {
        Ok(article) => {
            redirect_with_flash(
                &state,
                &ctx,
                FlashMessage::success(format!("Article \"{}\" was deleted.", article.title)),
                "/",
            )
            .await
        }
        Err(ApplicationError::Forbidden(message)) => {
            redirect_with_flash(&state, &ctx, FlashMessage::warning(message), &detail_path(&slug))
                .await
        }
        Err(err) => Err(err.into()),
    }
}
