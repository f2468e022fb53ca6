// src/presentation/http/controllers/recipes.rs
use crate::application::{
    commands::recipes::{CreateRecipeCommand, DeleteRecipeCommand, UpdateRecipeCommand},
    dto::{FlashMessage, Page, RecipeDto},
    error::ApplicationError,
    forms::{FormErrors, recipe::RecipeForm},
    queries::recipes::ListRecipesQuery,
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::RequestContext,
    responses::{login_redirect, redirect_with_flash, render},
    state::HttpState,
    views::recipes::{self as view, ListView},
};
use axum::{
    Extension, Form,
    extract::{OriginalUri, Path, Query},
    response::Response,
};
use serde::Deserialize;

const LIST_PATH: &str = "/recipe/";
const MY_LIST_PATH: &str = "/recipe/my/";
const CREATE_PATH: &str = "/recipe/create/";

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl ListParams {
    fn active_tag(&self) -> Option<&str> {
        self.tag
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    fn query(&self) -> ListRecipesQuery {
        ListRecipesQuery {
            tag: self.active_tag().map(str::to_owned),
            page: self.page.clone(),
        }
    }
}

/// Builds the form from raw urlencoded pairs; `tags` may repeat.
pub fn recipe_form_from_pairs(pairs: Vec<(String, String)>) -> RecipeForm {
    let mut form = RecipeForm::default();
    for (key, value) in pairs {
        match key.as_str() {
            "title" => form.title = value,
            "description" => form.description = value,
            "tags" => form.tags.push(value),
            _ => {}
        }
    }
    form
}

pub(super) fn detail_path(slug: &str) -> String {
    format!("/recipe/{slug}/")
}

pub async fn list(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Query(params): Query<ListParams>,
) -> HttpResult<Response> {
    let recipes = state
        .services
        .recipe_queries
        .list_recipes(params.query())
        .await
        .into_http()?;

    render_list(&state, &ctx, "Recipes", LIST_PATH, &recipes, params.active_tag()).await
}

pub async fn my_list(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
) -> HttpResult<Response> {
    let Some(user) = ctx.user() else {
        return login_redirect(&state, &ctx, &uri).await;
    };

    let recipes = state
        .services
        .recipe_queries
        .list_my_recipes(user, params.query())
        .await
        .into_http()?;

    render_list(&state, &ctx, "My recipes", MY_LIST_PATH, &recipes, params.active_tag()).await
}

async fn render_list(
    state: &HttpState,
    ctx: &RequestContext,
    heading: &str,
    path: &str,
    recipes: &Page<RecipeDto>,
    active_tag: Option<&str>,
) -> HttpResult<Response> {
    let tags = state.services.recipe_queries.list_tags().await.into_http()?;
    let list_view = ListView {
        heading,
        path,
        recipes,
        tags: &tags,
        active_tag,
    };
    render(state, ctx, |page| view::list(page, &list_view)).await
}

pub async fn detail(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let detail = state
        .services
        .recipe_queries
        .get_recipe_detail(ctx.user(), &slug)
        .await
        .into_http()?;

    render(&state, &ctx, |page| view::detail(page, &detail)).await
}

pub async fn create_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    OriginalUri(uri): OriginalUri,
) -> HttpResult<Response> {
    if ctx.user().is_none() {
        return login_redirect(&state, &ctx, &uri).await;
    }
    render_form(&state, &ctx, "New recipe", CREATE_PATH, &RecipeForm::default(), &FormErrors::new())
        .await
}

pub async fn create_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    OriginalUri(uri): OriginalUri,
    Form(pairs): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    let Some(user) = ctx.user() else {
        return login_redirect(&state, &ctx, &uri).await;
    };

    let form = recipe_form_from_pairs(pairs);
    let command = CreateRecipeCommand { form: form.clone() };
    match state.services.recipe_commands.create_recipe(user, command).await {
        Ok(recipe) => {
            redirect_with_flash(
                &state,
                &ctx,
                FlashMessage::success(format!("Recipe \"{}\" was created.", recipe.title)),
                &detail_path(&recipe.slug),
            )
            .await
        }
        Err(ApplicationError::Form(errors)) => {
            render_form(&state, &ctx, "New recipe", CREATE_PATH, &form, &errors).await
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn update_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    match state
        .services
        .recipe_queries
        .get_editable_recipe(ctx.user(), &slug)
        .await
    {
        Ok(recipe) => {
            let values = RecipeForm {
                title: recipe.title.clone(),
                description: recipe.description.clone(),
                tags: recipe.tags.iter().map(|tag| tag.id.to_string()).collect(),
            };
            let action = format!("/recipe/{}/update/", recipe.slug);
            render_form(&state, &ctx, "Edit recipe", &action, &values, &FormErrors::new()).await
        }
        Err(ApplicationError::Forbidden(message)) => {
            redirect_with_flash(&state, &ctx, FlashMessage::warning(message), &detail_path(&slug))
                .await
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn update_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    let form = recipe_form_from_pairs(pairs);
    let command = UpdateRecipeCommand {
        slug: slug.clone(),
        form: form.clone(),
    };

    match state
        .services
        .recipe_commands
        .update_recipe(ctx.user(), command)
        .await
    {
        Ok(recipe) => {
            redirect_with_flash(
                &state,
                &ctx,
                FlashMessage::success("Recipe updated."),
                &detail_path(&recipe.slug),
            )
            .await
        }
        Err(ApplicationError::Forbidden(message)) => {
            redirect_with_flash(&state, &ctx, FlashMessage::warning(message), &detail_path(&slug))
                .await
        }
        Err(ApplicationError::Form(errors)) => {
            let action = format!("/recipe/{slug}/update/");
            render_form(&state, &ctx, "Edit recipe", &action, &form, &errors).await
        }
        Err(err) => Err(err.into()),
    }
}

async fn render_form(
    state: &HttpState,
    ctx: &RequestContext,
    heading: &str,
    action: &str,
    values: &RecipeForm,
    errors: &FormErrors,
) -> HttpResult<Response> {
    let tags = state.services.recipe_queries.list_tags().await.into_http()?;
    render(state, ctx, |page| {
        view::form(page, heading, action, values, &tags, errors)
    })
    .await
}

pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let recipe = state
        .services
        .recipe_queries
        .get_recipe(&slug)
        .await
        .into_http()?;

    render(&state, &ctx, |page| view::delete_confirm(page, &recipe)).await
}

pub async fn delete_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let command = DeleteRecipeCommand { slug: slug.clone() };
    match state
        .services
        .recipe_commands
        .delete_recipe(ctx.user(), command)
        .await
    {
        Ok(recipe) => {
            redirect_with_flash(
                &state,
                &ctx,
                FlashMessage::success(format!("Recipe \"{}\" was deleted.", recipe.title)),
                LIST_PATH,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_tags_are_collected() {
        let form = recipe_form_from_pairs(vec![
            ("title".into(), "Soup".into()),
            ("tags".into(), "1".into()),
            ("tags".into(), "3".into()),
            ("csrf".into(), "ignored".into()),
        ]);
        assert_eq!(form.title, "Soup");
        assert_eq!(form.tags, vec!["1".to_string(), "3".to_string()]);
        assert!(form.description.is_empty());
    }
}
