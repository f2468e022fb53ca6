// src/presentation/http/controllers/ingredients.rs
use super::recipes::detail_path;
use crate::application::{
    commands::recipes::{CreateIngredientCommand, DeleteIngredientCommand, UpdateIngredientCommand},
    dto::{FlashMessage, RecipeDto},
    error::ApplicationError,
    forms::{FormErrors, recipe::IngredientForm},
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::RequestContext,
    responses::{redirect_with_flash, render},
    state::HttpState,
    views::recipes as view,
};
use axum::{Extension, Form, extract::Path, response::Response};
use serde::Deserialize;

/// Raw ingredient form. An unticked checkbox is simply absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IngredientInput {
    pub title: String,
    pub quantity: Option<String>,
    pub is_active: Option<String>,
}

impl From<IngredientInput> for IngredientForm {
    fn from(input: IngredientInput) -> Self {
        Self {
            title: input.title,
            quantity: input.quantity,
            is_active: input.is_active.is_some(),
        }
    }
}

/// Route ids that are not numbers name no ingredient.
fn ingredient_pk(raw: &str) -> HttpResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApplicationError::not_found("ingredient not found").into())
}

/// Ownership failures on ingredients are reported at error level.
async fn denied(
    state: &HttpState,
    ctx: &RequestContext,
    message: String,
    slug: &str,
) -> HttpResult<Response> {
    redirect_with_flash(state, ctx, FlashMessage::error(message), &detail_path(slug)).await
}

async fn render_form(
    state: &HttpState,
    ctx: &RequestContext,
    heading: &str,
    action: &str,
    recipe: &RecipeDto,
    values: &IngredientForm,
    errors: &FormErrors,
) -> HttpResult<Response> {
    render(state, ctx, |page| {
        view::ingredient_form(page, heading, action, recipe, values, errors)
    })
    .await
}

pub async fn create_page(
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
            let action = format!("/recipe/{}/ingredient/create/", recipe.slug);
            render_form(
                &state,
                &ctx,
                "Add ingredient",
                &action,
                &recipe,
                &IngredientForm::default(),
                &FormErrors::new(),
            )
            .await
        }
        Err(ApplicationError::Forbidden(message)) => denied(&state, &ctx, message, &slug).await,
        Err(err) => Err(err.into()),
    }
}

pub async fn create_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
    Form(input): Form<IngredientInput>,
) -> HttpResult<Response> {
    let form: IngredientForm = input.into();
    let command = CreateIngredientCommand {
        slug: slug.clone(),
        form: form.clone(),
    };

    match state
        .services
        .recipe_commands
        .create_ingredient(ctx.user(), command)
        .await
    {
        Ok(ingredient) => {
            redirect_with_flash(
                &state,
                &ctx,
                FlashMessage::success(format!("{} was added.", ingredient.title)),
                &detail_path(&slug),
            )
            .await
        }
        Err(ApplicationError::Forbidden(message)) => denied(&state, &ctx, message, &slug).await,
        Err(ApplicationError::Form(errors)) => {
            let recipe = state
                .services
                .recipe_queries
                .get_recipe(&slug)
                .await
                .into_http()?;
            let action = format!("/recipe/{slug}/ingredient/create/");
            render_form(&state, &ctx, "Add ingredient", &action, &recipe, &form, &errors).await
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn edit_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path((slug, pk)): Path<(String, String)>,
) -> HttpResult<Response> {
    let pk = ingredient_pk(&pk)?;
    match state
        .services
        .recipe_queries
        .get_editable_ingredient(ctx.user(), &slug, pk)
        .await
    {
        Ok((recipe, ingredient)) => {
            let values = IngredientForm {
                title: ingredient.title.clone(),
                quantity: ingredient.quantity.clone(),
                is_active: ingredient.is_active,
            };
            let action = format!("/recipe/{}/ingredient/{}/edit/", recipe.slug, ingredient.id);
            render_form(
                &state,
                &ctx,
                "Edit ingredient",
                &action,
                &recipe,
                &values,
                &FormErrors::new(),
            )
            .await
        }
        Err(ApplicationError::Forbidden(message)) => denied(&state, &ctx, message, &slug).await,
        Err(err) => Err(err.into()),
    }
}

pub async fn edit_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path((slug, pk)): Path<(String, String)>,
    Form(input): Form<IngredientInput>,
) -> HttpResult<Response> {
    let pk = ingredient_pk(&pk)?;
    let form: IngredientForm = input.into();
    let command = UpdateIngredientCommand {
        slug: slug.clone(),
        ingredient_id: pk,
        form: form.clone(),
    };

    match state
        .services
        .recipe_commands
        .update_ingredient(ctx.user(), command)
        .await
    {
        Ok(ingredient) => {
            redirect_with_flash(
                &state,
                &ctx,
                FlashMessage::success(format!("{} was updated.", ingredient.title)),
                &detail_path(&slug),
            )
            .await
        }
        Err(ApplicationError::Forbidden(message)) => denied(&state, &ctx, message, &slug).await,
        Err(ApplicationError::Form(errors)) => {
            let recipe = state
                .services
                .recipe_queries
                .get_recipe(&slug)
                .await
                .into_http()?;
            let action = format!("/recipe/{slug}/ingredient/{pk}/edit/");
            render_form(&state, &ctx, "Edit ingredient", &action, &recipe, &form, &errors).await
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path((slug, pk)): Path<(String, String)>,
) -> HttpResult<Response> {
    let pk = ingredient_pk(&pk)?;
    match state
        .services
        .recipe_queries
        .get_editable_ingredient(ctx.user(), &slug, pk)
        .await
    {
        Ok((recipe, ingredient)) => {
            render(&state, &ctx, |page| {
                view::ingredient_delete_confirm(page, &recipe, &ingredient)
            })
            .await
        }
        Err(ApplicationError::Forbidden(message)) => denied(&state, &ctx, message, &slug).await,
        Err(err) => Err(err.into()),
    }
}

pub async fn delete_submit(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path((slug, pk)): Path<(String, String)>,
) -> HttpResult<Response> {
    let pk = ingredient_pk(&pk)?;
    let command = DeleteIngredientCommand {
        slug: slug.clone(),
        ingredient_id: pk,
    };

    match state
        .services
        .recipe_commands
        .delete_ingredient(ctx.user(), command)
        .await
    {
        Ok(ingredient) => {
            redirect_with_flash(
                &state,
                &ctx,
                FlashMessage::success(format!("{} was deleted.", ingredient.title)),
                &detail_path(&slug),
            )
            .await
        }
        Err(ApplicationError::Forbidden(message)) => denied(&state, &ctx, message, &slug).await,
        Err(err) => Err(err.into()),
    }
}
