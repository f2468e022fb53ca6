// src/presentation/http/views/recipes.rs
use super::{
    PageContext,
    layout::page,
    widgets::{
        TextInput, checkbox, confirm_form, href_with_query, non_field_errors, pagination,
        tag_select, textarea,
    },
};
use crate::application::{
    dto::{IngredientDto, Page, RecipeDetailDto, RecipeDto, TagDto},
    forms::{
        FormErrors,
        recipe::{IngredientForm, RecipeForm},
    },
};
use maud::{Markup, html};

pub struct ListView<'a> {
    pub heading: &'a str,
    pub path: &'a str,
    pub recipes: &'a Page<RecipeDto>,
    pub tags: &'a [TagDto],
    pub active_tag: Option<&'a str>,
}

pub fn list(ctx: &PageContext<'_>, view: &ListView<'_>) -> Markup {
    let base: Vec<(&str, &str)> = view.active_tag.map(|tag| ("tag", tag)).into_iter().collect();

    let content = html! {
        @if !view.tags.is_empty() {
            nav.tags {
                "Filter: "
                a href=(view.path) { "all" }
                @for tag in view.tags {
                    " "
                    @let href = href_with_query(view.path, &[("tag", tag.title.as_str())]);
                    a href=(href) class=[(view.active_tag == Some(tag.title.as_str())).then_some("active")] {
                        (tag.title)
                    }
                }
            }
        }
        @if view.recipes.items.is_empty() {
            p { "No recipes found." }
        }
        ul.recipes {
            @for recipe in &view.recipes.items {
                li {
                    a href={ "/recipe/" (recipe.slug) "/" } { (recipe.title) }
                    @if !recipe.tags.is_empty() {
                        " "
                        small {
                            @for (i, tag) in recipe.tags.iter().enumerate() {
                                @if i > 0 { ", " }
                                (tag.title)
                            }
                        }
                    }
                }
            }
        }
        (pagination(view.recipes, view.path, &base))
    };
    page(ctx, view.heading, content)
}

pub fn detail(ctx: &PageContext<'_>, detail: &RecipeDetailDto) -> Markup {
    let recipe = &detail.recipe;
    let content = html! {
        @if !recipe.description.is_empty() {
            p { (recipe.description) }
        }
        @if !recipe.tags.is_empty() {
            p.tags {
                "Tags: "
                @for (i, tag) in recipe.tags.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href=(href_with_query("/recipe/", &[("tag", tag.title.as_str())])) { (tag.title) }
                }
            }
        }
        h2 { "Ingredients" }
        @if detail.ingredients.is_empty() {
            p { "No ingredients yet." }
        }
        ul.ingredients {
            @for ingredient in &detail.ingredients {
                li class=[(!ingredient.is_active).then_some("inactive")] {
                    (ingredient.title)
                    @if let Some(quantity) = &ingredient.quantity {
                        " (" (quantity) ")"
                    }
                    @if detail.is_author {
                        " "
                        a href={ "/recipe/" (recipe.slug) "/ingredient/" (ingredient.id) "/edit/" } { "edit" }
                        " "
                        a href={ "/recipe/" (recipe.slug) "/ingredient/" (ingredient.id) "/delete/" } { "delete" }
                    }
                }
            }
        }
        @if detail.is_author {
            p {
                a href={ "/recipe/" (recipe.slug) "/ingredient/create/" } { "Add ingredient" }
                " "
                a href={ "/recipe/" (recipe.slug) "/update/" } { "Edit" }
                " "
                a href={ "/recipe/" (recipe.slug) "/delete/" } { "Delete" }
            }
        }
    };
    page(ctx, &recipe.title, content)
}

pub fn form(
    ctx: &PageContext<'_>,
    heading: &str,
    action: &str,
    values: &RecipeForm,
    tags: &[TagDto],
    errors: &FormErrors,
) -> Markup {
    let content = html! {
        form method="post" action=(action) {
            (non_field_errors(errors))
            (TextInput::text("title", "Title", &values.title).render(errors))
            (textarea("description", "Description", &values.description, None, errors))
            (tag_select(tags, &values.tags, errors))
            button type="submit" { "Save" }
        }
    };
    page(ctx, heading, content)
}

pub fn delete_confirm(ctx: &PageContext<'_>, recipe: &RecipeDto) -> Markup {
    let content = confirm_form(
        &format!("/recipe/{}/delete/", recipe.slug),
        &format!("Delete \"{}\" and all of its ingredients?", recipe.title),
        &format!("/recipe/{}/", recipe.slug),
    );
    page(ctx, "Delete recipe", content)
}

pub fn ingredient_form(
    ctx: &PageContext<'_>,
    heading: &str,
    action: &str,
    recipe: &RecipeDto,
    values: &IngredientForm,
    errors: &FormErrors,
) -> Markup {
    let content = html! {
        p { "Recipe: " a href={ "/recipe/" (recipe.slug) "/" } { (recipe.title) } }
        form method="post" action=(action) {
            (non_field_errors(errors))
            (TextInput::text("title", "Title", &values.title).render(errors))
            (TextInput::text("quantity", "Quantity", values.quantity.as_deref().unwrap_or("")).render(errors))
            (checkbox("is_active", "Visible to everyone", values.is_active, errors))
            button type="submit" { "Save" }
        }
    };
    page(ctx, heading, content)
}

pub fn ingredient_delete_confirm(
    ctx: &PageContext<'_>,
    recipe: &RecipeDto,
    ingredient: &IngredientDto,
) -> Markup {
    let content = confirm_form(
        &format!("/recipe/{}/ingredient/{}/delete/", recipe.slug, ingredient.id),
        &format!("Remove {} from {}?", ingredient.title, recipe.title),
        &format!("/recipe/{}/", recipe.slug),
    );
    page(ctx, "Delete ingredient", content)
}
