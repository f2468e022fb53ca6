// src/presentation/http/views/articles.rs
use super::{
    PageContext,
    layout::page,
    widgets::{TextInput, confirm_form, non_field_errors, pagination, textarea},
};
use crate::application::{
    dto::{ArticleDto, Page},
    forms::{FormErrors, article::ArticleForm},
};
use maud::{Markup, html};

/// How the create/edit form presents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStyle {
    Plain,
    /// Placeholders and a 60x5 content area.
    Hinted,
}

pub fn list(ctx: &PageContext<'_>, articles: &Page<ArticleDto>) -> Markup {
    let content = html! {
        @if articles.items.is_empty() {
            p { "No articles yet." }
        }
        @for article in &articles.items {
            article {
                h2 { a href={ "/index/" (article.slug) } { (article.title) } }
                @if let Some(image) = &article.image {
                    img src=(image) alt=(article.title) loading="lazy";
                }
                p { (article.content) }
            }
        }
        (pagination(articles, "/", &[]))
    };
    page(ctx, "Articles", content)
}

pub fn detail(ctx: &PageContext<'_>, article: &ArticleDto) -> Markup {
    let is_author = ctx
        .user
        .is_some_and(|user| i64::from(user.id) == article.author_id);

    let content = html! {
        @if let Some(image) = &article.image {
            img src=(image) alt=(article.title);
        }
        p { (article.content) }
        p.meta { "Updated " (article.updated_at.format("%Y-%m-%d %H:%M")) }
        @if is_author {
            p {
                a href={ "/article/change/" (article.slug) } { "Edit" }
                " "
                a href={ "/article/delete/" (article.slug) } { "Delete" }
            }
        }
    };
    page(ctx, &article.title, content)
}

pub fn form(
    ctx: &PageContext<'_>,
    heading: &str,
    action: &str,
    values: &ArticleForm,
    errors: &FormErrors,
    style: FormStyle,
) -> Markup {
    let hinted = style == FormStyle::Hinted;
    let mut title = TextInput::text("title", "Title", &values.title);
    if hinted {
        title = title.placeholder("title... form");
    }
    let image = TextInput::text("image", "Image", values.image.as_deref().unwrap_or(""));

    let content = html! {
        form method="post" action=(action) {
            (non_field_errors(errors))
            (title.render(errors))
            (textarea(
                "content",
                "Content",
                &values.content,
                hinted.then_some("content... form"),
                errors,
            ))
            (image.render(errors))
            button type="submit" { "Save" }
        }
    };
    page(ctx, heading, content)
}

pub fn delete_confirm(ctx: &PageContext<'_>, article: &ArticleDto) -> Markup {
    let content = confirm_form(
        &format!("/article/delete/{}", article.slug),
        &format!("Delete \"{}\"?", article.title),
        &format!("/index/{}", article.slug),
    );
    page(ctx, "Delete article", content)
}
