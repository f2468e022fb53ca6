use super::PageContext;
use maud::{DOCTYPE, Markup, html};

const CSS: &str = "body{font-family:sans-serif;max-width:48rem;margin:0 auto;padding:1rem}\
nav.site-nav a{margin-right:1rem}\
.flash{padding:.5rem;margin:.5rem 0;border:1px solid #ccc}\
.flash-success{background:#e6f4ea}.flash-info{background:#e8f0fe}\
.flash-warning{background:#fef7e0}.flash-error{background:#fce8e6}\
.errorlist{color:#b00020;margin:0;padding-left:1rem}\
.inactive{color:#888}";

pub fn page(ctx: &PageContext<'_>, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Cookbook" }
                style { (CSS) }
            }
            body {
                (site_header(ctx))
                @for flash in ctx.flashes {
                    div class={ "flash flash-" (flash.level.as_str()) } role="status" {
                        (flash.text)
                    }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

fn site_header(ctx: &PageContext<'_>) -> Markup {
    html! {
        header {
            nav.site-nav {
                a href="/" { "Articles" }
                a href="/recipe/" { "Recipes" }
                @if let Some(user) = ctx.user {
                    a href="/recipe/my/" { "My recipes" }
                    a href="/recipe/create/" { "New recipe" }
                    a href="/article/create/" { "New article" }
                    span.user { (user.username) }
                    a href="/auth/logout/" { "Log out" }
                } @else {
                    a href="/auth/login/" { "Log in" }
                    a href="/auth/register/" { "Register" }
                }
            }
        }
    }
}
