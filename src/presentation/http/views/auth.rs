use super::{
    PageContext,
    layout::page,
    widgets::{TextInput, confirm_form, non_field_errors},
};
use crate::application::forms::{FormErrors, auth::RegistrationForm};
use maud::{Markup, html};

pub fn login(
    ctx: &PageContext<'_>,
    action: &str,
    username: &str,
    next: Option<&str>,
    errors: &FormErrors,
) -> Markup {
    let content = html! {
        form method="post" action=(action) {
            (non_field_errors(errors))
            (TextInput::text("username", "Username", username).render(errors))
            (TextInput::password("password", "Password").render(errors))
            @if let Some(next) = next {
                input type="hidden" name="next" value=(next);
            }
            button type="submit" { "Log in" }
        }
        p { "No account? " a href="/auth/register/" { "Register" } }
    };
    page(ctx, "Log in", content)
}

pub fn register(ctx: &PageContext<'_>, values: &RegistrationForm, errors: &FormErrors) -> Markup {
    let content = html! {
        form method="post" action="/auth/register/" {
            (non_field_errors(errors))
            (TextInput::text("username", "Username", &values.username).render(errors))
            (TextInput::password("password1", "Password").render(errors))
            (TextInput::password("password2", "Password confirmation").render(errors))
            button type="submit" { "Register" }
        }
    };
    page(ctx, "Register", content)
}

pub fn logout_confirm(ctx: &PageContext<'_>) -> Markup {
    page(
        ctx,
        "Log out",
        confirm_form("/auth/logout/", "Are you sure you want to log out?", "/"),
    )
}
