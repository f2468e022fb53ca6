// src/presentation/http/views/widgets.rs
use crate::application::{
    dto::{Page, TagDto},
    forms::FormErrors,
};
use maud::{Markup, html};

pub fn field_errors(errors: &FormErrors, field: &str) -> Markup {
    html! {
        @let messages = errors.field(field);
        @if !messages.is_empty() {
            ul.errorlist {
                @for message in messages {
                    li { (message) }
                }
            }
        }
    }
}

pub fn non_field_errors(errors: &FormErrors) -> Markup {
    html! {
        @if !errors.non_field().is_empty() {
            ul.errorlist.nonfield {
                @for message in errors.non_field() {
                    li { (message) }
                }
            }
        }
    }
}

pub struct TextInput<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub value: &'a str,
    pub kind: &'a str,
    pub placeholder: Option<&'a str>,
}

impl<'a> TextInput<'a> {
    pub fn text(name: &'a str, label: &'a str, value: &'a str) -> Self {
        Self {
            name,
            label,
            value,
            kind: "text",
            placeholder: None,
        }
    }

    pub fn password(name: &'a str, label: &'a str) -> Self {
        Self {
            name,
            label,
            value: "",
            kind: "password",
            placeholder: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn render(&self, errors: &FormErrors) -> Markup {
        html! {
            p {
                label for={ "id_" (self.name) } { (self.label) }
                (field_errors(errors, self.name))
                input type=(self.kind) name=(self.name) id={ "id_" (self.name) }
                    value=(self.value) placeholder=[self.placeholder];
            }
        }
    }
}

/// Multi-line input. A placeholder also switches on the 60x5 geometry.
pub fn textarea(
    name: &str,
    label: &str,
    value: &str,
    placeholder: Option<&str>,
    errors: &FormErrors,
) -> Markup {
    html! {
        p {
            label for={ "id_" (name) } { (label) }
            (field_errors(errors, name))
            @if let Some(hint) = placeholder {
                textarea name=(name) id={ "id_" (name) } cols="60" rows="5" placeholder=(hint) {
                    (value)
                }
            } @else {
                textarea name=(name) id={ "id_" (name) } { (value) }
            }
        }
    }
}

pub fn checkbox(name: &str, label: &str, checked: bool, errors: &FormErrors) -> Markup {
    html! {
        p {
            (field_errors(errors, name))
            label {
                input type="checkbox" name=(name) value="on" checked[checked];
                " " (label)
            }
        }
    }
}

pub fn tag_select(tags: &[TagDto], selected: &[String], errors: &FormErrors) -> Markup {
    html! {
        p {
            label for="id_tags" { "Tags" }
            (field_errors(errors, "tags"))
            select name="tags" id="id_tags" multiple {
                @for tag in tags {
                    @let id = tag.id.to_string();
                    option value=(id) selected[selected.contains(&id)] { (tag.title) }
                }
            }
        }
    }
}

pub fn href_with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    match serde_urlencoded::to_string(pairs) {
        Ok(query) if !query.is_empty() => format!("{path}?{query}"),
        _ => path.to_owned(),
    }
}

/// Previous/next links. `base` is the listing query without `page`.
pub fn pagination<T>(page: &Page<T>, path: &str, base: &[(&str, &str)]) -> Markup {
    let link = |number: u32| -> String {
        let number = number.to_string();
        let mut pairs: Vec<(&str, &str)> = base.to_vec();
        pairs.push(("page", number.as_str()));
        href_with_query(path, &pairs)
    };

    html! {
        nav.pagination {
            @if page.has_previous() {
                a href=(link(1)) { "« first" }
                " "
                a href=(link(page.number - 1)) { "previous" }
                " "
            }
            span.current { "Page " (page.number) " of " (page.num_pages) "." }
            @if page.has_next() {
                " "
                a href=(link(page.number + 1)) { "next" }
                " "
                a href=(link(page.num_pages)) { "last »" }
            }
        }
    }
}

pub fn confirm_form(action: &str, question: &str, cancel_href: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            p { (question) }
            button type="submit" { "Confirm" }
            " "
            a href=(cancel_href) { "Cancel" }
        }
    }
}
