use dioxus::prelude::*;
use eco_core::FieldId;
use crate::app::use_site;
use crate::theme::AppColors;

#[derive(Clone, PartialEq)]
pub enum FieldKind {
    Text { placeholder: &'static str },
    Email { placeholder: &'static str },
    TextArea { placeholder: &'static str, rows: u32 },
    /// `min` is an ISO date (`YYYY-MM-DD`).
    Date { min: String },
    Time,
    Select { prompt: &'static str, options: &'static [(&'static str, &'static str)] },
}

/// Labelled input bound to one field, with its error slot underneath.
#[component]
pub fn FormField(field: FieldId, label: &'static str, kind: FieldKind, is_dark: bool) -> Element {
    let mut site = use_site();
    let role = field.role();
    let id = field.dom_id();

    let (value, error) = {
        let s = site.read();
        let form = s.form(role);
        (form.values().raw(field).to_string(), form.error(field).map(str::to_string))
    };

    let on_surface = AppColors::on_surface(is_dark);
    let error_color = AppColors::error(is_dark);
    let border = if error.is_some() { error_color } else { "#8DA58F" };
    let input_style = format!(
        "width: 100%; padding: 10px 12px; border-radius: 8px; border: 1px solid {border}; background: transparent; color: {on_surface}; box-sizing: border-box; font: inherit;"
    );
    let error_class = if error.is_some() { "error show" } else { "error" };
    let error_display = if error.is_some() { "block" } else { "none" };
    let message = error.unwrap_or_default();

    let mut update = move |value: String| {
        if let Err(e) = site.write().form_mut(role).set_value(field, value) {
            tracing::warn!(error = %e, "input bound to wrong form");
        }
    };

    let input = match kind {
        FieldKind::Text { placeholder } => rsx! {
            input {
                id: "{id}",
                name: "{id}",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |ev| update(ev.value()),
                style: "{input_style}",
            }
        },
        FieldKind::Email { placeholder } => rsx! {
            input {
                id: "{id}",
                name: "{id}",
                r#type: "email",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |ev| update(ev.value()),
                style: "{input_style}",
            }
        },
        FieldKind::TextArea { placeholder, rows } => rsx! {
            textarea {
                id: "{id}",
                name: "{id}",
                rows: "{rows}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |ev| update(ev.value()),
                style: "{input_style} resize: vertical;",
            }
        },
        FieldKind::Date { min } => rsx! {
            input {
                id: "{id}",
                name: "{id}",
                r#type: "date",
                min: "{min}",
                value: "{value}",
                oninput: move |ev| update(ev.value()),
                style: "{input_style}",
            }
        },
        FieldKind::Time => rsx! {
            input {
                id: "{id}",
                name: "{id}",
                r#type: "time",
                value: "{value}",
                oninput: move |ev| update(ev.value()),
                style: "{input_style}",
            }
        },
        FieldKind::Select { prompt, options } => rsx! {
            select {
                id: "{id}",
                name: "{id}",
                value: "{value}",
                onchange: move |ev| update(ev.value()),
                style: "{input_style}",
                option { value: "", "{prompt}" }
                for (option_value, option_label) in options.iter() {
                    option { key: "{option_value}", value: "{option_value}", "{option_label}" }
                }
            }
        },
    };

    rsx! {
        div { class: "form-group", style: "margin-bottom: 16px;",
            label {
                r#for: "{id}",
                style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.9rem; font-weight: 500;",
                "{label}"
            }
            {input}
            span {
                class: "{error_class}",
                style: "display: {error_display}; color: {error_color}; font-size: 0.8rem; margin-top: 4px;",
                "{message}"
            }
        }
    }
}
