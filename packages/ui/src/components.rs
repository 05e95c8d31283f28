//! Small shared form controls.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let button_type = r#type;
    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: "{button_type}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled: disabled,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// Red error banner shown above a form.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "banner banner-error",
            "{message}"
        }
    }
}

/// Green confirmation banner.
#[component]
pub fn SuccessBanner(message: String) -> Element {
    rsx! {
        div {
            class: "banner banner-success",
            "{message}"
        }
    }
}
