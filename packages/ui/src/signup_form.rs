//! Registration form component. One component serves all four roles; the
//! [`SignupFlow`] machine decides which phases exist and the role decides
//! which fields render.

use api::{AuthApi, SignupRole};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, SuccessBanner};
use crate::draft::DepartmentChoice;
use crate::session::{use_api, use_session};
use crate::signup::{SignupFlow, SignupPhase};

#[component]
pub fn SignupForm(role: SignupRole) -> Element {
    let api = use_api();
    let session = use_session();
    let mut flow = use_signal(move || SignupFlow::new(role));

    let dept_api = use_api();
    let departments = use_resource(move || {
        let api = dept_api.clone();
        async move {
            if role.uses_departments() {
                api.list_departments().await.ok()
            } else {
                None
            }
        }
    });

    let submit_api = api.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = submit_api.clone();
        spawn(async move {
            flow.write().loading = true;
            let mut f = flow();
            f.submit(&api).await;
            flow.set(f);
        });
    };

    let verify_api = api.clone();
    let on_verify = move |evt: FormEvent| {
        evt.prevent_default();
        let api = verify_api.clone();
        let session = session.clone();
        spawn(async move {
            flow.write().loading = true;
            let mut f = flow();
            f.verify(&api, &session).await;
            flow.set(f);
            if flow().navigate {
                crate::nav::redirect_after_delay("/").await;
            }
        });
    };

    let on_resend = move |_| {
        let api = api.clone();
        spawn(async move {
            flow.write().loading = true;
            let mut f = flow();
            f.resend(&api).await;
            flow.set(f);
        });
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { class: "auth-title", "{role.title()}" }

            if let Some(err) = flow().error {
                ErrorBanner { message: err }
            }
            if let Some(msg) = flow().message {
                SuccessBanner { message: msg }
            }

            {match flow().phase {
                SignupPhase::Collecting => rsx! {
                    form {
                        class: "auth-form",
                        onsubmit: on_submit,

                        if role != SignupRole::Admin {
                            Input {
                                class: "w-full",
                                placeholder: "First name",
                                value: flow().draft.first_name,
                                oninput: move |evt: FormEvent| flow.write().draft.set_first_name(&evt.value()),
                            }
                            Input {
                                class: "w-full",
                                placeholder: "Last name",
                                value: flow().draft.last_name,
                                oninput: move |evt: FormEvent| flow.write().draft.set_last_name(&evt.value()),
                            }
                        }

                        Input {
                            class: "w-full",
                            placeholder: "Username",
                            value: flow().draft.username,
                            oninput: move |evt: FormEvent| flow.write().draft.username = evt.value(),
                        }
                        Input {
                            class: "w-full",
                            r#type: "email",
                            placeholder: "Email",
                            value: flow().draft.email,
                            oninput: move |evt: FormEvent| flow.write().draft.email = evt.value(),
                        }

                        if role != SignupRole::Admin {
                            Input {
                                class: "w-full",
                                r#type: "tel",
                                placeholder: "Phone number",
                                value: flow().draft.phone_number,
                                oninput: move |evt: FormEvent| flow.write().draft.phone_number = evt.value(),
                            }
                        }

                        if role.uses_departments() {
                            select {
                                class: "department-select",
                                value: "{flow().draft.department_value()}",
                                onchange: move |evt| flow.write().draft.select_department(&evt.value()),
                                option { value: "", "Select department" }
                                if let Some(Some(list)) = departments() {
                                    for department in list {
                                        option {
                                            key: "{department.id}",
                                            value: "{department.id}",
                                            "{department.name}"
                                        }
                                    }
                                }
                                option { value: "other", "Other (create new)" }
                            }
                            if flow().draft.department == DepartmentChoice::Other {
                                Input {
                                    class: "w-full",
                                    placeholder: "New department name",
                                    value: flow().draft.new_department_name,
                                    oninput: move |evt: FormEvent| flow.write().draft.new_department_name = evt.value(),
                                }
                            }
                        }

                        Input {
                            class: "w-full",
                            r#type: "password",
                            placeholder: "Password (min 6 characters)",
                            value: flow().draft.password,
                            oninput: move |evt: FormEvent| flow.write().draft.password = evt.value(),
                        }
                        Input {
                            class: "w-full",
                            r#type: "password",
                            placeholder: "Confirm password",
                            value: flow().draft.confirm_password,
                            oninput: move |evt: FormEvent| flow.write().draft.confirm_password = evt.value(),
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            class: "w-full",
                            r#type: "submit",
                            disabled: flow().loading,
                            if flow().loading { "Submitting..." } else { "Sign up" }
                        }
                    }
                },
                SignupPhase::AwaitingCode { email } => rsx! {
                    form {
                        class: "auth-form",
                        onsubmit: on_verify,

                        p { class: "otp-hint", "Enter the 6-digit code sent to {email}" }

                        Input {
                            class: "w-full otp-input",
                            placeholder: "6-digit OTP",
                            value: flow().code,
                            oninput: move |evt: FormEvent| flow.write().set_code(&evt.value()),
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            class: "w-full",
                            r#type: "submit",
                            disabled: !flow().can_verify() || flow().loading,
                            if flow().loading { "Verifying..." } else { "Verify" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "w-full",
                            disabled: flow().loading,
                            onclick: on_resend,
                            "Resend OTP"
                        }
                        button {
                            class: "link-button",
                            r#type: "button",
                            onclick: move |_| flow.write().back(),
                            "Back to signup"
                        }
                    }
                },
                SignupPhase::Submitted => rsx! {
                    p { class: "auth-done", "Account submitted. You can sign in once it is approved." }
                    a { class: "link-button", href: "/login", "Go to login" }
                },
                SignupPhase::Verified => rsx! {
                    p { class: "auth-done", "Account verified." }
                    if flow().navigate {
                        p { class: "auth-done-hint", "Taking you to your feed..." }
                    } else {
                        a { class: "link-button", href: "/login", "Go to login" }
                    }
                },
            }}
        }
    }
}
