//! Labelled input bound to a string signal with an inline error line.

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// Rewrites raw input before it reaches `value` (e.g. digits only).
    #[prop(optional)]
    sanitize: Option<fn(&str) -> String>,
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        value.set(match sanitize {
            Some(clean) => clean(&raw),
            None => raw,
        });
    };

    view! {
        <div class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <label class="form-field__label" for=name>
                {label}
            </label>
            <input
                class="form-field__input"
                id=name
                name=name
                type=input_type
                autocomplete=autocomplete
                placeholder=placeholder
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=on_input
            />
            <Show when=move || error.get().is_some()>
                <p class="form-field__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
