//! Advisory strength bar shown under the registration password field.

use leptos::prelude::*;

use crate::validation::{PasswordStrength, password_strength};

/// Renders nothing while the password is empty.
#[component]
pub fn PasswordStrengthMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = Memo::new(move |_| {
        password.with(|p| (!p.is_empty()).then(|| password_strength(p)))
    });

    move || {
        strength.get().map(|level: PasswordStrength| {
            view! {
                <div class=format!("strength-meter strength-meter--{}", level.css_modifier())>
                    <div class="strength-meter__track">
                        <div class="strength-meter__bar"></div>
                    </div>
                    <p class="strength-meter__label">"Password strength: " {level.label()}</p>
                </div>
            }
        })
    }
}
