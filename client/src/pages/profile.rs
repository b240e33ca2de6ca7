//! Profile page: the signed-in account's details and the logout action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits behind `ProtectedRoute`, and re-checks the session on mount as well.
//! The fetched record is reduced to a [`ProfileSummary`] right away, so the
//! raw national ID is never kept in page state.
//!
//! ERROR HANDLING
//! ==============
//! A 401/403 is handled by the gateway (session cleared, back to login). Any
//! other failure shows a message with a retry button.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::net::api::{AppGateway, Gateway};
use crate::net::transport::Transport;
use crate::net::types::ProfileRecord;
use crate::state::auth::is_authenticated;
use crate::state::session::SessionStore;
use crate::util::auth::{LOGIN_PATH, logout};
use crate::util::display::{format_member_since, mask_national_id};

pub const PROFILE_FAILED_MESSAGE: &str = "Failed to load profile. Please try again.";
pub const SIGN_OUT_PROMPT: &str = "Are you sure you want to sign out?";

/// Display-ready profile fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub email: String,
    pub masked_national_id: String,
    pub member_since: String,
}

impl From<ProfileRecord> for ProfileSummary {
    fn from(record: ProfileRecord) -> Self {
        Self {
            masked_national_id: mask_national_id(&record.national_id),
            member_since: format_member_since(&record.created_at),
            name: record.name,
            email: record.email,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileState {
    Loading,
    Loaded(ProfileSummary),
    Failed(String),
}

/// Fetch and summarize the profile.
pub async fn load_profile<T: Transport>(gateway: &Gateway<T>) -> ProfileState {
    match gateway.fetch_profile().await {
        Ok(record) => ProfileState::Loaded(record.into()),
        Err(e) => {
            log::warn!("profile load failed: {e}");
            ProfileState::Failed(e.user_message(PROFILE_FAILED_MESSAGE))
        }
    }
}

/// Ends the session only once the visitor has confirmed. Returns whether it did.
pub fn confirm_logout(session: &SessionStore, confirmed: bool) -> bool {
    if confirmed {
        logout(session);
    }
    confirmed
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    if !is_authenticated(gateway.session()) {
        return view! { <Redirect path=LOGIN_PATH/> }.into_any();
    }
    let navigate = use_navigate();

    let state = RwSignal::new(ProfileState::Loading);
    let attempt = RwSignal::new(0_u32);

    {
        let gateway = gateway.clone();
        Effect::new(move || {
            attempt.track();
            state.set(ProfileState::Loading);
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let next = load_profile(&gateway).await;
                // The page may be gone after a forced logout.
                let _ = state.try_set(next);
            });
        });
    }

    let confirming = RwSignal::new(false);
    let on_confirm_logout = {
        let session = gateway.session().clone();
        move |_| {
            if confirm_logout(&session, confirming.get_untracked()) {
                navigate(LOGIN_PATH, NavigateOptions { replace: true, ..Default::default() });
            }
        }
    };
    let on_retry = move |_| attempt.update(|n| *n += 1);

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <h1>"Your Profile"</h1>
                <button class="btn" hidden=move || confirming.get() on:click=move |_| confirming.set(true)>
                    "Log out"
                </button>
            </header>
            <div class="profile-page__confirm" role="alertdialog" hidden=move || !confirming.get()>
                <p>{SIGN_OUT_PROMPT}</p>
                <button class="btn btn--primary" on:click=on_confirm_logout>
                    "Sign out"
                </button>
                <button class="btn" on:click=move |_| confirming.set(false)>
                    "Cancel"
                </button>
            </div>
            {move || match state.get() {
                ProfileState::Loading => view! { <p class="profile-page__loading">"Loading profile..."</p> }.into_any(),
                ProfileState::Failed(message) => {
                    view! {
                        <div class="profile-page__error" role="alert">
                            <p>{message}</p>
                            <button class="btn btn--primary" on:click=on_retry>
                                "Retry"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                ProfileState::Loaded(profile) => {
                    view! {
                        <dl class="profile-card">
                            <dt>"Name"</dt>
                            <dd>{profile.name}</dd>
                            <dt>"Email"</dt>
                            <dd>{profile.email}</dd>
                            <dt>"National ID"</dt>
                            <dd>{profile.masked_national_id}</dd>
                            <dt>"Member since"</dt>
                            <dd>{profile.member_since}</dd>
                        </dl>
                    }
                        .into_any()
                }
            }}
        </div>
    }
    .into_any()
}
