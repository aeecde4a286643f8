//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::Session;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformCredentials = store::WebCredentials;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformCredentials = store::MemoryCredentials;

/// Session type shared by every view.
pub type AppSession = Session<PlatformCredentials>;

/// Credential store for this platform: `localStorage` in the web build,
/// in-memory otherwise.
pub fn make_credentials() -> PlatformCredentials {
    PlatformCredentials::new()
}

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Get the shared API client. It reads the same credential store the
/// session writes, so the bearer header follows login/logout.
pub fn use_api() -> api::ApiClient<PlatformCredentials> {
    use_context::<api::ApiClient<PlatformCredentials>>()
}

/// Provider component that owns the session and the API client.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let credentials = use_hook(make_credentials);

    use_context_provider({
        let credentials = credentials.clone();
        move || api::ApiClient::new(api::ApiConfig::from_env(), credentials.clone())
    });

    use_context_provider(|| {
        let mut session = Session::new(credentials.clone());
        session.restore();
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "session restored from storage"
        );
        Signal::new(session)
    });

    rsx! {
        {children}
    }
}

/// Button that ends the session and returns to the public home page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.write().logout();
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
