//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    make_credentials, use_api, use_session, AppSession, LogoutButton,
    PlatformCredentials, SessionProvider,
};

mod notifications;
pub use notifications::{
    notify, use_notifications, NotificationProvider, NotificationTray, Notice,
    Notifications, Severity,
};

mod store_signal;
pub use store_signal::StoreSignal;

mod navbar;
pub use navbar::Navbar;

mod dialog;
pub use dialog::{ConfirmDialog, Dialog};
