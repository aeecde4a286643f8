pub mod claims;
pub mod credentials;
pub mod error;
pub mod resource;
pub mod session;

pub use claims::TokenClaims;
pub use credentials::{CredentialStore, MemoryCredentials};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use credentials::WebCredentials;
pub use error::ClientError;
pub use resource::{IdOf, Record, ResourceClient, ResourceStore, StoreState};
pub use session::{Admission, Session, ADMIN_ROLE};
