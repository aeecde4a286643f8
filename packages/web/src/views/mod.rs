mod admin_layout;
mod calendar;
mod exercises;
mod home;
mod login;
mod memberships;
mod not_found;
mod schedules;
mod team;
mod unauthorized;
mod users;

pub use admin_layout::{AdminHome, AdminLayout};
pub use calendar::Calendar;
pub use exercises::Exercises;
pub use home::Home;
pub use login::Login;
pub use memberships::Memberships;
pub use not_found::NotFound;
pub use schedules::Schedules;
pub use team::Team;
pub use unauthorized::Unauthorized;
pub use users::Users;
