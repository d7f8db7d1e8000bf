mod about;
mod booking_modal;
mod contact;
mod field;
mod footer;
mod hero;
mod lookup_modal;
mod services;

pub use about::about;
pub use booking_modal::BookingModal;
pub use contact::contact;
pub use footer::footer;
pub use hero::Hero;
pub use lookup_modal::LookupModal;
pub use services::services;
