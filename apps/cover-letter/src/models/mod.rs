pub mod profile;
pub mod request;

pub use profile::UserProfile;
pub use request::{Honorific, LetterRequest, Recipient};
