//! Application use cases.

mod confirmation_mail;

pub use confirmation_mail::{ConfirmationMailManager, ConfirmationMailService};
