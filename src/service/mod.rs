pub mod delay;
pub mod filter;
pub mod followup;
pub mod mailer;

pub use followup::FollowUpService;
