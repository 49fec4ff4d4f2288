pub mod filter;
pub mod mail;
pub mod record;
pub mod view;

pub use filter::{FilterState, Selection, Summary};
pub use mail::{MailDraft, MailOutcome, SelectionStage};
pub use record::{Identifier, LoadReport, Record};
pub use view::FollowUpView;
