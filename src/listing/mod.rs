pub mod drafts;
pub mod previews;
pub mod submit;

pub use drafts::DraftStore;
pub use previews::PreviewRegistry;
pub use submit::{submit_listing, SubmitError};
