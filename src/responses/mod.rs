pub mod errors;
pub mod file;
pub mod html;
pub mod redirect;

pub use errors::{html_error_response, ResultResp};

pub use file::bytes_response;
pub use html::html_page;
pub use redirect::{redirect, redirect_with};
