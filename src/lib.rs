pub mod action;
pub mod buffer;
pub mod config;
pub mod content;
pub mod encoder;
pub mod exception;
pub mod param;
pub mod util;
pub mod writer;

pub use action::{ActionContext, ActionDescriptor, RouteValues, Router};
pub use buffer::BufferedHtmlContent;
pub use config::Config;
pub use content::{render_to_string, HtmlContent, HtmlString, StringHtmlContent};
pub use encoder::{DefaultHtmlEncoder, HtmlEncoder};
pub use exception::Exception;
pub use util::HtmlBuilder;
pub use writer::{BufferedTextWriter, HtmlTextWriter};
