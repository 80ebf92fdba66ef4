mod health;
mod qr;
mod url;

pub use health::health_handler;
pub use qr::qr_handler;
pub use url::{
    fallback_handler, list_urls_handler, redirect_handler, shorten_handler,
    shorten_path_handler,
};
