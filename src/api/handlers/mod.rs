//! HTTP request handlers, one module per endpoint.

pub mod delete;
pub mod redirect;
pub mod save;
pub mod update;

pub use delete::delete_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;
pub use update::update_handler;
