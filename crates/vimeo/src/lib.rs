pub mod consts;
pub mod prelude;
pub mod upload;

mod content;
mod error;
mod impls;
mod models;

pub use content::*;
pub use error::*;
pub use models::*;

pub use impls::*;
