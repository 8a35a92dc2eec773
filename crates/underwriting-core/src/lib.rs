pub mod document;
pub mod error;
pub mod traits;
pub mod types;

pub use document::*;
pub use error::*;
pub use traits::*;
pub use types::*;
