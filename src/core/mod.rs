pub mod registry;
pub mod service;
pub mod slot;

pub use crate::domain::model::{ModalHandle, ModalOptions, ModalOptionsPatch, Opaque};
pub use crate::domain::ports::ModalHost;
pub use crate::utils::error::Result;
