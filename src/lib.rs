pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ConsoleHost;
pub use config::toml_config::ServiceConfig;
pub use crate::core::registry::{Registration, ServicesManager};
pub use crate::core::service::UiModalService;
pub use crate::core::slot::{ImplementationUpdate, ServiceImplementation};
pub use domain::model::{ModalHandle, ModalOptions, ModalOptionsPatch, Opaque};
pub use domain::ports::ModalHost;
pub use utils::error::{ModalError, Result};
