pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ModalOptionsPatch;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "modal-facade")]
#[command(about = "Show a modal through the pluggable modal service")]
pub struct CliConfig {
    /// Path to a TOML file with logging and modal defaults
    #[arg(short, long)]
    pub config: Option<String>,

    /// Text rendered as the modal body
    #[arg(long)]
    pub message: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// JSON object forwarded as content props
    #[arg(long)]
    pub props: Option<String>,

    #[arg(long)]
    pub class_name: Option<String>,

    #[arg(long)]
    pub movable: bool,

    #[arg(long, help = "Do not render a close button")]
    pub no_close_button: bool,

    #[arg(long, help = "Leave the default implementation in place")]
    pub no_host: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Only flags the user actually passed become overrides.
    pub fn modal_options(&self) -> Result<ModalOptionsPatch> {
        let content_props = match &self.props {
            Some(raw) => Some(serde_json::from_str(raw)?),
            None => None,
        };

        Ok(ModalOptionsPatch {
            content: self
                .message
                .clone()
                .map(crate::core::Opaque::new),
            content_props,
            title: self.title.clone(),
            custom_class_name: self.class_name.clone(),
            movable: self.movable.then_some(true),
            close_button: self.no_close_button.then_some(false),
            ..Default::default()
        })
    }
}
