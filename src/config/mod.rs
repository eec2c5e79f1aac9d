pub mod seed;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
pub mod cli {
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "tray-track")]
    #[command(about = "Inspect tray freshness and shopping-list fulfillment from a seed file")]
    pub struct CliConfig {
        /// TOML seed file with catalog, trays and shopping lists
        #[arg(long)]
        pub seed: String,

        /// Hours before expiry at which a slot starts warning
        #[arg(long, default_value = "48")]
        pub warning_window_hours: i64,

        /// Emit the fulfillment report as JSON instead of text
        #[arg(long)]
        pub json: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_empty_string("seed", &self.seed)?;
            validate_range("warning_window_hours", self.warning_window_hours, 1, 720)?;
            Ok(())
        }
    }
}
