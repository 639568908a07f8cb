use clap::{Subcommand, ValueEnum};
use harbor_config::Config;
use harbor_core_theme_contracts::ThemeService;
use harbor_models::theme::ThemePreference;

use crate::environment::Environment;

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Show the stored preference and the resulting colour scheme
    Show {
        /// Assume the device is in dark mode when resolving `system`
        #[arg(long)]
        device_dark: bool,
    },
    /// Store a new preference
    Set {
        #[clap(value_enum)]
        preference: PreferenceArg,
    },
    /// Switch between light and dark
    Toggle,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PreferenceArg {
    Light,
    Dark,
    System,
}

impl From<PreferenceArg> for ThemePreference {
    fn from(value: PreferenceArg) -> Self {
        match value {
            PreferenceArg::Light => Self::Light,
            PreferenceArg::Dark => Self::Dark,
            PreferenceArg::System => Self::System,
        }
    }
}

impl ThemeCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let theme = Environment::new(&config).await?.theme();
        match self {
            ThemeCommand::Show { device_dark } => {
                let preference = theme.preference().await;
                let scheme = if preference.is_dark(device_dark) {
                    "dark"
                } else {
                    "light"
                };
                println!("{preference} ({scheme})");
            }
            ThemeCommand::Set { preference } => {
                let preference = preference.into();
                theme.set_preference(preference).await?;
                println!("Theme set to {preference}.");
            }
            ThemeCommand::Toggle => {
                let preference = theme.toggle().await?;
                println!("Theme set to {preference}.");
            }
        }
        Ok(())
    }
}
