use std::future::Future;

use harbor_models::theme::ThemePreference;

/// Reads and updates the persisted colour scheme preference.
pub trait ThemeService: Send + Sync + 'static {
    /// Returns the stored preference, or [`ThemePreference::System`] if none
    /// has been stored or it cannot be read.
    fn preference(&self) -> impl Future<Output = ThemePreference> + Send;

    fn set_preference(
        &self,
        preference: ThemePreference,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Stores and returns [`ThemePreference::toggled`] of the current
    /// preference.
    fn toggle(&self) -> impl Future<Output = anyhow::Result<ThemePreference>> + Send;
}
