use anyhow::Context;
use harbor_core_theme_contracts::ThemeService;
use harbor_models::theme::ThemePreference;
use harbor_storage_contracts::{keys, KeyValueStore};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ThemeServiceImpl<Store> {
    store: Store,
}

impl<Store> ThemeServiceImpl<Store> {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl<Store: KeyValueStore> ThemeService for ThemeServiceImpl<Store> {
    #[tracing::instrument(skip(self))]
    async fn preference(&self) -> ThemePreference {
        let value = match self.store.get(keys::THEME_PREFERENCE).await {
            Ok(Some(value)) => value,
            Ok(None) => return ThemePreference::default(),
            Err(err) => {
                warn!("Failed to read theme preference: {err:#}");
                return ThemePreference::default();
            }
        };

        value.parse().unwrap_or_else(|err| {
            warn!("Ignoring stored theme preference: {err}");
            ThemePreference::default()
        })
    }

    #[tracing::instrument(skip(self))]
    async fn set_preference(&self, preference: ThemePreference) -> anyhow::Result<()> {
        self.store
            .set(keys::THEME_PREFERENCE, preference.as_str())
            .await
            .context("Failed to store theme preference")?;
        debug!("theme preference stored");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn toggle(&self) -> anyhow::Result<ThemePreference> {
        let preference = self.preference().await.toggled();
        self.set_preference(preference).await?;
        Ok(preference)
    }
}
