//! Browse command - the interactive reader

use crate::{
    api::BookApi,
    config::ReadrConfig,
    prefs::{FilePreferences, MemoryPreferences, PreferenceStore},
    reader::platform_preference,
    ui::ReaderApp,
    ReadrError,
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, ReadrError>;

/// Open the preference store, falling back to memory if there is no data dir
fn open_preferences() -> Box<dyn PreferenceStore> {
    match FilePreferences::open_default() {
        Ok(prefs) => Box::new(prefs),
        Err(e) => {
            tracing::warn!("Theme choice will not persist: {e}");
            Box::new(MemoryPreferences::new(None))
        }
    }
}

/// Run the interactive reader against `api`
///
/// # Errors
/// Returns an error if the terminal cannot be set up or driven.
pub fn execute(api: Arc<dyn BookApi>, config: &ReadrConfig) -> Result<()> {
    let app = ReaderApp::new(
        api,
        open_preferences(),
        platform_preference(),
        config.message_ttl(),
    );
    app.run()?;
    Ok(())
}
