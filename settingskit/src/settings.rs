use std::sync::Arc;

use settingskit_model::{Schema, SettingsDefinition};
use settingskit_storage::SettingsStore;

use crate::{SettingsEngine, SettingsResult, UriPattern, current_settings};

/// A concrete settings type: a static schema plus accessors over an engine.
///
/// Usually generated with [`declare_settings!`](crate::declare_settings).
/// Hand-written implementations must keep every accessor's key equal to the
/// matching `SCHEMA` key.
pub trait Settings: Sized + 'static {
    /// The declared settings, in declaration order.
    const SCHEMA: &'static [SettingsDefinition];

    fn from_engine(engine: Arc<SettingsEngine>) -> Self;

    fn engine(&self) -> &Arc<SettingsEngine>;

    /// Runs once, right after construction by [`create`](Self::create).
    ///
    /// The default publishes this instance as the current settings. An
    /// override (to seed defaults, say) must still call
    /// [`SettingsEngine::publish_current`].
    fn initialize(&self) {
        self.engine().publish_current();
    }

    /// Pattern used to validate `Uri` settings of this type.
    fn uri_pattern() -> UriPattern {
        UriPattern::default()
    }

    /// Builds the engine over `store`, constructs the type and initializes it.
    fn create(store: impl SettingsStore + 'static) -> SettingsResult<Self> {
        let engine = SettingsEngine::new(Schema::new(Self::SCHEMA), store)?
            .with_uri_pattern(Self::uri_pattern())
            .owned_by::<Self>();
        let settings = Self::from_engine(Arc::new(engine));
        settings.initialize();
        Ok(settings)
    }

    /// The current settings as this type, if the published engine was built
    /// by this type's [`create`](Self::create). Another type with an identical
    /// schema does not qualify.
    fn current() -> Option<Self> {
        current_settings()
            .filter(|engine| engine.is_owned_by::<Self>())
            .map(Self::from_engine)
    }

    fn schema(&self) -> Schema {
        Schema::new(Self::SCHEMA)
    }
}

/// Two-way text binding by property name, for renderers that only know keys.
pub trait Bindable {
    /// The property's value as text, or `None` for an unknown key.
    fn read_text(&self, key: &str) -> Option<String>;

    /// Writes `text` through the property's setter. Returns `false` for an
    /// unknown key or when the value was rejected.
    fn write_text(&self, key: &str, text: &str) -> bool;
}
