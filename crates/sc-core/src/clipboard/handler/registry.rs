use std::sync::Arc;

use super::{CellClipboardHandler, ClipboardHandler, FigureClipboardHandler, HandlerKind};
use crate::clipboard::ClipboardPayload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("handler key `{0}` is reserved for a shared payload field")]
    ReservedKey(String),
}

fn handler_key(key: impl Into<String>) -> Result<String, RegistryError> {
    let key = key.into();
    if ClipboardPayload::is_reserved_key(&key) {
        return Err(RegistryError::ReservedKey(key));
    }
    Ok(key)
}

/// Ordered collection keyed by stable string ids.
///
/// Iteration follows registration order. Registering an existing key
/// replaces its value without moving it.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>, value: T) -> &mut Self {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(key = %key, "replacing registry entry");
                entry.1 = value;
            }
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a fresh handler for one operation.
pub type HandlerFactory = Arc<dyn Fn() -> ClipboardHandler + Send + Sync>;

/// A handler together with the key its payload is stored under.
#[derive(Debug)]
pub struct NamedHandler {
    pub name: String,
    pub handler: ClipboardHandler,
}

/// The two handler families, each in registration order.
///
/// Feature modules register their handler once at start-up; every copy or
/// paste then instantiates its own handlers from the factories.
#[derive(Clone, Default)]
pub struct ClipboardHandlerRegistry {
    cell: Registry<HandlerFactory>,
    figure: Registry<HandlerFactory>,
}

impl std::fmt::Debug for ClipboardHandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardHandlerRegistry")
            .field("cell", &self.cell.keys().collect::<Vec<_>>())
            .field("figure", &self.figure.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ClipboardHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when `key` names a shared payload field, since the handler's
    /// entry would be flattened onto it.
    pub fn register_cell<H, F>(
        &mut self,
        key: impl Into<String>,
        factory: F,
    ) -> Result<&mut Self, RegistryError>
    where
        H: CellClipboardHandler + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let key = handler_key(key)?;
        self.cell
            .add(key, Arc::new(move || ClipboardHandler::cell(factory())));
        Ok(self)
    }

    pub fn register_figure<H, F>(
        &mut self,
        key: impl Into<String>,
        factory: F,
    ) -> Result<&mut Self, RegistryError>
    where
        H: FigureClipboardHandler + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let key = handler_key(key)?;
        self.figure
            .add(key, Arc::new(move || ClipboardHandler::figure(factory())));
        Ok(self)
    }

    pub fn family(&self, kind: HandlerKind) -> &Registry<HandlerFactory> {
        match kind {
            HandlerKind::Cell => &self.cell,
            HandlerKind::Figure => &self.figure,
        }
    }

    /// Fresh handlers of one family, in registration order.
    pub fn instantiate(&self, kind: HandlerKind) -> Vec<NamedHandler> {
        self.family(kind)
            .iter()
            .map(|(name, factory)| NamedHandler {
                name: name.to_string(),
                handler: factory(),
            })
            .collect()
    }

    /// Cell handlers followed by figure handlers.
    pub fn instantiate_all(&self) -> Vec<NamedHandler> {
        let mut handlers = self.instantiate(HandlerKind::Cell);
        handlers.extend(self.instantiate(HandlerKind::Figure));
        handlers
    }
}
