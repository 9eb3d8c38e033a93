//! Clipboard handlers: one stateless strategy per kind of copyable content.
//!
//! Handlers come in two families sharing the copy / paste-target / paste
//! surface:
//!
//! - [`CellClipboardHandler`]: content shaped like a block of cells, tiled or
//!   stamped over the paste target;
//! - [`FigureClipboardHandler`]: floating objects placed over the sheet.
//!
//! Both are typed over their own `Content`. [`ClipboardHandler`] erases that
//! type to the JSON value stored in the [`ClipboardPayload`] table so the
//! orchestrator can drive any mix of handlers in registration order.
//!
//! [`ClipboardPayload`]: crate::clipboard::ClipboardPayload

mod cell;
mod figure;
mod registry;

pub use cell::CellClipboardHandler;
pub use figure::FigureClipboardHandler;
pub use registry::{ClipboardHandlerRegistry, HandlerFactory, NamedHandler, Registry, RegistryError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clipboard::{ClipboardOptions, CopyMode, CopySelection, PasteTarget, Rect};
use crate::ids::SheetId;
use crate::zone::Zone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    Cell,
    Figure,
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("failed to encode copied content: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("clipboard payload does not match the handler content: {0}")]
    Decode(#[source] serde_json::Error),
}

fn encode<T: Serialize>(content: &T) -> Result<Value, PayloadError> {
    serde_json::to_value(content).map_err(PayloadError::Encode)
}

fn decode<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T, PayloadError> {
    T::deserialize(value).map_err(PayloadError::Decode)
}

trait ErasedCellHandler: Send + Sync {
    fn copy(
        &self,
        selection: &CopySelection,
        is_cut: bool,
        mode: CopyMode,
    ) -> Result<Option<Value>, PayloadError>;

    fn get_paste_target(
        &self,
        sheet_id: &SheetId,
        target: &[Zone],
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<PasteTarget, PayloadError>;

    fn paste(
        &self,
        target: &PasteTarget,
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<(), PayloadError>;
}

impl<H: CellClipboardHandler> ErasedCellHandler for H {
    fn copy(
        &self,
        selection: &CopySelection,
        is_cut: bool,
        mode: CopyMode,
    ) -> Result<Option<Value>, PayloadError> {
        CellClipboardHandler::copy(self, selection, is_cut, mode)
            .map(|content| encode(&content))
            .transpose()
    }

    fn get_paste_target(
        &self,
        sheet_id: &SheetId,
        target: &[Zone],
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<PasteTarget, PayloadError> {
        let content: H::Content = decode(content)?;
        Ok(CellClipboardHandler::get_paste_target(
            self, sheet_id, target, &content, options,
        ))
    }

    fn paste(
        &self,
        target: &PasteTarget,
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<(), PayloadError> {
        let content: H::Content = decode(content)?;
        CellClipboardHandler::paste(self, target, &content, options);
        Ok(())
    }
}

trait ErasedFigureHandler: Send + Sync {
    fn copy(&self, selection: &CopySelection) -> Result<Option<Value>, PayloadError>;

    fn copy_rect(&self, selection: &CopySelection) -> Option<Rect>;

    fn get_paste_target(
        &self,
        sheet_id: &SheetId,
        target: &[Zone],
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<PasteTarget, PayloadError>;

    fn paste(
        &self,
        target: &PasteTarget,
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<(), PayloadError>;
}

impl<H: FigureClipboardHandler> ErasedFigureHandler for H {
    fn copy(&self, selection: &CopySelection) -> Result<Option<Value>, PayloadError> {
        FigureClipboardHandler::copy(self, selection)
            .map(|content| encode(&content))
            .transpose()
    }

    fn copy_rect(&self, selection: &CopySelection) -> Option<Rect> {
        FigureClipboardHandler::copy_rect(self, selection)
    }

    fn get_paste_target(
        &self,
        sheet_id: &SheetId,
        target: &[Zone],
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<PasteTarget, PayloadError> {
        let content: H::Content = decode(content)?;
        Ok(FigureClipboardHandler::get_paste_target(
            self, sheet_id, target, &content, options,
        ))
    }

    fn paste(
        &self,
        target: &PasteTarget,
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<(), PayloadError> {
        let content: H::Content = decode(content)?;
        FigureClipboardHandler::paste(self, target, &content, options);
        Ok(())
    }
}

enum Variant {
    Cell(Box<dyn ErasedCellHandler>),
    Figure(Box<dyn ErasedFigureHandler>),
}

/// A cell- or figure-shaped handler working on JSON payload values.
pub struct ClipboardHandler {
    variant: Variant,
}

impl std::fmt::Debug for ClipboardHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardHandler")
            .field("kind", &self.kind())
            .finish_non_exhaustive()
    }
}

impl ClipboardHandler {
    pub fn cell<H: CellClipboardHandler + 'static>(handler: H) -> Self {
        Self {
            variant: Variant::Cell(Box::new(handler)),
        }
    }

    pub fn figure<H: FigureClipboardHandler + 'static>(handler: H) -> Self {
        Self {
            variant: Variant::Figure(Box::new(handler)),
        }
    }

    pub fn kind(&self) -> HandlerKind {
        match self.variant {
            Variant::Cell(_) => HandlerKind::Cell,
            Variant::Figure(_) => HandlerKind::Figure,
        }
    }

    /// Copies the selection. `Ok(None)` is "nothing to contribute".
    ///
    /// Figure handlers ignore `is_cut` and `mode`.
    pub fn copy(
        &self,
        selection: &CopySelection,
        is_cut: bool,
        mode: CopyMode,
    ) -> Result<Option<Value>, PayloadError> {
        match &self.variant {
            Variant::Cell(handler) => handler.copy(selection, is_cut, mode),
            Variant::Figure(handler) => handler.copy(selection),
        }
    }

    /// Bounding rectangle of the copied figures; always `None` for cell
    /// handlers.
    pub fn copy_rect(&self, selection: &CopySelection) -> Option<Rect> {
        match &self.variant {
            Variant::Cell(_) => None,
            Variant::Figure(handler) => handler.copy_rect(selection),
        }
    }

    pub fn get_paste_target(
        &self,
        sheet_id: &SheetId,
        target: &[Zone],
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<PasteTarget, PayloadError> {
        match &self.variant {
            Variant::Cell(handler) => handler.get_paste_target(sheet_id, target, content, options),
            Variant::Figure(handler) => {
                handler.get_paste_target(sheet_id, target, content, options)
            }
        }
    }

    pub fn paste(
        &self,
        target: &PasteTarget,
        content: &Value,
        options: &ClipboardOptions,
    ) -> Result<(), PayloadError> {
        match &self.variant {
            Variant::Cell(handler) => handler.paste(target, content, options),
            Variant::Figure(handler) => handler.paste(target, content, options),
        }
    }
}
