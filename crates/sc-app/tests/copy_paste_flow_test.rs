//! Copy/paste integration tests.
//!
//! These tests drive the copy and paste use cases through a registry of
//! handlers backed by an in-memory sheet.

use std::io::Write;
use std::sync::{Arc, Mutex, OnceLock};

use sc_app::{CopySelectionUseCase, PasteClipboardUseCase};
use sc_core::clipboard::{
    CellClipboardHandler, ClipboardHandlerRegistry, ClipboardOptions, ClipboardPayload, CopyMode,
    CopySelection,
};
use sc_core::ids::SheetId;
use sc_core::ports::SelectionPort;
use sc_core::zone::{CellPosition, Zone};
use sc_core::SparseGrid;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct SharedLogBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedLogBuffer {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            buffer: self.buffer.clone(),
        }
    }
}

struct SharedLogWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

static LOG_BUFFER: OnceLock<Arc<Mutex<Vec<u8>>>> = OnceLock::new();

fn init_test_tracing() -> Arc<Mutex<Vec<u8>>> {
    LOG_BUFFER
        .get_or_init(|| {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            let writer = SharedLogBuffer {
                buffer: buffer.clone(),
            };
            let subscriber = tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::new("warn"))
                .with_writer(writer)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .expect("set global tracing subscriber");
            buffer
        })
        .clone()
}

type Sheet = Arc<Mutex<SparseGrid<String>>>;

/// Copies and pastes raw cell values.
struct ValueHandler {
    sheet: Sheet,
}

impl CellClipboardHandler for ValueHandler {
    type Content = Vec<Vec<Option<String>>>;

    fn copy(&self, selection: &CopySelection, is_cut: bool, _mode: CopyMode) -> Option<Self::Content> {
        let zone = selection.zones.first()?;
        let mut sheet = self.sheet.lock().unwrap();
        let mut rows = Vec::new();
        for row in zone.top..=zone.bottom {
            let mut values = Vec::new();
            for col in zone.left..=zone.right {
                values.push(if is_cut {
                    sheet.delete(col, row)
                } else {
                    sheet.get(col, row).cloned()
                });
            }
            rows.push(values);
        }
        Some(rows)
    }

    fn paste_zone(
        &self,
        _sheet_id: &SheetId,
        col: u32,
        row: u32,
        content: &Self::Content,
        _options: &ClipboardOptions,
    ) {
        let mut sheet = self.sheet.lock().unwrap();
        for (dy, values) in content.iter().enumerate() {
            for (dx, value) in values.iter().enumerate() {
                sheet.set(col + dx as u32, row + dy as u32, value.clone());
            }
        }
    }
}

#[derive(Default)]
struct RecordingSelection {
    calls: Vec<String>,
}

impl SelectionPort for RecordingSelection {
    fn reset_default(&mut self) {
        self.calls.push("reset".into());
    }

    fn select_zone(&mut self, anchor: CellPosition, zone: Zone) {
        self.calls.push(format!("select {zone} at {anchor}"));
    }
}

fn z(s: &str) -> Zone {
    s.parse().unwrap()
}

fn sheet_with(cells: &[(&str, &str)]) -> Sheet {
    let mut grid = SparseGrid::new(26, 100);
    for (at, value) in cells {
        let cell = z(at);
        grid.set(cell.left, cell.top, Some(value.to_string()));
    }
    Arc::new(Mutex::new(grid))
}

fn registry(sheet: &Sheet) -> Arc<ClipboardHandlerRegistry> {
    let sheet = sheet.clone();
    let mut registry = ClipboardHandlerRegistry::new();
    registry
        .register_cell("value", move || ValueHandler {
            sheet: sheet.clone(),
        })
        .unwrap();
    Arc::new(registry)
}

fn value_at(sheet: &Sheet, at: &str) -> Option<String> {
    let cell = z(at);
    sheet.lock().unwrap().get(cell.left, cell.top).cloned()
}

#[test]
fn copied_block_fills_larger_target() {
    let sheet = sheet_with(&[("A1", "a"), ("B1", "b"), ("A2", "c"), ("B2", "d")]);
    let registry = registry(&sheet);
    let sheet_id = SheetId::from("s1");

    let copied = CopySelectionUseCase::new(registry.clone()).execute(
        &CopySelection::cells(sheet_id.clone(), vec![z("A1:B2")]),
        false,
        CopyMode::CopyPaste,
    );

    let mut selection = RecordingSelection::default();
    let resolution = PasteClipboardUseCase::new(registry).execute(
        &sheet_id,
        &[z("D4:G7")],
        &copied.payload,
        &ClipboardOptions::default().selecting_target(),
        &mut selection,
    );

    assert_eq!(resolution.selected_zones.len(), 4);
    assert_eq!(resolution.zone, Some(z("D4:G7")));
    assert_eq!(value_at(&sheet, "D4").as_deref(), Some("a"));
    assert_eq!(value_at(&sheet, "G4").as_deref(), Some("b"));
    assert_eq!(value_at(&sheet, "F7").as_deref(), Some("c"));
    assert_eq!(value_at(&sheet, "G7").as_deref(), Some("d"));
    assert_eq!(selection.calls, vec!["reset", "select D4:G7 at D4"]);
}

#[test]
fn cut_then_paste_moves_values() {
    let sheet = sheet_with(&[("A1", "x"), ("A2", "y")]);
    let registry = registry(&sheet);
    let sheet_id = SheetId::from("s1");

    let copied = CopySelectionUseCase::new(registry.clone()).execute(
        &CopySelection::cells(sheet_id.clone(), vec![z("A1:A2")]),
        true,
        CopyMode::CopyPaste,
    );
    assert!(value_at(&sheet, "A1").is_none());

    let mut selection = RecordingSelection::default();
    PasteClipboardUseCase::new(registry).execute(
        &sheet_id,
        &[z("C1")],
        &copied.payload,
        &ClipboardOptions::cut(),
        &mut selection,
    );

    assert_eq!(value_at(&sheet, "C1").as_deref(), Some("x"));
    assert_eq!(value_at(&sheet, "C2").as_deref(), Some("y"));
    assert_eq!(sheet.lock().unwrap().len(), 2);
}

#[test]
fn several_targets_each_receive_the_block() {
    let sheet = sheet_with(&[("A1", "v")]);
    let registry = registry(&sheet);
    let sheet_id = SheetId::from("s1");

    let copied = CopySelectionUseCase::new(registry.clone()).execute(
        &CopySelection::cells(sheet_id.clone(), vec![z("A1")]),
        false,
        CopyMode::CopyPaste,
    );

    let mut selection = RecordingSelection::default();
    PasteClipboardUseCase::new(registry).execute(
        &sheet_id,
        &[z("C3:C4"), z("E1")],
        &copied.payload,
        &ClipboardOptions::default(),
        &mut selection,
    );

    for at in ["C3", "C4", "E1"] {
        assert_eq!(value_at(&sheet, at).as_deref(), Some("v"), "{at}");
    }
    assert!(selection.calls.is_empty());
}

#[test]
fn foreign_payload_entry_is_logged_and_skipped() {
    let logs = init_test_tracing();
    let sheet = sheet_with(&[]);
    let registry = registry(&sheet);

    let payload: ClipboardPayload =
        serde_json::from_value(json!({"sheetId": "remote", "value": {"not": "a grid"}})).unwrap();

    let mut selection = RecordingSelection::default();
    let resolution = PasteClipboardUseCase::new(registry).execute(
        &SheetId::from("s1"),
        &[z("A1")],
        &payload,
        &ClipboardOptions::default(),
        &mut selection,
    );

    assert_eq!(resolution.zone, None);
    assert!(sheet.lock().unwrap().is_empty());
    let output = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
    assert!(output.contains("Skipping clipboard handler"), "{output}");
}
