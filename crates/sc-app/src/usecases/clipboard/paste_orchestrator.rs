//! Paste orchestration over the registered clipboard handlers.
//!
//! Every function here walks the handlers in registration order and only
//! involves a handler when the payload table carries an entry under its
//! name. Payload keys without a matching handler are ignored, and a payload
//! entry that does not decode for its handler is logged and skipped.

use std::collections::BTreeMap;

use sc_core::clipboard::{ClipboardOptions, ClipboardPayload, NamedHandler, PasteTarget};
use sc_core::ids::{FigureId, SheetId};
use sc_core::ports::SelectionPort;
use sc_core::zone::{union, union_all, Zone};
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of asking every involved handler where a paste lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteTargetResolution {
    /// The user's target, with the figure id map of every figure handler.
    pub target: PasteTarget,
    /// Union of every zone a handler reported, `None` if none did.
    pub zone: Option<Zone>,
    /// Reported zones in handler order, then each handler's own order.
    pub selected_zones: Vec<Zone>,
}

fn payloaded<'a>(
    handlers: &'a [NamedHandler],
    payload: &'a ClipboardPayload,
) -> impl Iterator<Item = (&'a NamedHandler, &'a serde_json::Value)> + 'a {
    handlers
        .iter()
        .filter_map(move |named| payload.get(&named.name).map(|content| (named, content)))
}

/// Hands each handler its own payload entry.
///
/// Returns the names of the handlers that pasted.
pub fn apply_clipboard_handlers_paste<'a>(
    handlers: &'a [NamedHandler],
    payload: &ClipboardPayload,
    target: &PasteTarget,
    options: &ClipboardOptions,
) -> Vec<&'a str> {
    let mut applied = Vec::new();
    for named in handlers {
        let Some(content) = payload.get(&named.name) else {
            continue;
        };
        match named.handler.paste(target, content, options) {
            Ok(()) => applied.push(named.name.as_str()),
            Err(err) => warn!(handler = %named.name, error = %err, "Skipping clipboard handler paste"),
        }
    }

    for name in payload.handler_names() {
        if !handlers.iter().any(|named| named.name == name) {
            debug!(handler = %name, "Ignoring payload entry without registered handler");
        }
    }
    applied
}

/// Folds every involved handler's paste target into one resolution.
pub fn get_paste_target_from_handlers(
    sheet_id: &SheetId,
    zones: &[Zone],
    payload: &ClipboardPayload,
    handlers: &[NamedHandler],
    options: &ClipboardOptions,
) -> PasteTargetResolution {
    let mut zone: Option<Zone> = None;
    let mut selected_zones = Vec::new();
    let mut figure_ids: BTreeMap<FigureId, FigureId> = BTreeMap::new();

    for (named, content) in payloaded(handlers, payload) {
        let handler_target = match named
            .handler
            .get_paste_target(sheet_id, zones, content, options)
        {
            Ok(target) => target,
            Err(err) => {
                warn!(handler = %named.name, error = %err, "Skipping clipboard handler paste target");
                continue;
            }
        };

        if let Some(handler_zone) = union_all(&handler_target.zones) {
            zone = Some(match zone {
                Some(current) => union(&current, &handler_zone),
                None => handler_zone,
            });
        }
        selected_zones.extend(handler_target.zones);
        figure_ids.extend(handler_target.figure_ids);
    }

    let mut target = PasteTarget::new(sheet_id.clone(), zones.to_vec());
    target.figure_ids = figure_ids;

    PasteTargetResolution {
        target,
        zone,
        selected_zones,
    }
}

/// Selects what was pasted, anchored where the copy began.
///
/// With no pasted zones the selection is only reset. With no source zone the
/// anchor falls back to the top-left of the pasted area.
pub fn select_pasted_zone(
    selection: &mut dyn SelectionPort,
    source_zones: &[Zone],
    pasted_zones: &[Zone],
) {
    selection.reset_default();

    let Some(pasted) = union_all(pasted_zones) else {
        return;
    };
    let anchor = source_zones
        .first()
        .map(Zone::top_left)
        .unwrap_or_else(|| pasted.top_left());
    selection.select_zone(anchor, pasted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use sc_core::clipboard::{
        CellClipboardHandler, ClipboardHandler, CopyMode, CopySelection, FigureClipboardHandler,
        Rect,
    };
    use sc_core::zone::CellPosition;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    mockall::mock! {
        Selection {}

        impl SelectionPort for Selection {
            fn reset_default(&mut self);
            fn select_zone(&mut self, anchor: CellPosition, zone: Zone);
        }
    }

    type Log = Arc<Mutex<Vec<String>>>;

    struct Values {
        name: &'static str,
        log: Log,
    }

    impl CellClipboardHandler for Values {
        type Content = Vec<Vec<String>>;

        fn copy(&self, _: &CopySelection, _: bool, _: CopyMode) -> Option<Self::Content> {
            None
        }

        fn paste_zone(
            &self,
            _sheet_id: &SheetId,
            col: u32,
            row: u32,
            _content: &Self::Content,
            _options: &ClipboardOptions,
        ) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}@{}", self.name, CellPosition { col, row }));
        }
    }

    struct Images;

    impl FigureClipboardHandler for Images {
        type Content = Vec<String>;

        fn copy(&self, _: &CopySelection) -> Option<Self::Content> {
            None
        }

        fn placement(&self, _: &SheetId, _: &FigureId) -> Option<Rect> {
            None
        }

        fn get_paste_target(
            &self,
            sheet_id: &SheetId,
            _target: &[Zone],
            content: &Self::Content,
            _options: &ClipboardOptions,
        ) -> PasteTarget {
            let mut target = PasteTarget::new(sheet_id.clone(), Vec::new());
            for id in content {
                target
                    .figure_ids
                    .insert(FigureId::from(id.as_str()), FigureId::from(format!("{id}-new")));
            }
            target
        }

        fn paste(&self, _: &PasteTarget, _: &Self::Content, _: &ClipboardOptions) {}
    }

    fn z(s: &str) -> Zone {
        s.parse().unwrap()
    }

    fn handlers(log: &Log) -> Vec<NamedHandler> {
        vec![
            NamedHandler {
                name: "cell".into(),
                handler: ClipboardHandler::cell(Values {
                    name: "cell",
                    log: log.clone(),
                }),
            },
            NamedHandler {
                name: "format".into(),
                handler: ClipboardHandler::cell(Values {
                    name: "format",
                    log: log.clone(),
                }),
            },
            NamedHandler {
                name: "image".into(),
                handler: ClipboardHandler::figure(Images),
            },
        ]
    }

    #[test]
    fn apply_only_reaches_handlers_with_payload() {
        let log = Log::default();
        let handlers = handlers(&log);
        let mut payload = ClipboardPayload::for_sheet(SheetId::from("s1"), vec![z("A1")]);
        payload.insert("format", json!([["bold"]]));
        payload.insert("remote-only", json!({"anything": true}));

        let target = PasteTarget::new(SheetId::from("s1"), vec![z("B2")]);
        let applied =
            apply_clipboard_handlers_paste(&handlers, &payload, &target, &ClipboardOptions::default());

        assert_eq!(applied, vec!["format"]);
        assert_eq!(*log.lock().unwrap(), vec!["format@B2"]);
    }

    #[test]
    fn apply_skips_undecodable_entry_and_continues() {
        let log = Log::default();
        let handlers = handlers(&log);
        let mut payload = ClipboardPayload::new();
        payload.insert("cell", json!("not a grid"));
        payload.insert("format", json!([["x"]]));

        let target = PasteTarget::new(SheetId::from("s1"), vec![z("A1")]);
        let applied =
            apply_clipboard_handlers_paste(&handlers, &payload, &target, &ClipboardOptions::default());

        assert_eq!(applied, vec!["format"]);
        assert_eq!(*log.lock().unwrap(), vec!["format@A1"]);
    }

    #[test]
    fn paste_target_folds_zones_in_registration_order() {
        let log = Log::default();
        let handlers = handlers(&log);
        let mut payload = ClipboardPayload::new();
        // inserted out of registration order on purpose
        payload.insert("image", json!(["fig1"]));
        payload.insert("format", json!([["a"]]));
        payload.insert("cell", json!([["a", "b"]]));

        let resolution = get_paste_target_from_handlers(
            &SheetId::from("s1"),
            &[z("A1:D1")],
            &payload,
            &handlers,
            &ClipboardOptions::default(),
        );

        assert_eq!(
            resolution.selected_zones,
            vec![
                z("A1:B1"),
                z("C1:D1"),
                z("A1"),
                z("B1"),
                z("C1"),
                z("D1"),
            ]
        );
        assert_eq!(resolution.zone, Some(z("A1:D1")));
        assert_eq!(resolution.target.zones, vec![z("A1:D1")]);
        assert_eq!(
            resolution.target.figure_ids.get(&FigureId::from("fig1")),
            Some(&FigureId::from("fig1-new"))
        );
    }

    #[test]
    fn paste_target_without_contribution_has_no_zone() {
        let log = Log::default();
        let handlers = handlers(&log);
        let mut payload = ClipboardPayload::new();
        payload.insert("image", json!(["fig1"]));

        let resolution = get_paste_target_from_handlers(
            &SheetId::from("s1"),
            &[z("C3")],
            &payload,
            &handlers,
            &ClipboardOptions::default(),
        );

        assert_eq!(resolution.zone, None);
        assert!(resolution.selected_zones.is_empty());
        assert_eq!(resolution.target.figure_ids.len(), 1);
    }

    #[test]
    fn select_pasted_zone_anchors_at_first_source_zone() {
        let mut selection = MockSelection::new();
        let mut seq = mockall::Sequence::new();
        selection
            .expect_reset_default()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        selection
            .expect_select_zone()
            .with(eq(CellPosition { col: 1, row: 1 }), eq(z("D4:G9")))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        select_pasted_zone(&mut selection, &[z("B2:C3"), z("A1")], &[z("D4:E5"), z("F8:G9")]);
    }

    #[test]
    fn select_pasted_zone_with_nothing_pasted_only_resets() {
        let mut selection = MockSelection::new();
        selection.expect_reset_default().times(1).return_const(());
        selection.expect_select_zone().never();

        select_pasted_zone(&mut selection, &[z("A1")], &[]);
    }
}
