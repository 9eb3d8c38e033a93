use tracing::debug;

use sc_core::clipboard::{
    ClipboardPayload, ImageBlob, MimeType, OsClipboardContent, ParsedClipboardContent,
};
use sc_core::ports::OsClipboardParserPort;
use sc_core::settings::ClipboardSettings;

use super::html::{start_tags, StartTag};

/// Extracts text, native payload and image from raw clipboard parts.
#[derive(Debug, Clone, Default)]
pub struct OsClipboardParser {
    settings: ClipboardSettings,
}

impl OsClipboardParser {
    pub fn new(settings: ClipboardSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClipboardSettings {
        &self.settings
    }

    /// Never fails: foreign or malformed HTML yields no payload and the
    /// caller falls back to the image or the text.
    pub fn parse(&self, content: &OsClipboardContent) -> ParsedClipboardContent {
        let data = content
            .text_of(&MimeType::text_html())
            .and_then(|html| self.structured_payload(&html));

        let text = content
            .text_of(&MimeType::text_plain())
            .map(|text| text.into_owned())
            .unwrap_or_default();

        let image = if text.trim().is_empty() {
            self.first_image(content)
        } else {
            None
        };

        ParsedClipboardContent { text, data, image }
    }

    fn structured_payload(&self, html: &str) -> Option<ClipboardPayload> {
        let tags = start_tags(html);

        if self.is_foreign(&tags) {
            debug!("Clipboard HTML comes from another application");
            return None;
        }

        let raw = tags
            .iter()
            .find_map(|tag| tag.attribute(&self.settings.data_attribute))?;
        match serde_json::from_str::<ClipboardPayload>(raw) {
            Ok(payload) => Some(payload),
            Err(err) => {
                debug!(error = %err, "Ignoring malformed clipboard payload");
                None
            }
        }
    }

    /// A marker in any attribute value of the `<html>` root, or a marker
    /// naming an element, flags the HTML as foreign. Fragments without an
    /// `<html>` tag have an implied root with no attributes. The payload
    /// attribute itself is not inspected.
    fn is_foreign(&self, tags: &[StartTag]) -> bool {
        let markers = &self.settings.foreign_markers;
        if markers.is_empty() {
            return false;
        }

        let root = tags.iter().find(|tag| tag.name == "html");
        let root_flagged = root.is_some_and(|root| {
            root.attributes
                .iter()
                .filter(|(name, _)| !name.eq_ignore_ascii_case(&self.settings.data_attribute))
                .any(|(_, value)| markers.iter().any(|marker| value.contains(marker.as_str())))
        });

        root_flagged
            || tags
                .iter()
                .any(|tag| markers.iter().any(|marker| tag.name.eq_ignore_ascii_case(marker)))
    }

    fn first_image(&self, content: &OsClipboardContent) -> Option<ImageBlob> {
        self.settings.image_mime_types.iter().find_map(|mime| {
            content.get(mime).map(|data| ImageBlob {
                mime: mime.clone(),
                bytes: data.as_bytes().to_vec(),
            })
        })
    }
}

impl OsClipboardParserPort for OsClipboardParser {
    fn parse(&self, content: &OsClipboardContent) -> ParsedClipboardContent {
        OsClipboardParser::parse(self, content)
    }
}

/// Parses with the default settings.
pub fn parse_os_clipboard_content(content: &OsClipboardContent) -> ParsedClipboardContent {
    OsClipboardParser::default().parse(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::ids::SheetId;

    fn html(html: &str) -> OsClipboardContent {
        OsClipboardContent::new().with_html(html)
    }

    #[test]
    fn native_payload_is_extracted() {
        let parsed =
            parse_os_clipboard_content(&html(r#"<div data-osheet-clipboard='{"sheetId":"s1"}'>"#));

        let data = parsed.data.expect("structured payload");
        assert_eq!(data.sheet_id, Some(SheetId::from("s1")));
        assert!(data.is_empty());
        assert_eq!(parsed.text, "");
        assert_eq!(parsed.image, None);
    }

    #[test]
    fn escaped_payload_is_decoded() {
        let parsed = parse_os_clipboard_content(&html(
            r#"<meta charset="utf-8"><div data-osheet-clipboard="{&quot;sheetId&quot;:&quot;s2&quot;,&quot;cell&quot;:[[1]]}">1</div>"#,
        ));

        let data = parsed.data.expect("structured payload");
        assert_eq!(data.sheet_id, Some(SheetId::from("s2")));
        assert_eq!(data.get("cell"), Some(&serde_json::json!([[1]])));
    }

    #[test]
    fn foreign_root_attribute_discards_payload() {
        let parsed = parse_os_clipboard_content(&html(
            r#"<html xmlns:x="urn:schemas-microsoft-com:office:excel"><body><div data-osheet-clipboard='{"sheetId":"s1"}'></div></body></html>"#,
        ));
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn foreign_root_after_meta_prefix_discards_payload() {
        let parsed = parse_os_clipboard_content(&html(
            r#"<meta charset="utf-8"><html xmlns:x="urn:schemas-microsoft-com:office:excel"><body><div data-osheet-clipboard='{"sheetId":"s1"}'>1</div></body></html>"#,
        ));
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn fragment_without_html_root_checks_no_attributes() {
        let parsed = parse_os_clipboard_content(&html(
            r#"<meta name="generator" content="urn:schemas-microsoft-com:office:excel"><div data-osheet-clipboard='{"sheetId":"s1"}'></div>"#,
        ));
        assert!(parsed.data.is_some());
    }

    #[test]
    fn foreign_marker_element_discards_payload() {
        let parsed = parse_os_clipboard_content(&html(
            r#"<meta charset="utf-8"><google-sheets-html-origin><div data-osheet-clipboard='{"sheetId":"s1"}'></div>"#,
        ));
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn marker_inside_own_payload_is_not_foreign() {
        let parsed = parse_os_clipboard_content(&html(
            r#"<div data-osheet-clipboard='{"sheetId":"s1","cell":[["google-sheets-html-origin"]]}'>"#,
        ));
        assert!(parsed.data.is_some());
    }

    #[test]
    fn malformed_payload_degrades_to_none() {
        let parsed = parse_os_clipboard_content(
            &html(r#"<div data-osheet-clipboard='{"sheetId":'>"#).with_text("a\tb"),
        );
        assert_eq!(parsed.data, None);
        assert_eq!(parsed.text, "a\tb");
    }

    #[test]
    fn image_is_only_read_without_text() {
        let content = OsClipboardContent::new()
            .with_bytes(MimeType::from("image/png"), vec![1, 2])
            .with_bytes(MimeType::from("image/gif"), vec![3]);

        let parsed = parse_os_clipboard_content(&content);
        assert_eq!(
            parsed.image,
            Some(ImageBlob {
                mime: MimeType::from("image/gif"),
                bytes: vec![3],
            })
        );

        let parsed = parse_os_clipboard_content(&content.with_text("caption"));
        assert_eq!(parsed.image, None);
        assert_eq!(parsed.text, "caption");
    }

    #[test]
    fn whitespace_text_still_allows_image() {
        let content = OsClipboardContent::new()
            .with_text(" \n")
            .with_bytes(MimeType::from("image/webp"), vec![9]);

        let parsed = parse_os_clipboard_content(&content);
        assert_eq!(parsed.text, " \n");
        assert_eq!(parsed.image.map(|image| image.mime), Some(MimeType::from("image/webp")));
    }

    #[test]
    fn configured_attribute_and_image_types_are_used() {
        let settings = ClipboardSettings {
            data_attribute: "data-sheet".into(),
            foreign_markers: Vec::new(),
            image_mime_types: vec![MimeType::from("image/png")],
        };
        let parser = OsClipboardParser::new(settings);
        let content = OsClipboardContent::new()
            .with_html(r#"<div data-sheet='{"sheetId":"s9"}'>"#)
            .with_bytes(MimeType::from("image/gif"), vec![1]);

        let parsed = parser.parse(&content);
        assert_eq!(parsed.data.and_then(|d| d.sheet_id), Some(SheetId::from("s9")));
        assert_eq!(parsed.image, None);
    }
}
