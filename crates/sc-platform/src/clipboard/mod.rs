mod html;
mod parser;
mod platform;

pub use parser::{parse_os_clipboard_content, OsClipboardParser};
pub use platform::PlatformClipboardReader;
