//! Datei-Dialoge und modale Fenster.

mod file_dialogs;
mod notice_dialog;

pub use file_dialogs::handle_file_dialogs;
pub use notice_dialog::{show_notice, Notice, NoticeKind};
