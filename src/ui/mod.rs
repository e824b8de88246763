//! UI-Komponenten: Toolbar, Canvas, Tastatur, Dialoge.

mod canvas;
pub mod dialogs;
mod keyboard;
/// UI-Layer mit egui
///
/// Dünne Schicht: Widgets erzeugen nur `AppIntent`s, die Mutation
/// übernimmt der `AppController`.
pub mod status;
pub mod toolbar;

pub use canvas::CanvasView;
pub use dialogs::{handle_file_dialogs, show_notice, Notice, NoticeKind};
pub use keyboard::collect_keyboard_intents;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
