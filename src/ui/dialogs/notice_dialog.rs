//! Modaler Hinweis für abgelehnte Aktionen und Export-Ergebnisse.

use crate::core::SceneError;
use crate::render::ExportError;

/// Art des Hinweises (bestimmt den Fenstertitel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Ein anzuzeigender Hinweis.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Baut den Hinweistext aus einem Fehler des Controllers.
    pub fn from_error(error: &anyhow::Error) -> Self {
        if let Some(scene_error) = error.downcast_ref::<SceneError>() {
            let (kind, message) = match scene_error {
                SceneError::ProtectedEntity { .. } => (
                    NoticeKind::Info,
                    "Das Ego-Fahrzeug kann nicht gelöscht werden.".to_string(),
                ),
                SceneError::NotFound { vehicle_id } => (
                    NoticeKind::Warning,
                    format!("Fahrzeug {} ist nicht mehr vorhanden.", vehicle_id),
                ),
                SceneError::InvalidRole { .. } => (
                    NoticeKind::Warning,
                    "Es kann nur ein Ego-Fahrzeug geben.".to_string(),
                ),
            };
            return Self { kind, message };
        }

        if let Some(export_error) = error.downcast_ref::<ExportError>() {
            let message = match export_error {
                ExportError::UnsupportedFormat { .. } => {
                    "Bitte als .jpg, .jpeg oder .png speichern.".to_string()
                }
                ExportError::Io(e) => format!("Datei konnte nicht geschrieben werden:\n{}", e),
                ExportError::Encode(e) => format!("Bild konnte nicht kodiert werden:\n{}", e),
            };
            return Self {
                kind: NoticeKind::Error,
                message: format!("Export fehlgeschlagen. {}", message),
            };
        }

        Self {
            kind: NoticeKind::Error,
            message: format!("{:#}", error),
        }
    }

    /// Bestätigung nach erfolgreichem Export.
    pub fn export_succeeded(path: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: format!("Bild gespeichert:\n{}", path),
        }
    }

    fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Hinweis",
            NoticeKind::Warning => "Warnung",
            NoticeKind::Error => "Fehler",
        }
    }
}

/// Zeigt den aktuellen Hinweis als modales Fenster; "OK" schließt ihn.
pub fn show_notice(ctx: &egui::Context, notice: &mut Option<Notice>) {
    let Some(current) = notice.as_ref() else {
        return;
    };

    let mut close = false;
    egui::Window::new(current.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(&current.message);
                ui.add_space(10.0);

                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        });

    if close {
        *notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_ego_maps_to_info_notice() {
        let error = anyhow::Error::new(SceneError::ProtectedEntity { vehicle_id: 1 });

        let notice = Notice::from_error(&error);

        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.message.contains("Ego"));
    }

    #[test]
    fn export_error_behind_context_is_found() {
        let error = anyhow::Error::new(ExportError::UnsupportedFormat {
            extension: "gif".to_string(),
        })
        .context("Export nach /tmp/x.gif");

        let notice = Notice::from_error(&error);

        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.starts_with("Export fehlgeschlagen"));
    }

    #[test]
    fn unknown_error_uses_full_chain() {
        let error = anyhow::anyhow!("innen").context("außen");

        let notice = Notice::from_error(&error);

        assert_eq!(notice.message, "außen: innen");
    }
}
