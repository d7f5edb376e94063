//! DOM overlay: score, title card and game-over card
//!
//! Elements are looked up by id on every update; a missing element is
//! skipped so the page layout can drop any of them. Ids used (see
//! `index.html`):
//! - `title-card` with `title-best` inside
//! - `hud-score`
//! - `game-over` with `final-score`, `final-best` and `restart-hint` inside
//!
//! The entry point also needs `canvas` and hides `loading` once started.

use web_sys::Document;

use crate::presenter::restart_hint;

/// Text the overlay currently shows, to avoid touching the DOM every frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudView {
    Title { best: u32 },
    Playing { score: u32 },
    GameOver { score: u32, best: u32, waiting: bool },
}

pub struct Hud {
    document: Option<Document>,
    shown: Option<HudView>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        if document.is_none() {
            log::warn!("No document - HUD disabled");
        }
        Self {
            document,
            shown: None,
        }
    }

    pub fn show(&mut self, view: HudView) {
        if self.shown.as_ref() == Some(&view) {
            return;
        }
        if let Some(document) = &self.document {
            Self::apply(document, &view);
        }
        self.shown = Some(view);
    }

    fn apply(document: &Document, view: &HudView) {
        let set_text = |id: &str, text: &str| {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        };
        let set_visible = |id: &str, visible: bool| {
            if let Some(el) = document.get_element_by_id(id) {
                let _ = el.set_attribute("class", if visible { "overlay" } else { "overlay hidden" });
            }
        };

        match view {
            HudView::Title { best } => {
                set_visible("title-card", true);
                set_visible("hud-score", false);
                set_visible("game-over", false);
                set_text("title-best", &best.to_string());
            }
            HudView::Playing { score } => {
                set_visible("title-card", false);
                set_visible("hud-score", true);
                set_visible("game-over", false);
                set_text("hud-score", &score.to_string());
            }
            HudView::GameOver {
                score,
                best,
                waiting,
            } => {
                set_visible("hud-score", false);
                set_visible("game-over", true);
                set_text("final-score", &score.to_string());
                set_text("final-best", &best.to_string());
                set_text("restart-hint", restart_hint(*waiting));
            }
        }
    }
}
