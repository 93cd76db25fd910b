use leptos::prelude::*;

use super::state::AppState;

/// Which panels are shown. Exactly one mode is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Split,
    ChatOnly,
    PdfOnly,
}

/// Presentation of a single panel under a view mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVisibility {
    Normal,
    Expanded,
    Hidden,
}

impl PanelVisibility {
    pub fn is_visible(&self) -> bool {
        !matches!(self, PanelVisibility::Hidden)
    }

    pub fn class(&self) -> &'static str {
        match self {
            PanelVisibility::Normal => "flex flex-col w-1/2 min-w-0",
            PanelVisibility::Expanded => "flex flex-col w-full min-w-0",
            PanelVisibility::Hidden => "hidden",
        }
    }
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Split, ViewMode::ChatOnly, ViewMode::PdfOnly];

    pub fn chat_panel(&self) -> PanelVisibility {
        match self {
            ViewMode::Split => PanelVisibility::Normal,
            ViewMode::ChatOnly => PanelVisibility::Expanded,
            ViewMode::PdfOnly => PanelVisibility::Hidden,
        }
    }

    pub fn pdf_panel(&self) -> PanelVisibility {
        match self {
            ViewMode::Split => PanelVisibility::Normal,
            ViewMode::ChatOnly => PanelVisibility::Hidden,
            ViewMode::PdfOnly => PanelVisibility::Expanded,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Split => "Split",
            ViewMode::ChatOnly => "Chat",
            ViewMode::PdfOnly => "PDF",
        }
    }

    /// Transcript line logged when the mode is selected.
    pub fn announcement(&self) -> &'static str {
        match self {
            ViewMode::Split => "⚌ Split view activated",
            ViewMode::ChatOnly => "💬 Chat-only mode activated",
            ViewMode::PdfOnly => "📄 PDF-only mode activated",
        }
    }
}

impl AppState {
    pub fn set_view_mode(&self, mode: ViewMode) {
        self.view_mode.set(mode);
        tracing::debug!(mode = mode.label(), "View mode changed");
        self.push_system(mode.announcement());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_default() {
        assert_eq!(ViewMode::default(), ViewMode::Split);
    }

    #[test]
    fn test_split_shows_both_panels() {
        assert_eq!(ViewMode::Split.chat_panel(), PanelVisibility::Normal);
        assert_eq!(ViewMode::Split.pdf_panel(), PanelVisibility::Normal);
    }

    #[test]
    fn test_single_panel_modes() {
        assert_eq!(ViewMode::ChatOnly.chat_panel(), PanelVisibility::Expanded);
        assert!(!ViewMode::ChatOnly.pdf_panel().is_visible());

        assert_eq!(ViewMode::PdfOnly.pdf_panel(), PanelVisibility::Expanded);
        assert!(!ViewMode::PdfOnly.chat_panel().is_visible());
    }

    #[test]
    fn test_every_mode_shows_at_least_one_panel() {
        for mode in ViewMode::ALL {
            assert!(mode.chat_panel().is_visible() || mode.pdf_panel().is_visible());
            assert!(!mode.announcement().is_empty());
        }
    }

    #[test]
    fn test_panel_classes_unique() {
        assert_ne!(PanelVisibility::Normal.class(), PanelVisibility::Expanded.class());
        assert_eq!(PanelVisibility::Hidden.class(), "hidden");
    }
}
