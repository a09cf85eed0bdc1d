use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    Form,
    Packs,
    Learning,
    Checklist,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Form, Focus::Packs, Focus::Learning, Focus::Checklist];

    pub(in crate::tui_shell) fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub(in crate::tui_shell) fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum FormField {
    Name,
    Description,
}

/// One row of the packs pane: catalog packs first, then selected packs the
/// registry no longer lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum PackRow {
    Catalog(PackCatalogEntry),
    Unavailable(SelectedPack),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum EntryKind {
    Output,
    Error,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct StatusEntry {
    pub(in crate::tui_shell) ts: String,
    pub(in crate::tui_shell) kind: EntryKind,
    pub(in crate::tui_shell) text: String,
}

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) client: ApiClient,
    pub(in crate::tui_shell) view: ProjectView,
    pub(in crate::tui_shell) worker: Worker<ApiClient>,

    pub(in crate::tui_shell) focus: Focus,
    pub(in crate::tui_shell) form_field: FormField,
    pub(in crate::tui_shell) pack_row: usize,
    pub(in crate::tui_shell) learn_scroll: usize,
    pub(in crate::tui_shell) item_row: usize,

    pub(in crate::tui_shell) modal: Option<Modal>,
    pub(in crate::tui_shell) last_result: Option<StatusEntry>,

    // Set once the deletion notice has been shown; closing it quits.
    pub(in crate::tui_shell) closing: bool,
    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn pack_rows(&self) -> Vec<PackRow> {
        let mut rows: Vec<PackRow> = self
            .view
            .catalog()
            .iter()
            .cloned()
            .map(PackRow::Catalog)
            .collect();
        rows.extend(
            self.view
                .unavailable_packs()
                .into_iter()
                .map(PackRow::Unavailable),
        );
        rows
    }

    pub(in crate::tui_shell) fn selected_pack_row(&self) -> Option<PackRow> {
        self.pack_rows().into_iter().nth(self.pack_row)
    }

    pub(in crate::tui_shell) fn items(&self) -> &[ChecklistItem] {
        self.view
            .checklist()
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    pub(in crate::tui_shell) fn selected_item(&self) -> Option<&ChecklistItem> {
        self.items().get(self.item_row)
    }

    /// Keeps cursors inside their lists after a snapshot changes their length.
    pub(in crate::tui_shell) fn clamp_rows(&mut self) {
        let packs = self.pack_rows().len();
        self.pack_row = self.pack_row.min(packs.saturating_sub(1));
        let items = self.items().len();
        self.item_row = self.item_row.min(items.saturating_sub(1));
    }
}
