use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::console::{
    EMPTY_CHECKLIST_HINT, NO_SOURCE_URL, ProjectView, domain_counts, evidence_preview,
};
use crate::model::{ChecklistItem, PackCatalogEntry, PackKey, SelectedPack};
use crate::remote::{ApiClient, ReportFormat};
use crate::tui::TuiRunOptions;

use super::modal::{self, Modal, PendingAction, TextInputAction};
use super::style::{locked, severity_style, status_style};
use super::worker::Worker;

mod actions;
mod event_loop;
mod lifecycle;
mod render;
mod runtime;
mod state;
mod time_utils;

pub(super) use self::runtime::run;
pub(super) use self::state::App;
use self::state::{EntryKind, Focus, FormField, PackRow, StatusEntry};
use self::time_utils::{fmt_since, fmt_ts_ui, now_ts};
