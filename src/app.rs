use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::cli::Cli;
use crate::protein::{calculate_batch, Ptm, SequenceReport};
use crate::report::{build_table, export_csv, DEFAULT_EXPORT_FILE};
use crate::sequence::{gather_sequences, InputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sequence,
    Ptms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

pub struct App {
    /// Manually entered sequence
    pub input: String,
    /// Loaded sequence file, takes priority over `input`
    pub file: Option<PathBuf>,
    pub format: Option<InputFormat>,
    pub ptm_cursor: usize,
    /// Selected modifications in the order they were picked
    pub selected_ptms: Vec<Ptm>,
    pub reports: Vec<SequenceReport>,
    pub focus: Focus,
    pub status: Option<StatusMessage>,
    pub export_path: PathBuf,
    pub results_scroll: u16,
}

impl App {
    pub fn new() -> App {
        debug!("Creating new App instance");
        App {
            input: String::new(),
            file: None,
            format: None,
            ptm_cursor: 0,
            selected_ptms: Vec::new(),
            reports: Vec::new(),
            focus: Focus::Sequence,
            status: None,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            results_scroll: 0,
        }
    }

    pub fn from_cli(cli: &Cli) -> App {
        let mut app = App::new();
        app.input = cli.sequence.clone().unwrap_or_default();
        app.file = cli.file.clone();
        app.format = cli.format.input_format();
        app.selected_ptms = cli.selected_ptms();
        app.export_path = cli.export_path();
        info!(
            "App configured: file={:?}, {} PTMs preselected, export to {:?}",
            app.file,
            app.selected_ptms.len(),
            app.export_path
        );
        app
    }

    pub fn on_key(&mut self, c: char) {
        match self.focus {
            Focus::Sequence => self.input.push(c),
            Focus::Ptms if c == ' ' => self.toggle_current_ptm(),
            Focus::Ptms => {}
        }
    }

    pub fn on_backspace(&mut self) {
        if self.focus == Focus::Sequence {
            self.input.pop();
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sequence => Focus::Ptms,
            Focus::Ptms => Focus::Sequence,
        };
        debug!("Focus moved to {:?}", self.focus);
    }

    pub fn next_ptm(&mut self) {
        self.ptm_cursor = (self.ptm_cursor + 1) % Ptm::ALL.len();
    }

    pub fn prev_ptm(&mut self) {
        self.ptm_cursor = (self.ptm_cursor + Ptm::ALL.len() - 1) % Ptm::ALL.len();
    }

    pub fn is_selected(&self, ptm: Ptm) -> bool {
        self.selected_ptms.contains(&ptm)
    }

    pub fn toggle_current_ptm(&mut self) {
        let ptm = Ptm::ALL[self.ptm_cursor];
        if let Some(position) = self.selected_ptms.iter().position(|&p| p == ptm) {
            self.selected_ptms.remove(position);
            debug!("Deselected PTM {ptm}");
        } else {
            self.selected_ptms.push(ptm);
            debug!("Selected PTM {ptm}");
        }
    }

    /// Stop using the loaded file so manual input is calculated instead
    pub fn unload_file(&mut self) {
        if let Some(file) = self.file.take() {
            info!("Unloaded sequence file {file:?}");
            self.set_status("Sequence file unloaded", StatusKind::Info);
        }
    }

    pub fn calculate(&mut self) {
        let sequences = match gather_sequences(self.file.as_deref(), Some(&self.input), self.format) {
            Ok(sequences) => sequences,
            Err(e) => {
                warn!("Calculation request rejected: {e}");
                self.reports.clear();
                self.set_status(e.to_string(), StatusKind::Error);
                return;
            }
        };

        self.reports = calculate_batch(&sequences, &self.selected_ptms);
        self.results_scroll = 0;

        if self.reports.is_empty() {
            self.set_status("No sequences found in the input", StatusKind::Warning);
        } else {
            info!("Calculated {} sequences", self.reports.len());
            let text = format!("Calculated {} sequence(s)", self.reports.len());
            self.set_status(text, StatusKind::Success);
        }
    }

    pub fn export_results(&mut self) {
        if self.reports.is_empty() {
            self.set_status("Nothing to export yet, calculate first", StatusKind::Warning);
            return;
        }

        let rows = build_table(&self.reports);
        match export_csv(&rows, &self.export_path) {
            Ok(()) => {
                let text = format!("Saved {} row(s) to {}", rows.len(), self.export_path.display());
                self.set_status(text, StatusKind::Success);
            }
            Err(e) => {
                error!("Export failed: {e}");
                self.set_status(format!("Export failed: {e}"), StatusKind::Error);
            }
        }
    }

    /// Clear the input, selections and results
    pub fn clear(&mut self) {
        self.input.clear();
        self.selected_ptms.clear();
        self.reports.clear();
        self.results_scroll = 0;
        self.status = None;
    }

    pub fn scroll_results_down(&mut self) {
        self.results_scroll = self.results_scroll.saturating_add(5);
    }

    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(5);
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
