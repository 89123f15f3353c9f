use crate::config::AppConfig;
use crate::errors::DashboardError;
use crate::roster::{self, Row};
use crate::subscription::SubscriptionStatus;
use ratatui::widgets::TableState;
use std::collections::{HashMap, HashSet};
use tui_input::Input;

/// Results delivered from background tasks to the UI loop.
/// `generation` ties a result to the roster load it was started under.
#[derive(Debug, Clone)]
pub enum AsyncAction {
    RosterLoaded {
        generation: u64,
        rows: Vec<Row>,
    },
    RosterFailed {
        generation: u64,
        error: DashboardError,
    },
    ProbeFinished {
        generation: u64,
        row: usize,
        seq: u64,
        status: SubscriptionStatus,
    },
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProbeState {
    /// Waiting for the request numbered `seq`; older answers are ignored
    Pending { seq: u64 },
    Ready(SubscriptionStatus),
}

/// Everything a background probe needs, detached from `App`
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeRequest {
    pub generation: u64,
    pub row: usize,
    pub seq: u64,
    pub endpoint_base: String,
    pub login: String,
    pub secret: String,
}

pub struct App {
    pub config: AppConfig,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub state_loading: bool,
    pub loading_tick: u64,

    // Roster
    pub rows: Vec<Row>,
    pub filtered: Vec<usize>,
    pub filter: Input,
    pub table_state: TableState,
    pub generation: u64,
    pub last_loaded: Option<i64>,

    // Per-row detail state, keyed by index into `rows`
    pub expanded: HashSet<usize>,
    pub probes: HashMap<usize, ProbeState>,
    request_seq: u64,

    // Messages
    pub error: Option<DashboardError>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> App {
        App {
            config,
            input_mode: InputMode::Normal,
            should_quit: false,
            state_loading: false,
            loading_tick: 0,
            rows: Vec::new(),
            filtered: Vec::new(),
            filter: Input::default(),
            table_state: TableState::default(),
            generation: 0,
            last_loaded: None,
            expanded: HashSet::new(),
            probes: HashMap::new(),
            request_seq: 0,
            error: None,
            status_message: None,
        }
    }

    pub fn toggle_input_mode(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Normal => InputMode::Editing,
            InputMode::Editing => InputMode::Normal,
        };
    }

    /// Start a new roster load, invalidating anything in flight
    pub fn begin_roster_load(&mut self) -> u64 {
        self.generation += 1;
        self.state_loading = true;
        self.error = None;
        self.status_message = None;
        self.generation
    }

    pub fn apply_roster(&mut self, generation: u64, rows: Vec<Row>) {
        if generation != self.generation {
            return;
        }
        self.state_loading = false;
        self.rows = rows;
        self.expanded.clear();
        self.probes.clear();
        self.last_loaded = Some(chrono::Utc::now().timestamp());
        self.status_message = Some(format!("Loaded {} rows", self.rows.len()));
        self.update_filter();
    }

    /// A failed load leaves no roster behind
    pub fn apply_roster_failure(&mut self, generation: u64, error: DashboardError) {
        if generation != self.generation {
            return;
        }
        self.state_loading = false;
        self.rows.clear();
        self.expanded.clear();
        self.probes.clear();
        self.error = Some(error);
        self.update_filter();
    }

    pub fn update_filter(&mut self) {
        self.filtered = roster::filter_indices(&self.rows, self.filter.value());
        if self.filtered.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.filtered.iter().filter_map(|&i| self.rows.get(i))
    }

    /// Index into `rows` of the highlighted table line
    pub fn selected_row_index(&self) -> Option<usize> {
        self.table_state
            .selected()
            .and_then(|i| self.filtered.get(i).copied())
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.selected_row_index().and_then(|i| self.rows.get(i))
    }

    fn navigate(&mut self, forward: bool) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if forward {
                    (i + 1) % len
                } else if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn next_row(&mut self) {
        self.navigate(true);
    }

    pub fn previous_row(&mut self) {
        self.navigate(false);
    }

    /// Open or close the selected row's detail line.
    /// Returns a probe to run when the row was opened; closing drops its status.
    pub fn toggle_selected_detail(&mut self) -> Option<ProbeRequest> {
        let row = self.selected_row_index()?;
        if self.expanded.remove(&row) {
            self.probes.remove(&row);
            None
        } else {
            self.expanded.insert(row);
            self.begin_probe(row)
        }
    }

    /// Mark `row` as being probed and describe the request to make
    pub fn begin_probe(&mut self, row: usize) -> Option<ProbeRequest> {
        let target = self.rows.get(row)?;
        self.request_seq += 1;
        let request = ProbeRequest {
            generation: self.generation,
            row,
            seq: self.request_seq,
            endpoint_base: target.endpoint_base.clone(),
            login: target.login.clone().unwrap_or_default(),
            secret: target.secret.clone().unwrap_or_default(),
        };
        self.probes.insert(row, ProbeState::Pending { seq: self.request_seq });
        Some(request)
    }

    pub fn probe_selected(&mut self) -> Option<ProbeRequest> {
        let row = self.selected_row_index()?;
        self.begin_probe(row)
    }

    /// Store a result if its row is still waiting for that exact request
    pub fn apply_probe(&mut self, generation: u64, row: usize, seq: u64, status: SubscriptionStatus) {
        if generation != self.generation {
            return;
        }
        if let Some(state) = self.probes.get_mut(&row) {
            if *state == (ProbeState::Pending { seq }) {
                *state = ProbeState::Ready(status);
            }
        }
    }

    pub fn probe_state(&self, row: usize) -> Option<&ProbeState> {
        self.probes.get(&row)
    }

    pub fn dismiss_messages(&mut self) {
        self.error = None;
        self.status_message = None;
    }
}
