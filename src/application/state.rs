//! Application state management for the location picker.
//!
//! This module contains the picker's state machine: which screen is
//! active, which field has focus, the two option lists with their
//! in-flight flags, and the pending fetch requests the main loop
//! dispatches to the lookup service.

use crate::domain::{Locality, LookupError, Region, Selection, UNSELECTED};

/// Represents the screen currently shown to the user.
///
/// The picker is the home screen; submitting a complete selection
/// transitions to the points screen, carrying the two route parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The location picker itself
    Home,
    /// Destination screen showing collection points for the selection
    Points { uf: String, city: String },
}

/// Represents the current mode of the home screen.
///
/// Opening a dropdown is modal: while a list is open, input moves the
/// highlight instead of the field focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Moving between the two fields and the submit button
    Browsing,
    /// The state dropdown is open
    RegionList,
    /// The city dropdown is open
    CityList,
}

/// The field or button that currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Uf,
    City,
    Submit,
}

/// A lookup the application wants performed.
///
/// State transitions only queue these; the main loop drains them with
/// [`App::take_pending`] and hands them to the dispatcher. Keeping the
/// request as data keeps the state machine free of I/O and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Fetch the full region list (once per picker mount)
    Regions,
    /// Fetch the localities of one region, tagged with the generation
    /// counter current at the time of the request
    Localities { uf: String, epoch: u64 },
}

/// The outcome of a dispatched lookup, delivered back to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    Regions(Result<Vec<Region>, LookupError>),
    Localities {
        epoch: u64,
        result: Result<Vec<Locality>, LookupError>,
    },
}

/// Main application state for the picker and points screens.
///
/// # Examples
///
/// ```
/// use recicla::application::{App, FetchRequest};
///
/// let mut app = App::new();
/// assert_eq!(app.take_pending(), vec![FetchRequest::Regions]);
/// ```
#[derive(Debug)]
pub struct App {
    /// Screen currently displayed
    pub screen: Screen,
    /// Current home-screen mode
    pub mode: AppMode,
    /// Field with keyboard focus while browsing
    pub focus: Focus,
    /// Region options, in the order the lookup service returned them
    pub regions: Vec<Region>,
    /// True from the region request until its completion arrives
    pub regions_loading: bool,
    /// Last region fetch failure, if any
    pub regions_error: Option<String>,
    /// City options for the currently selected region
    pub cities: Vec<Locality>,
    /// True from the latest city request until its completion arrives
    pub cities_loading: bool,
    /// Last city fetch failure, if any
    pub cities_error: Option<String>,
    /// Generation counter for city fetches; only results tagged with the
    /// current value are applied
    pub city_epoch: u64,
    /// The raw values forwarded on submit
    pub selection: Selection,
    /// Highlight position inside an open dropdown
    pub list_index: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Fetches queued by state transitions, drained by the main loop
    pending: Vec<FetchRequest>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            mode: AppMode::Browsing,
            focus: Focus::Uf,
            regions: Vec::new(),
            regions_loading: false,
            regions_error: None,
            cities: Vec::new(),
            cities_loading: false,
            cities_error: None,
            city_epoch: 0,
            selection: Selection::default(),
            list_index: 0,
            status_message: None,
            pending: Vec::new(),
        }
    }
}

impl App {
    /// Creates a freshly mounted picker and queues the region fetch.
    pub fn new() -> Self {
        let mut app = Self::default();
        app.initialize();
        app
    }

    /// Queues the region list fetch and marks it in-flight.
    ///
    /// Runs once per picker mount; the region list lives for the whole
    /// mount and is never refetched except through [`App::retry`].
    pub fn initialize(&mut self) {
        self.regions_loading = true;
        self.regions_error = None;
        self.pending.push(FetchRequest::Regions);
    }

    /// Drains the fetch requests queued since the last call.
    pub fn take_pending(&mut self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.pending)
    }

    /// True when a plain `q` should exit the application.
    pub fn can_quit(&self) -> bool {
        self.screen == Screen::Home && self.mode == AppMode::Browsing
    }

    /// Moves keyboard focus to the next field on the home screen.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Uf => Focus::City,
            Focus::City => Focus::Submit,
            Focus::Submit => Focus::Uf,
        };
    }

    /// Moves keyboard focus to the previous field on the home screen.
    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Focus::Uf => Focus::Submit,
            Focus::City => Focus::Uf,
            Focus::Submit => Focus::City,
        };
    }

    /// Activates the focused element: opens its dropdown or submits.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Uf => self.open_region_list(),
            Focus::City => self.open_city_list(),
            Focus::Submit => self.submit(),
        }
    }

    /// Opens the state dropdown if the region list is usable.
    pub fn open_region_list(&mut self) {
        if self.regions_loading {
            self.status_message = Some("Still loading states...".to_string());
            return;
        }
        if let Some(ref error) = self.regions_error {
            self.status_message = Some(format!("States unavailable: {} (r to retry)", error));
            return;
        }
        self.mode = AppMode::RegionList;
        self.list_index = self.selected_region_position();
    }

    /// Opens the city dropdown if a state is selected and the city list
    /// is usable.
    pub fn open_city_list(&mut self) {
        if !self.selection.has_uf() {
            self.status_message = Some("Select a state first".to_string());
            return;
        }
        if self.cities_loading {
            self.status_message = Some("Still loading cities...".to_string());
            return;
        }
        if let Some(ref error) = self.cities_error {
            self.status_message = Some(format!("Cities unavailable: {} (r to retry)", error));
            return;
        }
        self.mode = AppMode::CityList;
        self.list_index = self.selected_city_position();
    }

    /// Labels for the state dropdown: the placeholder followed by every
    /// region code in service order.
    pub fn region_list_labels(&self) -> Vec<String> {
        let mut labels = vec!["Select a state".to_string()];
        labels.extend(self.regions.iter().map(|region| region.code.clone()));
        labels
    }

    /// Labels for the city dropdown: the placeholder followed by every
    /// city name in service order.
    pub fn city_list_labels(&self) -> Vec<String> {
        let mut labels = vec!["Select a city".to_string()];
        labels.extend(self.cities.iter().map(|city| city.name.clone()));
        labels
    }

    /// Number of entries in the currently open dropdown.
    pub fn open_list_len(&self) -> usize {
        match self.mode {
            AppMode::RegionList => self.regions.len() + 1,
            AppMode::CityList => self.cities.len() + 1,
            AppMode::Browsing => 0,
        }
    }

    /// Moves the dropdown highlight up by `step` entries.
    pub fn move_list_up(&mut self, step: usize) {
        self.list_index = self.list_index.saturating_sub(step);
    }

    /// Moves the dropdown highlight down by `step` entries.
    pub fn move_list_down(&mut self, step: usize) {
        let last = self.open_list_len().saturating_sub(1);
        self.list_index = (self.list_index + step).min(last);
    }

    /// Applies the highlighted dropdown entry and closes the list.
    ///
    /// Index 0 is the placeholder and maps to the sentinel value.
    pub fn confirm_list_selection(&mut self) {
        match self.mode {
            AppMode::RegionList => {
                let code = match self.list_index.checked_sub(1) {
                    Some(i) => self.regions[i].code.clone(),
                    None => UNSELECTED.to_string(),
                };
                self.select_uf(&code);
            }
            AppMode::CityList => {
                let name = match self.list_index.checked_sub(1) {
                    Some(i) => self.cities[i].name.clone(),
                    None => UNSELECTED.to_string(),
                };
                self.select_city(&name);
            }
            AppMode::Browsing => {}
        }
        self.mode = AppMode::Browsing;
        self.list_index = 0;
    }

    /// Closes an open dropdown without changing the selection.
    pub fn cancel_list(&mut self) {
        self.mode = AppMode::Browsing;
        self.list_index = 0;
    }

    /// Sets the selected state and refreshes the dependent city list.
    ///
    /// An unchanged value is a no-op. Any change invalidates the city
    /// list by bumping the generation counter, so an in-flight fetch for
    /// the previous state can no longer apply. The sentinel clears the
    /// list without issuing a fetch; a real code queues a scoped fetch
    /// and marks it in-flight until that fetch's own completion arrives.
    pub fn select_uf(&mut self, code: &str) {
        if code == self.selection.uf {
            return;
        }
        self.selection.uf = code.to_string();
        self.selection.clear_city();
        self.cities.clear();
        self.cities_error = None;
        self.city_epoch += 1;
        if code == UNSELECTED {
            self.cities_loading = false;
        } else {
            self.cities_loading = true;
            self.pending.push(FetchRequest::Localities {
                uf: code.to_string(),
                epoch: self.city_epoch,
            });
        }
    }

    /// Sets the selected city. No validation is performed.
    pub fn select_city(&mut self, name: &str) {
        self.selection.city = name.to_string();
    }

    /// Applies a completed lookup to the state.
    ///
    /// City results carry the generation they were requested under; a
    /// result from a superseded generation is discarded outright, leaving
    /// the in-flight flag to the fetch that replaced it.
    pub fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Regions(result) => {
                self.regions_loading = false;
                match result {
                    Ok(regions) => {
                        self.regions = regions;
                        self.regions_error = None;
                    }
                    Err(error) => {
                        self.regions_error = Some(error.to_string());
                    }
                }
            }
            FetchEvent::Localities { epoch, result } => {
                if epoch != self.city_epoch {
                    return;
                }
                self.cities_loading = false;
                match result {
                    Ok(cities) => {
                        self.cities = cities;
                        self.cities_error = None;
                    }
                    Err(error) => {
                        self.cities_error = Some(error.to_string());
                    }
                }
            }
        }
    }

    /// Re-issues whichever lookup last failed.
    pub fn retry(&mut self) {
        if self.regions_error.is_some() {
            self.initialize();
        } else if self.cities_error.is_some() && self.selection.has_uf() {
            self.cities_error = None;
            self.cities_loading = true;
            self.city_epoch += 1;
            self.pending.push(FetchRequest::Localities {
                uf: self.selection.uf.clone(),
                epoch: self.city_epoch,
            });
        }
    }

    /// Navigates to the points screen when the selection is complete.
    ///
    /// With either field still at the sentinel the navigation is blocked
    /// and a status message explains what is missing.
    pub fn submit(&mut self) {
        if !self.selection.is_complete() {
            self.status_message = Some("Select a state and a city before continuing".to_string());
            return;
        }
        self.status_message = None;
        self.screen = Screen::Points {
            uf: self.selection.uf.clone(),
            city: self.selection.city.clone(),
        };
    }

    /// Leaves the points screen, remounting a fresh picker.
    ///
    /// The region list is created once per mount, so coming back starts
    /// over with a new region fetch and an empty selection.
    pub fn leave_points(&mut self) {
        *self = Self::new();
    }

    /// Dropdown position of the currently selected state (0 = placeholder).
    fn selected_region_position(&self) -> usize {
        self.regions
            .iter()
            .position(|region| region.code == self.selection.uf)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Dropdown position of the currently selected city (0 = placeholder).
    fn selected_city_position(&self) -> usize {
        self.cities
            .iter()
            .position(|city| city.name == self.selection.city)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}
