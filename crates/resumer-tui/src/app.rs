use std::path::Path;
use std::time::Duration;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::time::Instant;

use resumer_core::{
    AppState, CandidateFile, Controller, Notification, NotificationKind, UploadError,
    UploadSession,
};

use crate::action::Action;
use crate::input::parse_dropped_path;
use crate::model::picker::{FilePickerState, PickerOutcome};
use crate::model::toast::ToastQueue;
use crate::theme::Theme;
use crate::tui_event::{BackendCommand, BackendEvent};

/// Main application state.
pub struct App {
    pub controller: Controller,
    pub upload: UploadSession,
    /// File picker overlay on the upload screen, when open.
    pub picker: Option<FilePickerState>,
    pub toasts: ToastQueue,
    /// Shown under the busy button while the backend retries.
    pub retry_status: Option<String>,
    pub tick: usize,
    pub theme: Theme,
    pub should_quit: bool,
    pub show_help: bool,
    pub results_scroll: u16,
    /// Height of the visible content area (set on resize, used for page up/down).
    pub visible_rows: usize,
    /// Terminal size as of the last resize.
    pub viewport: Rect,
    commands: mpsc::UnboundedSender<BackendCommand>,
}

impl App {
    pub fn new(commands: mpsc::UnboundedSender<BackendCommand>, toast_lifetime: Duration) -> Self {
        Self {
            controller: Controller::new(),
            upload: UploadSession::new(),
            picker: None,
            toasts: ToastQueue::new(toast_lifetime),
            retry_status: None,
            tick: 0,
            theme: Theme::professional(),
            should_quit: false,
            show_help: false,
            results_scroll: 0,
            visible_rows: 16,
            viewport: Rect::new(0, 0, 80, 24),
            commands,
        }
    }

    pub fn state(&self) -> AppState {
        self.controller.state()
    }

    fn notify(&mut self, notification: Notification) {
        self.toasts.push(notification, Instant::now());
    }

    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // When help overlay is shown, only allow a few actions through
        if self.show_help {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::ToggleHelp | Action::Back => {
                    self.show_help = false;
                }
                Action::Tick => self.on_tick(),
                Action::Resize(w, h) => self.resize(w, h),
                _ => {} // swallow everything else
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::Tick => self.on_tick(),
            Action::Resize(w, h) => self.resize(w, h),
            Action::None => {}
            action => match self.state() {
                AppState::Landing => self.update_landing(action),
                AppState::Upload => self.update_upload(action),
                AppState::Results => self.update_results(action),
            },
        }
        false
    }

    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.toasts.expire(Instant::now());
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        // Rough estimate: total height minus header/footer/borders
        self.visible_rows = (height as usize).saturating_sub(8);
        self.results_scroll = self.results_scroll.min(self.results_max_scroll());
    }

    /// Furthest the results body can scroll at the current terminal size.
    pub fn results_max_scroll(&self) -> u16 {
        self.controller.record().map_or(0, |record| {
            crate::view::results::max_scroll(record, &self.theme, self.viewport)
        })
    }

    fn update_landing(&mut self, action: Action) {
        match action {
            Action::Confirm => {
                if let Err(e) = self.controller.start() {
                    tracing::warn!("{e}");
                }
            }
            Action::ShowExample => self.notify(Notification::not_available("Example analysis")),
            Action::Back => {
                self.toasts.dismiss();
            }
            _ => {}
        }
    }

    fn update_upload(&mut self, action: Action) {
        if self.picker.is_some() {
            self.update_picker(action);
            return;
        }

        match action {
            Action::Confirm => self.start_analysis(),
            Action::OpenPicker => {
                if self.upload.is_busy() {
                    self.notify(Notification::from(&UploadError::Busy));
                } else {
                    self.picker = Some(FilePickerState::in_current_dir());
                }
            }
            Action::RemoveFile => match self.upload.remove() {
                Ok(Some(file)) => tracing::info!("removed {}", file.name),
                Ok(None) => {}
                Err(e) => self.notify(Notification::from(&e)),
            },
            Action::Paste(text) => match parse_dropped_path(&text) {
                Some(path) => self.select_path(&path),
                None => self.notify(Notification::invalid_file_type()),
            },
            Action::Back => {
                self.toasts.dismiss();
            }
            _ => {}
        }
    }

    fn update_picker(&mut self, action: Action) {
        let page = self.visible_rows.max(1);
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match action {
            Action::MoveDown => picker.move_down(1),
            Action::MoveUp => picker.move_up(1),
            Action::PageDown => picker.move_down(page),
            Action::PageUp => picker.move_up(page),
            Action::GoTop => picker.cursor = 0,
            Action::GoBottom => picker.go_bottom(),
            Action::Confirm => match picker.activate() {
                PickerOutcome::Chosen(path) => {
                    self.picker = None;
                    self.select_path(&path);
                }
                PickerOutcome::Entered | PickerOutcome::Nothing => {}
            },
            Action::Back => self.picker = None,
            Action::Paste(text) => {
                if let Some(path) = parse_dropped_path(&text) {
                    self.picker = None;
                    self.select_path(&path);
                }
            }
            _ => {}
        }
    }

    fn update_results(&mut self, action: Action) {
        let page = self.visible_rows.max(1) as u16;
        let max = self.results_max_scroll();
        match action {
            Action::MoveDown => self.results_scroll = self.results_scroll.saturating_add(1).min(max),
            Action::MoveUp => self.results_scroll = self.results_scroll.saturating_sub(1),
            Action::PageDown => self.results_scroll = self.results_scroll.saturating_add(page).min(max),
            Action::PageUp => self.results_scroll = self.results_scroll.saturating_sub(page),
            Action::GoTop => self.results_scroll = 0,
            Action::GoBottom => self.results_scroll = max,
            Action::Restart => self.start_over(),
            Action::DownloadReport => self.notify(Notification::not_available("Report download")),
            Action::Back => {
                self.toasts.dismiss();
            }
            _ => {}
        }
    }

    /// Describe the file at `path` and offer it to the upload session.
    pub fn select_path(&mut self, path: &Path) {
        let outcome = CandidateFile::from_path(path)
            .map_err(UploadError::from)
            .and_then(|candidate| self.upload.select(candidate).map(|f| f.name.clone()));
        match outcome {
            Ok(name) => tracing::info!("selected {name}"),
            Err(e) => {
                tracing::info!("rejected {}: {e}", path.display());
                self.notify(Notification::from(&e));
            }
        }
    }

    fn start_analysis(&mut self) {
        let file = match self.upload.begin_analysis() {
            Ok(file) => file,
            Err(e) => {
                self.notify(Notification::from(&e));
                return;
            }
        };
        self.retry_status = None;
        if self.commands.send(BackendCommand::Analyze { file }).is_err() {
            self.upload.finish_analysis();
            self.notify(Notification::new(
                NotificationKind::Error,
                "Analysis unavailable",
                "The analysis service has stopped.",
            ));
        }
    }

    fn start_over(&mut self) {
        match self.controller.reset() {
            Ok(_) => {
                self.upload = UploadSession::new();
                self.results_scroll = 0;
            }
            Err(e) => tracing::warn!("{e}"),
        }
    }

    /// Process a backend event and update model state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::AnalysisStarted { file } => {
                tracing::debug!("analysis of {file} started");
                self.retry_status = None;
            }
            BackendEvent::Retrying {
                attempt,
                max_retries,
                delay,
                reason,
            } => {
                tracing::debug!("retrying in {delay:?}: {reason}");
                self.retry_status = Some(format!("Retrying ({attempt}/{max_retries})..."));
            }
            BackendEvent::AnalysisComplete { record } => {
                self.upload.finish_analysis();
                self.retry_status = None;
                match self.controller.complete_analysis(record) {
                    Ok(()) => {
                        self.results_scroll = 0;
                        self.notify(Notification::analysis_complete());
                    }
                    Err(e) => tracing::warn!("dropping analysis result: {e}"),
                }
            }
            BackendEvent::AnalysisFailed { error } => {
                self.upload.finish_analysis();
                self.retry_status = None;
                self.notify(Notification::analysis_failed(&error));
            }
        }
    }

    /// Render the current screen.
    pub fn view(&self, f: &mut ratatui::Frame) {
        match self.state() {
            AppState::Landing => crate::view::landing::render(f, self),
            AppState::Upload => crate::view::upload::render(f, self),
            AppState::Results => crate::view::results::render(f, self),
        }

        crate::view::toast::render(f, self);

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}
