//! Core dashboard state and mode management

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::time::Duration;

use rankctl_core::{
    DispatchEvent, Dispatcher, Entitlements, ModerationAction, Platform, Project, ProjectStatus,
    RankConfig, RankError, Record, Roster, SimulatedGateway, SubmissionGateway, SubmissionReport,
};
use tokio::sync::mpsc;

use super::panes::{
    self, AdminPane, OverviewPane, ProjectsPane, ReportsPane, SubmissionPane, ToolsPane,
};

/// Input mode for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate lists, toggle selection, invoke actions
    #[default]
    Normal,
    /// Live search input over the active tab's list
    Search,
    /// Action palette is open
    ActionPalette,
}

/// Active tab in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    /// Stats, activity feed, and top directories
    #[default]
    Overview,
    /// SEO project list with bulk status changes
    Projects,
    /// Platform browser and bulk submission
    Submissions,
    /// Analysis tool catalog
    Tools,
    /// Submission report history
    Reports,
    /// User moderation and system stats
    Admin,
}

impl MainTab {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Projects,
        Self::Submissions,
        Self::Tools,
        Self::Reports,
        Self::Admin,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Projects => "Projects",
            Self::Submissions => "Submissions",
            Self::Tools => "Tools",
            Self::Reports => "Reports",
            Self::Admin => "Admin",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// Severity of the current status-bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One status-bar message
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// An action in the action palette
#[derive(Debug, Clone, Copy)]
pub struct ActionItem {
    /// Action identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// Palette actions available on every list tab
pub const ACT_CLEAR_SELECTION: &str = "clear-selection";
pub const ACT_RESET_VIEW: &str = "reset-view";

/// Boxed bulk-operation future for the host loop to spawn
pub type ActionFuture =
    Pin<Box<dyn Future<Output = rankctl_core::Result<Option<String>>> + Send + 'static>>;

/// Uniform mutable view over the active tab's roster, so key handling does
/// not care which record type the tab shows.
pub trait Listing {
    fn len(&self) -> usize;
    fn visible_len(&self) -> usize;
    fn selected_count(&self) -> usize;
    fn search(&self) -> &str;
    fn set_search(&mut self, term: String);
    fn status_facet(&self) -> String;
    fn category_facet(&self) -> String;
    fn cycle_status(&mut self);
    fn cycle_category(&mut self);
    /// Toggle the record at this position in the visible view
    fn toggle_at(&mut self, index: usize) -> bool;
    fn select_all_visible(&mut self);
    fn clear_selection(&mut self);
    fn reset_view(&mut self);
}

impl<R: Record> Listing for Roster<R> {
    fn len(&self) -> usize {
        Roster::len(self)
    }

    fn visible_len(&self) -> usize {
        Roster::visible_len(self)
    }

    fn selected_count(&self) -> usize {
        Roster::selected_count(self)
    }

    fn search(&self) -> &str {
        &self.filter().search
    }

    fn set_search(&mut self, term: String) {
        Roster::set_search(self, term);
    }

    fn status_facet(&self) -> String {
        self.filter().status.as_str().to_string()
    }

    fn category_facet(&self) -> String {
        self.filter().category.as_str().to_string()
    }

    fn cycle_status(&mut self) {
        Roster::cycle_status(self);
    }

    fn cycle_category(&mut self) {
        Roster::cycle_category(self);
    }

    fn toggle_at(&mut self, index: usize) -> bool {
        let id = match self.visible().get(index) {
            Some(record) => record.id().to_string(),
            None => return false,
        };
        Roster::toggle(self, &id).is_ok()
    }

    fn select_all_visible(&mut self) {
        Roster::select_all_visible(self);
    }

    fn clear_selection(&mut self) {
        Roster::clear_selection(self);
    }

    fn reset_view(&mut self) {
        Roster::reset_view(self);
    }
}

/// Shared services the tabs dispatch through. One dispatcher per bulk
/// operation family, all reporting into the same event channel.
#[derive(Debug)]
pub struct Services {
    pub gateway: SimulatedGateway,
    pub entitlements: Entitlements,
    pub submit: Dispatcher,
    pub tools: Dispatcher,
    pub reports: Dispatcher,
    pub admin: Dispatcher,
}

impl Services {
    /// Whether any bulk operation is in flight
    pub fn any_running(&self) -> bool {
        self.submit.is_running()
            || self.tools.is_running()
            || self.reports.is_running()
            || self.admin.is_running()
    }
}

/// Main dashboard state
#[derive(Debug)]
pub struct App {
    /// Current input mode
    pub mode: Mode,
    /// Active tab
    pub tab: MainTab,
    /// Cursor position within the visible rows of the active tab
    pub cursor: usize,
    /// Search input while in search mode
    pub search_input: String,
    /// Whether the detail pane is shown
    pub show_detail: bool,
    /// Event poll interval for the run loop
    pub tick_rate: Duration,
    /// Status bar message
    pub status: Option<StatusLine>,
    /// Upgrade notice overlay from a plan-gate refusal
    pub plan_notice: Option<String>,
    /// Action palette items (when open)
    pub palette: Vec<ActionItem>,
    /// Selected action in palette
    pub palette_ix: usize,

    pub overview: OverviewPane,
    pub projects: ProjectsPane,
    pub submission: SubmissionPane,
    pub tools: ToolsPane,
    pub reports: ReportsPane,
    pub admin: AdminPane,

    pub services: Services,
}

impl App {
    /// Build the dashboard state from config, returning the receiver the
    /// run loop drains for bulk-operation events.
    pub fn new(config: &RankConfig) -> (Self, mpsc::UnboundedReceiver<DispatchEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let retention = config.behavior.selection_retention;

        let services = Services {
            gateway: SimulatedGateway::new((&config.delays).into()),
            entitlements: Entitlements::new(config.subscription.tier),
            submit: Dispatcher::new(events_tx.clone()),
            tools: Dispatcher::new(events_tx.clone()),
            reports: Dispatcher::new(events_tx.clone()),
            admin: Dispatcher::new(events_tx),
        };

        let app = Self {
            mode: Mode::Normal,
            tab: MainTab::Overview,
            cursor: 0,
            search_input: String::new(),
            show_detail: config.ui.show_detail_pane,
            tick_rate: config.ui.tick_rate(),
            status: None,
            plan_notice: None,
            palette: Vec::new(),
            palette_ix: 0,
            overview: OverviewPane::new(),
            projects: ProjectsPane::new(retention),
            submission: SubmissionPane::new(retention),
            tools: ToolsPane::new(retention),
            reports: ReportsPane::new(retention),
            admin: AdminPane::new(retention),
            services,
        };
        (app, events_rx)
    }

    // === Tab and list access ===

    /// The active tab's roster, if the tab has one (overview does not)
    pub fn active_list(&mut self) -> Option<&mut dyn Listing> {
        match self.tab {
            MainTab::Overview => None,
            MainTab::Projects => Some(&mut self.projects.roster),
            MainTab::Submissions => Some(&mut self.submission.roster),
            MainTab::Tools => Some(&mut self.tools.roster),
            MainTab::Reports => Some(&mut self.reports.roster),
            MainTab::Admin => Some(&mut self.admin.users),
        }
    }

    pub fn active_list_ref(&self) -> Option<&dyn Listing> {
        match self.tab {
            MainTab::Overview => None,
            MainTab::Projects => Some(&self.projects.roster),
            MainTab::Submissions => Some(&self.submission.roster),
            MainTab::Tools => Some(&self.tools.roster),
            MainTab::Reports => Some(&self.reports.roster),
            MainTab::Admin => Some(&self.admin.users),
        }
    }

    pub fn visible_len(&self) -> usize {
        self.active_list_ref().map_or(0, |list| list.visible_len())
    }

    /// The project the submission tab submits as
    pub fn active_project(&self) -> Option<&Project> {
        self.projects.roster.records().get(self.submission.project_ix)
    }

    /// Switch to a tab. Pane filters and selections persist; the cursor
    /// and input mode do not.
    pub fn switch_tab(&mut self, tab: MainTab) {
        self.tab = tab;
        self.cursor = 0;
        self.mode = Mode::Normal;
        self.search_input.clear();
    }

    pub fn next_tab(&mut self) {
        let next = (self.tab.index() + 1) % MainTab::ALL.len();
        self.switch_tab(MainTab::ALL[next]);
    }

    pub fn prev_tab(&mut self) {
        let len = MainTab::ALL.len();
        let prev = (self.tab.index() + len - 1) % len;
        self.switch_tab(MainTab::ALL[prev]);
    }

    // === Cursor ===

    pub fn cursor_down(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn cursor_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_bottom(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    /// Pull the cursor back inside the visible view after it shrank
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    // === Selection ===

    pub fn toggle_at_cursor(&mut self) {
        let cursor = self.cursor;
        if let Some(list) = self.active_list() {
            list.toggle_at(cursor);
        }
    }

    /// Select-all scoped to the filtered view, with toggle semantics
    pub fn select_all_visible(&mut self) {
        let selected = {
            let Some(list) = self.active_list() else { return };
            list.select_all_visible();
            list.selected_count()
        };
        let message = if selected == 0 {
            "Selection cleared".to_string()
        } else {
            format!("{selected} row(s) selected")
        };
        self.set_status(StatusKind::Info, message);
    }

    // === Search and facets ===

    /// Enter live search over the active tab's list, seeded with the
    /// current term so editing picks up where the filter is.
    pub fn enter_search(&mut self) {
        let Some(current) = self.active_list_ref().map(|list| list.search().to_string()) else {
            return;
        };
        self.search_input = current;
        self.mode = Mode::Search;
    }

    pub fn search_push(&mut self, c: char) {
        self.search_input.push(c);
        self.apply_search();
    }

    pub fn search_pop(&mut self) {
        self.search_input.pop();
        self.apply_search();
    }

    /// Esc: drop the term and leave search mode
    pub fn cancel_search(&mut self) {
        self.search_input.clear();
        self.apply_search();
        self.mode = Mode::Normal;
    }

    /// Enter: keep the term and leave search mode
    pub fn accept_search(&mut self) {
        self.mode = Mode::Normal;
    }

    fn apply_search(&mut self) {
        let term = self.search_input.clone();
        if let Some(list) = self.active_list() {
            list.set_search(term);
        }
        self.clamp_cursor();
    }

    pub fn cycle_status_facet(&mut self) {
        let facet = {
            let Some(list) = self.active_list() else { return };
            list.cycle_status();
            list.status_facet()
        };
        self.clamp_cursor();
        self.set_status(StatusKind::Info, format!("Status facet: {facet}"));
    }

    pub fn cycle_category_facet(&mut self) {
        let facet = {
            let Some(list) = self.active_list() else { return };
            list.cycle_category();
            list.category_facet()
        };
        self.clamp_cursor();
        self.set_status(StatusKind::Info, format!("Category facet: {facet}"));
    }

    /// Reset filter, selection, and cursor on the active tab
    pub fn reset_current_view(&mut self) {
        if let Some(list) = self.active_list() {
            list.reset_view();
        }
        self.cursor = 0;
        self.search_input.clear();
        self.set_status(StatusKind::Info, "View reset");
    }

    // === Submission kind paging ===

    pub fn submission_kind_next(&mut self) {
        self.submission.next_kind();
        self.cursor = 0;
        let label = self.submission.kind.label();
        self.set_status(StatusKind::Info, format!("Platform kind: {label}"));
    }

    pub fn submission_kind_prev(&mut self) {
        self.submission.prev_kind();
        self.cursor = 0;
        let label = self.submission.kind.label();
        self.set_status(StatusKind::Info, format!("Platform kind: {label}"));
    }

    // === Status bar ===

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind,
            text: text.into(),
        });
    }

    // === Action palette ===

    /// Open the palette with the active tab's actions plus the shared
    /// selection housekeeping entries.
    pub fn open_palette(&mut self) {
        let mut items = match self.tab {
            MainTab::Overview => Vec::new(),
            MainTab::Projects => ProjectsPane::actions(),
            MainTab::Submissions => SubmissionPane::actions(),
            MainTab::Tools => ToolsPane::actions(),
            MainTab::Reports => ReportsPane::actions(),
            MainTab::Admin => AdminPane::actions(),
        };
        if items.is_empty() {
            self.set_status(StatusKind::Info, "No actions on this tab");
            return;
        }
        items.push(ActionItem {
            id: ACT_CLEAR_SELECTION,
            name: "Clear selection",
            description: "Deselect every row",
        });
        items.push(ActionItem {
            id: ACT_RESET_VIEW,
            name: "Reset view",
            description: "Clear search, facets, and selection",
        });
        self.palette = items;
        self.palette_ix = 0;
        self.mode = Mode::ActionPalette;
    }

    pub fn close_palette(&mut self) {
        self.mode = Mode::Normal;
        self.palette.clear();
    }

    pub fn palette_next(&mut self) {
        if !self.palette.is_empty() {
            self.palette_ix = (self.palette_ix + 1) % self.palette.len();
        }
    }

    pub fn palette_prev(&mut self) {
        if !self.palette.is_empty() {
            self.palette_ix = self
                .palette_ix
                .checked_sub(1)
                .unwrap_or(self.palette.len() - 1);
        }
    }

    // === Actions ===

    /// Run a palette action against the current tab. Local actions mutate
    /// state here; bulk operations come back as a future for the host loop
    /// to spawn. Refusals (empty selection, busy dispatcher, plan limits)
    /// land in the status bar or the plan notice.
    pub fn invoke_action(&mut self, action: &str) -> Option<ActionFuture> {
        match action {
            ACT_CLEAR_SELECTION => {
                if let Some(list) = self.active_list() {
                    list.clear_selection();
                }
                self.set_status(StatusKind::Info, "Selection cleared");
                None
            }
            ACT_RESET_VIEW => {
                self.reset_current_view();
                None
            }
            _ => match self.tab {
                MainTab::Overview => None,
                MainTab::Projects => {
                    self.project_action(action);
                    None
                }
                MainTab::Submissions => self.submission_action(action),
                MainTab::Tools => match action {
                    panes::tools::ACT_RUN => self.tool_action(),
                    _ => None,
                },
                MainTab::Reports => match action {
                    panes::reports::OP_EXPORT => self.export_action(),
                    _ => None,
                },
                MainTab::Admin => match action.parse::<ModerationAction>() {
                    Ok(parsed) => self.moderation_action(parsed),
                    Err(_) => None,
                },
            },
        }
    }

    /// Project actions apply immediately; no backend call is involved.
    fn project_action(&mut self, action: &str) {
        if self.projects.roster.selected_count() == 0 {
            self.set_status(StatusKind::Error, "Nothing selected; Space marks rows");
            return;
        }
        let message = match action {
            panes::projects::ACT_PAUSE => {
                let n = self.projects.set_selected_status(ProjectStatus::Paused);
                format!("Paused {n} project(s)")
            }
            panes::projects::ACT_ACTIVATE => {
                let n = self.projects.set_selected_status(ProjectStatus::Active);
                format!("Activated {n} project(s)")
            }
            panes::projects::ACT_REMOVE => {
                let n = self.projects.remove_selected();
                format!("Removed {n} project(s)")
            }
            _ => return,
        };
        self.clamp_cursor();
        self.set_status(StatusKind::Success, message);
    }

    fn submission_action(&mut self, action: &str) -> Option<ActionFuture> {
        match action {
            panes::submission::ACT_NEXT_PROJECT => {
                let len = self.projects.roster.len();
                if len > 0 {
                    self.submission.project_ix = (self.submission.project_ix + 1) % len;
                }
                let name = self
                    .active_project()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| "none".to_string());
                self.set_status(StatusKind::Info, format!("Submitting as: {name}"));
                None
            }
            panes::submission::OP_SUBMIT => self.submit_action(),
            _ => None,
        }
    }

    /// Bulk-submit the selected platforms for the active project
    fn submit_action(&mut self) -> Option<ActionFuture> {
        let Some(project) = self.active_project().cloned() else {
            self.set_status(StatusKind::Error, "No project available to submit");
            return None;
        };
        let platforms: Vec<Platform> = {
            let roster = &self.submission.roster;
            roster
                .records()
                .iter()
                .filter(|p| roster.selection().contains(&p.id))
                .cloned()
                .collect()
        };
        let count = platforms.len();

        if let Err(err) = self
            .services
            .entitlements
            .check_submission_quota(self.submission.submitted_this_month, count)
        {
            self.plan_notice = Some(err.to_string());
            return None;
        }

        let gateway = self.services.gateway.clone();
        let summary = format!("Submitted '{}' to {count} platform(s)", project.name);
        self.spawnable(self.services.submit.dispatch(
            panes::submission::OP_SUBMIT,
            count,
            async move {
                let refs: Vec<&Platform> = platforms.iter().collect();
                gateway.submit_platforms(&project, &refs).await?;
                Ok(Some(summary))
            },
        ))
    }

    /// Run the tool under the cursor against the active project's URL
    fn tool_action(&mut self) -> Option<ActionFuture> {
        let tool = match self.tools.roster.visible().get(self.cursor) {
            Some(tool) => (*tool).clone(),
            None => {
                self.set_status(StatusKind::Error, "No tool under the cursor");
                return None;
            }
        };
        if let Err(err) = self.services.entitlements.check_tool_access(&tool) {
            self.plan_notice = Some(err.to_string());
            return None;
        }

        let target = self
            .active_project()
            .map(|p| p.url.clone())
            .unwrap_or_else(|| "https://example.com".to_string());
        let gateway = self.services.gateway.clone();
        self.spawnable(
            self.services
                .tools
                .dispatch(panes::tools::OP_ANALYZE, 1, async move {
                    let report = gateway.run_tool(&tool, &target).await?;
                    Ok(Some(report.render()))
                }),
        )
    }

    /// Export the selected reports, or the whole filtered view when
    /// nothing is selected, to a CSV in the working directory.
    fn export_action(&mut self) -> Option<ActionFuture> {
        let rows: Vec<SubmissionReport> = {
            let roster = &self.reports.roster;
            if roster.selected_count() > 0 {
                roster
                    .records()
                    .iter()
                    .filter(|r| roster.selection().contains(&r.id))
                    .cloned()
                    .collect()
            } else {
                roster.visible().into_iter().cloned().collect()
            }
        };
        let count = rows.len();
        let path = PathBuf::from("rankctl-reports.csv");

        let gateway = self.services.gateway.clone();
        self.spawnable(
            self.services
                .reports
                .dispatch(panes::reports::OP_EXPORT, count, async move {
                    let refs: Vec<&SubmissionReport> = rows.iter().collect();
                    let csv = gateway.export_reports(&refs).await?;
                    std::fs::write(&path, csv)
                        .map_err(|err| RankError::export(path.clone(), err.to_string()))?;
                    Ok(Some(format!(
                        "Exported {count} report(s) to {}",
                        path.display()
                    )))
                }),
        )
    }

    /// Apply a moderation action to the selected accounts
    fn moderation_action(&mut self, action: ModerationAction) -> Option<ActionFuture> {
        let ids: Vec<String> = self
            .admin
            .users
            .selected_ids()
            .iter()
            .map(|id| id.to_string())
            .collect();
        let count = ids.len();

        let gateway = self.services.gateway.clone();
        self.spawnable(
            self.services
                .admin
                .dispatch(action.as_str(), count, async move {
                    let affected = gateway.moderate_users(action, &ids).await?;
                    Ok(Some(format!("Applied {action} to {affected} account(s)")))
                }),
        )
    }

    /// Box a claimed dispatch future, or surface the synchronous refusal
    fn spawnable<F>(&mut self, dispatched: rankctl_core::Result<F>) -> Option<ActionFuture>
    where
        F: Future<Output = rankctl_core::Result<Option<String>>> + Send + 'static,
    {
        match dispatched {
            Ok(fut) => Some(Box::pin(fut)),
            Err(err) => {
                self.set_status(StatusKind::Error, err.to_string());
                None
            }
        }
    }

    // === Dispatch events ===

    /// Fold a bulk-operation event into the UI state. Completions route
    /// by operation name back to the tab that started them.
    pub fn apply_event(&mut self, event: DispatchEvent) {
        match event {
            DispatchEvent::Started { operation, count } => {
                self.set_status(
                    StatusKind::Info,
                    format!("{operation} running for {count} record(s)..."),
                );
            }
            DispatchEvent::Completed {
                operation,
                count,
                detail,
            } => {
                let text = match operation.as_str() {
                    panes::submission::OP_SUBMIT => {
                        self.submission.record_submission(count);
                        self.submission.roster.clear_selection();
                        detail.unwrap_or_else(|| format!("Submitted {count} platform(s)"))
                    }
                    panes::tools::OP_ANALYZE => {
                        self.tools.last_report = detail;
                        "Analysis finished; results in the detail pane".to_string()
                    }
                    panes::reports::OP_EXPORT => {
                        self.reports.roster.clear_selection();
                        detail.unwrap_or_else(|| format!("Exported {count} report(s)"))
                    }
                    op if op.parse::<ModerationAction>().is_ok() => {
                        self.admin.users.clear_selection();
                        detail.unwrap_or_else(|| format!("Applied {op} to {count} account(s)"))
                    }
                    _ => detail.unwrap_or_else(|| format!("{operation} completed")),
                };
                self.set_status(StatusKind::Success, text);
            }
            DispatchEvent::Failed { operation, reason } => {
                self.set_status(StatusKind::Error, format!("{operation} failed: {reason}"));
            }
        }
        self.clamp_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankctl_core::config::DelayConfig;
    use rankctl_core::PlanTier;

    fn instant_config() -> RankConfig {
        RankConfig {
            delays: DelayConfig {
                submit_ms: 0,
                tool_ms: 0,
                moderate_ms: 0,
            },
            ..RankConfig::default()
        }
    }

    fn test_app() -> App {
        App::new(&instant_config()).0
    }

    #[test]
    fn test_switch_tab_resets_cursor_and_mode() {
        let mut app = test_app();
        app.switch_tab(MainTab::Projects);
        app.cursor = 2;
        app.enter_search();
        assert_eq!(app.mode, Mode::Search);

        app.switch_tab(MainTab::Tools);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.mode, Mode::Normal);

        // Filters and selection persist across tab switches
        app.switch_tab(MainTab::Projects);
        app.toggle_at_cursor();
        app.switch_tab(MainTab::Overview);
        app.switch_tab(MainTab::Projects);
        assert_eq!(app.projects.roster.selected_count(), 1);
    }

    #[test]
    fn test_search_is_live_and_clamps_cursor() {
        let mut app = test_app();
        app.switch_tab(MainTab::Projects);
        app.cursor = 2;
        app.enter_search();

        for c in "blog".chars() {
            app.search_push(c);
        }
        assert_eq!(app.visible_len(), 1);
        assert_eq!(app.cursor, 0);

        // Esc clears the filter, Enter would have kept it
        app.cancel_search();
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.visible_len(), 3);
    }

    #[test]
    fn test_enter_search_is_a_noop_on_overview() {
        let mut app = test_app();
        assert_eq!(app.tab, MainTab::Overview);
        app.enter_search();
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_select_all_is_scoped_to_the_filtered_view() {
        let mut app = test_app();
        app.switch_tab(MainTab::Projects);
        app.cycle_status_facet(); // active
        app.select_all_visible();
        assert_eq!(app.projects.roster.selected_count(), 2);

        // Toggle semantics: a second select-all empties it
        app.select_all_visible();
        assert_eq!(app.projects.roster.selected_count(), 0);
    }

    #[test]
    fn test_palette_carries_tab_actions_plus_shared_tail() {
        let mut app = test_app();
        app.switch_tab(MainTab::Projects);
        app.open_palette();
        assert_eq!(app.mode, Mode::ActionPalette);

        let ids: Vec<&str> = app.palette.iter().map(|a| a.id).collect();
        assert!(ids.contains(&panes::projects::ACT_PAUSE));
        assert!(ids.contains(&ACT_CLEAR_SELECTION));
        assert_eq!(ids.last(), Some(&ACT_RESET_VIEW));

        app.close_palette();
        assert!(app.palette.is_empty());

        // Overview has no actions and the palette stays closed
        app.switch_tab(MainTab::Overview);
        app.open_palette();
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_project_actions_mutate_the_selected_rows() {
        let mut app = test_app();
        app.switch_tab(MainTab::Projects);
        app.toggle_at_cursor(); // proj-1, active

        app.invoke_action(panes::projects::ACT_PAUSE);
        assert_eq!(
            app.projects.roster.get("proj-1").unwrap().status,
            ProjectStatus::Paused
        );

        app.invoke_action(panes::projects::ACT_REMOVE);
        assert_eq!(app.projects.roster.len(), 2);
        assert_eq!(app.projects.roster.selected_count(), 0);
    }

    #[test]
    fn test_submit_over_quota_raises_the_plan_notice() {
        let mut app = test_app();
        assert_eq!(app.services.entitlements.tier(), PlanTier::Free);

        app.switch_tab(MainTab::Submissions);
        app.submission.submitted_this_month = 10;
        app.toggle_at_cursor();

        let fut = app.invoke_action(panes::submission::OP_SUBMIT);
        assert!(fut.is_none());
        let notice = app.plan_notice.as_deref().unwrap();
        assert!(notice.contains("free"));
        assert!(notice.contains("submissions per month"));
    }

    #[test]
    fn test_gated_tool_raises_the_plan_notice() {
        let mut app = test_app();
        app.switch_tab(MainTab::Tools);
        let pos = app
            .tools
            .roster
            .visible()
            .iter()
            .position(|t| t.id == "page-speed")
            .unwrap();
        app.cursor = pos;

        let fut = app.invoke_action(panes::tools::ACT_RUN);
        assert!(fut.is_none());
        assert!(app.plan_notice.as_deref().unwrap().contains("upgrade"));
    }

    #[test]
    fn test_empty_selection_is_refused_in_the_status_bar() {
        let mut app = test_app();
        app.switch_tab(MainTab::Admin);

        let fut = app.invoke_action("suspend");
        assert!(fut.is_none());
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("nothing to suspend"));
    }

    #[tokio::test]
    async fn test_submit_round_trip_updates_quota_and_selection() {
        let (mut app, mut events) = App::new(&instant_config());
        app.switch_tab(MainTab::Submissions);
        app.toggle_at_cursor();

        let fut = app.invoke_action(panes::submission::OP_SUBMIT).unwrap();
        assert!(app.services.submit.is_running());
        fut.await.unwrap();

        while let Ok(event) = events.try_recv() {
            app.apply_event(event);
        }
        assert_eq!(app.submission.submitted_this_month, 1);
        assert_eq!(app.submission.roster.selected_count(), 0);
        assert!(!app.services.submit.is_running());
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert!(status.text.contains("Submitted"));
    }

    #[tokio::test]
    async fn test_second_dispatch_is_refused_while_running() {
        let (mut app, _events) = App::new(&instant_config());
        app.switch_tab(MainTab::Submissions);
        app.toggle_at_cursor();

        let first = app.invoke_action(panes::submission::OP_SUBMIT).unwrap();
        let second = app.invoke_action(panes::submission::OP_SUBMIT);
        assert!(second.is_none());
        assert!(app
            .status
            .as_ref()
            .unwrap()
            .text
            .contains("already running"));

        // Dropping the claimed future releases the flag
        drop(first);
        assert!(!app.services.submit.is_running());
    }

    #[test]
    fn test_tool_completion_lands_in_the_detail_pane() {
        let mut app = test_app();
        app.apply_event(DispatchEvent::Completed {
            operation: panes::tools::OP_ANALYZE.to_string(),
            count: 1,
            detail: Some("Score: 85/100".to_string()),
        });
        assert_eq!(app.tools.last_report.as_deref(), Some("Score: 85/100"));

        app.apply_event(DispatchEvent::Failed {
            operation: "submit".to_string(),
            reason: "gateway unreachable".to_string(),
        });
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("gateway unreachable"));
    }
}
