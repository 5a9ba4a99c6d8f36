//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use rankctl_core::{ActivityLevel, PlanTier};

use super::app::{App, MainTab, Mode, StatusKind};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for selected items
const HIGHLIGHT: Color = Color::Yellow;
/// Success color
const SUCCESS: Color = Color::Green;
/// Error color
const ERROR: Color = Color::Red;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab header
            Constraint::Length(1), // Filter summary
            Constraint::Min(8),    // Content area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);
    render_filter_line(frame, app, chunks[1]);

    if app.tab == MainTab::Overview {
        render_overview(frame, app, chunks[2]);
    } else if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);

        render_list(frame, app, content_chunks[0]);
        render_detail(frame, app, content_chunks[1]);
    } else {
        render_list(frame, app, chunks[2]);
    }

    render_status_bar(frame, app, chunks[3]);

    // Render overlays (action palette, etc.)
    if app.mode == Mode::ActionPalette {
        render_action_palette(frame, app);
    }

    if app.mode == Mode::Search {
        render_search_input(frame, app);
    }

    // Plan notices sit on top of everything else
    if app.plan_notice.is_some() {
        render_plan_notice(frame, app);
    }
}

/// Render the tab header
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = MainTab::ALL
        .iter()
        .enumerate()
        .map(|(idx, tab)| format!("{}:{}", idx + 1, tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" rankctl ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SECONDARY)),
        )
        .select(app.tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

/// One-line summary of the active filter and selection state
fn render_filter_line(frame: &mut Frame, app: &App, area: Rect) {
    if app.tab == MainTab::Overview {
        let plan = app.services.entitlements.plan();
        let line = Line::from(vec![
            Span::styled(" plan: ", Style::default().fg(DIM)),
            Span::styled(plan.name.clone(), Style::default().fg(ACCENT)),
            Span::styled(
                format!(
                    "  projects: {}  submissions/mo: {}",
                    plan.limits.projects, plan.limits.submissions_per_month
                ),
                Style::default().fg(DIM),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let Some(list) = app.active_list_ref() else {
        return;
    };

    let mut spans = Vec::new();

    if app.tab == MainTab::Submissions {
        let (pos, total) = app.submission.kind_position();
        spans.push(Span::styled(
            format!(" {} [{}/{}]", app.submission.kind.label(), pos, total),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        let project = app
            .active_project()
            .map(|p| p.name.as_str())
            .unwrap_or("no project");
        spans.push(Span::styled(
            format!("  for {}", project),
            Style::default().fg(DIM),
        ));
        spans.push(Span::raw("  "));
    } else {
        spans.push(Span::raw(" "));
    }

    if !list.search().is_empty() {
        spans.push(Span::styled(
            format!("search:'{}'  ", list.search()),
            Style::default().fg(Color::Magenta),
        ));
    }

    spans.push(Span::styled(
        format!(
            "status:{}  category:{}  ",
            list.status_facet(),
            list.category_facet()
        ),
        Style::default().fg(DIM),
    ));

    let selected = list.selected_count();
    let selection_style = if selected > 0 {
        Style::default().fg(HIGHLIGHT)
    } else {
        Style::default().fg(DIM)
    };
    spans.push(Span::styled(
        format!("{} selected", selected),
        selection_style,
    ));
    spans.push(Span::styled(
        format!(" | {}/{} shown", list.visible_len(), list.len()),
        Style::default().fg(DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the overview dashboard: account snapshot, activity feed,
/// and the directory leaderboard
fn render_overview(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(area);

    render_overview_snapshot(frame, app, chunks[0]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_activity_feed(frame, app, lower[0]);
    render_top_directories(frame, app, lower[1]);
}

fn render_overview_snapshot(frame: &mut Frame, app: &App, area: Rect) {
    let plan = app.services.entitlements.plan();
    let stats = app.reports.stats();

    let lines = vec![
        Line::from(vec![
            Span::styled("Projects      ", Style::default().fg(DIM)),
            Span::styled(
                format!("{} of {}", app.projects.roster.len(), plan.limits.projects),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Submissions   ", Style::default().fg(DIM)),
            Span::styled(
                format!(
                    "{} of {} this month",
                    app.submission.submitted_this_month, plan.limits.submissions_per_month
                ),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Reports       ", Style::default().fg(DIM)),
            Span::styled(format!("{} total", stats.total), Style::default().fg(Color::White)),
            Span::styled(
                format!("  {} approved", stats.approved),
                Style::default().fg(SUCCESS),
            ),
            Span::styled(
                format!("  {} pending", stats.pending),
                Style::default().fg(HIGHLIGHT),
            ),
            Span::styled(
                format!("  {} rejected", stats.rejected),
                Style::default().fg(ERROR),
            ),
        ]),
        Line::from(vec![
            Span::styled("Approval rate ", Style::default().fg(DIM)),
            Span::styled(
                format!("{}%", stats.success_rate),
                Style::default().fg(ACCENT),
            ),
        ]),
        Line::from(vec![
            Span::styled("Tier          ", Style::default().fg(DIM)),
            Span::styled(
                app.services.entitlements.tier().as_str(),
                Style::default().fg(ACCENT),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Snapshot ")
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_activity_feed(frame: &mut Frame, app: &App, area: Rect) {
    let free_tier = app.services.entitlements.tier() == PlanTier::Free;

    let items: Vec<ListItem> = app
        .overview
        .activity
        .iter()
        .map(|entry| {
            if entry.premium && free_tier {
                return ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>13}  ", entry.when),
                        Style::default().fg(DIM),
                    ),
                    Span::styled(
                        "Premium insight (see `rankctl plans`)",
                        Style::default().fg(DIM).add_modifier(Modifier::ITALIC),
                    ),
                ]));
            }

            let level_color = match entry.level {
                ActivityLevel::Success => SUCCESS,
                ActivityLevel::Warning => HIGHLIGHT,
                ActivityLevel::Error => ERROR,
                ActivityLevel::Info => Color::White,
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>13}  ", entry.when), Style::default().fg(DIM)),
                Span::styled(entry.message.clone(), Style::default().fg(level_color)),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Recent activity ")
        .title_style(Style::default().fg(SECONDARY))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    frame.render_widget(List::new(items).block(block), area);
}

fn render_top_directories(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .overview
        .top_directories
        .iter()
        .map(|dir| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<22}", dir.name), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{}/{} approved", dir.approved, dir.submissions),
                    Style::default().fg(SUCCESS),
                ),
                Span::styled(
                    format!("  score {}", dir.score),
                    Style::default().fg(DIM),
                ),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Top directories ")
        .title_style(Style::default().fg(SECONDARY))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the active tab's record list with checkboxes and cursor
fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let rows = list_rows(app);

    let title = format!(" {} ", app.tab.title());
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let inner = block.inner(area);
    let visible_height = inner.height as usize;

    // Keep the cursor row in view without tracking scroll state:
    // the window always ends at the cursor once it passes the bottom.
    let start = app
        .cursor
        .saturating_sub(visible_height.saturating_sub(1));

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(start)
        .take(visible_height)
        .map(|(idx, (checked, text))| {
            let is_cursor = idx == app.cursor;
            let checkbox = if *checked { "[x] " } else { "[ ] " };

            let style = if is_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else if *checked {
                Style::default().fg(HIGHLIGHT)
            } else {
                Style::default().fg(Color::White)
            };

            let content = format!("{}{}", checkbox, text);
            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = if items.is_empty() {
        let placeholder = ListItem::new(Line::from(Span::styled(
            "  No rows match the current filter",
            Style::default().fg(DIM),
        )));
        List::new(vec![placeholder]).block(block)
    } else {
        List::new(items).block(block)
    };

    frame.render_widget(list, area);

    // Show scroll indicator
    if rows.len() > visible_height {
        let indicator = format!(" {}/{} ", app.cursor + 1, rows.len());
        let indicator_area = Rect {
            x: area.x + area.width.saturating_sub(indicator.len() as u16 + 2),
            y: area.y,
            width: indicator.len() as u16 + 2,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(indicator).style(Style::default().fg(DIM)),
            indicator_area,
        );
    }
}

/// Rows for the active tab as (selected, display text) pairs, in
/// visible order so indices line up with the cursor
fn list_rows(app: &App) -> Vec<(bool, String)> {
    match app.tab {
        MainTab::Overview => Vec::new(),
        MainTab::Projects => {
            let roster = &app.projects.roster;
            roster
                .visible()
                .iter()
                .map(|p| {
                    (
                        roster.selection().contains(&p.id),
                        format!("{:<22} {:<9} {}", p.name, p.status.as_str(), p.url),
                    )
                })
                .collect()
        }
        MainTab::Submissions => {
            let roster = &app.submission.roster;
            roster
                .visible()
                .iter()
                .map(|p| {
                    (
                        roster.selection().contains(&p.id),
                        format!(
                            "{:<22} PR{} {:<5} {:<14} {}",
                            p.name,
                            p.page_rank,
                            p.pricing.as_str(),
                            p.category,
                            p.domain
                        ),
                    )
                })
                .collect()
        }
        MainTab::Tools => {
            let roster = &app.tools.roster;
            roster
                .visible()
                .iter()
                .map(|t| {
                    (
                        roster.selection().contains(&t.id),
                        format!(
                            "{:<26} {:<12} {}",
                            t.name,
                            t.category.as_str(),
                            t.description
                        ),
                    )
                })
                .collect()
        }
        MainTab::Reports => {
            let roster = &app.reports.roster;
            roster
                .visible()
                .iter()
                .map(|r| {
                    (
                        roster.selection().contains(&r.id),
                        format!(
                            "{:<18} {:<20} {:<9} {}",
                            r.project_name,
                            r.platform_name,
                            r.status.as_str(),
                            r.submitted_at.format("%Y-%m-%d")
                        ),
                    )
                })
                .collect()
        }
        MainTab::Admin => {
            let roster = &app.admin.users;
            roster
                .visible()
                .iter()
                .map(|u| {
                    (
                        roster.selection().contains(&u.id),
                        format!(
                            "{:<16} {:<22} {:<8} {}",
                            u.name,
                            u.email,
                            u.plan.as_str(),
                            u.status.as_str()
                        ),
                    )
                })
                .collect()
        }
    }
}

/// Render the detail pane for the record under the cursor
fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let lines = detail_lines(app);

    let block = Block::default()
        .title(" Detail ")
        .title_style(Style::default().fg(SECONDARY))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn detail_lines(app: &App) -> Vec<Line<'static>> {
    let heading = |text: String| {
        Line::from(Span::styled(
            text,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    };
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(DIM)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };
    let nothing = || {
        vec![Line::from(Span::styled(
            "Nothing in view",
            Style::default().fg(DIM),
        ))]
    };

    match app.tab {
        MainTab::Overview => Vec::new(),
        MainTab::Projects => {
            let visible = app.projects.roster.visible();
            let Some(project) = visible.get(app.cursor) else {
                return nothing();
            };
            vec![
                heading(project.name.clone()),
                field("url", project.url.clone()),
                field("status", project.status.as_str().to_string()),
                field("keywords", project.keywords.join(", ")),
                field("created", project.created_at.format("%Y-%m-%d").to_string()),
                field("updated", project.last_updated.format("%Y-%m-%d").to_string()),
                Line::from(""),
                Line::from(project.description.clone()),
            ]
        }
        MainTab::Submissions => {
            let visible = app.submission.roster.visible();
            let Some(platform) = visible.get(app.cursor) else {
                return nothing();
            };
            let mut lines = vec![
                heading(platform.name.clone()),
                field("domain", platform.domain.clone()),
                field("kind", platform.kind.label().to_string()),
                field("category", platform.category.clone()),
                field("page rank", platform.page_rank.to_string()),
                field("pricing", platform.pricing.as_str().to_string()),
                field("status", platform.status.as_str().to_string()),
                field("approval", platform.approval_time.clone()),
                Line::from(""),
                Line::from(platform.description.clone()),
            ];
            if !platform.requirements.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Requirements",
                    Style::default().fg(SECONDARY),
                )));
                for req in &platform.requirements {
                    lines.push(Line::from(format!("  - {}", req)));
                }
            }
            lines
        }
        MainTab::Tools => {
            let visible = app.tools.roster.visible();
            let mut lines = match visible.get(app.cursor) {
                Some(tool) => vec![
                    heading(tool.name.clone()),
                    field("category", tool.category.as_str().to_string()),
                    field("inputs", tool.inputs.join(", ")),
                    Line::from(""),
                    Line::from(tool.description.clone()),
                ],
                None => nothing(),
            };
            if let Some(report) = &app.tools.last_report {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Last run",
                    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD),
                )));
                for row in report.lines() {
                    lines.push(Line::from(row.to_string()));
                }
            }
            lines
        }
        MainTab::Reports => {
            let visible = app.reports.roster.visible();
            let Some(report) = visible.get(app.cursor) else {
                return nothing();
            };
            let approved = report
                .approved_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "pending".to_string());
            let mut lines = vec![
                heading(format!("{} on {}", report.project_name, report.platform_name)),
                field("status", report.status.as_str().to_string()),
                field("submitted", report.submitted_at.format("%Y-%m-%d").to_string()),
                field("approved", approved),
                field("page rank", report.page_rank.to_string()),
            ];
            if let Some(notes) = &report.notes {
                lines.push(Line::from(""));
                lines.push(Line::from(notes.clone()));
            }
            lines
        }
        MainTab::Admin => {
            let visible = app.admin.users.visible();
            let mut lines = match visible.get(app.cursor) {
                Some(user) => vec![
                    heading(user.name.clone()),
                    field("email", user.email.clone()),
                    field("plan", user.plan.as_str().to_string()),
                    field("status", user.status.as_str().to_string()),
                    field("joined", user.joined_at.format("%Y-%m-%d").to_string()),
                    field("active", user.last_active.format("%Y-%m-%d").to_string()),
                    field("projects", user.projects.to_string()),
                    field("submissions", user.submissions.to_string()),
                ],
                None => nothing(),
            };
            let stats = &app.admin.stats;
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "System",
                Style::default().fg(SECONDARY),
            )));
            lines.push(field(
                "users",
                format!("{} ({} active)", stats.total_users, stats.active_users),
            ));
            lines.push(field("projects", stats.total_projects.to_string()));
            lines.push(field("submissions", stats.total_submissions.to_string()));
            lines.push(field("revenue", format!("${}", stats.revenue_usd)));
            lines.push(field("approval", format!("{:.1}%", stats.success_rate)));
            lines
        }
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::Search => {
            Span::styled(" SEARCH ", Style::default().bg(Color::Magenta).fg(Color::Black))
        }
        Mode::ActionPalette => {
            Span::styled(" ACTION ", Style::default().bg(HIGHLIGHT).fg(Color::Black))
        }
    };

    let help_text = match app.mode {
        Mode::Normal => {
            "j/k:move  Space:select  A:all  /:search  s/c:facets  a:actions  p:detail  1-6:tabs  q:quit"
        }
        Mode::Search => "Type to filter  Enter:apply  Esc:cancel",
        Mode::ActionPalette => "j/k:nav  Enter:execute  1-9:quick  Esc:cancel",
    };

    let busy = if app.services.any_running() {
        Span::styled(
            " WORKING ",
            Style::default().bg(SUCCESS).fg(Color::Black),
        )
    } else {
        Span::raw("")
    };

    let status = match &app.status {
        Some(line) => {
            let color = match line.kind {
                StatusKind::Info => Color::White,
                StatusKind::Success => SUCCESS,
                StatusKind::Error => ERROR,
            };
            Span::styled(line.text.as_str(), Style::default().fg(color))
        }
        None => Span::raw(""),
    };

    let line = Line::from(vec![
        mode_indicator,
        busy,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(DIM)),
        Span::raw(" "),
        status,
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the action palette overlay
fn render_action_palette(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Center the palette
    let width = 56.min(area.width.saturating_sub(4));
    let height = (app.palette.len() + 4).min(20) as u16;

    let popup_area = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    // Clear the area
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Actions ")
        .title_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(HIGHLIGHT));

    let items: Vec<ListItem> = app
        .palette
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let is_selected = idx == app.palette_ix;
            let shortcut = format!("[{}] ", idx + 1);

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let content = format!("{}{} - {}", shortcut, action.name, action.description);
            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = if items.is_empty() {
        let placeholder = ListItem::new(Line::from(Span::styled(
            "  No actions available",
            Style::default().fg(DIM),
        )));
        List::new(vec![placeholder]).block(block)
    } else {
        List::new(items).block(block)
    };

    frame.render_widget(list, popup_area);
}

/// Render the search input overlay
fn render_search_input(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let width = 60.min(area.width.saturating_sub(4));
    let popup_area = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: 2, // Near top so the narrowing list stays readable
        width,
        height: 3,
    };

    frame.render_widget(Clear, popup_area);

    let title = format!(" Search ({} matches) ", app.visible_len());

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let content = format!("{}|", app.search_input);
    let paragraph = Paragraph::new(content).block(block);

    frame.render_widget(paragraph, popup_area);
}

/// Render the upgrade notice overlay
fn render_plan_notice(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let Some(notice) = &app.plan_notice else {
        return;
    };

    let width = 60.min(area.width.saturating_sub(4));
    let height = 8.min(area.height.saturating_sub(4));

    let popup_area = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Upgrade required ")
        .title_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(HIGHLIGHT));

    let lines = vec![
        Line::from(notice.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss. See `rankctl plans` for tiers.",
            Style::default().fg(DIM),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, popup_area);
}
