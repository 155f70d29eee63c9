use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{
    Axis, Block, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table, Tabs,
};

use crate::analytics::{
    factor_levels, improvement_scenarios, insights, max_achievable_score, potential_gain,
    score_grid, sensitivity_curve, GridAxis,
};
use crate::output::{format_delta, format_score, meter_bar};
use crate::profile::{layout, FEATURES, FEATURE_COUNT};
use crate::scoring::{Grade, RIDGE_ALPHA, SCORE_MAX, SCORE_MIN, TRAIN_ROWS, TRAIN_SEED};
use crate::tui::app::{App, InputMode, Page};
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 70 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    match app.page {
        Page::Predict => render_predict(frame, chunks[2], app),
        Page::Simulator => render_simulator(frame, chunks[2], app),
        Page::Analytics => render_analytics(frame, chunks[2], app),
        Page::About => render_about(frame, chunks[2], app),
    }
    render_status_bar(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let left = "ScoreIQ";
    let right = app.source.describe();
    let padding = (area.width as usize).saturating_sub(left.len() + right.chars().count());

    let title = Line::from(vec![
        Span::styled(left, Style::default().fg(theme::TITLE_COLOR).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(theme::MUTED)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<_> = Page::ALL.iter().map(|p| p.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .style(Style::default().fg(theme::MUTED))
        .highlight_style(Style::default().fg(theme::TITLE_COLOR).bold().reversed())
        .divider(" | ");
    frame.render_widget(tabs, area);
}

// ── Predict ─────────────────────────────────────────────────────

fn render_predict(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::horizontal([
        Constraint::Length(38),
        Constraint::Fill(1),
        Constraint::Length(42),
    ])
    .split(area);

    render_inputs(frame, columns[0], app);

    let middle = Layout::vertical([Constraint::Length(11), Constraint::Fill(1)]).split(columns[1]);
    render_score_block(frame, middle[0], app);
    render_curve_chart(
        frame,
        middle[1],
        app,
        layout::HOURS_STUDIED,
        "Score Sensitivity · Study Hours",
        Color::Green,
    );

    let right = Layout::vertical([Constraint::Fill(1), Constraint::Length(4)]).split(columns[2]);
    render_insights(frame, right[0], app);
    render_gain_box(frame, right[1], app);
}

fn render_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = FEATURES
        .iter()
        .enumerate()
        .map(|(idx, def)| {
            let value = app.profile.display_value(idx);
            let level = def.normalized(app.profile.to_features().get(idx));
            let bar = Span::styled(
                meter_bar(level, 8),
                Style::default().fg(theme::meter_color(level)),
            );

            let row_style = if idx == app.selected {
                theme::ROW_SELECTED
            } else if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(def.label),
                Cell::from(value),
                Cell::from(Line::from(bar)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(7),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Input", "Value", ""])
                .style(theme::HEADER_STYLE)
                .bottom_margin(1),
        )
        .block(Block::bordered().title(" Academic Profile "));

    frame.render_widget(table, area);
}

fn render_score_block(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.score();
    let grade = app.grade();
    let grade_color = theme::grade_color(grade);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", format_score(score)),
                Style::default().bold().fg(Color::White),
            ),
            Span::styled("/ 100", Style::default().fg(theme::MUTED)),
        ]),
        Line::from(Span::styled(
            format!(" ● Grade {}", grade.label()),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];
    for band in Grade::ALL {
        let style = if band == grade {
            Style::default().fg(theme::grade_color(band)).bold().reversed()
        } else {
            Style::default().fg(theme::grade_color(band))
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<3}", band.label()), style),
            Span::styled(format!("  {}", band.band()), Style::default().fg(theme::MUTED)),
        ]));
    }

    let block = Block::bordered().title(" Predicted Score ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_curve_chart(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    index: usize,
    title: &str,
    color: Color,
) {
    let def = &FEATURES[index];
    let base = app.profile.to_features();
    let points: Vec<(f64, f64)> = sensitivity_curve(&app.model, base, index, def.min..=def.max)
        .map(|(value, score)| (value as f64, score))
        .collect();
    let current = [(base.get(index), app.model.predict(&base))];

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&current),
    ];

    let mid = (def.min + def.max) / 2;
    let chart = Chart::new(datasets)
        .block(Block::bordered().title(format!(" {} ", title)))
        .x_axis(
            Axis::default()
                .bounds([def.min as f64, def.max as f64])
                .labels([
                    def.min.to_string(),
                    mid.to_string(),
                    def.max.to_string(),
                ])
                .style(Style::default().fg(theme::MUTED)),
        )
        .y_axis(
            Axis::default()
                .bounds([SCORE_MIN - 2.0, SCORE_MAX + 2.0])
                .labels(["40", "70", "100"])
                .style(Style::default().fg(theme::MUTED)),
        );

    frame.render_widget(chart, area);
}

fn render_insights(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for insight in insights(&app.profile) {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", theme::severity_icon(insight.severity)),
                Style::default().fg(theme::severity_color(insight.severity)),
            ),
            Span::styled(insight.title, Style::default().bold()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", insight.body),
            Style::default().fg(theme::MUTED),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Factors",
        Style::default().bold(),
    )));
    for (label, level) in factor_levels(&app.profile) {
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<11}", label)),
            Span::styled(
                meter_bar(level, 10),
                Style::default().fg(theme::meter_color(level)),
            ),
            Span::styled(
                format!(" {:>3.0}%", level * 100.0),
                Style::default().fg(theme::MUTED),
            ),
        ]));
    }

    let block = Block::bordered().title(" Insights ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_gain_box(frame: &mut Frame, area: Rect, app: &App) {
    let gain = potential_gain(&app.model, app.score());
    let lines = vec![
        Line::from(vec![
            Span::styled(" Potential Gain  ", Style::default().fg(theme::MUTED)),
            Span::styled(
                format_delta(gain),
                Style::default().fg(theme::ACCENT).bold(),
            ),
        ]),
        Line::from(Span::styled(
            " points with an optimised profile",
            Style::default().fg(theme::MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(Block::bordered()), area);
}

// ── Simulator ───────────────────────────────────────────────────

fn render_simulator(frame: &mut Frame, area: Rect, app: &App) {
    let columns =
        Layout::horizontal([Constraint::Length(38), Constraint::Fill(1)]).split(area);
    render_inputs(frame, columns[0], app);

    let right = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(columns[1]);
    render_baseline_banner(frame, right[0], app);
    render_scenario_table(frame, right[1], app);
}

fn render_baseline_banner(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.score();
    let grade = app.grade();
    let line = Line::from(vec![
        Span::styled(" Baseline ", Style::default().fg(theme::MUTED)),
        Span::styled(
            format_score(score),
            Style::default().fg(theme::ACCENT).bold(),
        ),
        Span::styled(
            format!("  ● Grade {}", grade.label()),
            Style::default().fg(theme::grade_color(grade)),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(Block::bordered()), area);
}

fn render_scenario_table(frame: &mut Frame, area: Rect, app: &App) {
    let scenarios = improvement_scenarios(&app.model, &app.profile);

    let rows: Vec<Row> = scenarios
        .iter()
        .enumerate()
        .map(|(idx, scenario)| {
            let delta_color = if scenario.delta > 0.1 {
                Color::Green
            } else if scenario.delta < -0.1 {
                Color::Red
            } else {
                theme::MUTED
            };
            let span = (scenario.projected - SCORE_MIN) / (SCORE_MAX - SCORE_MIN);
            let bar = Span::styled(
                meter_bar(span, 14),
                Style::default().fg(theme::meter_color(span)),
            );

            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(scenario.label),
                Cell::from(format_score(scenario.projected)),
                Cell::from(Line::from(Span::styled(
                    format_delta(scenario.delta),
                    Style::default().fg(delta_color),
                ))),
                Cell::from(Line::from(bar)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(18),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Fill(1),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Scenario", "Score", "Δ", ""])
                .style(theme::HEADER_STYLE)
                .bottom_margin(1),
        )
        .block(Block::bordered().title(" Improvement Scenarios "));

    frame.render_widget(table, area);
}

// ── Analytics ───────────────────────────────────────────────────

fn render_analytics(frame: &mut Frame, area: Rect, app: &App) {
    let columns =
        Layout::horizontal([Constraint::Length(38), Constraint::Fill(1)]).split(area);
    render_inputs(frame, columns[0], app);

    let right =
        Layout::vertical([Constraint::Percentage(55), Constraint::Fill(1)]).split(columns[1]);

    let chart_rows = Layout::vertical([Constraint::Percentage(50), Constraint::Fill(1)])
        .split(right[0]);
    let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Fill(1)])
        .split(chart_rows[0]);
    let bottom = Layout::horizontal([Constraint::Percentage(50), Constraint::Fill(1)])
        .split(chart_rows[1]);

    render_curve_chart(frame, top[0], app, layout::HOURS_STUDIED, "Study Hours", Color::Green);
    render_curve_chart(frame, top[1], app, layout::ATTENDANCE_PCT, "Attendance", Color::Blue);
    render_curve_chart(frame, bottom[0], app, layout::SLEEP_HOURS, "Sleep", Color::Yellow);
    render_curve_chart(
        frame,
        bottom[1],
        app,
        layout::TUTORING_SESSIONS,
        "Tutoring",
        Color::Magenta,
    );

    render_heatmap(frame, right[1], app);
}

fn render_heatmap(frame: &mut Frame, area: Rect, app: &App) {
    let grid = score_grid(
        &app.model,
        app.profile.to_features(),
        GridAxis { index: layout::HOURS_STUDIED, lo: 5, hi: 40, step: 5 },
        GridAxis { index: layout::ATTENDANCE_PCT, lo: 65, hi: 100, step: 5 },
    );
    let (lo, hi) = grid.bounds();
    let span = if hi > lo { hi - lo } else { 1.0 };

    let current_x = nearest_index(&grid.x_values, i64::from(app.profile.hours_studied));
    let current_y = nearest_index(&grid.y_values, i64::from(app.profile.attendance_pct));

    // Highest attendance on top
    let mut lines = Vec::new();
    for (y, row) in grid.cells.iter().enumerate().rev() {
        let mut spans = vec![Span::styled(
            format!(" {:>3} ", grid.y_values[y]),
            Style::default().fg(theme::MUTED),
        )];
        for (x, cell) in row.iter().enumerate() {
            let color = theme::heat_color((cell - lo) / span);
            if x == current_x && y == current_y {
                spans.push(Span::styled("◆◆ ", Style::default().fg(Color::White).bg(color)));
            } else {
                spans.push(Span::styled("██ ", Style::default().fg(color)));
            }
        }
        lines.push(Line::from(spans));
    }

    let mut axis = vec![Span::raw("     ")];
    for x in &grid.x_values {
        axis.push(Span::styled(
            format!("{:<3}", x),
            Style::default().fg(theme::MUTED),
        ));
    }
    lines.push(Line::from(axis));

    let block = Block::bordered().title(" Score Map · Study Hours × Attendance ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn nearest_index(values: &[i64], target: i64) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if (v - target).abs() < (values[best] - target).abs() {
            best = i;
        }
    }
    best
}

// ── About ───────────────────────────────────────────────────────

const FEATURE_NOTES: [&str; FEATURE_COUNT] = [
    "Total weekly study hours. Highest model weight.",
    "Percentage of classes attended.",
    "Average nightly sleep.",
    "Last exam score. Strong continuity predictor.",
    "Private tutoring sessions per month.",
    "Weekly exercise hours.",
    "Level of parental academic engagement.",
    "Educational material availability.",
    "Self-reported academic motivation.",
    "Home internet availability.",
    "Household income category.",
    "Perceived quality of teaching staff.",
];

fn render_about(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::vertical([Constraint::Length(7), Constraint::Fill(1)]).split(area);

    let stats = vec![
        Line::from(Span::styled(" Model", Style::default().bold())),
        Line::from(format!(
            "   {} input factors · academic, lifestyle, environment",
            FEATURE_COUNT
        )),
        Line::from(format!(
            "   Ridge regression (α = {}) over standardized features",
            RIDGE_ALPHA
        )),
        Line::from(format!(
            "   Fallback training: {} synthetic records, seed {}",
            TRAIN_ROWS, TRAIN_SEED
        )),
        Line::from(format!(
            "   Output clipped to {:.0}-{:.0} · max achievable {}",
            SCORE_MIN,
            SCORE_MAX,
            format_score(max_achievable_score(&app.model))
        )),
        Line::from(format!("   Source: {}", app.source.describe())),
    ];
    frame.render_widget(
        Paragraph::new(stats).block(Block::bordered().title(" About ScoreIQ ")),
        rows[0],
    );

    let reference: Vec<Row> = FEATURES
        .iter()
        .enumerate()
        .map(|(idx, def)| {
            let kind = if idx == layout::INTERNET_ACCESS {
                "Binary"
            } else if def.max - def.min == 2 {
                "Ordinal"
            } else {
                "Numeric"
            };
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(def.label),
                Cell::from(format!("{}-{}", def.min, def.max)),
                Cell::from(kind),
                Cell::from(FEATURE_NOTES[idx]),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(15),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Fill(1),
    ];
    let table = Table::new(reference, widths)
        .header(
            Row::new(vec!["Feature", "Range", "Type", "Description"])
                .style(theme::HEADER_STYLE)
                .bottom_margin(1),
        )
        .block(Block::bordered().title(" Feature Reference "));
    frame.render_widget(table, rows[1]);
}

// ── Chrome ──────────────────────────────────────────────────────

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(theme::FLASH_COLOR),
        ))
    } else {
        let mut spans = vec![
            Span::styled(
                format!("Score {} · Grade {}", format_score(app.score()), app.grade().label()),
                Style::default().fg(theme::MUTED),
            ),
            Span::raw("  "),
        ];

        let hints = [
            ("j", "/", "k", ":field "),
            ("h", "/", "l", ":adjust "),
            ("H", "/", "L", ":±5 "),
            ("d", "", "", ":reset "),
            ("Tab", "", "", ":page "),
            ("?", "", "", ":help "),
            ("q", "", "", ":quit"),
        ];
        for (i, (key1, sep, key2, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key1,
                Style::default().fg(theme::STATUS_KEY_COLOR),
            ));
            if !sep.is_empty() {
                spans.push(Span::raw(*sep));
                spans.push(Span::styled(
                    *key2,
                    Style::default().fg(theme::STATUS_KEY_COLOR),
                ));
            }
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(52, 15, frame.area());

    frame.render_widget(Clear, popup_area);
    let block = Block::bordered().title(" Keyboard Shortcuts ");
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan).bold());
    let help_lines = vec![
        Line::from(vec![key("j / Down      "), Span::raw("Next input field")]),
        Line::from(vec![key("k / Up        "), Span::raw("Previous input field")]),
        Line::from(vec![key("h / Left      "), Span::raw("Decrease selected input")]),
        Line::from(vec![key("l / Right     "), Span::raw("Increase selected input")]),
        Line::from(vec![key("H / L         "), Span::raw("Adjust by 5")]),
        Line::from(vec![key("d             "), Span::raw("Reset profile to defaults")]),
        Line::from(vec![key("Tab / BackTab "), Span::raw("Cycle pages")]),
        Line::from(vec![key("1 2 3 4       "), Span::raw("Jump to page")]),
        Line::from(vec![key("?             "), Span::raw("Show/hide this help")]),
        Line::from(vec![key("q / Ctrl-c    "), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}
