//! Drawing a [`Screen`] with ratatui widgets.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{self, Bar, BarChart, BarGroup, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::chart::{Chart, ChartKind};
use crate::screen::{Block, Callout, Footer, Screen, Section, StatCard, TabButton};
use crate::theme::{Accent, Icon};
use crate::view::Tab;

const HEADER_HEIGHT: u16 = 3;
const TAB_BAR_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 6;
const HELP_HEIGHT: u16 = 1;
const TAB_GAP: u16 = 1;
const CARD_HEIGHT: u16 = 5;
const CARD_MIN_WIDTH: u16 = 18;
const COLUMN_PLOT_HEIGHT: u16 = 12;
const PIE_PLOT_HEIGHT: u16 = 2;

const HELP: &str = "1-5 select tab · ←/→ cycle · ↑/↓ scroll · click a tab · q quit";

/// Host-side options that are not part of the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawOptions {
    /// Number of leading panel items hidden above the viewport.
    pub scroll: usize,
}

/// Regions of the terminal frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    /// Title and headline.
    pub header: Rect,
    /// Tab buttons.
    pub tabs: Rect,
    /// Panel content.
    pub body: Rect,
    /// Data sources note; zero-height when hidden.
    pub footer: Rect,
    /// Key hints.
    pub help: Rect,
}

/// Split the frame into its fixed regions.
#[must_use]
pub fn frame_areas(area: Rect, with_footer: bool) -> FrameAreas {
    let footer = if with_footer { FOOTER_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(footer),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(area);
    FrameAreas {
        header: rows[0],
        tabs: rows[1],
        body: rows[2],
        footer: rows[3],
        help: rows[4],
    }
}

fn button_width(tab: Tab) -> u16 {
    u16::try_from(tab.label().chars().count()).unwrap_or(u16::MAX) + 4
}

/// Where each tab button sits inside the tab bar, centered as a group.
///
/// Buttons that do not fit are clipped to the bar.
#[must_use]
pub fn tab_hit_areas(bar: Rect) -> Vec<(Tab, Rect)> {
    let total: u16 = Tab::ALL.iter().map(|&t| button_width(t)).sum::<u16>()
        + TAB_GAP * (u16::try_from(Tab::ALL.len()).unwrap_or(0) - 1);
    let mut x = bar.x + bar.width.saturating_sub(total) / 2;
    let right = bar.x + bar.width;

    Tab::ALL
        .iter()
        .map(|&tab| {
            let width = button_width(tab).min(right.saturating_sub(x));
            let rect = Rect::new(x, bar.y, width, bar.height);
            x = (x + width + TAB_GAP).min(right);
            (tab, rect)
        })
        .collect()
}

/// The tab whose button contains the given cell.
#[must_use]
pub fn tab_at(bar: Rect, column: u16, row: u16) -> Option<Tab> {
    tab_hit_areas(bar)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(tab, _)| tab)
}

/// Terminal color for an accent.
#[must_use]
pub fn color(accent: Accent) -> Color {
    let (r, g, b) = accent.style().swatch.channels();
    Color::Rgb(r, g, b)
}

fn emphasis(accent: Accent) -> Color {
    let (r, g, b) = accent.style().emphasis.channels();
    Color::Rgb(r, g, b)
}

fn bordered(accent: Accent) -> widgets::Block<'static> {
    widgets::Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(accent)))
}

/// Draw a whole screen.
pub fn draw(frame: &mut Frame<'_>, screen: &Screen, options: &DrawOptions) {
    let areas = frame_areas(frame.area(), screen.footer.is_some());

    draw_header(frame, screen, areas.header);
    for button in &screen.tabs {
        draw_tab_button(frame, button, areas.tabs);
    }
    draw_body(frame, &screen.panel.sections, options.scroll, areas.body);
    if let Some(footer) = &screen.footer {
        draw_footer(frame, footer, areas.footer);
    }
    frame.render_widget(
        Paragraph::new(HELP)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        areas.help,
    );
}

fn draw_header(frame: &mut Frame<'_>, screen: &Screen, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", Icon::AlertTriangle.glyph()),
                Style::default().fg(color(Accent::Red)),
            ),
            Span::styled(screen.title, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(screen.headline),
        Line::from(Span::styled(
            screen.tagline,
            Style::default().fg(emphasis(Accent::Red)),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw one tab button; its style depends only on `button.active`.
fn draw_tab_button(frame: &mut Frame<'_>, button: &TabButton, bar: Rect) {
    let Some((_, area)) = tab_hit_areas(bar)
        .into_iter()
        .find(|(tab, _)| *tab == button.tab)
    else {
        return;
    };
    let style = if button.active {
        Style::default()
            .fg(Color::White)
            .bg(color(button.accent()))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(emphasis(button.accent()))
    };
    frame.render_widget(
        Paragraph::new(button.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(bordered(button.accent())),
        area,
    );
}

/// A heading or a block, the unit of scrolling.
#[derive(Debug, Clone, Copy)]
enum Item<'a> {
    Heading(&'static str, Accent),
    Block(&'a Block),
}

fn items(sections: &[Section]) -> Vec<Item<'_>> {
    let mut out = Vec::new();
    for section in sections {
        if let Some(title) = section.title {
            out.push(Item::Heading(title, section.accent));
        }
        out.extend(section.blocks.iter().map(Item::Block));
    }
    out
}

/// Number of scroll positions in a panel.
#[must_use]
pub fn scroll_len(sections: &[Section]) -> usize {
    items(sections).len()
}

fn draw_body(frame: &mut Frame<'_>, sections: &[Section], scroll: usize, area: Rect) {
    let items = items(sections);
    let skip = scroll.min(items.len().saturating_sub(1));
    let mut y = area.y;
    let bottom = area.y + area.height;

    for item in items.into_iter().skip(skip) {
        if y >= bottom {
            break;
        }
        let wanted = item_height(&item, area.width);
        let rect = Rect::new(area.x, y, area.width, wanted.min(bottom - y));
        match item {
            Item::Heading(title, accent) => frame.render_widget(
                Paragraph::new(Span::styled(
                    title,
                    Style::default()
                        .fg(emphasis(accent))
                        .add_modifier(Modifier::BOLD),
                )),
                rect,
            ),
            Item::Block(block) => draw_block(frame, block, rect),
        }
        y = y.saturating_add(wanted);
    }
}

fn item_height(item: &Item<'_>, width: u16) -> u16 {
    match item {
        Item::Heading(..) => 1,
        Item::Block(Block::Stats { cards }) => {
            let rows = cards.len().div_ceil(card_columns(cards.len(), width));
            CARD_HEIGHT * u16::try_from(rows).unwrap_or(1)
        }
        Item::Block(Block::Chart { chart }) => chart_height(chart),
        Item::Block(Block::Callouts { items }) => callout_grid_height(items, width),
        Item::Block(Block::Banner { items, .. }) => 2 + callout_grid_height(items, width),
    }
}

fn draw_block(frame: &mut Frame<'_>, block: &Block, area: Rect) {
    match block {
        Block::Stats { cards } => draw_stat_cards(frame, cards, area),
        Block::Chart { chart } => draw_chart(frame, chart, area),
        Block::Callouts { items } => draw_callouts(frame, items, area, true),
        Block::Banner { title, items } => {
            let outer = bordered(Accent::Purple).title(Line::from(Span::styled(
                format!(" {title} "),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            let inner = outer.inner(area);
            frame.render_widget(outer, area);
            draw_callouts(frame, items, inner, false);
        }
    }
}

fn card_columns(count: usize, width: u16) -> usize {
    let wanted = if count <= 4 { count } else { count.div_ceil(2) };
    let fits = usize::from(width / CARD_MIN_WIDTH).max(1);
    wanted.min(fits).max(1)
}

fn grid(area: Rect, columns: usize) -> std::rc::Rc<[Rect]> {
    let n = u32::try_from(columns).unwrap_or(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..columns).map(|_| Constraint::Ratio(1, n)))
        .split(area)
}

fn draw_stat_cards(frame: &mut Frame<'_>, cards: &[StatCard], area: Rect) {
    let columns = card_columns(cards.len(), area.width);
    for (row, chunk) in cards.chunks(columns).enumerate() {
        let y = area.y + CARD_HEIGHT * u16::try_from(row).unwrap_or(0);
        if y >= area.y + area.height {
            break;
        }
        let row_area = Rect::new(
            area.x,
            y,
            area.width,
            CARD_HEIGHT.min(area.y + area.height - y),
        );
        for (card, cell) in chunk.iter().zip(grid(row_area, columns).iter()) {
            draw_stat_card(frame, card, *cell);
        }
    }
}

/// Draw one stat card. A pure function of the card.
fn draw_stat_card(frame: &mut Frame<'_>, card: &StatCard, area: Rect) {
    let mut block = bordered(card.accent);
    if let Some(icon) = card.icon {
        block = block.title(
            Line::from(Span::styled(
                format!(" {} ", icon.glyph()),
                Style::default().fg(color(card.accent)),
            ))
            .right_aligned(),
        );
    }

    let mut lines = vec![
        Line::from(Span::styled(
            card.title.to_uppercase(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            card.value.to_string(),
            Style::default()
                .fg(emphasis(card.accent))
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(subtitle) = card.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn plot_height(chart: &Chart) -> u16 {
    let n = u16::try_from(chart.data.len()).unwrap_or(u16::MAX);
    match chart.kind {
        ChartKind::Pie => PIE_PLOT_HEIGHT,
        ChartKind::Column => COLUMN_PLOT_HEIGHT,
        ChartKind::Bar => n.saturating_mul(2).saturating_sub(1),
    }
}

fn chart_height(chart: &Chart) -> u16 {
    let legend = u16::try_from(chart.data.len()).unwrap_or(u16::MAX);
    // borders + plot + spacer + legend
    2 + plot_height(chart) + 1 + legend
}

fn draw_chart(frame: &mut Frame<'_>, chart: &Chart, area: Rect) {
    let block = bordered(Accent::Gray).title(Line::from(Span::styled(
        format!(" {} ", chart.title),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(plot_height(chart)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    match chart.kind {
        ChartKind::Pie => draw_pie(frame, chart, rows[0]),
        ChartKind::Column | ChartKind::Bar => draw_bars(frame, chart, rows[0]),
    }
    frame.render_widget(Paragraph::new(legend(chart)), rows[2]);
}

/// Widest category label, in cells.
fn label_width(chart: &Chart) -> u16 {
    chart
        .data
        .iter()
        .map(|d| u16::try_from(d.label.chars().count()).unwrap_or(u16::MAX))
        .max()
        .unwrap_or(0)
}

/// Horizontal bars need the label column, a one-cell gap and at least one
/// cell of bar.
fn bars_fit(chart: &Chart, area: Rect) -> bool {
    match chart.kind {
        ChartKind::Bar => area.width > label_width(chart).saturating_add(1),
        ChartKind::Column | ChartKind::Pie => true,
    }
}

fn draw_bars(frame: &mut Frame<'_>, chart: &Chart, area: Rect) {
    if !bars_fit(chart, area) {
        return;
    }
    let bars: Vec<Bar> = chart
        .data
        .iter()
        .map(|d| {
            Bar::default()
                .value(u64::from(d.value))
                .label(Line::from(d.label))
                .text_value(format!("{}%", d.value))
                .style(Style::default().fg(color(chart.accent_of(d))))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .bg(color(chart.accent_of(d))),
                )
        })
        .collect();

    let mut widget = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .max(u64::from(chart.domain_max()));

    widget = match chart.kind {
        ChartKind::Bar => widget
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(1),
        _ => {
            let n = u16::try_from(bars.len()).unwrap_or(1).max(1);
            let gap = 2;
            let width = (area.width.saturating_sub(gap * (n - 1)) / n).clamp(3, 24);
            widget.bar_width(width).bar_gap(gap)
        }
    };
    frame.render_widget(widget, area);
}

/// Pie slices as one proportional strip.
fn draw_pie(frame: &mut Frame<'_>, chart: &Chart, area: Rect) {
    let total = chart.total().max(1);
    let width = u32::from(area.width);
    let mut used = 0u32;
    let mut spans = Vec::with_capacity(chart.data.len());

    for (i, datum) in chart.data.iter().enumerate() {
        let cells = if i + 1 == chart.data.len() {
            width - used
        } else {
            width * datum.value / total
        };
        used += cells;
        let label = format!("{}%", datum.value);
        let cells = usize::try_from(cells).unwrap_or(0);
        let text = if cells > label.len() + 1 {
            format!("{label:^cells$}")
        } else {
            " ".repeat(cells)
        };
        spans.push(Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .bg(color(chart.accent_of(datum)))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let line = Line::from(spans);
    frame.render_widget(
        Paragraph::new(vec![line.clone(), line]),
        area,
    );
}

/// One line per point: swatch, label, tooltip strings.
fn legend(chart: &Chart) -> Vec<Line<'static>> {
    chart
        .data
        .iter()
        .map(|d| {
            let tooltip = chart.tooltip.format(d);
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color(chart.accent_of(d)))),
                Span::styled(d.label, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::raw(tooltip.lines().join(" · ")),
            ])
        })
        .collect()
}

fn callout_columns(count: usize) -> usize {
    match count {
        0 => 1,
        4 => 2,
        n => n.min(3),
    }
}

/// Greedy word-wrap line count.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1usize;
    let mut col = 0usize;
    for word in text.split_whitespace() {
        let w = word.chars().count();
        if col == 0 {
            col = w;
        } else if col + 1 + w <= width {
            col += 1 + w;
        } else {
            lines += 1;
            col = w;
        }
        while col > width {
            lines += 1;
            col -= width;
        }
    }
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn callout_height(callout: &Callout, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let mut height = 2 + wrapped_height(callout.body, inner);
    if !callout.bullets.is_empty() {
        height += 1;
        for bullet in &callout.bullets {
            height += wrapped_height(&format!("• {bullet}"), inner);
        }
    }
    height
}

fn callout_grid_height(items: &[Callout], width: u16) -> u16 {
    let columns = callout_columns(items.len());
    let cell = width / u16::try_from(columns).unwrap_or(1);
    items
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|c| callout_height(c, cell))
                .max()
                .unwrap_or(0)
        })
        .sum()
}

fn draw_callouts(frame: &mut Frame<'_>, items: &[Callout], area: Rect, boxed: bool) {
    let columns = callout_columns(items.len());
    let cell = area.width / u16::try_from(columns).unwrap_or(1);
    let mut y = area.y;
    let bottom = area.y + area.height;

    for row in items.chunks(columns) {
        if y >= bottom {
            break;
        }
        let height = row
            .iter()
            .map(|c| callout_height(c, cell))
            .max()
            .unwrap_or(0)
            .min(bottom - y);
        let row_area = Rect::new(area.x, y, area.width, height);
        for (callout, rect) in row.iter().zip(grid(row_area, columns).iter()) {
            draw_callout(frame, callout, *rect, boxed);
        }
        y += height;
    }
}

fn draw_callout(frame: &mut Frame<'_>, callout: &Callout, area: Rect, boxed: bool) {
    let heading = match callout.icon {
        Some(icon) => format!(" {} {} ", icon.glyph(), callout.title),
        None => format!(" {} ", callout.title),
    };
    let heading = Line::from(Span::styled(
        heading,
        Style::default()
            .fg(emphasis(callout.accent))
            .add_modifier(Modifier::BOLD),
    ));

    let block = if boxed {
        bordered(callout.accent)
    } else {
        widgets::Block::default().borders(Borders::TOP)
    };
    let block = block.title(heading);

    let mut lines = vec![Line::from(callout.body)];
    if !callout.bullets.is_empty() {
        lines.push(Line::default());
        lines.extend(
            callout
                .bullets
                .iter()
                .map(|b| Line::from(format!("• {b}"))),
        );
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn draw_footer(frame: &mut Frame<'_>, footer: &Footer, area: Rect) {
    let block = widgets::Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(Span::styled(
            format!(" {} ", footer.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    frame.render_widget(
        Paragraph::new(footer.body)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_areas_stack() {
        let areas = frame_areas(Rect::new(0, 0, 120, 60), true);
        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.tabs.y, HEADER_HEIGHT);
        assert_eq!(areas.footer.height, FOOTER_HEIGHT);
        assert_eq!(areas.help.y, 59);
        assert_eq!(areas.body.height, 60 - 3 - 3 - 6 - 1);
    }

    #[test]
    fn test_frame_areas_without_footer() {
        let areas = frame_areas(Rect::new(0, 0, 80, 30), false);
        assert_eq!(areas.footer.height, 0);
        assert_eq!(areas.body.height, 30 - 3 - 3 - 1);
    }

    #[test]
    fn test_tab_hit_areas_do_not_overlap() {
        let bar = Rect::new(0, 3, 120, 3);
        let areas = tab_hit_areas(bar);
        assert_eq!(areas.len(), 5);
        for pair in areas.windows(2) {
            let (_, left) = pair[0];
            let (_, right) = pair[1];
            assert!(left.x + left.width <= right.x);
        }
        let (_, last) = areas[4];
        assert!(last.x + last.width <= 120);
    }

    #[test]
    fn test_tab_at() {
        let bar = Rect::new(0, 3, 120, 3);
        for (tab, rect) in tab_hit_areas(bar) {
            assert_eq!(tab_at(bar, rect.x + 1, rect.y + 1), Some(tab));
        }
        assert_eq!(tab_at(bar, 0, 3), None);
        assert_eq!(tab_at(bar, 60, 0), None);
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("one two", 10), 1);
        assert_eq!(wrapped_height("one two three", 10), 2);
        assert_eq!(wrapped_height("abcdefghijklmnop", 8), 2);
    }

    #[test]
    fn test_card_columns() {
        assert_eq!(card_columns(4, 120), 4);
        assert_eq!(card_columns(6, 120), 3);
        assert_eq!(card_columns(4, 40), 2);
        assert_eq!(card_columns(1, 10), 1);
    }

    #[test]
    fn test_callout_columns() {
        assert_eq!(callout_columns(1), 1);
        assert_eq!(callout_columns(2), 2);
        assert_eq!(callout_columns(3), 3);
        assert_eq!(callout_columns(4), 2);
    }

    #[test]
    fn test_bars_fit_needs_room_for_labels() {
        let panel = crate::panels::render(Tab::Causes);
        let impact = panel
            .charts()
            .find(|c| c.kind == ChartKind::Bar)
            .unwrap();
        let widest = label_width(impact);
        assert_eq!(widest, 20);
        assert!(!bars_fit(impact, Rect::new(0, 0, widest + 1, 11)));
        assert!(bars_fit(impact, Rect::new(0, 0, widest + 2, 11)));

        let column = panel
            .charts()
            .find(|c| c.kind == ChartKind::Column)
            .unwrap();
        assert!(bars_fit(column, Rect::new(0, 0, 1, 1)));
    }

    #[test]
    fn test_color_uses_swatch() {
        assert_eq!(color(Accent::Red), Color::Rgb(0xdc, 0x26, 0x26));
    }
}
