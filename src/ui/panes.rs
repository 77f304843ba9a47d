//! Stateless render functions for every visible pane
//!
//! Each function takes a [`Frame`], a target [`Rect`] and the data to show.
//! Nothing in here owns or mutates engine state; panes read the element
//! roles through the presentation mapper and draw.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::containers::{LinkedList, Queue, Slot, Stack};
use crate::model::Element;
use crate::presentation::element_style;
use crate::scheduler::RunStatus;
use crate::ui::theme::DEFAULT_THEME;

/// Page titles in tab order.
pub const PAGE_TITLES: [&str; 7] = [
    "Home",
    "Bubble Sort",
    "Quick Sort",
    "Binary Search",
    "Stack",
    "Queue",
    "Linked List",
];

/// Render the page tab strip.
pub fn render_tabs(frame: &mut Frame, area: Rect, selected: usize) {
    let titles: Vec<Line> = PAGE_TITLES
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!(" {} {} ", i + 1, t)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, area);
}

/// Render a sequence of elements as a bar chart, one bar per element, colored
/// by the presentation mapper. Labeled roles (LOW/MID/HIGH/...) replace the
/// index under the bar.
pub fn render_bars(frame: &mut Frame, area: Rect, title: &str, elements: &[Element<i64>]) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let bars: Vec<Bar> = elements
        .iter()
        .enumerate()
        .map(|(index, elem)| {
            let style = element_style(&elem.roles);
            let label = match style.label {
                Some(text) => Line::styled(
                    text,
                    Style::default()
                        .fg(style.color)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Line::styled(
                    index.to_string(),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            };
            Bar::default()
                .value(elem.value.max(0) as u64)
                .label(label)
                .style(Style::default().fg(style.color))
                .value_style(Style::default().fg(Color::Black).bg(style.color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

/// Render the current step explanation (or a container's last operation).
pub fn render_explanation(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Render a small key/value info panel (array size, target, counters, ...).
pub fn render_info(frame: &mut Frame, area: Rect, title: &str, rows: &[(String, String)]) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let items: Vec<ListItem> = rows
        .iter()
        .map(|(label, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}: ", label),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    value.clone(),
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Render a color legend for the current page.
pub fn render_legend(frame: &mut Frame, area: Rect, entries: &[(Color, &str)]) {
    let mut spans = Vec::new();
    for (color, label) in entries {
        spans.push(Span::styled("\u{25a0} ", Style::default().fg(*color)));
        spans.push(Span::styled(
            format!("{}  ", label),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn slot_span(slot: &Slot) -> Span<'static> {
    let style = element_style(&slot.elem.roles);
    Span::styled(
        format!(" {} ", slot.value()),
        Style::default()
            .fg(Color::Black)
            .bg(if slot.elem.roles.is_empty() {
                DEFAULT_THEME.primary
            } else {
                style.color
            })
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the stack vertically, top element first, with a TOP marker.
pub fn render_stack_pane(frame: &mut Frame, area: Rect, stack: &Stack) {
    let block = Block::default()
        .title(" Stack (LIFO) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let items: Vec<ListItem> = if stack.is_empty() {
        vec![ListItem::new(Line::styled(
            "  (empty stack)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))]
    } else {
        stack
            .slots()
            .iter()
            .rev()
            .enumerate()
            .map(|(row, slot)| {
                let mut spans = vec![Span::raw("  "), slot_span(slot)];
                if row == 0 {
                    spans.push(Span::styled(
                        "  \u{2190} TOP (push/pop here)",
                        Style::default().fg(DEFAULT_THEME.secondary),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };
    frame.render_widget(List::new(items).block(block), area);
}

/// Render the queue horizontally, front on the left.
pub fn render_queue_pane(frame: &mut Frame, area: Rect, queue: &Queue) {
    let block = Block::default()
        .title(" Queue (FIFO) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let line = if queue.is_empty() {
        Line::styled(
            "  (empty queue)",
            Style::default().fg(DEFAULT_THEME.comment),
        )
    } else {
        let mut spans = vec![Span::styled(
            "  front \u{2192} ",
            Style::default().fg(DEFAULT_THEME.secondary),
        )];
        for (i, slot) in queue.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{00b7} ", Style::default().fg(DEFAULT_THEME.comment)));
            }
            spans.push(slot_span(slot));
        }
        spans.push(Span::styled(
            " \u{2190} rear",
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
        Line::from(spans)
    };
    let paragraph = Paragraph::new(line).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the linked list as value boxes joined by arrows, with a cursor on
/// the insertion index.
pub fn render_list_pane(frame: &mut Frame, area: Rect, list: &LinkedList, cursor: usize) {
    let block = Block::default()
        .title(" Linked List ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let line = if list.is_empty() {
        Line::styled(
            "  (empty list)",
            Style::default().fg(DEFAULT_THEME.comment),
        )
    } else {
        let mut spans = vec![Span::raw("  ")];
        for (i, slot) in list.slots().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    " \u{2192} ",
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            if i == cursor {
                spans.push(Span::styled(
                    "\u{25bc}",
                    Style::default().fg(DEFAULT_THEME.secondary),
                ));
            }
            spans.push(slot_span(slot));
        }
        spans.push(Span::styled(
            " \u{2192} \u{2205}",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        Line::from(spans)
    };
    let paragraph = Paragraph::new(line).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the home page: what each page shows and the shared keymap.
pub fn render_home(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Algorithm Visualizer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let dim = Style::default().fg(DEFAULT_THEME.comment);
    let bright = Style::default().fg(DEFAULT_THEME.fg);
    let key = Style::default()
        .fg(DEFAULT_THEME.border_focused)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::styled("  Watch classic algorithms run one observable step at a time.", bright),
        Line::from(""),
        Line::from(vec![Span::styled("  2 ", key), Span::styled("Bubble Sort    ", bright), Span::styled("adjacent compare-and-swap passes", dim)]),
        Line::from(vec![Span::styled("  3 ", key), Span::styled("Quick Sort     ", bright), Span::styled("Lomuto partition over a worklist of ranges", dim)]),
        Line::from(vec![Span::styled("  4 ", key), Span::styled("Binary Search  ", bright), Span::styled("halving a sorted range toward the target", dim)]),
        Line::from(vec![Span::styled("  5 ", key), Span::styled("Stack          ", bright), Span::styled("LIFO push / pop / peek", dim)]),
        Line::from(vec![Span::styled("  6 ", key), Span::styled("Queue          ", bright), Span::styled("FIFO enqueue / dequeue / front / rear", dim)]),
        Line::from(vec![Span::styled("  7 ", key), Span::styled("Linked List    ", bright), Span::styled("positional insert / delete with node identity", dim)]),
        Line::from(""),
        Line::from(vec![Span::styled("  Algorithm pages:  ", dim), Span::styled("space", key), Span::styled(" play/pause   ", bright), Span::styled("s", key), Span::styled(" single step   ", bright), Span::styled("r", key), Span::styled(" reset   ", bright), Span::styled("+/-", key), Span::styled(" speed", bright)]),
        Line::from(vec![Span::styled("                    ", dim), Span::styled("a", key), Span::styled(" add value   ", bright), Span::styled("x", key), Span::styled(" remove last   ", bright), Span::styled("t", key), Span::styled(" set target (search)", bright)]),
        Line::from(vec![Span::styled("  Container pages:  ", dim), Span::styled("a", key), Span::styled(" add   ", bright), Span::styled("d", key), Span::styled(" remove   ", bright), Span::styled("w/f/b", key), Span::styled(" peek/front/rear   ", bright), Span::styled("c", key), Span::styled(" clear", bright)]),
        Line::from(vec![Span::styled("  Everywhere:       ", dim), Span::styled("Tab/1-7", key), Span::styled(" switch page   ", bright), Span::styled("q", key), Span::styled(" quit", bright)]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the bottom status bar: run status chip, message, keybinds.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: Option<RunStatus>,
    message: &str,
    keys: &[(&str, &str)],
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut left_spans = Vec::new();
    if let Some(status) = status {
        let (text, color) = match status {
            RunStatus::Idle => (" IDLE ", DEFAULT_THEME.comment),
            RunStatus::Running => (" \u{25b6} RUNNING ", DEFAULT_THEME.success),
            RunStatus::Paused => (" \u{23f8} PAUSED ", DEFAULT_THEME.secondary),
            RunStatus::Terminated => (" DONE ", DEFAULT_THEME.primary),
        };
        left_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }
    left_spans.push(Span::styled(
        format!(" {} ", message),
        Style::default()
            .bg(DEFAULT_THEME.status_bg)
            .fg(DEFAULT_THEME.fg),
    ));
    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let mut right_spans = Vec::new();
    for (binding, desc) in keys {
        right_spans.push(Span::styled(format!(" {} ", binding), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }
    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}

/// Render the input prompt line shown while the user is typing a value.
pub fn render_input_line(frame: &mut Frame, area: Rect, prompt: &str, buffer: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", prompt),
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}\u{2588}", buffer),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            "  (Enter to confirm, Esc to cancel)",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().bg(DEFAULT_THEME.status_bg));
    frame.render_widget(paragraph, area);
}
