//! Main TUI application state and logic

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};

use crate::algorithms::{
    binary_search, bubble, quick_sort, BinarySearch, BubbleSort, QuickSort, StepAlgorithm,
};
use crate::containers::{LinkedList, Queue, Stack};
use crate::scheduler::{RunStatus, Scheduler};
use crate::ui::panes;
use crate::ui::theme::DEFAULT_THEME;

/// Smallest and largest values accepted by the "add value" inputs.
const VALUE_MIN: i64 = 1;
const VALUE_MAX: i64 = 100;

/// Speed slider step per keypress.
const SPEED_STEP: Duration = Duration::from_millis(100);

/// Which page is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Bubble,
    Quick,
    Search,
    Stack,
    Queue,
    List,
}

impl Page {
    const ORDER: [Page; 7] = [
        Page::Home,
        Page::Bubble,
        Page::Quick,
        Page::Search,
        Page::Stack,
        Page::Queue,
        Page::List,
    ];

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|&p| p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    fn from_digit(digit: char) -> Option<Self> {
        let idx = digit.to_digit(10)? as usize;
        if (1..=Self::ORDER.len()).contains(&idx) {
            Some(Self::ORDER[idx - 1])
        } else {
            None
        }
    }
}

/// What a committed input line feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputTarget {
    BubbleAdd,
    QuickAdd,
    SearchAdd,
    SearchTarget,
    StackPush,
    QueueEnqueue,
    ListInsert,
    ListPrepend,
    ListAppend,
}

impl InputTarget {
    fn prompt(self) -> &'static str {
        match self {
            InputTarget::BubbleAdd | InputTarget::QuickAdd | InputTarget::SearchAdd => {
                "Add value (1-100):"
            }
            InputTarget::SearchTarget => "Target value:",
            InputTarget::StackPush => "Value to push:",
            InputTarget::QueueEnqueue => "Value to enqueue:",
            InputTarget::ListInsert => "Value to insert at cursor:",
            InputTarget::ListPrepend => "Value to prepend:",
            InputTarget::ListAppend => "Value to append:",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(
            self,
            InputTarget::BubbleAdd
                | InputTarget::QuickAdd
                | InputTarget::SearchAdd
                | InputTarget::SearchTarget
        )
    }
}

/// Line-input state while the user is typing a value.
struct InputState {
    target: InputTarget,
    buffer: String,
}

/// The main application state.
pub struct App {
    page: Page,

    bubble: BubbleSort,
    bubble_sched: Scheduler,
    bubble_expl: String,

    quick: QuickSort,
    quick_sched: Scheduler,
    quick_expl: String,

    search: BinarySearch,
    search_sched: Scheduler,
    search_expl: String,

    stack: Stack,
    queue: Queue,
    list: LinkedList,
    /// Insertion/deletion cursor on the linked-list page
    list_cursor: usize,

    input: Option<InputState>,
    status_message: String,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            page: Page::Home,
            bubble: BubbleSort::new(&bubble::DEFAULT_SEQUENCE),
            bubble_sched: Scheduler::new(),
            bubble_expl: String::from("Press space to start the bubble sort animation."),
            quick: QuickSort::new(&quick_sort::DEFAULT_SEQUENCE),
            quick_sched: Scheduler::new(),
            quick_expl: String::from(
                "Quick sort picks a pivot and partitions the array around it. Press space to start.",
            ),
            search: BinarySearch::new(
                &binary_search::DEFAULT_SEQUENCE,
                binary_search::DEFAULT_TARGET,
            ),
            search_sched: Scheduler::new(),
            search_expl: String::from("Press space to search for the target value."),
            stack: Stack::new(),
            queue: Queue::new(),
            list: LinkedList::with_defaults(),
            list_cursor: 0,
            input: None,
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    /// Run the TUI event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            self.poll_timers(now);

            // Poll with timeout so timers fire while no key is pressed.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Fire any due scheduler phase on the active page and clear due
    /// container flash flags.
    fn poll_timers(&mut self, now: Instant) {
        match self.page {
            Page::Bubble => {
                if let Some(report) = self.bubble_sched.poll(now, &mut self.bubble) {
                    self.bubble_expl = report.explanation;
                }
            }
            Page::Quick => {
                if let Some(report) = self.quick_sched.poll(now, &mut self.quick) {
                    self.quick_expl = report.explanation;
                }
            }
            Page::Search => {
                if let Some(report) = self.search_sched.poll(now, &mut self.search) {
                    self.search_expl = report.explanation;
                }
            }
            _ => {}
        }
        self.stack.poll_flash(now);
        self.queue.poll_flash(now);
        self.list.poll_flash(now);
    }

    fn set_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        // A run does not survive navigating away from its page.
        match self.page {
            Page::Bubble => self.reset_bubble(),
            Page::Quick => self.reset_quick(),
            Page::Search => self.reset_search(),
            _ => {}
        }
        self.input = None;
        self.page = page;
        self.status_message = panes::PAGE_TITLES[page.index()].to_string();
    }

    fn reset_bubble(&mut self) {
        self.bubble_sched.reset();
        self.bubble.restart();
        self.bubble_expl = String::from("Sequence reset. Press space to start sorting.");
    }

    fn reset_quick(&mut self) {
        self.quick_sched.reset();
        self.quick.restart();
        self.quick_expl = String::from("Sequence reset. Press space to start sorting.");
    }

    fn reset_search(&mut self) {
        self.search_sched.reset();
        self.search.restart();
        self.search_expl = String::from("Ready to search. Press space to begin.");
    }

    /// Space on an algorithm page: Idle starts, Running pauses, Paused
    /// resumes, Terminated is a no-op.
    fn toggle_play(sched: &mut Scheduler, now: Instant) -> &'static str {
        match sched.status() {
            RunStatus::Idle => {
                sched.start(now);
                "Playing..."
            }
            RunStatus::Running => {
                sched.pause();
                "Paused"
            }
            RunStatus::Paused => {
                sched.resume(now);
                "Playing..."
            }
            RunStatus::Terminated => "Run finished. Press r to reset.",
        }
    }

    /// Whether the sequence of the current algorithm page may be edited.
    /// Structural mutation mid-run requires an explicit reset first.
    fn sequence_editable(sched: &Scheduler) -> bool {
        matches!(sched.status(), RunStatus::Idle | RunStatus::Terminated)
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.set_page(self.page.next());
                return;
            }
            KeyCode::BackTab => {
                self.set_page(self.page.prev());
                return;
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(page) = Page::from_digit(c) {
                    self.set_page(page);
                }
                return;
            }
            _ => {}
        }

        let now = Instant::now();
        match self.page {
            Page::Home => {}
            Page::Bubble => self.handle_bubble_key(key, now),
            Page::Quick => self.handle_quick_key(key, now),
            Page::Search => self.handle_search_key(key, now),
            Page::Stack => self.handle_stack_key(key),
            Page::Queue => self.handle_queue_key(key),
            Page::List => self.handle_list_key(key),
        }
    }

    fn handle_bubble_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(' ') => {
                self.status_message = Self::toggle_play(&mut self.bubble_sched, now).to_string();
            }
            KeyCode::Char('s') => {
                if let Some(report) = self.bubble_sched.step_once(&mut self.bubble) {
                    self.bubble_expl = report.explanation;
                    self.status_message = String::from("Stepped");
                }
            }
            KeyCode::Char('r') => {
                self.reset_bubble();
                self.status_message = String::from("Reset");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_speed(Page::Bubble, false),
            KeyCode::Char('-') => self.adjust_speed(Page::Bubble, true),
            KeyCode::Char('a') => {
                if Self::sequence_editable(&self.bubble_sched) {
                    self.open_input(InputTarget::BubbleAdd);
                } else {
                    self.status_message = String::from("Reset (r) before editing the sequence");
                }
            }
            KeyCode::Char('x') => {
                if !Self::sequence_editable(&self.bubble_sched) {
                    self.status_message = String::from("Reset (r) before editing the sequence");
                } else if self.bubble.remove_last() {
                    self.bubble_sched.reset();
                    self.status_message = String::from("Removed last value");
                } else {
                    self.status_message = String::from("Keeping at least one element");
                }
            }
            _ => {}
        }
    }

    fn handle_quick_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(' ') => {
                self.status_message = Self::toggle_play(&mut self.quick_sched, now).to_string();
            }
            KeyCode::Char('s') => {
                if let Some(report) = self.quick_sched.step_once(&mut self.quick) {
                    self.quick_expl = report.explanation;
                    self.status_message = String::from("Stepped");
                }
            }
            KeyCode::Char('r') => {
                self.reset_quick();
                self.status_message = String::from("Reset");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_speed(Page::Quick, false),
            KeyCode::Char('-') => self.adjust_speed(Page::Quick, true),
            KeyCode::Char('a') => {
                if Self::sequence_editable(&self.quick_sched) {
                    self.open_input(InputTarget::QuickAdd);
                } else {
                    self.status_message = String::from("Reset (r) before editing the sequence");
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(' ') => {
                self.status_message = Self::toggle_play(&mut self.search_sched, now).to_string();
            }
            KeyCode::Char('s') => {
                if let Some(report) = self.search_sched.step_once(&mut self.search) {
                    self.search_expl = report.explanation;
                    self.status_message = String::from("Stepped");
                }
            }
            KeyCode::Char('r') => {
                self.reset_search();
                self.status_message = String::from("Reset");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_speed(Page::Search, false),
            KeyCode::Char('-') => self.adjust_speed(Page::Search, true),
            KeyCode::Char('t') => {
                if Self::sequence_editable(&self.search_sched) {
                    self.open_input(InputTarget::SearchTarget);
                } else {
                    self.status_message = String::from("Reset (r) before changing the target");
                }
            }
            KeyCode::Char('a') => {
                if Self::sequence_editable(&self.search_sched) {
                    self.open_input(InputTarget::SearchAdd);
                } else {
                    self.status_message = String::from("Reset (r) before editing the sequence");
                }
            }
            KeyCode::Char('x') => {
                if !Self::sequence_editable(&self.search_sched) {
                    self.status_message = String::from("Reset (r) before editing the sequence");
                } else if self.search.remove_last() {
                    self.search_sched.reset();
                    self.status_message = String::from("Removed last value");
                } else {
                    self.status_message = String::from("Keeping at least three elements");
                }
            }
            _ => {}
        }
    }

    fn handle_stack_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') => self.open_input(InputTarget::StackPush),
            KeyCode::Char('d') => {
                self.stack.pop();
            }
            KeyCode::Char('w') => {
                self.stack.peek();
            }
            KeyCode::Char('c') => self.stack.clear(),
            _ => {}
        }
    }

    fn handle_queue_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') => self.open_input(InputTarget::QueueEnqueue),
            KeyCode::Char('d') => {
                self.queue.dequeue();
            }
            KeyCode::Char('f') => {
                self.queue.front();
            }
            KeyCode::Char('b') => {
                self.queue.rear();
            }
            KeyCode::Char('c') => self.queue.clear(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('[') => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char(']') => {
                // The cursor may sit one past the end (insert == append).
                if self.list_cursor < self.list.len() {
                    self.list_cursor += 1;
                }
            }
            KeyCode::Char('a') => self.open_input(InputTarget::ListInsert),
            KeyCode::Char('p') => self.open_input(InputTarget::ListPrepend),
            KeyCode::Char('e') => self.open_input(InputTarget::ListAppend),
            KeyCode::Char('d') => {
                self.list.delete_at(self.list_cursor);
                self.list_cursor = self.list_cursor.min(self.list.len().saturating_sub(1));
            }
            KeyCode::Char('c') => {
                self.list.clear();
                self.list_cursor = 0;
            }
            _ => {}
        }
    }

    fn adjust_speed(&mut self, page: Page, slower: bool) {
        let sched = match page {
            Page::Bubble => &mut self.bubble_sched,
            Page::Quick => &mut self.quick_sched,
            Page::Search => &mut self.search_sched,
            _ => return,
        };
        let speed = sched.speed();
        let speed = if slower {
            speed.saturating_add(SPEED_STEP)
        } else {
            speed.saturating_sub(SPEED_STEP)
        };
        sched.set_speed(speed);
        self.status_message = format!("Speed: {} ms per step", sched.speed().as_millis());
    }

    fn open_input(&mut self, target: InputTarget) {
        self.input = Some(InputState {
            target,
            buffer: String::new(),
        });
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(input) = self.input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.input = None;
            }
            KeyCode::Backspace => {
                input.buffer.pop();
            }
            KeyCode::Enter => {
                let target = input.target;
                let buffer = input.buffer.clone();
                // Invalid input keeps the prompt open with the buffer intact.
                if self.commit_input(target, &buffer) {
                    self.input = None;
                }
            }
            KeyCode::Char(c) => {
                let numeric = input.target.is_numeric();
                if !numeric || c.is_ascii_digit() || (c == '-' && input.buffer.is_empty()) {
                    input.buffer.push(c);
                }
            }
            _ => {}
        }
    }

    /// Apply a committed input line. Returns false when the input is invalid
    /// and should stay open.
    fn commit_input(&mut self, target: InputTarget, buffer: &str) -> bool {
        let now = Instant::now();
        match target {
            InputTarget::BubbleAdd => match parse_bounded(buffer) {
                Some(value) => {
                    self.bubble.add_value(value);
                    self.bubble_sched.reset();
                    self.status_message = format!("Added {}", value);
                    true
                }
                None => false,
            },
            InputTarget::QuickAdd => match parse_bounded(buffer) {
                Some(value) => {
                    self.quick.add_value(value);
                    self.quick_sched.reset();
                    self.status_message = format!("Added {}", value);
                    true
                }
                None => false,
            },
            InputTarget::SearchAdd => match parse_bounded(buffer) {
                Some(value) => {
                    self.search.add_value(value);
                    self.search_sched.reset();
                    self.status_message = format!("Added {} (kept sorted)", value);
                    true
                }
                None => false,
            },
            InputTarget::SearchTarget => match buffer.trim().parse::<i64>() {
                Ok(value) => {
                    self.search.set_target(value);
                    self.search_sched.reset();
                    self.status_message = format!("Target set to {}", value);
                    true
                }
                Err(_) => false,
            },
            InputTarget::StackPush => {
                let value = buffer.trim();
                if value.is_empty() {
                    return false;
                }
                self.stack.push(value, now);
                true
            }
            InputTarget::QueueEnqueue => {
                let value = buffer.trim();
                if value.is_empty() {
                    return false;
                }
                self.queue.enqueue(value, now);
                true
            }
            InputTarget::ListInsert => {
                let value = buffer.trim();
                if value.is_empty() {
                    return false;
                }
                self.list.insert_at(self.list_cursor, value, now);
                true
            }
            InputTarget::ListPrepend => {
                let value = buffer.trim();
                if value.is_empty() {
                    return false;
                }
                self.list.prepend(value, now);
                true
            }
            InputTarget::ListAppend => {
                let value = buffer.trim();
                if value.is_empty() {
                    return false;
                }
                self.list.append(value, now);
                true
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        panes::render_tabs(frame, chunks[0], self.page.index());

        match self.page {
            Page::Home => panes::render_home(frame, chunks[1]),
            Page::Bubble => self.render_bubble(frame, chunks[1]),
            Page::Quick => self.render_quick(frame, chunks[1]),
            Page::Search => self.render_search(frame, chunks[1]),
            Page::Stack => self.render_stack(frame, chunks[1]),
            Page::Queue => self.render_queue(frame, chunks[1]),
            Page::List => self.render_list(frame, chunks[1]),
        }

        if let Some(input) = &self.input {
            panes::render_input_line(frame, chunks[2], input.target.prompt(), &input.buffer);
        } else {
            let (status, keys) = self.status_bar_content();
            panes::render_status_bar(frame, chunks[2], status, &self.status_message, keys);
        }
    }

    fn status_bar_content(&self) -> (Option<RunStatus>, &'static [(&'static str, &'static str)]) {
        match self.page {
            Page::Home => (None, &[("1-7", "page"), ("q", "quit")]),
            Page::Bubble => (
                Some(self.bubble_sched.status()),
                &[
                    ("\u{2423}", "play"),
                    ("s", "step"),
                    ("r", "reset"),
                    ("+/-", "speed"),
                    ("a/x", "add/remove"),
                ],
            ),
            Page::Quick => (
                Some(self.quick_sched.status()),
                &[
                    ("\u{2423}", "play"),
                    ("s", "step"),
                    ("r", "reset"),
                    ("+/-", "speed"),
                    ("a", "add"),
                ],
            ),
            Page::Search => (
                Some(self.search_sched.status()),
                &[
                    ("\u{2423}", "play"),
                    ("s", "step"),
                    ("r", "reset"),
                    ("t", "target"),
                    ("a/x", "add/remove"),
                ],
            ),
            Page::Stack => (
                None,
                &[("a", "push"), ("d", "pop"), ("w", "peek"), ("c", "clear")],
            ),
            Page::Queue => (
                None,
                &[
                    ("a", "enqueue"),
                    ("d", "dequeue"),
                    ("f/b", "front/rear"),
                    ("c", "clear"),
                ],
            ),
            Page::List => (
                None,
                &[
                    ("\u{2190}/\u{2192}", "cursor"),
                    ("a", "insert"),
                    ("p/e", "prepend/append"),
                    ("d", "delete"),
                    ("c", "clear"),
                ],
            ),
        }
    }

    fn algorithm_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(5),
            ])
            .split(area);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(rows[2]);
        (rows[0], rows[1], bottom[0], bottom[1])
    }

    fn render_bubble(&self, frame: &mut Frame, area: Rect) {
        let (bars, legend, expl, info) = Self::algorithm_layout(area);
        panes::render_bars(frame, bars, "Bubble Sort", self.bubble.elements());
        panes::render_legend(
            frame,
            legend,
            &[
                (DEFAULT_THEME.unsorted, "unsorted"),
                (DEFAULT_THEME.comparing, "comparing"),
                (DEFAULT_THEME.swapping, "swapping"),
                (DEFAULT_THEME.sorted, "sorted"),
            ],
        );
        panes::render_explanation(frame, expl, "Current Step", &self.bubble_expl);
        panes::render_info(
            frame,
            info,
            "Run",
            &[
                (String::from("Size"), self.bubble.len().to_string()),
                (String::from("Pass"), self.bubble.pass().to_string()),
                (
                    String::from("Speed"),
                    format!("{} ms", self.bubble_sched.speed().as_millis()),
                ),
            ],
        );
    }

    fn render_quick(&self, frame: &mut Frame, area: Rect) {
        let (bars, legend, expl, info) = Self::algorithm_layout(area);
        panes::render_bars(frame, bars, "Quick Sort", self.quick.elements());
        panes::render_legend(
            frame,
            legend,
            &[
                (DEFAULT_THEME.unsorted, "unsorted"),
                (DEFAULT_THEME.comparing, "comparing"),
                (DEFAULT_THEME.pivot, "pivot"),
                (DEFAULT_THEME.sorted, "sorted"),
            ],
        );
        panes::render_explanation(frame, expl, "Algorithm Progress", &self.quick_expl);
        panes::render_info(
            frame,
            info,
            "Run",
            &[
                (String::from("Size"), self.quick.len().to_string()),
                (String::from("Placed"), self.quick.sorted_count().to_string()),
                (
                    String::from("Pending ranges"),
                    self.quick.pending_ranges().len().to_string(),
                ),
                (
                    String::from("Speed"),
                    format!("{} ms", self.quick_sched.speed().as_millis()),
                ),
            ],
        );
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let (bars, legend, expl, info) = Self::algorithm_layout(area);
        panes::render_bars(frame, bars, "Binary Search", self.search.elements());
        panes::render_legend(
            frame,
            legend,
            &[
                (DEFAULT_THEME.unsorted, "unsearched"),
                (DEFAULT_THEME.left_bound, "low"),
                (DEFAULT_THEME.right_bound, "high"),
                (DEFAULT_THEME.mid, "mid"),
                (DEFAULT_THEME.found, "found"),
                (DEFAULT_THEME.eliminated, "eliminated"),
            ],
        );
        panes::render_explanation(frame, expl, "Algorithm Progress", &self.search_expl);
        let outcome = if self.search.found() {
            String::from("FOUND")
        } else if self.search.is_done() {
            String::from("NOT FOUND")
        } else {
            String::from("searching")
        };
        panes::render_info(
            frame,
            info,
            "Run",
            &[
                (String::from("Size"), self.search.len().to_string()),
                (String::from("Target"), self.search.target().to_string()),
                (
                    String::from("Iterations"),
                    self.search.iterations().to_string(),
                ),
                (String::from("Outcome"), outcome),
            ],
        );
    }

    fn container_layout(area: Rect) -> (Rect, Rect, Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(5)])
            .split(area);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(rows[1]);
        (rows[0], bottom[0], bottom[1])
    }

    fn render_stack(&self, frame: &mut Frame, area: Rect) {
        let (main, op, info) = Self::container_layout(area);
        panes::render_stack_pane(frame, main, &self.stack);
        panes::render_explanation(frame, op, "Last Operation", self.stack.last_op());
        panes::render_info(
            frame,
            info,
            "Stack",
            &[
                (String::from("Size"), self.stack.len().to_string()),
                (
                    String::from("Is empty"),
                    if self.stack.is_empty() { "yes" } else { "no" }.to_string(),
                ),
                (
                    String::from("Top"),
                    self.stack
                        .top()
                        .map(|s| s.value().to_string())
                        .unwrap_or_else(|| String::from("none")),
                ),
            ],
        );
    }

    fn render_queue(&self, frame: &mut Frame, area: Rect) {
        let (main, op, info) = Self::container_layout(area);
        panes::render_queue_pane(frame, main, &self.queue);
        panes::render_explanation(frame, op, "Last Operation", self.queue.last_op());
        let front = self.queue.iter().next().map(|s| s.value().to_string());
        let rear = self.queue.iter().last().map(|s| s.value().to_string());
        panes::render_info(
            frame,
            info,
            "Queue",
            &[
                (String::from("Size"), self.queue.len().to_string()),
                (
                    String::from("Front"),
                    front.unwrap_or_else(|| String::from("none")),
                ),
                (
                    String::from("Rear"),
                    rear.unwrap_or_else(|| String::from("none")),
                ),
            ],
        );
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let (main, op, info) = Self::container_layout(area);
        panes::render_list_pane(frame, main, &self.list, self.list_cursor);
        panes::render_explanation(frame, op, "Last Operation", self.list.last_op());
        panes::render_info(
            frame,
            info,
            "List",
            &[
                (String::from("Length"), self.list.len().to_string()),
                (String::from("Cursor"), self.list_cursor.to_string()),
                (
                    String::from("At cursor"),
                    self.list
                        .get(self.list_cursor)
                        .map(str::to_string)
                        .unwrap_or_else(|| String::from("(end)")),
                ),
            ],
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an add-value input, accepting only the 1..=100 range.
fn parse_bounded(buffer: &str) -> Option<i64> {
    let value = buffer.trim().parse::<i64>().ok()?;
    if (VALUE_MIN..=VALUE_MAX).contains(&value) {
        Some(value)
    } else {
        None
    }
}
