use super::{policy::Simulation, process::Time, runner::RunnerEvent};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
};
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

// Terminal columns per simulated time unit
const UNIT_WIDTH: usize = 3;

const PALETTE: [Color; 5] = [
    Color::LightRed,
    Color::Yellow,
    Color::LightGreen,
    Color::Magenta,
    Color::LightBlue,
];

static COLUMN_WIDTHS: [Constraint; 8] = [
    Constraint::Length(5),
    Constraint::Length(8),
    Constraint::Length(6),
    Constraint::Length(9),
    Constraint::Length(8),
    Constraint::Length(11),
    Constraint::Length(11),
    Constraint::Length(9),
];

pub struct TimelineTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl TimelineTerminal {
    pub fn new(tick_rate: Duration) -> Result<Self, io::Error> {
        crossterm::terminal::enable_raw_mode()?;

        // Set up the input handling thread
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => return,
                }

                if last_tick.elapsed() >= tick_rate {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, input_rx })
    }

    /// Draws the run as it looks at `clock`: the timeline grown up to that
    /// time and metrics only for processes that have finished by then.
    pub fn draw(&mut self, simulation: &Simulation, clock: Time, paused: bool) -> io::Result<()> {
        let makespan = simulation.schedule.makespan();
        let activity = if clock >= makespan {
            "Execution completed!".to_owned()
        } else {
            match simulation.schedule.running_at(clock) {
                Some(pid) => format!("Running: P{pid}"),
                None => "CPU idle".to_owned(),
            }
        };
        let status = format!(
            "t = {} / {} | {} | {}",
            clock,
            makespan,
            activity,
            if paused {
                "paused (r: resume, s: step, q: quit)"
            } else {
                "p: pause, q: quit"
            }
        );

        let rows = simulation.processes.iter().map(|process| {
            let done = process
                .completion_time()
                .map_or(false, |completion| completion <= clock);
            let reveal = |value: Option<Time>| match value {
                Some(value) if done => value.to_string(),
                _ => "-".to_owned(),
            };
            Row::new(vec![
                Cell::from(process.pid().to_string()).style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .fg(colour(process.pid())),
                ),
                Cell::from(process.arrival_time().to_string()),
                Cell::from(process.burst_time().to_string()),
                Cell::from(process.priority().to_string()),
                Cell::from(reveal(process.waiting_time())),
                Cell::from(reveal(process.turnaround_time())),
                Cell::from(reveal(process.completion_time())),
                Cell::from(reveal(process.response_time())),
            ])
        });

        let title = simulation.policy.to_string();

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(4),
                    Constraint::Min(5),
                ])
                .split(f.size());

            let status = Paragraph::new(status)
                .style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .fg(Color::LightBlue),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(title.as_str())
                        .border_type(BorderType::Rounded),
                );
            f.render_widget(status, chunks[0]);

            // Two columns go to the block borders
            let columns = usize::from(chunks[1].width.saturating_sub(2));
            let gantt = Paragraph::new(timeline_spans(simulation, clock, columns))
                .block(Block::default().borders(Borders::ALL).title("Timeline"));
            f.render_widget(gantt, chunks[1]);

            let table = Table::new(rows)
                .header(
                    Row::new(vec![
                        "PID",
                        "Arrival",
                        "Burst",
                        "Priority",
                        "Waiting",
                        "Turnaround",
                        "Completion",
                        "Response",
                    ])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .widths(&COLUMN_WIDTHS)
                .block(Block::default().title("Processes").borders(Borders::ALL))
                .style(Style::default().fg(Color::LightGreen))
                .column_spacing(1);
            f.render_widget(table, chunks[2]);
        })?;

        Ok(())
    }

    pub fn get_input(&self) -> RunnerEvent {
        // Get the user's input and return a matching event
        match self.input_rx.recv() {
            Ok(DisplayEvent::Input(key)) if key.modifiers.is_empty() => match key.code {
                KeyCode::Char('q') => RunnerEvent::Quit,
                KeyCode::Char('p') => RunnerEvent::Pause,
                KeyCode::Char('r') => RunnerEvent::Resume,
                KeyCode::Char('s') => RunnerEvent::Step,
                _ => RunnerEvent::None,
            },
            Ok(_) => RunnerEvent::None,
            // The input thread is gone, nothing more can be read
            Err(_) => RunnerEvent::Quit,
        }
    }
}

impl Drop for TimelineTerminal {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show);
    }
}

fn colour(pid: u64) -> Color {
    PALETTE[(pid % PALETTE.len() as u64) as usize]
}

/// Bar line plus time axis for everything that ran before `clock`, cut off
/// at `max_columns`.
fn timeline_spans(simulation: &Simulation, clock: Time, max_columns: usize) -> Vec<Spans<'static>> {
    let mut bars = Vec::new();
    let mut axis = String::new();
    let mut drawn: Time = 0;
    let mut used = 0;

    for interval in simulation.schedule.iter().take_while(|i| i.start < clock) {
        let end = interval.end.min(clock);
        if interval.start > drawn {
            let gap = width(interval.start - drawn).min(max_columns - used);
            bars.push(Span::raw(" ".repeat(gap)));
            used += gap;
        }

        let cells = width(end - interval.start).min(max_columns - used);
        if cells == 0 {
            break;
        }
        let label: String = format!("{:^cells$}", format!("P{}", interval.pid))
            .chars()
            .take(cells)
            .collect();
        bars.push(Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(colour(interval.pid))
                .add_modifier(Modifier::BOLD),
        ));
        used += cells;

        mark(&mut axis, interval.start, max_columns);
        mark(&mut axis, end, max_columns);
        drawn = end;
    }

    vec![Spans::from(bars), Spans::from(axis)]
}

fn width(ticks: Time) -> usize {
    usize::try_from(ticks)
        .unwrap_or(usize::MAX)
        .saturating_mul(UNIT_WIDTH)
}

// Writes `time` on the axis at its column unless something is already there
// or it would not fit
fn mark(axis: &mut String, time: Time, max_columns: usize) {
    let column = width(time);
    let label = time.to_string();
    if axis.len() > column || column.saturating_add(label.len()) > max_columns {
        return;
    }
    axis.push_str(&" ".repeat(column - axis.len()));
    axis.push_str(&label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{simulate, Policy, ProcessSpec};

    #[test]
    fn timeline_stays_within_the_drawing_area() {
        let specs = [
            ProcessSpec::new(1, 0, i64::MAX / 2),
            ProcessSpec::new(2, 1, 4),
        ];
        let simulation = simulate(&specs, Policy::Sjf).unwrap();
        let lines = timeline_spans(&simulation, simulation.schedule.makespan(), 40);

        assert!(lines.iter().all(|line| line.width() <= 40));
        assert_eq!(lines[0].width(), 40);
    }

    #[test]
    fn timeline_labels_each_run() {
        let specs = [ProcessSpec::new(1, 0, 2), ProcessSpec::new(2, 3, 1)];
        let simulation = simulate(&specs, Policy::Fcfs).unwrap();
        let lines = timeline_spans(&simulation, 4, 80);

        let bars: String = lines[0].0.iter().map(|span| span.content.as_ref()).collect();
        let axis: String = lines[1].0.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(bars, "  P1     P2 ");
        assert_eq!(axis, "0     2  3  4");
    }
}
