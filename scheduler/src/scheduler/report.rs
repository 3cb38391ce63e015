use super::{policy::Simulation, process::Time, schedule::Schedule};
use std::fmt::Write;

/// Plain-text rendering of a run: the metrics table, a Gantt chart and the
/// averages.
pub fn render(simulation: &Simulation) -> String {
    let mut out = String::new();
    let summary = simulation.summary();

    let _ = writeln!(out, "{}", simulation.policy);
    let _ = writeln!(
        out,
        "{:>5} {:>8} {:>6} {:>9} {:>8} {:>11} {:>11} {:>9}",
        "PID", "Arrival", "Burst", "Priority", "Waiting", "Turnaround", "Completion", "Response"
    );
    for process in &simulation.processes {
        let _ = writeln!(
            out,
            "{:>5} {:>8} {:>6} {:>9} {:>8} {:>11} {:>11} {:>9}",
            process.pid(),
            process.arrival_time(),
            process.burst_time(),
            process.priority(),
            field(process.waiting_time()),
            field(process.turnaround_time()),
            field(process.completion_time()),
            field(process.response_time()),
        );
    }

    out.push('\n');
    out.push_str(&gantt(&simulation.schedule));
    out.push('\n');

    let _ = writeln!(out, "Average waiting time:    {:.2}", summary.average_waiting);
    let _ = writeln!(out, "Average turnaround time: {:.2}", summary.average_turnaround);
    let _ = writeln!(out, "Average response time:   {:.2}", summary.average_response);
    let _ = writeln!(
        out,
        "CPU utilisation:         {:.1}% ({} idle of {})",
        summary.cpu_utilisation * 100.0,
        summary.idle_time,
        summary.makespan
    );
    out
}

/// Two lines: the bars (`| P1 | P2 |`, idle gaps as `--`) and the boundary
/// times underneath.
pub fn gantt(schedule: &Schedule) -> String {
    let mut bars = String::from("|");
    let mut ticks = String::from("0");
    let mut clock: Time = 0;

    for interval in schedule {
        if interval.start > clock {
            push_segment(&mut bars, &mut ticks, "--", interval.start);
        }
        push_segment(&mut bars, &mut ticks, &format!("P{}", interval.pid), interval.end);
        clock = interval.end;
    }

    format!("{bars}\n{ticks}\n")
}

fn push_segment(bars: &mut String, ticks: &mut String, label: &str, end: Time) {
    let width = label.len() + 2;
    let _ = write!(bars, " {label} |");
    let _ = write!(ticks, "{:>width$}", end, width = width + 1);
}

fn field(value: Option<Time>) -> String {
    value.map_or_else(|| "-".to_owned(), |value| value.to_string())
}
