use super::process::{Process, Time};
use std::io::{self, Write};

pub const CSV_HEADER: [&str; 8] = [
    "PID",
    "Arrival",
    "Burst",
    "Priority",
    "Waiting",
    "Turnaround",
    "Completion",
    "Response",
];

/// Writes one row per process, header first.
pub fn write_csv<W: Write>(mut writer: W, processes: &[Process]) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER.join(","))?;
    for process in processes {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            process.pid(),
            process.arrival_time(),
            process.burst_time(),
            process.priority(),
            cell(process.waiting_time()),
            cell(process.turnaround_time()),
            cell(process.completion_time()),
            cell(process.response_time()),
        )?;
    }
    writer.flush()
}

fn cell(value: Option<Time>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
