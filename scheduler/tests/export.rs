/*!
 * Results Export Tests
 * CSV table, text report and configuration loading
 */

use cpu_scheduler_sim::scheduler::{render, write_csv, CSV_HEADER};
use cpu_scheduler_sim::{simulate, ConfigError, Policy, ProcessSpec, SchedulerError, SimConfig};
use pretty_assertions::assert_eq;
use std::io::Write;

fn fcfs_run() -> cpu_scheduler_sim::Simulation {
    let specs = [
        ProcessSpec::with_priority(1, 0, 5, 2),
        ProcessSpec::with_priority(2, 1, 3, 0),
        ProcessSpec::with_priority(3, 2, 8, 1),
    ];
    simulate(&specs, Policy::Fcfs).unwrap()
}

#[test]
fn test_csv_has_header_and_one_row_per_process() {
    let simulation = fcfs_run();
    let mut out = Vec::new();
    write_csv(&mut out, &simulation.processes).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "PID,Arrival,Burst,Priority,Waiting,Turnaround,Completion,Response\n\
         1,0,5,2,0,5,5,0\n\
         2,1,3,0,4,7,8,4\n\
         3,2,8,1,6,14,16,6\n"
    );
    assert_eq!(CSV_HEADER.len(), 8);
}

#[test]
fn test_report_lists_processes_and_timeline() {
    let report = render(&fcfs_run());

    assert!(report.starts_with("First-Come-First-Served\n"));
    assert!(report.contains("| P1 | P2 | P3 |"));
    assert!(report.contains("Average waiting time:    3.33"));
    assert!(report.contains("CPU utilisation:         100.0% (0 idle of 16)"));
}

#[test]
fn test_summary_averages() {
    let summary = fcfs_run().summary();

    assert_eq!(summary.makespan, 16);
    assert_eq!(summary.busy_time, 16);
    assert_eq!(summary.average_turnaround, 26.0 / 3.0);
    assert_eq!(summary.cpu_utilisation, 1.0);
}

#[test]
fn test_config_file_round_trip_through_simulation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "policy": "rr",
            "quantum": 2,
            "processes": [
                {{ "pid": 1, "arrival_time": 0, "burst_time": 5 }},
                {{ "pid": 2, "arrival_time": 1, "burst_time": 3, "priority": 4 }}
            ],
            "animate": false
        }}"#
    )
    .unwrap();

    let config = SimConfig::from_path(file.path()).unwrap();
    assert!(!config.animate);
    assert_eq!(config.policy().unwrap(), Policy::RoundRobin { quantum: 2 });

    let simulation = config.simulate().unwrap();
    assert_eq!(simulation.process(2).unwrap().priority(), 4);
    assert_eq!(simulation.schedule.makespan(), 8);
}

#[test]
fn test_config_errors() {
    assert!(matches!(
        SimConfig::from_path("/nonexistent/scheduler.json"),
        Err(ConfigError::Io { .. })
    ));
    assert!(matches!(
        SimConfig::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));

    let config = SimConfig::from_json(
        r#"{ "policy": "sjf", "processes": [ { "pid": 1, "arrival_time": 0, "burst_time": -3 } ] }"#,
    )
    .unwrap();
    assert!(matches!(
        config.simulate(),
        Err(ConfigError::Scheduler(SchedulerError::InvalidInput(_)))
    ));
}

#[test]
fn test_demo_config_is_valid() {
    let simulation = SimConfig::demo().simulate().unwrap();
    assert_eq!(simulation.processes.len(), 5);
}
