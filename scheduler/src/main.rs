use anyhow::{bail, Context};
use cpu_scheduler_sim::{
    scheduler::{render, write_csv, TimelineRunner},
    SimConfig,
};
use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use log::info;
use std::{fs::File, io, io::BufWriter, path::PathBuf};

const USAGE: &str = "usage: cpu-scheduler-sim [CONFIG.json] [--policy NAME] [--quantum N] \
                     [--export PATH] [--tick-ms N] [--plain]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    policy: Option<String>,
    quantum: Option<i64>,
    export: Option<PathBuf>,
    tick_ms: Option<u64>,
    plain: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--policy" => parsed.policy = Some(value(&mut args, &arg)?),
                "--quantum" => {
                    let quantum = value(&mut args, &arg)?;
                    parsed.quantum = Some(
                        quantum
                            .parse()
                            .with_context(|| format!("invalid quantum '{quantum}'"))?,
                    );
                }
                "--export" => parsed.export = Some(value(&mut args, &arg)?.into()),
                "--tick-ms" => {
                    let tick = value(&mut args, &arg)?;
                    parsed.tick_ms = Some(
                        tick.parse()
                            .with_context(|| format!("invalid tick rate '{tick}'"))?,
                    );
                }
                "--plain" => parsed.plain = true,
                "-h" | "--help" => {
                    println!("{USAGE}");
                    std::process::exit(0);
                }
                flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n{USAGE}"),
                path if parsed.config.is_none() => parsed.config = Some(path.into()),
                extra => bail!("unexpected argument '{extra}'\n{USAGE}"),
            }
        }
        Ok(parsed)
    }

    fn apply(self, config: &mut SimConfig) {
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if self.quantum.is_some() {
            config.quantum = self.quantum;
        }
        if self.export.is_some() {
            config.export = self.export;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if self.plain {
            config.animate = false;
        }
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    args.next()
        .with_context(|| format!("{flag} expects a value\n{USAGE}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse(std::env::args().skip(1))?;
    let mut config = match &args.config {
        Some(path) => SimConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimConfig::demo(),
    };
    args.apply(&mut config);

    let simulation = config.simulate()?;

    if let Some(path) = &config.export {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_csv(BufWriter::new(file), &simulation.processes)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Results exported to {}", path.display());
    }

    if !config.animate {
        print!("{}", render(&simulation));
        return Ok(());
    }

    execute!(io::stdout(), Clear(ClearType::All))?;
    let mut runner = TimelineRunner::new(simulation.clone(), config.tick_rate())?;
    while runner.run()? {}
    drop(runner);
    execute!(io::stdout(), Clear(ClearType::All))?;

    print!("{}", render(&simulation));
    Ok(())
}
