use argh::FromArgs;
use log::{debug, warn};
use std::io::{self, Write};

use prio_heap::{Compare, Heap, Natural, Reversed, DEFAULT_CAPACITY};

const DEFAULT_VALUES: [i64; 9] = [5, 7, 8, 9, 10, 12, 5, 14, 11];

#[derive(FromArgs, Debug)]
/// Fill a priority queue and drain it step by step.
struct Arguments {
    /// values to insert; a fixed sample is used when none are given
    #[argh(positional)]
    values: Vec<i64>,

    /// maximum number of elements the heap holds
    #[argh(option, short = 'c', default = "DEFAULT_CAPACITY")]
    capacity: usize,

    /// pop the smallest value first
    #[argh(switch)]
    min: bool,

    /// verbose
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn run<C: Compare<i64>, W: Write>(
    mut heap: Heap<i64, C>,
    values: &[i64],
    out: &mut W,
) -> io::Result<()> {
    for &value in values {
        if let Err(e) = heap.push(value) {
            warn!("skipping {}: {}", value, e);
        }
    }

    writeln!(out, "Processing starts")?;
    writeln!(out, "********************************************")?;
    writeln!(out, "Heap:")?;
    heap.print(out)?;
    writeln!(out)?;

    let mut step = 1;
    while let Ok(top) = heap.pop() {
        writeln!(out, "Step {}", step)?;
        writeln!(out, "Top: {}", top)?;
        write!(out, "Heap: ")?;
        heap.print(out)?;
        writeln!(out, "Size: {}", heap.size())?;
        writeln!(out, "Empty: {}", if heap.is_empty() { "Yes" } else { "No" })?;
        writeln!(out)?;
        step += 1;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {:?}", args);

    let values: &[i64] = if args.values.is_empty() {
        &DEFAULT_VALUES
    } else {
        &args.values
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.min {
        run(Heap::with_capacity_by(args.capacity, Reversed), values, &mut out)
    } else {
        run(Heap::with_capacity_by(args.capacity, Natural), values, &mut out)
    }
}
