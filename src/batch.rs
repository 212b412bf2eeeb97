//! Worker pool: a fixed set of workers drains a pre-loaded task queue and
//! reports one [`FileOutcome`] per file to a single aggregator.

use crate::config::ResizeRequest;
use crate::constants::WORKER_THREAD_PREFIX;
use crate::discovery::RunMode;
use crate::error::{ResizeError, Result};
use crate::processing::{process_file, ImageCodec, ResizeReport};
use crate::utils::{create_progress_bar, print_resize_report};
use crossbeam::channel::{bounded, Receiver, Sender};
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of processing one queued file.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<ResizeReport>,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Failed inputs with their errors, in the order outcomes arrived
    pub failures: Vec<(PathBuf, ResizeError)>,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Final report line for a run in `mode`.
    pub fn completion_line(&self, mode: RunMode) -> String {
        let prefix = match mode {
            RunMode::Single => "Processing completed",
            RunMode::Batch => "Batch processing completed",
        };
        format!("{}: {} success, {} errors", prefix, self.succeeded, self.failed)
    }

    fn record(&mut self, outcome: FileOutcome) -> Option<ResizeReport> {
        match outcome.result {
            Ok(report) => {
                self.succeeded += 1;
                Some(report)
            }
            Err(e) => {
                self.failed += 1;
                self.failures.push((outcome.input, e));
                None
            }
        }
    }
}

/// Resizes every file in `files` on a pool of exactly `workers` threads.
///
/// Per-file failures are recorded in the returned summary and never stop
/// the run. Per-file detail is printed for a [`RunMode::Single`] run or when
/// the request is verbose; a quiet batch only shows a progress bar and the
/// final counts.
///
/// # Arguments
/// * `files` - Resolved input files, each processed exactly once
/// * `workers` - Number of worker threads, must be non-zero
/// * `request` - Run-wide settings shared read-only by every worker
/// * `codec` - Decode/resize/encode implementation
/// * `mode` - How the inputs were resolved, controls reporting
///
/// # Returns
/// * `Ok(BatchSummary)` - Once every file has produced an outcome
/// * `Err(ResizeError)` - If the pool could not be started
pub fn run_batch<C: ImageCodec>(
    files: Vec<PathBuf>,
    workers: usize,
    request: &ResizeRequest,
    codec: &C,
    mode: RunMode,
) -> Result<BatchSummary> {
    if workers == 0 {
        return Err(ResizeError::InvalidWorkerCount);
    }

    let start_time = Instant::now();
    let total = files.len();
    let detailed = mode == RunMode::Single || request.verbose;

    if mode == RunMode::Batch {
        println!("Found {} image files", total);
        if request.verbose {
            println!("Using {} workers", workers);
        }
    }

    let mut summary = BatchSummary::default();
    if total == 0 {
        println!("{}", summary.completion_line(mode));
        return Ok(summary);
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("{}-{}", WORKER_THREAD_PREFIX, index))
        .build()?;

    let (task_tx, task_rx) = bounded::<PathBuf>(total);
    for file in files {
        task_tx
            .send(file)
            .map_err(|e| ResizeError::TaskQueueClosed(e.into_inner()))?;
    }
    // Closed queue: workers exit once it is drained.
    drop(task_tx);

    let (outcome_tx, outcome_rx) = bounded::<FileOutcome>(total);

    let progress = (mode == RunMode::Batch && !request.verbose)
        .then(|| create_progress_bar(total as u64));

    thread::scope(|scope| {
        scope.spawn(move || {
            pool.scope(|s| {
                for worker_id in 0..workers {
                    let tasks = task_rx.clone();
                    let outcomes = outcome_tx.clone();
                    s.spawn(move |_| worker_loop(worker_id, &tasks, &outcomes, request, codec));
                }
            });
            debug!("All {} workers exited", workers);
        });

        for outcome in outcome_rx.iter().take(total) {
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            if let Err(e) = &outcome.result {
                debug!("Failed to process {}: {}", outcome.input.display(), e);
                if request.verbose {
                    println!("Error: {}", e);
                }
            }
            if let Some(report) = summary.record(outcome) {
                if detailed {
                    print_resize_report(&report);
                }
            }
        }
    });

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    summary.elapsed = start_time.elapsed();
    debug!(
        "Processed {} files in {:?} with {} workers",
        summary.total(),
        summary.elapsed,
        workers
    );
    println!("{}", summary.completion_line(mode));

    Ok(summary)
}

fn worker_loop<C: ImageCodec + ?Sized>(
    worker_id: usize,
    tasks: &Receiver<PathBuf>,
    outcomes: &Sender<FileOutcome>,
    request: &ResizeRequest,
    codec: &C,
) {
    debug!("Worker {} started", worker_id);
    for input in tasks.iter() {
        let result = process_file(&input, request, codec);
        if outcomes.send(FileOutcome { input, result }).is_err() {
            break;
        }
    }
    debug!("Worker {} finished", worker_id);
}
