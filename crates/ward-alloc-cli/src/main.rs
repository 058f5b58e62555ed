// Copyright (c) 2025 ward-alloc contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use ward_alloc_model::prelude::{InstanceLoader, Problem, ScheduleValidator};
use ward_alloc_solver::prelude::{GoodLpBackend, MilpScheduler};

fn find_instances_dir() -> Option<PathBuf> {
    let mut cur: Option<&Path> = Some(Path::new(env!("CARGO_MANIFEST_DIR")));
    while let Some(p) = cur {
        let cand = p.join("instances");
        if cand.is_dir() {
            return Some(cand);
        }
        cur = p.parent();
    }
    None
}

/// Instance files to run: the paths given on the command line, or every
/// `.json` file in the nearest `instances/` directory when none are.
fn instance_paths() -> Vec<PathBuf> {
    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if !args.is_empty() {
        return args;
    }

    let Some(inst_dir) = find_instances_dir() else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = match std::fs::read_dir(&inst_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_type().map(|ft| ft.is_file()).unwrap_or(false)
                    && e.path().extension().map(|x| x == "json").unwrap_or(false)
            })
            .map(|e| e.path())
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

fn instances() -> impl Iterator<Item = (Problem, String)> {
    instance_paths().into_iter().filter_map(|f| {
        let loader = InstanceLoader::default();
        match loader.from_path(&f) {
            Ok(problem) => {
                let name = f
                    .file_name()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| f.to_string_lossy().into_owned());
                Some((problem, name))
            }
            Err(e) => {
                tracing::error!("Skipping {}: {}", f.display(), e);
                None
            }
        }
    })
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Serialize)]
struct RunRecord {
    iteration: usize,
    filename: String,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    status: String,
    admitted: Option<usize>,
    total_delay: Option<i64>,
    objective: Option<f64>,
}

fn main() {
    enable_tracing();

    let scheduler = MilpScheduler::new(GoodLpBackend::new());
    let mut results: Vec<RunRecord> = Vec::new();

    for (iter, (problem, file)) in instances().enumerate() {
        let iteration = iter + 1;

        tracing::info!(
            "Solving [{}] {} with {} rooms, {} patients and {} nurses over {} days",
            iteration,
            file,
            problem.rooms().len(),
            problem.patients().len(),
            problem.nurses().len(),
            problem.horizon().value()
        );

        let start_ts = Utc::now();
        let t0 = Instant::now();
        let outcome = scheduler.solve(&problem);
        let runtime = t0.elapsed();
        let end_ts = Utc::now();

        let record = match outcome {
            Ok(outcome) => {
                let status = outcome.status();
                match outcome.schedule() {
                    Some(schedule) => {
                        if let Err(e) = ScheduleValidator::validate(&problem, schedule) {
                            tracing::error!(
                                "Schedule for [{}] {} fails validation: {}",
                                iteration,
                                file,
                                e
                            );
                        }
                        tracing::info!(
                            "Finished [{}] {}: status={}, admitted={}, total_delay={}, runtime={:?}",
                            iteration,
                            file,
                            status,
                            schedule.admitted_count(),
                            schedule.total_delay(),
                            runtime
                        );
                        for stay in schedule.iter_stays() {
                            tracing::info!(
                                "  patient {} -> room {}, days [{}, {})",
                                stay.patient(),
                                stay.room(),
                                stay.admission(),
                                stay.departure()
                            );
                        }
                        RunRecord {
                            iteration,
                            filename: file,
                            start_ts,
                            end_ts,
                            runtime_ms: runtime.as_millis(),
                            status: status.to_string(),
                            admitted: Some(schedule.admitted_count()),
                            total_delay: Some(schedule.total_delay()),
                            objective: outcome.objective_value(),
                        }
                    }
                    None => {
                        tracing::warn!(
                            "No schedule for [{}] {}: status={}, runtime={:?}",
                            iteration,
                            file,
                            status,
                            runtime
                        );
                        RunRecord {
                            iteration,
                            filename: file,
                            start_ts,
                            end_ts,
                            runtime_ms: runtime.as_millis(),
                            status: status.to_string(),
                            admitted: None,
                            total_delay: None,
                            objective: None,
                        }
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed [{}] {}: {}", iteration, file, e);
                RunRecord {
                    iteration,
                    filename: file,
                    start_ts,
                    end_ts,
                    runtime_ms: runtime.as_millis(),
                    status: format!("Error({})", e),
                    admitted: None,
                    total_delay: None,
                    objective: None,
                }
            }
        };
        results.push(record);
    }

    if results.is_empty() {
        tracing::warn!("No instances found; pass instance files or add an instances/ directory");
        return;
    }

    let out_path = PathBuf::from("scheduler_results.json");
    match File::create(&out_path).and_then(|mut f| {
        let json = serde_json::to_string_pretty(&results).expect("serialize results");
        f.write_all(json.as_bytes())
    }) {
        Ok(()) => {
            tracing::info!(
                "Wrote {} run record(s) to {}",
                results.len(),
                out_path.display()
            );
        }
        Err(e) => {
            tracing::error!("Failed to write results to {}: {}", out_path.display(), e);
        }
    }
}
