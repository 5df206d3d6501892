//! `search` command: run one query to completion and print every row.
//!
//! Responsibilities:
//! - Report progress on stderr (query, job id, dispatch state per tick).
//! - Wait without a deadline; only Ctrl+C stops the poller.
//! - Print the formatted results on stdout.

use std::io::Write;

use anyhow::Result;
use splunk_search_client::{
    JobHandle, JobStatus, PollConfig, SearchObserver, SearchRequest, SplunkClient, run_search,
};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::print_output;
use crate::formatters::{OutputFormat, get_formatter};

/// Writes lifecycle progress lines to a stderr-like sink.
pub struct CliProgress<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> CliProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> SearchObserver for CliProgress<W> {
    fn on_submit(&mut self, query: &str) {
        let _ = writeln!(self.out, "Running search: {}", query);
    }

    fn on_job_created(&mut self, job: &JobHandle) {
        let _ = writeln!(self.out, "Search job created: {}", job);
    }

    fn on_status(&mut self, status: &JobStatus) {
        if !status.is_done {
            let _ = writeln!(self.out, "Search in progress ({})...", status.dispatch_state);
        }
    }
}

pub async fn run(
    client: &SplunkClient,
    query: &str,
    earliest: Option<String>,
    latest: Option<String>,
    count: i64,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(count, "Executing search");

    let request = SearchRequest::new(query)
        .with_time_range(earliest, latest)
        .with_max_results(count);
    let mut progress = CliProgress::new(std::io::stderr());

    let completion = run_search(
        client,
        &request,
        &PollConfig::unbounded(),
        cancel,
        &mut progress,
    )
    .await?;

    info!(
        sid = %completion.job,
        rows = completion.results.len(),
        "Search finished"
    );

    let output = get_formatter(format).format_search_results(&completion)?;
    print_output(&output)
}
