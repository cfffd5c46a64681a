//! Console rendering for the text output format
//!
//! Every writer returns `io::Result`. The progress observer cannot return
//! errors from inside the estimator loop, so it keeps the first one, stops
//! writing, and hands it back from [`ConsoleProgress::finish`].

use pi_estimator_core::estimator::progress_percent;
use pi_estimator_core::{
    ElapsedTime, EstimateReport, ProgressObserver, RectangleReport, SearchOutcome, SearchRound,
};
use std::io::{self, Stdout, Write};

/// Width of the blank line written over the progress indicator
const PROGRESS_WIDTH: usize = 49;

/// Prints `\rProgress: 12.34%`, overwriting the same line
#[derive(Debug)]
pub struct ConsoleProgress<W: Write = Stdout> {
    out: W,
    error: Option<io::Error>,
}

impl ConsoleProgress {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// First write error seen, if any
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        let result = self.out.write_fmt(line).and_then(|_| self.out.flush());
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

impl<W: Write> ProgressObserver for ConsoleProgress<W> {
    fn on_progress(&mut self, completed: u64, total: u64) {
        self.write_line(format_args!(
            "\rProgress: {:.2}%",
            progress_percent(completed, total)
        ));
    }

    fn on_finish(&mut self) {
        self.write_line(format_args!("\r{:width$}\r", "", width = PROGRESS_WIDTH));
    }
}

pub fn write_series_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "*** This program calculates an estimate for π ***")?;
    writeln!(out)
}

pub fn write_riemann_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "This program will first calculate an underestimate for π.")?;
    writeln!(out, "It will then calculate an overestimate and average the two")?;
    writeln!(out, "to get a final approximate value for π.")?;
    writeln!(out)
}

/// Under- and overestimate sections of a rectangle run
pub fn write_bounds(out: &mut impl Write, report: &RectangleReport) -> io::Result<()> {
    let under = report.under();
    writeln!(out, "*** Underestimate ***")?;
    writeln!(out, "Underestimate of π: {}", under.estimate)?;
    writeln!(out, "Difference: {}", under.difference)?;
    writeln!(out)?;

    let over = report.over();
    writeln!(out, "*** Overestimate ***")?;
    writeln!(out, "Overestimate of π: {}", over.estimate)?;
    writeln!(out, "Difference: {}", over.difference)?;
    writeln!(out)
}

pub fn write_results(out: &mut impl Write, report: &EstimateReport) -> io::Result<()> {
    writeln!(out, "*** Results ***")?;
    writeln!(out, "Calculated π to be: {}", report.estimate)?;
    writeln!(out, "π actually equals:  {}", report.reference)?;
    writeln!(out, "Difference: {}", report.difference)?;
    writeln!(out)?;
    write_elapsed(out, &report.elapsed)
}

pub fn write_elapsed(out: &mut impl Write, elapsed: &ElapsedTime) -> io::Result<()> {
    writeln!(out, "*** Elapsed Time ***")?;
    writeln!(out, "{}", elapsed)?;
    writeln!(out)
}

pub fn write_search_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "*** Optimum n Value ***")
}

pub fn write_round(out: &mut impl Write, round: &SearchRound) -> io::Result<()> {
    writeln!(out, "n is currently: {}", round.n)?;
    writeln!(out, "Difference is currently: {}", round.error)
}

pub fn write_outcome(out: &mut impl Write, outcome: &SearchOutcome) -> io::Result<()> {
    writeln!(out, "n = {}", outcome.n)?;
    writeln!(
        out,
        "Smallest difference: {} (at n = {}, {} rounds)",
        outcome.best_error, outcome.best_n, outcome.rounds
    )
}
