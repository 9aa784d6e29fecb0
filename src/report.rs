//! Reports on the state of clinic queues.
//!
//! There are two kinds of report, both implementing [`Report`]. Callers can hold either one
//! behind a [`ReportMaker`] and so switch between them without branching.
use crate::clinic::Clinic;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// The kinds of report which can be produced
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportKind {
    /// Queue sizes only
    Simple,
    /// Queue sizes and wait times
    #[default]
    Complex,
}

/// A report over a list of clinics
pub trait Report {
    /// The lines of the report, starting with a header
    fn details(&self) -> Vec<String>;

    /// Write the report, one line at a time
    fn print_details(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in self.details() {
            writeln!(out, "{line}")?;
        }

        Ok(())
    }
}

/// The line giving the number of people queueing at a clinic
fn lineup_line(clinic: &Clinic) -> String {
    format!("{} - {} People In Lineup", clinic.name, clinic.size())
}

/// A report giving the queue size at each clinic
pub struct SimpleReport<'a> {
    clinics: Vec<&'a Clinic>,
}

impl<'a> SimpleReport<'a> {
    /// Create a report over the given clinics
    pub fn new(clinics: Vec<&'a Clinic>) -> Self {
        Self { clinics }
    }
}

impl Report for SimpleReport<'_> {
    fn details(&self) -> Vec<String> {
        let mut lines = vec!["Simple Report:".to_string()];
        lines.extend(self.clinics.iter().map(|clinic| lineup_line(clinic)));
        lines
    }
}

/// A report giving the estimated wait time and queue size at each clinic
pub struct ComplexReport<'a> {
    clinics: Vec<&'a Clinic>,
}

impl<'a> ComplexReport<'a> {
    /// Create a report over the given clinics
    pub fn new(clinics: Vec<&'a Clinic>) -> Self {
        Self { clinics }
    }
}

impl Report for ComplexReport<'_> {
    fn details(&self) -> Vec<String> {
        let mut lines = vec!["Complex Report:".to_string()];
        for clinic in &self.clinics {
            lines.push(format!(
                "Average Wait Time at {}: {} min",
                clinic.name,
                clinic.current_wait_time()
            ));
            lines.push(lineup_line(clinic));
        }
        lines
    }
}

/// Holds a report of either kind and forwards to it
pub struct ReportMaker<'a> {
    report: Box<dyn Report + 'a>,
}

impl<'a> ReportMaker<'a> {
    /// Wrap an existing report
    pub fn new(report: Box<dyn Report + 'a>) -> Self {
        Self { report }
    }

    /// Create a report of the given kind over the given clinics
    pub fn from_kind<I>(kind: ReportKind, clinics: I) -> Self
    where
        I: IntoIterator<Item = &'a Clinic>,
    {
        let clinics = clinics.into_iter().collect();
        let report: Box<dyn Report + 'a> = match kind {
            ReportKind::Simple => Box::new(SimpleReport::new(clinics)),
            ReportKind::Complex => Box::new(ComplexReport::new(clinics)),
        };

        Self::new(report)
    }
}

impl Report for ReportMaker<'_> {
    fn details(&self) -> Vec<String> {
        self.report.details()
    }

    fn print_details(&self, out: &mut dyn Write) -> io::Result<()> {
        self.report.print_details(out)
    }
}
