//! Functionality for running a single registration round.
use crate::registry::Registry;
use crate::report::{Report, ReportKind, ReportMaker};
use anyhow::Result;
use log::info;
use std::io::Write;

/// Printed after the clinic report
pub const END_OF_REPORT: &str = "---End of Report---";

/// Printed after the map
pub const END_OF_MAP: &str = "---End of Map---";

/// Run a registration round.
///
/// Eligible inhabitants are registered for shots, with a notice logged for each one. Then a report
/// of the requested kind and the map of every city are written to `out`.
///
/// # Arguments
///
/// * `registry` - The cities to register inhabitants in
/// * `report_kind` - The kind of report to generate
/// * `out` - Where to write the report and map
pub fn run(registry: &mut Registry, report_kind: ReportKind, out: &mut dyn Write) -> Result<()> {
    info!(
        "Registering unvaccinated inhabitants aged {} and over",
        registry.current_intake
    );
    let notices = registry.register_for_shots();
    for notice in &notices {
        notice.log();
    }
    info!("Registration complete: {} notices", notices.len());

    let report = ReportMaker::from_kind(report_kind, registry.clinics());
    report.print_details(out)?;
    writeln!(out, "{END_OF_REPORT}")?;

    for row in registry.render_map()? {
        writeln!(out, "{row}")?;
    }
    writeln!(out, "{END_OF_MAP}")?;

    Ok(())
}
