//! Check command - validate one resolved version against a rule list.

use anyhow::Result;
use clap::Args;

use crate::output::{Format, GateRecord, Report};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Component that requires the package
    pub component: String,

    /// Package whose version is checked
    pub package: String,

    /// Resolved version of the package (empty when unknown)
    pub version: String,

    /// Rules: exact versions, ranges (MIN...MAX) and exclusions (!VERSION)
    pub rules: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn execute(args: CheckArgs, quiet: bool) -> Result<i32> {
    let outcome = vergate_semver::validate(&args.component, &args.package, &args.version, args.rules.as_slice());
    let version = (!args.version.is_empty()).then_some(args.version.as_str());

    let report = Report::new(vec![GateRecord::new(&args.component, &args.package, version, &outcome)]);
    let rendered = report.render(args.format, quiet)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(report.exit_code())
}
