use clap::Parser;

/// Split a concatenated Verilog netlist into one file per module.
///
/// Reads build/sim/TestTop.v and writes build/sim/files/<module>.v,
/// wiping build/sim/files/ first.
#[derive(Parser, Debug)]
#[command(name = "vsplit", version, about)]
pub struct Args {
    /// Print each module file as it is written
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a JSON report instead of the summary
    #[arg(long)]
    pub json: bool,
}
