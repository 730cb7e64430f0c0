//! IPv4 subnet calculator.
//!
//! Derives the subnet mask, network and broadcast addresses and the host
//! count for an address and prefix length, with an interactive prompt around
//! it.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod prompt;

use config::Config;
use error::Result;
use models::{PartitionRequest, SubnetCalculator};
use output::{write_report, SubnetReport};
use prompt::{collect_input, Prompter};
use std::io::{BufRead, Write};

pub use error::SubnetError;

/// What one interactive run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub calculator: SubnetCalculator,
    /// Captured from the user, not used in the calculation.
    pub partition: PartitionRequest,
}

/// Ask for the inputs, calculate, and write the report to `output`.
///
/// Malformed answers are re-asked. An address octet above 255 or a prefix
/// above 32 ends the run with `InvalidArgument`.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &Config,
) -> Result<SessionOutcome> {
    log::info!("#Start run_session() default prefix /{}", config.default_prefix_length);
    let mut prompter = Prompter::new(input, output);
    let answers = collect_input(&mut prompter, config.default_prefix_length)?;

    log::warn!(
        "NOTE partitioning by {} is collected but not applied to the mask",
        answers.partition
    );

    let calculator =
        SubnetCalculator::from_octets(answers.address, u32::from(answers.prefix_length))
            .map_err(|e| {
                log::warn!("rejected {e}");
                e
            })?;
    if calculator.total_hosts() < 1 {
        log::warn!(
            "NOTE /{} leaves {} usable hosts",
            calculator.prefix_length(),
            calculator.total_hosts()
        );
    }

    let report = SubnetReport::from(&calculator);
    log::info!(
        "calculated {} mask={} broadcast={} hosts={}",
        report.network,
        report.subnet_mask,
        report.broadcast_address,
        report.total_hosts
    );
    write_report(prompter.output(), &report, config.output)?;

    Ok(SessionOutcome {
        calculator,
        partition: answers.partition,
    })
}
