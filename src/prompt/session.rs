//! Interactive question/answer loop over any reader and writer.

use super::parse::{parse_count, parse_ip_address, parse_partitioning_type, parse_prefix_length};
use crate::error::{Result, SubnetError};
use crate::models::PartitionRequest;
use std::io::{BufRead, Write};

pub const ASK_IP: &str = "Enter IP address: ";
pub const RETRY_IP: &str = "Invalid IP address. Please try again.";
pub const ASK_PREFIX: &str = "Enter subnet mask in CIDR notation (optional): ";
pub const RETRY_PREFIX: &str = "Invalid subnet mask. Please try again.";
pub const ASK_PARTITION: &str =
    "Will the partitioning be according to number of hosts or number of subnets? ";
pub const RETRY_PARTITION: &str = "Invalid partitioning type. Please try again.";
pub const ASK_COUNT: &str = "Enter number of hosts/subnets: ";
pub const RETRY_COUNT: &str = "Invalid number. Please try again.";

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Ask `question` until `parse` accepts the answer.
    ///
    /// A `MalformedInput` rejection prints `retry` and asks again with no
    /// attempt limit. Any other error is returned. End of input is an
    /// `UnexpectedEof` IO error.
    pub fn ask<T, F>(&mut self, question: &str, retry: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SubnetError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("input closed while waiting for answer to {:?}", question.trim()),
                )));
            }
            let answer = line.trim_end_matches(&['\r', '\n'][..]);

            match parse(answer) {
                Ok(value) => {
                    log::debug!("accepted answer {answer:?} to {:?}", question.trim());
                    return Ok(value);
                }
                Err(e) if e.is_malformed_input() => {
                    log::debug!("rejected answer: {e}");
                    writeln!(self.output, "{retry}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Hand back the writer, e.g. to render results after the questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

/// Everything the user entered, shape-checked but not range-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInput {
    pub address: [u32; 4],
    pub prefix_length: u8,
    pub partition: PartitionRequest,
}

/// Ask the four questions in order.
pub fn collect_input<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_prefix: u8,
) -> Result<SessionInput> {
    let address = prompter.ask(ASK_IP, RETRY_IP, parse_ip_address)?;
    let prefix_length = prompter.ask(ASK_PREFIX, RETRY_PREFIX, |s| {
        parse_prefix_length(s, default_prefix)
    })?;
    let kind = prompter.ask(ASK_PARTITION, RETRY_PARTITION, parse_partitioning_type)?;
    let count = prompter.ask(ASK_COUNT, RETRY_COUNT, parse_count)?;

    Ok(SessionInput {
        address,
        prefix_length,
        partition: PartitionRequest { kind, count },
    })
}
