pub mod check;
pub mod complete;
pub mod format;
pub mod validate;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use evento_common::taxid::TaxIdKind;

#[derive(Parser)]
#[command(name = "evento")]
#[command(about = "Formats and validates Brazilian CPF/CNPJ numbers.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output, repeat for less (-qq prints verdicts only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Hide the identifying digits of every tax id printed
    #[arg(long, global = true)]
    pub redact: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the CPF/CNPJ punctuation mask to partial or complete input
    #[command(alias = "f")]
    Format {
        /// cpf (pf, individual) or cnpj (pj, business)
        kind: TaxIdKind,
        input: String,
    },
    /// Verify the check digits of a tax id
    #[command(alias = "v")]
    Validate {
        /// cpf (pf, individual) or cnpj (pj, business)
        kind: TaxIdKind,
        input: String,
    },
    /// Check a list of tax ids, detecting CPF or CNPJ from the digit count
    #[command(alias = "c")]
    Check {
        /// Tax ids, separated by spaces or commas
        inputs: Vec<String>,
        /// Read more tax ids from a file, one or more per line
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Compute the check digits for a CPF or CNPJ base
    #[command(alias = "g")]
    Complete {
        /// cpf (pf, individual) or cnpj (pj, business)
        kind: TaxIdKind,
        /// 9 digits for a CPF, 12 digits for a CNPJ
        base: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
