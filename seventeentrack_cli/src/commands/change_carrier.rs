//! The `change-carrier` subcommand.

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use seventeentrack_api::{Carrier, Client};

use super::{parse_carrier, parse_key_val, to_map};
use crate::output::{print_outcome, OutputFormat};

#[derive(Args)]
pub struct ChangeCarrierArgs {
    /// Tracking number
    pub number: String,

    /// Carrier to switch to
    #[arg(long, value_parser = parse_carrier)]
    pub carrier_new: Carrier,

    /// Carrier currently on record
    #[arg(long, value_parser = parse_carrier)]
    pub carrier_old: Option<Carrier>,

    /// Extra request field as KEY=VALUE (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, Value)>,
}

pub async fn run(args: &ChangeCarrierArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client
        .change_carrier(
            &args.number,
            args.carrier_new.clone(),
            args.carrier_old.clone(),
            to_map(&args.params),
        )
        .await?;
    print_outcome(&resp, format)
}
