//! The `change-info` subcommand: update stored metadata of a tracked number.

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use seventeentrack_api::{Carrier, Client};

use super::{parse_carrier, parse_key_val, to_map};
use crate::output::{print_outcome, OutputFormat};

#[derive(Args)]
pub struct ChangeInfoArgs {
    /// Tracking number
    pub number: String,

    #[arg(long, value_parser = parse_carrier)]
    pub carrier: Option<Carrier>,

    /// Field to update as KEY=VALUE (repeatable), e.g. tag=vip
    #[arg(long = "item", value_parser = parse_key_val, required = true)]
    pub items: Vec<(String, Value)>,
}

pub async fn run(args: &ChangeInfoArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client
        .change_track(&args.number, args.carrier.clone(), to_map(&args.items))
        .await?;
    print_outcome(&resp, format)
}
