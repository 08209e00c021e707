//! The `register` subcommand: start tracking one or more numbers.

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use seventeentrack_api::{Carrier, Client, RegisterItem};

use super::{parse_carrier, parse_key_val, to_map};
use crate::output::{print_outcome, OutputFormat};

#[derive(Args)]
pub struct RegisterArgs {
    /// Tracking numbers to register (at most 40)
    #[arg(required = true)]
    pub numbers: Vec<String>,

    /// Carrier key (e.g. 3011) or code; omit to let the API detect it
    #[arg(long, value_parser = parse_carrier)]
    pub carrier: Option<Carrier>,

    /// Free-form tag echoed back in responses
    #[arg(long)]
    pub tag: Option<String>,

    /// Extra request field as KEY=VALUE (repeatable), e.g. lang=en
    #[arg(long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, Value)>,
}

pub fn build_items(args: &RegisterArgs) -> Vec<RegisterItem> {
    let params = to_map(&args.params);
    args.numbers
        .iter()
        .map(|number| {
            let mut item = RegisterItem::new(number);
            if let Some(carrier) = &args.carrier {
                item = item.with_carrier(carrier.clone());
            }
            if let Some(tag) = &args.tag {
                item = item.with_tag(tag);
            }
            item.with_params(params.clone())
        })
        .collect()
}

pub async fn run(args: &RegisterArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let items = build_items(args);
    let resp = client.register_multi(&items).await?;
    print_outcome(&resp, format)
}
