//! The `stop`, `retrack`, `delete` and `push` subcommands. All four take a
//! list of numbers with an optional shared carrier.

use anyhow::Result;
use clap::Args;
use seventeentrack_api::{Carrier, Client, TrackNumber};

use super::parse_carrier;
use crate::output::{print_outcome, OutputFormat};

#[derive(Args)]
pub struct NumbersArgs {
    /// Tracking numbers (at most 40)
    #[arg(required = true)]
    pub numbers: Vec<String>,

    #[arg(long, value_parser = parse_carrier)]
    pub carrier: Option<Carrier>,
}

impl NumbersArgs {
    pub fn track_numbers(&self) -> Vec<TrackNumber> {
        self.numbers
            .iter()
            .map(|number| TrackNumber {
                number: number.clone(),
                carrier: self.carrier.clone(),
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Action {
    Stop,
    ReTrack,
    Delete,
    Push,
}

pub async fn run(
    action: Action,
    args: &NumbersArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let items = args.track_numbers();
    let resp = match action {
        Action::Stop => client.stop_tracking_multi(&items).await?,
        Action::ReTrack => client.re_track_multi(&items).await?,
        Action::Delete => client.del_track_multi(&items).await?,
        Action::Push => client.self_push_multi(&items).await?,
    };
    print_outcome(&resp, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_numbers_share_carrier() {
        let args = NumbersArgs {
            numbers: vec!["A".to_string(), "B".to_string()],
            carrier: Some(Carrier::Code(100003)),
        };
        let items = args.track_numbers();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], TrackNumber::new("B").with_carrier(100003u32));
    }
}
