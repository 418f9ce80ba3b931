use super::{parse_pubkey, CommandContext};
use crate::error::CliResult;

pub async fn execute(ctx: &CommandContext, creator: Option<String>) -> CliResult<()> {
    let (client, creator) = match creator {
        Some(creator) => (ctx.read_only_client(), parse_pubkey(&creator, "creator")?),
        None => {
            let client = ctx.signing_client()?;
            let creator = client.payer_pubkey();
            (client, creator)
        }
    };

    let ledger = client.fetch_creator_ledger(&creator).await?;

    println!("Creator {}", ledger.creator);
    println!("  Content count:   {}", ledger.content_count);
    println!("  Total earnings:  {}", ledger.total_earnings);
    println!("  Created at:      {}", ledger.created_at);
    Ok(())
}
