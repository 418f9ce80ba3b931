use super::CommandContext;
use crate::error::CliResult;

pub async fn execute(ctx: &CommandContext) -> CliResult<()> {
    let client = ctx.signing_client()?;
    let creator = client.payer_pubkey();

    let signature = client.create_creator_ledger().await?;
    let ledger = client.fetch_creator_ledger(&creator).await?;

    println!("✅ Creator ledger for {} ready. Signature: {}", creator, signature);
    println!("  Content count: {}", ledger.content_count);
    println!("  Total earnings: {}", ledger.total_earnings);
    Ok(())
}
