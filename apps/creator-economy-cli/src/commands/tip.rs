use super::CommandContext;
use crate::error::CliResult;

pub async fn execute(ctx: &CommandContext, content_id: u64, amount: u64) -> CliResult<()> {
    let client = ctx.signing_client()?;

    println!("💸 Tipping content {} with {} lamports...", content_id, amount);
    let signature = client.tip_content(content_id, amount).await?;

    println!("✅ Tip sent! Signature: {}", signature);
    Ok(())
}
