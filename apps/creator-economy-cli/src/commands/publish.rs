use super::CommandContext;
use crate::error::CliResult;

pub async fn execute(ctx: &CommandContext, title: String, description: String) -> CliResult<()> {
    let client = ctx.signing_client()?;

    println!("📝 Publishing as {}...", client.payer_pubkey());
    let published = client.publish_content(title, description).await?;

    println!("✅ Published content {}", published.content_id);
    println!("  Address: {}", published.content);
    println!("  Signature: {}", published.signature);
    Ok(())
}
