use super::{parse_pubkey, CommandContext};
use crate::error::CliResult;

pub async fn execute(
    ctx: &CommandContext,
    treasury: String,
    early_supporter_limit: u16,
    early_supporter_rate_bps: u16,
    platform_fee_rate_bps: u16,
) -> CliResult<()> {
    let treasury = parse_pubkey(&treasury, "treasury")?;
    let client = ctx.signing_client()?;

    println!("🚀 Initializing platform...");
    println!("Authority: {}", client.payer_pubkey());
    println!("Treasury: {}", treasury);

    let signature = client
        .init_platform(
            treasury,
            early_supporter_limit,
            early_supporter_rate_bps,
            platform_fee_rate_bps,
        )
        .await?;

    println!("✅ Platform initialized! Signature: {}", signature);
    Ok(())
}
