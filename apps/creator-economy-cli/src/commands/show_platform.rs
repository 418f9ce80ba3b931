use super::CommandContext;
use crate::error::CliResult;

pub async fn execute(ctx: &CommandContext) -> CliResult<()> {
    let client = ctx.read_only_client();
    let (address, _) = client.address_finder().find_platform_v0_address();
    let platform = client.fetch_platform().await?;

    println!("Platform {}", address);
    println!("  Authority:              {}", platform.authority);
    println!("  Treasury:               {}", platform.treasury);
    println!("  Content published:      {}", platform.total_content_count);
    println!("  Early supporter limit:  {}", platform.early_supporter_limit);
    println!("  Early supporter rate:   {} bps", platform.early_supporter_rate_bps);
    println!("  Platform fee rate:      {} bps", platform.platform_fee_rate_bps);
    Ok(())
}
