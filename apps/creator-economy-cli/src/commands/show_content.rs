use super::CommandContext;
use crate::error::CliResult;

pub async fn execute(ctx: &CommandContext, content_id: u64) -> CliResult<()> {
    let client = ctx.read_only_client();
    let (address, _) = client
        .address_finder()
        .find_content_record_v0_address(content_id);
    let content = client.fetch_content(content_id).await?;

    println!("Content {} ({})", content.content_id, address);
    println!("  Title:       {}", content.title);
    println!("  Description: {}", content.description);
    println!("  Creator:     {}", content.creator);
    println!("  Created at:  {}", content.created_at);
    println!("  Total tips:  {}", content.total_tips);
    println!("  Tip count:   {}", content.tip_count);
    println!("  Early supporters ({}):", content.early_supporters.len());
    for (i, supporter) in content.early_supporters.iter().enumerate() {
        println!("    {}. {}", i + 1, supporter);
    }
    Ok(())
}
