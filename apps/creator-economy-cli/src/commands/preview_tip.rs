use super::CommandContext;
use crate::error::CliResult;
use creator_economy_sdk::Enrollment;

pub async fn execute(ctx: &CommandContext, content_id: u64, amount: u64) -> CliResult<()> {
    let client = ctx.signing_client()?;
    let plan = client.preview_tip(content_id, amount).await?;
    let split = plan.split;

    println!("Tip of {} lamports on content {}:", split.amount, content_id);
    println!("  Platform fee:      {}", split.platform_fee);
    println!(
        "  Early supporters:  {} x {} = {}",
        split.supporter_count,
        split.supporter_share,
        split.supporter_total()
    );
    println!("  Creator:           {}", split.creator_share);
    if split.remainder > 0 {
        println!("    (includes {} pool remainder)", split.remainder);
    }

    match plan.enrollment {
        Enrollment::Enrolled { position } => {
            println!("  You would become early supporter #{}", position)
        }
        Enrollment::Unchanged => println!("  Roster unchanged"),
    }
    Ok(())
}
