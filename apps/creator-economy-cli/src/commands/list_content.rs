use super::{parse_pubkey, CommandContext};
use crate::error::CliResult;

pub async fn execute(ctx: &CommandContext, creator: Option<String>) -> CliResult<()> {
    let client = ctx.read_only_client();

    let contents = match creator.as_deref() {
        Some(creator) => {
            let creator = parse_pubkey(creator, "creator")?;
            client.fetch_contents_by_creator(&creator).await?
        }
        None => client.fetch_all_contents().await?,
    };

    if contents.is_empty() {
        println!("No content found");
        return Ok(());
    }

    for content in &contents {
        println!(
            "{:>6}  {}  tips {} ({} lamports)  supporters {}  {}",
            content.content_id,
            content.creator,
            content.tip_count,
            content.total_tips,
            content.early_supporters.len(),
            content.title
        );
    }
    println!("{} content record(s)", contents.len());
    Ok(())
}
