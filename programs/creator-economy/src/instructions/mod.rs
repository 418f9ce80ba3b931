pub mod create_creator_ledger_v0;
pub mod init_platform_v0;
pub mod publish_content_v0;
pub mod tip_content_v0;

pub use create_creator_ledger_v0::*;
pub use init_platform_v0::*;
pub use publish_content_v0::*;
pub use tip_content_v0::*;
