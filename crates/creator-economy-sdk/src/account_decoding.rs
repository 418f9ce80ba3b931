use crate::{SdkError, SdkResult};
use anchor_lang::prelude::Pubkey;
use anchor_lang::{AccountDeserialize, Discriminator};
use creator_economy::{ContentRecordV0, CreatorLedgerV0, PlatformV0};

/// Leading bytes of every `ContentRecordV0` account.
pub const CONTENT_RECORD_DISCRIMINATOR: &[u8] = ContentRecordV0::DISCRIMINATOR;

/// Byte offset of `ContentRecordV0::creator`: the discriminator, then `content_id`.
pub const CONTENT_RECORD_CREATOR_OFFSET: usize = 8 + 8;

fn decode<T: AccountDeserialize>(kind: &'static str, mut data: &[u8]) -> SdkResult<T> {
    T::try_deserialize(&mut data).map_err(|e| SdkError::Decode {
        kind,
        reason: e.to_string(),
    })
}

/// Rejects data held by an account the program does not own, before any
/// discriminator check.
pub fn check_owner(address: &Pubkey, owner: &Pubkey, program_id: &Pubkey) -> SdkResult<()> {
    if owner != program_id {
        return Err(SdkError::WrongOwner {
            address: *address,
            expected: *program_id,
            actual: *owner,
        });
    }
    Ok(())
}

pub fn decode_platform(data: &[u8]) -> SdkResult<PlatformV0> {
    decode("PlatformV0", data)
}

pub fn decode_creator_ledger(data: &[u8]) -> SdkResult<CreatorLedgerV0> {
    decode("CreatorLedgerV0", data)
}

pub fn decode_content_record(data: &[u8]) -> SdkResult<ContentRecordV0> {
    decode("ContentRecordV0", data)
}

/// Decodes a batch of content records, newest (highest id) first.
pub fn decode_content_records<'a>(
    accounts: impl IntoIterator<Item = &'a [u8]>,
) -> SdkResult<Vec<ContentRecordV0>> {
    let mut records = accounts
        .into_iter()
        .map(decode_content_record)
        .collect::<SdkResult<Vec<_>>>()?;
    records.sort_by(|a, b| b.content_id.cmp(&a.content_id));
    Ok(records)
}
