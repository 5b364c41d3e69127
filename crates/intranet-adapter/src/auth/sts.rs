/*
[INPUT]:  Access key pair and local wall-clock time
[OUTPUT]: Hour-bucketed STS token (32-char lowercase hex)
[POS]:    Auth layer - derives x-sts-token header values
[UPDATE]: When the token scheme or offset requirement changes
*/

use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use md5::{Digest, Md5};

use crate::http::{IntranetError, Result};

/// Seconds east of UTC the token scheme is bound to (UTC+8)
const REQUIRED_OFFSET_SECONDS: i32 = 8 * 3600;

/// Derive the STS token for the current wall-clock hour.
///
/// The scheme hashes `"{year}-{month}-{day}_{id}_{secret}_{hour}"` (decimal
/// fields, no leading zeros) with MD5 and is bound to the UTC+8 civil
/// calendar, so it fails with [`IntranetError::Timezone`] on hosts whose
/// local offset is anything else. The token is stable within one calendar
/// hour and rolls over at every hour boundary; do not cache it across
/// boundaries.
///
/// This is a legacy shared-secret scheme relying on internal-network trust.
/// MD5 over predictable fields is not cryptographically secure.
pub fn sts_token(access_key_id: &str, access_key_secret: &str) -> Result<String> {
    sts_token_at(Local::now().fixed_offset(), access_key_id, access_key_secret)
}

/// Derive the STS token for an explicit instant.
///
/// Exposed so callers (and tests) can pin the hour bucket; `now` must carry
/// a +08:00 offset or the derivation fails with [`IntranetError::Timezone`].
pub fn sts_token_at(
    now: DateTime<FixedOffset>,
    access_key_id: &str,
    access_key_secret: &str,
) -> Result<String> {
    let offset = *now.offset();
    if offset.local_minus_utc() != REQUIRED_OFFSET_SECONDS {
        return Err(IntranetError::Timezone { offset });
    }

    let canonical = format!(
        "{}-{}-{}_{}_{}_{}",
        now.year(),
        now.month(),
        now.day(),
        access_key_id,
        access_key_secret,
        now.hour()
    );

    Ok(hex::encode(Md5::digest(canonical.as_bytes())))
}
