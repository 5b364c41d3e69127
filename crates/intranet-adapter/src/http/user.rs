/*
[INPUT]:  Authenticated GET requests
[OUTPUT]: Current user's profile data
[POS]:    HTTP layer - user endpoints
[UPDATE]: When adding new user endpoints or changing response mapping
*/

use tracing::{debug, error};

use crate::http::{IntranetClient, Result};
use crate::types::{Envelope, UserInfo};

impl IntranetClient {
    /// Get the current user's information
    ///
    /// GET /user/info
    ///
    /// A non-zero envelope code is a hard failure here and surfaces as
    /// [`IntranetError::Api`](crate::IntranetError::Api).
    pub async fn get_user_info(&self) -> Result<UserInfo> {
        debug!("getting current user info");

        let value = self.get("/user/info").await?;
        let envelope = Envelope::from_value(value)?
            .ensure_success()
            .inspect_err(|err| error!(%err, "failed to get user info"))?;

        debug!("got user info");
        envelope.decode_data()
    }
}
