use crate::error::Result;
use crate::form::FormFields;

/// An HTTP response whose body has not been read yet.
#[allow(async_fn_in_trait)]
pub trait Reply {
    fn status(&self) -> u16;

    fn status_text(&self) -> String;

    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    async fn text(self) -> Result<String>;
}

/// Sends form submissions to the report server.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type Reply: Reply;

    /// Posts `fields` as a multipart body. Resolves once response headers
    /// arrive; an `Err` means the request never completed.
    async fn post_form(&self, endpoint: &str, fields: &FormFields) -> Result<Self::Reply>;
}
