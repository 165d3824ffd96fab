use crate::error::Result;
use phonecast_core::PhoneAddress;
use url::Url;

/// Builds the chat deep link `<base>/send?phone=<address>&text=<text>`.
pub fn chat_link(base: &str, address: &PhoneAddress, text: Option<&str>) -> Result<Url> {
    let mut url = Url::parse(base.trim_end_matches('/'))?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push("send");
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("phone", address.as_str());
        query.append_pair("text", text.unwrap_or_default());
    }
    Ok(url)
}
