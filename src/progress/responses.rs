use serde::Deserialize;

/// Top-level shape of a game-progress payload. Every field the service may
/// send is optional here; required-field enforcement happens after parse so
/// a missing key is reported by name rather than as an opaque parse error.
#[derive(Deserialize, Debug)]
pub struct GameProgressResponse {
    // Success and Error are part of the service schema but nothing
    // downstream reads them yet; it is unclear whether an early exit on
    // Success == false was ever intended.
    #[serde(rename = "Success")]
    pub success: Option<bool>,
    #[serde(rename = "Error")]
    pub error_message: Option<String>,
    #[serde(rename = "Progress")]
    pub progress: Option<String>,
    #[serde(rename = "Events")]
    pub events: Option<Vec<RawGameEvent>>,
}

/// One entry of the `Events` array, before required-field validation.
#[derive(Deserialize, Debug)]
pub struct RawGameEvent {
    #[serde(rename = "Id")]
    pub id: Option<u32>,
    #[serde(rename = "Macro")]
    pub definition: Option<String>,
}
