/// A JSON decoder under measurement.
///
/// `decode` must build the whole document; lazy or streaming decoders would
/// leave part of the cost outside the timed region.
pub trait Decoder {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode(&self, input: &[u8]) -> Result<Self::Output, Self::Error>;
}

/// `serde_json` into a fully materialized `serde_json::Value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeValue;

impl Decoder for SerdeValue {
    type Output = serde_json::Value;
    type Error = serde_json::Error;

    fn decode(&self, input: &[u8]) -> Result<Self::Output, Self::Error> {
        serde_json::from_slice(input)
    }
}
