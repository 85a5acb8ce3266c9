use crate::error::CodecError;
use core_types::RangeContract;

/// Converts a range to and from the text blob kept by a store.
///
/// Stores never look inside the blob; they only hand it to the codec. Swapping
/// the codec changes the storage format without touching the stores.
pub trait PayloadCodec: Send + Sync {
    fn encode(&self, range: &RangeContract) -> Result<String, CodecError>;
    fn decode(&self, text: &str) -> Result<RangeContract, CodecError>;
}

/// The default codec: compact JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl PayloadCodec for JsonCodec {
    fn encode(&self, range: &RangeContract) -> Result<String, CodecError> {
        Ok(serde_json::to_string(range)?)
    }

    fn decode(&self, text: &str) -> Result<RangeContract, CodecError> {
        Ok(serde_json::from_str(text)?)
    }
}
