//! JSON method codec.
//!
//! The channel carries invocations and responses as single-line JSON
//! envelopes. Encoding and decoding live here so the bridge and dispatcher
//! only ever see typed values; a malformed envelope fails in the codec,
//! before an [`Invocation`] exists, and therefore never produces a
//! [`Response`].

use crate::error::BridgeResult;
use crate::invocation::Invocation;
use crate::response::Response;

/// Decode an invocation envelope.
pub fn decode_invocation(raw: &str) -> BridgeResult<Invocation> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode an invocation envelope.
pub fn encode_invocation(invocation: &Invocation) -> BridgeResult<String> {
    Ok(serde_json::to_string(invocation)?)
}

/// Decode a response envelope.
pub fn decode_response(raw: &str) -> BridgeResult<Response> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode a response envelope.
pub fn encode_response(response: &Response) -> BridgeResult<String> {
    Ok(serde_json::to_string(response)?)
}
