//! Method-call boundary for the glyph capability.
//!
//! The host side ([`handle_method_call`], [`serve_lines`]) answers the two
//! capability methods for a local oracle. The client side ([`ChannelOracle`])
//! implements [`GlyphOracle`] by sending calls through a [`Transport`].
//!
//! Wire format, one JSON object per message:
//!
//! ```text
//! {"method": "isAvailable", "arguments": {"emoji": "😀"}}
//! {"status": "success", "result": true}
//!
//! {"method": "checkAvailability", "arguments": {"emoji": {"grinning face": "😀"}}}
//! {"status": "success", "result": {"grinning face": "😀"}}
//!
//! {"method": "somethingElse"}
//! {"status": "not_implemented"}
//! ```

use crate::emoji::EmojiMap;
use crate::oracle::{GlyphOracle, OracleError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::io::{BufRead, Write};

/// Channel name shared by both sides.
pub const CHANNEL_NAME: &str = "emoji_picker";

pub const METHOD_IS_AVAILABLE: &str = "isAvailable";
pub const METHOD_CHECK_AVAILABILITY: &str = "checkAvailability";

/// A call across the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn is_available(glyph: &str) -> Self {
        MethodCall {
            method: METHOD_IS_AVAILABLE.to_string(),
            arguments: json!({ "emoji": glyph }),
        }
    }

    pub fn check_availability(candidates: &EmojiMap) -> Self {
        MethodCall {
            method: METHOD_CHECK_AVAILABILITY.to_string(),
            arguments: json!({ "emoji": candidates }),
        }
    }
}

/// Reply to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    Success { result: Value },
    Error { code: String, message: String },
    NotImplemented,
}

impl MethodResponse {
    fn error(code: &str, message: impl Into<String>) -> Self {
        MethodResponse::Error {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Answer a method call using a local oracle.
///
/// Unknown methods get `NotImplemented`; bad arguments and oracle failures
/// get an `Error` reply.
pub fn handle_method_call<O: GlyphOracle + ?Sized>(oracle: &O, call: &MethodCall) -> MethodResponse {
    match call.method.as_str() {
        METHOD_IS_AVAILABLE => {
            let Some(glyph) = call.arguments.get("emoji").and_then(Value::as_str) else {
                return MethodResponse::error("bad_arguments", "expected string argument 'emoji'");
            };
            match oracle.is_available(glyph) {
                Ok(available) => MethodResponse::Success {
                    result: Value::Bool(available),
                },
                Err(e) => MethodResponse::error("unavailable", e.to_string()),
            }
        }
        METHOD_CHECK_AVAILABILITY => {
            let candidates: EmojiMap = match call.arguments.get("emoji") {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(map) => map,
                    Err(e) => return MethodResponse::error("bad_arguments", e.to_string()),
                },
                None => {
                    return MethodResponse::error("bad_arguments", "expected map argument 'emoji'")
                }
            };
            match oracle.check_availability(&candidates) {
                Ok(filtered) => MethodResponse::Success {
                    result: json!(filtered),
                },
                Err(e) => MethodResponse::error("unavailable", e.to_string()),
            }
        }
        other => {
            tracing::debug!(method = other, "unknown method on {}", CHANNEL_NAME);
            MethodResponse::NotImplemented
        }
    }
}

/// Serve line-delimited JSON calls from `reader`, writing one reply per line.
///
/// Blank lines are skipped. Lines that are not a valid call get a
/// `bad_request` error reply. Returns the number of calls answered.
pub fn serve_lines<O, R, W>(oracle: &O, reader: R, mut writer: W) -> std::io::Result<usize>
where
    O: GlyphOracle + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<MethodCall>(trimmed) {
            Ok(call) => handle_method_call(oracle, &call),
            Err(e) => MethodResponse::error("bad_request", e.to_string()),
        };
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        answered += 1;
    }
    Ok(answered)
}

/// Client side of the boundary.
pub trait Transport {
    fn invoke(&self, call: &MethodCall) -> Result<MethodResponse, OracleError>;
}

/// Transport that answers calls with a local oracle, without serialization.
#[derive(Debug, Clone, Default)]
pub struct InProcess<O>(pub O);

impl<O: GlyphOracle> Transport for InProcess<O> {
    fn invoke(&self, call: &MethodCall) -> Result<MethodResponse, OracleError> {
        Ok(handle_method_call(&self.0, call))
    }
}

/// Transport speaking the line protocol over a reader/writer pair, e.g. the
/// stdin/stdout of an `emojipicker serve` child process.
pub struct LineTransport<R, W> {
    io: RefCell<(R, W)>,
}

impl<R: BufRead, W: Write> LineTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: RefCell::new((reader, writer)),
        }
    }
}

impl<R: BufRead, W: Write> Transport for LineTransport<R, W> {
    fn invoke(&self, call: &MethodCall) -> Result<MethodResponse, OracleError> {
        let mut io = self
            .io
            .try_borrow_mut()
            .map_err(|_| OracleError::Boundary("transport already in use".into()))?;
        let (reader, writer) = &mut *io;
        serde_json::to_writer(&mut *writer, call)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(OracleError::Boundary("channel closed".into()));
        }
        Ok(serde_json::from_str(line.trim())?)
    }
}

/// Oracle that forwards both operations across a [`Transport`].
pub struct ChannelOracle<T> {
    transport: T,
}

impl<T: Transport> ChannelOracle<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    fn call(&self, call: MethodCall) -> Result<Value, OracleError> {
        match self.transport.invoke(&call)? {
            MethodResponse::Success { result } => Ok(result),
            MethodResponse::Error { code, message } => {
                Err(OracleError::Boundary(format!("{}: {}", code, message)))
            }
            MethodResponse::NotImplemented => Err(OracleError::NotImplemented(call.method)),
        }
    }
}

impl<T: Transport> GlyphOracle for ChannelOracle<T> {
    fn is_available(&self, glyph: &str) -> Result<bool, OracleError> {
        let result = self.call(MethodCall::is_available(glyph))?;
        Ok(serde_json::from_value(result)?)
    }

    fn check_availability(&self, candidates: &EmojiMap) -> Result<EmojiMap, OracleError> {
        let result = self.call(MethodCall::check_availability(candidates))?;
        Ok(serde_json::from_value(result)?)
    }
}
