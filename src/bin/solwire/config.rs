use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use clap::ValueEnum;

/// Largest legacy transaction a validator accepts over UDP.
pub const PACKET_DATA_SIZE: usize = 1232;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TextEncoding {
    Base58,
    Base64,
    Hex,
}

impl TextEncoding {
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        let text = text.trim();
        match self {
            TextEncoding::Base58 => bs58::decode(text)
                .into_vec()
                .context("input is not valid base58"),
            TextEncoding::Base64 => BASE64.decode(text).context("input is not valid base64"),
            TextEncoding::Hex => hex::decode(text).context("input is not valid hex"),
        }
    }

    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Base58 => bs58::encode(bytes).into_string(),
            TextEncoding::Base64 => BASE64.encode(bytes),
            TextEncoding::Hex => hex::encode(bytes),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(TextEncoding::Base58, "2VfUX")]
    #[test_case(TextEncoding::Base64, "AQIDBA==")]
    #[test_case(TextEncoding::Hex, "01020304")]
    fn text_roundtrip(enc: TextEncoding, text: &str) {
        assert_eq!(enc.encode(&[1, 2, 3, 4]), text);
        assert_eq!(enc.decode(&format!(" {text}\n")).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(TextEncoding::Hex.decode("zz").is_err());
        assert!(TextEncoding::Base58.decode("0OIl").is_err());
    }
}
