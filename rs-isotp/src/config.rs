use std::fs::read_to_string;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use crate::constant::CAN_FRAME_MAX_SIZE;
use crate::error::CanError;

/// `.env` file consulted by [`DecodeConfig::load`], existing variables take precedence.
pub const ISOTP_ENV: &str = ".env";
/// Variable naming the configuration file.
pub const ISOTP_VAR: &str = "RS_ISOTP_CFG";
/// Fallback configuration file name.
pub const ISOTP_CFG_FILENAME: &str = "isotp.yaml";

/// Tunables of the PDU decoder.
///
/// ```yaml
/// classic_frame_size: 8
/// allow_can_fd: true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Getters)]
#[serde(default)]
pub struct DecodeConfig {
    /// Payload size above which a first frame is treated as CAN-FD sized.
    #[getter(copy)]
    classic_frame_size: usize,
    /// Reject CAN-FD messages when false.
    #[getter(copy)]
    allow_can_fd: bool,
}

impl Default for DecodeConfig {
    #[inline]
    fn default() -> Self {
        Self {
            classic_frame_size: CAN_FRAME_MAX_SIZE,
            allow_can_fd: true,
        }
    }
}

impl DecodeConfig {
    pub fn new(classic_frame_size: usize, allow_can_fd: bool) -> Self {
        Self { classic_frame_size, allow_can_fd }
    }

    pub fn set_classic_frame_size(&mut self, size: usize) -> &mut Self {
        self.classic_frame_size = size;
        self
    }

    pub fn set_allow_can_fd(&mut self, allow: bool) -> &mut Self {
        self.allow_can_fd = allow;
        self
    }

    pub fn from_yaml(data: &str) -> Result<Self, CanError> {
        serde_yaml::from_str(data)
            .map_err(|e| CanError::ConfigError(format!("Error parsing YAML: {:?}", e)))
    }

    /// Load the configuration file named by `RS_ISOTP_CFG`, set in the environment or in
    /// `.env`, falling back to `isotp.yaml`.
    pub fn load() -> Result<Self, CanError> {
        if let Err(e) = dotenvy::from_filename(ISOTP_ENV) {
            log::trace!("ISO-TP - no `{}` loaded: {}", ISOTP_ENV, e);
        }
        let path = std::env::var(ISOTP_VAR)
            .unwrap_or_else(|_| ISOTP_CFG_FILENAME.into());

        Self::from_file(&path)
    }

    pub fn from_file(path: &str) -> Result<Self, CanError> {
        log::debug!("ISO-TP - loading decode configuration from `{}`", path);
        let data = read_to_string(path)
            .map_err(|e| CanError::ConfigError(format!("Unable to read `{}`: {:?}", path, e)))?;
        Self::from_yaml(&data)
    }
}
