// src/toast.rs
//
// One-shot notifications carried across a redirect in the `flash` cookie.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.into()),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

pub fn encode_flash(toasts: &[Toast]) -> Result<String, ServerError> {
    let json = serde_json::to_vec(toasts).map_err(|_| ServerError::InternalError)?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json))
}

/// Anything unreadable decodes to no toasts.
pub fn decode_flash(value: &str) -> Vec<Toast> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(value.trim())
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_else(|| {
            log::debug!("Ignoring unreadable flash cookie");
            Vec::new()
        })
}

pub fn flash_cookie(toasts: &[Toast]) -> Result<String, ServerError> {
    Ok(format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age=60",
        encode_flash(toasts)?
    ))
}

pub fn clear_flash_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
