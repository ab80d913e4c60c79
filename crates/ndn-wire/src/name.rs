//! # Hierarchical Names
//!
//! A [`Name`] is an ordered list of opaque byte components, written in URI
//! form as `/component/component/...`. Certificate names such as
//! `/a/b/KEY/123` are the main producers and consumers of this type in this
//! workspace.
//!
//! ## URI Escaping
//!
//! Bytes outside `A-Z a-z 0-9 + . - _ ~` are percent-encoded with uppercase
//! hex digits. A component consisting solely of periods (including the empty
//! component) is written with three extra periods, so the empty component is
//! `...` and a single period is `....`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a name URI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    /// A percent-escape was truncated or contained non-hex digits.
    #[error("invalid percent-escape in name component: {component}")]
    InvalidEscape {
        /// The offending URI segment.
        component: String,
    },

    /// A periods-only component had fewer than the three marker periods.
    #[error("invalid periods-only name component: {component}")]
    InvalidPeriodComponent {
        /// The offending URI segment.
        component: String,
    },
}

/// Bytes that pass through URI escaping unchanged.
fn is_unescaped(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'.' | b'-' | b'_' | b'~')
}

/// A single opaque component of a [`Name`].
///
/// Components compare in canonical order: shorter first, then lexicographic
/// over the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NameComponent(Vec<u8>);

impl NameComponent {
    /// Create a component from raw bytes.
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self(value.into())
    }

    /// The raw component bytes.
    pub fn value(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the component.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-length component.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the component in URI form.
    pub fn to_escaped_string(&self) -> String {
        if self.0.iter().all(|&b| b == b'.') {
            // Periods-only (or empty) components carry three marker periods.
            let mut out = String::with_capacity(self.0.len() + 3);
            out.push_str("...");
            out.extend(std::iter::repeat('.').take(self.0.len()));
            return out;
        }

        let mut out = String::with_capacity(self.0.len());
        for &byte in &self.0 {
            if is_unescaped(byte) {
                out.push(byte as char);
            } else {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
        out
    }

    /// Parse a URI segment back into a component.
    pub fn from_escaped_string(segment: &str) -> Result<Self, NameError> {
        if !segment.is_empty() && segment.bytes().all(|b| b == b'.') {
            if segment.len() < 3 {
                return Err(NameError::InvalidPeriodComponent {
                    component: segment.to_string(),
                });
            }
            return Ok(Self(vec![b'.'; segment.len() - 3]));
        }

        let bytes = segment.as_bytes();
        let mut value = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let hex = bytes.get(i + 1..i + 3).ok_or_else(|| NameError::InvalidEscape {
                    component: segment.to_string(),
                })?;
                let hex = std::str::from_utf8(hex).map_err(|_| NameError::InvalidEscape {
                    component: segment.to_string(),
                })?;
                let byte = u8::from_str_radix(hex, 16).map_err(|_| NameError::InvalidEscape {
                    component: segment.to_string(),
                })?;
                value.push(byte);
                i += 3;
            } else {
                value.push(bytes[i]);
                i += 1;
            }
        }
        Ok(Self(value))
    }
}

impl From<&str> for NameComponent {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<&[u8]> for NameComponent {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Vec<u8>> for NameComponent {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl fmt::Display for NameComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_escaped_string())
    }
}

impl Ord for NameComponent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical order: shorter components sort first.
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for NameComponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A hierarchical name: an ordered list of [`NameComponent`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Name {
    components: Vec<NameComponent>,
}

impl Name {
    /// Create an empty name (rendered as `/`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URI into a name.
    ///
    /// Accepts an optional `ndn:` scheme (with or without an authority part)
    /// and ignores empty path segments, so `ndn://host/a/b`, `/a/b/` and
    /// `a/b` all parse to the same two-component name.
    pub fn from_uri(uri: &str) -> Result<Self, NameError> {
        let mut rest = uri.trim();
        if let Some(stripped) = rest.strip_prefix("ndn:") {
            rest = stripped;
        }
        if let Some(stripped) = rest.strip_prefix("//") {
            // Skip the authority component; the path starts at the next slash.
            rest = match stripped.find('/') {
                Some(index) => &stripped[index..],
                None => "",
            };
        }

        let mut name = Name::new();
        for segment in rest.split('/') {
            if segment.is_empty() {
                continue;
            }
            name.components
                .push(NameComponent::from_escaped_string(segment)?);
        }
        Ok(name)
    }

    /// Render the name in URI form with a leading slash.
    pub fn to_uri(&self) -> String {
        if self.components.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for component in &self.components {
            out.push('/');
            out.push_str(&component.to_escaped_string());
        }
        out
    }

    /// Append a component in place.
    pub fn push(&mut self, component: impl Into<NameComponent>) {
        self.components.push(component.into());
    }

    /// Append a component, builder-style.
    pub fn append(mut self, component: impl Into<NameComponent>) -> Self {
        self.push(component);
        self
    }

    /// Component at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&NameComponent> {
        self.components.get(index)
    }

    /// All components in order.
    pub fn components(&self) -> &[NameComponent] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True for the empty name.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Name) -> bool {
        self.components.len() <= other.components.len()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| a == b)
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        Self::from_uri(uri)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical order: component-wise, with a proper prefix sorting first.
        for (a, b) in self.components.iter().zip(&other.components) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.components.len().cmp(&other.components.len())
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
