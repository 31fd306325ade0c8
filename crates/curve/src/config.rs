//! Startup-time identity curve selection

use ecid_api::Result;
use tracing::debug;

use crate::kind::{CurveKind, SERVICE_IDENTITY_CURVE};
use crate::profile::{profile_for, CurveProfile};

/// Identity curve configuration
///
/// An absent curve resolves to the build-time [`SERVICE_IDENTITY_CURVE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct IdentityConfig {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub curve: Option<CurveKind>,
}

impl IdentityConfig {
    pub fn new(curve: CurveKind) -> Self {
        Self { curve: Some(curve) }
    }

    /// Build from an optional curve name, e.g. a command-line value
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        let curve = name.map(str::parse::<CurveKind>).transpose()?;
        Ok(Self { curve })
    }

    /// The curve this configuration selects
    pub fn resolve(&self) -> CurveKind {
        match self.curve {
            Some(curve) => curve,
            None => {
                debug!(default = %SERVICE_IDENTITY_CURVE, "no identity curve configured, using build default");
                SERVICE_IDENTITY_CURVE
            }
        }
    }

    /// Profile of the selected curve
    pub fn profile(&self) -> CurveProfile {
        profile_for(self.resolve())
    }
}
