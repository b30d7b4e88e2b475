use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Business activity declared by the MEI, which selects the DAS fee
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    /// Comércio ou indústria (pays ICMS)
    Commerce,
    /// Prestação de serviços (pays ISS)
    #[default]
    Service,
    /// Comércio e serviços (pays ICMS and ISS)
    Both,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 3] = [
        ActivityCategory::Service,
        ActivityCategory::Commerce,
        ActivityCategory::Both,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Commerce => "comercio",
            ActivityCategory::Service => "servico",
            ActivityCategory::Both => "ambos",
        }
    }

    /// Display label used in tables and prompts
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Commerce => "Comércio",
            ActivityCategory::Service => "Serviços",
            ActivityCategory::Both => "Comércio e Serviços",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "comercio" | "comércio" | "commerce" => Ok(ActivityCategory::Commerce),
            "servico" | "serviço" | "servicos" | "serviços" | "service" => {
                Ok(ActivityCategory::Service)
            }
            "ambos" | "both" => Ok(ActivityCategory::Both),
            _ => Err(CalcError::UnknownActivity(s.trim().to_string())),
        }
    }
}
