//! Toolbar control roles.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role a toolbar control plays.
///
/// Each role maps to exactly one URL query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlRole {
    /// Grid / list display mode
    Mode,
    /// Ascending / descending sort direction
    Direction,
    /// Sort attribute
    Order,
    /// Page size
    Limit,
    /// Page number
    Pager,
}

impl ControlRole {
    /// All roles, in binding order.
    pub const ALL: [ControlRole; 5] = [
        ControlRole::Mode,
        ControlRole::Direction,
        ControlRole::Order,
        ControlRole::Limit,
        ControlRole::Pager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlRole::Mode => "mode",
            ControlRole::Direction => "direction",
            ControlRole::Order => "order",
            ControlRole::Limit => "limit",
            ControlRole::Pager => "pager",
        }
    }

    /// The `data-role` attribute value the storefront template uses.
    pub fn data_role(&self) -> &'static str {
        match self {
            ControlRole::Mode => "mode-switcher",
            ControlRole::Direction => "direction-switcher",
            ControlRole::Order => "sorter",
            ControlRole::Limit => "limiter",
            ControlRole::Pager => "pager",
        }
    }
}

impl fmt::Display for ControlRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ControlRole {
    type Err = DomainError;

    /// Accepts the role name or its `data-role` value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mode" | "mode-switcher" => Ok(ControlRole::Mode),
            "direction" | "dir" | "direction-switcher" => Ok(ControlRole::Direction),
            "order" | "sort" | "sorter" => Ok(ControlRole::Order),
            "limit" | "limiter" => Ok(ControlRole::Limit),
            "pager" | "page" => Ok(ControlRole::Pager),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_names_and_data_roles() {
        for role in ControlRole::ALL {
            assert_eq!(role.as_str().parse::<ControlRole>().unwrap(), role);
            assert_eq!(role.data_role().parse::<ControlRole>().unwrap(), role);
        }
        assert_eq!("Sort".parse::<ControlRole>().unwrap(), ControlRole::Order);
    }

    #[test]
    fn test_parse_unknown_role() {
        let err = "colour".parse::<ControlRole>().unwrap_err();
        assert_eq!(err, DomainError::UnknownRole("colour".to_string()));
    }
}
