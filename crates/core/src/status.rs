//! Closed status sets for projects and tasks.
//!
//! Statuses are persisted and serialized as their lowercase string values.

use serde::{Deserialize, Serialize};

/// A status string outside the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a valid enum value for path `status`.")]
pub struct UnknownStatus(pub String);

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default = $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),+
        }

        impl $name {
            /// Every allowed value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The persisted / wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok($name::$variant), )+
                    other => Err(UnknownStatus(other.to_string())),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownStatus;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    ProjectStatus (default = Open) {
        Open = "open",
        Completed = "completed",
        Archived = "archived",
    }
}

define_status_enum! {
    /// Task progress status.
    TaskStatus (default = Todo) {
        Todo = "todo",
        InProgress = "in-progress",
        Done = "done",
    }
}
