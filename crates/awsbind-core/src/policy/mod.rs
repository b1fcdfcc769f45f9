//! IAM policy actions and documents.
//!
//! Each service declares its actions with [`define_actions!`](crate::define_actions),
//! which produces a closed enum whose members map to `"service:Action"` wire
//! strings. Those enums plug into [`Statement`] to build policy JSON.

mod cloudwatch;
mod statement;

pub use cloudwatch::CloudWatchActions;
pub use statement::{Effect, Policy, Principal, Statement, POLICY_VERSION};

use std::fmt;

/// An IAM action such as `ecs:RunTask`.
pub trait Action {
    /// The wire string used in policy documents.
    fn action_name(&self) -> &'static str;
}

/// Returned when parsing a wire string that names no known action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown IAM action '{}'", self.0)
    }
}

impl std::error::Error for UnknownAction {}

/// Declare a closed set of IAM actions for one service prefix.
///
/// ```
/// awsbind_core::define_actions! {
///     /// Actions of a toy service.
///     pub enum ToyActions: "toy" {
///         AllToyActions => "*",
///         Poke => "Poke",
///     }
/// }
///
/// use awsbind_core::policy::Action;
/// assert_eq!(ToyActions::Poke.action_name(), "toy:Poke");
/// assert_eq!("toy:*".parse::<ToyActions>(), Ok(ToyActions::AllToyActions));
/// ```
#[macro_export]
macro_rules! define_actions {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $prefix:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $action:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];
        }

        impl $crate::policy::Action for $name {
            fn action_name(&self) -> &'static str {
                match self {
                    $( $name::$variant => concat!($prefix, ":", $action), )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::policy::Action::action_name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::policy::UnknownAction;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|a| $crate::policy::Action::action_name(a) == s)
                    .ok_or_else(|| $crate::policy::UnknownAction(s.to_string()))
            }
        }
    };
}
