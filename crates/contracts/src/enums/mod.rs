//! Closed value sets shared across the domains.

pub mod condition;
pub mod console_type;
pub mod equipment_status;
pub mod room_type;

pub use condition::Condition;
pub use console_type::ConsoleType;
pub use equipment_status::EquipmentStatus;
pub use room_type::RoomType;

/// A small closed enumeration that the UI can list, label and parse back
/// from a `<select>` value.
pub trait ClosedSet: Sized + Copy + PartialEq + 'static {
    /// Stable machine code, used as option value.
    fn code(&self) -> &'static str;

    /// Human readable label.
    fn display_name(&self) -> &'static str;

    /// Every member in declaration order.
    fn all() -> Vec<Self>;

    /// Parse back from `code()`.
    fn from_code(code: &str) -> Option<Self>;
}

/// Declares a `ClosedSet` enum. Serde uses the display label, so JSON
/// carries `"In Use"` rather than `"InUse"`.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::enums::ClosedSet for $name {
            fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn all() -> Vec<Self> {
                vec![$($name::$variant),+]
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::enums::ClosedSet::display_name(self))
            }
        }
    };
}

pub(crate) use closed_set;
