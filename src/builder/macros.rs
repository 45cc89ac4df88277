//! Macros for ergonomic state definitions.

/// Generate `State` (and optionally `Initial`) for simple enums.
///
/// # Example
///
/// ```
/// use stepwise::state_enum;
/// use stepwise::core::{Initial, State};
///
/// state_enum! {
///     pub enum OrderState {
///         Start,
///         Charging,
///         Shipped,
///     }
///     initial: Start
/// }
///
/// assert_eq!(OrderState::initial(), OrderState::Start);
/// assert_eq!(OrderState::Charging.name(), "Charging");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(initial: $initial:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        $(
            impl $crate::core::Initial for $name {
                fn initial() -> Self {
                    Self::$initial
                }
            }
        )?
    };
}
