//! Macros for ergonomic machine definition.

/// Generate an event enum and its `Event` trait implementation.
///
/// # Example
///
/// ```
/// use machina::core::Event;
/// use machina::event_enum;
///
/// event_enum! {
///     pub enum CameraEvent {
///         Connect,
///         ConnectOk,
///         StartStream,
///     }
/// }
///
/// assert_eq!(CameraEvent::StartStream.name(), "StartStream");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Event;

    event_enum! {
        enum TestEvent {
            Connect,
            Disconnect,
            Reset,
        }
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Connect.name(), "Connect");
        assert_eq!(TestEvent::Disconnect.name(), "Disconnect");
        assert_eq!(TestEvent::Reset.name(), "Reset");
    }

    #[test]
    fn event_enum_supports_visibility() {
        event_enum! {
            pub enum PublicEvent {
                A,
                B,
            }
        }

        assert_eq!(PublicEvent::A.name(), "A");
    }

    #[test]
    fn generated_enum_is_hashable() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(TestEvent::Reset, 1);
        assert_eq!(map.get(&TestEvent::Reset), Some(&1));
    }
}
