// ---- Settings declaration macro ----
// Generates the struct, its const schema table, typed accessors and the
// Bindable dispatch from one table of rows. The getter name is the storage
// key, so keys and accessors cannot drift apart.

/// Declare a settings type.
///
/// Each row is `getter / setter : Kind[(arg)] => "Label";` where `Kind` is one
/// of `String`, `Password`, `Uri` or `Integer`:
///
/// | Kind | Getter | Setter |
/// |---|---|---|
/// | `String`, `Password` | `String` | `impl Into<String>`, unvalidated |
/// | `Uri` / `Uri("message")` | `String` | `&str -> bool`, validated; rejects record `message` |
/// | `Integer` / `Integer(default)` | `i64` (default when unset) | `i64` |
///
/// The struct derives `Clone` and `Debug`; do not derive them again.
///
/// ```
/// use settingskit::{MemoryStore, Settings};
///
/// settingskit::declare_settings! {
///     /// Connection settings.
///     pub struct ConnectionSettings {
///         /// Where requests go.
///         endpoint / set_endpoint: Uri("Enter a full URL") => "Endpoint";
///         user_name / set_user_name: String => "User name";
///         api_key / set_api_key: Password => "API key";
///         retries / set_retries: Integer(3) => "Retries";
///     }
/// }
///
/// let settings = ConnectionSettings::create(MemoryStore::new()).unwrap();
/// assert_eq!(settings.retries(), 3);
/// assert!(!settings.set_endpoint("localhost"));
/// assert_eq!(settings.engine().error_for("endpoint").as_deref(), Some("Enter a full URL"));
/// ```
#[macro_export]
macro_rules! declare_settings {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $getter:ident / $setter:ident : $kind:ident $(( $($arg:tt)* ))? => $label:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name {
            engine: ::std::sync::Arc<$crate::SettingsEngine>,
        }

        impl $crate::Settings for $name {
            const SCHEMA: &'static [$crate::SettingsDefinition] = &[
                $(
                    $crate::SettingsDefinition::new(
                        $label,
                        stringify!($getter),
                        $crate::SettingsKind::$kind,
                    ),
                )*
            ];

            fn from_engine(engine: ::std::sync::Arc<$crate::SettingsEngine>) -> Self {
                Self { engine }
            }

            fn engine(&self) -> &::std::sync::Arc<$crate::SettingsEngine> {
                &self.engine
            }
        }

        impl $name {
            $(
                $crate::__settings_accessors!(
                    [$(#[doc = $doc])*] $getter $setter $kind $(( $($arg)* ))?
                );
            )*
        }

        impl $crate::Bindable for $name {
            fn read_text(&self, key: &str) -> ::std::option::Option<::std::string::String> {
                $(
                    if key == stringify!($getter) {
                        return ::std::option::Option::Some(
                            $crate::__settings_bind!(@read self $getter $kind)
                        );
                    }
                )*
                ::std::option::Option::None
            }

            fn write_text(&self, key: &str, text: &str) -> bool {
                $(
                    if key == stringify!($getter) {
                        return $crate::__settings_bind!(@write self $getter $setter $kind $label text);
                    }
                )*
                false
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __settings_accessors {
    (@text [$($doc:tt)*] $getter:ident $setter:ident) => {
        $($doc)*
        pub fn $getter(&self) -> ::std::string::String {
            self.engine.get_string(stringify!($getter))
        }

        pub fn $setter(&self, value: impl ::std::convert::Into<::std::string::String>) {
            self.engine.set_string(stringify!($getter), value);
        }
    };
    ([$($doc:tt)*] $getter:ident $setter:ident String) => {
        $crate::__settings_accessors!(@text [$($doc)*] $getter $setter);
    };
    ([$($doc:tt)*] $getter:ident $setter:ident Password) => {
        $crate::__settings_accessors!(@text [$($doc)*] $getter $setter);
    };
    ([$($doc:tt)*] $getter:ident $setter:ident Uri) => {
        $crate::__settings_accessors!([$($doc)*] $getter $setter Uri($crate::DEFAULT_URI_ERROR));
    };
    ([$($doc:tt)*] $getter:ident $setter:ident Uri($message:expr)) => {
        $($doc)*
        pub fn $getter(&self) -> ::std::string::String {
            self.engine.get_string(stringify!($getter))
        }

        pub fn $setter(&self, value: &str) -> bool {
            self.engine.check_and_set_uri(stringify!($getter), value, $message)
        }
    };
    ([$($doc:tt)*] $getter:ident $setter:ident Integer) => {
        $crate::__settings_accessors!([$($doc)*] $getter $setter Integer(0));
    };
    ([$($doc:tt)*] $getter:ident $setter:ident Integer($default:expr)) => {
        $($doc)*
        pub fn $getter(&self) -> i64 {
            self.engine.get_value_or(stringify!($getter), $default)
        }

        pub fn $setter(&self, value: i64) {
            self.engine.set_value(stringify!($getter), value);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __settings_bind {
    (@read $this:ident $getter:ident Integer) => {
        $this.$getter().to_string()
    };
    (@read $this:ident $getter:ident $kind:ident) => {
        $this.$getter()
    };
    (@write $this:ident $getter:ident $setter:ident Uri $label:literal $text:ident) => {
        $this.$setter($text)
    };
    (@write $this:ident $getter:ident $setter:ident Integer $label:literal $text:ident) => {
        match $text.trim().parse::<i64>() {
            ::std::result::Result::Ok(value) => {
                $this.engine.remove_errors(stringify!($getter));
                $this.$setter(value);
                true
            }
            ::std::result::Result::Err(_) => {
                $this.engine.add_error(
                    stringify!($getter),
                    concat!($label, " must be a whole number"),
                );
                false
            }
        }
    };
    (@write $this:ident $getter:ident $setter:ident $kind:ident $label:literal $text:ident) => {{
        $this.$setter($text);
        true
    }};
}
