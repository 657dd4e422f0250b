//! Dotted logger names derived from the call site.
//!
//! Rust has no portable stack introspection, so derivation happens at compile
//! time: the `logger_name!` macro feeds `module_path!()` (and optionally a type,
//! usually `Self`) into these helpers.

/// `my_app::db::pool` + `Some("Pool")` → `my_app.db.pool.Pool`.
#[must_use]
pub fn from_module_path(module_path: &str, type_name: Option<&str>) -> String {
    let mut name = module_path.replace("::", ".");
    if let Some(type_name) = type_name.filter(|t| !t.is_empty()) {
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(type_name);
    }
    name
}

/// Last path segment of `T`'s type name, without generic arguments.
#[must_use]
pub fn short_type_name<T: ?Sized>() -> &'static str {
    short_name(std::any::type_name::<T>())
}

fn short_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Recovers the enclosing function name from the type name of a marker fn
/// declared inside it (see `function_name!`). Closure segments are skipped.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function(marker_path: &'static str) -> &'static str {
    let path = marker_path.strip_suffix("::__here").unwrap_or(marker_path);
    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}

/// Derives a logger name from the calling module, optionally suffixed with a type.
///
/// ```
/// mod billing {
///     pub struct Invoice;
///     impl Invoice {
///         pub fn logger_name() -> String {
///             l4py::logger_name!(Self)
///         }
///     }
/// }
/// assert!(billing::Invoice::logger_name().ends_with("billing.Invoice"));
/// ```
#[macro_export]
macro_rules! logger_name {
    () => {
        $crate::naming::from_module_path(::core::module_path!(), ::core::option::Option::None)
    };
    ($ty:ty) => {
        $crate::naming::from_module_path(
            ::core::module_path!(),
            ::core::option::Option::Some($crate::naming::short_type_name::<$ty>()),
        )
    };
}

/// Name of the function the macro is expanded in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        $crate::naming::enclosing_function(::std::any::type_name_of_val(&__here))
    }};
}

/// Logger handle for an explicit name, or one derived like `logger_name!`.
#[macro_export]
macro_rules! get_logger {
    () => {
        $crate::runtime::get_logger(&$crate::logger_name!())
    };
    (type $ty:ty) => {
        $crate::runtime::get_logger(&$crate::logger_name!($ty))
    };
    ($name:expr) => {
        $crate::runtime::get_logger($name)
    };
}
