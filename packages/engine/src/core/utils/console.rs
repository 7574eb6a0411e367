//! Browser console logging
//!
//! On wasm32 the message goes to `console.log` through web-sys.
//! Natively the arguments are still type-checked but nothing is printed,
//! so unit tests never touch a JS import.
//!
//! Usage:
//! ```rust
//! use rockfall_engine::console_log;
//!
//! let rocks = 3;
//! console_log!("cleared {} rocks", rocks);
//! ```

/// `format!`-style logging to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ::std::format_args!($($arg)*);
        }
    }};
}
