/// Map an error into an HTTP status code while logging where it happened.
#[macro_export]
macro_rules! status_with_log {
    ($level:ident, $position:expr, $status_code:expr) => {
        |e| {
            log::$level!("{}: {}", $position, e);
            $status_code
        }
    };
}

#[macro_export]
macro_rules! internal_error_with_log {
    ($position:expr) => {{
        use axum::http::StatusCode;
        $crate::status_with_log!(error, $position, StatusCode::INTERNAL_SERVER_ERROR)
    }};
}

#[macro_export]
macro_rules! bad_request_with_log {
    ($position:expr) => {{
        use axum::http::StatusCode;
        $crate::status_with_log!(warn, $position, StatusCode::BAD_REQUEST)
    }};
}

pub use bad_request_with_log;
pub use internal_error_with_log;
pub use status_with_log;
