#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"
}

// Served from the same origin in release builds.
#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""
}

pub fn page_data_url() -> String {
    format!("{}/api/page-data", get_backend_url())
}
