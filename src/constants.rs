pub mod network {
    pub const DEFAULT_API_ENDPOINT: &str = "https://api.tess.pareto.io/api/v1";
    pub const TIMEOUT_API_REQUEST_MS: u64 = 30_000;
}

pub mod protocols {
    pub const ALLOWED_HTTP: &[&str] = &["http", "https"];
}

pub mod env {
    pub const API_KEY: &str = "TESS_API_KEY";
    pub const API_ENDPOINT: &str = "TESS_API_ENDPOINT";
}

pub mod upload {
    pub const MULTIPART_PART_NAME: &str = "file";
}
