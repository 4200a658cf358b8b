/// Tierbill — centralized constants.
/// Price amounts, labels and file locations live here.

// ─── Prices ───────────────────────────────────────────────────────────────────

pub mod prices {
    /// Monthly amounts in whole units of the `en` pricing locale.
    pub mod en {
        pub const BASIC: u32 = 29;
        pub const PREMIUM: u32 = 99;
        pub const VIP: u32 = 199;
    }

    /// Monthly amounts in whole units of the `tr` pricing locale.
    pub mod tr {
        pub const BASIC: u32 = 299;
        pub const PREMIUM: u32 = 999;
        pub const VIP: u32 = 1999;
    }
}

// ─── Display Names ────────────────────────────────────────────────────────────

pub mod names {
    pub const NONE: &str = "None";
    pub const FREE: &str = "Free";
    pub const BASIC: &str = "Basic";
    pub const PREMIUM: &str = "Premium";
    pub const VIP: &str = "VIP";
}

// ─── Config Paths ─────────────────────────────────────────────────────────────

pub mod paths {
    pub const CONFIG_DIR: &str = "tierbill";
    pub const CONFIG_FILE: &str = "config.toml";
}
