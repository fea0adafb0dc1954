// src/constants.rs
//! Domain constants that define the operational boundaries of the viewer.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many records a single database retrieval returns.
///
/// The Notion API maximum is 100. Retrieval stops after one page; there is
/// no continuation.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// API version sent with every upstream request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Default upstream base URL.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Bearer secret of the Notion integration.
pub const ENV_INTEGRATION_SECRET: &str = "NOTION_INTEGRATION_SECRET";

/// URL of the page whose child databases `/api/databases` lists.
pub const ENV_ROOT_PAGE_URL: &str = "NOTION_PAGE_URL";

/// Optional override of the upstream base URL.
pub const ENV_API_BASE_URL: &str = "NOTION_API_BASE_URL";

// ---------------------------------------------------------------------------
// Client behaviour
// ---------------------------------------------------------------------------

/// Extra attempts the viewer makes after a failed fetch before giving up.
pub const CLIENT_FETCH_RETRIES: u32 = 2;

/// Base delay between viewer retries; doubles on each attempt.
pub const CLIENT_RETRY_BASE_DELAY_MS: u64 = 1000;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
