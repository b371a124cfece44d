// This code was automatically generated by late-gen. Do not edit manually.

//! Generated namespace surface for Late API (version 1.0.0).
//!
//! ## Authentication
//!
//! Every request carries `Authorization: Bearer <key>`. Set via environment variable: `LATE_API_KEY`.
//!
//! ## Namespaces
//!
//! - `posts` (7 methods)
//! - `accounts` (8 methods)
//! - `profiles` (5 methods)
//! - `analytics` (2 methods)
//! - `accountGroups` (4 methods)
//! - `queue` (6 methods)
//! - `webhooks` (6 methods)
//! - `apiKeys` (3 methods)
//! - `media` (1 method)
//! - `tools` (4 methods)
//! - `users` (2 methods)
//! - `usage` (1 method)
//! - `logs` (2 methods)
//! - `connect` (3 methods)
//! - `connect.facebook` (2 methods)
//! - `connect.linkedin` (2 methods)
//! - `connect.pinterest` (2 methods)
//! - `connect.googleBusiness` (2 methods)
//! - `connect.telegram` (3 methods)
//! - `connect.bluesky` (1 method)
//! - `reddit` (2 methods)
//! - `invites` (1 method)
//! - `other` (1 method)
//!
//! ## Example
//!
//! ```ignore
//! use late::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LateError> {
//!     let client = Late::from_env()?;
//!     let response: serde_json::Value = client.posts().list_posts(RequestArgs::new()).await?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
use late_define::{HttpVerb, Operation};
use serde::de::DeserializeOwned;
use crate::args::RequestArgs;
use crate::client::Late;
use crate::error::LateError;
/// `GET /v1/posts`
pub const POSTS_LIST_POSTS: Operation = Operation::new(
    "posts",
    "listPosts",
    HttpVerb::Get,
    "/v1/posts",
);
/// `POST /v1/posts`
pub const POSTS_CREATE_POST: Operation = Operation::new(
    "posts",
    "createPost",
    HttpVerb::Post,
    "/v1/posts",
);
/// `GET /v1/posts/{postId}`
pub const POSTS_GET_POST: Operation = Operation::new(
    "posts",
    "getPost",
    HttpVerb::Get,
    "/v1/posts/{postId}",
);
/// `PUT /v1/posts/{postId}`
pub const POSTS_UPDATE_POST: Operation = Operation::new(
    "posts",
    "updatePost",
    HttpVerb::Put,
    "/v1/posts/{postId}",
);
/// `DELETE /v1/posts/{postId}`
pub const POSTS_DELETE_POST: Operation = Operation::new(
    "posts",
    "deletePost",
    HttpVerb::Delete,
    "/v1/posts/{postId}",
);
/// `POST /v1/posts/{postId}/retry`
pub const POSTS_RETRY_POST: Operation = Operation::new(
    "posts",
    "retryPost",
    HttpVerb::Post,
    "/v1/posts/{postId}/retry",
);
/// `POST /v1/posts/bulk-upload`
pub const POSTS_BULK_UPLOAD_POSTS: Operation = Operation::new(
    "posts",
    "bulkUploadPosts",
    HttpVerb::Post,
    "/v1/posts/bulk-upload",
);
/// `GET /v1/accounts`
pub const ACCOUNTS_LIST_ACCOUNTS: Operation = Operation::new(
    "accounts",
    "listAccounts",
    HttpVerb::Get,
    "/v1/accounts",
);
/// `PUT /v1/accounts/{accountId}`
pub const ACCOUNTS_UPDATE_ACCOUNT: Operation = Operation::new(
    "accounts",
    "updateAccount",
    HttpVerb::Put,
    "/v1/accounts/{accountId}",
);
/// `DELETE /v1/accounts/{accountId}`
pub const ACCOUNTS_DELETE_ACCOUNT: Operation = Operation::new(
    "accounts",
    "deleteAccount",
    HttpVerb::Delete,
    "/v1/accounts/{accountId}",
);
/// `GET /v1/accounts/follower-stats`
pub const ACCOUNTS_GET_FOLLOWER_STATS: Operation = Operation::new(
    "accounts",
    "getFollowerStats",
    HttpVerb::Get,
    "/v1/accounts/follower-stats",
);
/// `GET /v1/accounts/health`
pub const ACCOUNTS_GET_ALL_ACCOUNTS_HEALTH: Operation = Operation::new(
    "accounts",
    "getAllAccountsHealth",
    HttpVerb::Get,
    "/v1/accounts/health",
);
/// `GET /v1/accounts/{accountId}/health`
pub const ACCOUNTS_GET_ACCOUNT_HEALTH: Operation = Operation::new(
    "accounts",
    "getAccountHealth",
    HttpVerb::Get,
    "/v1/accounts/{accountId}/health",
);
/// `GET /v1/accounts/{accountId}/gmb-reviews`
pub const ACCOUNTS_GET_GOOGLE_BUSINESS_REVIEWS: Operation = Operation::new(
    "accounts",
    "getGoogleBusinessReviews",
    HttpVerb::Get,
    "/v1/accounts/{accountId}/gmb-reviews",
);
/// `POST /v1/accounts/{accountId}/reviews/{reviewId}/reply`
pub const ACCOUNTS_REPLY_TO_REVIEW: Operation = Operation::new(
    "accounts",
    "replyToReview",
    HttpVerb::Post,
    "/v1/accounts/{accountId}/reviews/{reviewId}/reply",
);
/// `GET /v1/profiles`
pub const PROFILES_LIST_PROFILES: Operation = Operation::new(
    "profiles",
    "listProfiles",
    HttpVerb::Get,
    "/v1/profiles",
);
/// `POST /v1/profiles`
pub const PROFILES_CREATE_PROFILE: Operation = Operation::new(
    "profiles",
    "createProfile",
    HttpVerb::Post,
    "/v1/profiles",
);
/// `GET /v1/profiles/{profileId}`
pub const PROFILES_GET_PROFILE: Operation = Operation::new(
    "profiles",
    "getProfile",
    HttpVerb::Get,
    "/v1/profiles/{profileId}",
);
/// `PUT /v1/profiles/{profileId}`
pub const PROFILES_UPDATE_PROFILE: Operation = Operation::new(
    "profiles",
    "updateProfile",
    HttpVerb::Put,
    "/v1/profiles/{profileId}",
);
/// `DELETE /v1/profiles/{profileId}`
pub const PROFILES_DELETE_PROFILE: Operation = Operation::new(
    "profiles",
    "deleteProfile",
    HttpVerb::Delete,
    "/v1/profiles/{profileId}",
);
/// `GET /v1/analytics`
pub const ANALYTICS_GET_ANALYTICS: Operation = Operation::new(
    "analytics",
    "getAnalytics",
    HttpVerb::Get,
    "/v1/analytics",
);
/// `GET /v1/analytics/youtube/daily-views`
pub const ANALYTICS_GET_YOUTUBE_DAILY_VIEWS: Operation = Operation::new(
    "analytics",
    "getYoutubeDailyViews",
    HttpVerb::Get,
    "/v1/analytics/youtube/daily-views",
);
/// `GET /v1/account-groups`
pub const ACCOUNT_GROUPS_LIST_ACCOUNT_GROUPS: Operation = Operation::new(
    "accountGroups",
    "listAccountGroups",
    HttpVerb::Get,
    "/v1/account-groups",
);
/// `POST /v1/account-groups`
pub const ACCOUNT_GROUPS_CREATE_ACCOUNT_GROUP: Operation = Operation::new(
    "accountGroups",
    "createAccountGroup",
    HttpVerb::Post,
    "/v1/account-groups",
);
/// `PUT /v1/account-groups/{groupId}`
pub const ACCOUNT_GROUPS_UPDATE_ACCOUNT_GROUP: Operation = Operation::new(
    "accountGroups",
    "updateAccountGroup",
    HttpVerb::Put,
    "/v1/account-groups/{groupId}",
);
/// `DELETE /v1/account-groups/{groupId}`
pub const ACCOUNT_GROUPS_DELETE_ACCOUNT_GROUP: Operation = Operation::new(
    "accountGroups",
    "deleteAccountGroup",
    HttpVerb::Delete,
    "/v1/account-groups/{groupId}",
);
/// `GET /v1/queue/slots`
pub const QUEUE_LIST_QUEUE_SLOTS: Operation = Operation::new(
    "queue",
    "listQueueSlots",
    HttpVerb::Get,
    "/v1/queue/slots",
);
/// `POST /v1/queue/slots`
pub const QUEUE_CREATE_QUEUE_SLOT: Operation = Operation::new(
    "queue",
    "createQueueSlot",
    HttpVerb::Post,
    "/v1/queue/slots",
);
/// `PUT /v1/queue/slots`
pub const QUEUE_UPDATE_QUEUE_SLOT: Operation = Operation::new(
    "queue",
    "updateQueueSlot",
    HttpVerb::Put,
    "/v1/queue/slots",
);
/// `DELETE /v1/queue/slots`
pub const QUEUE_DELETE_QUEUE_SLOT: Operation = Operation::new(
    "queue",
    "deleteQueueSlot",
    HttpVerb::Delete,
    "/v1/queue/slots",
);
/// `GET /v1/queue/preview`
pub const QUEUE_PREVIEW_QUEUE: Operation = Operation::new(
    "queue",
    "previewQueue",
    HttpVerb::Get,
    "/v1/queue/preview",
);
/// `GET /v1/queue/next-slot`
pub const QUEUE_GET_NEXT_QUEUE_SLOT: Operation = Operation::new(
    "queue",
    "getNextQueueSlot",
    HttpVerb::Get,
    "/v1/queue/next-slot",
);
/// `GET /v1/webhooks/settings`
pub const WEBHOOKS_GET_WEBHOOK_SETTINGS: Operation = Operation::new(
    "webhooks",
    "getWebhookSettings",
    HttpVerb::Get,
    "/v1/webhooks/settings",
);
/// `POST /v1/webhooks/settings`
pub const WEBHOOKS_CREATE_WEBHOOK_SETTINGS: Operation = Operation::new(
    "webhooks",
    "createWebhookSettings",
    HttpVerb::Post,
    "/v1/webhooks/settings",
);
/// `PUT /v1/webhooks/settings`
pub const WEBHOOKS_UPDATE_WEBHOOK_SETTINGS: Operation = Operation::new(
    "webhooks",
    "updateWebhookSettings",
    HttpVerb::Put,
    "/v1/webhooks/settings",
);
/// `DELETE /v1/webhooks/settings`
pub const WEBHOOKS_DELETE_WEBHOOK_SETTINGS: Operation = Operation::new(
    "webhooks",
    "deleteWebhookSettings",
    HttpVerb::Delete,
    "/v1/webhooks/settings",
);
/// `POST /v1/webhooks/test`
pub const WEBHOOKS_TEST_WEBHOOK: Operation = Operation::new(
    "webhooks",
    "testWebhook",
    HttpVerb::Post,
    "/v1/webhooks/test",
);
/// `GET /v1/webhooks/logs`
pub const WEBHOOKS_GET_WEBHOOK_LOGS: Operation = Operation::new(
    "webhooks",
    "getWebhookLogs",
    HttpVerb::Get,
    "/v1/webhooks/logs",
);
/// `GET /v1/api-keys`
pub const API_KEYS_LIST_API_KEYS: Operation = Operation::new(
    "apiKeys",
    "listApiKeys",
    HttpVerb::Get,
    "/v1/api-keys",
);
/// `POST /v1/api-keys`
pub const API_KEYS_CREATE_API_KEY: Operation = Operation::new(
    "apiKeys",
    "createApiKey",
    HttpVerb::Post,
    "/v1/api-keys",
);
/// `DELETE /v1/api-keys/{keyId}`
pub const API_KEYS_DELETE_API_KEY: Operation = Operation::new(
    "apiKeys",
    "deleteApiKey",
    HttpVerb::Delete,
    "/v1/api-keys/{keyId}",
);
/// `POST /v1/media/presign`
pub const MEDIA_GET_MEDIA_PRESIGNED_URL: Operation = Operation::new(
    "media",
    "getMediaPresignedUrl",
    HttpVerb::Post,
    "/v1/media/presign",
);
/// `POST /v1/tools/validate/post-length`
pub const TOOLS_VALIDATE_POST_LENGTH: Operation = Operation::new(
    "tools",
    "validatePostLength",
    HttpVerb::Post,
    "/v1/tools/validate/post-length",
);
/// `POST /v1/tools/validate/post`
pub const TOOLS_VALIDATE_POST: Operation = Operation::new(
    "tools",
    "validatePost",
    HttpVerb::Post,
    "/v1/tools/validate/post",
);
/// `POST /v1/tools/validate/media`
pub const TOOLS_VALIDATE_MEDIA: Operation = Operation::new(
    "tools",
    "validateMedia",
    HttpVerb::Post,
    "/v1/tools/validate/media",
);
/// `POST /v1/tools/hashtag-checker`
pub const TOOLS_CHECK_HASHTAGS: Operation = Operation::new(
    "tools",
    "checkHashtags",
    HttpVerb::Post,
    "/v1/tools/hashtag-checker",
);
/// `GET /v1/users`
pub const USERS_LIST_USERS: Operation = Operation::new(
    "users",
    "listUsers",
    HttpVerb::Get,
    "/v1/users",
);
/// `GET /v1/users/{userId}`
pub const USERS_GET_USER: Operation = Operation::new(
    "users",
    "getUser",
    HttpVerb::Get,
    "/v1/users/{userId}",
);
/// `GET /v1/usage-stats`
pub const USAGE_GET_USAGE_STATS: Operation = Operation::new(
    "usage",
    "getUsageStats",
    HttpVerb::Get,
    "/v1/usage-stats",
);
/// `GET /v1/logs`
pub const LOGS_LIST_LOGS: Operation = Operation::new(
    "logs",
    "listLogs",
    HttpVerb::Get,
    "/v1/logs",
);
/// `GET /v1/logs/{logId}`
pub const LOGS_GET_LOG: Operation = Operation::new(
    "logs",
    "getLog",
    HttpVerb::Get,
    "/v1/logs/{logId}",
);
/// `GET /v1/connect/{platform}`
pub const CONNECT_GET_CONNECT_URL: Operation = Operation::new(
    "connect",
    "getConnectUrl",
    HttpVerb::Get,
    "/v1/connect/{platform}",
);
/// `POST /v1/connect/{platform}`
pub const CONNECT_HANDLE_OAUTH_CALLBACK: Operation = Operation::new(
    "connect",
    "handleOauthCallback",
    HttpVerb::Post,
    "/v1/connect/{platform}",
);
/// `GET /v1/connect/pending-data`
pub const CONNECT_GET_PENDING_OAUTH_DATA: Operation = Operation::new(
    "connect",
    "getPendingOauthData",
    HttpVerb::Get,
    "/v1/connect/pending-data",
);
/// `GET /v1/connect/facebook/select-page`
pub const CONNECT_FACEBOOK_LIST_FACEBOOK_PAGES: Operation = Operation::new(
    "connect.facebook",
    "listFacebookPages",
    HttpVerb::Get,
    "/v1/connect/facebook/select-page",
);
/// `POST /v1/connect/facebook/select-page`
pub const CONNECT_FACEBOOK_SELECT_FACEBOOK_PAGE: Operation = Operation::new(
    "connect.facebook",
    "selectFacebookPage",
    HttpVerb::Post,
    "/v1/connect/facebook/select-page",
);
/// `GET /v1/connect/linkedin/organizations`
pub const CONNECT_LINKEDIN_LIST_LINKEDIN_ORGANIZATIONS: Operation = Operation::new(
    "connect.linkedin",
    "listLinkedinOrganizations",
    HttpVerb::Get,
    "/v1/connect/linkedin/organizations",
);
/// `POST /v1/connect/linkedin/select-organization`
pub const CONNECT_LINKEDIN_SELECT_LINKEDIN_ORGANIZATION: Operation = Operation::new(
    "connect.linkedin",
    "selectLinkedinOrganization",
    HttpVerb::Post,
    "/v1/connect/linkedin/select-organization",
);
/// `GET /v1/connect/pinterest/select-board`
pub const CONNECT_PINTEREST_LIST_PINTEREST_BOARDS: Operation = Operation::new(
    "connect.pinterest",
    "listPinterestBoards",
    HttpVerb::Get,
    "/v1/connect/pinterest/select-board",
);
/// `POST /v1/connect/pinterest/select-board`
pub const CONNECT_PINTEREST_SELECT_PINTEREST_BOARD: Operation = Operation::new(
    "connect.pinterest",
    "selectPinterestBoard",
    HttpVerb::Post,
    "/v1/connect/pinterest/select-board",
);
/// `GET /v1/connect/googlebusiness/locations`
pub const CONNECT_GOOGLE_BUSINESS_LIST_GOOGLE_BUSINESS_LOCATIONS: Operation = Operation::new(
    "connect.googleBusiness",
    "listGoogleBusinessLocations",
    HttpVerb::Get,
    "/v1/connect/googlebusiness/locations",
);
/// `POST /v1/connect/googlebusiness/select-location`
pub const CONNECT_GOOGLE_BUSINESS_SELECT_GOOGLE_BUSINESS_LOCATION: Operation = Operation::new(
    "connect.googleBusiness",
    "selectGoogleBusinessLocation",
    HttpVerb::Post,
    "/v1/connect/googlebusiness/select-location",
);
/// `GET /v1/connect/telegram`
pub const CONNECT_TELEGRAM_GET_TELEGRAM_CONNECT_STATUS: Operation = Operation::new(
    "connect.telegram",
    "getTelegramConnectStatus",
    HttpVerb::Get,
    "/v1/connect/telegram",
);
/// `POST /v1/connect/telegram`
pub const CONNECT_TELEGRAM_INITIATE_TELEGRAM_CONNECT: Operation = Operation::new(
    "connect.telegram",
    "initiateTelegramConnect",
    HttpVerb::Post,
    "/v1/connect/telegram",
);
/// `PATCH /v1/connect/telegram`
pub const CONNECT_TELEGRAM_COMPLETE_TELEGRAM_CONNECT: Operation = Operation::new(
    "connect.telegram",
    "completeTelegramConnect",
    HttpVerb::Patch,
    "/v1/connect/telegram",
);
/// `POST /v1/connect/bluesky/credentials`
pub const CONNECT_BLUESKY_CONNECT_BLUESKY_CREDENTIALS: Operation = Operation::new(
    "connect.bluesky",
    "connectBlueskyCredentials",
    HttpVerb::Post,
    "/v1/connect/bluesky/credentials",
);
/// `GET /v1/reddit/search`
pub const REDDIT_SEARCH_REDDIT: Operation = Operation::new(
    "reddit",
    "searchReddit",
    HttpVerb::Get,
    "/v1/reddit/search",
);
/// `GET /v1/reddit/feed`
pub const REDDIT_GET_REDDIT_FEED: Operation = Operation::new(
    "reddit",
    "getRedditFeed",
    HttpVerb::Get,
    "/v1/reddit/feed",
);
/// `POST /v1/invite/tokens`
pub const INVITES_CREATE_INVITE_TOKEN: Operation = Operation::new(
    "invites",
    "createInviteToken",
    HttpVerb::Post,
    "/v1/invite/tokens",
);
/// `GET /v1/health`
pub const OTHER_LIST_HEALTH: Operation = Operation::new(
    "other",
    "listHealth",
    HttpVerb::Get,
    "/v1/health",
);
/// Every generated operation, namespace by namespace.
pub const OPERATIONS: &[Operation] = &[
    POSTS_LIST_POSTS,
    POSTS_CREATE_POST,
    POSTS_GET_POST,
    POSTS_UPDATE_POST,
    POSTS_DELETE_POST,
    POSTS_RETRY_POST,
    POSTS_BULK_UPLOAD_POSTS,
    ACCOUNTS_LIST_ACCOUNTS,
    ACCOUNTS_UPDATE_ACCOUNT,
    ACCOUNTS_DELETE_ACCOUNT,
    ACCOUNTS_GET_FOLLOWER_STATS,
    ACCOUNTS_GET_ALL_ACCOUNTS_HEALTH,
    ACCOUNTS_GET_ACCOUNT_HEALTH,
    ACCOUNTS_GET_GOOGLE_BUSINESS_REVIEWS,
    ACCOUNTS_REPLY_TO_REVIEW,
    PROFILES_LIST_PROFILES,
    PROFILES_CREATE_PROFILE,
    PROFILES_GET_PROFILE,
    PROFILES_UPDATE_PROFILE,
    PROFILES_DELETE_PROFILE,
    ANALYTICS_GET_ANALYTICS,
    ANALYTICS_GET_YOUTUBE_DAILY_VIEWS,
    ACCOUNT_GROUPS_LIST_ACCOUNT_GROUPS,
    ACCOUNT_GROUPS_CREATE_ACCOUNT_GROUP,
    ACCOUNT_GROUPS_UPDATE_ACCOUNT_GROUP,
    ACCOUNT_GROUPS_DELETE_ACCOUNT_GROUP,
    QUEUE_LIST_QUEUE_SLOTS,
    QUEUE_CREATE_QUEUE_SLOT,
    QUEUE_UPDATE_QUEUE_SLOT,
    QUEUE_DELETE_QUEUE_SLOT,
    QUEUE_PREVIEW_QUEUE,
    QUEUE_GET_NEXT_QUEUE_SLOT,
    WEBHOOKS_GET_WEBHOOK_SETTINGS,
    WEBHOOKS_CREATE_WEBHOOK_SETTINGS,
    WEBHOOKS_UPDATE_WEBHOOK_SETTINGS,
    WEBHOOKS_DELETE_WEBHOOK_SETTINGS,
    WEBHOOKS_TEST_WEBHOOK,
    WEBHOOKS_GET_WEBHOOK_LOGS,
    API_KEYS_LIST_API_KEYS,
    API_KEYS_CREATE_API_KEY,
    API_KEYS_DELETE_API_KEY,
    MEDIA_GET_MEDIA_PRESIGNED_URL,
    TOOLS_VALIDATE_POST_LENGTH,
    TOOLS_VALIDATE_POST,
    TOOLS_VALIDATE_MEDIA,
    TOOLS_CHECK_HASHTAGS,
    USERS_LIST_USERS,
    USERS_GET_USER,
    USAGE_GET_USAGE_STATS,
    LOGS_LIST_LOGS,
    LOGS_GET_LOG,
    CONNECT_GET_CONNECT_URL,
    CONNECT_HANDLE_OAUTH_CALLBACK,
    CONNECT_GET_PENDING_OAUTH_DATA,
    CONNECT_FACEBOOK_LIST_FACEBOOK_PAGES,
    CONNECT_FACEBOOK_SELECT_FACEBOOK_PAGE,
    CONNECT_LINKEDIN_LIST_LINKEDIN_ORGANIZATIONS,
    CONNECT_LINKEDIN_SELECT_LINKEDIN_ORGANIZATION,
    CONNECT_PINTEREST_LIST_PINTEREST_BOARDS,
    CONNECT_PINTEREST_SELECT_PINTEREST_BOARD,
    CONNECT_GOOGLE_BUSINESS_LIST_GOOGLE_BUSINESS_LOCATIONS,
    CONNECT_GOOGLE_BUSINESS_SELECT_GOOGLE_BUSINESS_LOCATION,
    CONNECT_TELEGRAM_GET_TELEGRAM_CONNECT_STATUS,
    CONNECT_TELEGRAM_INITIATE_TELEGRAM_CONNECT,
    CONNECT_TELEGRAM_COMPLETE_TELEGRAM_CONNECT,
    CONNECT_BLUESKY_CONNECT_BLUESKY_CREDENTIALS,
    REDDIT_SEARCH_REDDIT,
    REDDIT_GET_REDDIT_FEED,
    INVITES_CREATE_INVITE_TOKEN,
    OTHER_LIST_HEALTH,
];
impl Late {
    /// Operations in the `posts` namespace.
    pub fn posts(&self) -> Posts<'_> {
        Posts { client: self }
    }
    /// Operations in the `accounts` namespace.
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }
    /// Operations in the `profiles` namespace.
    pub fn profiles(&self) -> Profiles<'_> {
        Profiles { client: self }
    }
    /// Operations in the `analytics` namespace.
    pub fn analytics(&self) -> Analytics<'_> {
        Analytics { client: self }
    }
    /// Operations in the `accountGroups` namespace.
    pub fn account_groups(&self) -> AccountGroups<'_> {
        AccountGroups { client: self }
    }
    /// Operations in the `queue` namespace.
    pub fn queue(&self) -> Queue<'_> {
        Queue { client: self }
    }
    /// Operations in the `webhooks` namespace.
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks { client: self }
    }
    /// Operations in the `apiKeys` namespace.
    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys { client: self }
    }
    /// Operations in the `media` namespace.
    pub fn media(&self) -> Media<'_> {
        Media { client: self }
    }
    /// Operations in the `tools` namespace.
    pub fn tools(&self) -> Tools<'_> {
        Tools { client: self }
    }
    /// Operations in the `users` namespace.
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }
    /// Operations in the `usage` namespace.
    pub fn usage(&self) -> Usage<'_> {
        Usage { client: self }
    }
    /// Operations in the `logs` namespace.
    pub fn logs(&self) -> Logs<'_> {
        Logs { client: self }
    }
    /// Operations in the `connect` namespace.
    pub fn connect(&self) -> Connect<'_> {
        Connect { client: self }
    }
    /// Operations in the `reddit` namespace.
    pub fn reddit(&self) -> Reddit<'_> {
        Reddit { client: self }
    }
    /// Operations in the `invites` namespace.
    pub fn invites(&self) -> Invites<'_> {
        Invites { client: self }
    }
    /// Operations in the `other` namespace.
    pub fn other(&self) -> Other<'_> {
        Other { client: self }
    }
}
/// Operations in the `posts` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Posts<'a> {
    client: &'a Late,
}
impl Posts<'_> {
    /// List posts
    ///
    /// `GET /v1/posts`
    pub async fn list_posts<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&POSTS_LIST_POSTS, args).await
    }
    /// Create a draft, scheduled, or immediate post
    ///
    /// `POST /v1/posts`
    pub async fn create_post<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&POSTS_CREATE_POST, args).await
    }
    /// Get a post
    ///
    /// `GET /v1/posts/{postId}`
    pub async fn get_post<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&POSTS_GET_POST, args).await
    }
    /// Update a post
    ///
    /// `PUT /v1/posts/{postId}`
    pub async fn update_post<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&POSTS_UPDATE_POST, args).await
    }
    /// Delete a post
    ///
    /// `DELETE /v1/posts/{postId}`
    pub async fn delete_post<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&POSTS_DELETE_POST, args).await
    }
    /// Retry publishing a failed post
    ///
    /// `POST /v1/posts/{postId}/retry`
    pub async fn retry_post<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&POSTS_RETRY_POST, args).await
    }
    /// Validate and schedule posts from CSV
    ///
    /// `POST /v1/posts/bulk-upload`
    pub async fn bulk_upload_posts<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&POSTS_BULK_UPLOAD_POSTS, args).await
    }
}
/// Operations in the `accounts` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Accounts<'a> {
    client: &'a Late,
}
impl Accounts<'_> {
    /// List connected accounts
    ///
    /// `GET /v1/accounts`
    pub async fn list_accounts<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNTS_LIST_ACCOUNTS, args).await
    }
    /// Update a connected account
    ///
    /// `PUT /v1/accounts/{accountId}`
    pub async fn update_account<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNTS_UPDATE_ACCOUNT, args).await
    }
    /// Disconnect an account
    ///
    /// `DELETE /v1/accounts/{accountId}`
    pub async fn delete_account<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNTS_DELETE_ACCOUNT, args).await
    }
    /// Get follower statistics
    ///
    /// `GET /v1/accounts/follower-stats`
    pub async fn get_follower_stats<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNTS_GET_FOLLOWER_STATS, args).await
    }
    /// Check health of all accounts
    ///
    /// `GET /v1/accounts/health`
    pub async fn get_all_accounts_health<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNTS_GET_ALL_ACCOUNTS_HEALTH, args).await
    }
    /// Check health of one account
    ///
    /// `GET /v1/accounts/{accountId}/health`
    pub async fn get_account_health<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNTS_GET_ACCOUNT_HEALTH, args).await
    }
    /// List Google Business reviews
    ///
    /// `GET /v1/accounts/{accountId}/gmb-reviews`
    pub async fn get_google_business_reviews<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNTS_GET_GOOGLE_BUSINESS_REVIEWS, args).await
    }
    /// Reply to a review
    ///
    /// `POST /v1/accounts/{accountId}/reviews/{reviewId}/reply`
    pub async fn reply_to_review<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNTS_REPLY_TO_REVIEW, args).await
    }
}
/// Operations in the `profiles` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Profiles<'a> {
    client: &'a Late,
}
impl Profiles<'_> {
    /// List profiles
    ///
    /// `GET /v1/profiles`
    pub async fn list_profiles<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&PROFILES_LIST_PROFILES, args).await
    }
    /// Create a profile
    ///
    /// `POST /v1/profiles`
    pub async fn create_profile<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&PROFILES_CREATE_PROFILE, args).await
    }
    /// Get a profile
    ///
    /// `GET /v1/profiles/{profileId}`
    pub async fn get_profile<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&PROFILES_GET_PROFILE, args).await
    }
    /// Update a profile
    ///
    /// `PUT /v1/profiles/{profileId}`
    pub async fn update_profile<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&PROFILES_UPDATE_PROFILE, args).await
    }
    /// Delete a profile
    ///
    /// `DELETE /v1/profiles/{profileId}`
    pub async fn delete_profile<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&PROFILES_DELETE_PROFILE, args).await
    }
}
/// Operations in the `analytics` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Analytics<'a> {
    client: &'a Late,
}
impl Analytics<'_> {
    /// Get post analytics
    ///
    /// `GET /v1/analytics`
    pub async fn get_analytics<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ANALYTICS_GET_ANALYTICS, args).await
    }
    /// Get daily YouTube views
    ///
    /// `GET /v1/analytics/youtube/daily-views`
    pub async fn get_youtube_daily_views<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ANALYTICS_GET_YOUTUBE_DAILY_VIEWS, args).await
    }
}
/// Operations in the `accountGroups` namespace.
#[derive(Debug, Clone, Copy)]
pub struct AccountGroups<'a> {
    client: &'a Late,
}
impl AccountGroups<'_> {
    /// List account groups
    ///
    /// `GET /v1/account-groups`
    pub async fn list_account_groups<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNT_GROUPS_LIST_ACCOUNT_GROUPS, args).await
    }
    /// Create an account group
    ///
    /// `POST /v1/account-groups`
    pub async fn create_account_group<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNT_GROUPS_CREATE_ACCOUNT_GROUP, args).await
    }
    /// Update an account group
    ///
    /// `PUT /v1/account-groups/{groupId}`
    pub async fn update_account_group<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNT_GROUPS_UPDATE_ACCOUNT_GROUP, args).await
    }
    /// Delete an account group
    ///
    /// `DELETE /v1/account-groups/{groupId}`
    pub async fn delete_account_group<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&ACCOUNT_GROUPS_DELETE_ACCOUNT_GROUP, args).await
    }
}
/// Operations in the `queue` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Queue<'a> {
    client: &'a Late,
}
impl Queue<'_> {
    /// List queue slots
    ///
    /// `GET /v1/queue/slots`
    pub async fn list_queue_slots<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&QUEUE_LIST_QUEUE_SLOTS, args).await
    }
    /// Create a queue
    ///
    /// `POST /v1/queue/slots`
    pub async fn create_queue_slot<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&QUEUE_CREATE_QUEUE_SLOT, args).await
    }
    /// Update a queue
    ///
    /// `PUT /v1/queue/slots`
    pub async fn update_queue_slot<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&QUEUE_UPDATE_QUEUE_SLOT, args).await
    }
    /// Delete a queue
    ///
    /// `DELETE /v1/queue/slots`
    pub async fn delete_queue_slot<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&QUEUE_DELETE_QUEUE_SLOT, args).await
    }
    /// Preview upcoming queue slots
    ///
    /// `GET /v1/queue/preview`
    pub async fn preview_queue<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&QUEUE_PREVIEW_QUEUE, args).await
    }
    /// Get the next available slot
    ///
    /// `GET /v1/queue/next-slot`
    pub async fn get_next_queue_slot<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&QUEUE_GET_NEXT_QUEUE_SLOT, args).await
    }
}
/// Operations in the `webhooks` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a Late,
}
impl Webhooks<'_> {
    /// Get webhook settings
    ///
    /// `GET /v1/webhooks/settings`
    pub async fn get_webhook_settings<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&WEBHOOKS_GET_WEBHOOK_SETTINGS, args).await
    }
    /// Create a webhook
    ///
    /// `POST /v1/webhooks/settings`
    pub async fn create_webhook_settings<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&WEBHOOKS_CREATE_WEBHOOK_SETTINGS, args).await
    }
    /// Update a webhook
    ///
    /// `PUT /v1/webhooks/settings`
    pub async fn update_webhook_settings<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&WEBHOOKS_UPDATE_WEBHOOK_SETTINGS, args).await
    }
    /// Delete a webhook
    ///
    /// `DELETE /v1/webhooks/settings`
    pub async fn delete_webhook_settings<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&WEBHOOKS_DELETE_WEBHOOK_SETTINGS, args).await
    }
    /// Send a test webhook
    ///
    /// `POST /v1/webhooks/test`
    pub async fn test_webhook<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&WEBHOOKS_TEST_WEBHOOK, args).await
    }
    /// Get webhook delivery logs
    ///
    /// `GET /v1/webhooks/logs`
    pub async fn get_webhook_logs<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&WEBHOOKS_GET_WEBHOOK_LOGS, args).await
    }
}
/// Operations in the `apiKeys` namespace.
#[derive(Debug, Clone, Copy)]
pub struct ApiKeys<'a> {
    client: &'a Late,
}
impl ApiKeys<'_> {
    /// List API keys
    ///
    /// `GET /v1/api-keys`
    pub async fn list_api_keys<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&API_KEYS_LIST_API_KEYS, args).await
    }
    /// Create an API key
    ///
    /// `POST /v1/api-keys`
    pub async fn create_api_key<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&API_KEYS_CREATE_API_KEY, args).await
    }
    /// Delete an API key
    ///
    /// `DELETE /v1/api-keys/{keyId}`
    pub async fn delete_api_key<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&API_KEYS_DELETE_API_KEY, args).await
    }
}
/// Operations in the `media` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Media<'a> {
    client: &'a Late,
}
impl Media<'_> {
    /// Get a presigned upload URL
    ///
    /// `POST /v1/media/presign`
    pub async fn get_media_presigned_url<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&MEDIA_GET_MEDIA_PRESIGNED_URL, args).await
    }
}
/// Operations in the `tools` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Tools<'a> {
    client: &'a Late,
}
impl Tools<'_> {
    /// Check post length per platform
    ///
    /// `POST /v1/tools/validate/post-length`
    pub async fn validate_post_length<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&TOOLS_VALIDATE_POST_LENGTH, args).await
    }
    /// Validate post content
    ///
    /// `POST /v1/tools/validate/post`
    pub async fn validate_post<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&TOOLS_VALIDATE_POST, args).await
    }
    /// Validate media against platform limits
    ///
    /// `POST /v1/tools/validate/media`
    pub async fn validate_media<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&TOOLS_VALIDATE_MEDIA, args).await
    }
    /// Check hashtags for bans
    ///
    /// `POST /v1/tools/hashtag-checker`
    pub async fn check_hashtags<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&TOOLS_CHECK_HASHTAGS, args).await
    }
}
/// Operations in the `users` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a Late,
}
impl Users<'_> {
    /// List team users
    ///
    /// `GET /v1/users`
    pub async fn list_users<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&USERS_LIST_USERS, args).await
    }
    /// Get a team user
    ///
    /// `GET /v1/users/{userId}`
    pub async fn get_user<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&USERS_GET_USER, args).await
    }
}
/// Operations in the `usage` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Usage<'a> {
    client: &'a Late,
}
impl Usage<'_> {
    /// Get plan usage
    ///
    /// `GET /v1/usage-stats`
    pub async fn get_usage_stats<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&USAGE_GET_USAGE_STATS, args).await
    }
}
/// Operations in the `logs` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Logs<'a> {
    client: &'a Late,
}
impl Logs<'_> {
    /// List publishing logs
    ///
    /// `GET /v1/logs`
    pub async fn list_logs<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&LOGS_LIST_LOGS, args).await
    }
    /// Get a publishing log entry
    ///
    /// `GET /v1/logs/{logId}`
    pub async fn get_log<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&LOGS_GET_LOG, args).await
    }
}
/// Operations in the `connect` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Connect<'a> {
    client: &'a Late,
}
impl<'a> Connect<'a> {
    /// Start the OAuth flow for a platform
    ///
    /// `GET /v1/connect/{platform}`
    pub async fn get_connect_url<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_GET_CONNECT_URL, args).await
    }
    /// Complete the OAuth callback
    ///
    /// `POST /v1/connect/{platform}`
    pub async fn handle_oauth_callback<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_HANDLE_OAUTH_CALLBACK, args).await
    }
    /// Get pending OAuth selection data
    ///
    /// `GET /v1/connect/pending-data`
    pub async fn get_pending_oauth_data<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_GET_PENDING_OAUTH_DATA, args).await
    }
    /// Operations in the `connect.facebook` namespace.
    pub fn facebook(&self) -> ConnectFacebook<'a> {
        ConnectFacebook {
            client: self.client,
        }
    }
    /// Operations in the `connect.linkedin` namespace.
    pub fn linkedin(&self) -> ConnectLinkedin<'a> {
        ConnectLinkedin {
            client: self.client,
        }
    }
    /// Operations in the `connect.pinterest` namespace.
    pub fn pinterest(&self) -> ConnectPinterest<'a> {
        ConnectPinterest {
            client: self.client,
        }
    }
    /// Operations in the `connect.googleBusiness` namespace.
    pub fn google_business(&self) -> ConnectGoogleBusiness<'a> {
        ConnectGoogleBusiness {
            client: self.client,
        }
    }
    /// Operations in the `connect.telegram` namespace.
    pub fn telegram(&self) -> ConnectTelegram<'a> {
        ConnectTelegram {
            client: self.client,
        }
    }
    /// Operations in the `connect.bluesky` namespace.
    pub fn bluesky(&self) -> ConnectBluesky<'a> {
        ConnectBluesky {
            client: self.client,
        }
    }
}
/// Operations in the `connect.facebook` namespace.
#[derive(Debug, Clone, Copy)]
pub struct ConnectFacebook<'a> {
    client: &'a Late,
}
impl ConnectFacebook<'_> {
    /// List Facebook pages
    ///
    /// `GET /v1/connect/facebook/select-page`
    pub async fn list_facebook_pages<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_FACEBOOK_LIST_FACEBOOK_PAGES, args).await
    }
    /// Select a Facebook page
    ///
    /// `POST /v1/connect/facebook/select-page`
    pub async fn select_facebook_page<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_FACEBOOK_SELECT_FACEBOOK_PAGE, args).await
    }
}
/// Operations in the `connect.linkedin` namespace.
#[derive(Debug, Clone, Copy)]
pub struct ConnectLinkedin<'a> {
    client: &'a Late,
}
impl ConnectLinkedin<'_> {
    /// List LinkedIn organizations
    ///
    /// `GET /v1/connect/linkedin/organizations`
    pub async fn list_linkedin_organizations<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_LINKEDIN_LIST_LINKEDIN_ORGANIZATIONS, args).await
    }
    /// Select a LinkedIn organization
    ///
    /// `POST /v1/connect/linkedin/select-organization`
    pub async fn select_linkedin_organization<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_LINKEDIN_SELECT_LINKEDIN_ORGANIZATION, args).await
    }
}
/// Operations in the `connect.pinterest` namespace.
#[derive(Debug, Clone, Copy)]
pub struct ConnectPinterest<'a> {
    client: &'a Late,
}
impl ConnectPinterest<'_> {
    /// List Pinterest boards
    ///
    /// `GET /v1/connect/pinterest/select-board`
    pub async fn list_pinterest_boards<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_PINTEREST_LIST_PINTEREST_BOARDS, args).await
    }
    /// Select a Pinterest board
    ///
    /// `POST /v1/connect/pinterest/select-board`
    pub async fn select_pinterest_board<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_PINTEREST_SELECT_PINTEREST_BOARD, args).await
    }
}
/// Operations in the `connect.googleBusiness` namespace.
#[derive(Debug, Clone, Copy)]
pub struct ConnectGoogleBusiness<'a> {
    client: &'a Late,
}
impl ConnectGoogleBusiness<'_> {
    /// List Google Business locations
    ///
    /// `GET /v1/connect/googlebusiness/locations`
    pub async fn list_google_business_locations<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client
            .execute(&CONNECT_GOOGLE_BUSINESS_LIST_GOOGLE_BUSINESS_LOCATIONS, args)
            .await
    }
    /// Select a Google Business location
    ///
    /// `POST /v1/connect/googlebusiness/select-location`
    pub async fn select_google_business_location<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client
            .execute(&CONNECT_GOOGLE_BUSINESS_SELECT_GOOGLE_BUSINESS_LOCATION, args)
            .await
    }
}
/// Operations in the `connect.telegram` namespace.
#[derive(Debug, Clone, Copy)]
pub struct ConnectTelegram<'a> {
    client: &'a Late,
}
impl ConnectTelegram<'_> {
    /// Get Telegram connection status
    ///
    /// `GET /v1/connect/telegram`
    pub async fn get_telegram_connect_status<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_TELEGRAM_GET_TELEGRAM_CONNECT_STATUS, args).await
    }
    /// Start a Telegram connection
    ///
    /// `POST /v1/connect/telegram`
    pub async fn initiate_telegram_connect<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_TELEGRAM_INITIATE_TELEGRAM_CONNECT, args).await
    }
    /// Complete a Telegram connection
    ///
    /// `PATCH /v1/connect/telegram`
    pub async fn complete_telegram_connect<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_TELEGRAM_COMPLETE_TELEGRAM_CONNECT, args).await
    }
}
/// Operations in the `connect.bluesky` namespace.
#[derive(Debug, Clone, Copy)]
pub struct ConnectBluesky<'a> {
    client: &'a Late,
}
impl ConnectBluesky<'_> {
    /// Connect Bluesky with an app password
    ///
    /// `POST /v1/connect/bluesky/credentials`
    pub async fn connect_bluesky_credentials<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&CONNECT_BLUESKY_CONNECT_BLUESKY_CREDENTIALS, args).await
    }
}
/// Operations in the `reddit` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Reddit<'a> {
    client: &'a Late,
}
impl Reddit<'_> {
    /// Search Reddit posts
    ///
    /// `GET /v1/reddit/search`
    pub async fn search_reddit<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&REDDIT_SEARCH_REDDIT, args).await
    }
    /// Get a subreddit feed
    ///
    /// `GET /v1/reddit/feed`
    pub async fn get_reddit_feed<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&REDDIT_GET_REDDIT_FEED, args).await
    }
}
/// Operations in the `invites` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Invites<'a> {
    client: &'a Late,
}
impl Invites<'_> {
    /// Create a team invite token
    ///
    /// `POST /v1/invite/tokens`
    pub async fn create_invite_token<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&INVITES_CREATE_INVITE_TOKEN, args).await
    }
}
/// Operations in the `other` namespace.
#[derive(Debug, Clone, Copy)]
pub struct Other<'a> {
    client: &'a Late,
}
impl Other<'_> {
    /// Service health
    ///
    /// `GET /v1/health`
    pub async fn list_health<T: DeserializeOwned>(
        &self,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        self.client.execute(&OTHER_LIST_HEALTH, args).await
    }
}
