//! Central place for the fixed paths, variable names and placeholder tokens.
//! Update these and all three subcommands pick them up.

pub struct Defaults;

impl Defaults {
    /* Input */
    pub const ENV_FILE: &'static str = ".env";

    /* Web client ID injection */
    pub const WEB_CLIENT_ID_VAR: &'static str = "GOOGLE_WEB_CLIENT_ID";
    pub const WEB_CLIENT_ID_PLACEHOLDER: &'static str = "GOOGLE_WEB_CLIENT_ID_PLACEHOLDER";

    /* Google Maps API key injection */
    pub const MAPS_API_KEY_VAR: &'static str = "GOOGLE_MAPS_API_KEY";
    pub const MAPS_KEY_PLACEHOLDER: &'static str = "YOUR_GOOGLE_MAPS_API_KEY_HERE";
    // Sample value shipped in .env templates; treated the same as unset.
    pub const MAPS_KEY_SENTINEL: &'static str = "your_api_key_here";

    /* Targets */
    pub const WEB_INDEX_PATH: &'static str = "web/index.html";
    pub const ANDROID_MANIFEST_PATH: &'static str = "android/app/src/main/AndroidManifest.xml";
    pub const IOS_PLIST_PATH: &'static str = "ios/Runner/Info.plist";
}
