/// UseCase metadata used for routing and UI labels
pub trait UseCaseMetadata {
    /// Display name for the UI (e.g. "Upload Documents")
    fn display_name() -> &'static str;

    /// Backend endpoint path, relative to the API base URL
    fn endpoint() -> &'static str;
}
