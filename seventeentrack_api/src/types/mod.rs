mod response;
pub use self::response::{ApiErrorDetail, Rejected, TrackData, TrackResponse};
