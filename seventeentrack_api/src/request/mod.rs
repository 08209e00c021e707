mod common;
pub use self::common::{check_batch_size, Carrier, MAX_BATCH_SIZE};
mod track_number;
pub use self::track_number::TrackNumber;

mod register;
pub use self::register::RegisterItem;

mod change_carrier;
pub use self::change_carrier::ChangeCarrierItem;

mod change_info;
pub use self::change_info::ChangeInfoItem;
