//! 外部服务客户端

pub mod meet;

pub use meet::{MeetClient, MeetError, MeetEvent};
