//! Common traits for records served by the REST API

use super::status::RecordStatus;

/// A record as it appears in a list response.
///
/// `id` is the server-assigned `_id`; it never changes once issued.
pub trait Record {
    fn id(&self) -> &str;

    /// Raw `createdAt` value, if the resource exposes one.
    fn created_at(&self) -> Option<&str> {
        None
    }

    fn status(&self) -> Option<RecordStatus> {
        None
    }
}

/// A record that keeps an explicit position inside a manually ordered list.
pub trait Positioned: Record {
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}
