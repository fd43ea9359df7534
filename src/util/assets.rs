//! Static image paths served alongside the compiled bundle.

pub const EVENT_FORUM: &str = "/images/event_forum.png";
pub const EVENT_PICNIC: &str = "/images/event_picnic.jpg";
pub const EVENT_ROUNDTABLE: &str = "/images/event_roundtable.png";
pub const NEWS_PREVIEW_IMAGE: &str = "/images/headspace.png";
pub const CALENDAR_ICON: &str = "/images/calendar_icon.png";
pub const SEND_ICON: &str = "/images/send_icon.png";
pub const REPLIES_ICON: &str = "/images/replies_icon.png";
pub const VIEWS_ICON: &str = "/images/views_icon.png";
