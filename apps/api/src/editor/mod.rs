// Form layer: edits, id generation and the session that owns the current
// snapshot. The document operations themselves live in models::resume.

pub mod edits;
pub mod handlers;
pub mod ids;
pub mod session;
